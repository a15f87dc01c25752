// tests/integration/mod.rs
mod dataset_lifecycle;
