use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    Unauthorized = 3,

    // --- Input validation (4–5) ---
    InvalidAmount = 4,
    InvalidConfig = 5,

    // --- Ledger (6–9) ---
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    HookLocked = 8,
    Overflow = 9,
}
