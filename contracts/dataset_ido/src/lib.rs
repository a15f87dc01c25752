#![no_std]

mod contract;
mod curve;
mod errors;
mod events;
mod sale_token;
mod storage;
mod types;


pub use contract::{DatasetIdoContract, DatasetIdoContractClient};
pub use curve::BondingCurve;
pub use errors::Error;
pub use types::{
    CurveConfig, LinearCurve, SaleConfig, SaleState, SaleStatus, Settlement, TradeReceipt,
    VirtualAmmCurve, MAX_FEE_BPS,
};
