use fp_math::{mul_div_up, BPS_DENOMINATOR};
use soroban_sdk::{contracttype, Address, Env};

use crate::curve::BondingCurve;
use crate::errors::Error;

/// Trade fees above 10% are rejected at initialization.
pub const MAX_FEE_BPS: u32 = 1_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Active = 0,
    Launched = 1,
    Failed = 2,
}

/// Constant-product curve over virtual reserves.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VirtualAmmCurve {
    pub virtual_base: i128,  // virtual token reserve, must exceed the sale target
    pub virtual_quote: i128, // virtual quote reserve
}

/// Spot price `initial_price + slope * sold / SCALE`, both scaled by `SCALE`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LinearCurve {
    pub initial_price: i128,
    pub slope: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CurveConfig {
    VirtualAmm(VirtualAmmCurve),
    Linear(LinearCurve),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub project: Address,     // receives the project share at launch
    pub treasury: Address,    // receives fees and the protocol share
    pub quote_token: Address, // payment asset
    pub sale_token: Address,  // dataset token; this contract must be its minter
    pub curve: CurveConfig,
    pub target_tokens: i128,
    pub min_raise_bps: u32, // share of target_tokens needed to launch
    pub deadline: u64,
    pub alpha_project_bps: u32,
    pub beta_lp_bps: u32,
    pub fee_bps: u32,
}

impl SaleConfig {
    pub fn validate(&self, now: u64) -> Result<(), Error> {
        if self.target_tokens <= 0 {
            return Err(Error::InvalidConfig);
        }
        if self.min_raise_bps == 0 || self.min_raise_bps > BPS_DENOMINATOR as u32 {
            return Err(Error::InvalidConfig);
        }
        if self.deadline <= now {
            return Err(Error::InvalidConfig);
        }
        let full = BPS_DENOMINATOR as u32;
        if self.alpha_project_bps >= full
            || self.beta_lp_bps >= full
            || self.alpha_project_bps + self.beta_lp_bps > full
        {
            return Err(Error::InvalidConfig);
        }
        if self.fee_bps > MAX_FEE_BPS {
            return Err(Error::InvalidConfig);
        }
        if self.quote_token == self.sale_token {
            return Err(Error::InvalidConfig);
        }
        self.curve.validate(self.target_tokens)
    }

    /// Tokens that must be sold by the deadline for the sale to launch.
    pub fn min_tokens(&self) -> Result<i128, Error> {
        Ok(mul_div_up(
            self.target_tokens,
            self.min_raise_bps as i128,
            BPS_DENOMINATOR,
        )?)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub status: SaleStatus,
    pub tokens_sold: i128,
    pub quote_raised: i128,
    pub fees_collected: i128,
    pub refund_rate: i128, // quote per token scaled by SCALE, frozen at failure
    pub refund_pool: i128, // quote held when the sale failed
    pub refunds_paid: i128,
}

impl SaleState {
    pub fn new() -> Self {
        Self {
            status: SaleStatus::Active,
            tokens_sold: 0,
            quote_raised: 0,
            fees_collected: 0,
            refund_rate: 0,
            refund_pool: 0,
            refunds_paid: 0,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Settlement {
    pub project_amount: i128,
    pub lp_locked: i128,
    pub protocol_amount: i128,
    pub final_price: i128,
    pub settled_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TradeReceipt {
    pub tokens: i128,
    pub quote_amount: i128, // curve cost on buy, gross proceeds on sell
    pub fee: i128,
    pub price_after: i128,
    pub status: SaleStatus,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    State,
    Settlement,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
