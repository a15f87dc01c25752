use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PoolConfig {
    pub token: Address,       // dataset token; the only caller of on_balance_change
    pub quote_token: Address, // asset rent and revenue are paid in
    pub governance: Address,  // may update the rental price
    pub rental_price: i128,   // quote per period
    pub period_seconds: u64,
}

impl PoolConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.rental_price <= 0 || self.period_seconds == 0 {
            return Err(Error::InvalidConfig);
        }
        if self.token == self.quote_token {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PoolState {
    pub acc_revenue_per_share: i128, // scaled by SCALE, never decreases
    pub total_shares: i128,
    pub total_revenue_added: i128,
    pub total_claimed: i128,
    pub undistributed: i128, // received but not yet in the accumulator
}

impl PoolState {
    pub fn new() -> Self {
        Self {
            acc_revenue_per_share: 0,
            total_shares: 0,
            total_revenue_added: 0,
            total_claimed: 0,
            undistributed: 0,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct HolderPosition {
    pub balance: i128,
    pub reward_debt: i128,
    pub accrued_unclaimed: i128,
    pub total_claimed: i128,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    State,
    Position(Address),
    Access(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
