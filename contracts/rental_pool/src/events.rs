use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{HolderPosition, PoolState};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RevenueEvent {
    pub from: Address,
    pub amount: i128,
    pub distributed: i128,
    pub acc_revenue_per_share: i128,
    pub undistributed: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RentedEvent {
    pub renter: Address,
    pub periods: u32,
    pub paid: i128,
    pub expires_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DividendClaimedEvent {
    pub holder: Address,
    pub amount: i128,
    pub holder_total_claimed: i128,
    pub pool_total_claimed: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CheckpointEvent {
    pub holder: Address,
    pub old_balance: i128,
    pub new_balance: i128,
    pub accrued_unclaimed: i128,
    pub total_shares: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RentalPriceEvent {
    pub caller: Address,
    pub old_price: i128,
    pub new_price: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SweptEvent {
    pub admin: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_revenue_added(
    env: &Env,
    from: Address,
    amount: i128,
    distributed: i128,
    state: &PoolState,
) {
    env.events().publish(
        ("POOL", symbol_short!("revenue")),
        RevenueEvent {
            from,
            amount,
            distributed,
            acc_revenue_per_share: state.acc_revenue_per_share,
            undistributed: state.undistributed,
        },
    );
}

pub fn emit_rented(env: &Env, renter: Address, periods: u32, paid: i128, expires_at: u64) {
    env.events().publish(
        ("POOL", symbol_short!("rented")),
        RentedEvent {
            renter,
            periods,
            paid,
            expires_at,
        },
    );
}

pub fn emit_dividend_claimed(
    env: &Env,
    holder: Address,
    amount: i128,
    position: &HolderPosition,
    state: &PoolState,
) {
    env.events().publish(
        ("POOL", symbol_short!("claimed")),
        DividendClaimedEvent {
            holder,
            amount,
            holder_total_claimed: position.total_claimed,
            pool_total_claimed: state.total_claimed,
        },
    );
}

pub fn emit_checkpoint(
    env: &Env,
    holder: Address,
    old_balance: i128,
    position: &HolderPosition,
    state: &PoolState,
) {
    env.events().publish(
        ("POOL", symbol_short!("checkpt")),
        CheckpointEvent {
            holder,
            old_balance,
            new_balance: position.balance,
            accrued_unclaimed: position.accrued_unclaimed,
            total_shares: state.total_shares,
        },
    );
}

pub fn emit_rental_price_set(env: &Env, caller: Address, old_price: i128, new_price: i128) {
    env.events().publish(
        ("POOL", symbol_short!("price")),
        RentalPriceEvent {
            caller,
            old_price,
            new_price,
        },
    );
}

pub fn emit_governance_set(env: &Env, admin: Address, governance: Address) {
    env.events()
        .publish(("POOL", symbol_short!("gov"), admin), governance);
}

pub fn emit_swept(env: &Env, admin: Address, to: Address, amount: i128) {
    env.events()
        .publish(("POOL", symbol_short!("swept")), SweptEvent { admin, to, amount });
}
