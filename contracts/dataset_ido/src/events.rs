use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{SaleState, Settlement};

// Payloads carry post-operation totals so an indexer can rebuild sale state
// without re-evaluating the curve.

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleCreatedEvent {
    pub target_tokens: i128,
    pub min_tokens: i128,
    pub deadline: u64,
    pub initial_price: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TradeEvent {
    pub trader: Address,
    pub tokens: i128,
    pub quote_amount: i128,
    pub fee: i128,
    pub tokens_sold: i128,
    pub quote_raised: i128,
    pub price: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LaunchedEvent {
    pub tokens_sold: i128,
    pub quote_raised: i128,
    pub project_amount: i128,
    pub lp_locked: i128,
    pub protocol_amount: i128,
    pub final_price: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FailedEvent {
    pub tokens_sold: i128,
    pub refund_pool: i128,
    pub refund_rate: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RefundEvent {
    pub user: Address,
    pub tokens_burned: i128,
    pub amount: i128,
    pub refunds_paid: i128,
}

pub fn emit_sale_created(
    env: &Env,
    target_tokens: i128,
    min_tokens: i128,
    deadline: u64,
    initial_price: i128,
) {
    env.events().publish(
        ("IDO", symbol_short!("created")),
        SaleCreatedEvent {
            target_tokens,
            min_tokens,
            deadline,
            initial_price,
        },
    );
}

pub fn emit_purchased(
    env: &Env,
    buyer: Address,
    tokens: i128,
    cost: i128,
    fee: i128,
    state: &SaleState,
    price: i128,
) {
    env.events().publish(
        ("IDO", symbol_short!("buy")),
        TradeEvent {
            trader: buyer,
            tokens,
            quote_amount: cost,
            fee,
            tokens_sold: state.tokens_sold,
            quote_raised: state.quote_raised,
            price,
        },
    );
}

pub fn emit_sold(
    env: &Env,
    seller: Address,
    tokens: i128,
    proceeds: i128,
    fee: i128,
    state: &SaleState,
    price: i128,
) {
    env.events().publish(
        ("IDO", symbol_short!("sell")),
        TradeEvent {
            trader: seller,
            tokens,
            quote_amount: proceeds,
            fee,
            tokens_sold: state.tokens_sold,
            quote_raised: state.quote_raised,
            price,
        },
    );
}

pub fn emit_launched(env: &Env, state: &SaleState, settlement: &Settlement) {
    env.events().publish(
        ("IDO", symbol_short!("launched")),
        LaunchedEvent {
            tokens_sold: state.tokens_sold,
            quote_raised: state.quote_raised,
            project_amount: settlement.project_amount,
            lp_locked: settlement.lp_locked,
            protocol_amount: settlement.protocol_amount,
            final_price: settlement.final_price,
        },
    );
}

pub fn emit_failed(env: &Env, state: &SaleState) {
    env.events().publish(
        ("IDO", symbol_short!("failed")),
        FailedEvent {
            tokens_sold: state.tokens_sold,
            refund_pool: state.refund_pool,
            refund_rate: state.refund_rate,
        },
    );
}

pub fn emit_refund_claimed(
    env: &Env,
    user: Address,
    tokens_burned: i128,
    amount: i128,
    refunds_paid: i128,
) {
    env.events().publish(
        ("IDO", symbol_short!("refund")),
        RefundEvent {
            user,
            tokens_burned,
            amount,
            refunds_paid,
        },
    );
}
