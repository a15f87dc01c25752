use soroban_sdk::{contracttype, symbol_short, Address, Env};

// Topic layout: ("DTOKEN", symbol_short!("…")); balances are post-mutation.

#[derive(Clone)]
#[contracttype]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub from_balance: i128,
    pub to_balance: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct SupplyEvent {
    pub holder: Address,
    pub amount: i128,
    pub balance: i128,
    pub total_supply: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct ApproveEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub fn emit_transfer(
    env: &Env,
    from: Address,
    to: Address,
    amount: i128,
    from_balance: i128,
    to_balance: i128,
) {
    env.events().publish(
        ("DTOKEN", symbol_short!("transfer")),
        TransferEvent {
            from,
            to,
            amount,
            from_balance,
            to_balance,
        },
    );
}

pub fn emit_mint(env: &Env, to: Address, amount: i128, balance: i128, total_supply: i128) {
    env.events().publish(
        ("DTOKEN", symbol_short!("mint")),
        SupplyEvent {
            holder: to,
            amount,
            balance,
            total_supply,
        },
    );
}

pub fn emit_burn(env: &Env, from: Address, amount: i128, balance: i128, total_supply: i128) {
    env.events().publish(
        ("DTOKEN", symbol_short!("burn")),
        SupplyEvent {
            holder: from,
            amount,
            balance,
            total_supply,
        },
    );
}

pub fn emit_approve(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) {
    env.events().publish(
        ("DTOKEN", symbol_short!("approve")),
        ApproveEvent {
            from,
            spender,
            amount,
            expiration_ledger,
        },
    );
}

pub fn emit_hook_set(env: &Env, hook: Address, admin: Address) {
    env.events()
        .publish(("DTOKEN", symbol_short!("hook_set")), (hook, admin));
}
