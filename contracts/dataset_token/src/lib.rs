#![no_std]

mod errors;
mod events;
mod hook;
mod storage;

#[cfg(test)]
mod test;

pub use errors::Error;
pub use storage::{AllowanceValue, TokenMetadata};

use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};

contractmeta!(
    key = "Description",
    val = "Dataset token - governance and rental dividend share of a dataset"
);

const MAX_DECIMALS: u32 = 18;

#[contract]
pub struct DatasetToken;

#[contractimpl]
impl DatasetToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        minter: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        if decimal > MAX_DECIMALS {
            return Err(Error::InvalidConfig);
        }

        storage::set_admin(&env, &admin);
        storage::set_minter(&env, &minter);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        storage::set_total_supply(&env, 0);
        Ok(())
    }

    /// Route every future balance change to `hook` (the dataset's rental pool).
    ///
    /// Only allowed while nothing is minted, so the hook observes every
    /// balance from zero.
    pub fn set_balance_hook(env: Env, admin: Address, hook: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        if storage::get_total_supply(&env) != 0 {
            return Err(Error::HookLocked);
        }
        storage::set_balance_hook(&env, &hook);
        events::emit_hook_set(&env, hook, admin);
        Ok(())
    }

    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), Error> {
        Self::require_minter(&env, &minter)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let old_balance = storage::get_balance(&env, &to);
        let new_balance = old_balance.checked_add(amount).ok_or(Error::Overflow)?;
        let supply = storage::get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        hook::notify(&env, &to, old_balance, new_balance);
        storage::set_balance(&env, &to, new_balance);
        storage::set_total_supply(&env, supply);

        events::emit_mint(&env, to, amount, new_balance, supply);
        Ok(())
    }

    pub fn burn(env: Env, minter: Address, from: Address, amount: i128) -> Result<(), Error> {
        Self::require_minter(&env, &minter)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let old_balance = storage::get_balance(&env, &from);
        if old_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        let new_balance = old_balance - amount;
        let supply = storage::get_total_supply(&env)
            .checked_sub(amount)
            .ok_or(Error::Overflow)?;

        hook::notify(&env, &from, old_balance, new_balance);
        storage::set_balance(&env, &from, new_balance);
        storage::set_total_supply(&env, supply);

        events::emit_burn(&env, from, amount, new_balance, supply);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::move_balance(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut allowance = storage::get_allowance(&env, &from, &spender);
        if allowance.amount < amount {
            return Err(Error::InsufficientAllowance);
        }
        allowance.amount -= amount;
        storage::set_allowance(&env, &from, &spender, &allowance);

        Self::move_balance(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(Error::InvalidAmount);
        }

        storage::set_allowance(
            &env,
            &from,
            &spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        events::emit_approve(&env, from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender).amount
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(Self::metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.symbol)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn minter(env: Env) -> Result<Address, Error> {
        storage::get_minter(&env).ok_or(Error::NotInitialized)
    }

    pub fn balance_hook(env: Env) -> Option<Address> {
        storage::get_balance_hook(&env)
    }
}

impl DatasetToken {
    fn metadata(env: &Env) -> Result<TokenMetadata, Error> {
        storage::get_metadata(env).ok_or(Error::NotInitialized)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if &admin != caller {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }

    fn require_minter(env: &Env, caller: &Address) -> Result<(), Error> {
        let minter = storage::get_minter(env).ok_or(Error::NotInitialized)?;
        if &minter != caller {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }

    /// Both legs are reported to the hook with their pre-transfer balances
    /// before either balance is written.
    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let from_old = storage::get_balance(env, from);
        if from_old < amount {
            return Err(Error::InsufficientBalance);
        }
        if from == to {
            events::emit_transfer(env, from.clone(), to.clone(), amount, from_old, from_old);
            return Ok(());
        }

        let to_old = storage::get_balance(env, to);
        let from_new = from_old - amount;
        let to_new = to_old.checked_add(amount).ok_or(Error::Overflow)?;

        hook::notify(env, from, from_old, from_new);
        hook::notify(env, to, to_old, to_new);
        storage::set_balance(env, from, from_new);
        storage::set_balance(env, to, to_new);

        events::emit_transfer(env, from.clone(), to.clone(), amount, from_new, to_new);
        Ok(())
    }
}
