#![no_std]


mod accumulator;
mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{HolderPosition, PoolConfig, PoolState};

use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};
use types::get_ledger_timestamp;

contractmeta!(
    key = "Description",
    val = "Dataset rental pool - rental paywall with per-share dividend distribution"
);

#[contract]
pub struct RentalPool;

#[contractimpl]
impl RentalPool {
    pub fn initialize(env: Env, admin: Address, config: PoolConfig) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        config.validate()?;

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &config);
        storage::set_state(&env, &types::PoolState::new());
        Ok(())
    }

    /// Pull `amount` of the quote asset from `from` and distribute it to holders.
    pub fn add_revenue(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = storage::get_config(&env)?;
        let mut state = storage::get_state(&env)?;
        Self::collect(&env, &config, &from, amount)?;

        let distributed = accumulator::distribute(&mut state, amount)?;
        storage::set_state(&env, &state);

        events::emit_revenue_added(&env, from, amount, distributed, &state);
        Ok(())
    }

    /// Pay for `periods` rental periods. Access is extended from the later of
    /// now and the current expiry. Returns the new expiry.
    pub fn rent(env: Env, renter: Address, periods: u32) -> Result<u64, Error> {
        renter.require_auth();
        if periods == 0 {
            return Err(Error::InvalidAmount);
        }

        let config = storage::get_config(&env)?;
        let mut state = storage::get_state(&env)?;

        let price = config
            .rental_price
            .checked_mul(periods as i128)
            .ok_or(Error::Overflow)?;
        let extension = config
            .period_seconds
            .checked_mul(periods as u64)
            .ok_or(Error::Overflow)?;
        let start = get_ledger_timestamp(&env).max(storage::get_access_expiry(&env, &renter));
        let expires_at = start.checked_add(extension).ok_or(Error::Overflow)?;

        Self::collect(&env, &config, &renter, price)?;
        let distributed = accumulator::distribute(&mut state, price)?;
        storage::set_state(&env, &state);
        storage::set_access_expiry(&env, &renter, expires_at);

        events::emit_rented(&env, renter.clone(), periods, price, expires_at);
        events::emit_revenue_added(&env, renter, price, distributed, &state);
        Ok(expires_at)
    }

    /// Balance hook called by the dataset token before it writes `new_balance`.
    pub fn on_balance_change(
        env: Env,
        holder: Address,
        old_balance: i128,
        new_balance: i128,
    ) -> Result<(), Error> {
        let config = storage::get_config(&env)?;
        config.token.require_auth();

        let mut state = storage::get_state(&env)?;
        let mut position = storage::get_position(&env, &holder);
        accumulator::apply_balance_change(&mut state, &mut position, old_balance, new_balance)?;

        storage::set_position(&env, &holder, &position);
        storage::set_state(&env, &state);

        events::emit_checkpoint(&env, holder, old_balance, &position, &state);
        Ok(())
    }

    /// Pay out everything owed to `holder`. Returns 0 when nothing is owed.
    pub fn claim(env: Env, holder: Address) -> Result<i128, Error> {
        holder.require_auth();

        let config = storage::get_config(&env)?;
        let mut state = storage::get_state(&env)?;
        let mut position = storage::get_position(&env, &holder);

        accumulator::checkpoint(&state, &mut position)?;
        let amount = position.accrued_unclaimed;
        if amount == 0 {
            return Ok(0);
        }

        position.accrued_unclaimed = 0;
        position.total_claimed = fp_math::add(position.total_claimed, amount)?;
        state.total_claimed = fp_math::add(state.total_claimed, amount)?;
        storage::set_position(&env, &holder, &position);
        storage::set_state(&env, &state);

        token::Client::new(&env, &config.quote_token).transfer(
            &env.current_contract_address(),
            &holder,
            &amount,
        );

        events::emit_dividend_claimed(&env, holder, amount, &position, &state);
        Ok(amount)
    }

    pub fn set_rental_price(env: Env, caller: Address, price: i128) -> Result<(), Error> {
        caller.require_auth();
        let mut config = storage::get_config(&env)?;
        if caller != config.governance && caller != storage::get_admin(&env)? {
            return Err(Error::Unauthorized);
        }
        if price <= 0 {
            return Err(Error::InvalidAmount);
        }

        let old_price = config.rental_price;
        config.rental_price = price;
        storage::set_config(&env, &config);

        log!(&env, "rental price updated", old_price, price);
        events::emit_rental_price_set(&env, caller, old_price, price);
        Ok(())
    }

    pub fn set_governance(env: Env, admin: Address, governance: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        let mut config = storage::get_config(&env)?;
        config.governance = governance.clone();
        storage::set_config(&env, &config);

        events::emit_governance_set(&env, admin, governance);
        Ok(())
    }

    /// Send revenue stranded with no shares outstanding to `to`.
    /// Returns the amount moved, 0 when nothing is held.
    pub fn sweep_undistributed(env: Env, admin: Address, to: Address) -> Result<i128, Error> {
        Self::require_admin(&env, &admin)?;
        let config = storage::get_config(&env)?;
        let mut state = storage::get_state(&env)?;
        if state.total_shares != 0 {
            return Err(Error::SharesOutstanding);
        }

        let amount = state.undistributed;
        if amount == 0 {
            return Ok(0);
        }
        state.undistributed = 0;
        storage::set_state(&env, &state);

        token::Client::new(&env, &config.quote_token).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );

        log!(&env, "undistributed swept", amount);
        events::emit_swept(&env, admin, to, amount);
        Ok(amount)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<PoolConfig, Error> {
        storage::get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<PoolState, Error> {
        storage::get_state(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn position(env: Env, holder: Address) -> HolderPosition {
        storage::get_position(&env, &holder)
    }

    pub fn claimable(env: Env, holder: Address) -> Result<i128, Error> {
        let state = storage::get_state(&env)?;
        accumulator::pending(&state, &storage::get_position(&env, &holder))
    }

    pub fn has_access(env: Env, user: Address) -> bool {
        storage::get_access_expiry(&env, &user) > get_ledger_timestamp(&env)
    }

    pub fn access_expiry(env: Env, user: Address) -> u64 {
        storage::get_access_expiry(&env, &user)
    }
}

impl RentalPool {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::get_admin(env)? {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn collect(
        env: &Env,
        config: &PoolConfig,
        from: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        let quote = token::Client::new(env, &config.quote_token);
        if quote.balance(from) < amount {
            return Err(Error::InsufficientFunds);
        }
        quote.transfer(from, &env.current_contract_address(), &amount);
        Ok(())
    }
}
