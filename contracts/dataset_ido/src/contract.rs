use crate::curve::BondingCurve;
use crate::errors::Error;
use crate::events;
use crate::sale_token;
use crate::storage::*;
use crate::types::*;
use fp_math::{BPS_DENOMINATOR, SCALE};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Dataset IDO - bonding curve sale with launch settlement and refunds"
);

#[contract]
pub struct DatasetIdoContract;

#[contractimpl]
impl DatasetIdoContract {
    /// Initialize the sale. Called once by the deploying factory.
    pub fn initialize(env: Env, admin: Address, config: SaleConfig) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        config.validate(get_ledger_timestamp(&env))?;
        let min_tokens = config.min_tokens()?;
        let initial_price = config.curve.spot_price(0)?;

        set_admin(&env, &admin);
        set_config(&env, &config);
        set_state(&env, &SaleState::new());

        events::emit_sale_created(
            &env,
            config.target_tokens,
            min_tokens,
            config.deadline,
            initial_price,
        );
        Ok(())
    }

    /// Buy exactly `token_amount` tokens, paying at most `max_cost` (fee included).
    pub fn buy(
        env: Env,
        buyer: Address,
        token_amount: i128,
        max_cost: i128,
    ) -> Result<TradeReceipt, Error> {
        buyer.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        Self::require_open(&env, &config, &state)?;

        if token_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let new_sold = fp_math::add(state.tokens_sold, token_amount)?;
        if new_sold > config.target_tokens {
            return Err(Error::CapExceeded);
        }

        let cost = config.curve.cost_between(state.tokens_sold, new_sold)?;
        let fee = fp_math::bps_up(cost, config.fee_bps)?;
        if fp_math::add(cost, fee)? > max_cost {
            return Err(Error::SlippageExceeded);
        }

        Self::execute_buy(&env, &config, &mut state, &buyer, token_amount, cost, fee)
    }

    /// Spend at most `quote_in` (fee included) on as many tokens as it buys.
    pub fn buy_with_quote(
        env: Env,
        buyer: Address,
        quote_in: i128,
        min_tokens_out: i128,
    ) -> Result<TradeReceipt, Error> {
        buyer.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        Self::require_open(&env, &config, &state)?;

        if quote_in <= 0 || min_tokens_out < 0 {
            return Err(Error::InvalidAmount);
        }

        // The fee sits on top of the curve cost. Any cost within this budget
        // satisfies cost * (1 + fee_bps / 10_000) <= quote_in, and quote_in is
        // whole, so the rounded-up fee still fits.
        let budget = fp_math::mul_div(
            quote_in,
            BPS_DENOMINATOR,
            BPS_DENOMINATOR + config.fee_bps as i128,
        )?;
        let remaining = fp_math::sub(config.target_tokens, state.tokens_sold)?;
        let tokens = config
            .curve
            .tokens_for_budget(state.tokens_sold, budget, remaining)?;
        if tokens == 0 || tokens < min_tokens_out {
            return Err(Error::SlippageExceeded);
        }

        let cost = config
            .curve
            .cost_between(state.tokens_sold, state.tokens_sold + tokens)?;
        let fee = fp_math::bps_up(cost, config.fee_bps)?;
        if fp_math::add(cost, fee)? > quote_in {
            return Err(Error::PrecisionLoss);
        }

        Self::execute_buy(&env, &config, &mut state, &buyer, tokens, cost, fee)
    }

    /// Sell tokens back along the curve before launch.
    pub fn sell(
        env: Env,
        seller: Address,
        token_amount: i128,
        min_quote_out: i128,
    ) -> Result<TradeReceipt, Error> {
        seller.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        Self::require_open(&env, &config, &state)?;

        if token_amount <= 0 || token_amount > state.tokens_sold {
            return Err(Error::InvalidAmount);
        }
        if sale_token::balance(&env, &config.sale_token, &seller) < token_amount {
            return Err(Error::InsufficientFunds);
        }

        let new_sold = state.tokens_sold - token_amount;
        let proceeds = config.curve.cost_between(new_sold, state.tokens_sold)?;
        let fee = fp_math::bps_up(proceeds, config.fee_bps)?;
        let net = fp_math::sub(proceeds, fee)?;
        if net < min_quote_out {
            return Err(Error::SlippageExceeded);
        }

        state.tokens_sold = new_sold;
        state.quote_raised = fp_math::sub(state.quote_raised, proceeds)?;
        state.fees_collected = fp_math::add(state.fees_collected, fee)?;
        set_state(&env, &state);

        sale_token::burn(&env, &config.sale_token, &seller, token_amount);
        let quote = token::Client::new(&env, &config.quote_token);
        let this = env.current_contract_address();
        if net > 0 {
            quote.transfer(&this, &seller, &net);
        }
        if fee > 0 {
            quote.transfer(&this, &config.treasury, &fee);
        }

        let price_after = config.curve.spot_price(state.tokens_sold)?;
        events::emit_sold(&env, seller, token_amount, proceeds, fee, &state, price_after);

        Ok(TradeReceipt {
            tokens: token_amount,
            quote_amount: proceeds,
            fee,
            price_after,
            status: state.status,
        })
    }

    /// Move the sale out of `Active` once the deadline has passed.
    ///
    /// Anyone may call this. Before the deadline, or once the sale has
    /// terminated, it changes nothing and returns the current status.
    pub fn finalize(env: Env) -> Result<SaleStatus, Error> {
        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        if Self::finalize_if_due(&env, &config, &mut state)? {
            set_state(&env, &state);
        }
        Ok(state.status)
    }

    /// Pay back `user`'s tokens at the frozen refund rate and burn them.
    pub fn claim_refund(env: Env, user: Address) -> Result<i128, Error> {
        user.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        Self::finalize_if_due(&env, &config, &mut state)?;
        if state.status != SaleStatus::Failed {
            return Err(Error::InvalidState);
        }

        let balance = sale_token::balance(&env, &config.sale_token, &user);
        if balance <= 0 {
            return Err(Error::NothingToClaim);
        }
        let amount = fp_math::mul_div(balance, state.refund_rate, SCALE)?;
        let paid = fp_math::add(state.refunds_paid, amount)?;
        if paid > state.refund_pool {
            return Err(Error::InsufficientFunds);
        }
        state.refunds_paid = paid;
        set_state(&env, &state);

        sale_token::burn(&env, &config.sale_token, &user, balance);
        if amount > 0 {
            token::Client::new(&env, &config.quote_token).transfer(
                &env.current_contract_address(),
                &user,
                &amount,
            );
        }

        events::emit_refund_claimed(&env, user, balance, amount, paid);
        Ok(amount)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, Error> {
        get_state(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn get_settlement(env: Env) -> Option<Settlement> {
        get_settlement(&env)
    }

    pub fn min_tokens(env: Env) -> Result<i128, Error> {
        get_config(&env)?.min_tokens()
    }

    pub fn spot_price(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        config.curve.spot_price(state.tokens_sold)
    }

    /// `(cost, fee)` of buying `token_amount` at the current supply.
    pub fn quote_buy(env: Env, token_amount: i128) -> Result<(i128, i128), Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        let new_sold = fp_math::add(state.tokens_sold, token_amount)?;
        if token_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if new_sold > config.target_tokens {
            return Err(Error::CapExceeded);
        }
        let cost = config.curve.cost_between(state.tokens_sold, new_sold)?;
        Ok((cost, fp_math::bps_up(cost, config.fee_bps)?))
    }

    /// `(proceeds, fee)` of selling `token_amount` at the current supply.
    pub fn quote_sell(env: Env, token_amount: i128) -> Result<(i128, i128), Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        if token_amount <= 0 || token_amount > state.tokens_sold {
            return Err(Error::InvalidAmount);
        }
        let proceeds = config
            .curve
            .cost_between(state.tokens_sold - token_amount, state.tokens_sold)?;
        Ok((proceeds, fp_math::bps_up(proceeds, config.fee_bps)?))
    }

    /// Refund `user` would receive now; zero unless the sale failed.
    pub fn refund_of(env: Env, user: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        if state.status != SaleStatus::Failed {
            return Ok(0);
        }
        let balance = sale_token::balance(&env, &config.sale_token, &user);
        Ok(fp_math::mul_div(balance, state.refund_rate, SCALE)?)
    }
}

impl DatasetIdoContract {
    fn require_open(env: &Env, config: &SaleConfig, state: &SaleState) -> Result<(), Error> {
        if state.status != SaleStatus::Active {
            return Err(Error::InvalidState);
        }
        if get_ledger_timestamp(env) >= config.deadline {
            return Err(Error::SaleClosed);
        }
        Ok(())
    }

    fn execute_buy(
        env: &Env,
        config: &SaleConfig,
        state: &mut SaleState,
        buyer: &Address,
        tokens: i128,
        cost: i128,
        fee: i128,
    ) -> Result<TradeReceipt, Error> {
        let quote = token::Client::new(env, &config.quote_token);
        if quote.balance(buyer) < fp_math::add(cost, fee)? {
            return Err(Error::InsufficientFunds);
        }

        state.tokens_sold = fp_math::add(state.tokens_sold, tokens)?;
        state.quote_raised = fp_math::add(state.quote_raised, cost)?;
        state.fees_collected = fp_math::add(state.fees_collected, fee)?;

        if cost > 0 {
            quote.transfer(buyer, &env.current_contract_address(), &cost);
        }
        if fee > 0 {
            quote.transfer(buyer, &config.treasury, &fee);
        }
        sale_token::mint(env, &config.sale_token, buyer, tokens);

        let price_after = config.curve.spot_price(state.tokens_sold)?;
        events::emit_purchased(env, buyer.clone(), tokens, cost, fee, state, price_after);

        // Nothing more can be bought once the cap is filled.
        if state.tokens_sold == config.target_tokens {
            Self::launch(env, config, state)?;
        }
        set_state(env, state);

        Ok(TradeReceipt {
            tokens,
            quote_amount: cost,
            fee,
            price_after,
            status: state.status,
        })
    }

    /// Returns whether the state changed.
    fn finalize_if_due(
        env: &Env,
        config: &SaleConfig,
        state: &mut SaleState,
    ) -> Result<bool, Error> {
        if state.status != SaleStatus::Active || get_ledger_timestamp(env) < config.deadline {
            return Ok(false);
        }
        if state.tokens_sold >= config.min_tokens()? {
            Self::launch(env, config, state)?;
        } else {
            Self::fail(env, config, state)?;
        }
        Ok(true)
    }

    fn launch(env: &Env, config: &SaleConfig, state: &mut SaleState) -> Result<(), Error> {
        let raised = state.quote_raised;
        let (project_amount, rest) = fp_math::split_bps(raised, config.alpha_project_bps)?;
        let lp_locked = fp_math::bps(raised, config.beta_lp_bps)?;
        let protocol_amount = fp_math::sub(rest, lp_locked)?;

        let settlement = Settlement {
            project_amount,
            lp_locked,
            protocol_amount,
            final_price: config.curve.spot_price(state.tokens_sold)?,
            settled_at: get_ledger_timestamp(env),
        };
        state.status = SaleStatus::Launched;
        set_settlement(env, &settlement);

        // The LP share stays in this contract as locked liquidity.
        let quote = token::Client::new(env, &config.quote_token);
        let this = env.current_contract_address();
        if project_amount > 0 {
            quote.transfer(&this, &config.project, &project_amount);
        }
        if protocol_amount > 0 {
            quote.transfer(&this, &config.treasury, &protocol_amount);
        }

        log!(env, "sale launched", state.tokens_sold, raised, settlement.final_price);
        events::emit_launched(env, state, &settlement);
        Ok(())
    }

    fn fail(env: &Env, config: &SaleConfig, state: &mut SaleState) -> Result<(), Error> {
        state.status = SaleStatus::Failed;

        if state.tokens_sold == 0 {
            state.refund_rate = 0;
            state.refund_pool = 0;
        } else {
            state.refund_pool = state.quote_raised;
            state.refund_rate = fp_math::mul_div(state.quote_raised, SCALE, state.tokens_sold)?;
        }

        // Only the curve integral backs refunds. Quote sent to the sale any
        // other way goes to the treasury instead of sitting here for good.
        let quote = token::Client::new(env, &config.quote_token);
        let this = env.current_contract_address();
        let stray = quote.balance(&this) - state.refund_pool;
        if stray > 0 {
            quote.transfer(&this, &config.treasury, &stray);
        }

        log!(env, "sale failed", state.tokens_sold, state.refund_rate);
        events::emit_failed(env, state);
        Ok(())
    }
}
