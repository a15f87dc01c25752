//! Revenue-per-share accounting.
//!
//! A holder's entitlement is `balance * (acc - reward_debt) / SCALE` plus
//! whatever earlier checkpoints already moved into `accrued_unclaimed`. The
//! functions here only touch the values passed in; the contract owns loading
//! and storing them.

use fp_math::{mul_div, mul_div_up, SCALE};

use crate::errors::Error;
use crate::types::{HolderPosition, PoolState};

/// Record `amount` of new revenue and fold it, together with anything held
/// back earlier, into the accumulator. Returns the amount distributed.
///
/// With no shares outstanding everything is held in `undistributed`. The
/// distributed amount is rounded up, so the sum of holder entitlements never
/// exceeds it and at most one unit per distribution is left unassigned.
pub fn distribute(state: &mut PoolState, amount: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    state.total_revenue_added = fp_math::add(state.total_revenue_added, amount)?;
    let pending = fp_math::add(state.undistributed, amount)?;

    if state.total_shares == 0 {
        state.undistributed = pending;
        return Ok(0);
    }

    let delta = mul_div(pending, SCALE, state.total_shares)?;
    let distributed = mul_div_up(delta, state.total_shares, SCALE)?;
    state.acc_revenue_per_share = fp_math::add(state.acc_revenue_per_share, delta)?;
    state.undistributed = fp_math::sub(pending, distributed)?;
    Ok(distributed)
}

/// Move everything earned since the last checkpoint into `accrued_unclaimed`.
pub fn checkpoint(state: &PoolState, position: &mut HolderPosition) -> Result<(), Error> {
    let earned = earned_since_checkpoint(state, position)?;
    position.accrued_unclaimed = fp_math::add(position.accrued_unclaimed, earned)?;
    position.reward_debt = state.acc_revenue_per_share;
    Ok(())
}

/// Checkpoint at `old_balance`, then move the holder to `new_balance`.
pub fn apply_balance_change(
    state: &mut PoolState,
    position: &mut HolderPosition,
    old_balance: i128,
    new_balance: i128,
) -> Result<(), Error> {
    if old_balance < 0 || new_balance < 0 {
        return Err(Error::InvalidAmount);
    }
    if position.balance != old_balance {
        return Err(Error::BalanceMismatch);
    }

    checkpoint(state, position)?;
    position.balance = new_balance;
    let others = fp_math::sub(state.total_shares, old_balance)?;
    state.total_shares = fp_math::add(others, new_balance)?;
    Ok(())
}

/// What `claim` would pay right now.
pub fn pending(state: &PoolState, position: &HolderPosition) -> Result<i128, Error> {
    let earned = earned_since_checkpoint(state, position)?;
    Ok(fp_math::add(position.accrued_unclaimed, earned)?)
}

fn earned_since_checkpoint(state: &PoolState, position: &HolderPosition) -> Result<i128, Error> {
    let growth = fp_math::sub(state.acc_revenue_per_share, position.reward_debt)?;
    Ok(mul_div(position.balance, growth, SCALE)?)
}
