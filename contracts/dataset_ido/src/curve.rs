use fp_math::{mul_div, mul_div_up, Rounding, Wide, SCALE};

use crate::errors::Error;
use crate::types::{CurveConfig, LinearCurve, VirtualAmmCurve};

/// Price schedule of a sale as a function of tokens sold.
///
/// `cumulative_cost(s)` is the quote needed to move supply from zero to `s`,
/// rounded up. Buy and sell amounts are differences of it, so the quote held
/// by a sale always equals `cumulative_cost(tokens_sold)` whatever the order
/// of trades, and a buy followed by a sell of the same size returns exactly
/// what was paid.
pub trait BondingCurve {
    fn validate(&self, target_tokens: i128) -> Result<(), Error>;

    fn cumulative_cost(&self, supply: i128) -> Result<i128, Error>;

    /// Instantaneous price at `supply`: quote per token unit, scaled by `SCALE`.
    fn spot_price(&self, supply: i128) -> Result<i128, Error>;

    fn cost_between(&self, from: i128, to: i128) -> Result<i128, Error> {
        if from < 0 || to < from {
            return Err(Error::InvalidAmount);
        }
        let high = self.cumulative_cost(to)?;
        let low = self.cumulative_cost(from)?;
        Ok(fp_math::sub(high, low)?)
    }

    /// Largest `n <= max_tokens` whose cost from `supply` fits in `budget`.
    fn tokens_for_budget(
        &self,
        supply: i128,
        budget: i128,
        max_tokens: i128,
    ) -> Result<i128, Error> {
        if budget <= 0 || max_tokens <= 0 {
            return Ok(0);
        }
        let limit = fp_math::add(self.cumulative_cost(supply)?, budget)?;
        let (mut lo, mut hi) = (0i128, max_tokens);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if self.cumulative_cost(fp_math::add(supply, mid)?)? <= limit {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        Ok(lo)
    }
}

impl BondingCurve for VirtualAmmCurve {
    fn validate(&self, target_tokens: i128) -> Result<(), Error> {
        if self.virtual_quote <= 0 || self.virtual_base <= target_tokens {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    // k / (B - s) - k / B == Q * s / (B - s)
    fn cumulative_cost(&self, supply: i128) -> Result<i128, Error> {
        let remaining = self.remaining_base(supply)?;
        Ok(mul_div_up(self.virtual_quote, supply, remaining)?)
    }

    // Q * B / (B - s)^2
    fn spot_price(&self, supply: i128) -> Result<i128, Error> {
        let remaining = self.remaining_base(supply)?;
        let numerator = Wide::from_i128(self.virtual_quote)?
            .checked_mul_i128(self.virtual_base)?
            .checked_mul_i128(SCALE)?;
        let denominator = Wide::from_i128(remaining)?.checked_mul_i128(remaining)?;
        Ok(numerator.checked_div(denominator, Rounding::Down)?)
    }
}

impl VirtualAmmCurve {
    fn remaining_base(&self, supply: i128) -> Result<i128, Error> {
        if supply < 0 || supply >= self.virtual_base {
            return Err(Error::InvalidAmount);
        }
        Ok(self.virtual_base - supply)
    }
}

impl BondingCurve for LinearCurve {
    fn validate(&self, _target_tokens: i128) -> Result<(), Error> {
        if self.initial_price <= 0 || self.slope < 0 {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    // (p0 * s + slope * s^2 / (2 * SCALE)) / SCALE
    fn cumulative_cost(&self, supply: i128) -> Result<i128, Error> {
        if supply < 0 {
            return Err(Error::InvalidAmount);
        }
        let flat = Wide::from_i128(self.initial_price)?
            .checked_mul_i128(supply)?
            .checked_mul_i128(SCALE)?
            .checked_mul_i128(2)?;
        let ramp = Wide::from_i128(self.slope)?
            .checked_mul_i128(supply)?
            .checked_mul_i128(supply)?;
        let denominator = Wide::from_i128(SCALE)?
            .checked_mul_i128(SCALE)?
            .checked_mul_i128(2)?;
        Ok(flat.checked_add(ramp)?.checked_div(denominator, Rounding::Up)?)
    }

    fn spot_price(&self, supply: i128) -> Result<i128, Error> {
        if supply < 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(fp_math::add(
            self.initial_price,
            mul_div(self.slope, supply, SCALE)?,
        )?)
    }
}

impl BondingCurve for CurveConfig {
    fn validate(&self, target_tokens: i128) -> Result<(), Error> {
        match self {
            CurveConfig::VirtualAmm(curve) => curve.validate(target_tokens),
            CurveConfig::Linear(curve) => curve.validate(target_tokens),
        }
    }

    fn cumulative_cost(&self, supply: i128) -> Result<i128, Error> {
        match self {
            CurveConfig::VirtualAmm(curve) => curve.cumulative_cost(supply),
            CurveConfig::Linear(curve) => curve.cumulative_cost(supply),
        }
    }

    fn spot_price(&self, supply: i128) -> Result<i128, Error> {
        match self {
            CurveConfig::VirtualAmm(curve) => curve.spot_price(supply),
            CurveConfig::Linear(curve) => curve.spot_price(supply),
        }
    }
}
