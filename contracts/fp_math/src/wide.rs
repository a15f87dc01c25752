use uint::construct_uint;

use crate::MathError;

construct_uint! {
    /// 256-bit unsigned integer for intermediate products.
    struct U256(4);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

/// Checked 256-bit accumulator for products of up to three `i128` factors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct Wide(U256);

impl Wide {
    pub fn from_i128(value: i128) -> Result<Self, MathError> {
        if value < 0 {
            return Err(MathError::NegativeInput);
        }
        Ok(Wide(U256::from(value as u128)))
    }

    pub fn checked_mul(self, other: Wide) -> Result<Self, MathError> {
        self.0
            .checked_mul(other.0)
            .map(Wide)
            .ok_or(MathError::Overflow)
    }

    pub fn checked_mul_i128(self, value: i128) -> Result<Self, MathError> {
        self.checked_mul(Wide::from_i128(value)?)
    }

    pub fn checked_add(self, other: Wide) -> Result<Self, MathError> {
        self.0
            .checked_add(other.0)
            .map(Wide)
            .ok_or(MathError::Overflow)
    }

    /// Divide and narrow back to `i128`.
    pub fn checked_div(self, divisor: Wide, rounding: Rounding) -> Result<i128, MathError> {
        if divisor.0.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let (quotient, remainder) = self.0.div_mod(divisor.0);
        let quotient = match rounding {
            Rounding::Up if !remainder.is_zero() => quotient
                .checked_add(U256::one())
                .ok_or(MathError::Overflow)?,
            _ => quotient,
        };
        narrow(quotient)
    }

    pub fn div_i128(self, divisor: i128, rounding: Rounding) -> Result<i128, MathError> {
        self.checked_div(Wide::from_i128(divisor)?, rounding)
    }

    pub fn to_i128(self) -> Result<i128, MathError> {
        narrow(self.0)
    }
}

fn narrow(value: U256) -> Result<i128, MathError> {
    if value > U256::from(i128::MAX as u128) {
        return Err(MathError::Overflow);
    }
    Ok(value.low_u128() as i128)
}
