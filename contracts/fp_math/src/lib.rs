//! Fixed-point helpers shared by the IDO and rental pool contracts.
//!
//! ## Rounding Policy
//!
//! Every helper rounds **down** unless the caller explicitly asks for
//! [`Rounding::Up`]. The IDO rounds cumulative curve cost up so a buyer never
//! pays less than the curve integral; everything paid out (refunds, dividends,
//! split shares) is rounded down so no holder receives more than their
//! proportional entitlement. Trading fees use [`bps_up`], so splitting an
//! order into small pieces never lowers the fee paid.
//!
//! ## Range
//!
//! Inputs are non-negative `i128` amounts in base units. Products are carried
//! in 256 bits, so `a * b / d` cannot overflow in the intermediate for token
//! supplies up to 10^25 and quote amounts up to 10^18. Only a final result
//! that does not fit in `i128` is reported as [`MathError::Overflow`].
#![cfg_attr(not(test), no_std)]

use core::fmt;

mod wide;

pub use wide::{Rounding, Wide};

/// Fixed-point scale for prices, refund rates and the dividend accumulator.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Basis-point denominator (1 bp = 0.01%).
pub const BPS_DENOMINATOR: i128 = 10_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    Overflow,
    Underflow,
    DivisionByZero,
    NegativeInput,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Overflow => f.write_str("arithmetic overflow"),
            MathError::Underflow => f.write_str("arithmetic underflow"),
            MathError::DivisionByZero => f.write_str("division by zero"),
            MathError::NegativeInput => f.write_str("negative input"),
        }
    }
}

/// `floor(a * b / d)` with a 256-bit intermediate.
pub fn mul_div(a: i128, b: i128, d: i128) -> Result<i128, MathError> {
    mul_div_rounding(a, b, d, Rounding::Down)
}

/// `ceil(a * b / d)` with a 256-bit intermediate.
pub fn mul_div_up(a: i128, b: i128, d: i128) -> Result<i128, MathError> {
    mul_div_rounding(a, b, d, Rounding::Up)
}

pub fn mul_div_rounding(
    a: i128,
    b: i128,
    d: i128,
    rounding: Rounding,
) -> Result<i128, MathError> {
    Wide::from_i128(a)?.checked_mul_i128(b)?.div_i128(d, rounding)
}

/// `floor(amount * bps / 10_000)`.
pub fn bps(amount: i128, bps: u32) -> Result<i128, MathError> {
    mul_div(amount, bps as i128, BPS_DENOMINATOR)
}

/// `ceil(amount * bps / 10_000)`.
pub fn bps_up(amount: i128, bps: u32) -> Result<i128, MathError> {
    mul_div_up(amount, bps as i128, BPS_DENOMINATOR)
}

/// Split `amount` into `(share, rest)` where `share + rest == amount`.
///
/// The share is floored; any remainder stays in `rest`.
pub fn split_bps(amount: i128, share_bps: u32) -> Result<(i128, i128), MathError> {
    let share = bps(amount, share_bps)?;
    Ok((share, sub(amount, share)?))
}

pub fn add(a: i128, b: i128) -> Result<i128, MathError> {
    a.checked_add(b).ok_or(MathError::Overflow)
}

/// Checked subtraction that refuses to go below zero.
pub fn sub(a: i128, b: i128) -> Result<i128, MathError> {
    match a.checked_sub(b) {
        Some(v) if v >= 0 => Ok(v),
        Some(_) => Err(MathError::Underflow),
        None => Err(MathError::Overflow),
    }
}

#[cfg(test)]
mod test;
