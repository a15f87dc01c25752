use proptest::prelude::*;

use super::*;

const MAX_SUPPLY: i128 = 10_000_000 * SCALE;
const MAX_QUOTE: i128 = 1_000_000_000_000 * 1_000_000;

#[test]
fn test_mul_div_rounds_down() {
    assert_eq!(mul_div(10, 10, 3), Ok(33));
    assert_eq!(mul_div(9, 1, 10), Ok(0));
    assert_eq!(mul_div(0, 123, 7), Ok(0));
}

#[test]
fn test_mul_div_up_rounds_up_only_on_remainder() {
    assert_eq!(mul_div_up(10, 10, 3), Ok(34));
    assert_eq!(mul_div_up(9, 1, 10), Ok(1));
    assert_eq!(mul_div_up(10, 10, 5), Ok(20));
}

#[test]
fn test_wide_intermediate_does_not_overflow() {
    // supply * SCALE alone is 10^43, well past i128::MAX.
    assert_eq!(mul_div(MAX_SUPPLY, SCALE, SCALE), Ok(MAX_SUPPLY));
    assert_eq!(mul_div(MAX_QUOTE, SCALE, MAX_SUPPLY), Ok(100_000_000_000));
}

#[test]
fn test_result_overflow_is_reported() {
    assert_eq!(mul_div(i128::MAX, 2, 1), Err(MathError::Overflow));
}

#[test]
fn test_zero_divisor_is_rejected() {
    assert_eq!(mul_div(1, 1, 0), Err(MathError::DivisionByZero));
}

#[test]
fn test_negative_input_is_rejected() {
    assert_eq!(mul_div(-1, 1, 1), Err(MathError::NegativeInput));
    assert_eq!(mul_div(1, 1, -1), Err(MathError::NegativeInput));
}

#[test]
fn test_bps_split_is_exact() {
    assert_eq!(bps(1_000, 250), Ok(25));
    assert_eq!(split_bps(999, 3_333), Ok((332, 667)));
}

#[test]
fn test_fee_rounds_up_on_remainder() {
    assert_eq!(bps_up(1_000, 250), Ok(25));
    assert_eq!(bps_up(99, 100), Ok(1));
    assert_eq!(bps_up(1_001, 100), Ok(11));
    assert_eq!(bps_up(0, 100), Ok(0));
    assert_eq!(bps_up(99, 0), Ok(0));
}

#[test]
fn test_sub_refuses_negative_result() {
    assert_eq!(sub(5, 6), Err(MathError::Underflow));
    assert_eq!(sub(6, 5), Ok(1));
    assert_eq!(add(i128::MAX, 1), Err(MathError::Overflow));
}

#[test]
fn test_three_factor_product() {
    let product = Wide::from_i128(MAX_SUPPLY)
        .unwrap()
        .checked_mul_i128(MAX_SUPPLY)
        .unwrap()
        .checked_mul_i128(SCALE)
        .unwrap();
    let divisor = Wide::from_i128(MAX_SUPPLY)
        .unwrap()
        .checked_mul_i128(SCALE)
        .unwrap();
    assert_eq!(product.checked_div(divisor, Rounding::Down), Ok(MAX_SUPPLY));
    assert_eq!(product.to_i128(), Err(MathError::Overflow));
}

proptest! {
    #[test]
    fn prop_up_and_down_differ_by_at_most_one(
        a in 0..MAX_SUPPLY,
        b in 0..MAX_QUOTE,
        d in SCALE..MAX_SUPPLY,
    ) {
        let down = mul_div(a, b, d).unwrap();
        let up = mul_div_up(a, b, d).unwrap();
        prop_assert!(up == down || up == down + 1);
    }

    #[test]
    fn prop_floor_never_exceeds_exact_quotient(
        a in 0..MAX_QUOTE,
        b in 0..SCALE,
        d in 1..MAX_SUPPLY,
    ) {
        let q = mul_div(a, b, d).unwrap();
        let lhs = Wide::from_i128(q).unwrap().checked_mul_i128(d).unwrap();
        let rhs = Wide::from_i128(a).unwrap().checked_mul_i128(b).unwrap();
        prop_assert!(lhs <= rhs);
    }

    #[test]
    fn prop_split_preserves_total(amount in 0..MAX_QUOTE, share in 0u32..=10_000) {
        let (a, b) = split_bps(amount, share).unwrap();
        prop_assert_eq!(a + b, amount);
    }

    #[test]
    fn prop_split_order_never_pays_less_fee(
        piece in 1i128..1_000_000,
        pieces in 1i128..1_000,
        fee_bps in 0u32..=1_000,
    ) {
        let split = bps_up(piece, fee_bps).unwrap() * pieces;
        let whole = bps_up(piece * pieces, fee_bps).unwrap();
        prop_assert!(split >= whole);
    }
}
