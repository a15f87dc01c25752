#![allow(clippy::unwrap_used)]

use dataset_ido::SaleStatus;
use fp_math::SCALE;

use crate::utils::constants::{DAY, RENTAL_PRICE, START};
use crate::utils::{amm_curve, flat_curve, Marketplace};

#[test]
fn test_sale_launches_then_rent_flows_to_holders() {
    let m = Marketplace::deploy(flat_curve(), 1_000_000, 100);
    let alice = m.funded_user(700_000);
    let bob = m.funded_user(500_000);

    m.ido.buy(&alice, &600_000, &606_000);
    let receipt = m.ido.buy(&bob, &400_000, &404_000);
    assert_eq!(receipt.status, SaleStatus::Launched);

    let state = m.ido.get_state();
    let settlement = m.ido.get_settlement().unwrap();
    assert_eq!(state.quote_raised, 1_000_000);
    assert_eq!(settlement.project_amount, 600_000);
    assert_eq!(settlement.lp_locked, 250_000);
    assert_eq!(settlement.protocol_amount, 150_000);
    assert_eq!(settlement.final_price, SCALE);
    assert_eq!(m.quote.balance(&m.project), 600_000);
    assert_eq!(m.quote.balance(&m.treasury), 150_000 + 10_000);

    // Every mint went through the pool hook.
    assert_eq!(m.pool.get_state().total_shares, 1_000_000);
    m.assert_pool_tracks(&alice);
    m.assert_pool_tracks(&bob);

    let renter = m.funded_user(5 * RENTAL_PRICE);
    let expiry = m.pool.rent(&renter, &5);
    assert_eq!(expiry, START + 5 * DAY);
    assert!(m.pool.has_access(&renter));
    assert_eq!(m.pool.claimable(&alice), 3_000);
    assert_eq!(m.pool.claimable(&bob), 2_000);

    // A token transfer checkpoints both sides before balances move.
    m.dataset.transfer(&alice, &bob, &100_000);
    m.assert_pool_tracks(&alice);
    m.assert_pool_tracks(&bob);
    assert_eq!(m.pool.claimable(&alice), 3_000);
    assert_eq!(m.pool.claimable(&bob), 2_000);

    let sponsor = m.funded_user(10_000);
    m.pool.add_revenue(&sponsor, &10_000);
    assert_eq!(m.pool.claimable(&alice), 8_000);
    assert_eq!(m.pool.claimable(&bob), 7_000);

    assert_eq!(m.pool.claim(&alice), 8_000);
    assert_eq!(m.pool.claim(&bob), 7_000);
    assert_eq!(m.pool.claim(&bob), 0);

    let pool_state = m.pool.get_state();
    assert_eq!(pool_state.total_revenue_added, 15_000);
    assert_eq!(pool_state.total_claimed, 15_000);
    assert_eq!(m.quote.balance(&m.pool.address), 0);
}

#[test]
fn test_refund_burn_checkpoints_pool() {
    let m = Marketplace::deploy(flat_curve(), 1_000, 0);
    let alice = m.funded_user(500);
    m.ido.buy(&alice, &500, &500);

    let renter = m.funded_user(RENTAL_PRICE);
    m.pool.rent(&renter, &1);
    assert_eq!(m.pool.claimable(&alice), RENTAL_PRICE);

    m.pass_deadline();
    assert_eq!(m.ido.claim_refund(&alice), 500);
    assert_eq!(m.ido.get_state().status, SaleStatus::Failed);

    // The burn zeroed the holder's shares but kept what they had earned.
    assert_eq!(m.dataset.balance(&alice), 0);
    m.assert_pool_tracks(&alice);
    assert_eq!(m.pool.get_state().total_shares, 0);
    assert_eq!(m.pool.claim(&alice), RENTAL_PRICE);
    assert_eq!(m.quote.balance(&alice), 500 + RENTAL_PRICE);
}

#[test]
fn test_sell_back_reduces_pool_shares() {
    let m = Marketplace::deploy(amm_curve(2_000_000, 2_000_000), 1_000_000, 0);
    let alice = m.funded_user(100_000);
    let paid_before = m.quote.balance(&alice);

    let receipt = m.ido.buy(&alice, &50_000, &100_000);
    m.ido.sell(&alice, &20_000, &0);
    m.assert_pool_tracks(&alice);
    assert_eq!(m.pool.get_state().total_shares, 30_000);

    m.ido.sell(&alice, &30_000, &0);
    assert_eq!(m.quote.balance(&alice), paid_before);
    assert_eq!(m.pool.get_state().total_shares, 0);
    assert!(receipt.quote_amount > 0);
    assert_eq!(m.ido.get_state().quote_raised, 0);
}

#[test]
fn test_revenue_before_sale_goes_to_first_holders() {
    let m = Marketplace::deploy(flat_curve(), 1_000, 0);
    let renter = m.funded_user(2 * RENTAL_PRICE);
    m.pool.rent(&renter, &1);
    assert_eq!(m.pool.get_state().undistributed, RENTAL_PRICE);

    let alice = m.funded_user(100);
    m.ido.buy(&alice, &100, &100);
    m.pool.rent(&renter, &1);

    assert_eq!(m.pool.claimable(&alice), 2 * RENTAL_PRICE);
    assert_eq!(m.pool.get_state().undistributed, 0);
}

#[test]
fn test_governance_reprices_rental() {
    let m = Marketplace::deploy(flat_curve(), 1_000, 0);
    m.pool.set_rental_price(&m.governance, &(RENTAL_PRICE * 2));

    let renter = m.funded_user(RENTAL_PRICE * 2);
    m.pool.rent(&renter, &1);
    assert_eq!(m.quote.balance(&renter), 0);
    assert_eq!(m.pool.get_admin(), m.admin);
}
