//! Reentrancy lock tests.
//!
//! The host refuses genuine contract re-entry on its own, so a nested call is
//! simulated by setting the lock flag directly in the ledger's storage.

#![cfg(test)]

use crate::testutils::*;
use crate::types::DataKey;
use crate::ContractError;
use soroban_sdk::Env;

fn hold_lock(e: &Env, s: &Setup) {
    e.as_contract(&s.contract_id, || {
        e.storage().instance().set(&DataKey::Locked, &true);
    });
}

#[test]
fn test_lock_released_after_success() {
    let e = Env::default();
    let s = setup_open(&e);
    s.client.deposit(&s.staker, &500);
    assert!(!s.client.is_locked());

    set_time(&e, RELEASE);
    s.client.withdraw_at_release(&s.staker);
    assert!(!s.client.is_locked());
}

#[test]
fn test_lock_released_after_failure() {
    let e = Env::default();
    let s = setup_open(&e);
    assert_contract_error(
        s.client.try_deposit(&s.staker, &0),
        ContractError::InvalidAmount,
    );
    assert!(!s.client.is_locked());
    // The next call is not blocked.
    assert_eq!(s.client.deposit(&s.staker, &500), 80);
}

#[test]
fn test_locked_deposit_rejected() {
    let e = Env::default();
    let s = setup_open(&e);
    hold_lock(&e, &s);
    assert_contract_error(
        s.client.try_deposit(&s.staker, &500),
        ContractError::ReentrancyDetected,
    );
    assert_eq!(s.liquidity_of(&s.staker), STAKER_MINT);
}

#[test]
fn test_locked_withdrawals_rejected() {
    let e = Env::default();
    let s = setup_open(&e);
    s.client.deposit(&s.staker, &500);
    s.client.enable_early_exit(&s.admin);
    set_time(&e, RELEASE);
    hold_lock(&e, &s);

    assert_contract_error(
        s.client.try_withdraw_at_release(&s.staker),
        ContractError::ReentrancyDetected,
    );
    assert_contract_error(
        s.client.try_withdraw_early(&s.staker),
        ContractError::ReentrancyDetected,
    );
    assert_eq!(s.client.get_staked(&s.staker), 500);
    assert_eq!(s.reward_of(&s.staker), 0);
}

#[test]
fn test_locked_admin_operations_rejected() {
    let e = Env::default();
    let s = setup(&e);
    hold_lock(&e, &s);

    assert_contract_error(
        s.client.try_configure(
            &s.admin,
            &START,
            &CLOSE,
            &RELEASE,
            &YIELD,
            &s.pair.address,
            &s.reward,
        ),
        ContractError::ReentrancyDetected,
    );
    assert_contract_error(
        s.client.try_withdraw_surplus(&s.admin, &s.reward, &1),
        ContractError::ReentrancyDetected,
    );
    assert_contract_error(
        s.client.try_decommission(&s.admin),
        ContractError::ReentrancyDetected,
    );
    assert!(!s.client.is_decommissioned());
}

#[test]
fn test_lock_not_taken_by_queries() {
    let e = Env::default();
    let s = setup_open(&e);
    hold_lock(&e, &s);
    assert!(s.client.is_locked());
    assert_eq!(s.client.quote_reward(&500), 80);
    assert_eq!(s.client.get_allocated_rewards(), 0);
}
