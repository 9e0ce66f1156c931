//! Reward accountant.
//!
//! Prices a deposit against the pair's reward-asset reserve and books the
//! resulting reward against the funded pool. The pool invariant
//! `allocated_rewards <= rewards_amount` is re-checked after every allocation.

use crate::math::{add_i128, div_i128, mul_i128, percent, sub_i128};
use crate::pool::PoolSnapshot;
use crate::types::{AccountEntry, LedgerState};
use staking_errors::ContractError;

/// `(((amount * reserve) / total_supply) * percentage_yield) / 100`
///
/// Each division truncates and the steps run in exactly this order; changing
/// the order changes the rounding.
pub fn compute_reward(
    amount: i128,
    reserve: i128,
    total_supply: i128,
    percentage_yield: u32,
) -> Result<i128, ContractError> {
    let priced = div_i128(mul_i128(amount, reserve)?, total_supply)?;
    percent(priced, percentage_yield)
}

pub fn reward_for(
    amount: i128,
    pool: &PoolSnapshot,
    percentage_yield: u32,
) -> Result<i128, ContractError> {
    compute_reward(amount, pool.reserve, pool.total_supply, percentage_yield)
}

/// Both global invariants that must hold after every successful call.
pub fn check_pool_invariant(state: &LedgerState) -> Result<(), ContractError> {
    if state.allocated_rewards < 0 || state.total_staked < 0 {
        return Err(ContractError::Underflow);
    }
    if state.allocated_rewards > state.rewards_amount {
        return Err(ContractError::RewardPoolExceeded);
    }
    Ok(())
}

/// Books `reward` to `entry` and to the global allocation.
pub fn allocate(
    state: &mut LedgerState,
    entry: &mut AccountEntry,
    reward: i128,
) -> Result<(), ContractError> {
    entry.reward_owed = add_i128(entry.reward_owed, reward)?;
    state.allocated_rewards = add_i128(state.allocated_rewards, reward)?;
    check_pool_invariant(state)
}

/// Clears `entry`'s reward claim and removes it from the global allocation.
/// Returns the amount that was owed.
pub fn release(state: &mut LedgerState, entry: &mut AccountEntry) -> Result<i128, ContractError> {
    let owed = entry.reward_owed;
    state.allocated_rewards = sub_i128(state.allocated_rewards, owed)?;
    entry.reward_owed = 0;
    check_pool_invariant(state)?;
    Ok(owed)
}
