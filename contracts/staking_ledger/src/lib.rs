//! Epoch Staking Ledger Contract
//!
//! Stakers lock a liquidity pair token for a fixed epoch and receive a share
//! of a pre-funded reward pool, paid out together with their principal once
//! the release time has passed.
//!
//! ## Schedule
//!
//! `start_time <= now < close_time` accepts deposits, `close_time <= now <
//! release_time` freezes everything, `now >= release_time` releases principal
//! and reward. See [`epoch`].
//!
//! ## Key design decisions
//!
//! - **Fixed pool**: the reward pool is a snapshot of the reward-token
//!   custody balance taken at configuration. `allocated_rewards` may never
//!   exceed it.
//! - **Stage / commit**: every mutation is staged, validated and committed
//!   before the token transfers run; a failed transfer restores the
//!   pre-call snapshot. See [`stage`].
//! - **Reentrancy lock**: held by every state-changing entry point for its
//!   full duration, nested token and oracle calls included.
//! - **Early exit forfeits rewards**: `withdraw_early` returns principal only.
//! - **No events**: diagnostic `log!` entries only.

#![no_std]

mod access_control;
mod epoch;
mod guard;
mod math;
mod pool;
mod rewards;
mod stage;
mod storage;
mod token_integration;
pub mod types;

pub use pool::{LiquidityPool, LiquidityPoolClient};
pub use staking_errors::ContractError;
pub use types::{AccountEntry, LedgerState, Phase, StakingConfig};

use access_control::{require_active, require_admin};
use guard::non_reentrant;
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use stage::Stage;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod test_reentrancy;

#[contract]
pub struct StakingLedger;

#[contractimpl]
impl StakingLedger {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores the administrator.
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if storage::has_admin(&e) {
            return Err(ContractError::AlreadyInitialized);
        }
        storage::set_admin(&e, &admin);
        storage::set_state(&e, &LedgerState::default());
        storage::extend_instance_ttl(&e);
        Ok(())
    }

    /// Sets the schedule, yield and asset pair. Admin only, before start.
    ///
    /// May be called again while the epoch is still unstarted; each call
    /// fully replaces the previous configuration and re-snapshots the reward
    /// pool from the current reward-token custody balance.
    ///
    /// Besides the liveness and schedule checks, the liquidity and reward
    /// token must differ (`IdenticalAssets`).
    #[allow(clippy::too_many_arguments)]
    pub fn configure(
        e: Env,
        admin: Address,
        start_time: u64,
        close_time: u64,
        release_time: u64,
        percentage_yield: u32,
        liquidity_token: Address,
        reward_token: Address,
    ) -> Result<StakingConfig, ContractError> {
        require_admin(&e, &admin)?;
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        non_reentrant(&e, || {
            epoch::require_unstarted(&e, storage::get_config(&e).as_ref())?;
            epoch::validate_schedule(start_time, close_time, release_time)?;
            if liquidity_token == reward_token {
                return Err(ContractError::IdenticalAssets);
            }
            token_integration::require_live(&e, &liquidity_token)?;
            token_integration::require_live(&e, &reward_token)?;

            let reward_pool = token_integration::custody_balance(&e, &reward_token)?;
            let config = StakingConfig {
                start_time,
                close_time,
                release_time,
                percentage_yield,
                liquidity_token,
                reward_token,
            };

            let mut stage = Stage::open(&e);
            stage.state.rewards_amount = reward_pool;
            stage.commit()?;
            storage::set_config(&e, &config);

            log!(&e, "configured", start_time, close_time, release_time, reward_pool);
            Ok(config)
        })
    }

    /// Withdraw `amount` of any asset held by the ledger to the admin.
    ///
    /// - The liquidity token is never withdrawable.
    /// - The reward token is withdrawable only down to `allocated_rewards`,
    ///   both in custody and in the tracked pool; the pool shrinks by `amount`.
    ///   Checking the tracked pool keeps `allocated_rewards <= rewards_amount`
    ///   true after the decrement, even when custody holds unsnapshotted funds.
    /// - Anything else is returned without restriction.
    pub fn withdraw_surplus(
        e: Env,
        admin: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        non_reentrant(&e, || {
            if amount <= 0 {
                return Err(ContractError::InvalidAmount);
            }

            let mut stage = Stage::open(&e);
            if let Some(config) = storage::get_config(&e) {
                if asset == config.liquidity_token {
                    return Err(ContractError::LiquidityWithdrawalForbidden);
                }
                if asset == config.reward_token {
                    let custody = token_integration::custody_balance(&e, &asset)?;
                    let remaining = math::sub_i128(custody, amount)?;
                    let reward_pool = math::sub_i128(stage.state.rewards_amount, amount)?;
                    if remaining < stage.state.allocated_rewards
                        || reward_pool < stage.state.allocated_rewards
                    {
                        return Err(ContractError::SurplusBreachesCoverage);
                    }
                    stage.state.rewards_amount = reward_pool;
                }
            }

            stage.commit()?.interact(|| {
                token_integration::transfer_from_contract(&e, &asset, &admin, amount)
            })?;

            log!(&e, "surplus_withdrawn", asset, amount);
            Ok(())
        })
    }

    /// Allow `withdraw_early` from now on. There is no way back.
    pub fn enable_early_exit(e: Env, admin: Address) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        let mut stage = Stage::open(&e);
        stage.state.early_exit_allowed = true;
        stage.commit()?;

        log!(&e, "early_exit_enabled");
        Ok(())
    }

    /// Hand the administrator role to `new_admin`.
    pub fn transfer_admin(e: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        storage::set_admin(&e, &new_admin);
        log!(&e, "admin_transferred", admin, new_admin);
        Ok(())
    }

    /// Permanently shut the ledger down. Requires no outstanding rewards.
    ///
    /// The whole reward-token balance and any liquidity-token balance beyond
    /// the tracked stake are swept to the admin. Every later call fails with
    /// `Decommissioned`.
    pub fn decommission(e: Env, admin: Address) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        non_reentrant(&e, || {
            let mut stage = Stage::open(&e);
            if stage.state.allocated_rewards != 0 {
                return Err(ContractError::RewardsOutstanding);
            }
            stage.state.decommissioned = true;
            let total_staked = stage.state.total_staked;

            stage.commit()?.interact(|| {
                let Some(config) = storage::get_config(&e) else {
                    return Ok(());
                };
                let rewards = token_integration::custody_balance(&e, &config.reward_token)?;
                token_integration::transfer_from_contract(
                    &e,
                    &config.reward_token,
                    &admin,
                    rewards,
                )?;

                let liquidity = token_integration::custody_balance(&e, &config.liquidity_token)?;
                let untracked = math::sub_i128(liquidity, total_staked)?;
                if untracked > 0 {
                    token_integration::transfer_from_contract(
                        &e,
                        &config.liquidity_token,
                        &admin,
                        untracked,
                    )?;
                }
                Ok(())
            })?;

            log!(&e, "decommissioned", admin);
            Ok(())
        })
    }

    // ── Staking lifecycle ──────────────────────────────────────────────────

    /// Lock `amount` liquidity tokens while the epoch is open.
    ///
    /// The deposit is priced against the pair's reward-asset reserve and the
    /// resulting reward is booked against the pool. Returns the reward added.
    ///
    /// Requirements:
    /// - `amount` > 0
    /// - phase is `Open`
    /// - the pair's `token_0` is the reward token
    /// - the new allocation fits inside the reward pool
    /// - caller has approved the contract to spend `amount`
    pub fn deposit(e: Env, staker: Address, amount: i128) -> Result<i128, ContractError> {
        staker.require_auth();
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        non_reentrant(&e, || {
            if amount <= 0 {
                return Err(ContractError::InvalidAmount);
            }
            let config = storage::get_config(&e).ok_or(ContractError::NotOpen)?;
            epoch::require_open(&e, &config)?;

            let snapshot = pool::snapshot(&e, &config.liquidity_token, &config.reward_token)?;
            let reward = rewards::reward_for(amount, &snapshot, config.percentage_yield)?;

            let mut stage = Stage::for_account(&e, &staker);
            rewards::allocate(&mut stage.state, &mut stage.entry, reward)?;
            stage.entry.staked = math::add_i128(stage.entry.staked, amount)?;
            stage.state.total_staked = math::add_i128(stage.state.total_staked, amount)?;

            // Pulling the tokens is the final step: nothing after it can fail.
            stage.commit()?.interact(|| {
                token_integration::transfer_into_contract(
                    &e,
                    &config.liquidity_token,
                    &staker,
                    amount,
                )
            })?;

            log!(&e, "deposit", staker, amount, reward);
            Ok(reward)
        })
    }

    /// Withdraw the full principal and the full reward after release time.
    ///
    /// Returns the settled entry (principal and reward paid out).
    pub fn withdraw_at_release(e: Env, staker: Address) -> Result<AccountEntry, ContractError> {
        staker.require_auth();
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        non_reentrant(&e, || {
            let config = storage::get_config(&e).ok_or(ContractError::NotReleasable)?;
            epoch::require_releasable(&e, &config)?;

            let mut stage = Stage::for_account(&e, &staker);
            let principal = stage.entry.staked;
            stage.entry.staked = 0;
            stage.state.total_staked = math::sub_i128(stage.state.total_staked, principal)?;
            let reward = rewards::release(&mut stage.state, &mut stage.entry)?;

            // CEI: both balances are zeroed before either transfer runs.
            stage.commit()?.interact(|| {
                token_integration::transfer_from_contract(
                    &e,
                    &config.liquidity_token,
                    &staker,
                    principal,
                )?;
                token_integration::transfer_from_contract(
                    &e,
                    &config.reward_token,
                    &staker,
                    reward,
                )
            })?;

            log!(&e, "withdraw_at_release", staker, principal, reward);
            Ok(AccountEntry {
                staked: principal,
                reward_owed: reward,
            })
        })
    }

    /// Withdraw the principal at any time once early exit is enabled.
    ///
    /// The reward claim is forfeited: it is removed from the allocation and
    /// never paid. Returns the entry as it stood before the exit.
    pub fn withdraw_early(e: Env, staker: Address) -> Result<AccountEntry, ContractError> {
        staker.require_auth();
        require_active(&e)?;
        storage::extend_instance_ttl(&e);

        non_reentrant(&e, || {
            let mut stage = Stage::for_account(&e, &staker);
            if !stage.state.early_exit_allowed {
                return Err(ContractError::EarlyExitDisabled);
            }
            let config = storage::require_config(&e)?;

            let principal = stage.entry.staked;
            stage.entry.staked = 0;
            stage.state.total_staked = math::sub_i128(stage.state.total_staked, principal)?;
            let forfeited = rewards::release(&mut stage.state, &mut stage.entry)?;

            stage.commit()?.interact(|| {
                token_integration::transfer_from_contract(
                    &e,
                    &config.liquidity_token,
                    &staker,
                    principal,
                )
            })?;

            log!(&e, "withdraw_early", staker, principal, forfeited);
            Ok(AccountEntry {
                staked: principal,
                reward_owed: forfeited,
            })
        })
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        storage::get_admin(&e)
    }

    pub fn get_config(e: Env) -> Result<StakingConfig, ContractError> {
        storage::require_config(&e)
    }

    /// Phase at the current ledger timestamp.
    pub fn get_phase(e: Env) -> Phase {
        epoch::current_phase(&e, storage::get_config(&e).as_ref())
    }

    /// Returns an empty entry for addresses that never staked.
    pub fn get_account(e: Env, staker: Address) -> AccountEntry {
        storage::get_account(&e, &staker)
    }

    pub fn get_staked(e: Env, staker: Address) -> i128 {
        storage::get_account(&e, &staker).staked
    }

    pub fn get_reward_owed(e: Env, staker: Address) -> i128 {
        storage::get_account(&e, &staker).reward_owed
    }

    pub fn get_allocated_rewards(e: Env) -> i128 {
        storage::get_state(&e).allocated_rewards
    }

    pub fn get_rewards_amount(e: Env) -> i128 {
        storage::get_state(&e).rewards_amount
    }

    pub fn get_total_staked(e: Env) -> i128 {
        storage::get_state(&e).total_staked
    }

    pub fn get_state(e: Env) -> LedgerState {
        storage::get_state(&e)
    }

    pub fn is_early_exit_allowed(e: Env) -> bool {
        storage::get_state(&e).early_exit_allowed
    }

    pub fn is_decommissioned(e: Env) -> bool {
        storage::get_state(&e).decommissioned
    }

    /// Check if the reentrancy lock is currently held.
    pub fn is_locked(e: Env) -> bool {
        storage::is_locked(&e)
    }

    /// Reward a deposit of `amount` would earn against the pair's current
    /// reserves. Does not check the phase or the remaining pool.
    pub fn quote_reward(e: Env, amount: i128) -> Result<i128, ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let config = storage::require_config(&e)?;
        let snapshot = pool::snapshot(&e, &config.liquidity_token, &config.reward_token)?;
        rewards::reward_for(amount, &snapshot, config.percentage_yield)
    }
}
