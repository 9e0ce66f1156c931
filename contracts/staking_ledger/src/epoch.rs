//! Epoch controller: maps the ledger clock onto the staking schedule.
//!
//! Phases are derived on every call from `env.ledger().timestamp()`; nothing
//! is cached and no transition call exists.

use crate::types::{Phase, StakingConfig};
use soroban_sdk::Env;
use staking_errors::ContractError;

/// Phase of `config` at instant `now`. An unconfigured ledger is `Unstarted`.
pub fn phase_at(config: Option<&StakingConfig>, now: u64) -> Phase {
    match config {
        None => Phase::Unstarted,
        Some(cfg) if now < cfg.start_time => Phase::Unstarted,
        Some(cfg) if now < cfg.close_time => Phase::Open,
        Some(cfg) if now < cfg.release_time => Phase::Closed,
        Some(_) => Phase::Releasable,
    }
}

pub fn current_phase(e: &Env, config: Option<&StakingConfig>) -> Phase {
    phase_at(config, e.ledger().timestamp())
}

/// Schedule must be strictly increasing: `start < close < release`.
pub fn validate_schedule(
    start_time: u64,
    close_time: u64,
    release_time: u64,
) -> Result<(), ContractError> {
    if start_time < close_time && close_time < release_time {
        Ok(())
    } else {
        Err(ContractError::InvalidSchedule)
    }
}

pub fn require_unstarted(e: &Env, config: Option<&StakingConfig>) -> Result<(), ContractError> {
    match current_phase(e, config) {
        Phase::Unstarted => Ok(()),
        _ => Err(ContractError::AlreadyStarted),
    }
}

pub fn require_open(e: &Env, config: &StakingConfig) -> Result<(), ContractError> {
    match current_phase(e, Some(config)) {
        Phase::Open => Ok(()),
        _ => Err(ContractError::NotOpen),
    }
}

pub fn require_releasable(e: &Env, config: &StakingConfig) -> Result<(), ContractError> {
    match current_phase(e, Some(config)) {
        Phase::Releasable => Ok(()),
        _ => Err(ContractError::NotReleasable),
    }
}
