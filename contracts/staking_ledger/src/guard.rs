//! Per-instance reentrancy lock.
//!
//! Every state-changing entry point runs inside `non_reentrant`. The lock is
//! held across all nested token and oracle calls and released on both the
//! success and the error path.

use crate::storage;
use soroban_sdk::Env;
use staking_errors::ContractError;

pub fn non_reentrant<T, F>(e: &Env, f: F) -> Result<T, ContractError>
where
    F: FnOnce() -> Result<T, ContractError>,
{
    if storage::is_locked(e) {
        return Err(ContractError::ReentrancyDetected);
    }
    storage::set_locked(e, true);
    let result = f();
    storage::set_locked(e, false);
    result
}
