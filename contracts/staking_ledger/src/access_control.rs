use crate::storage;
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

/// Caller must sign and be the stored administrator.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let stored = storage::get_admin(e)?;
    if stored != *caller {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

/// Every operation refuses to run on a decommissioned ledger.
pub fn require_active(e: &Env) -> Result<(), ContractError> {
    if storage::get_state(e).decommissioned {
        return Err(ContractError::Decommissioned);
    }
    Ok(())
}
