//! Token integration helpers for the staking ledger.
//! Centralizes liveness probing, balance reads and transfers for both the
//! liquidity and the reward asset. Transfer failures surface as
//! `ContractError::TransferFailed` instead of aborting the host.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

/// @notice Returns true if `asset` is a deployed contract answering the token interface.
/// @dev Probes with a read-only `balance` call on the ledger's own address.
pub fn is_live(e: &Env, asset: &Address) -> bool {
    let contract = e.current_contract_address();
    matches!(TokenClient::new(e, asset).try_balance(&contract), Ok(Ok(_)))
}

pub fn require_live(e: &Env, asset: &Address) -> Result<(), ContractError> {
    if is_live(e, asset) {
        Ok(())
    } else {
        Err(ContractError::AssetNotLive)
    }
}

/// @notice Balance of `asset` held in custody by this contract.
pub fn custody_balance(e: &Env, asset: &Address) -> Result<i128, ContractError> {
    let contract = e.current_contract_address();
    TokenClient::new(e, asset)
        .try_balance(&contract)
        .map_err(|_| ContractError::TransferFailed)?
        .map_err(|_| ContractError::TransferFailed)
}

/// @notice Pulls `amount` of `asset` from `owner` into custody.
/// @dev Requires prior approval for this contract as spender.
pub fn transfer_into_contract(
    e: &Env,
    asset: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    TokenClient::new(e, asset)
        .try_transfer_from(&contract, owner, &contract, &amount)
        .map_err(|_| ContractError::TransferFailed)?
        .map_err(|_| ContractError::TransferFailed)
}

/// @notice Pays `amount` of `asset` out of custody to `recipient`.
pub fn transfer_from_contract(
    e: &Env,
    asset: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    TokenClient::new(e, asset)
        .try_transfer(&contract, recipient, &amount)
        .map_err(|_| ContractError::TransferFailed)?
        .map_err(|_| ContractError::TransferFailed)
}
