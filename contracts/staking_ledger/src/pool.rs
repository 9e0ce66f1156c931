//! Liquidity pair oracle interface.
//!
//! The liquidity token is itself the pair contract: besides the token
//! interface it reports its reserves, its first asset and its total supply.

use soroban_sdk::{contractclient, Address, Env};
use staking_errors::ContractError;

#[allow(dead_code)]
#[contractclient(name = "LiquidityPoolClient")]
pub trait LiquidityPool {
    /// `(reserve_0, reserve_1, last_update_time)`.
    fn get_reserves(e: Env) -> (i128, i128, u64);
    /// Asset whose reserve is reported as `reserve_0`.
    fn token_0(e: Env) -> Address;
    /// Outstanding supply of the pair token.
    fn total_supply(e: Env) -> i128;
}

/// Pricing inputs read from the pair for one deposit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSnapshot {
    pub reserve: i128,
    pub total_supply: i128,
}

/// Reads the pair's reward-asset reserve and total supply.
///
/// The pair's `token_0` must be `reward_token`; otherwise the reported
/// reserve prices a different asset and the read is refused.
pub fn snapshot(
    e: &Env,
    pair: &Address,
    reward_token: &Address,
) -> Result<PoolSnapshot, ContractError> {
    let client = LiquidityPoolClient::new(e, pair);

    let token_0 = client
        .try_token_0()
        .map_err(|_| ContractError::OracleUnavailable)?
        .map_err(|_| ContractError::OracleUnavailable)?;
    if token_0 != *reward_token {
        return Err(ContractError::ReserveAssetMismatch);
    }

    let (reserve, _reserve_1, _updated_at) = client
        .try_get_reserves()
        .map_err(|_| ContractError::OracleUnavailable)?
        .map_err(|_| ContractError::OracleUnavailable)?;
    let total_supply = client
        .try_total_supply()
        .map_err(|_| ContractError::OracleUnavailable)?
        .map_err(|_| ContractError::OracleUnavailable)?;
    if reserve < 0 || total_supply <= 0 {
        return Err(ContractError::InvalidPoolState);
    }

    Ok(PoolSnapshot {
        reserve,
        total_supply,
    })
}
