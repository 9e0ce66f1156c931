//! Typed access to contract storage.
//!
//! | Key                      | Tier           |
//! |--------------------------|----------------|
//! | `DataKey::Admin`         | `instance()`   |
//! | `DataKey::Config`        | `instance()`   |
//! | `DataKey::State`         | `instance()`   |
//! | `DataKey::Locked`        | `instance()`   |
//! | `DataKey::Account(addr)` | `persistent()` |

use crate::types::{AccountEntry, DataKey, LedgerState, StakingConfig};
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

// ─── TTL constants ────────────────────────────────────────────────────────────

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

// ─── Admin ────────────────────────────────────────────────────────────────────

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

// ─── Config ───────────────────────────────────────────────────────────────────

pub fn get_config(e: &Env) -> Option<StakingConfig> {
    e.storage().instance().get(&DataKey::Config)
}

pub fn require_config(e: &Env) -> Result<StakingConfig, ContractError> {
    get_config(e).ok_or(ContractError::NotConfigured)
}

pub fn set_config(e: &Env, config: &StakingConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

// ─── Ledger state ─────────────────────────────────────────────────────────────

pub fn get_state(e: &Env) -> LedgerState {
    e.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(e: &Env, state: &LedgerState) {
    e.storage().instance().set(&DataKey::State, state);
}

// ─── Accounts ─────────────────────────────────────────────────────────────────

/// Reads an account entry, bumping its TTL when present. Absent entries read
/// as empty.
pub fn get_account(e: &Env, staker: &Address) -> AccountEntry {
    let key = DataKey::Account(staker.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, AccountEntry>(&key) {
        Some(entry) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            entry
        }
        None => AccountEntry::default(),
    }
}

/// Writes an account entry; an empty entry is removed instead of stored.
pub fn set_account(e: &Env, staker: &Address, entry: &AccountEntry) {
    let key = DataKey::Account(staker.clone());
    let storage = e.storage().persistent();
    if entry.is_empty() {
        storage.remove(&key);
    } else {
        storage.set(&key, entry);
        storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    }
}

// ─── Lock ─────────────────────────────────────────────────────────────────────

pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(e: &Env, locked: bool) {
    e.storage().instance().set(&DataKey::Locked, &locked);
}
