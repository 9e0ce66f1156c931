//! Stage / commit / restore for ledger mutations.
//!
//! An entry point loads the global `LedgerState` (and at most one
//! `AccountEntry`) into a `Stage`, mutates the staged copies, then commits.
//! Commit re-checks the pool invariant and writes storage *before* any
//! external transfer is issued. The returned `Committed` runs the transfers
//! and writes the pre-call snapshot back if any of them fails, so a failed
//! call never leaves a partial mutation behind.

use crate::rewards::check_pool_invariant;
use crate::storage;
use crate::types::{AccountEntry, LedgerState};
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

#[derive(Clone)]
struct Snapshot {
    state: LedgerState,
    entry: AccountEntry,
}

pub struct Stage<'a> {
    e: &'a Env,
    staker: Option<Address>,
    before: Snapshot,
    pub state: LedgerState,
    pub entry: AccountEntry,
}

impl<'a> Stage<'a> {
    /// Stages only the global state.
    pub fn open(e: &'a Env) -> Self {
        let state = storage::get_state(e);
        Self {
            e,
            staker: None,
            before: Snapshot {
                state: state.clone(),
                entry: AccountEntry::default(),
            },
            state,
            entry: AccountEntry::default(),
        }
    }

    /// Stages the global state together with `staker`'s entry.
    pub fn for_account(e: &'a Env, staker: &Address) -> Self {
        let state = storage::get_state(e);
        let entry = storage::get_account(e, staker);
        Self {
            e,
            staker: Some(staker.clone()),
            before: Snapshot {
                state: state.clone(),
                entry: entry.clone(),
            },
            state,
            entry,
        }
    }

    /// Validates the staged state and persists it. Nothing is written when
    /// validation fails.
    pub fn commit(self) -> Result<Committed<'a>, ContractError> {
        check_pool_invariant(&self.state)?;
        write(self.e, self.staker.as_ref(), &self.state, &self.entry);
        Ok(Committed {
            e: self.e,
            staker: self.staker,
            before: self.before,
        })
    }
}

/// Handle to a committed stage whose external interactions are still pending.
pub struct Committed<'a> {
    e: &'a Env,
    staker: Option<Address>,
    before: Snapshot,
}

impl Committed<'_> {
    /// Runs `interactions`; on failure the pre-call snapshot is restored and
    /// the error is returned unchanged.
    pub fn interact<T, F>(self, interactions: F) -> Result<T, ContractError>
    where
        F: FnOnce() -> Result<T, ContractError>,
    {
        match interactions() {
            Ok(value) => Ok(value),
            Err(err) => {
                self.restore();
                Err(err)
            }
        }
    }

    fn restore(self) {
        write(
            self.e,
            self.staker.as_ref(),
            &self.before.state,
            &self.before.entry,
        );
    }
}

fn write(e: &Env, staker: Option<&Address>, state: &LedgerState, entry: &AccountEntry) {
    storage::set_state(e, state);
    if let Some(staker) = staker {
        storage::set_account(e, staker, entry);
    }
}
