use soroban_sdk::{contracttype, Address};

// ─── Epoch phase ───────────────────────────────────────────────────────────

/// Where the ledger sits on its schedule at a given instant.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Before `start_time`, or not configured yet.
    Unstarted,
    /// `start_time <= now < close_time`: deposits accepted.
    Open,
    /// `close_time <= now < release_time`: nothing moves.
    Closed,
    /// `now >= release_time`: principal and reward can be withdrawn.
    Releasable,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Schedule, yield and asset references set once by the admin before opening.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    /// First timestamp at which deposits are accepted.
    pub start_time: u64,
    /// First timestamp at which deposits are refused.
    pub close_time: u64,
    /// First timestamp at which principal and reward are released.
    pub release_time: u64,
    /// Reward yield in percent of the priced deposit (80 = 80 %).
    pub percentage_yield: u32,
    /// Liquidity pair token; doubles as the pool price/reserve oracle.
    pub liquidity_token: Address,
    /// Token paid out as reward.
    pub reward_token: Address,
}

// ─── Ledger state ──────────────────────────────────────────────────────────

/// Per-staker custody and reward record.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountEntry {
    /// Liquidity-token units held in custody for this staker.
    pub staked: i128,
    /// Reward-token units promised to this staker.
    pub reward_owed: i128,
}

impl AccountEntry {
    pub fn is_empty(&self) -> bool {
        self.staked == 0 && self.reward_owed == 0
    }
}

/// Global bookkeeping shared by every entry point.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerState {
    /// Sum of every `AccountEntry::reward_owed`.
    pub allocated_rewards: i128,
    /// Reward pool snapshot taken at configuration, reduced by surplus withdrawals.
    pub rewards_amount: i128,
    /// Sum of every `AccountEntry::staked`.
    pub total_staked: i128,
    /// One-way switch set by the admin.
    pub early_exit_allowed: bool,
    /// Terminal flag; once set no operation succeeds.
    pub decommissioned: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Administrator address. Stored in `instance()`.
    Admin,
    /// `StakingConfig`. Stored in `instance()`.
    Config,
    /// `LedgerState`. Stored in `instance()`.
    State,
    /// Reentrancy lock flag. Stored in `instance()`.
    Locked,
    /// Per-staker `AccountEntry`. Stored in `persistent()`.
    Account(Address),
}
