#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by the kind of rule that was broken.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Operation attempted outside its epoch phase (codes 200-299).
    Phase,
    /// Reward-pool and custody coverage rules (codes 300-399).
    Invariant,
    /// Token transfer or pool oracle call failures (codes 400-499).
    ExternalCall,
    /// Bad configuration, dead assets or a decommissioned ledger (codes 500-599).
    Configuration,
    /// Reentrant or concurrent invocation (codes 600-699).
    Concurrency,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum for the staking ledger.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Phase
///   300 - 399 : Invariant
///   400 - 499 : ExternalCall
///   500 - 599 : Configuration
///   600 - 699 : Concurrency
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized with an administrator.
    NotInitialized = 1,

    /// Contract already has an administrator.
    AlreadyInitialized = 2,

    /// Staking schedule and assets have not been configured yet.
    NotConfigured = 3,

    // --- Authorization (100-199) ---
    /// Caller is not the administrator.
    NotAdmin = 100,

    // --- Phase (200-299) ---
    /// Deposits are only accepted while the epoch is open.
    NotOpen = 200,

    /// Principal and reward are only released after the release time.
    NotReleasable = 201,

    /// Configuration is only permitted before the epoch starts.
    AlreadyStarted = 202,

    /// Early exit has not been enabled by the administrator.
    EarlyExitDisabled = 203,

    // --- Invariant (300-399) ---
    /// Allocated rewards would exceed the funded reward pool.
    RewardPoolExceeded = 300,

    /// Surplus withdrawal would leave allocated rewards uncovered.
    SurplusBreachesCoverage = 301,

    /// The staked liquidity token can never be withdrawn as surplus.
    LiquidityWithdrawalForbidden = 302,

    /// Rewards are still allocated to stakers.
    RewardsOutstanding = 303,

    // --- ExternalCall (400-499) ---
    /// A token transfer reported failure.
    TransferFailed = 400,

    /// The liquidity pool oracle could not be queried.
    OracleUnavailable = 401,

    /// The liquidity pool reported a negative reserve or non-positive supply.
    InvalidPoolState = 402,

    // --- Configuration (500-599) ---
    /// Timestamps must satisfy start < close < release.
    InvalidSchedule = 500,

    /// A referenced asset is not a live, callable contract.
    AssetNotLive = 501,

    /// The pool's reserve asset is not the reward token.
    ReserveAssetMismatch = 502,

    /// The ledger has been decommissioned.
    Decommissioned = 503,

    /// Amount argument must be strictly positive.
    InvalidAmount = 504,

    /// Liquidity and reward token must be different assets.
    IdenticalAssets = 505,

    // --- Concurrency (600-699) ---
    /// Another entry point already holds the ledger lock.
    ReentrancyDetected = 600,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    Underflow = 701,

    /// Division by zero in a checked arithmetic operation.
    DivisionByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for diagnostic logging and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::NotConfigured => ErrorCategory::Initialization,

            ContractError::NotAdmin => ErrorCategory::Authorization,

            ContractError::NotOpen
            | ContractError::NotReleasable
            | ContractError::AlreadyStarted
            | ContractError::EarlyExitDisabled => ErrorCategory::Phase,

            ContractError::RewardPoolExceeded
            | ContractError::SurplusBreachesCoverage
            | ContractError::LiquidityWithdrawalForbidden
            | ContractError::RewardsOutstanding => ErrorCategory::Invariant,

            ContractError::TransferFailed
            | ContractError::OracleUnavailable
            | ContractError::InvalidPoolState => ErrorCategory::ExternalCall,

            ContractError::InvalidSchedule
            | ContractError::AssetNotLive
            | ContractError::ReserveAssetMismatch
            | ContractError::Decommissioned
            | ContractError::InvalidAmount
            | ContractError::IdenticalAssets => ErrorCategory::Configuration,

            ContractError::ReentrancyDetected => ErrorCategory::Concurrency,

            ContractError::Overflow
            | ContractError::Underflow
            | ContractError::DivisionByZero => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotConfigured => "Staking schedule has not been configured",
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::NotOpen => "Deposits are only accepted while staking is open",
            ContractError::NotReleasable => "Release time has not been reached",
            ContractError::AlreadyStarted => "Configuration is closed once staking has started",
            ContractError::EarlyExitDisabled => "Early exit has not been enabled",
            ContractError::RewardPoolExceeded => "Allocated rewards would exceed the reward pool",
            ContractError::SurplusBreachesCoverage => {
                "Withdrawal would leave allocated rewards uncovered"
            }
            ContractError::LiquidityWithdrawalForbidden => {
                "Staked liquidity token cannot be withdrawn as surplus"
            }
            ContractError::RewardsOutstanding => "Rewards are still allocated to stakers",
            ContractError::TransferFailed => "Token transfer failed",
            ContractError::OracleUnavailable => "Liquidity pool oracle could not be queried",
            ContractError::InvalidPoolState => {
                "Liquidity pool reported a negative reserve or empty supply"
            }
            ContractError::InvalidSchedule => "Timestamps must satisfy start < close < release",
            ContractError::AssetNotLive => "Referenced asset is not a live contract",
            ContractError::ReserveAssetMismatch => "Pool reserve asset is not the reward token",
            ContractError::Decommissioned => "Ledger has been decommissioned",
            ContractError::InvalidAmount => "Amount must be strictly positive (> 0)",
            ContractError::IdenticalAssets => "Liquidity and reward token must differ",
            ContractError::ReentrancyDetected => "Reentrancy detected; call rejected",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
