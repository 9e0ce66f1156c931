#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::NotConfigured,
            ContractError::NotAdmin,
            ContractError::NotOpen,
            ContractError::NotReleasable,
            ContractError::AlreadyStarted,
            ContractError::EarlyExitDisabled,
            ContractError::RewardPoolExceeded,
            ContractError::SurplusBreachesCoverage,
            ContractError::LiquidityWithdrawalForbidden,
            ContractError::RewardsOutstanding,
            ContractError::TransferFailed,
            ContractError::OracleUnavailable,
            ContractError::InvalidPoolState,
            ContractError::InvalidSchedule,
            ContractError::AssetNotLive,
            ContractError::ReserveAssetMismatch,
            ContractError::Decommissioned,
            ContractError::InvalidAmount,
            ContractError::IdenticalAssets,
            ContractError::ReentrancyDetected,
            ContractError::Overflow,
            ContractError::Underflow,
            ContractError::DivisionByZero,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
        assert_eq!(ContractError::NotConfigured as u32, 3);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::NotAdmin as u32, 100);
    }

    #[test]
    fn test_codes_phase() {
        assert_eq!(ContractError::NotOpen as u32, 200);
        assert_eq!(ContractError::NotReleasable as u32, 201);
        assert_eq!(ContractError::AlreadyStarted as u32, 202);
        assert_eq!(ContractError::EarlyExitDisabled as u32, 203);
    }

    #[test]
    fn test_codes_invariant() {
        assert_eq!(ContractError::RewardPoolExceeded as u32, 300);
        assert_eq!(ContractError::SurplusBreachesCoverage as u32, 301);
        assert_eq!(ContractError::LiquidityWithdrawalForbidden as u32, 302);
        assert_eq!(ContractError::RewardsOutstanding as u32, 303);
    }

    #[test]
    fn test_codes_external_call() {
        assert_eq!(ContractError::TransferFailed as u32, 400);
        assert_eq!(ContractError::OracleUnavailable as u32, 401);
        assert_eq!(ContractError::InvalidPoolState as u32, 402);
    }

    #[test]
    fn test_codes_configuration() {
        assert_eq!(ContractError::InvalidSchedule as u32, 500);
        assert_eq!(ContractError::AssetNotLive as u32, 501);
        assert_eq!(ContractError::ReserveAssetMismatch as u32, 502);
        assert_eq!(ContractError::Decommissioned as u32, 503);
        assert_eq!(ContractError::InvalidAmount as u32, 504);
        assert_eq!(ContractError::IdenticalAssets as u32, 505);
    }

    #[test]
    fn test_codes_concurrency_and_arithmetic() {
        assert_eq!(ContractError::ReentrancyDetected as u32, 600);
        assert_eq!(ContractError::Overflow as u32, 700);
        assert_eq!(ContractError::Underflow as u32, 701);
        assert_eq!(ContractError::DivisionByZero as u32, 702);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_matches_code_block() {
        for err in all_variants() {
            let expected = match err as u32 {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Phase,
                300..=399 => ErrorCategory::Invariant,
                400..=499 => ErrorCategory::ExternalCall,
                500..=599 => ErrorCategory::Configuration,
                600..=699 => ErrorCategory::Concurrency,
                700..=799 => ErrorCategory::Arithmetic,
                other => panic!("code {other} outside every category block"),
            };
            assert_eq!(err.category(), expected, "{:?}", err);
        }
    }

    #[test]
    fn test_category_phase_violations() {
        assert_eq!(ContractError::NotOpen.category(), ErrorCategory::Phase);
        assert_eq!(ContractError::NotReleasable.category(), ErrorCategory::Phase);
        assert_eq!(
            ContractError::EarlyExitDisabled.category(),
            ErrorCategory::Phase
        );
    }

    #[test]
    fn test_category_reserve_mismatch_is_configuration() {
        assert_eq!(
            ContractError::ReserveAssetMismatch.category(),
            ErrorCategory::Configuration
        );
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty() {
        for err in all_variants() {
            assert!(!err.description().is_empty(), "{:?}", err);
        }
    }

    #[test]
    fn test_descriptions_unique() {
        let variants = all_variants();
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a.description(), b.description(), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_codes_unique() {
        let variants = all_variants();
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(*a as u32, *b as u32);
            }
        }
    }

    // --- Result integration tests (mirrors real contract call sites) ---

    fn mock_phase_gate(open: bool) -> Result<(), ContractError> {
        if !open {
            return Err(ContractError::NotOpen);
        }
        Ok(())
    }

    fn mock_allocate(allocated: i128, reward: i128, pool: i128) -> Result<i128, ContractError> {
        let next = allocated
            .checked_add(reward)
            .ok_or(ContractError::Overflow)?;
        if next > pool {
            return Err(ContractError::RewardPoolExceeded);
        }
        Ok(next)
    }

    #[test]
    fn test_phase_gate_result() {
        assert_eq!(mock_phase_gate(false), Err(ContractError::NotOpen));
        assert!(mock_phase_gate(true).is_ok());
    }

    #[test]
    fn test_allocation_result() {
        assert_eq!(mock_allocate(80, 920, 1_000), Ok(1_000));
        assert_eq!(
            mock_allocate(80, 921, 1_000),
            Err(ContractError::RewardPoolExceeded)
        );
        assert_eq!(
            mock_allocate(i128::MAX, 1, i128::MAX),
            Err(ContractError::Overflow)
        );
    }
}
