//! Overflow-safe arithmetic helpers for ledger accounting.
//!
//! Every helper returns a `ContractError` instead of wrapping or panicking, so
//! an arithmetic failure aborts the call like any other rule violation.

use staking_errors::ContractError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked truncating `i128` division.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    if b == 0 {
        return Err(ContractError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `amount * pct / 100`, truncating.
#[inline]
pub fn percent(amount: i128, pct: u32) -> Result<i128, ContractError> {
    div_i128(mul_i128(amount, pct as i128)?, 100)
}
