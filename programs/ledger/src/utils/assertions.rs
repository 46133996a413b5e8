//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//! These functions make security checks consistent and readable.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_owned_by(account, program_id)?;
//!     assert_signer(authority)?;
//!     assert_writable(account)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::LedgerError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// An attacker could otherwise pass a fabricated account with
/// valid-looking data owned by their own program.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(LedgerError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// The runtime would reject the modification anyway; this check gives a
/// clearer error earlier.
///
/// # Errors
///
/// Returns `InvalidAccountData` if not writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(LedgerError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// PROGRAM ID CHECKS
// =============================================================================

/// Assert that an account is the System program.
///
/// Payment settlement and account creation CPI into it; a wrong account
/// here must fail before any invoke.
///
/// # Errors
///
/// Returns `IncorrectProgramId` if the key doesn't match.
pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition that returns a clear error on overflow.
///
/// Without checked arithmetic, overflow wraps around:
/// u64::MAX + 1 = 0, which could allow issuing infinite tokens.
///
/// # Example
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount)?;
/// holder.amount = checked_add(holder.amount, amount)?;
/// ```
pub fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b).ok_or_else(|| LedgerError::Overflow.into())
}

/// Checked subtraction that returns a clear error on underflow.
///
/// Without checked arithmetic, underflow wraps around:
/// 0 - 1 = u64::MAX, which could allow burning tokens you don't have.
///
/// # Example
///
/// ```ignore
/// holder.amount = checked_sub(holder.amount, required)?;
/// mint.supply = checked_sub(mint.supply, required)?;
/// ```
pub fn checked_sub(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_sub(b)
        .ok_or_else(|| LedgerError::InsufficientBalance.into())
}

/// Checked multiplication that returns a clear error on overflow.
///
/// Used for the payment computation `amount * unit_price`.
pub fn checked_mul(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_mul(b).ok_or_else(|| LedgerError::Overflow.into())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
