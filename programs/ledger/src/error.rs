//! Custom Error Types
//!
//! This module defines all errors that the ledger program can return.
//! Each error has a unique numeric code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-4 | Account validation errors |
//! | 5-6 | Authority errors |
//! | 7-12 | Operation errors |
//! | 13-16 | Reward errors |
//! | 17-20 | Metadata errors |

use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the ledger program.
///
/// Each variant becomes a unique error code when converted to ProgramError.
/// The codes are assigned based on the order of variants (0, 1, 2, ...).
///
/// # Important
///
/// After deployment, NEVER reorder these variants!
/// Clients depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-4)
    // =========================================================================

    /// Error 0: Account is not owned by the ledger program.
    ///
    /// Every record we operate on must be owned by our program,
    /// otherwise an attacker could pass fabricated state.
    #[error("Account not owned by ledger program")]
    InvalidAccountOwner,

    /// Error 1: Account data has wrong length.
    ///
    /// Mint must be 94 bytes, holder account 82 bytes, and so on.
    /// Wrong size indicates corruption or attack.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Record already exists.
    ///
    /// Returned when creating a mint for an artist who already has one,
    /// or when re-initializing any existing record.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 3: Record does not exist.
    ///
    /// The referenced mint, holder account, or reward has never been
    /// initialized.
    #[error("Account not initialized")]
    UninitializedAccount,

    /// Error 4: Account address does not match its derivation.
    ///
    /// Every record lives at a program-derived address; a mismatch means
    /// the caller supplied the wrong account.
    #[error("Account address does not match derived address")]
    AddressMismatch,

    // =========================================================================
    // AUTHORITY ERRORS (5-6)
    // =========================================================================

    /// Error 5: Invalid authority provided.
    ///
    /// The signer does not match the artist authority recorded on the mint.
    #[error("Invalid authority")]
    InvalidAuthority,

    /// Error 6: Owner does not match.
    ///
    /// The holder account's owner field doesn't match the signer.
    #[error("Owner mismatch")]
    OwnerMismatch,

    // =========================================================================
    // OPERATION ERRORS (7-12)
    // =========================================================================

    /// Error 7: Buyer cannot cover the payment.
    ///
    /// The buyer's lamport balance is below `amount * unit_price`.
    #[error("Insufficient funds for payment")]
    InsufficientFunds,

    /// Error 8: Not enough tokens to burn.
    ///
    /// The holder's balance is below the amount a claim would burn.
    #[error("Insufficient token balance")]
    InsufficientBalance,

    /// Error 9: Arithmetic overflow.
    ///
    /// An arithmetic operation would overflow.
    /// E.g., issuing would push supply above u64::MAX.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 10: Amount must be positive.
    ///
    /// Purchases of zero tokens are rejected.
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// Error 11: Mint mismatch.
    ///
    /// The holder account or event log belongs to a different mint.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 12: Invalid instruction data.
    ///
    /// Could not parse the instruction data.
    /// Wrong format, missing bytes, invalid discriminant.
    #[error("Invalid instruction")]
    InvalidInstruction,

    // =========================================================================
    // REWARD ERRORS (13-16)
    // =========================================================================

    /// Error 13: A reward with this id already exists for the mint.
    #[error("Duplicate reward id")]
    DuplicateRewardId,

    /// Error 14: Reward threshold must be positive.
    ///
    /// A reward that costs zero tokens would make burns meaningless.
    #[error("Reward threshold must be greater than zero")]
    InvalidThreshold,

    /// Error 15: Reward has been removed.
    ///
    /// The `Active -> Removed` transition is one-way; removed rewards
    /// can never be claimed again.
    #[error("Reward is not active")]
    RewardNotActive,

    /// Error 16: Reward does not belong to the referenced mint.
    #[error("Reward does not match mint or id")]
    RewardMismatch,

    // =========================================================================
    // METADATA ERRORS (17-20)
    // =========================================================================

    /// Error 17: Mint name exceeds 32 bytes.
    #[error("Name too long")]
    NameTooLong,

    /// Error 18: Mint symbol exceeds 8 bytes.
    #[error("Symbol too long")]
    SymbolTooLong,

    /// Error 19: Reward title exceeds 64 bytes.
    #[error("Title too long")]
    TitleTooLong,

    /// Error 20: Reward description exceeds 128 bytes.
    #[error("Description too long")]
    DescriptionTooLong,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert LedgerError to ProgramError.
///
/// This implementation allows using the `?` operator with our errors.
/// The error code is simply the enum variant's position (0-indexed).
impl From<LedgerError> for ProgramError {
    fn from(e: LedgerError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
