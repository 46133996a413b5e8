//! Authority Validation Utilities
//!
//! Pure predicates over the transaction's signer set versus the
//! authority recorded on the referenced record. Every processor routes
//! its permission checks through here; nothing in this module has side
//! effects.
//!
//! # Per-operation signer requirements
//!
//! | Operation | Required signer(s) |
//! |-----------|--------------------|
//! | InitializeMint | prospective artist_authority |
//! | PurchaseTokens | the paying buyer AND the mint's artist_authority |
//! | AddReward / RemoveReward | the mint's artist_authority |
//! | ClaimReward | owner of the holder account being debited |
//!
//! The dual-signer purchase is two independent `validate` calls over
//! two explicit accounts, not an ambient admin role.

use crate::error::LedgerError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// AUTHORITY VALIDATION
// =============================================================================

/// Validate that an account is the expected authority and has signed.
///
/// Used for every artist-gated operation: the expected key comes from
/// the mint's `artist_authority` field (or is the prospective authority
/// itself for mint creation).
///
/// # Flow
///
/// ```text
/// 1. authority_info.key == expected_authority?
/// 2. authority_info.is_signer == true?
/// 3. If both yes -> OK!
/// ```
///
/// # Errors
///
/// * `InvalidAuthority` - Wrong key provided
/// * `MissingRequiredSignature` - Right key but didn't sign
pub fn validate_authority(
    expected_authority: &Pubkey,
    authority_info: &AccountInfo,
) -> ProgramResult {
    if authority_info.key != expected_authority {
        return Err(LedgerError::InvalidAuthority.into());
    }

    if !authority_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

/// Validate that an account is the holder account's owner and has signed.
///
/// Same predicate as `validate_authority` but reports the mismatch as
/// `OwnerMismatch`, which is what clients expect when the wrong wallet
/// tries to burn from someone else's holder account.
///
/// # Errors
///
/// * `OwnerMismatch` - Wrong key provided
/// * `MissingRequiredSignature` - Right key but didn't sign
pub fn validate_owner(expected_owner: &Pubkey, owner_info: &AccountInfo) -> ProgramResult {
    if owner_info.key != expected_owner {
        return Err(LedgerError::OwnerMismatch.into());
    }

    if !owner_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
