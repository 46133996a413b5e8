//! Program-Derived Address Utilities
//!
//! Every record in this program lives at a deterministic address
//! derived from its logical key:
//!
//! | Record | Seeds |
//! |--------|-------|
//! | Mint | `["mint", artist]` |
//! | HolderAccount | `["holder", mint, owner]` |
//! | Reward | `["reward", mint, reward_id_le]` |
//! | EventLog | `["events", mint]` |
//!
//! Deriving addresses from identities is what turns uniqueness policies
//! into structure: one mint per artist, one holder account per
//! (mint, holder) pair, one reward per (mint, id).

use crate::error::LedgerError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
    sysvar::Sysvar,
};

// =============================================================================
// ADDRESS DERIVATION CHECK
// =============================================================================

/// Assert that an account sits at the address derived from `seeds`.
///
/// Returns the bump so the caller can re-derive the signing seeds when
/// creating the account.
///
/// # Errors
///
/// Returns `AddressMismatch` if the account key differs from the
/// derived address.
pub fn assert_derived_address(
    account: &AccountInfo,
    program_id: &Pubkey,
    seeds: &[&[u8]],
) -> Result<u8, ProgramError> {
    let (expected, bump) = Pubkey::find_program_address(seeds, program_id);
    if *account.key != expected {
        return Err(LedgerError::AddressMismatch.into());
    }
    Ok(bump)
}

// =============================================================================
// ACCOUNT CREATION
// =============================================================================

/// Create a rent-exempt, program-owned account at a derived address.
///
/// The payer funds the rent; `signer_seeds` must be the full derivation
/// including the bump, since the new account "signs" its own creation
/// through the program.
///
/// # Example
///
/// ```ignore
/// let bump = assert_derived_address(mint_info, program_id, &[MINT_SEED, artist.as_ref()])?;
/// create_ledger_account(
///     artist_info,
///     mint_info,
///     system_program_info,
///     program_id,
///     Mint::LEN,
///     &[MINT_SEED, artist.as_ref(), &[bump]],
/// )?;
/// ```
pub fn create_ledger_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program_info: &AccountInfo<'a>,
    program_id: &Pubkey,
    space: usize,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let rent = Rent::get()?;
    let lamports = rent.minimum_balance(space);

    invoke_signed(
        &system_instruction::create_account(
            payer.key,
            new_account.key,
            lamports,
            space as u64,
            program_id,
        ),
        &[
            payer.clone(),
            new_account.clone(),
            system_program_info.clone(),
        ],
        &[signer_seeds],
    )
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_derived_address_match() {
        let program_id = Pubkey::new_unique();
        let artist = Pubkey::new_unique();
        let seeds: &[&[u8]] = &[b"mint", artist.as_ref()];
        let (derived, expected_bump) = Pubkey::find_program_address(seeds, &program_id);

        let mut lamports = 0u64;
        let mut data = vec![];
        let owner = Pubkey::new_unique();
        let account = AccountInfo::new(
            &derived,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        let bump = assert_derived_address(&account, &program_id, seeds).unwrap();
        assert_eq!(bump, expected_bump);
    }

    #[test]
    fn test_assert_derived_address_mismatch() {
        let program_id = Pubkey::new_unique();
        let artist = Pubkey::new_unique();
        let wrong_key = Pubkey::new_unique();

        let mut lamports = 0u64;
        let mut data = vec![];
        let owner = Pubkey::new_unique();
        let account = AccountInfo::new(
            &wrong_key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        let result = assert_derived_address(&account, &program_id, &[b"mint", artist.as_ref()]);
        assert_eq!(result.unwrap_err(), LedgerError::AddressMismatch.into());
    }
}
