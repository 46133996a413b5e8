//! Holder Account State
//!
//! A HolderAccount holds one buyer's balance for one mint.
//! It lives at the program-derived address `["holder", mint, owner]`,
//! so the record itself is bound to the (mint, holder) pair.
//!
//! There is no operation anywhere in this program that moves balance
//! from one holder account to another. The only mutations are an
//! increase on purchase and a decrease on a claim burn, both scoped to
//! a single account. That structural absence is what makes the tokens
//! soulbound.
//!
//! # Size: 82 bytes

use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// HOLDER ACCOUNT STRUCTURE
// =============================================================================

/// Holder account data structure.
///
/// # Memory Layout (82 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────────────┬───────────────┐
/// │ Offset │ Size │ Field          │ Type          │
/// ├────────┼──────┼────────────────┼───────────────┤
/// │ 0      │ 32   │ mint           │ Pubkey        │
/// │ 32     │ 32   │ owner          │ Pubkey        │
/// │ 64     │ 8    │ amount         │ u64           │
/// │ 72     │ 8    │ customer_index │ u64           │
/// │ 80     │ 1    │ is_initialized │ bool (0 or 1) │
/// │ 81     │ 1    │ bump           │ u8            │
/// └────────┴──────┴────────────────┴───────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HolderAccount {
    /// The mint this account holds tokens of.
    ///
    /// Set at creation and never changed. Every processor that touches
    /// a holder account verifies this field against the mint account
    /// passed in the same instruction.
    pub mint: Pubkey,

    /// The holder identity that owns this account.
    ///
    /// Only the owner may authorize a burn against this account
    /// (by claiming a reward).
    pub owner: Pubkey,

    /// The number of tokens in this account.
    ///
    /// - Increases on: PurchaseTokens
    /// - Decreases on: ClaimReward (the burn)
    ///
    /// May reach zero; the record persists so the holder stays counted
    /// as a customer of the mint.
    pub amount: u64,

    /// The mint's customer counter value observed when this account was
    /// created. A monotonic sequence number, never reused.
    pub customer_index: u64,

    /// Whether this account has been initialized.
    pub is_initialized: bool,

    /// Bump used in the PDA derivation of this account.
    pub bump: u8,
}

impl HolderAccount {
    /// Size of HolderAccount when serialized to bytes.
    ///
    /// Calculation: 32 + 32 + 8 + 8 + 1 + 1 = 82 bytes
    pub const LEN: usize = 82;
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for HolderAccount {
    const LEN: usize = 82;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, HolderAccount::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_bytes,
            owner_bytes,
            amount_bytes,
            customer_index_bytes,
            is_initialized_bytes,
            bump_bytes,
        ) = array_refs![input, 32, 32, 8, 8, 1, 1];

        Ok(HolderAccount {
            mint: Pubkey::new_from_array(*mint_bytes),
            owner: Pubkey::new_from_array(*owner_bytes),
            amount: u64::from_le_bytes(*amount_bytes),
            customer_index: u64::from_le_bytes(*customer_index_bytes),
            is_initialized: is_initialized_bytes[0] != 0,
            bump: bump_bytes[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, HolderAccount::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_dst,
            owner_dst,
            amount_dst,
            customer_index_dst,
            is_initialized_dst,
            bump_dst,
        ) = mut_array_refs![output, 32, 32, 8, 8, 1, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        *customer_index_dst = self.customer_index.to_le_bytes();
        is_initialized_dst[0] = self.is_initialized as u8;
        bump_dst[0] = self.bump;

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_pack_unpack_roundtrip() {
        let original = HolderAccount {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount: 100,
            customer_index: 7,
            is_initialized: true,
            bump: 253,
        };

        let mut packed = [0u8; HolderAccount::LEN];
        original.pack(&mut packed).unwrap();

        let unpacked = HolderAccount::unpack(&packed).unwrap();
        assert_eq!(original, unpacked);
    }

    /// Test that a zeroed account reads as uninitialized.
    #[test]
    fn test_holder_uninitialized() {
        let packed = [0u8; HolderAccount::LEN];
        let account = HolderAccount::unpack(&packed).unwrap();

        assert!(!account.is_initialized);
        assert_eq!(account.amount, 0);
        assert_eq!(account.customer_index, 0);
    }

    #[test]
    fn test_holder_wrong_size() {
        let too_small = [0u8; HolderAccount::LEN - 1];
        assert!(HolderAccount::unpack_from_slice(&too_small).is_err());
    }
}
