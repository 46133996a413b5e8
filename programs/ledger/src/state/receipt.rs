//! Operation Receipts
//!
//! A Receipt is the structured result of a successful purchase or
//! claim. It is published through `set_return_data`, so the caller of
//! the transaction can read back the resulting balance, supply, and
//! claim count together with the event sequence number that serves as
//! an external transaction reference.
//!
//! Receipts are not account state: they exist only in the transaction's
//! return data.
//!
//! # Size: 137 bytes

use crate::state::{EventKind, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{
    entrypoint::ProgramResult,
    program::set_return_data,
    program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// RECEIPT STRUCTURE
// =============================================================================

/// Result of a successful state-changing operation.
///
/// # Memory Layout (137 bytes total)
///
/// ```text
/// ┌────────┬──────┬─────────────┬────────┐
/// │ Offset │ Size │ Field       │ Type   │
/// ├────────┼──────┼─────────────┼────────┤
/// │ 0      │ 1    │ kind        │ u8     │
/// │ 1      │ 32   │ mint        │ Pubkey │
/// │ 33     │ 32   │ subject     │ Pubkey │
/// │ 65     │ 32   │ actor       │ Pubkey │
/// │ 97     │ 8    │ amount      │ u64    │
/// │ 105    │ 8    │ balance     │ u64    │
/// │ 113    │ 8    │ supply      │ u64    │
/// │ 121    │ 8    │ claim_count │ u64    │
/// │ 129    │ 8    │ sequence    │ u64    │
/// └────────┴──────┴─────────────┴────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Receipt {
    /// The operation this receipt results from.
    pub kind: EventKind,

    /// The mint the operation ran against.
    pub mint: Pubkey,

    /// The affected record: the holder account for purchases, the
    /// reward account for claims.
    pub subject: Pubkey,

    /// The identity that drove the operation.
    pub actor: Pubkey,

    /// Tokens issued or burned by the operation.
    pub amount: u64,

    /// The holder's balance after the operation.
    pub balance: u64,

    /// The mint's circulating supply after the operation.
    pub supply: u64,

    /// The reward's claim count after the operation (0 for purchases).
    pub claim_count: u64,

    /// Event sequence number assigned to the operation. Monotonically
    /// increasing per mint; usable as an external transaction reference.
    pub sequence: u64,
}

impl Receipt {
    /// Size of Receipt when serialized to bytes.
    ///
    /// Calculation: 1 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 8 = 137 bytes
    pub const LEN: usize = 137;

    /// Publish this receipt as the transaction's return data.
    pub fn publish(&self) -> ProgramResult {
        let mut buf = [0u8; Receipt::LEN];
        self.pack(&mut buf)?;
        set_return_data(&buf);
        Ok(())
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Receipt {
    const LEN: usize = 137;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Receipt::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            kind_bytes,
            mint_bytes,
            subject_bytes,
            actor_bytes,
            amount_bytes,
            balance_bytes,
            supply_bytes,
            claim_count_bytes,
            sequence_bytes,
        ) = array_refs![input, 1, 32, 32, 32, 8, 8, 8, 8, 8];

        Ok(Receipt {
            kind: EventKind::from_u8(kind_bytes[0])?,
            mint: Pubkey::new_from_array(*mint_bytes),
            subject: Pubkey::new_from_array(*subject_bytes),
            actor: Pubkey::new_from_array(*actor_bytes),
            amount: u64::from_le_bytes(*amount_bytes),
            balance: u64::from_le_bytes(*balance_bytes),
            supply: u64::from_le_bytes(*supply_bytes),
            claim_count: u64::from_le_bytes(*claim_count_bytes),
            sequence: u64::from_le_bytes(*sequence_bytes),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Receipt::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            kind_dst,
            mint_dst,
            subject_dst,
            actor_dst,
            amount_dst,
            balance_dst,
            supply_dst,
            claim_count_dst,
            sequence_dst,
        ) = mut_array_refs![output, 1, 32, 32, 32, 8, 8, 8, 8, 8];

        kind_dst[0] = self.kind.to_u8();
        mint_dst.copy_from_slice(self.mint.as_ref());
        subject_dst.copy_from_slice(self.subject.as_ref());
        actor_dst.copy_from_slice(self.actor.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        *balance_dst = self.balance.to_le_bytes();
        *supply_dst = self.supply.to_le_bytes();
        *claim_count_dst = self.claim_count.to_le_bytes();
        *sequence_dst = self.sequence.to_le_bytes();

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
    fn test_receipt_pack_unpack_roundtrip() {
        let original = Receipt {
            kind: EventKind::TokensPurchased,
            mint: Pubkey::new_unique(),
            subject: Pubkey::new_unique(),
            actor: Pubkey::new_unique(),
            amount: 100,
            balance: 100,
            supply: 100,
            claim_count: 0,
            sequence: 1,
        };

        let mut packed = [0u8; Receipt::LEN];
        original.pack(&mut packed).unwrap();

        let unpacked = Receipt::unpack(&packed).unwrap();
        assert_eq!(original, unpacked);
    }
}
