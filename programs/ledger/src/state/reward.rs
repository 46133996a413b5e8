//! Reward Account State
//!
//! A Reward is an artist-defined redemption rule: a token-amount
//! threshold plus display metadata. It lives at the program-derived
//! address `["reward", mint, reward_id]`, keyed by the artist-chosen id.
//!
//! Lifecycle: `Active -> Removed`, one-way. A removed reward can never
//! be claimed again, but past claims (and their burns) stand.
//!
//! Redemption is repeatable: there is no per-holder claimed flag, so a
//! holder may claim the same reward again after replenishing their
//! balance with further purchases.
//!
//! # Size: 253 bytes

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::error::LedgerError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// REWARD STRUCTURE
// =============================================================================

/// Reward account data structure.
///
/// # Memory Layout (253 bytes total)
///
/// ```text
/// ┌────────┬──────┬─────────────────┬───────────────┐
/// │ Offset │ Size │ Field           │ Type          │
/// ├────────┼──────┼─────────────────┼───────────────┤
/// │ 0      │ 32   │ mint            │ Pubkey        │
/// │ 32     │ 8    │ reward_id       │ u64           │
/// │ 40     │ 8    │ required_amount │ u64           │
/// │ 48     │ 8    │ claim_count     │ u64           │
/// │ 56     │ 1    │ is_active       │ bool (0 or 1) │
/// │ 57     │ 1    │ is_initialized  │ bool (0 or 1) │
/// │ 58     │ 1    │ title_len       │ u8            │
/// │ 59     │ 64   │ title           │ [u8; 64]      │
/// │ 123    │ 1    │ description_len │ u8            │
/// │ 124    │ 128  │ description     │ [u8; 128]     │
/// │ 252    │ 1    │ bump            │ u8            │
/// └────────┴──────┴─────────────────┴───────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reward {
    /// The mint this reward belongs to. Its artist_authority is the only
    /// identity allowed to remove the reward.
    pub mint: Pubkey,

    /// Artist-chosen id, unique per mint (it is part of the address
    /// derivation, so duplicates cannot exist).
    pub reward_id: u64,

    /// Tokens burned per successful claim. Always positive.
    pub required_amount: u64,

    /// Number of successful claims ever executed against this reward.
    ///
    /// Monotonically increasing; there is no un-claim operation, so it
    /// never decreases.
    pub claim_count: u64,

    /// Whether this reward can still be claimed.
    ///
    /// Set to true at creation; RemoveReward flips it to false, once,
    /// forever.
    pub is_active: bool,

    /// Whether this reward has been initialized.
    pub is_initialized: bool,

    /// Length in bytes of the stored title.
    pub title_len: u8,

    /// Display title, zero-padded.
    pub title: [u8; MAX_TITLE_LEN],

    /// Length in bytes of the stored description.
    pub description_len: u8,

    /// Display description, zero-padded.
    pub description: [u8; MAX_DESCRIPTION_LEN],

    /// Bump used in the PDA derivation of this reward.
    pub bump: u8,
}

// Arrays longer than 32 elements have no derived Default.
impl Default for Reward {
    fn default() -> Self {
        Reward {
            mint: Pubkey::default(),
            reward_id: 0,
            required_amount: 0,
            claim_count: 0,
            is_active: false,
            is_initialized: false,
            title_len: 0,
            title: [0u8; MAX_TITLE_LEN],
            description_len: 0,
            description: [0u8; MAX_DESCRIPTION_LEN],
            bump: 0,
        }
    }
}

// =============================================================================
// ASSOCIATED CONSTANTS AND HELPERS
// =============================================================================

impl Reward {
    /// Size of Reward when serialized to bytes.
    ///
    /// Calculation:
    /// 32 + 8 + 8 + 8 + 1 + 1 + 1 + 64 + 1 + 128 + 1 = 253 bytes
    pub const LEN: usize = 253;

    /// Store a display title, validating its length.
    pub fn set_title(&mut self, title: &str) -> Result<(), ProgramError> {
        let bytes = title.as_bytes();
        if bytes.len() > MAX_TITLE_LEN {
            return Err(LedgerError::TitleTooLong.into());
        }
        self.title = [0u8; MAX_TITLE_LEN];
        self.title[..bytes.len()].copy_from_slice(bytes);
        self.title_len = bytes.len() as u8;
        Ok(())
    }

    /// Store a display description, validating its length.
    pub fn set_description(&mut self, description: &str) -> Result<(), ProgramError> {
        let bytes = description.as_bytes();
        if bytes.len() > MAX_DESCRIPTION_LEN {
            return Err(LedgerError::DescriptionTooLong.into());
        }
        self.description = [0u8; MAX_DESCRIPTION_LEN];
        self.description[..bytes.len()].copy_from_slice(bytes);
        self.description_len = bytes.len() as u8;
        Ok(())
    }

    /// The display title as a string slice.
    pub fn title(&self) -> &str {
        let len = (self.title_len as usize).min(MAX_TITLE_LEN);
        core::str::from_utf8(&self.title[..len]).unwrap_or("")
    }

    /// The display description as a string slice.
    pub fn description(&self) -> &str {
        let len = (self.description_len as usize).min(MAX_DESCRIPTION_LEN);
        core::str::from_utf8(&self.description[..len]).unwrap_or("")
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Reward {
    const LEN: usize = 253;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Reward::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_bytes,
            reward_id_bytes,
            required_amount_bytes,
            claim_count_bytes,
            is_active_bytes,
            is_initialized_bytes,
            title_len_bytes,
            title_bytes,
            description_len_bytes,
            description_bytes,
            bump_bytes,
        ) = array_refs![input, 32, 8, 8, 8, 1, 1, 1, 64, 1, 128, 1];

        Ok(Reward {
            mint: Pubkey::new_from_array(*mint_bytes),
            reward_id: u64::from_le_bytes(*reward_id_bytes),
            required_amount: u64::from_le_bytes(*required_amount_bytes),
            claim_count: u64::from_le_bytes(*claim_count_bytes),
            is_active: is_active_bytes[0] != 0,
            is_initialized: is_initialized_bytes[0] != 0,
            title_len: title_len_bytes[0],
            title: *title_bytes,
            description_len: description_len_bytes[0],
            description: *description_bytes,
            bump: bump_bytes[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Reward::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_dst,
            reward_id_dst,
            required_amount_dst,
            claim_count_dst,
            is_active_dst,
            is_initialized_dst,
            title_len_dst,
            title_dst,
            description_len_dst,
            description_dst,
            bump_dst,
        ) = mut_array_refs![output, 32, 8, 8, 8, 1, 1, 1, 64, 1, 128, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        *reward_id_dst = self.reward_id.to_le_bytes();
        *required_amount_dst = self.required_amount.to_le_bytes();
        *claim_count_dst = self.claim_count.to_le_bytes();
        is_active_dst[0] = self.is_active as u8;
        is_initialized_dst[0] = self.is_initialized as u8;
        title_len_dst[0] = self.title_len;
        *title_dst = self.title;
        description_len_dst[0] = self.description_len;
        *description_dst = self.description;
        bump_dst[0] = self.bump;

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
