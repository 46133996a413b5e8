//! Mint Account State
//!
//! A Mint defines one artist's soulbound token class.
//!
//! # What a Mint Controls
//!
//! 1. Who can issue new tokens and manage rewards (artist_authority)
//! 2. Total tokens in circulation (supply)
//! 3. How many distinct holders ever bought in (customer_count)
//!
//! Every mint lives at the program-derived address `["mint", artist]`,
//! so one artist identity maps to exactly one mint.
//!
//! # Size: 94 bytes

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::error::LedgerError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// Every holder account (HolderAccount struct) references exactly one Mint.
///
/// # Memory Layout (94 bytes total)
///
/// ```text
/// ┌────────┬──────┬──────────────────┬─────────────────┐
/// │ Offset │ Size │ Field            │ Type            │
/// ├────────┼──────┼──────────────────┼─────────────────┤
/// │ 0      │ 32   │ artist_authority │ Pubkey          │
/// │ 32     │ 8    │ supply           │ u64             │
/// │ 40     │ 1    │ decimals         │ u8              │
/// │ 41     │ 1    │ non_transferable │ bool (0 or 1)   │
/// │ 42     │ 1    │ is_initialized   │ bool (0 or 1)   │
/// │ 43     │ 8    │ customer_count   │ u64             │
/// │ 51     │ 1    │ name_len         │ u8              │
/// │ 52     │ 32   │ name             │ [u8; 32]        │
/// │ 84     │ 1    │ symbol_len       │ u8              │
/// │ 85     │ 8    │ symbol           │ [u8; 8]         │
/// │ 93     │ 1    │ bump             │ u8              │
/// └────────┴──────┴──────────────────┴─────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mint {
    /// The artist identity that owns this mint.
    ///
    /// Only this identity can co-sign token purchases and
    /// create or remove rewards. It is set once at creation and
    /// there is no instruction that changes it.
    pub artist_authority: Pubkey,

    /// Total number of tokens currently in circulation.
    ///
    /// - Increases on a purchase
    /// - Decreases on a claim burn
    ///
    /// # Invariant (must always be true)
    ///
    /// ```text
    /// supply == SUM(amount over all holder accounts of this mint)
    /// ```
    pub supply: u64,

    /// Number of decimal places. Always 0: tokens are discrete and
    /// non-fractional, one token is one unit.
    pub decimals: u8,

    /// Permanent soulbound flag, always true.
    ///
    /// The flag is informational for clients; the real enforcement is
    /// structural — the instruction set has no transfer primitive.
    pub non_transferable: bool,

    /// Whether this mint has been initialized.
    ///
    /// When an account is created, Solana fills it with zeros, so every
    /// processor checks this flag before trusting the data.
    pub is_initialized: bool,

    /// Number of distinct holder accounts ever created under this mint.
    ///
    /// Incremented exactly once per holder, on their first purchase.
    /// Never decremented: a holder whose balance reaches zero stays
    /// counted, because their account record persists.
    pub customer_count: u64,

    /// Length in bytes of the stored name.
    pub name_len: u8,

    /// Display name, zero-padded. Immutable after creation.
    pub name: [u8; MAX_NAME_LEN],

    /// Length in bytes of the stored symbol.
    pub symbol_len: u8,

    /// Display symbol, zero-padded. Immutable after creation.
    pub symbol: [u8; MAX_SYMBOL_LEN],

    /// Bump used in the PDA derivation of this mint.
    pub bump: u8,
}

// =============================================================================
// ASSOCIATED CONSTANTS AND HELPERS
// =============================================================================

impl Mint {
    /// Size of Mint when serialized to bytes.
    ///
    /// Calculation:
    /// 32 + 8 + 1 + 1 + 1 + 8 + 1 + 32 + 1 + 8 + 1 = 94 bytes
    pub const LEN: usize = 94;

    /// Store a display name, validating its length.
    pub fn set_name(&mut self, name: &str) -> Result<(), ProgramError> {
        let bytes = name.as_bytes();
        if bytes.len() > MAX_NAME_LEN {
            return Err(LedgerError::NameTooLong.into());
        }
        self.name = [0u8; MAX_NAME_LEN];
        self.name[..bytes.len()].copy_from_slice(bytes);
        self.name_len = bytes.len() as u8;
        Ok(())
    }

    /// Store a display symbol, validating its length.
    pub fn set_symbol(&mut self, symbol: &str) -> Result<(), ProgramError> {
        let bytes = symbol.as_bytes();
        if bytes.len() > MAX_SYMBOL_LEN {
            return Err(LedgerError::SymbolTooLong.into());
        }
        self.symbol = [0u8; MAX_SYMBOL_LEN];
        self.symbol[..bytes.len()].copy_from_slice(bytes);
        self.symbol_len = bytes.len() as u8;
        Ok(())
    }

    /// The display name as a string slice.
    pub fn name(&self) -> &str {
        let len = (self.name_len as usize).min(MAX_NAME_LEN);
        core::str::from_utf8(&self.name[..len]).unwrap_or("")
    }

    /// The display symbol as a string slice.
    pub fn symbol(&self) -> &str {
        let len = (self.symbol_len as usize).min(MAX_SYMBOL_LEN);
        core::str::from_utf8(&self.symbol[..len]).unwrap_or("")
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 94;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            artist_authority_bytes,
            supply_bytes,
            decimals_bytes,
            non_transferable_bytes,
            is_initialized_bytes,
            customer_count_bytes,
            name_len_bytes,
            name_bytes,
            symbol_len_bytes,
            symbol_bytes,
            bump_bytes,
        ) = array_refs![input, 32, 8, 1, 1, 1, 8, 1, 32, 1, 8, 1];

        Ok(Mint {
            artist_authority: Pubkey::new_from_array(*artist_authority_bytes),
            supply: u64::from_le_bytes(*supply_bytes),
            decimals: decimals_bytes[0],
            non_transferable: non_transferable_bytes[0] != 0,
            is_initialized: is_initialized_bytes[0] != 0,
            customer_count: u64::from_le_bytes(*customer_count_bytes),
            name_len: name_len_bytes[0],
            name: *name_bytes,
            symbol_len: symbol_len_bytes[0],
            symbol: *symbol_bytes,
            bump: bump_bytes[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            artist_authority_dst,
            supply_dst,
            decimals_dst,
            non_transferable_dst,
            is_initialized_dst,
            customer_count_dst,
            name_len_dst,
            name_dst,
            symbol_len_dst,
            symbol_dst,
            bump_dst,
        ) = mut_array_refs![output, 32, 8, 1, 1, 1, 8, 1, 32, 1, 8, 1];

        artist_authority_dst.copy_from_slice(self.artist_authority.as_ref());
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        non_transferable_dst[0] = self.non_transferable as u8;
        is_initialized_dst[0] = self.is_initialized as u8;
        *customer_count_dst = self.customer_count.to_le_bytes();
        name_len_dst[0] = self.name_len;
        *name_dst = self.name;
        symbol_len_dst[0] = self.symbol_len;
        *symbol_dst = self.symbol;
        bump_dst[0] = self.bump;

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
