//! Account State Structures
//!
//! This module defines the data structures stored in Solana accounts.
//!
//! # Account Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Mint | 94 bytes | An artist's soulbound token class |
//! | HolderAccount | 82 bytes | A holder's balance for one mint |
//! | Reward | 253 bytes | An artist-defined redemption rule |
//! | EventLog | 42 bytes | Per-mint event sequence counter |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - Zero-padded byte arrays with explicit length prefixes for strings
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! # The Pack Trait
//!
//! All state types implement the `Pack` trait for serialization:
//!
//! ```ignore
//! let mint = Mint::unpack_from_slice(&account.data.borrow())?;  // Read
//! mint.pack_into_slice(&mut account.data.borrow_mut())?;        // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod event;
pub mod holder;
pub mod mint;
pub mod receipt;
pub mod reward;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use event::{Event, EventKind, EventLog};
pub use holder::HolderAccount;
pub use mint::Mint;
pub use receipt::Receipt;
pub use reward::Reward;

use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// All state structures must implement this trait.
/// It provides a consistent interface for serialization.
///
/// Manual serialization keeps the byte layouts fixed and explicit:
/// 1. Fixed sizes are enforced at compile time via `arrayref`
/// 2. No serialization overhead
/// 3. Clients in other languages can rely on stable offsets
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    ///
    /// This is used to:
    /// - Validate account data length
    /// - Allocate accounts with correct size
    /// - Calculate rent exemption
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if input.len() < Self::LEN (use unpack_from_slice instead)
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    ///
    /// Checks that `src.len() == Self::LEN` before unpacking.
    /// Use this instead of `unpack` when you have untrusted input.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    ///
    /// Checks that `dst.len() == Self::LEN` before packing.
    /// Use this instead of `pack` for safety.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}
