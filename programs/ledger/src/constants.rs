//! Program Constants
//!
//! PDA seed prefixes and metadata length caps shared by the processors,
//! the state layouts, and the integration tests.

// =============================================================================
// PDA SEED PREFIXES
// =============================================================================

/// Seed prefix for the per-artist mint record: `["mint", artist]`.
///
/// The address is derived from the artist identity alone, so each artist
/// can own at most one mint.
pub const MINT_SEED: &[u8] = b"mint";

/// Seed prefix for a holder's balance record: `["holder", mint, owner]`.
pub const HOLDER_SEED: &[u8] = b"holder";

/// Seed prefix for a reward record: `["reward", mint, reward_id_le_bytes]`.
pub const REWARD_SEED: &[u8] = b"reward";

/// Seed prefix for the per-mint event log: `["events", mint]`.
pub const EVENT_LOG_SEED: &[u8] = b"events";

// =============================================================================
// METADATA LENGTH CAPS
// =============================================================================

/// Maximum byte length of a mint name.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum byte length of a mint symbol.
pub const MAX_SYMBOL_LEN: usize = 8;

/// Maximum byte length of a reward title.
pub const MAX_TITLE_LEN: usize = 64;

/// Maximum byte length of a reward description.
pub const MAX_DESCRIPTION_LEN: usize = 128;
