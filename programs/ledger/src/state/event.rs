//! Event Log State
//!
//! Every state-changing operation appends one immutable Event to the
//! mint's audit trail. Events are published through `sol_log_data`, the
//! runtime's append-only transaction log, where activity feeds and
//! analytics indexers consume them. The program itself never reads
//! events back: they carry no control-flow weight.
//!
//! On-chain, the only event state is the `EventLog` account: a per-mint
//! sequence counter that orders events and stamps receipts. Because
//! every operation is an atomic transaction, a failed operation aborts
//! before anything is logged, so every recorded event is a committed
//! fact.
//!
//! # Sizes
//!
//! | Type | Size |
//! |------|------|
//! | EventLog (account) | 42 bytes |
//! | Event (log record) | 121 bytes |

use crate::error::LedgerError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{
    entrypoint::ProgramResult,
    log::sol_log_data,
    program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// EVENT KIND
// =============================================================================

/// The operation an event (or receipt) refers to.
///
/// # Values
///
/// - `MintCreated (0)`: an artist created their mint
/// - `TokensPurchased (1)`: a buyer purchased tokens
/// - `RewardAdded (2)`: the artist defined a reward
/// - `RewardRemoved (3)`: the artist removed a reward
/// - `RewardClaimed (4)`: a holder redeemed a reward (burn)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventKind {
    /// An artist created their mint.
    #[default]
    MintCreated = 0,

    /// A buyer purchased tokens (payment settled, balance increased).
    TokensPurchased = 1,

    /// The artist defined a new reward.
    RewardAdded = 2,

    /// The artist removed a reward.
    RewardRemoved = 3,

    /// A holder redeemed a reward by burning tokens.
    RewardClaimed = 4,
}

impl EventKind {
    /// Parse EventKind from a single byte.
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(EventKind::MintCreated),
            1 => Ok(EventKind::TokensPurchased),
            2 => Ok(EventKind::RewardAdded),
            3 => Ok(EventKind::RewardRemoved),
            4 => Ok(EventKind::RewardClaimed),
            _ => Err(LedgerError::InvalidInstruction.into()),
        }
    }

    /// Convert EventKind to a u8 byte.
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// EVENT RECORD
// =============================================================================

/// One immutable audit record.
///
/// # Memory Layout (121 bytes total)
///
/// ```text
/// ┌────────┬──────┬───────────┬──────────┐
/// │ Offset │ Size │ Field     │ Type     │
/// ├────────┼──────┼───────────┼──────────┤
/// │ 0      │ 8    │ sequence  │ u64      │
/// │ 8      │ 1    │ kind      │ u8       │
/// │ 9      │ 32   │ actor     │ Pubkey   │
/// │ 41     │ 32   │ mint      │ Pubkey   │
/// │ 73     │ 32   │ reference │ Pubkey   │
/// │ 105    │ 8    │ amount    │ u64      │
/// │ 113    │ 8    │ timestamp │ i64      │
/// └────────┴──────┴───────────┴──────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Event {
    /// Position in the mint's event stream. Strictly increasing,
    /// assigned by the EventLog account.
    pub sequence: u64,

    /// Which operation happened.
    pub kind: EventKind,

    /// The identity that drove the operation (artist or buyer).
    pub actor: Pubkey,

    /// The mint the operation belongs to.
    pub mint: Pubkey,

    /// The record the operation touched: a holder account for
    /// purchases, a reward account for reward operations, the mint
    /// itself for creation.
    pub reference: Pubkey,

    /// Token amount involved (0 where not applicable).
    pub amount: u64,

    /// Cluster unix timestamp at execution.
    pub timestamp: i64,
}

impl Event {
    /// Size of Event when serialized to bytes.
    ///
    /// Calculation: 8 + 1 + 32 + 32 + 32 + 8 + 8 = 121 bytes
    pub const LEN: usize = 121;

    /// Publish this event to the transaction log.
    pub fn emit(&self) -> ProgramResult {
        let mut buf = [0u8; Event::LEN];
        self.pack(&mut buf)?;
        sol_log_data(&[&buf]);
        Ok(())
    }
}

impl Pack for Event {
    const LEN: usize = 121;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Event::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            sequence_bytes,
            kind_bytes,
            actor_bytes,
            mint_bytes,
            reference_bytes,
            amount_bytes,
            timestamp_bytes,
        ) = array_refs![input, 8, 1, 32, 32, 32, 8, 8];

        Ok(Event {
            sequence: u64::from_le_bytes(*sequence_bytes),
            kind: EventKind::from_u8(kind_bytes[0])?,
            actor: Pubkey::new_from_array(*actor_bytes),
            mint: Pubkey::new_from_array(*mint_bytes),
            reference: Pubkey::new_from_array(*reference_bytes),
            amount: u64::from_le_bytes(*amount_bytes),
            timestamp: i64::from_le_bytes(*timestamp_bytes),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Event::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            sequence_dst,
            kind_dst,
            actor_dst,
            mint_dst,
            reference_dst,
            amount_dst,
            timestamp_dst,
        ) = mut_array_refs![output, 8, 1, 32, 32, 32, 8, 8];

        *sequence_dst = self.sequence.to_le_bytes();
        kind_dst[0] = self.kind.to_u8();
        actor_dst.copy_from_slice(self.actor.as_ref());
        mint_dst.copy_from_slice(self.mint.as_ref());
        reference_dst.copy_from_slice(self.reference.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        *timestamp_dst = self.timestamp.to_le_bytes();

        Ok(())
    }
}

// =============================================================================
// EVENT LOG ACCOUNT
// =============================================================================

/// Per-mint event sequence counter, at PDA `["events", mint]`.
///
/// # Memory Layout (42 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────────────┬───────────────┐
/// │ Offset │ Size │ Field          │ Type          │
/// ├────────┼──────┼────────────────┼───────────────┤
/// │ 0      │ 32   │ mint           │ Pubkey        │
/// │ 32     │ 8    │ next_sequence  │ u64           │
/// │ 40     │ 1    │ is_initialized │ bool (0 or 1) │
/// │ 41     │ 1    │ bump           │ u8            │
/// └────────┴──────┴────────────────┴───────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventLog {
    /// The mint this log belongs to.
    pub mint: Pubkey,

    /// Sequence number the next event will receive.
    ///
    /// Also the total number of committed operations for the mint.
    pub next_sequence: u64,

    /// Whether this log has been initialized.
    pub is_initialized: bool,

    /// Bump used in the PDA derivation of this log.
    pub bump: u8,
}

impl EventLog {
    /// Size of EventLog when serialized to bytes.
    ///
    /// Calculation: 32 + 8 + 1 + 1 = 42 bytes
    pub const LEN: usize = 42;

    /// Assign the next sequence number and build the event carrying it.
    ///
    /// The caller still has to `emit()` the event and pack the log back,
    /// so a failing operation leaves neither behind.
    pub fn record(
        &mut self,
        kind: EventKind,
        actor: Pubkey,
        reference: Pubkey,
        amount: u64,
        timestamp: i64,
    ) -> Result<Event, ProgramError> {
        let sequence = self.next_sequence;
        self.next_sequence = self
            .next_sequence
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;

        Ok(Event {
            sequence,
            kind,
            actor,
            mint: self.mint,
            reference,
            amount,
            timestamp,
        })
    }
}

impl Pack for EventLog {
    const LEN: usize = 42;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, EventLog::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_bytes, next_sequence_bytes, is_initialized_bytes, bump_bytes) =
            array_refs![input, 32, 8, 1, 1];

        Ok(EventLog {
            mint: Pubkey::new_from_array(*mint_bytes),
            next_sequence: u64::from_le_bytes(*next_sequence_bytes),
            is_initialized: is_initialized_bytes[0] != 0,
            bump: bump_bytes[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, EventLog::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, next_sequence_dst, is_initialized_dst, bump_dst) =
            mut_array_refs![output, 32, 8, 1, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        *next_sequence_dst = self.next_sequence.to_le_bytes();
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
    fn test_event_pack_unpack_roundtrip() {
        let original = Event {
            sequence: 12,
            kind: EventKind::RewardClaimed,
            actor: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            reference: Pubkey::new_unique(),
            amount: 25,
            timestamp: 1_700_000_000,
        };

        let mut packed = [0u8; Event::LEN];
        original.pack(&mut packed).unwrap();

        let unpacked = Event::unpack(&packed).unwrap();
        assert_eq!(original, unpacked);
    }

    #[test]
    fn test_event_invalid_kind() {
        let mut packed = [0u8; Event::LEN];
        packed[8] = 9; // not a valid kind
        assert!(Event::unpack(&packed).is_err());
    }

    /// Sequences are assigned in order and never repeat.
    #[test]
    fn test_event_log_record_sequences() {
        let mint = Pubkey::new_unique();
        let actor = Pubkey::new_unique();
        let mut log = EventLog {
            mint,
            next_sequence: 0,
            is_initialized: true,
            bump: 255,
        };

        let first = log
            .record(EventKind::MintCreated, actor, mint, 0, 1)
            .unwrap();
        let second = log
            .record(EventKind::TokensPurchased, actor, mint, 100, 2)
            .unwrap();

        assert_eq!(first.sequence, 0);
        assert_eq!(second.sequence, 1);
        assert_eq!(log.next_sequence, 2);
        assert_eq!(second.mint, mint);
    }

    #[test]
    fn test_event_log_sequence_overflow() {
        let mut log = EventLog {
            mint: Pubkey::new_unique(),
            next_sequence: u64::MAX,
            is_initialized: true,
            bump: 255,
        };

        let result = log.record(
            EventKind::TokensPurchased,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            1,
            1,
        );
        assert!(result.is_err());
    }
}
