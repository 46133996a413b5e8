//! Instruction Types
//!
//! This module defines all instructions supported by the ledger program.
//! Each instruction has:
//! - A discriminant (first byte, identifies the instruction type)
//! - Instruction-specific data (remaining bytes)
//! - Expected accounts (documented, not encoded in data)
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | InitializeMint |
//! | 1 | PurchaseTokens |
//! | 2 | AddReward |
//! | 3 | RemoveReward |
//! | 4 | ClaimReward |
//!
//! There is deliberately no Transfer instruction, no delegate mechanism,
//! and no standalone Burn: tokens leave a holder account only through
//! ClaimReward. The soulbound property is the absence of the primitive.

use crate::error::LedgerError;
use solana_program::program_error::ProgramError;

// =============================================================================
// LEDGER INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the ledger program.
///
/// Each variant contains the instruction-specific data.
/// Account requirements are documented in comments but not encoded.
#[derive(Clone, Debug, PartialEq)]
pub enum LedgerInstruction {
    /// Create an artist's mint and its event log.
    ///
    /// The mint address is derived from the artist identity alone
    /// (`["mint", artist]`), so an artist can create at most one mint;
    /// a second attempt fails with AlreadyInitialized.
    ///
    /// Decimals are fixed at 0 and the non-transferable flag is set
    /// unconditionally. Neither is an artist-chosen option.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | artist | ✓ | ✓ | Artist authority, pays rent |
    /// | 1 | mint | ✓ | | Mint PDA `["mint", artist]` |
    /// | 2 | event_log | ✓ | | Log PDA `["events", mint]` |
    /// | 3 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1]: name_len (u8), followed by name bytes (max 32)
    /// [..]: symbol_len (u8), followed by symbol bytes (max 8)
    /// ```
    InitializeMint {
        /// Display name, immutable after creation
        name: String,

        /// Display symbol, immutable after creation
        symbol: String,
    },

    /// Purchase tokens: settle payment to the artist and issue to the
    /// buyer, atomically.
    ///
    /// Requires two independent signers - the paying buyer and the
    /// mint's artist authority. The buyer's holder account is created
    /// on first purchase, stamping the customer index.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | mint | ✓ | | The artist's mint |
    /// | 1 | holder | ✓ | | Holder PDA `["holder", mint, buyer]` |
    /// | 2 | event_log | ✓ | | The mint's event log |
    /// | 3 | buyer | ✓ | ✓ | Pays lamports and rent |
    /// | 4 | artist | ✓ | ✓ | Receives payment, co-signs issuance |
    /// | 5 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1..9]: amount (u64, little-endian)
    /// [9..17]: unit_price in lamports (u64, little-endian)
    /// ```
    PurchaseTokens {
        /// Number of tokens to issue
        amount: u64,

        /// Price per token in lamports
        unit_price: u64,
    },

    /// Define a new reward for a mint.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | mint | | | The artist's mint |
    /// | 1 | reward | ✓ | | Reward PDA `["reward", mint, id]` |
    /// | 2 | event_log | ✓ | | The mint's event log |
    /// | 3 | artist | ✓ | ✓ | Artist authority, pays rent |
    /// | 4 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// [1..9]: reward_id (u64, little-endian)
    /// [9..17]: required_amount (u64, little-endian)
    /// [17]: title_len (u8), followed by title bytes (max 64)
    /// [..]: description_len (u8), followed by description bytes (max 128)
    /// ```
    AddReward {
        /// Artist-chosen id, unique per mint
        reward_id: u64,

        /// Tokens burned per claim, must be positive
        required_amount: u64,

        /// Display title
        title: String,

        /// Display description
        description: String,
    },

    /// Remove a reward. One-way: subsequent claims fail with
    /// RewardNotActive; past claims and their burns stand.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | mint | | | The artist's mint |
    /// | 1 | reward | ✓ | | The reward to remove |
    /// | 2 | event_log | ✓ | | The mint's event log |
    /// | 3 | artist | | ✓ | Artist authority |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..9]: reward_id (u64, little-endian)
    /// ```
    RemoveReward {
        /// Id of the reward to remove
        reward_id: u64,
    },

    /// Claim a reward: burn the required amount from the holder's
    /// account and increment the reward's claim count, atomically.
    ///
    /// Repeatable: there is no per-holder claimed flag, so a holder may
    /// claim again after replenishing their balance.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | mint | ✓ | | The artist's mint |
    /// | 1 | reward | ✓ | | The reward being claimed |
    /// | 2 | holder | ✓ | | The holder account debited |
    /// | 3 | event_log | ✓ | | The mint's event log |
    /// | 4 | owner | | ✓ | Owner of the holder account |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (4)
    /// [1..9]: reward_id (u64, little-endian)
    /// ```
    ClaimReward {
        /// Id of the reward to claim
        reward_id: u64,
    },
}

// =============================================================================
// DATA PARSING HELPERS
// =============================================================================

/// Read a little-endian u64 off the front of the input.
fn unpack_u64(input: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
    if input.len() < 8 {
        return Err(LedgerError::InvalidInstruction.into());
    }
    let (bytes, rest) = input.split_at(8);
    let value = u64::from_le_bytes(
        bytes
            .try_into()
            .map_err(|_| LedgerError::InvalidInstruction)?,
    );
    Ok((value, rest))
}

/// Read a u8-length-prefixed UTF-8 string off the front of the input.
fn unpack_str(input: &[u8]) -> Result<(String, &[u8]), ProgramError> {
    let (&len, rest) = input
        .split_first()
        .ok_or(LedgerError::InvalidInstruction)?;
    let len = len as usize;
    if rest.len() < len {
        return Err(LedgerError::InvalidInstruction.into());
    }
    let (bytes, rest) = rest.split_at(len);
    let value = core::str::from_utf8(bytes)
        .map_err(|_| LedgerError::InvalidInstruction)?
        .to_string();
    Ok((value, rest))
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl LedgerInstruction {
    /// Parse instruction data into a LedgerInstruction.
    ///
    /// First byte is the discriminant, remaining bytes are
    /// instruction-specific.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstruction` on any parse failure.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(LedgerError::InvalidInstruction)?;

        Ok(match discriminant {
            // =================================================================
            // 0: InitializeMint
            // =================================================================
            0 => {
                let (name, rest) = unpack_str(rest)?;
                let (symbol, _rest) = unpack_str(rest)?;
                LedgerInstruction::InitializeMint { name, symbol }
            }

            // =================================================================
            // 1: PurchaseTokens
            // =================================================================
            1 => {
                let (amount, rest) = unpack_u64(rest)?;
                let (unit_price, _rest) = unpack_u64(rest)?;
                LedgerInstruction::PurchaseTokens { amount, unit_price }
            }

            // =================================================================
            // 2: AddReward
            // =================================================================
            2 => {
                let (reward_id, rest) = unpack_u64(rest)?;
                let (required_amount, rest) = unpack_u64(rest)?;
                let (title, rest) = unpack_str(rest)?;
                let (description, _rest) = unpack_str(rest)?;
                LedgerInstruction::AddReward {
                    reward_id,
                    required_amount,
                    title,
                    description,
                }
            }

            // =================================================================
            // 3: RemoveReward
            // =================================================================
            3 => {
                let (reward_id, _rest) = unpack_u64(rest)?;
                LedgerInstruction::RemoveReward { reward_id }
            }

            // =================================================================
            // 4: ClaimReward
            // =================================================================
            4 => {
                let (reward_id, _rest) = unpack_u64(rest)?;
                LedgerInstruction::ClaimReward { reward_id }
            }

            // =================================================================
            // Unknown instruction
            // =================================================================
            _ => return Err(LedgerError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes.
    ///
    /// This is the inverse of `unpack()`.
    /// Used by tests and client libraries to create instruction data.
    /// Strings longer than 255 bytes are truncated by the u8 length
    /// prefix; the processors reject anything over the metadata caps
    /// long before that matters.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            LedgerInstruction::InitializeMint { name, symbol } => {
                buf.push(0); // discriminant
                pack_str(&mut buf, name);
                pack_str(&mut buf, symbol);
            }

            LedgerInstruction::PurchaseTokens { amount, unit_price } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
                buf.extend_from_slice(&unit_price.to_le_bytes());
            }

            LedgerInstruction::AddReward {
                reward_id,
                required_amount,
                title,
                description,
            } => {
                buf.push(2);
                buf.extend_from_slice(&reward_id.to_le_bytes());
                buf.extend_from_slice(&required_amount.to_le_bytes());
                pack_str(&mut buf, title);
                pack_str(&mut buf, description);
            }

            LedgerInstruction::RemoveReward { reward_id } => {
                buf.push(3);
                buf.extend_from_slice(&reward_id.to_le_bytes());
            }

            LedgerInstruction::ClaimReward { reward_id } => {
                buf.push(4);
                buf.extend_from_slice(&reward_id.to_le_bytes());
            }
        }

        buf
    }
}

/// Append a u8-length-prefixed string to the buffer.
fn pack_str(buf: &mut Vec<u8>, value: &str) {
    let bytes = value.as_bytes();
    let len = bytes.len().min(u8::MAX as usize);
    buf.push(len as u8);
    buf.extend_from_slice(&bytes[..len]);
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_roundtrip() {
        let cases = vec![
            LedgerInstruction::InitializeMint {
                name: "Soul Tokens".to_string(),
                symbol: "SOUL".to_string(),
            },
            LedgerInstruction::PurchaseTokens {
                amount: 100,
                unit_price: 1_000_000,
            },
            LedgerInstruction::AddReward {
                reward_id: 1,
                required_amount: 25,
                title: "Backstage pass".to_string(),
                description: "Meet the band".to_string(),
            },
            LedgerInstruction::RemoveReward { reward_id: 1 },
            LedgerInstruction::ClaimReward { reward_id: 1 },
        ];

        for original in cases {
            let packed = original.pack();
            let unpacked = LedgerInstruction::unpack(&packed).unwrap();
            assert_eq!(original, unpacked);
        }
    }

    #[test]
    fn test_unpack_empty_fails() {
        assert!(LedgerInstruction::unpack(&[]).is_err());
    }

    #[test]
    fn test_unpack_unknown_discriminant_fails() {
        assert!(LedgerInstruction::unpack(&[9]).is_err());
    }

    #[test]
    fn test_unpack_truncated_data_fails() {
        // PurchaseTokens with only 4 of 16 data bytes
        assert!(LedgerInstruction::unpack(&[1, 1, 2, 3, 4]).is_err());
        // String length prefix pointing past the end
        assert!(LedgerInstruction::unpack(&[0, 10, b'x']).is_err());
    }
}
