//! # Soulbound Ledger
//!
//! A soulbound-token and reward ledger for artist fan tokens, built as
//! a from-scratch Solana program.
//!
//! ## Overview
//!
//! This program allows:
//! - Artists to create a token mint bound to their identity (one each)
//! - Buyers to purchase tokens, paying the artist in lamports
//! - Artists to define rewards redeemable for a token threshold
//! - Holders to claim rewards by irreversibly burning tokens
//!
//! Tokens never move between holders. There is no transfer instruction,
//! no delegate, and no standalone burn: the only ways a balance changes
//! are a purchase (up) and a reward claim (down). Soulbound-ness is
//! structural, not a runtime flag check.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 94 bytes | An artist's token class and counters |
//! | HolderAccount | 82 bytes | One holder's balance for one mint |
//! | Reward | 253 bytes | A redemption rule with claim counter |
//! | EventLog | 42 bytes | Per-mint event sequence counter |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | InitializeMint | Create an artist's mint and event log |
//! | 1 | PurchaseTokens | Pay the artist, receive soulbound tokens |
//! | 2 | AddReward | Define a reward (artist only) |
//! | 3 | RemoveReward | Retire a reward (artist only) |
//! | 4 | ClaimReward | Burn tokens to redeem a reward |
//!
//! ## Addresses
//!
//! Every record lives at a program-derived address, so uniqueness
//! policies are structural:
//!
//! | Record | Seeds |
//! |--------|-------|
//! | Mint | `["mint", artist]` |
//! | HolderAccount | `["holder", mint, owner]` |
//! | Reward | `["reward", mint, reward_id_le]` |
//! | EventLog | `["events", mint]` |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// PDA seed prefixes and metadata length caps
pub mod constants;

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions and parsing
pub mod instruction;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures (Mint, HolderAccount, Reward, EventLog)
pub mod state;

/// Utility functions for validation, authority checks, and PDAs
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Make commonly used types available at crate root
// Users can write: use soulbound_ledger::LedgerError;
// Instead of: use soulbound_ledger::error::LedgerError;

pub use error::LedgerError;
pub use instruction::LedgerInstruction;
pub use processor::Processor;
pub use state::{Event, EventKind, EventLog, HolderAccount, Mint, Pack, Receipt, Reward};

// =============================================================================
// PROGRAM ID
// =============================================================================

// This macro declares the program's on-chain address
// Replace with your actual program ID after deployment
solana_program::declare_id!("5HYKXs4XSSFRg27YVKuAXHAjs6tkwwoCp7z8XLqtaAYn");
