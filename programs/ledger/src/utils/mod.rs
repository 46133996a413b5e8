//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `assertions`: Common validation checks (ownership, signer, etc.)
//! - `authority`: Signer-set validation against recorded authorities
//! - `pda`: Program-derived address checks and account creation

pub mod assertions;
pub mod authority;
pub mod pda;

// Re-export all utilities for easy access
pub use assertions::*;
pub use authority::*;
pub use pda::*;
