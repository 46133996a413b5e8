//! RemoveReward Instruction Processor
//!
//! Transitions a reward from Active to Removed. One-way; subsequent
//! claims fail, past burns stand.

use crate::error::LedgerError;
use crate::state::{EventKind, EventLog, Mint, Pack, Reward};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

/// Process RemoveReward instruction
///
/// Accounts expected:
/// 0. `[]` Mint
/// 1. `[writable]` Reward
/// 2. `[writable]` Event log
/// 3. `[signer]` Artist authority
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    reward_id: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Reward
    let reward_info = next_account_info(account_info_iter)?;

    // Account 2: Event log
    let event_log_info = next_account_info(account_info_iter)?;

    // Account 3: Artist
    let artist_info = next_account_info(account_info_iter)?;

    // Validate mint
    assert_owned_by(mint_info, program_id)?;
    assert_data_length(mint_info, Mint::LEN)?;

    let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(LedgerError::UninitializedAccount.into());
    }

    // Only the mint's artist may remove its rewards
    validate_authority(&mint.artist_authority, artist_info)?;

    // Validate reward
    assert_owned_by(reward_info, program_id)?;
    assert_writable(reward_info)?;
    assert_data_length(reward_info, Reward::LEN)?;

    let mut reward = Reward::unpack_from_slice(&reward_info.data.borrow())?;
    if !reward.is_initialized {
        return Err(LedgerError::UninitializedAccount.into());
    }
    if reward.mint != *mint_info.key || reward.reward_id != reward_id {
        return Err(LedgerError::RewardMismatch.into());
    }
    if !reward.is_active {
        return Err(LedgerError::RewardNotActive.into());
    }

    // Validate event log
    assert_owned_by(event_log_info, program_id)?;
    assert_writable(event_log_info)?;
    assert_data_length(event_log_info, EventLog::LEN)?;

    let mut event_log = EventLog::unpack_from_slice(&event_log_info.data.borrow())?;
    if !event_log.is_initialized {
        return Err(LedgerError::UninitializedAccount.into());
    }
    if event_log.mint != *mint_info.key {
        return Err(LedgerError::MintMismatch.into());
    }

    // Active -> Removed, permanently
    reward.is_active = false;

    // Append event
    let clock = Clock::get()?;
    let event = event_log.record(
        EventKind::RewardRemoved,
        *artist_info.key,
        *reward_info.key,
        0,
        clock.unix_timestamp,
    )?;
    event.emit()?;

    // Save states
    reward.pack_into_slice(&mut reward_info.data.borrow_mut())?;
    event_log.pack_into_slice(&mut event_log_info.data.borrow_mut())?;

    Ok(())
}
