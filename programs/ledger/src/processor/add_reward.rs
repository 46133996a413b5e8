//! AddReward Instruction Processor
//!
//! Defines a new reward for a mint. Artist-only.

use crate::constants::REWARD_SEED;
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

/// Process AddReward instruction
///
/// Accounts expected:
/// 0. `[]` Mint
/// 1. `[writable]` Reward PDA `["reward", mint, reward_id]`
/// 2. `[writable]` Event log
/// 3. `[signer, writable]` Artist authority (pays rent)
/// 4. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    reward_id: u64,
    required_amount: u64,
    title: String,
    description: String,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Reward PDA
    let reward_info = next_account_info(account_info_iter)?;

    // Account 2: Event log
    let event_log_info = next_account_info(account_info_iter)?;

    // Account 3: Artist
    let artist_info = next_account_info(account_info_iter)?;

    // Account 4: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate mint
    assert_owned_by(mint_info, program_id)?;
    assert_data_length(mint_info, Mint::LEN)?;
    assert_system_program(system_program_info)?;

    let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(LedgerError::UninitializedAccount.into());
    }

    // Only the mint's artist may define rewards
    validate_authority(&mint.artist_authority, artist_info)?;

    // A reward that costs nothing to claim is a misconfiguration
    if required_amount == 0 {
        return Err(LedgerError::InvalidThreshold.into());
    }

    // Validate derived address; the id is part of it, so one id maps to
    // exactly one account per mint
    let reward_id_bytes = reward_id.to_le_bytes();
    let reward_bump = assert_derived_address(
        reward_info,
        program_id,
        &[REWARD_SEED, mint_info.key.as_ref(), &reward_id_bytes],
    )?;

    if reward_info.data_len() > 0 {
        return Err(LedgerError::DuplicateRewardId.into());
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

    // Create the reward record, artist pays rent
    create_ledger_account(
        artist_info,
        reward_info,
        system_program_info,
        program_id,
        Reward::LEN,
        &[
            REWARD_SEED,
            mint_info.key.as_ref(),
            &reward_id_bytes,
            &[reward_bump],
        ],
    )?;

    // Initialize reward
    let mut reward = Reward::unpack_from_slice(&reward_info.data.borrow())?;
    reward.mint = *mint_info.key;
    reward.reward_id = reward_id;
    reward.required_amount = required_amount;
    reward.claim_count = 0;
    reward.is_active = true;
    reward.is_initialized = true;
    reward.set_title(&title)?;
    reward.set_description(&description)?;
    reward.bump = reward_bump;

    // Append event
    let clock = Clock::get()?;
    let event = event_log.record(
        EventKind::RewardAdded,
        *artist_info.key,
        *reward_info.key,
        required_amount,
        clock.unix_timestamp,
    )?;
    event.emit()?;

    // Save states
    reward.pack_into_slice(&mut reward_info.data.borrow_mut())?;
    event_log.pack_into_slice(&mut event_log_info.data.borrow_mut())?;

    Ok(())
}
