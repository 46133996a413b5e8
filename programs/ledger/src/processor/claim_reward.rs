//! ClaimReward Instruction Processor
//!
//! Redeems a reward by burning the required token amount from the
//! holder's account. Balance check, burn, and claim-count increment are
//! one atomic unit.
//!
//! Burning lives only here: there is no standalone burn instruction, so
//! no code path can destroy tokens while bypassing reward accounting.
//! Claims are repeatable as long as the balance covers the threshold.

use crate::error::LedgerError;
use crate::state::{EventKind, EventLog, HolderAccount, Mint, Pack, Receipt, Reward};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

/// Process ClaimReward instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[writable]` Reward
/// 2. `[writable]` Holder account to debit
/// 3. `[writable]` Event log
/// 4. `[signer]` Owner of the holder account
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

    // Account 2: Holder account
    let holder_info = next_account_info(account_info_iter)?;

    // Account 3: Event log
    let event_log_info = next_account_info(account_info_iter)?;

    // Account 4: Owner
    let owner_info = next_account_info(account_info_iter)?;

    // Validate mint
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;

    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(LedgerError::UninitializedAccount.into());
    }

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

    // Validate holder account; a holder that never purchased has no
    // account, which surfaces as an ownership/initialization failure
    assert_owned_by(holder_info, program_id)?;
    assert_writable(holder_info)?;
    assert_data_length(holder_info, HolderAccount::LEN)?;

    let mut holder = HolderAccount::unpack_from_slice(&holder_info.data.borrow())?;
    if !holder.is_initialized {
        return Err(LedgerError::UninitializedAccount.into());
    }
    if holder.mint != *mint_info.key {
        return Err(LedgerError::MintMismatch.into());
    }

    // Only the account owner may burn from it
    validate_owner(&holder.owner, owner_info)?;

    // Threshold check before any mutation
    if holder.amount < reward.required_amount {
        return Err(LedgerError::InsufficientBalance.into());
    }

    // Burn: single-account debit, supply shrinks with it
    holder.amount = checked_sub(holder.amount, reward.required_amount)?;
    mint.supply = checked_sub(mint.supply, reward.required_amount)?;

    // Count the claim
    reward.claim_count = checked_add(reward.claim_count, 1)?;

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

    // Append claim event
    let clock = Clock::get()?;
    let event = event_log.record(
        EventKind::RewardClaimed,
        *owner_info.key,
        *reward_info.key,
        reward.required_amount,
        clock.unix_timestamp,
    )?;
    event.emit()?;

    // Save states
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    reward.pack_into_slice(&mut reward_info.data.borrow_mut())?;
    holder.pack_into_slice(&mut holder_info.data.borrow_mut())?;
    event_log.pack_into_slice(&mut event_log_info.data.borrow_mut())?;

    // Publish the receipt as return data
    Receipt {
        kind: EventKind::RewardClaimed,
        mint: *mint_info.key,
        subject: *reward_info.key,
        actor: *owner_info.key,
        amount: reward.required_amount,
        balance: holder.amount,
        supply: mint.supply,
        claim_count: reward.claim_count,
        sequence: event.sequence,
    }
    .publish()?;

    Ok(())
}
