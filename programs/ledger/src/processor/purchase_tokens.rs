//! PurchaseTokens Instruction Processor
//!
//! Settles payment from the buyer to the artist and issues soulbound
//! tokens to the buyer's holder account, as one atomic unit. If any
//! step fails the whole transaction rolls back: payment taken without
//! tokens issued cannot happen.
//!
//! Dual authorization: the paying buyer and the mint's artist authority
//! both sign, as two explicit verified identities.

use crate::constants::HOLDER_SEED;
use crate::error::LedgerError;
use crate::state::{EventKind, EventLog, HolderAccount, Mint, Pack, Receipt};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    program::invoke,
    pubkey::Pubkey,
    system_instruction,
    sysvar::Sysvar,
};

/// Process PurchaseTokens instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[writable]` Holder account PDA `["holder", mint, buyer]`
/// 2. `[writable]` Event log
/// 3. `[signer, writable]` Buyer (pays lamports and rent)
/// 4. `[signer, writable]` Artist authority (receives payment)
/// 5. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
    unit_price: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Holder account
    let holder_info = next_account_info(account_info_iter)?;

    // Account 2: Event log
    let event_log_info = next_account_info(account_info_iter)?;

    // Account 3: Buyer
    let buyer_info = next_account_info(account_info_iter)?;

    // Account 4: Artist
    let artist_info = next_account_info(account_info_iter)?;

    // Account 5: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate mint
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;
    assert_system_program(system_program_info)?;

    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(LedgerError::UninitializedAccount.into());
    }

    // Dual-signer issuance: buyer authorizes the payment, the artist
    // authorizes the issuance
    assert_signer(buyer_info)?;
    validate_authority(&mint.artist_authority, artist_info)?;

    if amount == 0 {
        return Err(LedgerError::InvalidAmount.into());
    }

    // Validate holder account address
    let holder_bump = assert_derived_address(
        holder_info,
        program_id,
        &[
            HOLDER_SEED,
            mint_info.key.as_ref(),
            buyer_info.key.as_ref(),
        ],
    )?;

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

    // Payment settlement: lamports move buyer -> artist before any
    // issuance; a failure in either leg aborts the whole transaction
    let total_due = checked_mul(amount, unit_price)?;
    if buyer_info.lamports() < total_due {
        return Err(LedgerError::InsufficientFunds.into());
    }
    if total_due > 0 {
        invoke(
            &system_instruction::transfer(buyer_info.key, artist_info.key, total_due),
            &[
                buyer_info.clone(),
                artist_info.clone(),
                system_program_info.clone(),
            ],
        )?;
    }

    // First purchase by this holder creates the account and stamps the
    // customer index; later purchases reuse it
    let mut holder = if holder_info.data_len() == 0 {
        create_ledger_account(
            buyer_info,
            holder_info,
            system_program_info,
            program_id,
            HolderAccount::LEN,
            &[
                HOLDER_SEED,
                mint_info.key.as_ref(),
                buyer_info.key.as_ref(),
                &[holder_bump],
            ],
        )?;

        let created = HolderAccount {
            mint: *mint_info.key,
            owner: *buyer_info.key,
            amount: 0,
            customer_index: mint.customer_count,
            is_initialized: true,
            bump: holder_bump,
        };
        mint.customer_count = checked_add(mint.customer_count, 1)?;
        created
    } else {
        assert_owned_by(holder_info, program_id)?;
        assert_writable(holder_info)?;
        assert_data_length(holder_info, HolderAccount::LEN)?;

        let existing = HolderAccount::unpack_from_slice(&holder_info.data.borrow())?;
        if !existing.is_initialized {
            return Err(LedgerError::UninitializedAccount.into());
        }
        if existing.mint != *mint_info.key {
            return Err(LedgerError::MintMismatch.into());
        }
        if existing.owner != *buyer_info.key {
            return Err(LedgerError::OwnerMismatch.into());
        }
        existing
    };

    // Issue tokens
    holder.amount = checked_add(holder.amount, amount)?;
    mint.supply = checked_add(mint.supply, amount)?;

    // Append purchase event
    let clock = Clock::get()?;
    let event = event_log.record(
        EventKind::TokensPurchased,
        *buyer_info.key,
        *holder_info.key,
        amount,
        clock.unix_timestamp,
    )?;
    event.emit()?;

    // Save states
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    holder.pack_into_slice(&mut holder_info.data.borrow_mut())?;
    event_log.pack_into_slice(&mut event_log_info.data.borrow_mut())?;

    // Publish the receipt as return data
    Receipt {
        kind: EventKind::TokensPurchased,
        mint: *mint_info.key,
        subject: *holder_info.key,
        actor: *buyer_info.key,
        amount,
        balance: holder.amount,
        supply: mint.supply,
        claim_count: 0,
        sequence: event.sequence,
    }
    .publish()?;

    Ok(())
}
