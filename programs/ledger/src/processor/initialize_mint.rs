//! InitializeMint Instruction Processor
//!
//! Creates an artist's mint and its event log. The mint address is
//! derived from the artist identity alone, so a second creation attempt
//! by the same artist lands on the same account and fails.

use crate::constants::{EVENT_LOG_SEED, MINT_SEED};
use crate::error::LedgerError;
use crate::state::{EventKind, EventLog, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    sysvar::Sysvar,
};

/// Process InitializeMint instruction
///
/// Accounts expected:
/// 0. `[signer, writable]` Artist authority (pays rent)
/// 1. `[writable]` Mint PDA `["mint", artist]`
/// 2. `[writable]` Event log PDA `["events", mint]`
/// 3. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    name: String,
    symbol: String,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Artist
    let artist_info = next_account_info(account_info_iter)?;

    // Account 1: Mint PDA
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Event log PDA
    let event_log_info = next_account_info(account_info_iter)?;

    // Account 3: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // The prospective artist authority must sign its own mint creation
    assert_signer(artist_info)?;
    assert_system_program(system_program_info)?;

    // Validate derived addresses
    let mint_bump = assert_derived_address(
        mint_info,
        program_id,
        &[MINT_SEED, artist_info.key.as_ref()],
    )?;
    let log_bump = assert_derived_address(
        event_log_info,
        program_id,
        &[EVENT_LOG_SEED, mint_info.key.as_ref()],
    )?;

    // One mint per artist: the address is a function of the artist key,
    // so an existing account here means this artist already has a mint
    if mint_info.data_len() > 0 || event_log_info.data_len() > 0 {
        return Err(LedgerError::AlreadyInitialized.into());
    }

    // Create both records, artist pays rent
    create_ledger_account(
        artist_info,
        mint_info,
        system_program_info,
        program_id,
        Mint::LEN,
        &[MINT_SEED, artist_info.key.as_ref(), &[mint_bump]],
    )?;
    create_ledger_account(
        artist_info,
        event_log_info,
        system_program_info,
        program_id,
        EventLog::LEN,
        &[EVENT_LOG_SEED, mint_info.key.as_ref(), &[log_bump]],
    )?;

    // Initialize mint
    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    mint.artist_authority = *artist_info.key;
    mint.supply = 0;
    mint.decimals = 0; // tokens are discrete and non-fractional
    mint.non_transferable = true; // permanent; no instruction can clear it
    mint.is_initialized = true;
    mint.customer_count = 0;
    mint.set_name(&name)?;
    mint.set_symbol(&symbol)?;
    mint.bump = mint_bump;

    // Initialize event log
    let mut event_log = EventLog::unpack_from_slice(&event_log_info.data.borrow())?;
    event_log.mint = *mint_info.key;
    event_log.next_sequence = 0;
    event_log.is_initialized = true;
    event_log.bump = log_bump;

    // Append creation event
    let clock = Clock::get()?;
    let event = event_log.record(
        EventKind::MintCreated,
        *artist_info.key,
        *mint_info.key,
        0,
        clock.unix_timestamp,
    )?;
    event.emit()?;

    // Save states
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    event_log.pack_into_slice(&mut event_log_info.data.borrow_mut())?;

    Ok(())
}
