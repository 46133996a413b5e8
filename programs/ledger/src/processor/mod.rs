//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file for clarity and maintainability.

pub mod add_reward;
pub mod claim_reward;
pub mod initialize_mint;
pub mod purchase_tokens;
pub mod remove_reward;

use crate::instruction::LedgerInstruction;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a ledger program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = LedgerInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        match instruction {
            LedgerInstruction::InitializeMint { name, symbol } => {
                msg!("Instruction: InitializeMint");
                initialize_mint::process(program_id, accounts, name, symbol)
            }

            LedgerInstruction::PurchaseTokens { amount, unit_price } => {
                msg!("Instruction: PurchaseTokens");
                purchase_tokens::process(program_id, accounts, amount, unit_price)
            }

            LedgerInstruction::AddReward {
                reward_id,
                required_amount,
                title,
                description,
            } => {
                msg!("Instruction: AddReward");
                add_reward::process(
                    program_id,
                    accounts,
                    reward_id,
                    required_amount,
                    title,
                    description,
                )
            }

            LedgerInstruction::RemoveReward { reward_id } => {
                msg!("Instruction: RemoveReward");
                remove_reward::process(program_id, accounts, reward_id)
            }

            LedgerInstruction::ClaimReward { reward_id } => {
                msg!("Instruction: ClaimReward");
                claim_reward::process(program_id, accounts, reward_id)
            }
        }
    }
}
