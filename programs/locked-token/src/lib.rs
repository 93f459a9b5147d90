use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("G5x7ize66KWsT4utYTUcdLDp1Bqpf6SsQTGuy6SgvUGx");

#[program]
pub mod locked_token {
    use super::*;

    /// Mints the full supply into the treasury vault and starts the unlock schedule.
    pub fn initialize_token(ctx: Context<InitializeToken>, params: GenesisParams) -> Result<()> {
        instructions::initialize_token::initialize_token(ctx, params)
    }

    /// Moves tokens between holders. Transfers out of the treasury vault are
    /// limited to the unlocked amount; transfers into it re-credit it.
    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        instructions::transfer_tokens::transfer_tokens(ctx, amount)
    }

    pub fn change_monthly_unlocked(ctx: Context<ChangeMonthlyUnlocked>, new_rate: u64) -> Result<()> {
        instructions::change_monthly_unlocked::change_monthly_unlocked(ctx, new_rate)
    }

    pub fn emergency_unlock(ctx: Context<EmergencyUnlock>, amount: u64) -> Result<()> {
        instructions::emergency_unlock::emergency_unlock(ctx, amount)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner)
    }

    pub fn emit_treasury_quote(ctx: Context<EmitTreasuryQuote>) -> Result<u64> {
        instructions::emit_treasury_quote::emit_treasury_quote(ctx)
    }
}
