use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::constants::{MINT_SEED, TOKEN_STATE_SEED, TREASURY_VAULT_SEED};
use crate::state::TokenState;

/// Read-only: reports treasury balance and unlocked amount without settling.
pub fn emit_treasury_quote(ctx: Context<EmitTreasuryQuote>) -> Result<u64> {
    let st = &ctx.accounts.token_state;
    let now = Clock::get()?.unix_timestamp;
    let treasury_unlocked = st.treasury_unlocked(now);

    emit!(TreasuryQuote {
        total_supply: ctx.accounts.mint.supply,
        treasury_balance: ctx.accounts.treasury_vault.amount,
        treasury_unlocked,
        monthly_rate: st.accrual.monthly_rate,
        last_settlement_ts: st.accrual.last_settlement_ts,
        now,
    });

    Ok(treasury_unlocked)
}

#[derive(Accounts)]
pub struct EmitTreasuryQuote<'info> {
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        seeds = [MINT_SEED, token_state.key().as_ref()],
        bump
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        seeds = [TREASURY_VAULT_SEED, token_state.key().as_ref()],
        bump
    )]
    pub treasury_vault: Account<'info, TokenAccount>,
}

#[event]
pub struct TreasuryQuote {
    pub total_supply: u64,
    pub treasury_balance: u64,
    pub treasury_unlocked: u64,
    pub monthly_rate: u64,
    pub last_settlement_ts: i64,
    pub now: i64,
}
