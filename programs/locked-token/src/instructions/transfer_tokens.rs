use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::TOKEN_STATE_SEED;
use crate::error::LockedTokenError;
use crate::state::TokenState;
use crate::utils::gate::{self, TransferRoute};

pub fn transfer_tokens(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    // Capture AccountInfos before taking the mutable borrow on token_state.
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let token_state_ai = ctx.accounts.token_state.to_account_info();
    let from_ai = ctx.accounts.from.to_account_info();
    let to_ai = ctx.accounts.to.to_account_info();
    let authority_ai = ctx.accounts.authority.to_account_info();

    let from_key = ctx.accounts.from.key();
    let to_key = ctx.accounts.to.key();
    let from_owner = ctx.accounts.from.owner;
    let from_balance = ctx.accounts.from.amount;
    let signer = ctx.accounts.authority.key();

    let st = &mut ctx.accounts.token_state;
    let route = gate::route(&from_key, &to_key, &st.treasury_vault);
    gate::authorize_sender(route, &signer, &st.treasury, &from_owner)?;

    let now = Clock::get()?.unix_timestamp;
    let bump = [st.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[TOKEN_STATE_SEED, &bump]];

    gate::gated_transfer(&mut st.accrual, route, amount, from_balance, now, || {
        match route {
            // The vault is owned by the state PDA.
            TransferRoute::TreasuryOutbound => token::transfer(
                CpiContext::new_with_signer(
                    token_program_ai,
                    Transfer {
                        from: from_ai,
                        to: to_ai,
                        authority: token_state_ai,
                    },
                    signer_seeds,
                ),
                amount,
            ),
            _ => token::transfer(
                CpiContext::new(
                    token_program_ai,
                    Transfer {
                        from: from_ai,
                        to: to_ai,
                        authority: authority_ai,
                    },
                ),
                amount,
            ),
        }
    })?;

    emit!(TokensTransferred {
        from: from_key,
        to: to_key,
        amount,
        route,
        treasury_unlocked: st.treasury_unlocked(now),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        constraint = from.mint == token_state.mint @ LockedTokenError::InvalidTokenMint,
    )]
    pub from: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = to.mint == token_state.mint @ LockedTokenError::InvalidTokenMint,
    )]
    pub to: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub route: TransferRoute,
    /// Treasury unlocked amount after the transfer.
    pub treasury_unlocked: u64,
}
