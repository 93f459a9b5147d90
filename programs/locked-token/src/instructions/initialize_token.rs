use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, Mint, MintTo, SetAuthority, Token, TokenAccount};

use crate::constants::{
    DEFAULT_MONTH_DURATION, MAX_NAME_LEN, MAX_SYMBOL_LEN, MINT_SEED, TOKEN_STATE_SEED,
    TREASURY_VAULT_SEED,
};
use crate::error::LockedTokenError;
use crate::state::{AccrualState, TokenState};

/// Genesis parameters (instruction input).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenesisParams {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u64,
    /// Treasury operator key.
    pub treasury: Pubkey,
    pub initial_unlock: u64,
    pub monthly_rate: u64,
    /// Accrual period in seconds; `None` means 30 days.
    pub month_duration: Option<i64>,
}

/// Check genesis parameters and resolve the month duration.
pub fn validate_genesis(params: &GenesisParams) -> Result<i64> {
    require!(params.total_supply > 0, LockedTokenError::InvalidConstruction);
    require!(
        params.initial_unlock <= params.total_supply,
        LockedTokenError::InvalidConstruction
    );
    require!(params.treasury != Pubkey::default(), LockedTokenError::InvalidPubkey);
    require!(params.name.len() <= MAX_NAME_LEN, LockedTokenError::NameTooLong);
    require!(params.symbol.len() <= MAX_SYMBOL_LEN, LockedTokenError::SymbolTooLong);

    let month_duration = params.month_duration.unwrap_or(DEFAULT_MONTH_DURATION);
    require!(month_duration > 0, LockedTokenError::InvalidConstruction);
    Ok(month_duration)
}

pub fn initialize_token(ctx: Context<InitializeToken>, params: GenesisParams) -> Result<()> {
    let month_duration = validate_genesis(&params)?;
    let now = Clock::get()?.unix_timestamp;

    let token_state_ai = ctx.accounts.token_state.to_account_info();
    let signer_seeds: &[&[&[u8]]] = &[&[TOKEN_STATE_SEED, &[ctx.bumps.token_state]]];

    // Entire supply goes to the treasury vault.
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.treasury_vault.to_account_info(),
                authority: token_state_ai.clone(),
            },
            signer_seeds,
        ),
        params.total_supply,
    )?;

    // Fixed supply: nobody can mint after genesis.
    token::set_authority(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            SetAuthority {
                current_authority: token_state_ai,
                account_or_mint: ctx.accounts.mint.to_account_info(),
            },
            signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )?;

    let st = &mut ctx.accounts.token_state;
    st.owner = ctx.accounts.owner.key();
    st.treasury = params.treasury;
    st.mint = ctx.accounts.mint.key();
    st.treasury_vault = ctx.accounts.treasury_vault.key();
    st.name = params.name;
    st.symbol = params.symbol;
    st.decimals = params.decimals;
    st.accrual = AccrualState::genesis(
        params.total_supply,
        params.initial_unlock,
        params.monthly_rate,
        month_duration,
        now,
    );
    st.bump = ctx.bumps.token_state;

    emit!(TokenInitialized {
        owner: st.owner,
        treasury: st.treasury,
        mint: st.mint,
        treasury_vault: st.treasury_vault,
        total_supply: params.total_supply,
        initial_unlock: params.initial_unlock,
        monthly_rate: params.monthly_rate,
        month_duration,
        genesis_ts: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(params: GenesisParams)]
pub struct InitializeToken<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + TokenState::SIZE,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init,
        payer = owner,
        mint::decimals = params.decimals,
        mint::authority = token_state,
        seeds = [MINT_SEED, token_state.key().as_ref()],
        bump
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = token_state,
        seeds = [TREASURY_VAULT_SEED, token_state.key().as_ref()],
        bump
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokenInitialized {
    pub owner: Pubkey,
    pub treasury: Pubkey,
    pub mint: Pubkey,
    pub treasury_vault: Pubkey,
    pub total_supply: u64,
    pub initial_unlock: u64,
    pub monthly_rate: u64,
    pub month_duration: i64,
    pub genesis_ts: i64,
}
