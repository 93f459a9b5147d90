use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::error::LockedTokenError;
use crate::state::TokenState;
use crate::utils::access;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), LockedTokenError::InvalidPubkey);

    let st = &mut ctx.accounts.token_state;
    access::ensure_owner(st, &ctx.accounts.owner.key())?;

    let old = st.owner;
    st.owner = new_owner;

    emit!(OwnershipTransferred {
        old_owner: old,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
