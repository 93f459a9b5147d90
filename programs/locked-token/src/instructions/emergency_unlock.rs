use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;
use crate::utils::{access, accrual};

pub fn emergency_unlock(ctx: Context<EmergencyUnlock>, amount: u64) -> Result<()> {
    let st = &mut ctx.accounts.token_state;
    access::ensure_owner(st, &ctx.accounts.owner.key())?;

    let now = Clock::get()?.unix_timestamp;
    let settled = accrual::emergency_unlock(&mut st.accrual, amount, now);
    if settled.months > 0 {
        msg!("settled {} month(s) before emergency unlock", settled.months);
    }

    emit!(EmergencyUnlocked {
        owner: st.owner,
        amount,
        treasury_unlocked: st.accrual.unlocked_pool,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyUnlock<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct EmergencyUnlocked {
    pub owner: Pubkey,
    /// Requested top-up; the pool is capped at total supply.
    pub amount: u64,
    pub treasury_unlocked: u64,
}
