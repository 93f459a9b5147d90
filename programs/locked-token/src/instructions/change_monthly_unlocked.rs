use anchor_lang::prelude::*;

use crate::constants::TOKEN_STATE_SEED;
use crate::state::TokenState;
use crate::utils::{access, accrual};

pub fn change_monthly_unlocked(ctx: Context<ChangeMonthlyUnlocked>, new_rate: u64) -> Result<()> {
    let st = &mut ctx.accounts.token_state;
    access::ensure_owner(st, &ctx.accounts.owner.key())?;

    let now = Clock::get()?.unix_timestamp;
    let old_rate = st.accrual.monthly_rate;
    let settled = accrual::change_rate(&mut st.accrual, new_rate, now);
    if settled.months > 0 {
        msg!("settled {} month(s) at rate {}", settled.months, old_rate);
    }

    emit!(MonthlyUnlockedChanged {
        owner: st.owner,
        old_rate,
        new_rate,
        treasury_unlocked: st.accrual.unlocked_pool,
        last_settlement_ts: st.accrual.last_settlement_ts,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeMonthlyUnlocked<'info> {
    #[account(mut, seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct MonthlyUnlockedChanged {
    pub owner: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
    pub treasury_unlocked: u64,
    pub last_settlement_ts: i64,
}
