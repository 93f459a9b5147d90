use anchor_lang::prelude::*;

use crate::error::LockedTokenError;
use crate::state::TokenState;

pub fn is_owner(state: &TokenState, caller: &Pubkey) -> bool {
    state.owner == *caller
}

pub fn ensure_owner(state: &TokenState, caller: &Pubkey) -> Result<()> {
    require!(is_owner(state, caller), LockedTokenError::Unauthorized);
    Ok(())
}
