use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::state::AccrualState;
use crate::utils::accrual;

/// Singleton token state PDA.
#[account]
pub struct TokenState {
    /// Owner authority for rate changes and emergency unlocks.
    pub owner: Pubkey,
    /// Treasury operator; the only signer allowed to move funds out of the vault.
    pub treasury: Pubkey,
    /// Token mint (PDA, mint authority revoked after genesis).
    pub mint: Pubkey,
    /// Treasury token account (PDA, owned by this state account).
    pub treasury_vault: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub accrual: AccrualState,
    pub bump: u8,
}

impl TokenState {
    pub const SIZE: usize =
        32 + // owner
        32 + // treasury
        32 + // mint
        32 + // treasury_vault
        4 + MAX_NAME_LEN + // name
        4 + MAX_SYMBOL_LEN + // symbol
        1 +  // decimals
        AccrualState::SIZE + // accrual
        1;   // bump

    /// Treasury unlocked amount as of `now`, without settling.
    pub fn treasury_unlocked(&self, now: i64) -> u64 {
        accrual::view_unlocked(&self.accrual, now)
    }
}
