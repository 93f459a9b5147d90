//! Treasury-aware wrapper around the raw token transfer.
//!
//! Outbound treasury transfers are checked against the settled unlocked pool
//! and debited from it; inbound transfers credit the pool back. Engine writes
//! are staged on a copy and only stored once the raw transfer succeeded.

use anchor_lang::prelude::*;

use crate::error::LockedTokenError;
use crate::state::AccrualState;
use crate::utils::accrual;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferRoute {
    /// Neither side is the treasury.
    Direct,
    TreasuryOutbound,
    TreasuryInbound,
    /// Treasury to itself. No engine effect.
    TreasurySelf,
}

pub fn route(from: &Pubkey, to: &Pubkey, treasury_vault: &Pubkey) -> TransferRoute {
    match (from == treasury_vault, to == treasury_vault) {
        (true, true) => TransferRoute::TreasurySelf,
        (true, false) => TransferRoute::TreasuryOutbound,
        (false, true) => TransferRoute::TreasuryInbound,
        (false, false) => TransferRoute::Direct,
    }
}

/// The signer must control the source: the treasury operator for the vault,
/// the token account owner otherwise.
pub fn authorize_sender(
    route: TransferRoute,
    signer: &Pubkey,
    treasury: &Pubkey,
    from_owner: &Pubkey,
) -> Result<()> {
    let expected = match route {
        TransferRoute::TreasuryOutbound | TransferRoute::TreasurySelf => treasury,
        TransferRoute::TreasuryInbound | TransferRoute::Direct => from_owner,
    };
    require_keys_eq!(*signer, *expected, LockedTokenError::UnauthorizedSender);
    Ok(())
}

/// Run `raw_transfer` under the treasury gate.
///
/// For outbound transfers the settlement at `now` is stored before the
/// unlocked check, so it survives a rejected transfer.
pub fn gated_transfer<F>(
    state: &mut AccrualState,
    route: TransferRoute,
    amount: u64,
    from_balance: u64,
    now: i64,
    raw_transfer: F,
) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    if route == TransferRoute::TreasuryOutbound {
        accrual::commit_settlement(state, now);
        require!(
            amount <= state.unlocked_pool,
            LockedTokenError::InsufficientUnlocked
        );
    }
    require!(amount <= from_balance, LockedTokenError::InsufficientBalance);

    let mut staged = *state;
    match route {
        TransferRoute::TreasurySelf => return Ok(()),
        TransferRoute::TreasuryOutbound => accrual::debit(&mut staged, amount, now)?,
        TransferRoute::TreasuryInbound => {
            accrual::credit(&mut staged, amount, now);
        }
        TransferRoute::Direct => {}
    }

    raw_transfer()?;
    *state = staged;
    Ok(())
}
