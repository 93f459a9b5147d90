use anchor_lang::prelude::*;

/// Treasury vesting bookkeeping. Mutated only through `utils::accrual`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccrualState {
    /// Entitlement counter, independent of the vault's actual balance.
    /// Always within `[0, total_supply]`.
    pub unlocked_pool: u64,
    /// Settlement checkpoint (Unix seconds). Moves forward in whole
    /// `month_duration` steps only.
    pub last_settlement_ts: i64,
    /// Amount added to the pool per whole elapsed month.
    pub monthly_rate: u64,
    /// Fixed at genesis.
    pub total_supply: u64,
    /// Accrual period length in seconds.
    pub month_duration: i64,
}

impl AccrualState {
    pub const SIZE: usize =
        8 + // unlocked_pool
        8 + // last_settlement_ts
        8 + // monthly_rate
        8 + // total_supply
        8;  // month_duration

    pub fn genesis(
        total_supply: u64,
        initial_unlock: u64,
        monthly_rate: u64,
        month_duration: i64,
        genesis_ts: i64,
    ) -> Self {
        Self {
            unlocked_pool: initial_unlock.min(total_supply),
            last_settlement_ts: genesis_ts,
            monthly_rate,
            total_supply,
            month_duration,
        }
    }
}
