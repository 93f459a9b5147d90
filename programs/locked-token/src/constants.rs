//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Length of one accrual period. Fixed-length, not a calendar month.
pub const DEFAULT_MONTH_DURATION: i64 = 30 * SECONDS_PER_DAY;

/// Max token name length in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Max token symbol length in bytes.
pub const MAX_SYMBOL_LEN: usize = 10;

pub const TOKEN_STATE_SEED: &[u8] = b"token_state";
pub const MINT_SEED: &[u8] = b"mint";
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";
