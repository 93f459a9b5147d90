//! Lazy monthly accrual for the treasury unlock pool.
//!
//! The pool is settled on demand rather than on a timer:
//! - months = floor((now - checkpoint) / month_duration), 0 if the clock went backwards
//! - pool = min(total_supply, pool + months * monthly_rate)
//! - checkpoint advances by whole months only; the sub-month remainder carries forward
//!
//! Every mutation settles first, then applies its own change. Settlement is
//! a pure function of elapsed time and is kept even when the mutation that
//! triggered it fails.

use anchor_lang::prelude::*;

use crate::error::LockedTokenError;
use crate::state::AccrualState;

/// Result of folding elapsed whole months into the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub unlocked_pool: u64,
    pub last_settlement_ts: i64,
    pub months: u64,
}

/// Pure accrual: what the pool and checkpoint would be if settled at `now`.
pub fn compute_accrued(state: &AccrualState, now: i64) -> Settlement {
    let months = whole_months(state.last_settlement_ts, now, state.month_duration);
    let accrued = (months as u128).saturating_mul(state.monthly_rate as u128);
    let unlocked_pool = clamp_to_supply(
        (state.unlocked_pool as u128).saturating_add(accrued),
        state.total_supply,
    );
    // checkpoint + months * month_duration <= now, so the sum fits in i64.
    let advance = (months as i128) * (state.month_duration as i128);
    let last_settlement_ts = (state.last_settlement_ts as i128 + advance) as i64;

    Settlement {
        unlocked_pool,
        last_settlement_ts,
        months,
    }
}

/// Unlocked amount as of `now`, without persisting anything.
pub fn view_unlocked(state: &AccrualState, now: i64) -> u64 {
    compute_accrued(state, now).unlocked_pool
}

/// Persist accrual up to `now`. Never fails.
pub fn commit_settlement(state: &mut AccrualState, now: i64) -> Settlement {
    let s = compute_accrued(state, now);
    state.unlocked_pool = s.unlocked_pool;
    state.last_settlement_ts = s.last_settlement_ts;
    s
}

/// Spend `amount` from the pool. The settlement is kept even on failure.
pub fn debit(state: &mut AccrualState, amount: u64, now: i64) -> Result<()> {
    commit_settlement(state, now);
    require!(
        amount <= state.unlocked_pool,
        LockedTokenError::InsufficientUnlocked
    );
    state.unlocked_pool -= amount;
    Ok(())
}

/// Tokens returned to the treasury were already vested once, so they go
/// straight back into the pool.
pub fn credit(state: &mut AccrualState, amount: u64, now: i64) -> Settlement {
    let settled = commit_settlement(state, now);
    state.unlocked_pool = add_clamped(state.unlocked_pool, amount, state.total_supply);
    settled
}

/// Switch the monthly rate. Whole months elapsed so far are settled at the
/// old rate; the new rate applies only to months completed afterwards.
pub fn change_rate(state: &mut AccrualState, new_rate: u64, now: i64) -> Settlement {
    let settled = commit_settlement(state, now);
    state.monthly_rate = new_rate;
    settled
}

/// Administrative top-up, independent of elapsed time.
pub fn emergency_unlock(state: &mut AccrualState, amount: u64, now: i64) -> Settlement {
    let settled = commit_settlement(state, now);
    state.unlocked_pool = add_clamped(state.unlocked_pool, amount, state.total_supply);
    settled
}

fn whole_months(checkpoint: i64, now: i64, month_duration: i64) -> u64 {
    if now <= checkpoint || month_duration <= 0 {
        return 0;
    }
    let elapsed = now as i128 - checkpoint as i128;
    u64::try_from(elapsed / month_duration as i128).unwrap_or(u64::MAX)
}

fn add_clamped(pool: u64, amount: u64, total_supply: u64) -> u64 {
    clamp_to_supply(pool as u128 + amount as u128, total_supply)
}

fn clamp_to_supply(value: u128, total_supply: u64) -> u64 {
    value.min(total_supply as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MONTH_DURATION, SECONDS_PER_DAY};

    const MONTH: i64 = DEFAULT_MONTH_DURATION;
    const DAY: i64 = SECONDS_PER_DAY;
    const T0: i64 = 1_700_000_000;

    fn genesis() -> AccrualState {
        AccrualState::genesis(800_000_000, 200_000_000, 10_000_000, MONTH, T0)
    }

    fn assert_err(res: Result<()>, expected: LockedTokenError) {
        let expected: anchor_lang::error::Error = expected.into();
        assert_eq!(res.unwrap_err(), expected);
    }

    #[test]
    fn initial_spend_is_gated_by_initial_unlock() {
        let mut st = genesis();
        assert_err(debit(&mut st, 200_000_001, T0), LockedTokenError::InsufficientUnlocked);
        assert_eq!(st.unlocked_pool, 200_000_000);

        debit(&mut st, 100_000_000, T0).unwrap();
        assert_eq!(st.unlocked_pool, 100_000_000);
    }

    #[test]
    fn accrues_one_rate_per_whole_month() {
        let mut st = genesis();
        debit(&mut st, 200_000_000, T0).unwrap();
        assert_eq!(st.unlocked_pool, 0);

        let t = T0 + 30 * DAY;
        assert_eq!(view_unlocked(&st, t), 10_000_000);
        assert_err(debit(&mut st, 10_000_001, t), LockedTokenError::InsufficientUnlocked);
        debit(&mut st, 10_000_000, t).unwrap();
        assert_eq!(st.unlocked_pool, 0);
        assert_eq!(st.last_settlement_ts, t);

        // 15 days past the checkpoint: nothing yet.
        assert_eq!(view_unlocked(&st, T0 + 45 * DAY), 0);
        assert_eq!(view_unlocked(&st, T0 + 60 * DAY), 10_000_000);
    }

    #[test]
    fn failed_debit_keeps_settlement() {
        let mut st = genesis();
        debit(&mut st, 200_000_000, T0).unwrap();

        let t = T0 + 2 * MONTH + 7 * DAY;
        assert_err(debit(&mut st, 20_000_001, t), LockedTokenError::InsufficientUnlocked);
        assert_eq!(st.unlocked_pool, 20_000_000);
        assert_eq!(st.last_settlement_ts, T0 + 2 * MONTH);
    }

    #[test]
    fn sub_month_remainder_carries_forward() {
        let mut st = genesis();
        let s = commit_settlement(&mut st, T0 + MONTH + 20 * DAY);
        assert_eq!(s.months, 1);
        assert_eq!(st.last_settlement_ts, T0 + MONTH);

        // Another 10 days completes the second month measured from genesis.
        assert_eq!(view_unlocked(&st, T0 + 2 * MONTH), 220_000_000);
    }

    #[test]
    fn settlement_is_idempotent_within_a_month() {
        let mut st = genesis();
        commit_settlement(&mut st, T0 + MONTH + DAY);
        let after_first = st;
        commit_settlement(&mut st, T0 + MONTH + 29 * DAY);
        assert_eq!(st, after_first);
    }

    #[test]
    fn clock_regression_never_retracts() {
        let mut st = genesis();
        commit_settlement(&mut st, T0 + 3 * MONTH);
        let settled = st;

        assert_eq!(view_unlocked(&st, T0), settled.unlocked_pool);
        let s = commit_settlement(&mut st, T0 - 5 * MONTH);
        assert_eq!(s.months, 0);
        assert_eq!(st, settled);
    }

    #[test]
    fn view_is_monotonic_without_mutations() {
        let st = genesis();
        let mut prev = 0;
        for day in 0..400 {
            let v = view_unlocked(&st, T0 + day * DAY);
            assert!(v >= prev, "day {}: {} < {}", day, v, prev);
            prev = v;
        }
    }

    #[test]
    fn checkpoint_moves_in_whole_months() {
        let mut st = genesis();
        let mut now = T0;
        let mut prev_checkpoint = st.last_settlement_ts;
        for step in [DAY, 31 * DAY, 17 * DAY, 95 * DAY, 3, 400 * DAY] {
            now += step;
            commit_settlement(&mut st, now);
            assert!(st.last_settlement_ts >= prev_checkpoint);
            assert_eq!((st.last_settlement_ts - T0) % MONTH, 0);
            assert!(st.last_settlement_ts <= now);
            prev_checkpoint = st.last_settlement_ts;
        }
    }

    #[test]
    fn debit_then_credit_restores_pool() {
        let mut st = genesis();
        debit(&mut st, 123_456, T0 + DAY).unwrap();
        credit(&mut st, 123_456, T0 + DAY);
        assert_eq!(st.unlocked_pool, 200_000_000);
    }

    #[test]
    fn rate_change_is_not_retroactive() {
        let mut st = genesis();
        debit(&mut st, 200_000_000, T0).unwrap();

        // Half a month under the old rate, then switch.
        change_rate(&mut st, 20_000_000, T0 + 15 * DAY);
        assert_eq!(st.monthly_rate, 20_000_000);
        assert_eq!(st.last_settlement_ts, T0);
        assert_eq!(view_unlocked(&st, T0 + 15 * DAY), 0);
        assert_eq!(view_unlocked(&st, T0 + 30 * DAY), 20_000_000);
    }

    #[test]
    fn rate_change_flushes_old_rate_first() {
        let mut st = genesis();
        debit(&mut st, 200_000_000, T0).unwrap();

        change_rate(&mut st, 20_000_000, T0 + 2 * MONTH + DAY);
        assert_eq!(st.unlocked_pool, 20_000_000);
        assert_eq!(st.last_settlement_ts, T0 + 2 * MONTH);
        assert_eq!(view_unlocked(&st, T0 + 3 * MONTH), 40_000_000);
    }

    #[test]
    fn zero_rate_freezes_schedule() {
        let mut st = genesis();
        change_rate(&mut st, 0, T0);
        assert_eq!(view_unlocked(&st, T0 + 50 * MONTH), 200_000_000);
    }

    #[test]
    fn emergency_unlock_is_immediate_and_capped() {
        let mut st = genesis();
        debit(&mut st, 200_000_000, T0).unwrap();
        emergency_unlock(&mut st, 10, T0 + 1);
        assert_eq!(st.unlocked_pool, 10);
        assert_err(debit(&mut st, 11, T0 + 2), LockedTokenError::InsufficientUnlocked);

        emergency_unlock(&mut st, u64::MAX, T0 + 3);
        assert_eq!(st.unlocked_pool, 800_000_000);
    }

    #[test]
    fn credit_is_capped_at_supply() {
        let mut st = genesis();
        credit(&mut st, 700_000_000, T0);
        assert_eq!(st.unlocked_pool, 800_000_000);
    }

    #[test]
    fn pool_clamps_at_total_supply() {
        let mut st = genesis();
        let far = T0 + 10_000 * MONTH;
        assert_eq!(view_unlocked(&st, far), 800_000_000);
        commit_settlement(&mut st, far);
        assert_eq!(st.unlocked_pool, 800_000_000);
        assert_eq!(st.last_settlement_ts, far);
    }

    #[test]
    fn extreme_rate_does_not_overflow() {
        let mut st = AccrualState::genesis(u64::MAX, 0, u64::MAX, 1, 0);
        assert_eq!(view_unlocked(&st, i64::MAX), u64::MAX);
        commit_settlement(&mut st, i64::MAX);
        assert_eq!(st.last_settlement_ts, i64::MAX);
    }

    #[test]
    fn multi_month_unlock_sequence() {
        // 1B supply, 200M initial, 13.3M/month.
        let mut st = AccrualState::genesis(1_000_000_000, 200_000_000, 13_300_000, MONTH, T0);
        debit(&mut st, 100_000_000, T0).unwrap();

        let t = T0 + 2 * MONTH;
        assert_eq!(view_unlocked(&st, t), 126_600_000);
        debit(&mut st, 126_600_000, t).unwrap();
        emergency_unlock(&mut st, 10, t);
        debit(&mut st, 10, t).unwrap();
        credit(&mut st, 100_000_000, t);
        debit(&mut st, 50_000_000, t).unwrap();
        assert_eq!(st.unlocked_pool, 50_000_000);

        let t = t + 6 * MONTH;
        assert_eq!(view_unlocked(&st, t), 129_800_000);
    }
}
