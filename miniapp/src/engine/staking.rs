//! Staking math and position bookkeeping.
//!
//! The APR scales with the lock duration; estimated rewards are a pure
//! function of `(principal, lock_days)` and are recomputed on every input
//! change. Positions are two-phase: `Pending` on submission, `Confirmed`
//! once the post-submission balance refetch reconciles.

use crate::config::{BASE_APR, MIN_STAKE_TON, STAKE_LOCK_DAYS};

/// Annualized percentage rate for a lock duration:
/// `BASE_APR * (1 + (days / 30) * 0.1)`.
pub fn apr(lock_days: u32) -> f64 {
    let modifier = lock_days as f64 / 30.0;
    BASE_APR * (1.0 + modifier * 0.1)
}

/// Estimated yield for `principal` TON locked for `lock_days`:
/// `principal * apr * days / (365 * 100)`.
pub fn estimated_rewards(principal: f64, lock_days: u32) -> f64 {
    principal * apr(lock_days) * lock_days as f64 / (365.0 * 100.0)
}

/// Whether a stake submission would be accepted right now.
pub fn can_stake(amount: Option<f64>, wallet_balance: f64, connected: bool, in_flight: bool) -> bool {
    match amount {
        Some(amount) if connected && !in_flight => {
            amount >= MIN_STAKE_TON && amount <= wallet_balance
        }
        _ => false,
    }
}

/// Settlement status of a position. Submission is optimistic; confirmation
/// happens when the on-chain balance reflects the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeStatus {
    Pending,
    Confirmed,
}

/// One stake. Never mutated after creation except for settlement status
/// (there is no unstaking flow).
#[derive(Debug, Clone, PartialEq)]
pub struct StakePosition {
    pub principal: f64,
    pub lock_days: u32,
    pub apr: f64,
    pub estimated_reward: f64,
    pub status: StakeStatus,
}

impl StakePosition {
    pub fn new(principal: f64, lock_days: u32) -> Self {
        Self {
            principal,
            lock_days,
            apr: apr(lock_days),
            estimated_reward: estimated_rewards(principal, lock_days),
            status: StakeStatus::Pending,
        }
    }

    pub fn confirm(&mut self) {
        self.status = StakeStatus::Confirmed;
    }
}

/// Pool statistics shown on the staking page. Totals are seeded client-side
/// and bumped as the user stakes; the authoritative numbers live on-chain.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolInfo {
    pub total_staked: f64,
    pub active_stakers: u32,
    pub your_stake: f64,
}

impl Default for PoolInfo {
    fn default() -> Self {
        Self {
            total_staked: 2_450_000.0,
            active_stakers: 1_250,
            your_stake: 0.0,
        }
    }
}

impl PoolInfo {
    pub fn record_stake(&mut self, amount: f64) {
        self.your_stake += amount;
        self.total_staked += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn apr_scales_with_lock_duration() {
        assert!(close(apr(30), 13.75));
        assert!(apr(7) < apr(30));
        assert!(apr(30) < apr(90));
    }

    #[test]
    fn estimated_rewards_matches_documented_example() {
        // 100 TON for 30 days at APR 13.75 -> ~1.13 TON
        assert!(close(estimated_rewards(100.0, 30), 1.13));
    }

    #[test]
    fn estimated_rewards_is_zero_for_zero_principal() {
        assert_eq!(estimated_rewards(0.0, 30), 0.0);
    }

    #[test]
    fn lock_days_options_are_the_documented_set() {
        assert_eq!(STAKE_LOCK_DAYS, [7, 30, 90]);
    }

    #[test]
    fn can_stake_enforces_bounds() {
        assert!(can_stake(Some(50.0), 100.0, true, false));
        // Below minimum
        assert!(!can_stake(Some(49.9), 100.0, true, false));
        // Over balance
        assert!(!can_stake(Some(150.0), 100.0, true, false));
        // Disconnected or mid-submission
        assert!(!can_stake(Some(50.0), 100.0, false, false));
        assert!(!can_stake(Some(50.0), 100.0, true, true));
        // Unparseable input
        assert!(!can_stake(None, 100.0, true, false));
    }

    #[test]
    fn positions_start_pending_and_confirm_once() {
        let mut pos = StakePosition::new(100.0, 30);
        assert_eq!(pos.status, StakeStatus::Pending);
        assert!(close(pos.apr, 13.75));
        assert!(close(pos.estimated_reward, 1.13));
        pos.confirm();
        assert_eq!(pos.status, StakeStatus::Confirmed);
    }

    #[test]
    fn pool_records_user_stakes() {
        let mut pool = PoolInfo::default();
        let before = pool.total_staked;
        pool.record_stake(100.0);
        assert_eq!(pool.your_stake, 100.0);
        assert_eq!(pool.total_staked, before + 100.0);
    }
}
