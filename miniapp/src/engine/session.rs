//! Session/reward state machine.
//!
//! Tracks authentication phase, level/experience/balance, shake-triggered
//! reward accrual and the periodic mined-reward event. All gameplay
//! mutations are gated on [`AuthPhase::Authenticated`].

use crate::config::{
    EXPERIENCE_MAX, MINED_REWARD_MAX, MINED_REWARD_MIN, ROTATION_STEP_DEG, SHAKE_DEBOUNCE_MS,
    SHAKE_EXPERIENCE, SHAKE_REWARD_MAX, SHAKE_REWARD_MIN, SHAKE_THRESHOLD,
};

/// Authentication lifecycle. `AuthFailed` is terminal for the session:
/// there is no retry, the user reloads the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
    AuthFailed,
}

/// Identity established by backend verification of the Telegram init-data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub telegram_user_id: i64,
    pub username: String,
}

/// Client-side game progress. `experience` stays in `[0, EXPERIENCE_MAX]`;
/// hitting the cap increments `level` and resets experience in the same step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProgress {
    pub level: u32,
    pub experience: u32,
    pub rewards_balance: u64,
    pub combo_count: u32,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            rewards_balance: 0,
            combo_count: 0,
        }
    }
}

/// One accelerometer reading (including gravity).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MotionSample {
    fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }
}

/// A mined reward awaiting an explicit claim. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinedRewardEvent {
    pub amount: u64,
    pub timestamp_ms: u64,
}

/// Result of feeding a motion sample into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShakeOutcome {
    /// Below threshold, inside the debounce window, or gameplay is gated.
    Ignored,
    Accepted {
        reward: u64,
        experience_gained: u32,
        leveled_up: bool,
    },
}

impl ShakeOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, ShakeOutcome::Accepted { .. })
    }
}

/// The session/reward engine. Owned by the Home view's context; nothing else
/// writes gameplay state.
#[derive(Debug, Clone)]
pub struct SessionEngine {
    phase: AuthPhase,
    session: Option<UserSession>,
    progress: GameProgress,
    rotation_deg: u32,
    last_sample: MotionSample,
    last_accepted_ms: Option<u64>,
    pending_reward: Option<MinedRewardEvent>,
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionEngine {
    pub fn new() -> Self {
        Self {
            phase: AuthPhase::Unauthenticated,
            session: None,
            progress: GameProgress::default(),
            rotation_deg: 0,
            last_sample: MotionSample::default(),
            last_accepted_ms: None,
            pending_reward: None,
        }
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn rotation_deg(&self) -> u32 {
        self.rotation_deg
    }

    pub fn pending_reward(&self) -> Option<&MinedRewardEvent> {
        self.pending_reward.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// `Unauthenticated -> Authenticating`. A no-op from any other phase.
    pub fn begin_auth(&mut self) {
        if self.phase == AuthPhase::Unauthenticated {
            self.phase = AuthPhase::Authenticating;
        }
    }

    pub fn auth_succeeded(&mut self, session: UserSession) {
        self.session = Some(session);
        self.phase = AuthPhase::Authenticated;
    }

    pub fn auth_failed(&mut self) {
        self.session = None;
        self.phase = AuthPhase::AuthFailed;
    }

    /// Feed one accelerometer sample. Movement is the absolute delta of the
    /// axis sum against the previous sample; a shake is accepted above
    /// [`SHAKE_THRESHOLD`] outside the [`SHAKE_DEBOUNCE_MS`] window.
    ///
    /// `roll` is a uniform random in `[0, 1)` supplied by the caller so the
    /// engine stays deterministic under test.
    pub fn register_shake(
        &mut self,
        sample: MotionSample,
        now_ms: u64,
        roll: f64,
    ) -> ShakeOutcome {
        let movement = (sample.sum() - self.last_sample.sum()).abs();
        self.last_sample = sample;

        if !self.is_authenticated() || movement <= SHAKE_THRESHOLD {
            return ShakeOutcome::Ignored;
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < SHAKE_DEBOUNCE_MS {
                return ShakeOutcome::Ignored;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        self.accept_shake(roll)
    }

    /// Desktop fallback: tapping the card counts as a shake without the
    /// accelerometer threshold, but still only once authenticated.
    pub fn manual_shake(&mut self, roll: f64) -> ShakeOutcome {
        if !self.is_authenticated() {
            return ShakeOutcome::Ignored;
        }
        self.accept_shake(roll)
    }

    fn accept_shake(&mut self, roll: f64) -> ShakeOutcome {
        let reward = bounded_random(roll, SHAKE_REWARD_MIN, SHAKE_REWARD_MAX);
        self.rotation_deg = self.rotation_deg.wrapping_add(ROTATION_STEP_DEG);
        self.progress.rewards_balance += reward;
        self.progress.combo_count += 1;
        self.progress.experience =
            (self.progress.experience + SHAKE_EXPERIENCE).min(EXPERIENCE_MAX);
        let leveled_up = self.level_up_check();
        ShakeOutcome::Accepted {
            reward,
            experience_gained: SHAKE_EXPERIENCE,
            leveled_up,
        }
    }

    /// Runs after every experience mutation: at the cap, bump the level and
    /// reset experience in the same logical step.
    fn level_up_check(&mut self) -> bool {
        if self.progress.experience >= EXPERIENCE_MAX {
            self.progress.level += 1;
            self.progress.experience = 0;
            true
        } else {
            false
        }
    }

    /// Credit rewards from outside the shake path (task completion,
    /// referrals). Rejected while unauthenticated.
    pub fn credit(&mut self, amount: u64) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.progress.rewards_balance += amount;
        true
    }

    /// Install the mined-reward event raised by the mining timer. Refused if
    /// one is already pending, keeping at most one outstanding event.
    pub fn set_mined_reward(&mut self, roll: f64, now_ms: u64) -> Option<&MinedRewardEvent> {
        if !self.is_authenticated() || self.pending_reward.is_some() {
            return None;
        }
        self.pending_reward = Some(MinedRewardEvent {
            amount: bounded_random(roll, MINED_REWARD_MIN, MINED_REWARD_MAX),
            timestamp_ms: now_ms,
        });
        self.pending_reward.as_ref()
    }

    /// Transfer the pending mined amount into the balance and clear the
    /// event. Returns the claimed amount, or `None` when nothing is pending.
    pub fn claim_mined_reward(&mut self) -> Option<u64> {
        let event = self.pending_reward.take()?;
        self.progress.rewards_balance += event.amount;
        Some(event.amount)
    }
}

/// Map a uniform `roll` in `[0, 1)` onto the inclusive integer range
/// `[min, max]`.
fn bounded_random(roll: f64, min: u64, max: u64) -> u64 {
    let span = (max - min + 1) as f64;
    min + (roll.clamp(0.0, 0.999_999) * span) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MINED_REWARD_MAX, MINED_REWARD_MIN};

    fn authenticated_engine() -> SessionEngine {
        let mut engine = SessionEngine::new();
        engine.begin_auth();
        engine.auth_succeeded(UserSession {
            telegram_user_id: 42,
            username: "monchen".into(),
        });
        engine
    }

    // Sum delta of 20 over the zeroed baseline clears the threshold.
    fn hard_shake() -> MotionSample {
        MotionSample {
            x: 20.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[test]
    fn auth_failure_is_terminal() {
        let mut engine = SessionEngine::new();
        engine.begin_auth();
        assert_eq!(*engine.phase(), AuthPhase::Authenticating);
        engine.auth_failed();
        assert_eq!(*engine.phase(), AuthPhase::AuthFailed);
        // begin_auth does not restart a failed session
        engine.begin_auth();
        assert_eq!(*engine.phase(), AuthPhase::AuthFailed);
    }

    #[test]
    fn unauthenticated_shake_is_a_no_op() {
        let mut engine = SessionEngine::new();
        let sample = hard_shake();
        let outcome = engine.register_shake(sample, 1_000, 0.5);
        assert_eq!(outcome, ShakeOutcome::Ignored);
        assert_eq!(engine.progress().rewards_balance, 0);
        assert_eq!(engine.progress().experience, 0);
        assert_eq!(engine.rotation_deg(), 0);
    }

    #[test]
    fn movement_at_or_below_threshold_is_ignored() {
        let mut engine = authenticated_engine();
        let outcome = engine.register_shake(
            MotionSample {
                x: SHAKE_THRESHOLD,
                y: 0.0,
                z: 0.0,
            },
            1_000,
            0.5,
        );
        assert_eq!(outcome, ShakeOutcome::Ignored);
        assert_eq!(engine.progress().rewards_balance, 0);
    }

    #[test]
    fn accepted_shake_rewards_and_rotates() {
        let mut engine = authenticated_engine();
        let sample = hard_shake();
        let outcome = engine.register_shake(sample, 1_000, 0.0);
        assert_eq!(
            outcome,
            ShakeOutcome::Accepted {
                reward: SHAKE_REWARD_MIN,
                experience_gained: SHAKE_EXPERIENCE,
                leveled_up: false,
            }
        );
        assert_eq!(engine.progress().rewards_balance, SHAKE_REWARD_MIN);
        assert_eq!(engine.progress().experience, SHAKE_EXPERIENCE);
        assert_eq!(engine.progress().combo_count, 1);
        assert_eq!(engine.rotation_deg(), ROTATION_STEP_DEG);
    }

    #[test]
    fn shake_reward_is_bounded() {
        for roll in [0.0, 0.25, 0.5, 0.999] {
            let mut engine = authenticated_engine();
            let sample = hard_shake();
            match engine.register_shake(sample, 1_000, roll) {
                ShakeOutcome::Accepted { reward, .. } => {
                    assert!((SHAKE_REWARD_MIN..=SHAKE_REWARD_MAX).contains(&reward));
                }
                other => panic!("expected acceptance, got {:?}", other),
            }
        }
    }

    #[test]
    fn debounce_rejects_shakes_within_100ms() {
        let mut engine = authenticated_engine();

        // Baseline then spike alternately so every sample has movement > threshold.
        let spike = MotionSample {
            x: 40.0,
            y: 0.0,
            z: 0.0,
        };
        let rest = MotionSample::default();

        assert!(engine.register_shake(spike, 1_000, 0.5).accepted());
        // 50ms later: over threshold again, but inside the debounce window.
        assert_eq!(engine.register_shake(rest, 1_050, 0.5), ShakeOutcome::Ignored);
        // 100ms after the accepted shake: allowed again.
        assert!(engine.register_shake(spike, 1_100, 0.5).accepted());
    }

    #[test]
    fn experience_caps_and_levels_up_in_the_same_step() {
        let mut engine = authenticated_engine();
        let shakes_to_level = (EXPERIENCE_MAX / SHAKE_EXPERIENCE) as u64;

        let spike = MotionSample {
            x: 40.0,
            y: 0.0,
            z: 0.0,
        };
        let rest = MotionSample::default();

        let mut leveled = false;
        for i in 0..shakes_to_level {
            let sample = if i % 2 == 0 { spike } else { rest };
            let now = 1_000 + i * 200;
            match engine.register_shake(sample, now, 0.5) {
                ShakeOutcome::Accepted { leveled_up, .. } => leveled = leveled_up,
                other => panic!("shake {} rejected: {:?}", i, other),
            }
        }
        assert!(leveled, "final shake should trigger the level-up");
        assert_eq!(engine.progress().level, 2);
        assert_eq!(engine.progress().experience, 0);
    }

    #[test]
    fn at_most_one_pending_mined_reward() {
        let mut engine = authenticated_engine();
        assert!(engine.set_mined_reward(0.5, 1_000).is_some());
        assert!(engine.set_mined_reward(0.5, 2_000).is_none());
        let amount = engine.pending_reward().map(|e| e.amount);
        assert!(amount.is_some());
    }

    #[test]
    fn mined_reward_amount_in_documented_range() {
        let mut engine = authenticated_engine();
        let event = engine.set_mined_reward(0.999, 1_000).cloned();
        let amount = event.map(|e| e.amount).unwrap_or_default();
        assert!((MINED_REWARD_MIN..=MINED_REWARD_MAX).contains(&amount));
    }

    // A 1000-wide draw starting at 500 tops out at 1499 inclusive.
    #[test]
    fn mined_reward_bounds_are_hit_exactly() {
        let mut engine = authenticated_engine();
        let event = engine.set_mined_reward(0.999_999, 1_000).cloned();
        assert_eq!(event.map(|e| e.amount), Some(MINED_REWARD_MAX));
        assert_eq!(MINED_REWARD_MAX - MINED_REWARD_MIN + 1, 1_000);

        let mut engine = authenticated_engine();
        let event = engine.set_mined_reward(0.0, 1_000).cloned();
        assert_eq!(event.map(|e| e.amount), Some(MINED_REWARD_MIN));
    }

    #[test]
    fn claim_moves_amount_into_balance_and_clears_event() {
        let mut engine = authenticated_engine();
        engine.set_mined_reward(0.0, 1_000);
        let claimed = engine.claim_mined_reward();
        assert_eq!(claimed, Some(MINED_REWARD_MIN));
        assert_eq!(engine.progress().rewards_balance, MINED_REWARD_MIN);
        assert!(engine.pending_reward().is_none());
    }

    #[test]
    fn claim_without_pending_event_is_a_no_op() {
        let mut engine = authenticated_engine();
        assert_eq!(engine.claim_mined_reward(), None);
        assert_eq!(engine.progress().rewards_balance, 0);
    }

    #[test]
    fn credit_requires_authentication() {
        let mut engine = SessionEngine::new();
        assert!(!engine.credit(50));
        let mut engine = authenticated_engine();
        assert!(engine.credit(50));
        assert_eq!(engine.progress().rewards_balance, 50);
    }
}
