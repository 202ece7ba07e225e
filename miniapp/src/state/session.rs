//! Session/game state management.
//!
//! Wraps [`SessionEngine`] in a signal and owns the mining-timer lifecycle.
//! All gameplay writes go through this context; pages only read.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::config::MINING_INTERVAL_MS;
use crate::engine::session::{
    AuthPhase, GameProgress, MinedRewardEvent, MotionSample, SessionEngine, ShakeOutcome,
    UserSession,
};
use crate::state::toast::ToastContext;
use crate::utils::{now_ms, random_roll};

#[derive(Clone, Copy)]
pub struct SessionContext {
    engine: RwSignal<SessionEngine>,
    /// Bumped to invalidate any mining timer already scheduled; a fired
    /// timer whose generation is stale does nothing.
    timer_generation: RwSignal<u64>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            engine: RwSignal::new(SessionEngine::new()),
            timer_generation: RwSignal::new(0),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.engine.with(|e| e.phase().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.engine.with(|e| e.is_authenticated())
    }

    pub fn progress(&self) -> GameProgress {
        self.engine.with(|e| e.progress().clone())
    }

    pub fn rotation_deg(&self) -> u32 {
        self.engine.with(|e| e.rotation_deg())
    }

    pub fn pending_reward(&self) -> Option<MinedRewardEvent> {
        self.engine.with(|e| e.pending_reward().cloned())
    }

    pub fn username(&self) -> Option<String> {
        self.engine.with(|e| e.session().map(|s| s.username.clone()))
    }

    pub fn begin_auth(&self) {
        self.engine.update(|e| e.begin_auth());
    }

    pub fn auth_succeeded(&self, session: UserSession) {
        self.engine.update(|e| e.auth_succeeded(session));
    }

    pub fn auth_failed(&self) {
        self.engine.update(|e| e.auth_failed());
    }

    /// Feed a device-motion sample, timing and randomness from the host.
    pub fn register_shake(&self, sample: MotionSample) -> ShakeOutcome {
        self.engine
            .try_update(|e| e.register_shake(sample, now_ms(), random_roll()))
            .unwrap_or(ShakeOutcome::Ignored)
    }

    /// Desktop fallback shake (tap on the card).
    pub fn manual_shake(&self) -> ShakeOutcome {
        self.engine
            .try_update(|e| e.manual_shake(random_roll()))
            .unwrap_or(ShakeOutcome::Ignored)
    }

    pub fn credit(&self, amount: u64) -> bool {
        self.engine.try_update(|e| e.credit(amount)).unwrap_or(false)
    }

    pub fn claim_mined_reward(&self) -> Option<u64> {
        self.engine.try_update(|e| e.claim_mined_reward()).flatten()
    }

    /// Schedule the one-shot mining timer. Called once on authentication and
    /// again each time the reward modal closes. Scheduling bumps the
    /// generation, so an earlier timer still sleeping is invalidated and the
    /// latest schedule is the only one that can fire.
    pub fn schedule_mining_timer(&self, toasts: ToastContext) {
        let engine = self.engine;
        let generation_signal = self.timer_generation;
        let generation = generation_signal
            .try_update(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default();

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(MINING_INTERVAL_MS).await;
            if generation_signal.get_untracked() != generation {
                // Cancelled while we slept.
                return;
            }
            let mined = engine
                .try_update(|e| e.set_mined_reward(random_roll(), now_ms()).cloned())
                .flatten();
            if let Some(event) = mined {
                log::info!("mined reward of {} ready to claim", event.amount);
                toasts.notify(
                    "New Reward Mined!",
                    format!("{} tokens awaiting claim", event.amount),
                );
            }
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
