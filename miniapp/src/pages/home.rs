//! Home page: authentication, the shake game, and mined-reward claiming.

use std::sync::Arc;

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DeviceMotionEvent;

use crate::components::GameCard;
use crate::engine::session::{AuthPhase, MotionSample, ShakeOutcome, UserSession};
use crate::services::api;
use crate::services::telegram::{HostBridge, ImpactStyle};
use crate::state::session::{use_session, SessionContext};
use crate::state::theme::use_theme;
use crate::state::toast::{use_toast, ToastContext};
use crate::state::wallet::{spawn_connect, spawn_disconnect, use_wallet_context};
use shared::utils::{format_coins, truncate_address};

/// Verify the host's init-data with the backend and open the session. A
/// failure is terminal; the gameplay surface stays gated.
async fn authenticate(session: SessionContext, toasts: ToastContext, host: Arc<dyn HostBridge>) {
    session.begin_auth();

    let (Some(init_data), Some(user)) = (host.init_data(), host.user()) else {
        log::warn!("no init data from the host, gameplay stays locked");
        session.auth_failed();
        toasts.notify("Authentication Failed", "Open the app from Telegram to play.");
        return;
    };

    match api::verify_user(init_data, user).await {
        Ok(response) => {
            log::info!("authenticated as {}", response.user.username);
            session.auth_succeeded(UserSession {
                telegram_user_id: response.user.telegram_user_id,
                username: response.user.username,
            });
            session.schedule_mining_timer(toasts);
        }
        Err(e) => {
            log::error!("verification failed: {}", e);
            session.auth_failed();
            toasts.notify(
                "Authentication Failed",
                "Could not verify your session. Reload and try again.",
            );
        }
    }
}

/// Shared tail of the motion and tap shake paths: haptics plus the level-up
/// toast.
fn handle_shake_outcome(outcome: ShakeOutcome, toasts: ToastContext, host: &Arc<dyn HostBridge>) {
    if let ShakeOutcome::Accepted { leveled_up, .. } = outcome {
        host.haptic_impact(ImpactStyle::Medium);
        if leveled_up {
            host.haptic_impact(ImpactStyle::Heavy);
            toasts.notify("Level Up!", "Experience bar filled, on to the next level");
        }
    }
}

/// Keep the host's main button in step with the pending mined reward. Only
/// visibility changes here; the click handler is installed once at mount.
fn sync_main_button(host: &dyn HostBridge, reward_pending: bool) {
    if reward_pending {
        host.show_main_button("Claim Rewards");
    } else {
        host.hide_main_button();
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let wallet = use_wallet_context();
    let toasts = use_toast();
    let theme = use_theme();
    let host = expect_context::<Arc<dyn HostBridge>>();
    let button_style = theme.button_style();

    {
        let host = host.clone();
        spawn_local(async move {
            authenticate(session, toasts, host).await;
        });
    }

    // Accelerometer wiring. The pane stays mounted for the whole session,
    // so the listener is registered once and the closure leaked.
    {
        let host = host.clone();
        let listener = Closure::<dyn FnMut(DeviceMotionEvent)>::new(
            move |event: DeviceMotionEvent| {
                let Some(acceleration) = event.acceleration_including_gravity() else {
                    return;
                };
                let sample = MotionSample {
                    x: acceleration.x().unwrap_or_default(),
                    y: acceleration.y().unwrap_or_default(),
                    z: acceleration.z().unwrap_or_default(),
                };
                let outcome = session.register_shake(sample);
                handle_shake_outcome(outcome, toasts, &host);
            },
        );
        if let Some(window) = web_sys::window() {
            if window
                .add_event_listener_with_callback("devicemotion", listener.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("device motion unavailable, tap the card instead");
            }
        }
        listener.forget();
    }

    let claim = {
        let host = host.clone();
        move || {
            let Some(amount) = session.claim_mined_reward() else {
                return;
            };
            host.hide_main_button();
            host.haptic_impact(ImpactStyle::Light);
            toasts.notify("Rewards Claimed", format!("{} coins added to your balance", amount));

            // Report the claim; the local balance is already credited, so a
            // backend failure only logs.
            let level = session.progress().level;
            if let Some(init_data) = host.init_data() {
                spawn_local(async move {
                    if let Err(e) = api::claim_rewards(level, amount, init_data).await {
                        log::warn!("claim not recorded by the backend: {}", e);
                    }
                });
            }
            // Next mining cycle starts once the modal closes.
            session.schedule_mining_timer(toasts);
        }
    };

    // Mirror the claim action on the host's main button. The click handler
    // is registered exactly once; the effect only toggles visibility, since
    // the host accumulates every handler it is given.
    {
        let claim = claim.clone();
        let callback = Closure::<dyn FnMut()>::new(move || claim()).into_js_value();
        host.set_main_button_handler(callback.unchecked_ref());

        let host = host.clone();
        Effect::new(move |_| {
            sync_main_button(host.as_ref(), session.pending_reward().is_some());
        });
    }

    let on_tap = UnsyncCallback::new({
        let host = host.clone();
        move |_: ()| {
            let outcome = session.manual_shake();
            handle_shake_outcome(outcome, toasts, &host);
        }
    });

    let wallet_label = move || match wallet.address() {
        Some(address) => truncate_address(&address),
        None => "Connect Wallet".to_string(),
    };
    let modal_claim = claim.clone();
    let modal_style = button_style.clone();

    view! {
        <div class="page home-page">
            <header class="home-header">
                <span class="user-chip">
                    {move || session.username().unwrap_or_else(|| "Guest".into())}
                </span>
                <button
                    class="wallet-chip"
                    style=button_style.clone()
                    on:click=move |_| {
                        if wallet.is_connected() {
                            spawn_disconnect(wallet, toasts);
                        } else {
                            spawn_connect(wallet, toasts);
                        }
                    }
                >
                    {wallet_label}
                </button>
            </header>

            <Show when=move || session.phase() == AuthPhase::AuthFailed>
                <div class="auth-banner">
                    "Authentication failed. Reload the app to try again."
                </div>
            </Show>

            <section class="balance-panel">
                <p class="balance-value">
                    {move || format_coins(session.progress().rewards_balance)}
                </p>
                <p class="balance-label">"coins"</p>
                <p class="combo-count">
                    {move || format!("Combo x{}", session.progress().combo_count)}
                </p>
            </section>

            <GameCard on_tap=on_tap />
            <p class="shake-hint">"Shake your phone or tap the card to earn coins"</p>
            <button
                class="manual-shake"
                style=button_style.clone()
                on:click={
                    let host = host.clone();
                    move |_| {
                        let outcome = session.manual_shake();
                        handle_shake_outcome(outcome, toasts, &host);
                    }
                }
            >
                "Shake!"
            </button>

            <Show when=move || session.pending_reward().is_some()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <h2>"New Reward Mined!"</h2>
                        <p class="mined-amount">
                            {move || {
                                session
                                    .pending_reward()
                                    .map(|event| format!("{} coins", event.amount))
                                    .unwrap_or_default()
                            }}
                        </p>
                        <button
                            class="primary"
                            style=modal_style.clone()
                            on:click={
                                let claim = modal_claim.clone();
                                move |_| claim()
                            }
                        >
                            "Claim Rewards"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHost {
        calls: Mutex<Vec<&'static str>>,
    }

    impl HostBridge for RecordingHost {
        fn set_main_button_handler(&self, _on_click: &js_sys::Function) {
            self.calls.lock().unwrap().push("handler");
        }

        fn show_main_button(&self, _text: &str) {
            self.calls.lock().unwrap().push("show");
        }

        fn hide_main_button(&self) {
            self.calls.lock().unwrap().push("hide");
        }
    }

    #[test]
    fn reward_cycles_only_toggle_button_visibility() {
        let host = RecordingHost::default();
        // Several mine/claim cycles: the handler must never be re-registered
        // from the sync path.
        for pending in [true, false, true, false] {
            sync_main_button(&host, pending);
        }
        let calls = host.calls.lock().unwrap();
        assert_eq!(*calls, ["show", "hide", "show", "hide"]);
        assert!(!calls.contains(&"handler"));
    }
}
