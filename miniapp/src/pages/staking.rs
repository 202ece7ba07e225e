//! Staking page: pool stats, wallet connection and the stake form.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::utils::truncate_address;

use crate::config::{MIN_STAKE_TON, STAKE_LOCK_DAYS, SUCCESS_OVERLAY_MS};
use crate::engine::staking::{apr, can_stake, estimated_rewards, StakePosition, StakeStatus};
use crate::services::telegram::HostBridge;
use crate::services::wallet::{send_transaction, stake_transfer};
use crate::state::theme::use_theme;
use crate::state::toast::use_toast;
use crate::state::wallet::{
    spawn_connect, spawn_disconnect, spawn_refresh_balance, use_wallet_context,
};
use crate::utils::format::{format_number, format_ton};
use crate::utils::now_secs;

/// Digits plus at most one decimal point; everything else is dropped at the
/// input boundary.
fn is_decimal_input(value: &str) -> bool {
    let mut seen_dot = false;
    value.chars().all(|c| {
        if c == '.' {
            !std::mem::replace(&mut seen_dot, true)
        } else {
            c.is_ascii_digit()
        }
    })
}

#[component]
pub fn StakingPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let toasts = use_toast();
    let theme = use_theme();
    let host = expect_context::<Arc<dyn HostBridge>>();
    let button_style = theme.button_style();

    let amount_input = RwSignal::new(String::new());
    let lock_days = RwSignal::new(STAKE_LOCK_DAYS[0]);
    let submitting = RwSignal::new(false);
    let show_success = RwSignal::new(false);

    let parsed_amount =
        move || amount_input.with(|s| s.parse::<f64>().ok().filter(|a| *a > 0.0));
    let estimate = move || {
        parsed_amount()
            .map(|amount| estimated_rewards(amount, lock_days.get()))
            .unwrap_or(0.0)
    };
    let submit_enabled = move || {
        can_stake(
            parsed_amount(),
            wallet.balance_ton.get(),
            wallet.is_connected(),
            submitting.get(),
        )
    };

    let on_amount = move |ev| {
        let value = event_target_value(&ev);
        if value.is_empty() || is_decimal_input(&value) {
            amount_input.set(value);
        }
    };
    let set_max = move |_| {
        amount_input.set(wallet.balance_ton.get_untracked().to_string());
    };

    let on_submit = {
        let host = host.clone();
        move |_| {
            if !wallet.is_connected() {
                host.show_alert("Connect your wallet before staking.");
                return;
            }
            let Some(amount) = parsed_amount() else {
                return;
            };
            if !can_stake(
                Some(amount),
                wallet.balance_ton.get_untracked(),
                true,
                submitting.get_untracked(),
            ) {
                toasts.notify(
                    "Cannot Stake",
                    format!("Stake at least {} TON, up to your balance", MIN_STAKE_TON),
                );
                return;
            }

            submitting.set(true);
            let days = lock_days.get_untracked();
            let host = host.clone();
            spawn_local(async move {
                let descriptor = stake_transfer(amount, now_secs());
                match send_transaction(&descriptor).await {
                    Ok(()) => {
                        wallet.record_pending_stake(StakePosition::new(amount, days));
                        amount_input.set(String::new());
                        toasts.notify(
                            "Stake Submitted",
                            format!("{} TON locked for {} days", format_ton(amount), days),
                        );
                        // Settles the pending position once the on-chain
                        // balance reflects the transfer.
                        spawn_refresh_balance(wallet, true);
                        show_success.set(true);
                        TimeoutFuture::new(SUCCESS_OVERLAY_MS).await;
                        show_success.set(false);
                    }
                    Err(e) => {
                        log::warn!("stake transaction failed: {}", e);
                        toasts.notify("Transaction Failed", e.to_string());
                        host.show_alert("Transaction failed. Please try again.");
                    }
                }
                submitting.set(false);
            });
        }
    };

    let positions = move || {
        wallet
            .positions
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let submit_style = button_style.clone();

    view! {
        <div class="page staking-page">
            <h1>"Stake TON"</h1>

            <div class="pool-stats">
                <div class="stat-card">
                    <p class="stat-value">
                        {move || wallet.pool.with(|p| format_ton(p.total_staked))}
                    </p>
                    <p class="stat-label">"Total Staked"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-value">
                        {move || wallet.pool.with(|p| format_number(p.active_stakers as f64, 0))}
                    </p>
                    <p class="stat-label">"Active Stakers"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-value">
                        {move || wallet.pool.with(|p| format_ton(p.your_stake))}
                    </p>
                    <p class="stat-label">"Your Stake"</p>
                </div>
            </div>

            <Show when=move || !wallet.is_connected()>
                <button
                    class="primary connect"
                    style=button_style.clone()
                    on:click=move |_| spawn_connect(wallet, toasts)
                >
                    "Connect Wallet"
                </button>
            </Show>
            <Show when=move || wallet.is_connected()>
                <div class="wallet-row">
                    <span class="wallet-address">
                        {move || wallet.address().map(|a| truncate_address(&a)).unwrap_or_default()}
                    </span>
                    <span class="wallet-balance">
                        {move || format!("{} TON", format_ton(wallet.balance_ton.get()))}
                    </span>
                    <button class="link" on:click=move |_| spawn_disconnect(wallet, toasts)>
                        "Disconnect"
                    </button>
                </div>
            </Show>

            <div class="stake-form">
                <label for="stake-amount">"Amount (TON)"</label>
                <div class="amount-row">
                    <input
                        id="stake-amount"
                        type="text"
                        inputmode="decimal"
                        placeholder=format!("Min {}", MIN_STAKE_TON)
                        prop:value=amount_input
                        on:input=on_amount
                    />
                    <button class="max" on:click=set_max>"MAX"</button>
                </div>

                <div class="duration-row">
                    {STAKE_LOCK_DAYS
                        .into_iter()
                        .map(|days| {
                            view! {
                                <button
                                    class="duration"
                                    class:active=move || lock_days.get() == days
                                    on:click=move |_| lock_days.set(days)
                                >
                                    <span>{format!("{} days", days)}</span>
                                    <span class="apr">{format!("{:.2}% APR", apr(days))}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="estimate-row">
                    <span>"Estimated rewards"</span>
                    <span class="estimate">
                        {move || format!("{} TON", format_ton(estimate()))}
                    </span>
                </div>

                <button
                    class="primary"
                    style=submit_style.clone()
                    disabled=move || !submit_enabled()
                    on:click=on_submit
                >
                    {move || if submitting.get() { "Submitting..." } else { "Stake" }}
                </button>
            </div>

            <Show when=move || wallet.positions.with(|p| !p.is_empty())>
                <h2>"Your Positions"</h2>
                <div class="position-list">
                    <For
                        each=positions
                        key=|(i, position)| (*i, position.status)
                        children=move |(_, position)| {
                            let status = match position.status {
                                StakeStatus::Pending => "Pending",
                                StakeStatus::Confirmed => "Confirmed",
                            };
                            view! {
                                <div class="position-row">
                                    <span class="position-amount">
                                        {format!("{} TON", format_ton(position.principal))}
                                    </span>
                                    <span class="position-terms">
                                        {format!(
                                            "{} days at {:.2}% APR",
                                            position.lock_days,
                                            position.apr,
                                        )}
                                    </span>
                                    <span class="position-status">{status}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <Show when=move || show_success.get()>
                <div class="success-overlay">
                    <div class="success-box">
                        <p class="success-mark">"✓"</p>
                        <p>"Stake submitted!"</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_input_filter() {
        assert!(is_decimal_input("100"));
        assert!(is_decimal_input("100.5"));
        assert!(is_decimal_input("."));
        assert!(!is_decimal_input("100.5.5"));
        assert!(!is_decimal_input("1e9"));
        assert!(!is_decimal_input("-5"));
    }
}
