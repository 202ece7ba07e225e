//! Friends page: invite link and referral rewards.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::config::{COPY_RESET_MS, INVITE_LINK, REFERRAL_REWARD_COINS};
use crate::services::telegram::HostBridge;
use crate::state::theme::use_theme;
use crate::state::toast::use_toast;

const SHARE_CHANNELS: [&str; 3] = ["Telegram Contacts", "Stories", "More Apps"];

#[component]
pub fn InvitePage() -> impl IntoView {
    let toasts = use_toast();
    let theme = use_theme();
    let host = expect_context::<Arc<dyn HostBridge>>();
    let button_style = theme.button_style();

    let copied = RwSignal::new(false);

    let copy_link = move |_| {
        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            match JsFuture::from(clipboard.write_text(INVITE_LINK)).await {
                Ok(_) => {
                    copied.set(true);
                    TimeoutFuture::new(COPY_RESET_MS).await;
                    copied.set(false);
                }
                Err(e) => {
                    log::warn!("clipboard write failed: {:?}", e);
                    toasts.notify("Copy Failed", "Select and copy the link manually");
                }
            }
        });
    };

    view! {
        <div class="page invite-page">
            <h1>"Invite Friends"</h1>
            <p class="invite-blurb">
                {format!(
                    "Earn {} coins for every friend who joins with your link",
                    REFERRAL_REWARD_COINS,
                )}
            </p>

            <div class="invite-card">
                <span class="invite-link">{INVITE_LINK}</span>
                <button class="copy" style=button_style.clone() on:click=copy_link>
                    {move || if copied.get() { "Copied!" } else { "Copy Link" }}
                </button>
            </div>

            <div class="share-options">
                {SHARE_CHANNELS
                    .into_iter()
                    .map(|channel| {
                        let host = host.clone();
                        view! {
                            <button
                                class="share-option"
                                on:click=move |_| {
                                    host.show_alert(
                                        &format!("Sharing via {} is coming soon", channel),
                                    );
                                }
                            >
                                {channel}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
