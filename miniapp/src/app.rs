//! Application root: context wiring and the tab shell.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{AppTab, NavBar, ToastHost};
use crate::pages::{HomePage, InvitePage, LeaderboardPage, StakingPage, TasksPage};
use crate::services::telegram::{detect_host, HostBridge};
use crate::state::session::provide_session_context;
use crate::state::theme::{provide_theme, Theme};
use crate::state::toast::provide_toast_context;
use crate::state::wallet::{init_wallet, provide_wallet_context};

fn pane_display(active: AppTab, tab: AppTab) -> &'static str {
    if active == tab {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[component]
pub fn App() -> impl IntoView {
    let host = detect_host();
    host.ready();
    host.expand();

    let theme = Theme::from_host(host.as_ref());
    provide_context::<Arc<dyn HostBridge>>(host);
    provide_theme(theme.clone());
    provide_toast_context();
    provide_session_context();
    let wallet = provide_wallet_context();
    init_wallet(wallet);

    let active = RwSignal::new(AppTab::Home);

    // Every pane stays mounted so the mining timer, task statuses and form
    // inputs survive tab switches; only visibility toggles.
    view! {
        <div class="app-shell" style=theme.container_style()>
            <main class="tab-panes">
                <div style=move || pane_display(active.get(), AppTab::Home)>
                    <HomePage />
                </div>
                <div style=move || pane_display(active.get(), AppTab::Earn)>
                    <TasksPage />
                </div>
                <div style=move || pane_display(active.get(), AppTab::Stake)>
                    <StakingPage />
                </div>
                <div style=move || pane_display(active.get(), AppTab::Leaderboard)>
                    <LeaderboardPage />
                </div>
                <div style=move || pane_display(active.get(), AppTab::Friends)>
                    <InvitePage />
                </div>
            </main>
            <NavBar active=active />
            <ToastHost />
        </div>
    }
}
