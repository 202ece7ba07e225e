//! Bottom tab bar.

use leptos::prelude::*;

/// The five screens reachable from the tab bar. Every pane stays mounted;
/// switching tabs only toggles visibility, so game state survives navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Home,
    Earn,
    Stake,
    Leaderboard,
    Friends,
}

impl AppTab {
    pub const ALL: [AppTab; 5] = [
        AppTab::Home,
        AppTab::Earn,
        AppTab::Stake,
        AppTab::Leaderboard,
        AppTab::Friends,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Home => "Home",
            AppTab::Earn => "Earn",
            AppTab::Stake => "Stake",
            AppTab::Leaderboard => "Ranks",
            AppTab::Friends => "Friends",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppTab::Home => "🏠",
            AppTab::Earn => "🪙",
            AppTab::Stake => "💎",
            AppTab::Leaderboard => "🏆",
            AppTab::Friends => "👥",
        }
    }
}

#[component]
pub fn NavBar(active: RwSignal<AppTab>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {AppTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="nav-item"
                            class:active=move || active.get() == tab
                            on:click=move |_| active.set(tab)
                        >
                            <span class="nav-icon">{tab.icon()}</span>
                            <span class="nav-label">{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
