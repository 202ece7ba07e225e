//! Leaderboard page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::game::LeaderboardEntry;
use shared::utils::format_coins;

use crate::services::api;
use crate::state::session::use_session;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let session = use_session();
    let entries = RwSignal::new(Vec::<LeaderboardEntry>::new());

    // Fetched once on mount. The page degrades to the empty state if the
    // backend is unreachable, no toast.
    spawn_local(async move {
        match api::fetch_leaderboard().await {
            Ok(list) => entries.set(list),
            Err(e) => log::warn!("leaderboard unavailable: {}", e),
        }
    });

    let your_rank = move || {
        let name = session.username();
        entries.with(|list| {
            name.as_deref().and_then(|name| {
                list.iter()
                    .find(|entry| entry.username == name)
                    .map(|entry| entry.rank)
            })
        })
    };

    view! {
        <div class="page leaderboard-page">
            <h1>"Leaderboard"</h1>

            <div class="you-card">
                <p class="you-name">
                    {move || session.username().unwrap_or_else(|| "You".into())}
                </p>
                <p class="you-coins">
                    {move || format_coins(session.progress().rewards_balance)}
                </p>
                <p class="you-rank">
                    {move || {
                        your_rank()
                            .map(|rank| format!("#{}", rank))
                            .unwrap_or_else(|| "unranked".into())
                    }}
                </p>
            </div>

            <div class="ranking">
                <For
                    each=move || entries.get()
                    key=|entry| entry.rank
                    children=move |entry| {
                        view! {
                            <div class="rank-row">
                                <span class="rank">{format!("#{}", entry.rank)}</span>
                                <span class="rank-name">{entry.username.clone()}</span>
                                <span class="rank-coins">{format_coins(entry.coins)}</span>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || entries.with(|list| list.is_empty())>
                <p class="empty-state">"No rankings yet. Start shaking!"</p>
            </Show>
        </div>
    }
}
