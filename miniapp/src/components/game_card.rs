//! The shakeable game card.

use leptos::callback::{Callable, UnsyncCallback};
use leptos::prelude::*;

use crate::config::EXPERIENCE_MAX;
use crate::state::session::use_session;

/// Card with the level badge and experience bar. Rotates by the engine's
/// accumulated angle; tapping it is the desktop fallback for a shake.
#[component]
pub fn GameCard(on_tap: UnsyncCallback<()>) -> impl IntoView {
    let session = use_session();

    let rotation_style = move || {
        format!(
            "transform: rotate({}deg); transition: transform 0.3s ease;",
            session.rotation_deg()
        )
    };
    let experience = move || session.progress().experience.min(EXPERIENCE_MAX);

    view! {
        <div class="game-card" style=rotation_style on:click=move |_| on_tap.run(())>
            <div class="level-badge">{move || format!("LVL {}", session.progress().level)}</div>
            <div class="card-face">"🪙"</div>
            <div class="exp-bar">
                <div
                    class="exp-fill"
                    style=move || format!("width: {}%;", experience() * 100 / EXPERIENCE_MAX)
                ></div>
            </div>
            <div class="exp-label">
                {move || format!("EXP {} / {}", experience(), EXPERIENCE_MAX)}
            </div>
        </div>
    }
}
