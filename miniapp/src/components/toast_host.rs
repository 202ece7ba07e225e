//! Toast rendering.

use leptos::prelude::*;

use crate::state::toast::use_toast;

/// Fixed stack rendering the toast queue in arrival order. Each toast can be
/// dismissed early; otherwise the queue's expiry timer removes it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <div class="toast-body">
                                <p class="toast-title">{toast.title.clone()}</p>
                                <p class="toast-description">{toast.description.clone()}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
