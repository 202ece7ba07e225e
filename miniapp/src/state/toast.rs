//! Toast state management.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::config::TOAST_DEFAULT_DURATION_MS;
use crate::engine::toast::{Toast, ToastId, ToastQueue};

/// Process-wide toast context, provided once at the application root.
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    /// Queue a toast with the default duration and schedule its expiry.
    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.notify_with_duration(title, description, TOAST_DEFAULT_DURATION_MS)
    }

    pub fn notify_with_duration(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_ms: u32,
    ) -> ToastId {
        let (title, description) = (title.into(), description.into());
        let id = self
            .queue
            .try_update(|q| q.push_with_duration(title, description, duration_ms))
            .unwrap_or_default();

        let queue = self.queue;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            queue.update(|q| q.remove(id));
        });
        id
    }

    /// Early dismissal, before the expiry timer fires.
    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|q| q.remove(id));
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
