//! Ephemeral notification queue.
//!
//! FIFO by insertion; each toast carries its display duration. Expiry timers
//! are scheduled by the context layer, the queue itself only does the
//! bookkeeping.

use crate::config::TOAST_DEFAULT_DURATION_MS;

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
    pub duration_ms: u32,
}

/// Ordered toast queue with monotonic ids.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Append a toast with the default duration. Returns its id for early
    /// dismissal.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.push_with_duration(title, description, TOAST_DEFAULT_DURATION_MS)
    }

    pub fn push_with_duration(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_ms: u32,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            duration_ms,
        });
        id
    }

    /// Remove by id (expiry or explicit dismissal). Unknown ids are ignored.
    pub fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_display_in_insertion_order() {
        let mut queue = ToastQueue::new();
        queue.push("first", "a");
        queue.push("second", "b");
        queue.push("third", "c");
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn push_uses_default_duration() {
        let mut queue = ToastQueue::new();
        let id = queue.push("t", "d");
        let toast = queue.toasts().iter().find(|t| t.id == id);
        assert_eq!(toast.map(|t| t.duration_ms), Some(TOAST_DEFAULT_DURATION_MS));
    }

    #[test]
    fn remove_dismisses_only_the_target() {
        let mut queue = ToastQueue::new();
        let first = queue.push("first", "a");
        let second = queue.push("second", "b");
        queue.remove(first);
        let ids: Vec<_> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, [second]);
        // Removing an id twice is harmless.
        queue.remove(first);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut queue = ToastQueue::new();
        let a = queue.push("a", "");
        let b = queue.push("b", "");
        queue.remove(a);
        let c = queue.push("c", "");
        assert!(a < b && b < c);
    }
}
