//! Leptos contexts wrapping the [`crate::engine`] state in signals.

pub mod session;
pub mod theme;
pub mod toast;
pub mod wallet;
