//! Pure game logic, free of any web or framework dependency.
//!
//! The Leptos contexts in [`crate::state`] wrap these engines in signals;
//! everything here is synchronous state mutation and is unit tested natively.

pub mod session;
pub mod staking;
pub mod tasks;
pub mod toast;
