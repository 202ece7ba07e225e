//! # Shared Data Transfer Objects Library
//!
//! Defines the JSON contract between the ShakeTON mini-app client and the
//! backend API. All DTOs use `serde` with default snake_case field names.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Telegram init-data verification DTOs
//!   - **[`dto::game`]**: Reward claim and leaderboard DTOs
//! - **[`utils`]**: Shared display helpers (wallet address truncation,
//!   coin formatting)

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
