//! Data Transfer Objects for the backend REST API.

pub mod auth;
pub mod game;

pub use auth::*;
pub use game::*;
