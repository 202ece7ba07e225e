//! UI Components

pub mod game_card;
pub mod nav_bar;
pub mod toast_host;

pub use game_card::GameCard;
pub use nav_bar::{AppTab, NavBar};
pub use toast_host::ToastHost;
