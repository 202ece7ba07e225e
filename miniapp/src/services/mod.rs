//! Host and network adapters: backend REST client, Telegram WebApp bridge,
//! TON Connect wallet bridge.

pub mod api;
pub mod telegram;
pub mod wallet;
