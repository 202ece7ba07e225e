//! Wallet state management.
//!
//! The TON Connect connection object is a singleton owned by the services
//! layer; this context holds the observable connection state, the fetched
//! balance and the user's stake positions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::utils::truncate_address;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{BALANCE_POLL_ATTEMPTS, BALANCE_POLL_INTERVAL_MS, BALANCE_TOLERANCE_TON};
use crate::engine::staking::{PoolInfo, StakePosition, StakeStatus};
use crate::services::wallet as ton;
use crate::state::toast::ToastContext;

/// Wallet connection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletConnection {
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl WalletConnection {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletConnection::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletConnection::Connected { address } => Some(address),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct WalletContext {
    pub connection: RwSignal<WalletConnection>,
    /// Fetched on every (re)connect, in TON. No caching.
    pub balance_ton: RwSignal<f64>,
    pub positions: RwSignal<Vec<StakePosition>>,
    pub pool: RwSignal<PoolInfo>,
    /// Balance ceiling while stakes are pending: a fetch above it predates
    /// the transfer and must not be applied. `None` when nothing is pending.
    pub expected_balance: RwSignal<Option<f64>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            connection: RwSignal::new(WalletConnection::Disconnected),
            balance_ton: RwSignal::new(0.0),
            positions: RwSignal::new(Vec::new()),
            pool: RwSignal::new(PoolInfo::default()),
            expected_balance: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.with(|c| c.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.connection.with(|c| c.address().map(|s| s.to_string()))
    }

    pub fn set_connecting(&self) {
        self.connection.set(WalletConnection::Connecting);
    }

    pub fn set_connected(&self, address: String) {
        self.connection.set(WalletConnection::Connected { address });
    }

    pub fn set_error(&self, error: String) {
        self.connection.set(WalletConnection::Error(error));
    }

    pub fn set_disconnected(&self) {
        self.connection.set(WalletConnection::Disconnected);
        self.balance_ton.set(0.0);
        self.expected_balance.set(None);
    }

    /// Record a freshly submitted stake as pending, debit the balance and
    /// remember the debited value as the ceiling any later fetch must stay
    /// under to count as reconciled.
    pub fn record_pending_stake(&self, position: StakePosition) {
        let amount = position.principal;
        self.positions.update(|p| p.push(position));
        self.pool.update(|p| p.record_stake(amount));
        self.balance_ton.update(|b| *b = (*b - amount).max(0.0));
        self.expected_balance
            .set(Some(self.balance_ton.get_untracked()));
    }

    /// Settle every pending position once the post-submission balance
    /// refetch has reconciled, and drop the ceiling.
    pub fn confirm_pending_stakes(&self) {
        self.positions.update(|positions| {
            for position in positions.iter_mut() {
                if position.status == StakeStatus::Pending {
                    position.confirm();
                }
            }
        });
        self.expected_balance.set(None);
    }
}

/// Whether a fetched balance can be applied: while stakes are pending, a
/// value above the post-debit ceiling is the pre-transfer balance the
/// explorer has not caught up from.
fn balance_is_current(fetched_ton: f64, ceiling_ton: Option<f64>) -> bool {
    match ceiling_ton {
        Some(ceiling) => fetched_ton <= ceiling + BALANCE_TOLERANCE_TON,
        None => true,
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Restore a previous wallet session and keep the context in sync with the
/// SDK's status events. Called once at application startup.
pub fn init_wallet(wallet: WalletContext) {
    spawn_local(async move {
        if let Some(address) = ton::restore_connection().await {
            log::info!("restored wallet session for {}", truncate_address(&address));
            wallet.set_connected(address);
            refresh_balance(wallet, false).await;
        }
    });

    // The SDK reports address changes and disconnects done from the wallet
    // side; mirror them into the context.
    let on_status = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        match value.as_string() {
            Some(address) => {
                wallet.set_connected(address);
                spawn_refresh_balance(wallet, false);
            }
            None => wallet.set_disconnected(),
        }
    });
    ton::on_status_change(on_status.as_ref().unchecked_ref());
    // Subscription lives for the whole session.
    on_status.forget();
}

/// Run the connect flow, toasting the result.
pub fn spawn_connect(wallet: WalletContext, toasts: ToastContext) {
    if wallet
        .connection
        .with_untracked(|c| matches!(c, WalletConnection::Connecting))
    {
        return;
    }
    wallet.set_connecting();
    spawn_local(async move {
        match ton::connect().await {
            Ok(address) => {
                toasts.notify("Wallet Connected", truncate_address(&address));
                wallet.set_connected(address);
                refresh_balance(wallet, false).await;
            }
            Err(e) => {
                log::warn!("wallet connect failed: {}", e);
                toasts.notify("Connection Failed", e.to_string());
                wallet.set_error(e.to_string());
            }
        }
    });
}

/// Disconnect and reset the context. SDK failures are logged, the local
/// state resets regardless.
pub fn spawn_disconnect(wallet: WalletContext, toasts: ToastContext) {
    spawn_local(async move {
        if let Err(e) = ton::disconnect().await {
            log::warn!("wallet disconnect failed: {}", e);
        }
        wallet.set_disconnected();
        toasts.notify("Wallet Disconnected", "Your wallet has been disconnected");
    });
}

/// Refetch the balance in the background. With `confirm_pending` the fetch
/// polls until the balance reflects the pending transfer, then settles the
/// pending positions.
pub fn spawn_refresh_balance(wallet: WalletContext, confirm_pending: bool) {
    spawn_local(async move {
        refresh_balance(wallet, confirm_pending).await;
    });
}

async fn refresh_balance(wallet: WalletContext, confirm_pending: bool) {
    let Some(address) = wallet.address() else {
        return;
    };
    for attempt in 0..BALANCE_POLL_ATTEMPTS {
        if attempt > 0 {
            TimeoutFuture::new(BALANCE_POLL_INTERVAL_MS).await;
        }
        match ton::fetch_balance(&address).await {
            Ok(balance) => {
                if balance_is_current(balance, wallet.expected_balance.get_untracked()) {
                    wallet.balance_ton.set(balance);
                    if confirm_pending {
                        wallet.confirm_pending_stakes();
                    }
                    return;
                }
                // Pre-transfer balance; applying it would re-inflate the
                // spendable amount while the stake is in flight.
                log::info!("explorer balance not yet reconciled, keeping the debited value");
                if !confirm_pending {
                    return;
                }
            }
            // The balance panel degrades silently; staking is still gated
            // by the stale value.
            Err(e) => {
                log::warn!("balance lookup failed: {}", e);
                if !confirm_pending {
                    return;
                }
            }
        }
    }
    log::warn!("balance never reflected the transfer, positions stay pending");
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_stake_sets_the_balance_ceiling() {
        let wallet = WalletContext::new();
        wallet.balance_ton.set(200.0);
        wallet.record_pending_stake(StakePosition::new(120.0, 30));

        assert_eq!(wallet.balance_ton.get_untracked(), 80.0);
        assert_eq!(wallet.expected_balance.get_untracked(), Some(80.0));
        // The pre-transfer balance must not be applied: it would re-enable
        // staking the amount already in flight.
        assert!(!balance_is_current(200.0, wallet.expected_balance.get_untracked()));
        // A balance at or under the ceiling reflects the transfer (fees make
        // it land below the exact debit).
        assert!(balance_is_current(79.95, wallet.expected_balance.get_untracked()));
        assert!(balance_is_current(80.0, wallet.expected_balance.get_untracked()));
    }

    #[test]
    fn confirmation_settles_positions_and_drops_the_ceiling() {
        let wallet = WalletContext::new();
        wallet.balance_ton.set(200.0);
        wallet.record_pending_stake(StakePosition::new(120.0, 30));

        wallet.confirm_pending_stakes();
        assert!(wallet
            .positions
            .with_untracked(|p| p.iter().all(|pos| pos.status == StakeStatus::Confirmed)));
        assert_eq!(wallet.expected_balance.get_untracked(), None);
        // With no stake pending any fetched value is applicable again.
        assert!(balance_is_current(200.0, wallet.expected_balance.get_untracked()));
    }

    #[test]
    fn disconnect_resets_balance_state() {
        let wallet = WalletContext::new();
        wallet.set_connected("EQtest".into());
        wallet.balance_ton.set(200.0);
        wallet.record_pending_stake(StakePosition::new(60.0, 7));

        wallet.set_disconnected();
        assert_eq!(wallet.balance_ton.get_untracked(), 0.0);
        assert_eq!(wallet.expected_balance.get_untracked(), None);
    }
}
