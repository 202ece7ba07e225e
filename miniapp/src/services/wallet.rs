//! TON Connect wallet bridge.
//!
//! Inline-JS interop with the TON Connect UI SDK at `window.tonConnectUI`:
//! connect, disconnect, transaction submission, status subscription and
//! connection restore. SDK failures are classified into [`WalletError`] at
//! this boundary; balance lookups go to the block-explorer API.

use gloo_net::http::Request;
use js_sys::Function;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::config::{EXPLORER_BASE, NANOTON_PER_TON, STAKING_CONTRACT_ADDRESS, TX_VALIDITY_SECS};

#[wasm_bindgen(inline_js = "
export function tonWalletAvailable() {
    return !!window.tonConnectUI;
}

export async function tonConnect() {
    const ui = window.tonConnectUI;
    if (!ui) {
        throw new Error('Wallet not found: TON Connect is not loaded');
    }
    const wallet = await ui.connectWallet();
    if (!wallet || !wallet.account || !wallet.account.address) {
        throw new Error('Connected but no account address was returned');
    }
    return wallet.account.address;
}

export async function tonDisconnect() {
    const ui = window.tonConnectUI;
    if (!ui) return;
    await ui.disconnect();
}

export async function tonRestoreConnection() {
    const ui = window.tonConnectUI;
    if (!ui) return null;
    if (ui.connectionRestored) await ui.connectionRestored;
    return ui.account ? ui.account.address : null;
}

export async function tonSendTransaction(descriptor) {
    const ui = window.tonConnectUI;
    if (!ui) {
        throw new Error('Wallet not found: TON Connect is not loaded');
    }
    return await ui.sendTransaction(descriptor);
}

export function tonOnStatusChange(callback) {
    const ui = window.tonConnectUI;
    if (!ui || !ui.onStatusChange) return;
    ui.onStatusChange((wallet) => {
        callback(wallet && wallet.account ? wallet.account.address : null);
    });
}
")]
extern "C" {
    fn tonWalletAvailable() -> bool;
    #[wasm_bindgen(catch)]
    async fn tonConnect() -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch)]
    async fn tonDisconnect() -> Result<(), JsValue>;
    #[wasm_bindgen(catch)]
    async fn tonRestoreConnection() -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch)]
    async fn tonSendTransaction(descriptor: JsValue) -> Result<JsValue, JsValue>;
    fn tonOnStatusChange(callback: &Function);
}

/// SDK failures, bucketed into the messages the UI shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Connection rejected by user")]
    UserRejected,
    #[error("No compatible wallet found")]
    WalletNotFound,
    #[error("Connection timed out")]
    Timeout,
    #[error("{0}")]
    Unknown(String),
}

/// Bucket a raw SDK error message.
pub fn classify_error(raw: &str) -> WalletError {
    let lowered = raw.to_lowercase();
    if lowered.contains("reject") || lowered.contains("declined") {
        WalletError::UserRejected
    } else if lowered.contains("not found") || lowered.contains("not loaded") {
        WalletError::WalletNotFound
    } else if lowered.contains("timeout") || lowered.contains("timed out") {
        WalletError::Timeout
    } else {
        WalletError::Unknown(raw.to_string())
    }
}

fn js_error(value: JsValue) -> WalletError {
    let raw = value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value));
    classify_error(&raw)
}

pub fn wallet_available() -> bool {
    tonWalletAvailable()
}

/// Open the wallet-connect flow and return the connected address.
pub async fn connect() -> Result<String, WalletError> {
    let value = tonConnect().await.map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| WalletError::Unknown("wallet returned a non-string address".into()))
}

/// Best effort disconnect; the caller logs and toasts, never propagates.
pub async fn disconnect() -> Result<(), WalletError> {
    tonDisconnect().await.map_err(js_error)
}

/// Re-establish a previous session, if the SDK has one.
pub async fn restore_connection() -> Option<String> {
    match tonRestoreConnection().await {
        Ok(value) => value.as_string(),
        Err(e) => {
            log::warn!("connection restore failed: {:?}", e);
            None
        }
    }
}

/// Subscribe to connection status changes. The callback receives the new
/// address, or `null` on disconnect.
pub fn on_status_change(callback: &Function) {
    tonOnStatusChange(callback);
}

/// One message of a transfer descriptor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransferMessage {
    pub address: String,
    /// Amount in nanoTON, stringified as the SDK expects.
    pub amount: String,
    pub payload: String,
}

/// Transfer descriptor handed to `sendTransaction`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Unix seconds after which the wallet must refuse to sign.
    pub valid_until: u64,
    pub messages: Vec<TransferMessage>,
}

/// Build the stake transfer for `amount_ton` sent to the staking contract,
/// valid for [`TX_VALIDITY_SECS`] from `now_secs`.
pub fn stake_transfer(amount_ton: f64, now_secs: u64) -> TransferRequest {
    let nano = (amount_ton * NANOTON_PER_TON).round() as u64;
    TransferRequest {
        valid_until: now_secs + TX_VALIDITY_SECS,
        messages: vec![TransferMessage {
            address: STAKING_CONTRACT_ADDRESS.to_string(),
            amount: nano.to_string(),
            payload: "te6ccgEBAQEAKgAAUAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAP_"
                .to_string(),
        }],
    }
}

/// Submit a transfer through the connected wallet.
pub async fn send_transaction(descriptor: &TransferRequest) -> Result<(), WalletError> {
    let value = serde_wasm_bindgen::to_value(descriptor)
        .map_err(|e| WalletError::Unknown(e.to_string()))?;
    tonSendTransaction(value).await.map_err(js_error)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct BalanceResponse {
    balance: serde_json::Value,
}

/// Fetch the address balance from the block explorer, in TON. No caching;
/// called on every (re)connect.
pub async fn fetch_balance(address: &str) -> Result<f64, WalletError> {
    let url = format!("{}/v1/account/{}/balance", EXPLORER_BASE, address);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| WalletError::Unknown(format!("balance fetch failed: {}", e)))?;

    if !response.ok() {
        return Err(WalletError::Unknown(format!(
            "balance fetch returned {}",
            response.status()
        )));
    }

    let body: BalanceResponse = response
        .json()
        .await
        .map_err(|e| WalletError::Unknown(format!("bad balance payload: {}", e)))?;
    nano_to_ton(&body.balance)
        .ok_or_else(|| WalletError::Unknown("bad balance payload: not a number".into()))
}

/// The explorer reports nanoTON as either a JSON number or a string.
fn nano_to_ton(value: &serde_json::Value) -> Option<f64> {
    let nano = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.parse::<f64>().ok()?,
        _ => return None,
    };
    Some(nano / NANOTON_PER_TON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_classify_into_documented_buckets() {
        assert_eq!(classify_error("User rejected the request"), WalletError::UserRejected);
        assert_eq!(
            classify_error("Wallet not found: TON Connect is not loaded"),
            WalletError::WalletNotFound
        );
        assert_eq!(classify_error("request timed out"), WalletError::Timeout);
        assert_eq!(
            classify_error("something odd"),
            WalletError::Unknown("something odd".into())
        );
    }

    #[test]
    fn stake_transfer_uses_the_validity_window() {
        let tx = stake_transfer(100.0, 1_700_000_000);
        assert_eq!(tx.valid_until, 1_700_000_000 + TX_VALIDITY_SECS);
        assert_eq!(tx.messages.len(), 1);
        assert_eq!(tx.messages[0].address, STAKING_CONTRACT_ADDRESS);
        assert_eq!(tx.messages[0].amount, "100000000000");
    }

    #[test]
    fn nano_to_ton_accepts_numbers_and_strings() {
        assert_eq!(nano_to_ton(&serde_json::json!(1_000_000_000u64)), Some(1.0));
        assert_eq!(nano_to_ton(&serde_json::json!("500000000")), Some(0.5));
        assert_eq!(nano_to_ton(&serde_json::json!(null)), None);
    }
}
