//! Telegram WebApp bridge.
//!
//! Host capabilities are behind the [`HostBridge`] trait: [`TelegramHost`]
//! talks to `window.Telegram.WebApp` through an inline-JS shim (all optional
//! chaining lives in the shim), and [`NullHost`] is the no-op fallback for
//! plain browsers so pages never probe the host ad hoc.

use std::sync::Arc;

use js_sys::Function;
use shared::dto::auth::TelegramUser;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function tgAvailable() {
    return !!(window.Telegram && window.Telegram.WebApp);
}

export function tgReady() {
    if (tgAvailable()) window.Telegram.WebApp.ready();
}

export function tgExpand() {
    if (tgAvailable()) window.Telegram.WebApp.expand();
}

export function tgInitData() {
    if (!tgAvailable()) return null;
    const data = window.Telegram.WebApp.initData;
    return data && data.length > 0 ? data : null;
}

export function tgUserJson() {
    if (!tgAvailable()) return null;
    const user = window.Telegram.WebApp.initDataUnsafe
        && window.Telegram.WebApp.initDataUnsafe.user;
    return user ? JSON.stringify(user) : null;
}

export function tgHapticImpact(style) {
    if (!tgAvailable()) return;
    const haptic = window.Telegram.WebApp.HapticFeedback;
    if (haptic && haptic.impactOccurred) haptic.impactOccurred(style);
}

export function tgShowAlert(message) {
    if (tgAvailable() && window.Telegram.WebApp.showAlert) {
        window.Telegram.WebApp.showAlert(message);
    }
}

export function tgMainButtonOnClick(onClick) {
    if (!tgAvailable()) return;
    const button = window.Telegram.WebApp.MainButton;
    if (button) button.onClick(onClick);
}

export function tgShowMainButton(text) {
    if (!tgAvailable()) return;
    const button = window.Telegram.WebApp.MainButton;
    if (!button) return;
    button.setText(text);
    button.show();
}

export function tgHideMainButton() {
    if (!tgAvailable()) return;
    const button = window.Telegram.WebApp.MainButton;
    if (button) button.hide();
}

export function tgThemeParam(name) {
    if (!tgAvailable()) return null;
    const app = window.Telegram.WebApp;
    switch (name) {
        case 'bg_color': return app.backgroundColor || null;
        case 'text_color': return app.textColor || null;
        case 'button_color': return app.buttonColor || null;
        case 'button_text_color': return app.buttonTextColor || null;
        default: return null;
    }
}
")]
extern "C" {
    fn tgAvailable() -> bool;
    fn tgReady();
    fn tgExpand();
    fn tgInitData() -> Option<String>;
    fn tgUserJson() -> Option<String>;
    fn tgHapticImpact(style: &str);
    fn tgShowAlert(message: &str);
    fn tgMainButtonOnClick(on_click: &Function);
    fn tgShowMainButton(text: &str);
    fn tgHideMainButton();
    fn tgThemeParam(name: &str) -> Option<String>;
}

/// Haptic impact strength, mapped onto `HapticFeedback.impactOccurred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

impl ImpactStyle {
    fn as_str(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
        }
    }
}

/// Capabilities of the hosting client. Everything is best effort: a missing
/// capability is a silent no-op, never an error. Implementations are shared
/// through a Leptos context, which requires `Send + Sync`.
pub trait HostBridge: Send + Sync {
    fn ready(&self) {}
    fn expand(&self) {}
    /// Signed init-data payload, absent outside Telegram.
    fn init_data(&self) -> Option<String> {
        None
    }
    fn user(&self) -> Option<TelegramUser> {
        None
    }
    fn haptic_impact(&self, _style: ImpactStyle) {}
    fn show_alert(&self, _message: &str) {}
    /// Install the main button's click handler. Registered once per session;
    /// the host keeps every handler it is ever given, so callers must not
    /// re-register per show.
    fn set_main_button_handler(&self, _on_click: &Function) {}
    fn show_main_button(&self, _text: &str) {}
    fn hide_main_button(&self) {}
    fn theme_param(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Real Telegram host.
pub struct TelegramHost;

impl HostBridge for TelegramHost {
    fn ready(&self) {
        tgReady();
    }

    fn expand(&self) {
        tgExpand();
    }

    fn init_data(&self) -> Option<String> {
        tgInitData()
    }

    fn user(&self) -> Option<TelegramUser> {
        let raw = tgUserJson()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("unparseable Telegram user payload: {}", e);
                None
            }
        }
    }

    fn haptic_impact(&self, style: ImpactStyle) {
        tgHapticImpact(style.as_str());
    }

    fn show_alert(&self, message: &str) {
        tgShowAlert(message);
    }

    fn set_main_button_handler(&self, on_click: &Function) {
        tgMainButtonOnClick(on_click);
    }

    fn show_main_button(&self, text: &str) {
        tgShowMainButton(text);
    }

    fn hide_main_button(&self) {
        tgHideMainButton();
    }

    fn theme_param(&self, name: &str) -> Option<String> {
        tgThemeParam(name)
    }
}

/// Fallback for plain browsers: every capability is a no-op.
pub struct NullHost;

impl HostBridge for NullHost {}

/// Pick the bridge for the current environment.
pub fn detect_host() -> Arc<dyn HostBridge> {
    if tgAvailable() {
        log::info!("Telegram WebApp host detected");
        Arc::new(TelegramHost)
    } else {
        log::info!("no Telegram host, running with no-op bridge");
        Arc::new(NullHost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Contexts require their values to be shareable across threads.
    #[test]
    fn host_bridge_objects_are_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<Arc<dyn HostBridge>>();
        assert_send_sync::<TelegramHost>();
        assert_send_sync::<NullHost>();
    }
}
