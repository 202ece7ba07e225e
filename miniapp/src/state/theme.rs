//! Theme state.
//!
//! A snapshot of the host's theme parameters taken once at startup and
//! passed down through context. Pages read the struct; nothing mutates
//! global style properties.

use leptos::prelude::*;

use crate::services::telegram::HostBridge;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg_color: String,
    pub text_color: String,
    pub button_color: String,
    pub button_text_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        // Telegram light-theme defaults, also used outside Telegram.
        Self {
            bg_color: "#ffffff".into(),
            text_color: "#000000".into(),
            button_color: "#3390ec".into(),
            button_text_color: "#ffffff".into(),
        }
    }
}

impl Theme {
    /// Read the host's theme, falling back per parameter.
    pub fn from_host(host: &dyn HostBridge) -> Self {
        let defaults = Theme::default();
        Self {
            bg_color: host.theme_param("bg_color").unwrap_or(defaults.bg_color),
            text_color: host.theme_param("text_color").unwrap_or(defaults.text_color),
            button_color: host
                .theme_param("button_color")
                .unwrap_or(defaults.button_color),
            button_text_color: host
                .theme_param("button_text_color")
                .unwrap_or(defaults.button_text_color),
        }
    }

    pub fn container_style(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.bg_color, self.text_color
        )
    }

    pub fn button_style(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.button_color, self.button_text_color
        )
    }
}

pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

pub fn use_theme() -> Theme {
    expect_context::<Theme>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::telegram::NullHost;

    #[test]
    fn null_host_yields_defaults() {
        let theme = Theme::from_host(&NullHost);
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn styles_embed_the_palette() {
        let theme = Theme::default();
        assert!(theme.container_style().contains("#ffffff"));
        assert!(theme.button_style().contains("#3390ec"));
    }
}
