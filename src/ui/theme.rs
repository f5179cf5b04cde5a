//! Light/dark theme
//!
//! The page owns one `RwSignal<Theme>` and hands it down as `Signal<Theme>`
//! props. The document root carries the `dark` class while the theme is dark.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Pick the class list for this theme
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        if self.is_dark() { dark } else { light }
    }
}

/// Keep the `dark` class on `<html>` in sync with `theme`
pub fn sync_document_theme(theme: Signal<Theme>) {
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let dark = theme.get().is_dark();
            let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let class_list = html.class_list();
            let result = if dark {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
            if let Err(e) = result {
                leptos::logging::warn!("Failed to apply theme class: {:?}", e);
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = theme;
    }
}
