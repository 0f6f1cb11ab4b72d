//! Theme store signal and the themed root.

use dioxus::prelude::*;
use folio_core::{Theme, ThemeStore};

use crate::config::site_config;

/// Global signal holding the single theme store.
///
/// Components read it through [`current_theme`], which subscribes them to
/// re-render on every mutation.
pub static THEME: GlobalSignal<ThemeStore> = GlobalSignal::new(|| {
    let mut store = ThemeStore::new(site_config().initial_theme());
    store.subscribe(|theme| {
        tracing::info!(kind = %theme.kind, accent = %theme.accent, "Theme changed");
    });
    store
});

/// Returns the current theme.
pub fn current_theme() -> Theme {
    THEME.read().theme()
}

/// Switches between the light and dark palettes.
pub fn toggle_theme() {
    THEME.write().toggle_theme();
}

/// Replaces the accent with a random color.
pub fn set_random_accent() {
    THEME.write().set_random_accent();
}

/// CSS custom properties for a theme.
pub fn css_variables(theme: &Theme) -> String {
    format!(
        "--background: {}; --text: {}; --accent: {}; background: {}; color: {};",
        theme.background, theme.text, theme.accent, theme.background, theme.text
    )
}

/// Root wrapper applying the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = current_theme();
    let style = css_variables(&theme);

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.kind.css_value()}",
            style: "{style}",
            {children}
        }
    }
}
