//! Process-wide startup configuration.

use std::sync::OnceLock;

use dioxus::prelude::*;
use folio_core::SiteConfig;

/// Configuration set once by `main` before launch.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Stores the configuration. Returns `false` if it was already set.
pub fn install(config: SiteConfig) -> bool {
    SITE_CONFIG.set(config).is_ok()
}

/// Returns the installed configuration, or the defaults.
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::default)
}

/// Whether entrance animations are off. Flipped on once the home intro has
/// played so revisiting home does not replay it.
pub static ANIMATIONS_DISABLED: GlobalSignal<bool> =
    GlobalSignal::new(|| !site_config().animations);
