//! Startup configuration for the site.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::route::Page;
use crate::scroll::ScrollTimings;
use crate::theme::{DEFAULT_ACCENT, Theme, ThemeKind};

/// Resolved startup options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeKind,
    pub accent: Rgb,
    pub start_page: Page,
    pub grace_ms: u64,
    pub cooldown_ms: u64,
    /// Play entrance animations on the first home visit.
    pub animations: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            accent: DEFAULT_ACCENT,
            start_page: Page::default(),
            grace_ms: ScrollTimings::DEFAULT_GRACE.as_millis() as u64,
            cooldown_ms: ScrollTimings::DEFAULT_COOLDOWN.as_millis() as u64,
            animations: true,
        }
    }
}

impl SiteConfig {
    pub fn initial_theme(&self) -> Theme {
        Theme::new(self.theme, self.accent)
    }

    pub fn scroll_timings(&self) -> ScrollTimings {
        ScrollTimings {
            grace: Duration::from_millis(self.grace_ms),
            cooldown: Duration::from_millis(self.cooldown_ms),
        }
    }
}
