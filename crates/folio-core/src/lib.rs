//! Core behavior for the folio portfolio site.
//!
//! Everything here is renderer-independent: the theme store, colors, the
//! four-page route cycle, the scroll-navigation state machine, elapsed-time
//! math, transition parameters and the static site content. The Dioxus
//! front end in `folio-site` composes these into pages.

pub mod color;
pub mod config;
pub mod content;
pub mod elapsed;
pub mod error;
pub mod motion;
pub mod route;
pub mod scroll;
pub mod theme;

pub use color::Rgb;
pub use config::SiteConfig;
pub use elapsed::{Elapsed, whole_years_since};
pub use error::{ColorError, FolioError, Result};
pub use motion::{LayoutId, Transition, TransitionKind};
pub use route::{Neighbors, Page};
pub use scroll::{ScrollDirection, ScrollNavigator, ScrollPhase, ScrollTimings};
pub use theme::{Palette, SubscriptionId, Theme, ThemeKind, ThemeStore};
