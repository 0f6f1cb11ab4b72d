//! Personal portfolio site.
//!
//! A Dioxus desktop application with four routed pages, a light/dark theme
//! with a randomizable accent, and wheel-driven page navigation. Behavior
//! that does not need a renderer lives in `folio-core`.

pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod router;
pub mod theme;

/// Site stylesheet embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
