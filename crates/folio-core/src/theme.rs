//! Process-wide color theme with a small mutation API.
//!
//! The store owns exactly one [`Theme`]. It only changes through
//! [`ThemeStore::toggle_theme`], [`ThemeStore::set_random_accent`] and
//! [`ThemeStore::set_accent`]; each mutation notifies subscribers
//! synchronously, in registration order, before returning.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::FolioError;

/// Light or dark palette selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
}

impl ThemeKind {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    /// Returns the other kind.
    pub fn flipped(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    /// Returns the fixed palette for this kind.
    pub fn palette(self) -> Palette {
        match self {
            ThemeKind::Light => Palette::LIGHT,
            ThemeKind::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

impl FromStr for ThemeKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            other => Err(FolioError::UnknownThemeKind(other.to_string())),
        }
    }
}

/// Background and text colors of one of the two fixed palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Rgb::from_u32(0x000000),
        text: Rgb::from_u32(0xfbfbfb),
    };

    pub const LIGHT: Palette = Palette {
        background: Rgb::from_u32(0xfbfbfb),
        text: Rgb::from_u32(0x121212),
    };
}

/// Accent used until the visitor randomizes it.
pub const DEFAULT_ACCENT: Rgb = Rgb::from_u32(0x6b86f9);

/// The active color theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
}

impl Theme {
    /// Builds the theme for a palette kind with the given accent.
    pub fn new(kind: ThemeKind, accent: Rgb) -> Self {
        let palette = kind.palette();
        Self {
            kind,
            background: palette.background,
            text: palette.text,
            accent,
        }
    }

    pub fn is_light(&self) -> bool {
        self.kind == ThemeKind::Light
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeKind::Dark, DEFAULT_ACCENT)
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Theme)>;

/// Owner of the single active [`Theme`].
pub struct ThemeStore {
    theme: Theme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches to the other palette. The accent is kept.
    pub fn toggle_theme(&mut self) {
        let kind = self.theme.kind.flipped();
        self.theme = Theme::new(kind, self.theme.accent);
        tracing::debug!(kind = %kind, "Theme toggled");
        self.notify();
    }

    /// Replaces the accent with a random color.
    pub fn set_random_accent(&mut self) {
        self.set_random_accent_with(&mut rand::rng());
    }

    /// Replaces the accent with a color drawn from `rng`.
    pub fn set_random_accent_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.set_accent(Rgb::random_with(rng));
    }

    /// Replaces the accent with `accent`.
    pub fn set_accent(&mut self, accent: Rgb) {
        self.theme.accent = accent;
        tracing::debug!(accent = %accent, "Accent changed");
        self.notify();
    }

    /// Registers a callback run after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.theme);
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_default_is_dark_with_default_accent() {
        let theme = Theme::default();
        assert_eq!(theme.kind, ThemeKind::Dark);
        assert_eq!(theme.background, Palette::DARK.background);
        assert_eq!(theme.text, Palette::DARK.text);
        assert_eq!(theme.accent, DEFAULT_ACCENT);
    }

    #[test]
    fn test_toggle_twice_restores_palette() {
        let mut store = ThemeStore::default();
        let original = store.theme();

        store.toggle_theme();
        let toggled = store.theme();
        assert_eq!(toggled.kind, ThemeKind::Light);
        assert_eq!(toggled.background, Palette::LIGHT.background);
        assert_eq!(toggled.text, Palette::LIGHT.text);

        store.toggle_theme();
        let back = store.theme();
        assert_eq!(back.kind, original.kind);
        assert_eq!(back.background, original.background);
        assert_eq!(back.text, original.text);
    }

    #[test]
    fn test_toggle_keeps_accent() {
        let mut store = ThemeStore::default();
        store.set_accent(Rgb::new(1, 2, 3));
        store.toggle_theme();
        assert_eq!(store.theme().accent, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_random_accent_only_touches_accent() {
        let mut rng = StdRng::seed_from_u64(42);
        for kind in [ThemeKind::Dark, ThemeKind::Light] {
            let mut store = ThemeStore::new(Theme::new(kind, DEFAULT_ACCENT));
            let before = store.theme();
            store.set_random_accent_with(&mut rng);
            let after = store.theme();
            assert_eq!(after.kind, before.kind);
            assert_eq!(after.background, before.background);
            assert_eq!(after.text, before.text);
        }
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::default();

        let log = Rc::clone(&seen);
        store.subscribe(move |t| log.borrow_mut().push(("first", t.kind)));
        let log = Rc::clone(&seen);
        let second = store.subscribe(move |t| log.borrow_mut().push(("second", t.kind)));

        store.toggle_theme();
        assert_eq!(
            *seen.borrow(),
            vec![("first", ThemeKind::Light), ("second", ThemeKind::Light)]
        );

        assert!(store.unsubscribe(second));
        assert!(!store.unsubscribe(second));
        store.set_accent(Rgb::new(9, 9, 9));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_theme_kind_parse() {
        assert_eq!("Light".parse::<ThemeKind>().unwrap(), ThemeKind::Light);
        assert_eq!(" dark ".parse::<ThemeKind>().unwrap(), ThemeKind::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeKind>(),
            Err(FolioError::UnknownThemeKind(_))
        ));
    }
}
