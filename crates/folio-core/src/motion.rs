//! Transition parameters rendered as CSS animations.
//!
//! Elements carry a [`Transition`] (delay, duration and curve) and a named
//! keyframe set defined in the site stylesheet. Shared elements across
//! routes are tagged with a stable [`LayoutId`].

use std::time::Duration;

/// Timing curve family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionKind {
    #[default]
    Tween,
    Spring,
}

impl TransitionKind {
    pub fn css_easing(&self) -> &'static str {
        match self {
            TransitionKind::Tween => "ease-in-out",
            TransitionKind::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Keyframe sets defined in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyframes {
    FadeIn,
    GrowWidth,
    SpinIn,
}

impl Keyframes {
    pub fn css_name(&self) -> &'static str {
        match self {
            Keyframes::FadeIn => "folio-fade-in",
            Keyframes::GrowWidth => "folio-grow-width",
            Keyframes::SpinIn => "folio-spin-in",
        }
    }
}

/// Delay, duration and curve of one entrance or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub kind: TransitionKind,
}

impl Transition {
    pub const fn tween(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
            kind: TransitionKind::Tween,
        }
    }

    pub const fn spring(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
            kind: TransitionKind::Spring,
        }
    }

    /// Instant after which the animation has finished.
    pub fn settles_after(&self) -> Duration {
        self.delay + self.duration
    }

    /// Inline `animation` declaration for `keyframes`.
    pub fn css_animation(&self, keyframes: Keyframes) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            keyframes.css_name(),
            self.duration.as_millis(),
            self.kind.css_easing(),
            self.delay.as_millis()
        )
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::tween(300, 0)
    }
}

/// Fade-in style for `transition`, or nothing when animations are disabled.
pub fn fade(transition: Transition, disabled: bool) -> String {
    if disabled {
        String::new()
    } else {
        transition.css_animation(Keyframes::FadeIn)
    }
}

/// Stable identifiers for elements shared across routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutId {
    Title1,
    Title2,
    Shapes,
    Line,
    Button,
}

impl LayoutId {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutId::Title1 => "title1",
            LayoutId::Title2 => "title2",
            LayoutId::Shapes => "shapes",
            LayoutId::Line => "line",
            LayoutId::Button => "button",
        }
    }

    /// Layout ids for a two-word title: the longer word takes `Title1`.
    pub fn for_title(first: &str, second: &str) -> [LayoutId; 2] {
        if first.chars().count() > second.chars().count() {
            [LayoutId::Title1, LayoutId::Title2]
        } else {
            [LayoutId::Title2, LayoutId::Title1]
        }
    }
}

/// Entrance timings for the home page intro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroTimings {
    pub line: Transition,
    pub shapes: Transition,
    pub text: Transition,
    pub button: Transition,
    pub hint: Transition,
}

const INTRO_DELAY_MS: u64 = 400;

pub const HOME_INTRO: IntroTimings = IntroTimings {
    line: Transition::spring(300, INTRO_DELAY_MS),
    shapes: Transition::spring(1000, INTRO_DELAY_MS + 678),
    text: Transition::spring(1000, INTRO_DELAY_MS + 700),
    button: Transition::spring(300, INTRO_DELAY_MS + 1700),
    hint: Transition::spring(500, 0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_animation() {
        let t = Transition::tween(300, 400);
        assert_eq!(
            t.css_animation(Keyframes::GrowWidth),
            "animation: folio-grow-width 300ms ease-in-out 400ms both;"
        );
        assert_eq!(t.settles_after(), Duration::from_millis(700));
    }

    #[test]
    fn test_fade_disabled_is_empty() {
        assert!(fade(HOME_INTRO.text, true).is_empty());
        assert!(fade(HOME_INTRO.text, false).starts_with("animation: folio-fade-in 1000ms"));
    }

    #[test]
    fn test_title_layout_ids() {
        assert_eq!(
            LayoutId::for_title("projects", "my"),
            [LayoutId::Title1, LayoutId::Title2]
        );
        assert_eq!(
            LayoutId::for_title("my", "projects"),
            [LayoutId::Title2, LayoutId::Title1]
        );
        // Ties go to the second word.
        assert_eq!(
            LayoutId::for_title("ab", "cd"),
            [LayoutId::Title2, LayoutId::Title1]
        );
    }
}
