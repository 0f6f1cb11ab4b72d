//! Wheel-driven page navigation shared by every page.
//!
//! A [`ScrollNavigator`] is created when a page mounts and dropped when it
//! unmounts. It ignores input during a grace period after mount, turns the
//! first eligible wheel event into a navigation target, then drops input
//! until the cooldown has elapsed.
//!
//! Timing is evaluated against the timestamps passed in, so the cooldown
//! needs no timer that could outlive the page.

use std::time::{Duration, Instant};

use crate::route::{Neighbors, Page};

/// Vertical wheel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Positive delta, towards the next page.
    Down,
    /// Negative delta, towards the previous page.
    Up,
}

impl ScrollDirection {
    /// Classifies a vertical wheel delta. Zero and NaN have no direction.
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(ScrollDirection::Down)
        } else if delta_y < 0.0 {
            Some(ScrollDirection::Up)
        } else {
            None
        }
    }
}

/// Grace period after mount and cooldown after each navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTimings {
    pub grace: Duration,
    pub cooldown: Duration,
}

impl ScrollTimings {
    pub const DEFAULT_GRACE: Duration = Duration::from_millis(500);
    pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1000);
}

impl Default for ScrollTimings {
    fn default() -> Self {
        Self {
            grace: Self::DEFAULT_GRACE,
            cooldown: Self::DEFAULT_COOLDOWN,
        }
    }
}

/// Observable state of a navigator at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Still inside the post-mount grace period.
    Settling,
    /// Accepting input.
    Idle,
    /// A navigation fired; input is dropped until `until`.
    CoolingDown { until: Instant },
    /// The owning page unmounted. Terminal.
    Detached,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    CoolingDown { until: Instant },
    Detached,
}

/// Per-page scroll navigation state machine.
#[derive(Clone, Debug)]
pub struct ScrollNavigator {
    neighbors: Neighbors,
    timings: ScrollTimings,
    eligible_at: Instant,
    state: State,
}

impl ScrollNavigator {
    /// Starts the navigator for a page mounted at `now`.
    pub fn mount(neighbors: Neighbors, timings: ScrollTimings, now: Instant) -> Self {
        Self {
            neighbors,
            timings,
            eligible_at: now + timings.grace,
            state: State::Idle,
        }
    }

    /// Shorthand for mounting with a page's own neighbors.
    pub fn for_page(page: Page, timings: ScrollTimings, now: Instant) -> Self {
        Self::mount(page.neighbors(), timings, now)
    }

    pub fn neighbors(&self) -> Neighbors {
        self.neighbors
    }

    /// Returns the phase as seen at `now`.
    pub fn phase(&self, now: Instant) -> ScrollPhase {
        match self.state {
            State::Detached => ScrollPhase::Detached,
            _ if now < self.eligible_at => ScrollPhase::Settling,
            State::CoolingDown { until } if now < until => ScrollPhase::CoolingDown { until },
            _ => ScrollPhase::Idle,
        }
    }

    /// Whether a wheel event at `now` would be considered.
    pub fn is_accepting(&self, now: Instant) -> bool {
        self.phase(now) == ScrollPhase::Idle
    }

    /// Handles a wheel event. Returns the page to navigate to, if any.
    pub fn on_wheel(&mut self, delta_y: f64, now: Instant) -> Option<Page> {
        if !self.is_accepting(now) {
            return None;
        }
        let direction = ScrollDirection::from_delta(delta_y)?;

        let target = match direction {
            ScrollDirection::Down => self.neighbors.next,
            ScrollDirection::Up => self.neighbors.previous,
        };
        self.state = State::CoolingDown {
            until: now + self.timings.cooldown,
        };
        tracing::debug!(?direction, target = %target, "Scroll navigation");
        Some(target)
    }

    /// Stops accepting input for good. Called on unmount.
    pub fn detach(&mut self) {
        self.state = State::Detached;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn home(t0: Instant) -> ScrollNavigator {
        ScrollNavigator::for_page(Page::Home, ScrollTimings::default(), t0)
    }

    #[test]
    fn test_home_directions() {
        let t0 = Instant::now();
        assert_eq!(home(t0).on_wheel(120.0, t0 + ms(600)), Some(Page::About));
        assert_eq!(home(t0).on_wheel(-3.0, t0 + ms(600)), Some(Page::Contact));
    }

    #[test]
    fn test_grace_period_ignores_input() {
        let t0 = Instant::now();
        let mut nav = home(t0);
        assert_eq!(nav.phase(t0), ScrollPhase::Settling);
        assert_eq!(nav.on_wheel(1.0, t0), None);
        assert_eq!(nav.on_wheel(1.0, t0 + ms(499)), None);
        // Ignored events do not start a cooldown.
        assert_eq!(nav.on_wheel(1.0, t0 + ms(500)), Some(Page::About));
    }

    #[test]
    fn test_cooldown_drops_then_accepts() {
        let t0 = Instant::now();
        let mut nav = home(t0);
        let fired = t0 + ms(700);
        assert_eq!(nav.on_wheel(1.0, fired), Some(Page::About));
        assert_eq!(
            nav.phase(fired + ms(10)),
            ScrollPhase::CoolingDown {
                until: fired + ms(1000),
            }
        );
        assert_eq!(nav.on_wheel(1.0, fired + ms(1)), None);
        assert_eq!(nav.on_wheel(-1.0, fired + ms(999)), None);
        // Dropped events do not extend the window.
        assert_eq!(nav.on_wheel(-1.0, fired + ms(1000)), Some(Page::Contact));
    }

    #[test]
    fn test_zero_delta_is_ignored() {
        let t0 = Instant::now();
        let mut nav = home(t0);
        assert_eq!(nav.on_wheel(0.0, t0 + ms(600)), None);
        assert_eq!(nav.on_wheel(f64::NAN, t0 + ms(600)), None);
        assert!(nav.is_accepting(t0 + ms(601)));
    }

    #[test]
    fn test_detach_is_terminal() {
        let t0 = Instant::now();
        let mut nav = home(t0);
        nav.on_wheel(1.0, t0 + ms(600));
        nav.detach();
        assert_eq!(nav.phase(t0 + ms(5000)), ScrollPhase::Detached);
        assert_eq!(nav.on_wheel(1.0, t0 + ms(5000)), None);
    }

    #[test]
    fn test_custom_timings() {
        let t0 = Instant::now();
        let timings = ScrollTimings {
            grace: ms(0),
            cooldown: ms(50),
        };
        let mut nav = ScrollNavigator::for_page(Page::Contact, timings, t0);
        assert_eq!(nav.on_wheel(1.0, t0), Some(Page::Home));
        assert_eq!(nav.on_wheel(1.0, t0 + ms(49)), None);
        assert_eq!(nav.on_wheel(-1.0, t0 + ms(50)), Some(Page::Projects));
    }
}
