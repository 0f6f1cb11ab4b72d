//! Walks the whole site by wheel events, as a visitor would.

use std::time::{Duration, Instant};

use folio_core::{Page, ScrollNavigator, ScrollTimings};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Mounts a navigator per page, scrolls once after the grace period, and
/// follows the returned route.
fn walk(start: Page, delta: f64, steps: usize) -> Vec<Page> {
    let mut now = Instant::now();
    let mut page = start;
    let mut visited = vec![page];

    for _ in 0..steps {
        let mut nav = ScrollNavigator::for_page(page, ScrollTimings::default(), now);
        now += ms(600);
        page = nav.on_wheel(delta, now).expect("eligible scroll navigates");
        // The second flick of the same gesture lands inside the cooldown.
        assert_eq!(nav.on_wheel(delta, now + ms(200)), None);
        nav.detach();
        visited.push(page);
    }
    visited
}

#[test]
fn scrolling_down_visits_every_page_in_order() {
    assert_eq!(
        walk(Page::Home, 40.0, 4),
        vec![Page::Home, Page::About, Page::Projects, Page::Contact, Page::Home]
    );
}

#[test]
fn scrolling_up_visits_every_page_in_reverse() {
    assert_eq!(
        walk(Page::Home, -40.0, 4),
        vec![Page::Home, Page::Contact, Page::Projects, Page::About, Page::Home]
    );
}

#[test]
fn residual_momentum_does_not_skip_a_page() {
    let t0 = Instant::now();
    let mut home = ScrollNavigator::for_page(Page::Home, ScrollTimings::default(), t0);
    assert_eq!(home.on_wheel(10.0, t0 + ms(600)), Some(Page::About));
    home.detach();

    // The about page mounts right away while the wheel keeps spinning.
    let mounted = t0 + ms(650);
    let mut about = ScrollNavigator::for_page(Page::About, ScrollTimings::default(), mounted);
    for tick in (0..500).step_by(50) {
        assert_eq!(about.on_wheel(10.0, mounted + ms(tick)), None);
    }
    assert_eq!(about.on_wheel(10.0, mounted + ms(500)), Some(Page::Projects));
}
