//! Wheel navigation hook used by every page.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use folio_core::{Page, ScrollNavigator};

use crate::config::site_config;
use crate::router::SiteRoute;

/// Handle returned by [`use_scroll_navigation`]; attach it to the page's
/// root `onwheel`.
#[derive(Clone)]
pub struct ScrollNavigation {
    navigator: Rc<RefCell<ScrollNavigator>>,
    on_navigate: Callback<Page>,
}

impl ScrollNavigation {
    /// Feeds a wheel event to the navigator and follows the result.
    pub fn on_wheel(&self, evt: WheelEvent) {
        self.on_delta(evt.delta().strip_units().y, Instant::now());
    }

    /// Handles a vertical delta observed at `now`. Returns the page
    /// navigated to, if any.
    pub fn on_delta(&self, delta_y: f64, now: Instant) -> Option<Page> {
        let target = self.navigator.borrow_mut().on_wheel(delta_y, now)?;
        self.on_navigate.call(target);
        Some(target)
    }
}

/// Wires wheel navigation to `page`'s neighbors through the router.
pub fn use_scroll_navigation(page: Page) -> ScrollNavigation {
    let router: Navigator = use_navigator();
    use_scroll_handler(page, move |target: Page| {
        router.push(SiteRoute::from(target));
    })
}

/// Wires wheel navigation to `page`'s neighbors, reporting each target to
/// `on_navigate`.
///
/// The navigator starts its grace period when the page mounts and is
/// detached when it unmounts.
pub fn use_scroll_handler(
    page: Page,
    on_navigate: impl FnMut(Page) + 'static,
) -> ScrollNavigation {
    let on_navigate = use_callback(on_navigate);
    let navigator = use_hook(|| {
        Rc::new(RefCell::new(ScrollNavigator::for_page(
            page,
            site_config().scroll_timings(),
            Instant::now(),
        )))
    });

    let detached = Rc::clone(&navigator);
    use_drop(move || {
        detached.borrow_mut().detach();
        tracing::trace!(page = %page, "Scroll navigation detached");
    });

    ScrollNavigation {
        navigator,
        on_navigate,
    }
}
