//! Timers tied to the lifetime of the component that starts them.
//!
//! Each hook spawns one task on the component's scope and cancels it when
//! the component unmounts, so no callback runs against a torn-down view.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

/// Runs `on_tick` every `period` until the component unmounts.
///
/// Missed ticks are not replayed: each wakeup sleeps a full period again.
pub fn use_interval(period: Duration, mut on_tick: impl FnMut() + 'static) -> Task {
    let task = use_hook(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                on_tick();
            }
        })
    });
    use_drop(move || task.cancel());
    task
}

/// Runs `on_fire` once after `delay`, unless the component unmounts first.
pub fn use_timeout(delay: Duration, on_fire: impl FnOnce() + 'static) -> Task {
    let task = use_hook(move || {
        spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        })
    });
    use_drop(move || task.cancel());
    task
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::hooks::testing::pump;

    static TICKS: AtomicUsize = AtomicUsize::new(0);
    static TIMEOUTS: AtomicUsize = AtomicUsize::new(0);

    #[component]
    fn Ticker() -> Element {
        use_interval(Duration::from_millis(100), || {
            TICKS.fetch_add(1, Ordering::SeqCst);
        });
        rsx! { div {} }
    }

    /// Shows the ticker for 250ms, then removes it.
    #[component]
    fn TickerHost() -> Element {
        let mut show = use_signal(|| true);
        use_timeout(Duration::from_millis(250), move || show.set(false));
        rsx! {
            if show() {
                Ticker {}
            }
        }
    }

    #[component]
    fn Alarm() -> Element {
        use_timeout(Duration::from_millis(500), || {
            TIMEOUTS.fetch_add(1, Ordering::SeqCst);
        });
        rsx! { div {} }
    }

    /// Shows the alarm for 100ms, before it can fire.
    #[component]
    fn AlarmHost() -> Element {
        let mut show = use_signal(|| true);
        use_timeout(Duration::from_millis(100), move || show.set(false));
        rsx! {
            if show() {
                Alarm {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_stops_on_unmount() {
        let mut dom = VirtualDom::new(TickerHost);
        dom.rebuild_in_place();

        pump(&mut dom, Duration::from_millis(260)).await;
        let ticks_while_mounted = TICKS.load(Ordering::SeqCst);
        assert!(ticks_while_mounted >= 1);

        pump(&mut dom, Duration::from_secs(2)).await;
        assert_eq!(TICKS.load(Ordering::SeqCst), ticks_while_mounted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_cancelled_on_unmount() {
        let mut dom = VirtualDom::new(AlarmHost);
        dom.rebuild_in_place();

        pump(&mut dom, Duration::from_secs(2)).await;
        assert_eq!(TIMEOUTS.load(Ordering::SeqCst), 0);
    }
}
