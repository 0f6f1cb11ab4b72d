//! Drives a `VirtualDom` against tokio's clock in hook tests.

use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

/// Processes scheduled work and re-renders until `span` of tokio time passes.
pub(crate) async fn pump(dom: &mut VirtualDom, span: Duration) {
    let deadline = tokio::time::Instant::now() + span;
    loop {
        tokio::select! {
            _ = dom.wait_for_work() => dom.render_immediate(&mut NoOpMutations),
            _ = tokio::time::sleep_until(deadline) => break,
        }
    }
}
