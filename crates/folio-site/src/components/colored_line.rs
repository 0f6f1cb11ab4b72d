//! Accent-colored divider.

use dioxus::prelude::*;
use folio_core::LayoutId;

use crate::theme::current_theme;

/// Full-width accent line. `entrance` is an inline animation declaration.
#[component]
pub fn ColoredLine(#[props(default)] entrance: String) -> Element {
    let accent = current_theme().accent;

    rsx! {
        div {
            class: "colored-line",
            "data-layout-id": LayoutId::Line.as_str(),
            style: "background: {accent}; {entrance}",
        }
    }
}
