use dioxus::prelude::*;
use folio_core::{LayoutId, Page};

use crate::router::SiteRoute;
use crate::theme::current_theme;

/// Round arrow button linking to `to`.
///
/// `rotated` points the arrow up, for the link from the last page back to
/// the first. `entrance` is an inline animation declaration.
#[component]
pub fn NextButton(
    to: Page,
    #[props(default)] rotated: bool,
    #[props(default)] large: bool,
    #[props(default)] entrance: String,
) -> Element {
    let theme = current_theme();
    let mut class = String::from("next-button");
    if rotated {
        class.push_str(" next-button-rotated");
    }
    if large {
        class.push_str(" next-button-large");
    }

    rsx! {
        div {
            class: "next-button-holder",
            "data-layout-id": LayoutId::Button.as_str(),
            style: "{entrance}",
            Link {
                to: SiteRoute::from(to),
                class: "{class}",
                svg {
                    view_box: "0 0 24 24",
                    xmlns: "http://www.w3.org/2000/svg",
                    path {
                        d: "M12 4v14m0 0-6-6m6 6 6-6",
                        fill: "none",
                        stroke: "{theme.accent}",
                        stroke_width: "2.4",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                }
            }
        }
    }
}
