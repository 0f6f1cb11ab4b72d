use dioxus::prelude::*;
use folio_core::Page;
use folio_core::content::header_words;

use super::{Header, NextButton, Spacer};

/// Header, page body and a next button pointing at the following page.
#[component]
pub fn Scaffold(
    page: Page,
    children: Element,
    #[props(default)] rotated_button: bool,
    #[props(default)] large_button: bool,
) -> Element {
    let (first, second) = header_words(page).unwrap_or(("", ""));

    rsx! {
        div { class: "scaffold",
            Header { first: first.to_string(), second: second.to_string() }
            Spacer { vertical: 24 }
            div { class: "scaffold-body", {children} }
            Spacer { vertical: 24 }
            NextButton { to: page.next(), rotated: rotated_button, large: large_button }
            Spacer { vertical: 32 }
        }
    }
}
