//! Contact links.

use dioxus::prelude::*;
use folio_core::Page;
use folio_core::content::{LINKEDIN, PORTFOLIO_SOURCE, mailto};

use crate::components::{Accented, Scaffold};
use crate::hooks::use_scroll_navigation;
use crate::theme::current_theme;

/// Lightening applied to contact links.
const LINK_LIFT: i16 = 32;

#[component]
pub fn Contact() -> Element {
    let theme = current_theme();
    let scroll = use_scroll_navigation(Page::Contact);

    rsx! {
        div {
            class: "page",
            onwheel: move |evt| scroll.on_wheel(evt),
            Scaffold { page: Page::Contact, rotated_button: true, large_button: true,
                p { class: "contact-text", style: "color: {theme.text}",
                    "Like what you see?"
                    br {}
                    "Then let's connect on "
                    ContactLink { to: LINKEDIN.to_string(), text: "LinkedIn" }
                    "!"
                    br {}
                    "You can also reach out via "
                    ContactLink { to: mailto(), text: "email" }
                    br {}
                    br {}
                    "("
                    Accented { "PSSST!" }
                    " Have you tried clicking the shapes or the"
                    Accented { "colored text" }
                    " on the header?)"
                    br {}
                    br {}
                    "Source for this portfolio is "
                    ContactLink { to: PORTFOLIO_SOURCE.to_string(), text: "here" }
                    "."
                    br {}
                    "Thanks for stopping by!"
                }
            }
        }
    }
}

/// External link in the lifted accent color, opening in a new tab.
#[component]
fn ContactLink(to: String, text: &'static str) -> Element {
    let color = current_theme().accent.lumen(LINK_LIFT);
    rsx! {
        a {
            class: "contact-link",
            href: "{to}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "color: {color}; opacity: 0.8;",
            "{text}"
        }
    }
}
