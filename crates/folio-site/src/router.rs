//! Route table and the shell layout around every page.

use dioxus::prelude::*;
use folio_core::Page;

use crate::config::site_config;
use crate::pages::{About, Contact, Home, Projects};
use crate::theme::ThemedRoot;

/// Routable pages. Paths match [`Page::path`].
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum SiteRoute {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Page> for SiteRoute {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => SiteRoute::Home {},
            Page::About => SiteRoute::About {},
            Page::Projects => SiteRoute::Projects {},
            Page::Contact => SiteRoute::Contact {},
        }
    }
}

impl From<&SiteRoute> for Page {
    fn from(route: &SiteRoute) -> Self {
        match route {
            SiteRoute::Home {} | SiteRoute::NotFound { .. } => Page::Home,
            SiteRoute::About {} => Page::About,
            SiteRoute::Projects {} => Page::Projects,
            SiteRoute::Contact {} => Page::Contact,
        }
    }
}

/// Layout wrapping every page in the themed root.
#[component]
fn Shell() -> Element {
    let router = use_navigator();

    // Jump to the configured start page once, after the first render.
    use_effect(move || {
        let start = site_config().start_page;
        if start != Page::Home {
            tracing::info!(page = %start, "Opening start page");
            router.replace(SiteRoute::from(start));
        }
    });

    rsx! {
        ThemedRoot {
            main { class: "site",
                Outlet::<SiteRoute> {}
            }
        }
    }
}

/// Unknown paths render the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route, showing home");
    rsx! {
        Home {}
    }
}
