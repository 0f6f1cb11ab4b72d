use dioxus::prelude::*;
use folio_core::Page;
use folio_core::content::PROJECTS;

use crate::components::{ProjectCard, Scaffold};
use crate::hooks::use_scroll_navigation;

#[component]
pub fn Projects() -> Element {
    let scroll = use_scroll_navigation(Page::Projects);

    rsx! {
        div {
            class: "page",
            onwheel: move |evt| scroll.on_wheel(evt),
            Scaffold { page: Page::Projects,
                div { class: "project-holder",
                    for project in PROJECTS {
                        ProjectCard { key: "{project.name}", project }
                    }
                }
            }
        }
    }
}
