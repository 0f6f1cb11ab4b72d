//! Repository-style project card.

use dioxus::prelude::*;
use folio_core::content::Project;

use super::Spacer;
use crate::theme::current_theme;

/// Background lift while hovered.
const HOVER_LIFT: i16 = 20;

/// Card for one project, linking to its repository in a new tab.
#[component]
pub fn ProjectCard(project: Project) -> Element {
    let theme = current_theme();
    let mut hovered = use_signal(|| false);

    let (background, border) = if hovered() {
        (theme.background.lumen(HOVER_LIFT), "8px solid #3c3e3d")
    } else {
        (theme.background, "2px solid #303030")
    };

    rsx! {
        a {
            href: project.link,
            target: "_blank",
            rel: "noopener noreferrer",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            div {
                class: "project-card",
                style: "background: {background}; border: {border};",
                div { class: "project-content",
                    div { class: "flex align-items-center",
                        svg {
                            class: "book-icon",
                            view_box: "0 0 14 18",
                            xmlns: "http://www.w3.org/2000/svg",
                            path {
                                d: "M2 1h10v16H3a1 1 0 0 1-1-1z",
                                fill: "none",
                                stroke: "{theme.text}",
                                stroke_width: "1.5",
                            }
                        }
                        Spacer { horizontal: 15 }
                        p { class: "repo-name", style: "color: {theme.text}", "{project.name}" }
                    }
                    Spacer { vertical: 12 }
                    p { class: "repo-description", style: "color: {theme.text}", "{project.description}" }
                    Spacer { grow: true }
                    div { class: "flex align-items-center",
                        div {
                            class: "language-swatch",
                            style: "background-color: {project.language_color}",
                        }
                        Spacer { horizontal: 10 }
                        p { class: "language-name", style: "color: {theme.text}", "{project.language}" }
                    }
                }
            }
        }
    }
}
