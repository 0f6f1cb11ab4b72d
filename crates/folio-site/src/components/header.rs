//! Page header: theme icon plus a two-word title.

use dioxus::prelude::*;
use folio_core::motion::Keyframes;
use folio_core::{LayoutId, Transition};

use super::{ColoredLine, MoonShape, Spacer, SunShape};
use crate::theme::{current_theme, set_random_accent, toggle_theme};

const ICON_SPIN: Transition = Transition::tween(600, 0);

/// Header with the theme toggle icon, `first` in the text color and
/// `second` in the accent. Clicking `second` randomizes the accent.
#[component]
pub fn Header(first: String, second: String) -> Element {
    let theme = current_theme();
    let mut has_clicked = use_signal(|| false);
    let [first_id, second_id] = LayoutId::for_title(&first, &second);

    // The icon only spins once the visitor has toggled it here.
    let icon_style = if has_clicked() {
        ICON_SPIN.css_animation(Keyframes::SpinIn)
    } else {
        String::new()
    };
    let icon_key = theme.kind.css_value();

    rsx! {
        div { class: "header",
            div { class: "flex full-width align-items-center",
                div {
                    class: "header-icon",
                    "data-layout-id": LayoutId::Shapes.as_str(),
                    onclick: move |_| {
                        has_clicked.set(true);
                        toggle_theme();
                    },
                    div {
                        key: "{icon_key}",
                        class: "header-icon-inner",
                        style: "{icon_style}",
                        if theme.is_light() {
                            SunShape { fill: theme.accent }
                        } else {
                            MoonShape { fill: theme.accent }
                        }
                    }
                }
                Spacer { horizontal: 14 }
                p {
                    class: "header-title",
                    "data-layout-id": first_id.as_str(),
                    style: "color: {theme.text}",
                    "{first}"
                }
                Spacer { horizontal: 8 }
                p {
                    class: "header-title header-title-accent",
                    "data-layout-id": second_id.as_str(),
                    style: "color: {theme.accent}",
                    onclick: move |_| set_random_accent(),
                    "{second}"
                }
            }
            Spacer { vertical: 12 }
            ColoredLine {}
        }
    }
}
