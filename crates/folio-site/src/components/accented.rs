use dioxus::prelude::*;

use crate::theme::current_theme;

/// Lightening applied to accented prose.
pub const ACCENT_LIFT: i16 = 25;

/// Inline phrase in a lightened accent color, preceded by a space.
#[component]
pub fn Accented(children: Element) -> Element {
    let color = current_theme().accent.lumen(ACCENT_LIFT);
    rsx! {
        span { class: "accented", style: "color: {color}",
            " "
            {children}
        }
    }
}
