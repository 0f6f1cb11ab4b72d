use dioxus::prelude::*;

/// Fixed gap in either axis, or a flex filler when `grow` is set.
#[component]
pub fn Spacer(
    #[props(default)] vertical: u32,
    #[props(default)] horizontal: u32,
    #[props(default)] grow: bool,
) -> Element {
    rsx! {
        div { style: "{spacer_style(vertical, horizontal, grow)}" }
    }
}

fn spacer_style(vertical: u32, horizontal: u32, grow: bool) -> String {
    if grow {
        "flex-grow: 1;".to_string()
    } else {
        format!("min-height: {vertical}px; min-width: {horizontal}px;")
    }
}
