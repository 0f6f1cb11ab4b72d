//! Theme icons drawn inline so they take the accent color.

use dioxus::prelude::*;
use folio_core::Rgb;

/// Sun icon shown while the light palette is active.
#[component]
pub fn SunShape(fill: Rgb) -> Element {
    rsx! {
        svg {
            class: "shapes",
            view_box: "0 0 100 100",
            xmlns: "http://www.w3.org/2000/svg",
            circle { cx: "50", cy: "50", r: "22", fill: "{fill}" }
            for angle in (0..360).step_by(45) {
                rect {
                    key: "{angle}",
                    x: "47",
                    y: "4",
                    width: "6",
                    height: "16",
                    rx: "3",
                    fill: "{fill}",
                    transform: "rotate({angle} 50 50)",
                }
            }
        }
    }
}

/// Moon icon shown while the dark palette is active.
#[component]
pub fn MoonShape(fill: Rgb) -> Element {
    rsx! {
        svg {
            class: "shapes",
            view_box: "0 0 100 100",
            xmlns: "http://www.w3.org/2000/svg",
            path {
                d: "M62 8a42 42 0 1 0 30 66A34 34 0 0 1 62 8z",
                fill: "{fill}",
                stroke: "white",
                stroke_width: "2",
            }
        }
    }
}

/// The home page mark: three overlapping shapes.
#[component]
pub fn HomeShapes(fill: Rgb) -> Element {
    rsx! {
        svg {
            class: "shapes shapes-home",
            view_box: "0 0 120 100",
            xmlns: "http://www.w3.org/2000/svg",
            circle { cx: "28", cy: "50", r: "24", fill: "{fill}" }
            rect { x: "44", y: "26", width: "40", height: "48", rx: "6", fill: "{fill}", opacity: "0.8" }
            path { d: "M96 26 L118 74 L74 74 Z", fill: "{fill}", opacity: "0.6" }
        }
    }
}
