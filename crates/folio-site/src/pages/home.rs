//! Landing page with the intro animation and rotating greeting.

use dioxus::prelude::*;
use folio_core::content::{GREETING_PERIOD, GREETINGS, HINT_DELAY, OWNER_NAME, next_greeting};
use folio_core::motion::{HOME_INTRO, Keyframes, fade};
use folio_core::{LayoutId, Page};

use crate::components::{ColoredLine, HomeShapes, NextButton, Spacer};
use crate::config::ANIMATIONS_DISABLED;
use crate::hooks::{use_interval, use_scroll_navigation, use_timeout};
use crate::theme::{current_theme, set_random_accent, toggle_theme};

#[component]
pub fn Home() -> Element {
    let theme = current_theme();
    let scroll = use_scroll_navigation(Page::Home);
    let disabled = *ANIMATIONS_DISABLED.read();

    let mut greeting = use_signal(|| 0usize);
    use_interval(GREETING_PERIOD, move || {
        greeting.with_mut(|i| *i = next_greeting(*i));
    });

    let mut show_hint = use_signal(|| false);
    use_timeout(HINT_DELAY, move || show_hint.set(true));

    let line_entrance = if disabled {
        String::new()
    } else {
        HOME_INTRO.line.css_animation(Keyframes::GrowWidth)
    };
    let shapes_style = fade(HOME_INTRO.shapes, disabled);
    let name_style = fade(HOME_INTRO.text, disabled);
    let button_style = fade(HOME_INTRO.button, disabled);
    let hint_style = HOME_INTRO.hint.css_animation(Keyframes::FadeIn);
    let current_greeting = GREETINGS[greeting()];

    rsx! {
        div {
            class: "fill flex flex-center-children",
            onwheel: move |evt| scroll.on_wheel(evt),
            div { class: "flex-col",
                ColoredLine { entrance: line_entrance }
                Spacer { vertical: 26 }
                div { class: "home-content",
                    div {
                        class: "home-shapes",
                        "data-layout-id": LayoutId::Shapes.as_str(),
                        style: "{shapes_style}",
                        onclick: move |_| toggle_theme(),
                        HomeShapes { fill: theme.accent }
                    }
                    Spacer { vertical: 6 }
                    div { class: "helper-text", style: "color: {theme.text}",
                        Greeting { text: current_greeting }
                        span { class: "greeting-tail", "I'm" }
                    }
                    Spacer { vertical: 6 }
                    p {
                        class: "name-text",
                        "data-layout-id": LayoutId::Title2.as_str(),
                        style: "color: {theme.accent}; {name_style}",
                        onclick: move |_| set_random_accent(),
                        onanimationend: move |_| {
                            if !*ANIMATIONS_DISABLED.peek() {
                                tracing::debug!("Home intro finished");
                                *ANIMATIONS_DISABLED.write() = true;
                            }
                        },
                        "{OWNER_NAME}"
                    }
                    Spacer { vertical: 24 }
                    div { class: "hint-anchor",
                        NextButton { to: Page::About, entrance: button_style }
                        if show_hint() {
                            div {
                                class: "hint-text",
                                style: "color: {theme.text}; {hint_style}",
                                "scroll or click!"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The current greeting. Keyed by its text so every rotation mounts a
/// fresh span and replays the fade.
#[component]
fn Greeting(text: &'static str) -> Element {
    rsx! {
        for text in [text] {
            span { key: "{text}", class: "greeting", "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::core::Mutation;

    use super::*;

    #[component]
    fn RotatingHost() -> Element {
        let mut index = use_signal(|| 0usize);
        use_timeout(Duration::from_millis(10), move || {
            index.with_mut(|i| *i = next_greeting(*i))
        });
        rsx! {
            Greeting { text: GREETINGS[index()] }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotation_mounts_a_new_greeting() {
        let mut dom = VirtualDom::new(RotatingHost);
        dom.rebuild_in_place();

        dom.wait_for_work().await;
        let mutations = dom.render_immediate_to_vec();

        assert!(
            mutations
                .edits
                .iter()
                .any(|m| matches!(m, Mutation::LoadTemplate { .. })),
            "expected a fresh span, got {:?}",
            mutations.edits
        );
        assert!(
            !mutations
                .edits
                .iter()
                .any(|m| matches!(m, Mutation::SetText { .. })),
            "greeting text was patched in place"
        );
    }
}
