//! About page with the live "since last title" counter and puzzle hovers.

use chrono::Utc;
use dioxus::prelude::*;
use folio_core::content::{CLOCK_PERIOD, Puzzle, birthday, last_title_day};
use folio_core::{Elapsed, Page, whole_years_since};

use crate::components::{Accented, Scaffold};
use crate::hooks::{use_interval, use_scroll_navigation};
use crate::theme::current_theme;

/// A puzzle under the cursor and the cursor's client position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuzzleHover {
    pub puzzle: Puzzle,
    pub x: f64,
    pub y: f64,
}

#[component]
pub fn About() -> Element {
    let theme = current_theme();
    let scroll = use_scroll_navigation(Page::About);

    let mut elapsed = use_signal(|| Elapsed::since(last_title_day()));
    use_interval(CLOCK_PERIOD, move || elapsed.set(Elapsed::since(last_title_day())));

    let hover = use_signal(|| None::<PuzzleHover>);
    let age = whole_years_since(birthday(), Utc::now());
    let since = elapsed();

    rsx! {
        div {
            class: "page",
            onwheel: move |evt| scroll.on_wheel(evt),
            Scaffold { page: Page::About,
                div { class: "about-container",
                    p { class: "about-text", style: "color: {theme.text}",
                        "I'm a {age} year old graduate student at"
                        Accented { "Iowa State University" }
                        ". I'm currently pursuing a master's degree in"
                        Accented { "Artificial Intelligence" }
                        br {}
                        "My fascination with AI began before I began my undergrad journey, when I stumbled upon a"
                        Accented { "Deep Learning" }
                        " course on Coursera, and I was instantly hooked."
                        br {}
                        br {}
                        "Over the years I've developed projects spanning across various domains, including but certainly not limited to"
                        Accented { "Computer Vision" }
                        ","
                        Accented { "Natural Language Processing" }
                        ", and"
                        Accented { "Reinforcement Learning" }
                        "."
                        br {}
                        "I'd love to apply my skills to real-world problems and am always on the lookout for new opportunities!"
                        br {}
                        br {}
                        "Currently, I'm working on a couple of projects:"
                        br {}
                        "•"
                        Accented { "Evaluation of Note-taking" }
                        " - A"
                        Accented { "NLP-based Classifier" }
                        " to determine if the attendees of a lecture are able to capture all the important key points addressed."
                        br {}
                        "•"
                        Accented { "AI Commentator" }
                        " - Commentary system powered by"
                        Accented { "GenAI" }
                        " that generates realistic, engaging commentary in the style of the undisputed GOAT, Peter Drury."
                        br {}
                        br {}
                        "While I'm not busy racking my brain with projects and assignments, you'll probably find me:"
                        br {}
                        "• Unwinding at the"
                        Accented { "Gym" }
                        ", working on my fitness and trying to demolish my PRs!"
                        br {}
                        "• Watching my favorite football team,"
                        Accented { "Arsenal" }
                        " fumble yet another Premier League title."
                        br {}
                        span { class: "hidden-bullet", "•" }
                        " (It's been"
                        Accented { "{since}" }
                        " since they last won the title!)"
                        br {}
                        "• Getting my brain twisted (and sometimes my fingers too) with puzzles like the"
                        PuzzleName { puzzle: Puzzle::Mastermorphix, hover }
                        ","
                        PuzzleName { puzzle: Puzzle::Megaminx, hover }
                        ", and"
                        PuzzleName { puzzle: Puzzle::Square1, hover }
                    }
                    PuzzlePopup { hover }
                }
            }
        }
    }
}

/// Accented puzzle name that tracks the cursor while hovered.
#[component]
fn PuzzleName(puzzle: Puzzle, hover: Signal<Option<PuzzleHover>>) -> Element {
    let mut on_enter = hover;
    let mut on_move = hover;
    let mut on_leave = hover;

    rsx! {
        span {
            class: "puzzle",
            onmouseenter: move |evt| {
                let point = evt.client_coordinates();
                on_enter.set(Some(PuzzleHover { puzzle, x: point.x, y: point.y }));
            },
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                if on_move.peek().is_some() {
                    on_move.set(Some(PuzzleHover { puzzle, x: point.x, y: point.y }));
                }
            },
            onmouseleave: move |_| on_leave.set(None),
            Accented { "{puzzle.display_name()}" }
        }
    }
}

/// Floating picture for the hovered puzzle.
#[component]
fn PuzzlePopup(hover: Signal<Option<PuzzleHover>>) -> Element {
    let Some(PuzzleHover { puzzle, x, y }) = hover() else {
        return rsx! {};
    };
    let image = puzzle.hover_image();
    let (left, top) = image.position_for(x, y);

    rsx! {
        div {
            class: "hover-image",
            style: "top: {top}px; left: {left}px;",
            img {
                class: "hover-image-picture",
                src: image.path,
                alt: puzzle.key(),
                width: "{image.width}",
                height: "{image.height}",
            }
        }
    }
}
