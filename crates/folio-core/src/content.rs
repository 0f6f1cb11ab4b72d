//! Static site content.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::route::Page;

pub const OWNER_NAME: &str = "Rohail Alam";

pub const PORTFOLIO_SOURCE: &str = "https://github.com/kmvolv/folio-site";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/rohail-alam/";
pub const EMAIL: &str = "rohail03@iastate.edu";

const BIRTHDAY: NaiveDate = NaiveDate::from_ymd_opt(2002, 7, 3).expect("valid date");
const LAST_TITLE: NaiveDate = NaiveDate::from_ymd_opt(2005, 4, 25).expect("valid date");

/// Midnight UTC of the owner's birthday.
pub fn birthday() -> DateTime<Utc> {
    BIRTHDAY.and_time(NaiveTime::MIN).and_utc()
}

/// Midnight UTC of the reference date the about page counts up from.
pub fn last_title_day() -> DateTime<Utc> {
    LAST_TITLE.and_time(NaiveTime::MIN).and_utc()
}

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// Greetings cycled on the home page.
pub const GREETINGS: [&str; 13] = [
    "Hello!",
    "Bonjour!",
    "Olá!",
    "नमस्ते!",
    "Ciao!",
    "السلام عليكم",
    "你好!",
    "Hallo!",
    "Привет!",
    "Γειά σου!",
    "Hej!",
    "Merhaba!",
    "שלום!",
];

pub const GREETING_PERIOD: Duration = Duration::from_secs(2);
pub const HINT_DELAY: Duration = Duration::from_millis(3500);
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Index of the greeting following `index`, wrapping around.
pub fn next_greeting(index: usize) -> usize {
    (index + 1) % GREETINGS.len()
}

/// Two-word header shown on a page, or `None` for the home page.
pub fn header_words(page: Page) -> Option<(&'static str, &'static str)> {
    match page {
        Page::Home => None,
        Page::About => Some(("about", "me")),
        Page::Projects => Some(("my", "projects")),
        Page::Contact => Some(("contact", "me")),
    }
}

/// A project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub language: &'static str,
    /// Any CSS color.
    pub language_color: &'static str,
}

pub const PROJECTS: [Project; 9] = [
    Project {
        name: "NLP-Paper-Classifier",
        description: "BERT-based research paper classifier using an LLM API for augmentation",
        link: "https://github.com/kmvolv/NLP-Paper-Classifier",
        language: "NLP, MS Azure",
        language_color: "#2b7489",
    },
    Project {
        name: "Biological Cell Counter",
        description: "A Vision Transformer based cell counting for microscopy images",
        link: "https://github.com/IAmHedgehog/571Counting/tree/main/MAN",
        language: "VGG-19 Transformer",
        language_color: "rgb(222, 165, 132)",
    },
    Project {
        name: "board-defect-detector",
        description: "A GUI to upload PCB images and localize defects present on them",
        link: "https://github.com/kmvolv/Automated-Board-Defect-Detection",
        language: "YOLOv8",
        language_color: "#a97bff",
    },
    Project {
        name: "tkinter-poly-anno",
        description: "A polygonal annotation tool for images using Tkinter",
        link: "https://github.com/kmvolv/tkinter-poly-anno",
        language: "Tkinter",
        language_color: "#5e5086",
    },
    Project {
        name: "Vigrah",
        description: "Smart India Hackathon Grand Finale Project + Research Paper",
        link: "https://github.com/yash-agrawal20/SIH2022-Finals-Vigrah",
        language: "MobileNet",
        language_color: "#d4af37",
    },
    Project {
        name: "FunSwap",
        description: "Real-time face swapping application with interactive GUI",
        link: "https://github.com/kmvolv/FunSwap",
        language: "Mediapipe, Tkinter",
        language_color: "#00add8",
    },
    Project {
        name: "remBot",
        description: "A Whatsapp bot that reminds users of upcoming coding contests",
        link: "https://github.com/kmvolv/remBot",
        language: "NodeJS",
        language_color: "#89e051",
    },
    Project {
        name: "oldSchoolChef",
        description: "A simple browser extension that brings back the old UI of Codechef",
        link: "https://github.com/kmvolv/oldSchoolChef",
        language: "JavaScript",
        language_color: "#ffde21",
    },
    Project {
        name: "laptop-price-predict",
        description: "A regression model trained on scraped data from Flipkart",
        link: "https://github.com/kmvolv/laptop-price-predict",
        language: "Regression, Web Scraping",
        language_color: "#123456",
    },
];

/// Puzzles on the about page that reveal a picture on hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Puzzle {
    Mastermorphix,
    Megaminx,
    Square1,
}

/// Hover picture placement relative to the cursor, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverImage {
    pub path: &'static str,
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: u32,
    pub height: u32,
}

impl Puzzle {
    pub fn all() -> &'static [Puzzle] {
        &[Puzzle::Mastermorphix, Puzzle::Megaminx, Puzzle::Square1]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Puzzle::Mastermorphix => "Mastermorphix",
            Puzzle::Megaminx => "Megaminx",
            Puzzle::Square1 => "Square-1",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Puzzle::Mastermorphix => "mastermorphix",
            Puzzle::Megaminx => "megaminx",
            Puzzle::Square1 => "square1",
        }
    }

    pub fn hover_image(&self) -> HoverImage {
        match self {
            Puzzle::Mastermorphix => HoverImage {
                path: "/mastermorphix.jpg",
                offset_x: -100,
                offset_y: -195,
                width: 200,
                height: 175,
            },
            Puzzle::Megaminx => HoverImage {
                path: "/megaminx.jpg",
                offset_x: -100,
                offset_y: -220,
                width: 200,
                height: 200,
            },
            Puzzle::Square1 => HoverImage {
                path: "/square1.jpg",
                offset_x: -100,
                offset_y: -170,
                width: 200,
                height: 150,
            },
        }
    }
}

impl HoverImage {
    /// Top-left corner of the picture for a cursor at `(x, y)`.
    pub fn position_for(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.offset_x as f64, y + self.offset_y as f64)
    }
}
