//! The four routed pages and their scroll-order cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// A routed page. Declaration order is the scroll order, which wraps
/// around from the last page to the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    const CYCLE: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    /// Returns all pages in scroll order.
    pub fn all() -> &'static [Page] {
        &Self::CYCLE
    }

    /// Returns the route path for this page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
        }
    }

    fn position(self) -> usize {
        Self::CYCLE
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default()
    }

    /// The page reached by scrolling down.
    pub fn next(self) -> Page {
        Self::CYCLE[(self.position() + 1) % Self::CYCLE.len()]
    }

    /// The page reached by scrolling up.
    pub fn previous(self) -> Page {
        let len = Self::CYCLE.len();
        Self::CYCLE[(self.position() + len - 1) % len]
    }

    pub fn neighbors(self) -> Neighbors {
        Neighbors {
            previous: self.previous(),
            next: self.next(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Page {
    type Err = FolioError;

    /// Accepts a path with or without the leading slash; a trailing slash
    /// is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        match trimmed {
            "" | "home" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "projects" => Ok(Page::Projects),
            "contact" => Ok(Page::Contact),
            _ => Err(FolioError::UnknownRoute(s.to_string())),
        }
    }
}

/// Scroll targets for one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Page,
    pub next: Page,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        assert_eq!(
            Page::Home.neighbors(),
            Neighbors {
                previous: Page::Contact,
                next: Page::About,
            }
        );
        assert_eq!(
            Page::About.neighbors(),
            Neighbors {
                previous: Page::Home,
                next: Page::Projects,
            }
        );
        assert_eq!(
            Page::Projects.neighbors(),
            Neighbors {
                previous: Page::About,
                next: Page::Contact,
            }
        );
        assert_eq!(
            Page::Contact.neighbors(),
            Neighbors {
                previous: Page::Projects,
                next: Page::Home,
            }
        );
    }

    #[test]
    fn test_cycle_has_period_four() {
        for page in Page::all() {
            let mut p = *page;
            for _ in 0..4 {
                p = p.next();
            }
            assert_eq!(p, *page);
            assert_eq!(page.next().previous(), *page);
        }
    }

    #[test]
    fn test_path_parse() {
        for page in Page::all() {
            assert_eq!(page.path().parse::<Page>().unwrap(), *page);
        }
        assert_eq!("about/".parse::<Page>().unwrap(), Page::About);
        assert_eq!("".parse::<Page>().unwrap(), Page::Home);
        assert_eq!(
            "/blog".parse::<Page>(),
            Err(FolioError::UnknownRoute("/blog".to_string()))
        );
    }
}
