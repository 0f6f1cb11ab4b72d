//! Hooks shared by the pages.

mod schedule;
mod scroll;

#[cfg(test)]
mod testing;

pub use schedule::*;
pub use scroll::*;
