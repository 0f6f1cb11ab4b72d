//! The four routed pages.

mod about;
mod contact;
mod home;
mod projects;

pub use about::*;
pub use contact::*;
pub use home::*;
pub use projects::*;
