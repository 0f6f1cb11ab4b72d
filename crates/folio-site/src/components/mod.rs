//! Presentational components.

mod accented;
mod colored_line;
mod header;
mod next_button;
mod project_card;
mod scaffold;
mod shapes;
mod spacer;

pub use accented::*;
pub use colored_line::*;
pub use header::*;
pub use next_button::*;
pub use project_card::*;
pub use scaffold::*;
pub use shapes::*;
pub use spacer::*;
