pub use color::parse_color;
pub use display::{Display, DisplayError};

mod color;
mod display;
