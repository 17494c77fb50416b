pub mod error;
pub mod validate;

pub mod color;
pub mod palette;
pub mod scale;

pub use crate::color::format::ColorFormat;
pub use crate::color::space::Channels;
pub use crate::error::{HueError, Result};
pub use crate::palette::palette::ColorPalette;
pub use crate::scale::linear::LinearScale;
