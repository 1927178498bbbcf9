//! Values shared by several parts of the configuration.
mod color;
mod window_info;
mod window_type;

pub use color::{Color, ColorRef, Palette};
pub use window_info::WindowInfo;
pub use window_type::WindowType;
