//! The configuration assembled for the window manager: key bindings, groups,
//! layouts, the status bar and global flags, plus the checks run against them.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]
mod config;
pub mod palette;
pub mod terminal;
pub mod utils;

pub use config::*;
