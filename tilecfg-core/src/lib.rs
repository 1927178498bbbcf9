//! Schema of a tiling window manager configuration.
//!
//! Everything here is plain data: key and mouse bindings, groups, layouts, bars
//! and their widgets, float rules and global flags. The host runtime reads it
//! through the [`Config`] trait and owns all behaviour. The only logic kept on
//! this side is what has to be shared between the configuration and the host:
//! guard evaluation at trigger time ([`dispatch`]) and float rule matching.
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]
mod command;
pub mod config;
mod dispatch;
pub mod errors;
pub mod models;
pub mod utils;

pub use command::{Backend, Command, Guard, LayoutCommand, LazyCall, WindowCommand};
pub use config::Config;
pub use dispatch::{dispatch, find_binding, Dispatched, Host};
