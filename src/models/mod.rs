//! Data models and types for the shell.
//!
//! - [`NavEntry`], [`active_entry`] - Navigation menu and highlighting
//! - [`Route`] - Hash-based route supplied by the host router
//! - [`Theme`] - Light/dark presentation state

mod nav;
mod route;
mod theme;

pub use nav::{NavEntry, active_entry};
pub use route::Route;
pub use theme::Theme;
