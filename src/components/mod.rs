//! UI components built with Leptos.
//!
//! - [`router`] - Route signal wiring (main entry point)
//! - [`shell`] - Persistent frame around every page
//! - [`sidebar`] - Side panel with the navigation menu
//! - [`header`] - Narrow-viewport header with the drawer trigger
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod header;
pub mod icons;
pub mod router;
pub mod shell;
pub mod sidebar;

pub use router::AppRouter;
