//! Utility modules for DOM and Web API access.

pub mod dom;
