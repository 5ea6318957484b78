//! HTTP handlers.

pub mod items;
pub use items::*;
