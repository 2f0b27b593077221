//! Terminal input module for the interactive viewer.
//!
//! Maps `crossterm` key events into [`crate::types::ViewerAction`]s. Quitting is
//! handled separately by [`should_quit`] so the loop can exit before any action
//! is applied.

pub mod map;

pub use tri_raster_types as types;

pub use map::{handle_key_event, should_quit};
