//! tri-raster (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts the pieces only the
//! binary needs: environment configuration and logging setup.

pub use tri_raster_core as core;
pub use tri_raster_input as input;
pub use tri_raster_term as term;
pub use tri_raster_types as types;

pub mod config;
pub mod logging;
