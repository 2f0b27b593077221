//! Terminal presentation of a rasterized surface.
//!
//! The core writes plain symbols into a [`tri_raster_core::Surface`]. This crate
//! turns that surface into something a person can look at:
//!
//! - [`SurfaceView`] maps the surface into a styled [`FrameBuffer`] (pure, no I/O)
//! - [`TerminalRenderer`] flushes framebuffers through crossterm with diffing
//! - [`write_surface`] prints the surface as plain text, one row per line
//! - [`FramePacer`] schedules passes at a fixed cadence

pub mod fb;
pub mod pacer;
pub mod renderer;
pub mod surface_view;
pub mod text;

pub use tri_raster_core as core;
pub use tri_raster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use pacer::FramePacer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface_view::{FrameStatus, Palette, SurfaceView, Viewport};
pub use text::write_surface;
