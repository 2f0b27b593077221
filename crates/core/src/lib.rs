//! Core rasterization module - pure, deterministic, and testable
//!
//! This crate contains the triangle rasterizer and everything a render pass
//! needs around it. It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same triangle and surface always produce the same cells, in the same order
//! - **Testable**: Every coverage decision can be asserted cell by cell
//! - **Portable**: The surface can be shown on a terminal, written as text, or inspected headless
//!
//! # Module Structure
//!
//! - [`geometry`]: orientation (edge function) and integer min/max helpers
//! - [`raster`]: bounding box, clipping, barycentric coverage and the row-major scan
//! - [`surface`]: owned character grid written by a pass
//! - [`probe`]: instrumentation hook selecting cells by predicate
//! - [`paint`]: one render pass (clear, rasterize, paint with a brush)
//! - [`anim`]: rotation of a triangle about its centroid
//!
//! # Coverage Rule
//!
//! A cell `p` is covered when the three barycentric weights
//!
//! ```text
//! w0 = orient(v1, v2, p) / area
//! w1 = orient(v2, v0, p) / area
//! w2 = orient(v0, v1, p) / area
//! ```
//!
//! are all `>= 0`. Cells on an edge are covered, so two triangles sharing an
//! edge both cover the cells on it. Zero-area triangles are skipped and
//! reported as [`RasterOutcome::Degenerate`].
//!
//! # Example
//!
//! ```
//! use tri_raster_core::{covered_cells, Painter, Surface};
//! use tri_raster_core::types::{SurfaceConfig, REFERENCE_TRIANGLE};
//!
//! let config = SurfaceConfig::default();
//!
//! // Lazily scan covered cells in row-major order.
//! let first = covered_cells(&REFERENCE_TRIANGLE, config).next().unwrap();
//! assert_eq!((first.x, first.y), (5, 1));
//!
//! // Or run a whole pass into a surface.
//! let mut surface = Surface::new(config);
//! let outcome = Painter::default().render(&mut surface, &REFERENCE_TRIANGLE);
//! assert_eq!(outcome.covered(), surface.count('#'));
//! ```

pub mod anim;
pub mod geometry;
pub mod paint;
pub mod probe;
pub mod raster;
pub mod surface;

pub use tri_raster_types as types;

// Re-export commonly used items for convenience
pub use anim::Spinner;
pub use geometry::{max2, max3, min2, min3, orientation};
pub use paint::{Brush, Painter};
pub use probe::{NoProbe, RasterProbe, TracingProbe};
pub use raster::{
    covered_cells, rasterize, rasterize_probed, BoundingBox, CellSample, CoveredCells,
    RasterOutcome, Scan, TriangleSetup,
};
pub use surface::Surface;
