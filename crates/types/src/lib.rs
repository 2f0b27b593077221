//! Core types module - shared data structures and constants
//!
//! This module defines the plain value types used throughout the rasterizer.
//! Nothing here performs I/O, so the types are usable from the core, the
//! terminal layer and tests alike.
//!
//! # Coordinate Space
//!
//! Surface coordinates put the origin at the top-left cell:
//!
//! - **x** grows to the right (columns)
//! - **y** grows downwards (rows)
//!
//! # Reference Values
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 64 | Reference surface width in cells |
//! | `DEFAULT_HEIGHT` | 36 | Reference surface height in cells |
//! | `FRAME_MS` | 33 | Target frame interval (~30 FPS) |
//! | `STEP_DEGREES` | 3.0 | Rotation applied per animation step |
//!
//! # Examples
//!
//! ```
//! use tri_raster_types::{Point2D, SurfaceConfig, Triangle, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let surface = SurfaceConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
//! assert_eq!(surface.width(), 64);
//! assert!(surface.contains(Point2D::new(63, 35)));
//! assert!(!surface.contains(Point2D::new(64, 0)));
//!
//! let tri = Triangle::new(Point2D::new(17, 30), Point2D::new(5, 1), Point2D::new(20, 1));
//! assert_eq!(tri.reversed().vertices()[1], Point2D::new(20, 1));
//!
//! assert!(SurfaceConfig::new(0, 36).is_err());
//! ```

use std::fmt;

/// Reference surface width in cells.
pub const DEFAULT_WIDTH: i32 = 64;

/// Reference surface height in cells.
pub const DEFAULT_HEIGHT: i32 = 36;

/// Target frame interval for the animated viewer (33ms ≈ 30 FPS).
pub const FRAME_MS: u64 = 33;

/// Rotation applied per animation step, in degrees.
pub const STEP_DEGREES: f32 = 3.0;

/// Symbol of a cell no pass has written to.
pub const BACKGROUND_SYMBOL: char = ' ';

/// Symbol painted for covered cells.
pub const FILL_SYMBOL: char = '#';

/// Symbol painted for covered cells selected by a probe.
pub const PROBE_SYMBOL: char = '*';

/// Per-vertex symbols for the nearest-vertex brush (`v0`, `v1`, `v2`).
pub const VERTEX_SYMBOLS: [char; 3] = ['@', '%', '+'];

/// Reference triangle drawn when nothing else is configured.
pub const REFERENCE_TRIANGLE: Triangle = Triangle {
    v0: Point2D { x: 17, y: 30 },
    v1: Point2D { x: 5, y: 1 },
    v2: Point2D { x: 20, y: 1 },
};

/// Integer point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Three vertices in a fixed order.
///
/// The order decides the sign of the signed area but not which cells the
/// triangle covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub v0: Point2D,
    pub v1: Point2D,
    pub v2: Point2D,
}

impl Triangle {
    pub const fn new(v0: Point2D, v1: Point2D, v2: Point2D) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn vertices(&self) -> [Point2D; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Same triangle with the opposite winding (v0, v2, v1).
    pub fn reversed(&self) -> Self {
        Self {
            v0: self.v0,
            v1: self.v2,
            v2: self.v1,
        }
    }
}

/// Validated output surface dimensions.
///
/// Construction is the only place dimensions are checked; every holder of a
/// `SurfaceConfig` may assume `width > 0 && height > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    width: i32,
    height: i32,
}

impl SurfaceConfig {
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells on the surface.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Commands of the interactive viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    /// Freeze or resume the rotation.
    TogglePause,
    /// Advance one step (useful while paused).
    Step,
    /// Return to the unrotated triangle.
    Reset,
    /// Flip the spin direction.
    Reverse,
}

/// Configuration errors, raised before any frame is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// A setting could not be parsed.
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => write!(
                f,
                "surface dimensions must be positive, got {}x{}",
                width, height
            ),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
