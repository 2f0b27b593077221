//! Spinning a triangle about its centroid.
//!
//! Step `n` rotates every base vertex by `n * step` around the centroid and
//! rounds to the nearest cell. Results may be negative or off the surface;
//! the rasterizer clips them.

use crate::types::{Point2D, Triangle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    centroid: (f64, f64),
    offsets: [(f64, f64); 3],
    step_radians: f64,
}

impl Spinner {
    pub fn new(base: Triangle, step_degrees: f32) -> Self {
        let [v0, v1, v2] = base.vertices();
        let cx = (v0.x as f64 + v1.x as f64 + v2.x as f64) / 3.0;
        let cy = (v0.y as f64 + v1.y as f64 + v2.y as f64) / 3.0;
        let offset = |v: Point2D| (v.x as f64 - cx, v.y as f64 - cy);
        Self {
            centroid: (cx, cy),
            offsets: [offset(v0), offset(v1), offset(v2)],
            step_radians: (step_degrees as f64).to_radians(),
        }
    }

    pub fn centroid(&self) -> (f64, f64) {
        self.centroid
    }

    /// Rotation at `step` in radians, wrapped to `[0, 2π)`.
    fn angle(&self, step: i64) -> f64 {
        (step as f64 * self.step_radians).rem_euclid(std::f64::consts::TAU)
    }

    /// Rotation at `step`, in degrees, wrapped to `[0, 360)`.
    pub fn angle_degrees(&self, step: i64) -> f32 {
        self.angle(step).to_degrees() as f32
    }

    pub fn triangle_at(&self, step: i64) -> Triangle {
        let (sin, cos) = self.angle(step).sin_cos();
        let (cx, cy) = self.centroid;
        // `as` saturates, so far-off results pin to the i32 range.
        let rotate = |(dx, dy): (f64, f64)| {
            Point2D::new(
                (cx + dx * cos - dy * sin).round() as i32,
                (cy + dx * sin + dy * cos).round() as i32,
            )
        };
        let [o0, o1, o2] = self.offsets;
        Triangle::new(rotate(o0), rotate(o1), rotate(o2))
    }
}
