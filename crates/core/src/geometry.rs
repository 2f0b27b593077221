//! Integer geometry helpers used by the rasterizer.

use crate::types::Point2D;

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `(a, b, c)` winds counter-clockwise on a y-down surface,
/// zero when the points are collinear. Differences of `i32` coordinates need
/// 33 bits and their products 65, so the arithmetic runs in `i128` and is
/// exact for every input.
#[inline(always)]
pub fn orientation(a: Point2D, b: Point2D, c: Point2D) -> i128 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    let (bx, by) = (b.x as i128, b.y as i128);
    let (cx, cy) = (c.x as i128, c.y as i128);
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

#[inline(always)]
pub fn min2(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

#[inline(always)]
pub fn max2(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

#[inline(always)]
pub fn min3(a: i32, b: i32, c: i32) -> i32 {
    min2(min2(a, b), c)
}

#[inline(always)]
pub fn max3(a: i32, b: i32, c: i32) -> i32 {
    max2(max2(a, b), c)
}
