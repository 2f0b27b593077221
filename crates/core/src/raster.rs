//! Bounding-box scan conversion with barycentric coverage.
//!
//! A pass goes through three stages:
//!
//! 1. [`TriangleSetup::new`] computes the signed area and the bounding box,
//!    clipped to the surface. Zero-area and fully off-surface triangles stop here.
//! 2. [`Scan`] walks every cell of the clipped box in row-major order and
//!    produces a [`CellSample`] with the three barycentric weights.
//! 3. Samples whose weights are all `>= 0` are covered.
//!
//! Clipping happens before the scan, so every emitted coordinate lies on the
//! surface and writers need no per-cell bounds check.

use crate::geometry::{max2, max3, min2, min3, orientation};
use crate::probe::{NoProbe, RasterProbe};
use crate::types::{Point2D, SurfaceConfig, Triangle};

/// Inclusive axis-aligned cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn of_triangle(tri: &Triangle) -> Self {
        let [v0, v1, v2] = tri.vertices();
        Self {
            min_x: min3(v0.x, v1.x, v2.x),
            min_y: min3(v0.y, v1.y, v2.y),
            max_x: max3(v0.x, v1.x, v2.x),
            max_y: max3(v0.y, v1.y, v2.y),
        }
    }

    /// Intersect with the surface rectangle `[0, W-1] x [0, H-1]`.
    ///
    /// Returns `None` when nothing is left.
    pub fn clip(self, surface: SurfaceConfig) -> Option<Self> {
        let clipped = Self {
            min_x: max2(self.min_x, 0),
            min_y: max2(self.min_y, 0),
            max_x: min2(self.max_x, surface.width() - 1),
            max_y: min2(self.max_y, surface.height() - 1),
        };
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.max_x as i64 - self.min_x as i64 + 1) as usize
    }

    pub fn height(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.max_y as i64 - self.min_y as i64 + 1) as usize
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }
}

/// One visited cell and its barycentric weights.
///
/// `w0` belongs to the edge opposite `v0` (and so on); the weights sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    pub x: i32,
    pub y: i32,
    pub w0: f32,
    pub w1: f32,
    pub w2: f32,
}

impl CellSample {
    pub fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Inside or on an edge.
    #[inline(always)]
    pub fn is_covered(&self) -> bool {
        self.w0 >= 0.0 && self.w1 >= 0.0 && self.w2 >= 0.0
    }
}

/// Result of one rasterization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterOutcome {
    /// The clipped box was scanned.
    Scanned { visited: usize, covered: usize },
    /// The bounding box does not touch the surface.
    OffSurface,
    /// The vertices are collinear (zero signed area); nothing was scanned.
    Degenerate,
}

impl RasterOutcome {
    pub fn covered(&self) -> usize {
        match self {
            RasterOutcome::Scanned { covered, .. } => *covered,
            RasterOutcome::OffSurface | RasterOutcome::Degenerate => 0,
        }
    }

    pub fn visited(&self) -> usize {
        match self {
            RasterOutcome::Scanned { visited, .. } => *visited,
            RasterOutcome::OffSurface | RasterOutcome::Degenerate => 0,
        }
    }
}

/// Per-triangle state computed once before the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleSetup {
    Ready(Scan),
    OffSurface,
    Degenerate,
}

impl TriangleSetup {
    pub fn new(tri: &Triangle, surface: SurfaceConfig) -> Self {
        let area = orientation(tri.v0, tri.v1, tri.v2);
        if area == 0 {
            return TriangleSetup::Degenerate;
        }
        match BoundingBox::of_triangle(tri).clip(surface) {
            Some(bbox) => TriangleSetup::Ready(Scan::new(*tri, area as f32, bbox)),
            None => TriangleSetup::OffSurface,
        }
    }
}

/// Row-major walk over a clipped bounding box.
///
/// Yields a sample for every cell, covered or not. `area` is never zero:
/// only [`TriangleSetup`] builds a scan, after ruling out degenerate input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scan {
    tri: Triangle,
    area: f32,
    bbox: BoundingBox,
    x: i32,
    y: i32,
}

impl Scan {
    fn new(tri: Triangle, area: f32, bbox: BoundingBox) -> Self {
        Self {
            tri,
            area,
            bbox,
            x: bbox.min_x,
            y: bbox.min_y,
        }
    }

    #[inline(always)]
    fn sample(&self, p: Point2D) -> CellSample {
        let Triangle { v0, v1, v2 } = self.tri;
        CellSample {
            x: p.x,
            y: p.y,
            w0: orientation(v1, v2, p) as f32 / self.area,
            w1: orientation(v2, v0, p) as f32 / self.area,
            w2: orientation(v0, v1, p) as f32 / self.area,
        }
    }

    fn remaining(&self) -> usize {
        if self.y > self.bbox.max_y {
            return 0;
        }
        let rows_below = (self.bbox.max_y - self.y) as usize;
        let in_row = (self.bbox.max_x - self.x + 1) as usize;
        rows_below * self.bbox.width() + in_row
    }
}

impl Iterator for Scan {
    type Item = CellSample;

    fn next(&mut self) -> Option<CellSample> {
        if self.y > self.bbox.max_y {
            return None;
        }
        let sample = self.sample(Point2D::new(self.x, self.y));
        if self.x == self.bbox.max_x {
            self.x = self.bbox.min_x;
            self.y += 1;
        } else {
            self.x += 1;
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

/// Lazy row-major sequence of covered cells.
#[derive(Debug, Clone)]
pub struct CoveredCells {
    scan: Option<Scan>,
}

impl Iterator for CoveredCells {
    type Item = CellSample;

    fn next(&mut self) -> Option<CellSample> {
        let scan = self.scan.as_mut()?;
        scan.find(CellSample::is_covered)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.scan {
            Some(scan) => (0, scan.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

/// Covered cells of `tri` on `surface`, y ascending then x ascending.
///
/// Degenerate and off-surface triangles yield nothing.
pub fn covered_cells(tri: &Triangle, surface: SurfaceConfig) -> CoveredCells {
    let scan = match TriangleSetup::new(tri, surface) {
        TriangleSetup::Ready(scan) => Some(scan),
        TriangleSetup::OffSurface | TriangleSetup::Degenerate => None,
    };
    CoveredCells { scan }
}

/// Push every covered cell of `tri` into `sink`, in row-major order.
pub fn rasterize(
    tri: &Triangle,
    surface: SurfaceConfig,
    mut sink: impl FnMut(CellSample),
) -> RasterOutcome {
    rasterize_probed(tri, surface, &mut NoProbe, |cell, _| sink(cell))
}

/// Like [`rasterize`], also reporting every watched cell to `probe`.
///
/// The probe sees watched cells whether or not they are covered. The sink's
/// second argument tells whether the covered cell is watched.
pub fn rasterize_probed(
    tri: &Triangle,
    surface: SurfaceConfig,
    probe: &mut dyn RasterProbe,
    mut sink: impl FnMut(CellSample, bool),
) -> RasterOutcome {
    let scan = match TriangleSetup::new(tri, surface) {
        TriangleSetup::Ready(scan) => scan,
        TriangleSetup::Degenerate => {
            tracing::debug!(?tri, "skipping zero-area triangle");
            return RasterOutcome::Degenerate;
        }
        TriangleSetup::OffSurface => {
            tracing::debug!(?tri, "triangle lies outside the surface");
            return RasterOutcome::OffSurface;
        }
    };

    let mut visited = 0;
    let mut covered = 0;
    for sample in scan {
        visited += 1;
        let inside = sample.is_covered();
        let watched = probe.watches(sample.point());
        if watched {
            probe.observe(&sample, inside);
        }
        if inside {
            covered += 1;
            sink(sample, watched);
        }
    }

    tracing::trace!(visited, covered, "rasterized triangle");
    RasterOutcome::Scanned { visited, covered }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Triangle {
        Triangle::new(a.into(), b.into(), c.into())
    }

    fn surface(w: i32, h: i32) -> SurfaceConfig {
        SurfaceConfig::new(w, h).unwrap()
    }

    #[test]
    fn bounding_box_spans_all_vertices() {
        let bbox = BoundingBox::of_triangle(&tri((17, 30), (5, 1), (20, 1)));
        assert_eq!(
            bbox,
            BoundingBox {
                min_x: 5,
                min_y: 1,
                max_x: 20,
                max_y: 30
            }
        );
        assert_eq!(bbox.cell_count(), 16 * 30);
    }

    #[test]
    fn clip_clamps_to_surface() {
        let bbox = BoundingBox::of_triangle(&tri((-5, -3), (100, 2), (10, 50)));
        let clipped = bbox.clip(surface(64, 36)).unwrap();
        assert_eq!(
            clipped,
            BoundingBox {
                min_x: 0,
                min_y: 0,
                max_x: 63,
                max_y: 35
            }
        );
    }

    #[test]
    fn clip_of_disjoint_box_is_none() {
        let bbox = BoundingBox::of_triangle(&tri((-10, 0), (-5, 5), (-1, 2)));
        assert_eq!(bbox.clip(surface(64, 36)), None);

        let below = BoundingBox::of_triangle(&tri((0, 36), (10, 40), (5, 50)));
        assert_eq!(below.clip(surface(64, 36)), None);
    }

    #[test]
    fn scan_is_row_major_and_exact_sized() {
        let setup = TriangleSetup::new(&tri((0, 0), (2, 0), (0, 1)), surface(8, 8));
        let TriangleSetup::Ready(scan) = setup else {
            panic!("expected a scan, got {:?}", setup);
        };
        assert_eq!(scan.size_hint(), (6, Some(6)));
        let cells: Vec<(i32, i32)> = scan.map(|s| (s.x, s.y)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn weights_sum_to_one() {
        let setup = TriangleSetup::new(&tri((17, 30), (5, 1), (20, 1)), surface(64, 36));
        let TriangleSetup::Ready(scan) = setup else {
            panic!("expected a scan");
        };
        for s in scan {
            assert!((s.w0 + s.w1 + s.w2 - 1.0).abs() < 1e-4, "{:?}", s);
        }
    }

    #[test]
    fn weights_are_one_at_their_vertex() {
        let t = tri((0, 0), (4, 0), (0, 4));
        let cells: Vec<CellSample> = covered_cells(&t, surface(8, 8)).collect();
        let at = |x: i32, y: i32| *cells.iter().find(|c| c.x == x && c.y == y).unwrap();

        let c0 = at(0, 0);
        assert_eq!((c0.w0, c0.w1, c0.w2), (1.0, 0.0, 0.0));
        let c1 = at(4, 0);
        assert_eq!((c1.w0, c1.w1, c1.w2), (0.0, 1.0, 0.0));
        let c2 = at(0, 4);
        assert_eq!((c2.w0, c2.w1, c2.w2), (0.0, 0.0, 1.0));
    }

    #[test]
    fn degenerate_triangle_is_skipped() {
        let t = tri((0, 0), (5, 0), (10, 0));
        assert_eq!(TriangleSetup::new(&t, surface(64, 36)), TriangleSetup::Degenerate);
        assert_eq!(covered_cells(&t, surface(64, 36)).count(), 0);

        let mut calls = 0;
        let outcome = rasterize(&t, surface(64, 36), |_| calls += 1);
        assert_eq!(outcome, RasterOutcome::Degenerate);
        assert_eq!(calls, 0);
    }

    #[test]
    fn degenerate_wins_over_off_surface() {
        let t = tri((-9, -9), (-9, -9), (-9, -9));
        assert_eq!(rasterize(&t, surface(4, 4), |_| {}), RasterOutcome::Degenerate);
    }

    #[test]
    fn off_surface_triangle_reports_outcome() {
        let t = tri((-10, 0), (-2, 3), (-6, 9));
        let outcome = rasterize(&t, surface(64, 36), |_| panic!("no cells expected"));
        assert_eq!(outcome, RasterOutcome::OffSurface);
        assert_eq!(outcome.covered(), 0);
        assert_eq!(outcome.visited(), 0);
    }

    #[test]
    fn outcome_counts_match_sink_calls() {
        let t = tri((17, 30), (5, 1), (20, 1));
        let mut seen = 0;
        let outcome = rasterize(&t, surface(64, 36), |_| seen += 1);
        assert_eq!(outcome.covered(), seen);
        assert_eq!(outcome.visited(), 16 * 30);
    }

    #[test]
    fn partially_visible_triangle_only_emits_on_surface_cells() {
        let cfg = surface(10, 10);
        let t = tri((-20, -20), (30, -5), (5, 40));
        let cells: Vec<CellSample> = covered_cells(&t, cfg).collect();
        assert!(!cells.is_empty());
        assert!(cells.iter().all(|c| cfg.contains(c.point())));
    }
}
