//! Instrumentation hooks for the rasterizer.
//!
//! A probe selects cells with a predicate and is shown every selected cell of
//! the scan together with its weights, covered or not. Painting uses the same
//! predicate to mark covered, probed cells with a distinct symbol.

use crate::raster::CellSample;
use crate::types::Point2D;

pub trait RasterProbe {
    /// Whether `p` should be reported.
    fn watches(&self, p: Point2D) -> bool;

    /// Called for every watched cell of the scan.
    fn observe(&mut self, sample: &CellSample, covered: bool);
}

/// Probe that watches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl RasterProbe for NoProbe {
    #[inline(always)]
    fn watches(&self, _p: Point2D) -> bool {
        false
    }

    fn observe(&mut self, _sample: &CellSample, _covered: bool) {}
}

/// Emits a `tracing` event for every watched cell.
pub struct TracingProbe {
    predicate: Box<dyn Fn(Point2D) -> bool>,
    hits: usize,
}

impl TracingProbe {
    pub fn new(predicate: impl Fn(Point2D) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            hits: 0,
        }
    }

    /// Watch a single cell.
    pub fn at(target: Point2D) -> Self {
        Self::new(move |p| p == target)
    }

    /// Number of cells observed so far.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

impl std::fmt::Debug for TracingProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingProbe")
            .field("hits", &self.hits)
            .finish_non_exhaustive()
    }
}

impl RasterProbe for TracingProbe {
    fn watches(&self, p: Point2D) -> bool {
        (self.predicate)(p)
    }

    fn observe(&mut self, sample: &CellSample, covered: bool) {
        self.hits += 1;
        tracing::debug!(
            x = sample.x,
            y = sample.y,
            w0 = sample.w0,
            w1 = sample.w1,
            w2 = sample.w2,
            covered,
            "probed cell"
        );
    }
}
