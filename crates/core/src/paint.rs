//! Render pass: clear the surface, rasterize, paint covered cells.

use crate::probe::{NoProbe, RasterProbe};
use crate::raster::{rasterize_probed, CellSample, RasterOutcome};
use crate::surface::Surface;
use crate::types::{Triangle, FILL_SYMBOL, PROBE_SYMBOL};

/// How a covered cell turns into a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    /// Every covered cell gets the same symbol.
    Solid(char),
    /// Symbol of the vertex with the largest weight (`[v0, v1, v2]`).
    NearestVertex([char; 3]),
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(FILL_SYMBOL)
    }
}

impl Brush {
    pub fn symbol(&self, cell: &CellSample) -> char {
        match *self {
            Brush::Solid(ch) => ch,
            Brush::NearestVertex([s0, s1, s2]) => {
                // Ties go to the lower vertex index.
                if cell.w0 >= cell.w1 && cell.w0 >= cell.w2 {
                    s0
                } else if cell.w1 >= cell.w2 {
                    s1
                } else {
                    s2
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    brush: Brush,
    probe_symbol: char,
}

impl Default for Painter {
    fn default() -> Self {
        Self {
            brush: Brush::default(),
            probe_symbol: PROBE_SYMBOL,
        }
    }
}

impl Painter {
    pub fn new(brush: Brush) -> Self {
        Self {
            brush,
            ..Self::default()
        }
    }

    pub fn with_probe_symbol(mut self, symbol: char) -> Self {
        self.probe_symbol = symbol;
        self
    }

    pub fn probe_symbol(&self) -> char {
        self.probe_symbol
    }

    /// One full pass with no instrumentation.
    pub fn render(&self, surface: &mut Surface, tri: &Triangle) -> RasterOutcome {
        self.render_probed(surface, tri, &mut NoProbe)
    }

    /// One full pass; covered cells the probe watches get the probe symbol.
    pub fn render_probed(
        &self,
        surface: &mut Surface,
        tri: &Triangle,
        probe: &mut dyn RasterProbe,
    ) -> RasterOutcome {
        surface.clear();
        let config = surface.config();
        rasterize_probed(tri, config, probe, |cell, watched| {
            let symbol = if watched {
                self.probe_symbol
            } else {
                self.brush.symbol(&cell)
            };
            surface.set_cell(cell.x, cell.y, symbol);
        })
    }
}
