//! Output surface: a fixed-size grid of symbols owned by one render pass.

use std::fmt;

use crate::types::{Point2D, SurfaceConfig, BACKGROUND_SYMBOL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    config: SurfaceConfig,
    background: char,
    cells: Vec<char>,
}

impl Surface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self::with_background(config, BACKGROUND_SYMBOL)
    }

    pub fn with_background(config: SurfaceConfig, background: char) -> Self {
        Self {
            config,
            background,
            cells: vec![background; config.area()],
        }
    }

    pub fn config(&self) -> SurfaceConfig {
        self.config
    }

    pub fn width(&self) -> i32 {
        self.config.width()
    }

    pub fn height(&self) -> i32 {
        self.config.height()
    }

    pub fn background(&self) -> char {
        self.background
    }

    /// Reset every cell to the background symbol.
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    /// Write one cell.
    ///
    /// Callers only pass clipped coordinates, so the position must be on the
    /// surface.
    #[inline(always)]
    pub fn set_cell(&mut self, x: i32, y: i32, symbol: char) {
        debug_assert!(
            self.config.contains(Point2D::new(x, y)),
            "cell ({}, {}) is off the {}x{} surface",
            x,
            y,
            self.width(),
            self.height()
        );
        let i = (y as usize) * (self.width() as usize) + (x as usize);
        self.cells[i] = symbol;
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if !self.config.contains(Point2D::new(x, y)) {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width() as usize) + (x as usize)])
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks_exact(self.width() as usize)
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: char) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }
}

impl fmt::Display for Surface {
    /// One line per row, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
