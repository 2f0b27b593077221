//! SurfaceView: maps a rasterized `Surface` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RasterOutcome, Surface};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FILL_SYMBOL, PROBE_SYMBOL};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the status line reports about the last pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStatus {
    pub frame: u64,
    pub angle_degrees: f32,
    pub outcome: RasterOutcome,
    pub paused: bool,
    pub dropped: u64,
}

impl FrameStatus {
    fn line(&self) -> String {
        let coverage = match self.outcome {
            RasterOutcome::Scanned { visited, covered } => {
                format!("cells {:>4}/{:<4}", covered, visited)
            }
            RasterOutcome::OffSurface => "off surface".to_string(),
            RasterOutcome::Degenerate => "degenerate".to_string(),
        };
        let mut line = format!(
            "frame {:>6}  angle {:>5.1}  {}",
            self.frame, self.angle_degrees, coverage
        );
        if self.dropped > 0 {
            line.push_str(&format!("  dropped {}", self.dropped));
        }
        if self.paused {
            line.push_str("  [paused]");
        }
        line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: CellStyle,
    pub fill: CellStyle,
    pub probe: CellStyle,
    pub border: CellStyle,
    pub status: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: CellStyle::plain(Rgb::new(80, 80, 90), Rgb::new(20, 20, 28)),
            fill: CellStyle::plain(Rgb::new(120, 200, 255), Rgb::new(20, 20, 28)).bolded(),
            probe: CellStyle::plain(Rgb::new(255, 90, 90), Rgb::new(20, 20, 28)).bolded(),
            border: CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
            status: CellStyle::default().dimmed(),
        }
    }
}

/// Draws the surface inside a border, centered, with an optional status line.
#[derive(Debug, Clone)]
pub struct SurfaceView {
    palette: Palette,
    probe_symbol: char,
}

impl Default for SurfaceView {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl SurfaceView {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            probe_symbol: PROBE_SYMBOL,
        }
    }

    /// Symbol the painter uses for probed cells; styled with `Palette::probe`.
    pub fn with_probe_symbol(mut self, symbol: char) -> Self {
        self.probe_symbol = symbol;
        self
    }

    pub fn render(
        &self,
        surface: &Surface,
        status: Option<&FrameStatus>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(surface, status, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        surface: &Surface,
        status: Option<&FrameStatus>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let surface_w = to_u16(surface.width());
        let surface_h = to_u16(surface.height());
        let frame_w = surface_w.saturating_add(2);
        let frame_h = surface_h.saturating_add(2);
        let status_h = u16::from(status.is_some());

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h.saturating_add(status_h)) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h, self.palette.border);

        let background = surface.background();
        for (y, row) in surface.rows().enumerate() {
            let fy = start_y.saturating_add(1).saturating_add(to_u16(y as i32));
            for (x, &symbol) in row.iter().enumerate() {
                let fx = start_x.saturating_add(1).saturating_add(to_u16(x as i32));
                let style = if symbol == background {
                    self.palette.background
                } else if symbol == self.probe_symbol {
                    self.palette.probe
                } else if symbol == FILL_SYMBOL {
                    self.palette.fill
                } else {
                    CellStyle {
                        bold: false,
                        ..self.palette.fill
                    }
                };
                fb.put_char(fx, fy, symbol, style);
            }
        }

        if let Some(status) = status {
            fb.put_str(
                start_x,
                start_y.saturating_add(frame_h),
                &status.line(),
                self.palette.status,
            );
        }
    }
}

fn to_u16(v: i32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_mentions_degenerate_frames() {
        let status = FrameStatus {
            frame: 3,
            angle_degrees: 90.0,
            outcome: RasterOutcome::Degenerate,
            paused: true,
            dropped: 0,
        };
        let line = status.line();
        assert!(line.contains("degenerate"));
        assert!(line.contains("[paused]"));
        assert!(!line.contains("dropped"));
    }

    #[test]
    fn status_line_reports_coverage() {
        let status = FrameStatus {
            frame: 1,
            angle_degrees: 0.0,
            outcome: RasterOutcome::Scanned {
                visited: 480,
                covered: 227,
            },
            paused: false,
            dropped: 2,
        };
        let line = status.line();
        assert!(line.contains("227/480"));
        assert!(line.contains("dropped 2"));
    }
}
