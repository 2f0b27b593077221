//! Triangle rasterizer runner (default binary).
//!
//! Without `RASTER_ANIMATE` it renders the reference triangle once and prints
//! the surface as text. With it, the triangle spins about its centroid in the
//! terminal, drawn through a framebuffer-based crossterm renderer.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tri_raster::config::ViewerConfig;
use tri_raster::core::{NoProbe, Painter, RasterProbe, Spinner, Surface, TracingProbe};
use tri_raster::input::{handle_key_event, should_quit};
use tri_raster::logging::{self, LogTarget};
use tri_raster::term::{
    write_surface, FrameBuffer, FramePacer, FrameStatus, SurfaceView, TerminalRenderer, Viewport,
};
use tri_raster::types::{ViewerAction, REFERENCE_TRIANGLE};

fn main() -> Result<()> {
    let config = ViewerConfig::from_env()?;
    logging::init(
        &config.log_filter,
        &LogTarget::choose(config.log_path.as_deref(), config.animate),
    )?;
    tracing::info!(?config, "starting");

    if !config.animate {
        return render_once(&config);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn probe_for(config: &ViewerConfig) -> Box<dyn RasterProbe> {
    match config.probe {
        Some(target) => Box::new(TracingProbe::at(target)),
        None => Box::new(NoProbe),
    }
}

fn render_once(config: &ViewerConfig) -> Result<()> {
    let mut surface = Surface::new(config.surface);
    let mut probe = probe_for(config);
    let outcome =
        Painter::new(config.brush).render_probed(&mut surface, &REFERENCE_TRIANGLE, probe.as_mut());
    tracing::info!(?outcome, "rendered reference triangle");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_surface(&surface, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &ViewerConfig) -> Result<()> {
    let spinner = Spinner::new(REFERENCE_TRIANGLE, config.step_degrees);
    let painter = Painter::new(config.brush);
    let view = SurfaceView::default().with_probe_symbol(painter.probe_symbol());
    let mut probe = probe_for(config);

    let mut surface = Surface::new(config.surface);
    let mut fb = FrameBuffer::new(0, 0);
    let mut pacer = FramePacer::new(config.frame_ms);
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut step: i64 = 0;
    let mut direction: i64 = 1;
    let mut paused = false;
    let mut frame: u64 = 0;
    let mut dirty = true;

    loop {
        if pacer.should_advance(now_ms()) && !paused {
            step += direction;
            dirty = true;
        }

        if dirty {
            let tri = spinner.triangle_at(step);
            let outcome = painter.render_probed(&mut surface, &tri, probe.as_mut());
            frame += 1;

            let status = FrameStatus {
                frame,
                angle_degrees: spinner.angle_degrees(step),
                outcome,
                paused,
                dropped: pacer.dropped(),
            };
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&surface, Some(&status), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the next frame is due.
        let timeout = Duration::from_millis(pacer.wait_ms(now_ms()));
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                tracing::debug!(?action, step, "viewer action");
                match action {
                    ViewerAction::TogglePause => {
                        paused = !paused;
                        pacer.reset();
                    }
                    ViewerAction::Step => step += direction,
                    ViewerAction::Reset => step = 0,
                    ViewerAction::Reverse => direction = -direction,
                }
                dirty = true;
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
