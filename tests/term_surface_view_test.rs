use tri_raster::core::{Painter, RasterOutcome, Surface, TracingProbe};
use tri_raster::term::{FrameStatus, Palette, SurfaceView, Viewport};
use tri_raster::types::{Point2D, SurfaceConfig, Triangle};

fn small_scene() -> Surface {
    let mut surface = Surface::new(SurfaceConfig::new(6, 4).unwrap());
    let tri = Triangle::new(Point2D::new(0, 0), Point2D::new(3, 0), Point2D::new(0, 3));
    Painter::default().render(&mut surface, &tri);
    surface
}

#[test]
fn term_view_renders_border_corners() {
    let surface = small_scene();
    // 6x4 surface plus border => 8x6.
    let fb = SurfaceView::default().render(&surface, None, Viewport::new(8, 6));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(7, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(7, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_copies_surface_rows_inside_border() {
    let surface = small_scene();
    let fb = SurfaceView::default().render(&surface, None, Viewport::new(8, 6));

    assert_eq!(fb.row_text(1), "│####  │");
    assert_eq!(fb.row_text(2), "│###   │");
    assert_eq!(fb.row_text(3), "│##    │");
    assert_eq!(fb.row_text(4), "│#     │");
}

#[test]
fn term_view_styles_fill_and_background_differently() {
    let surface = small_scene();
    let palette = Palette::default();
    let fb = SurfaceView::new(palette).render(&surface, None, Viewport::new(8, 6));

    assert_eq!(fb.get(1, 1).unwrap().style, palette.fill);
    assert_eq!(fb.get(6, 1).unwrap().style, palette.background);
}

#[test]
fn term_view_styles_custom_marker_symbol() {
    let mut surface = Surface::new(SurfaceConfig::new(6, 4).unwrap());
    let tri = Triangle::new(Point2D::new(0, 0), Point2D::new(3, 0), Point2D::new(0, 3));
    let painter = Painter::default().with_probe_symbol('@');
    let mut watch = TracingProbe::at(Point2D::new(1, 1));
    painter.render_probed(&mut surface, &tri, &mut watch);
    assert_eq!(surface.get(1, 1), Some('@'));

    let palette = Palette::default();
    let viewport = Viewport::new(8, 6);

    let told = SurfaceView::new(palette).with_probe_symbol(painter.probe_symbol());
    let fb = told.render(&surface, None, viewport);
    assert_eq!(fb.get(2, 2).unwrap().ch, '@');
    assert_eq!(fb.get(2, 2).unwrap().style, palette.probe);

    // A view left on the default symbol treats '@' as an ordinary glyph.
    let untold = SurfaceView::new(palette).render(&surface, None, viewport);
    assert_ne!(untold.get(2, 2).unwrap().style, palette.probe);
}

#[test]
fn term_view_centers_scene_and_draws_status_below() {
    let surface = small_scene();
    let status = FrameStatus {
        frame: 7,
        angle_degrees: 21.0,
        outcome: RasterOutcome::Scanned {
            visited: 16,
            covered: 10,
        },
        paused: false,
        dropped: 0,
    };
    // Frame 8x6 plus 1 status row in an 80x17 viewport.
    let fb = SurfaceView::default().render(&surface, Some(&status), Viewport::new(80, 17));

    let (x0, y0) = ((80 - 8) / 2, (17 - 7) / 2);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '┌');
    let status_row = fb.row_text(y0 + 6);
    assert!(status_row.contains("frame"));
    assert!(status_row.contains("10/16"));
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let surface = small_scene();
    let fb = SurfaceView::default().render(&surface, None, Viewport::new(3, 2));
    assert_eq!(fb.width(), 3);
    assert_eq!(fb.height(), 2);
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
