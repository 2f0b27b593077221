use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tri_raster::core::{Painter, Spinner, Surface};
use tri_raster::term::{encode_diff_into, FrameBuffer, SurfaceView, Viewport};
use tri_raster::types::{Point2D, SurfaceConfig, Triangle};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn paint_view_and_diff_are_allocation_free() {
    let base = Triangle::new(Point2D::new(2, 2), Point2D::new(60, 10), Point2D::new(20, 33));
    let spinner = Spinner::new(base, 3.0);
    let painter = Painter::default();
    let view = SurfaceView::default();
    let viewport = Viewport::new(80, 40);

    let mut surface = Surface::new(SurfaceConfig::new(64, 36).unwrap());
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    let mut out: Vec<u8> = Vec::with_capacity(256 * 1024);

    // Warm-up: first frame against a blank buffer is the widest diff.
    painter.render(&mut surface, &spinner.triangle_at(0));
    view.render_into(&surface, None, viewport, &mut next);
    encode_diff_into(&prev, &next, &mut out).unwrap();
    std::mem::swap(&mut prev, &mut next);

    let allocs = with_alloc_counting(|| {
        for step in 1..200 {
            painter.render(&mut surface, &spinner.triangle_at(step));
            view.render_into(&surface, None, viewport, &mut next);

            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            std::mem::swap(&mut prev, &mut next);
        }
    });

    assert!(allocs == 0);
}
