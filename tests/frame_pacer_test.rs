use tri_raster::term::FramePacer;

#[test]
fn frame_pacer_first_frame_is_due() {
    let mut p = FramePacer::new(33);
    assert!(p.should_advance(0));
    assert_eq!(p.wait_ms(0), 33);
}

#[test]
fn frame_pacer_waits_one_interval() {
    let mut p = FramePacer::new(33);
    assert!(p.should_advance(0));
    assert!(!p.should_advance(10));
    assert!(!p.should_advance(32));
    assert_eq!(p.wait_ms(32), 1);
    assert!(p.should_advance(33));
    assert!(!p.should_advance(34));
    assert!(p.should_advance(66));
    assert_eq!(p.dropped(), 0);
}

#[test]
fn frame_pacer_keeps_grid_when_slightly_late() {
    let mut p = FramePacer::new(10);
    assert!(p.should_advance(0));
    assert!(p.should_advance(14));
    // Next frame stays on the 10ms grid.
    assert_eq!(p.wait_ms(14), 6);
    assert!(p.should_advance(20));
}

#[test]
fn frame_pacer_drops_instead_of_bursting() {
    let mut p = FramePacer::new(10);
    assert!(p.should_advance(0));
    // Stalled for 3.5 intervals.
    assert!(p.should_advance(45));
    assert_eq!(p.dropped(), 3);
    assert!(!p.should_advance(46));
    assert!(p.should_advance(50));
}

#[test]
fn frame_pacer_reset_makes_next_frame_due() {
    let mut p = FramePacer::new(100);
    assert!(p.should_advance(0));
    assert!(!p.should_advance(5));
    p.reset();
    assert_eq!(p.wait_ms(5), 0);
    assert!(p.should_advance(5));
}

#[test]
fn frame_pacer_zero_interval_is_clamped() {
    let mut p = FramePacer::new(0);
    assert_eq!(p.interval_ms(), 1);
    assert!(p.should_advance(0));
    assert!(p.should_advance(1));
}
