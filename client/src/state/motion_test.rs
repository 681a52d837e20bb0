use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

// =============================================================
// CursorPosition
// =============================================================

#[test]
fn cursor_default_is_center() {
    assert_eq!(CursorPosition::default(), CursorPosition::CENTER);
    assert_eq!(CursorPosition::default().offset_from_center(), (0.0, 0.0));
}

#[test]
fn cursor_divides_by_viewport() {
    let cursor = CursorPosition::from_client(320.0, 150.0, 1280.0, 600.0);
    assert_close(cursor.x(), 0.25);
    assert_close(cursor.y(), 0.25);
}

#[test]
fn cursor_at_viewport_center_is_half() {
    let (w, h) = (1440.0, 900.0);
    let cursor = CursorPosition::from_client(w / 2.0, h / 2.0, w, h);
    assert_eq!(cursor, CursorPosition::CENTER);
}

#[test]
fn cursor_clamps_outside_viewport() {
    let cursor = CursorPosition::from_client(-40.0, 2000.0, 800.0, 600.0);
    assert_close(cursor.x(), 0.0);
    assert_close(cursor.y(), 1.0);
}

#[test]
fn cursor_degenerate_viewport_maps_to_center() {
    let cursor = CursorPosition::from_client(10.0, 10.0, 0.0, -5.0);
    assert_eq!(cursor, CursorPosition::CENTER);
    let cursor = CursorPosition::from_client(f64::NAN, 10.0, 100.0, f64::NAN);
    assert_eq!(cursor, CursorPosition::CENTER);
}

#[test]
fn cursor_stays_in_unit_range_for_sampled_inputs() {
    let clients = [-1e6, -1.0, 0.0, 0.3, 512.0, 1e9, f64::INFINITY, f64::NEG_INFINITY];
    let extents = [1.0, 320.0, 1920.0, 0.0, -1.0];
    for &cx in &clients {
        for &w in &extents {
            let cursor = CursorPosition::from_client(cx, cx, w, w);
            assert!((0.0..=1.0).contains(&cursor.x()), "x out of range for {cx}/{w}");
            assert!((0.0..=1.0).contains(&cursor.y()), "y out of range for {cx}/{w}");
        }
    }
}

// =============================================================
// ScrollProgress
// =============================================================

#[test]
fn scroll_progress_is_ratio_of_scrollable_range() {
    let progress = ScrollProgress::from_metrics(500.0, 3000.0, 1000.0);
    assert_close(progress.value(), 0.25);
}

#[test]
fn scroll_progress_reaches_one_at_bottom() {
    assert_close(ScrollProgress::from_metrics(2000.0, 3000.0, 1000.0).value(), 1.0);
}

#[test]
fn scroll_progress_zero_when_content_fits() {
    for scroll_y in [0.0, 10.0, 400.0, -30.0] {
        assert_eq!(ScrollProgress::from_metrics(scroll_y, 800.0, 800.0), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::from_metrics(scroll_y, 600.0, 800.0), ScrollProgress::TOP);
    }
}

#[test]
fn scroll_progress_clamps_overscroll() {
    assert_close(ScrollProgress::from_metrics(2300.0, 3000.0, 1000.0).value(), 1.0);
    assert_close(ScrollProgress::from_metrics(-80.0, 3000.0, 1000.0).value(), 0.0);
}

#[test]
fn scroll_progress_nan_metrics_are_top() {
    assert_eq!(ScrollProgress::from_metrics(f64::NAN, 3000.0, 1000.0), ScrollProgress::TOP);
    assert_eq!(ScrollProgress::from_metrics(10.0, f64::NAN, 1000.0), ScrollProgress::TOP);
}

// =============================================================
// Derived transforms
// =============================================================

#[test]
fn motion_state_default_is_center_and_top() {
    let state = MotionState::default();
    assert_eq!(state.cursor, CursorPosition::CENTER);
    assert_eq!(state.scroll, ScrollProgress::TOP);
}

#[test]
fn hero_tilt_is_flat_at_center() {
    assert_eq!(
        hero_tilt_transform(CursorPosition::CENTER),
        "perspective(1400px) rotateX(0.00deg) rotateY(0.00deg) scale(1.01)"
    );
}

#[test]
fn hero_tilt_leans_toward_corner() {
    let cursor = CursorPosition::from_client(100.0, 0.0, 100.0, 100.0);
    assert_eq!(
        hero_tilt_transform(cursor),
        "perspective(1400px) rotateX(5.00deg) rotateY(6.00deg) scale(1.01)"
    );
}

#[test]
fn metrics_transform_scales_offsets() {
    let cursor = CursorPosition::from_client(0.0, 100.0, 100.0, 100.0);
    assert_eq!(metrics_transform(cursor), "translate3d(-8.00px, 6.00px, 0)");
    assert_eq!(metrics_transform(CursorPosition::CENTER), "translate3d(0.00px, 0.00px, 0)");
}

#[test]
fn translate3d_never_prints_negative_zero() {
    assert_eq!(translate3d(-0.0, -0.001), "translate3d(0.00px, 0.00px, 0)");
}

#[test]
fn tracked_events_cover_pointer_scroll_and_resize() {
    let events: Vec<_> = TRACKED_EVENTS.iter().map(|(name, _)| *name).collect();
    assert_eq!(events, ["pointermove", "scroll", "resize"]);
}

#[test]
fn resize_resamples_scroll_not_cursor() {
    let inputs: Vec<_> = TRACKED_EVENTS
        .iter()
        .filter(|(name, _)| *name != "pointermove")
        .map(|(_, input)| *input)
        .collect();
    assert_eq!(inputs, [MotionInput::Scroll, MotionInput::Scroll]);
    assert!(TRACKED_EVENTS.contains(&("pointermove", MotionInput::Cursor)));
}
