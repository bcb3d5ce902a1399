use viewkit_core::{Point, StrokePoint, SurfaceSize, TransformState};
use viewkit_settings::{Config, ViewportSettings};
use viewkit_viewport::{ManualFrameScheduler, NullNotifier, TransformUpdate, ViewportController};

fn viewport() -> ViewportController {
    let mut vp = ViewportController::new(&Config::default(), ManualFrameScheduler::new(), NullNotifier);
    vp.initialize(1000.0, 800.0).expect("valid surface");
    vp
}

#[test]
fn test_pan_after_initialize() {
    let mut vp = viewport();
    vp.pan(50.0, 50.0, false);
    assert_eq!(vp.transform(), TransformState::new(50.0, 50.0, 1.0, 0.0));
}

#[test]
fn test_pan_is_bounded() {
    let mut vp = viewport();
    vp.pan(1e6, -1e6, false);
    let t = vp.transform();
    assert_eq!(t.x, 1100.0);
    assert_eq!(t.y, -880.0);
}

#[test]
fn test_rotate_snaps_near_quarter_turn() {
    let mut vp = viewport();
    vp.rotate(87.0, None, false);
    assert_eq!(vp.transform().rotation, 90.0);
}

#[test]
fn test_rotate_far_from_snap_angle() {
    let mut vp = viewport();
    vp.rotate(40.0, None, false);
    assert_eq!(vp.transform().rotation, 40.0);
}

#[test]
fn test_rotate_wraps_negative() {
    let mut vp = viewport();
    vp.rotate(-30.0, None, false);
    assert_eq!(vp.transform().rotation, 330.0);
    vp.rotate(28.0, None, false);
    assert_eq!(vp.transform().rotation, 0.0);
}

#[test]
fn test_snapped_rotation_keeps_anchor() {
    let mut vp = viewport();
    vp.pan(30.0, -20.0, false);
    let anchor = Point::new(800.0, 600.0);
    let under = vp.screen_to_canvas(anchor);

    vp.rotate(43.0, Some(anchor), false);
    assert_eq!(vp.transform().rotation, 45.0);
    assert!(vp.canvas_to_screen(under).distance_to(&anchor) < 1e-9);
}

#[test]
fn test_flip_horizontal_twice() {
    let mut vp = viewport();
    vp.set_zoom(2.0, None, false);
    vp.flip_horizontal(false);
    assert_eq!(vp.transform().scale, -2.0);
    vp.flip_horizontal(false);
    assert_eq!(vp.transform().scale, 2.0);
}

#[test]
fn test_zoom_at_anchor() {
    let mut vp = viewport();
    let anchor = Point::new(400.0, 350.0);
    let under = vp.screen_to_canvas(anchor);
    vp.set_zoom(4.0, Some(anchor), false);
    assert_eq!(vp.transform().scale, 4.0);
    assert_eq!(vp.transform().translation(), (300.0, 150.0));
    assert!(vp.canvas_to_screen(under).distance_to(&anchor) < 1e-9);
}

#[test]
fn test_pan_limits_win_over_zoom_anchor() {
    let mut vp = viewport();
    let anchor = Point::new(100.0, 100.0);
    let under = vp.screen_to_canvas(anchor);
    // keeping the anchor would need an offset of (1200, 900)
    vp.set_zoom(4.0, Some(anchor), false);

    let t = vp.transform();
    assert_eq!(t.scale, 4.0);
    assert_eq!(t.translation(), (1100.0, 880.0));
    let drift = vp.canvas_to_screen(under).distance_to(&anchor);
    assert!((drift - (100.0f64.powi(2) + 20.0f64.powi(2)).sqrt()).abs() < 1e-9);
}

#[test]
fn test_zoom_limits() {
    let mut vp = viewport();
    for _ in 0..100 {
        vp.zoom_in(false);
    }
    assert_eq!(vp.transform().scale, 50.0);
    for _ in 0..100 {
        vp.zoom_out(false);
    }
    assert_eq!(vp.transform().scale, 0.1);
}

#[test]
fn test_reset_restores_configured_default() {
    let mut config = Config::default();
    config.viewport = ViewportSettings {
        default_transform: TransformState::new(10.0, 20.0, 2.0, 0.0),
        ..ViewportSettings::default()
    };
    let mut vp = ViewportController::new(&config, ManualFrameScheduler::new(), NullNotifier);
    vp.initialize(1000.0, 800.0).expect("valid surface");
    assert_eq!(vp.transform(), TransformState::new(10.0, 20.0, 2.0, 0.0));

    vp.pan(-300.0, 15.0, false);
    vp.rotate(90.0, None, false);
    vp.reset_transform(false);
    assert_eq!(vp.transform(), TransformState::new(10.0, 20.0, 2.0, 0.0));
}

#[test]
fn test_initialize_resets_transform() {
    let mut vp = viewport();
    vp.pan(25.0, 0.0, false);
    vp.initialize(640.0, 480.0).expect("valid surface");
    assert_eq!(vp.surface(), SurfaceSize::new(640.0, 480.0));
    assert_eq!(vp.transform(), TransformState::IDENTITY);
}

#[test]
fn test_zero_sized_surface_is_accepted() {
    let mut vp = viewport();
    assert!(vp.initialize(0.0, 0.0).is_ok());
    assert_eq!(vp.transform().scale, 1.0);
}

#[test]
fn test_set_transform_partial() {
    let mut vp = viewport();
    vp.set_transform(TransformUpdate::new().with_rotation(-90.0).with_scale(0.0), false);
    let t = vp.transform();
    assert_eq!(t.rotation, 270.0);
    assert_eq!(t.scale, 0.1);
    assert_eq!(t.translation(), (0.0, 0.0));
}

#[test]
fn test_visible_bounds_and_visibility() {
    let mut vp = viewport();
    vp.set_zoom(2.0, None, false);
    let bounds = vp.visible_bounds();
    assert!((bounds.width() - 500.0).abs() < 1e-9);
    assert!((bounds.height() - 400.0).abs() < 1e-9);
    assert!(vp.is_point_visible(&Point::new(500.0, 400.0)));
    assert!(!vp.is_point_visible(&Point::new(0.0, 0.0)));
}

#[test]
fn test_matrix_tracks_transform() {
    let mut vp = viewport();
    vp.pan(12.0, 34.0, false);
    vp.set_zoom(3.0, None, false);
    let m = vp.transform_matrix();
    assert_eq!(m[0], [3.0, 0.0, 12.0]);
    assert_eq!(m[1], [0.0, 3.0, 34.0]);
}

#[test]
fn test_stroke_points_convert_with_explicit_transform() {
    let vp = viewport();
    let t = TransformState::new(0.0, 0.0, 2.0, 0.0);
    let sample = StrokePoint::new(700.0, 400.0, 0.9, 17);
    let canvas = vp.screen_to_canvas_with(sample, &t);
    assert_eq!(canvas.x, 600.0);
    assert_eq!(canvas.pressure, 0.9);
    assert_eq!(canvas.timestamp_ms, 17);
}

#[test]
fn test_gesture_preview_does_not_commit() {
    let vp = viewport();
    let base = vp.transform();
    let preview = vp.apply_pinch(&base, 3.0, Some(Point::new(0.0, 0.0)));
    assert_eq!(preview.scale, 3.0);
    assert_eq!(vp.transform(), base);

    let turned = vp.apply_rotation(&base, 30.0, None);
    assert_eq!(turned.rotation, 30.0);
    assert_eq!(vp.transform(), base);
}

#[test]
fn test_fit_small_content_stays_centered() {
    let mut vp = viewport();
    vp.fit_to_screen(SurfaceSize::new(100.0, 100.0), false);
    let t = vp.transform();

    // the fitting zoom of 8x would push the offset past its bounds
    assert!(t.scale > 1.0 && t.scale < 8.0);
    assert_eq!(t.rotation, 0.0);
    assert!(vp.policy().admits(&t, vp.surface()));

    let middle = vp.canvas_to_screen(Point::new(50.0, 50.0));
    assert!(middle.distance_to(&Point::new(500.0, 400.0)) < 1e-9);
    assert!(vp.is_point_visible(&Point::new(0.0, 0.0)));
    assert!(vp.is_point_visible(&Point::new(100.0, 100.0)));
}

#[test]
fn test_fit_wide_content_stays_centered() {
    let mut vp = viewport();
    vp.fit_to_screen(SurfaceSize::new(4000.0, 800.0), false);
    let t = vp.transform();

    // 0.25x would fill the width, but only 0.2x keeps the center reachable
    assert!((t.scale - 0.2).abs() < 1e-12);
    assert!(vp.policy().admits(&t, vp.surface()));

    let middle = vp.canvas_to_screen(Point::new(2000.0, 400.0));
    assert!(middle.distance_to(&Point::new(500.0, 400.0)) < 1e-9);
    assert!(vp.is_point_visible(&Point::new(0.0, 400.0)));
    assert!(vp.is_point_visible(&Point::new(4000.0, 400.0)));
}

#[test]
fn test_fit_oversized_content_clamps_placement() {
    let mut vp = viewport();
    vp.fit_to_screen(SurfaceSize::new(100_000.0, 800.0), false);
    let t = vp.transform();

    // centering is impossible even at the minimum zoom
    assert_eq!(t.scale, 0.1);
    assert_eq!(t.x, -200.0);
    assert_eq!(t.y, 0.0);
    assert!(vp.policy().admits(&t, vp.surface()));
}
