use proptest::prelude::*;
use viewkit_core::{Point, SurfaceSize, TransformState};
use viewkit_settings::Config;
use viewkit_viewport::{
    ConstraintPolicy, CoordinateMapper, GestureApplier, ManualFrameScheduler, NullNotifier,
    TransformUpdate, ViewportController,
};

fn surface() -> SurfaceSize {
    SurfaceSize::new(1000.0, 800.0)
}

fn transform_strategy() -> impl Strategy<Value = TransformState> {
    (
        -500.0..500.0f64,
        -500.0..500.0f64,
        prop_oneof![0.1..50.0f64, -50.0..-0.1f64],
        0.0..360.0f64,
    )
        .prop_map(|(x, y, scale, rotation)| TransformState::new(x, y, scale, rotation))
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-2000.0..2000.0f64, -2000.0..2000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_round_trip(t in transform_strategy(), p in point_strategy()) {
        let mapper = CoordinateMapper::new(surface());
        let back = mapper.screen_to_canvas(mapper.canvas_to_screen(p, &t), &t);
        prop_assert!(back.distance_to(&p) < 1e-6);
    }

    #[test]
    fn prop_committed_transform_is_in_range(
        x in -1e7..1e7f64,
        y in -1e7..1e7f64,
        scale in -1e4..1e4f64,
        rotation in -1e5..1e5f64,
    ) {
        let mut vp = ViewportController::new(&Config::default(), ManualFrameScheduler::new(), NullNotifier);
        vp.initialize(1000.0, 800.0).expect("valid surface");
        vp.set_transform(TransformUpdate::from(TransformState::new(x, y, scale, rotation)), false);

        let t = vp.transform();
        prop_assert!(t.zoom() >= 0.1 && t.zoom() <= 50.0);
        prop_assert!(t.rotation >= 0.0 && t.rotation < 360.0);
        prop_assert!(t.x >= -1e7 && t.x <= 1100.0);
        prop_assert!(vp.policy().admits(&t, vp.surface()));
    }

    #[test]
    fn prop_pinch_keeps_anchor(
        base in transform_strategy(),
        factor in 0.2..5.0f64,
        anchor in point_strategy(),
    ) {
        let mapper = CoordinateMapper::new(surface());
        let gestures = GestureApplier::new(surface(), ConstraintPolicy::default());
        let under = mapper.screen_to_canvas(anchor, &base);

        let t = gestures.apply_pinch(&base, factor, Some(anchor));
        let drift = mapper.canvas_to_screen(under, &t).distance_to(&anchor);
        prop_assert!(drift < 1e-6, "anchor drifted by {}", drift);
    }

    #[test]
    fn prop_rotation_keeps_anchor(
        base in transform_strategy(),
        delta in -720.0..720.0f64,
        anchor in point_strategy(),
    ) {
        let mapper = CoordinateMapper::new(surface());
        let gestures = GestureApplier::new(surface(), ConstraintPolicy::default());
        let under = mapper.screen_to_canvas(anchor, &base);

        let t = gestures.apply_rotation(&base, delta, Some(anchor));
        let drift = mapper.canvas_to_screen(under, &t).distance_to(&anchor);
        prop_assert!(drift < 1e-6, "anchor drifted by {}", drift);
        prop_assert!(t.rotation >= 0.0 && t.rotation < 360.0);
    }
}
