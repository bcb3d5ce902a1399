use viewkit_core::TransformState;
use viewkit_settings::Config;
use viewkit_viewport::{
    FrameRequestId, ManualFrameScheduler, NullNotifier, TransformUpdate, ViewportController,
};

fn viewport() -> (ViewportController, ManualFrameScheduler) {
    let frames = ManualFrameScheduler::new();
    let mut vp = ViewportController::new(&Config::default(), frames.clone(), NullNotifier);
    vp.initialize(1000.0, 800.0).expect("valid surface");
    (vp, frames)
}

/// Deliver frames until the animation stops; returns how many were delivered.
fn run_to_completion(vp: &mut ViewportController, frames: &ManualFrameScheduler) -> usize {
    let mut delivered = 0;
    while vp.is_animating() {
        let due = frames.take_due();
        assert_eq!(due.len(), 1, "exactly one registration per frame");
        for id in due {
            vp.on_frame(id);
            delivered += 1;
        }
        assert!(delivered < 1000, "animation never settled");
    }
    delivered
}

#[test]
fn test_convergence_frame_count() {
    let (mut vp, frames) = viewport();
    vp.set_transform(TransformUpdate::translation(100.0, 0.0), true);
    assert!(vp.is_animating());
    assert_eq!(vp.transform(), TransformState::IDENTITY);

    // 42 easing frames, then one frame that snaps onto the target
    assert_eq!(run_to_completion(&mut vp, &frames), 43);
    assert_eq!(vp.transform(), TransformState::new(100.0, 0.0, 1.0, 0.0));
    assert_eq!(frames.outstanding(), 0);
}

#[test]
fn test_first_frame_moves_a_fifth() {
    let (mut vp, frames) = viewport();
    vp.pan(100.0, 0.0, true);
    let id = frames.take_due()[0];
    assert!(vp.on_frame(id));
    assert!((vp.transform().x - 20.0).abs() < 1e-12);
}

#[test]
fn test_retarget_reuses_frame() {
    let (mut vp, frames) = viewport();
    vp.pan(100.0, 0.0, true);
    let pending = vp.pending_frame();
    vp.pan(100.0, 0.0, true);

    assert_eq!(vp.pending_frame(), pending);
    assert_eq!(frames.requested_count(), 1);
    assert_eq!(vp.target_transform().x, 200.0);

    run_to_completion(&mut vp, &frames);
    assert_eq!(vp.transform().x, 200.0);
}

#[test]
fn test_immediate_commit_cancels_without_snapping() {
    let (mut vp, frames) = viewport();
    vp.pan(100.0, 0.0, true);
    for _ in 0..3 {
        for id in frames.take_due() {
            vp.on_frame(id);
        }
    }
    let mid = vp.transform();
    assert!(mid.x > 0.0 && mid.x < 100.0);
    let stale = vp.pending_frame().expect("animation in flight");

    vp.pan(0.0, 10.0, false);
    assert!(!vp.is_animating());
    assert_eq!(frames.outstanding(), 0);
    assert_eq!(frames.cancelled_count(), 1);
    assert_eq!(vp.transform(), TransformState::new(mid.x, 10.0, 1.0, 0.0));

    // a late delivery of the cancelled frame is a no-op
    assert!(!vp.on_frame(stale));
    assert_eq!(vp.transform().x, mid.x);
}

#[test]
fn test_unknown_frame_is_ignored() {
    let (mut vp, frames) = viewport();
    vp.pan(100.0, 0.0, true);
    assert!(vp.on_frame(FrameRequestId::new(4242)));
    assert_eq!(vp.transform(), TransformState::IDENTITY);
    assert_eq!(frames.outstanding(), 1);
}

#[test]
fn test_cleanup_releases_frame() {
    let (mut vp, frames) = viewport();
    vp.zoom_in(true);
    vp.cleanup();
    assert!(!vp.is_animating());
    assert_eq!(frames.outstanding(), 0);
    assert_eq!(vp.transform(), TransformState::IDENTITY);
}

#[test]
fn test_animated_rotation_takes_short_path() {
    let (mut vp, frames) = viewport();
    vp.rotate(-40.0, None, false);
    assert_eq!(vp.transform().rotation, 320.0);

    vp.rotate(60.0, None, true);
    assert_eq!(vp.target_transform().rotation, 20.0);

    let id = frames.take_due()[0];
    vp.on_frame(id);
    let r = vp.transform().rotation;
    // one fifth of the 60 degree forward turn, across 0
    assert!((r - 332.0).abs() < 1e-9, "rotation was {}", r);

    run_to_completion(&mut vp, &frames);
    assert_eq!(vp.transform().rotation, 20.0);
}

#[test]
fn test_animated_flip_passes_scale_limits() {
    let (mut vp, frames) = viewport();
    vp.flip_horizontal(true);
    while vp.is_animating() {
        for id in frames.take_due() {
            vp.on_frame(id);
            assert!(vp.transform().zoom() >= 0.1);
        }
    }
    assert_eq!(vp.transform().scale, -1.0);
}
