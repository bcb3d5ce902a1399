use parking_lot::Mutex;
use std::sync::Arc;
use viewkit_core::{AppEvent, EventBus, EventCategory, EventFilter, ViewportEvent};
use viewkit_settings::Config;
use viewkit_viewport::{ManualFrameScheduler, ViewportController};

fn recorded_viewport() -> (ViewportController, ManualFrameScheduler, Arc<Mutex<Vec<ViewportEvent>>>) {
    let bus = Arc::new(EventBus::new());
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Viewport]),
        move |event| {
            if let AppEvent::Viewport(e) = event {
                sink.lock().push(e.clone());
            }
        },
    );

    let frames = ManualFrameScheduler::new();
    let vp = ViewportController::new(&Config::default(), frames.clone(), bus);
    (vp, frames, log)
}

fn count(log: &Mutex<Vec<ViewportEvent>>, pred: impl Fn(&ViewportEvent) -> bool) -> usize {
    log.lock().iter().filter(|e| pred(*e)).count()
}

fn is_change(e: &ViewportEvent) -> bool {
    matches!(e, ViewportEvent::TransformChanged { .. })
}

#[test]
fn test_initialize_announces_surface_and_transform() {
    let (mut vp, _, log) = recorded_viewport();
    vp.initialize(1000.0, 800.0).expect("valid surface");

    let events = log.lock().clone();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], ViewportEvent::Initialized { surface, .. } if surface.width == 1000.0));
    assert!(is_change(&events[1]));
}

#[test]
fn test_every_immediate_commit_notifies() {
    let (mut vp, _, log) = recorded_viewport();
    vp.initialize(1000.0, 800.0).expect("valid surface");
    log.lock().clear();

    vp.pan(50.0, 50.0, false);
    vp.rotate(87.0, None, false);
    vp.flip_horizontal(false);

    assert_eq!(count(&log, is_change), 3);
    let last = log.lock().last().cloned();
    match last {
        Some(ViewportEvent::TransformChanged { transform }) => {
            assert_eq!(transform.rotation, 90.0);
            assert_eq!(transform.scale, -1.0);
        }
        other => panic!("unexpected last event {:?}", other),
    }
}

#[test]
fn test_animation_notifies_every_tick() {
    let (mut vp, frames, log) = recorded_viewport();
    vp.initialize(1000.0, 800.0).expect("valid surface");
    log.lock().clear();

    vp.pan(100.0, 0.0, true);
    assert_eq!(count(&log, is_change), 0);
    assert_eq!(
        count(&log, |e| matches!(e, ViewportEvent::AnimationStarted { .. })),
        1
    );

    while vp.is_animating() {
        for id in frames.take_due() {
            vp.on_frame(id);
        }
    }

    assert_eq!(count(&log, is_change), 43);
    assert!(matches!(
        log.lock().last(),
        Some(ViewportEvent::AnimationSettled { frames: 43 })
    ));
}

#[test]
fn test_cancellation_is_announced() {
    let (mut vp, _, log) = recorded_viewport();
    vp.initialize(1000.0, 800.0).expect("valid surface");
    vp.zoom_in(true);
    vp.zoom_in(false);

    let events = log.lock().clone();
    let cancelled = events
        .iter()
        .position(|e| matches!(e, ViewportEvent::AnimationCancelled))
        .expect("cancel event");
    assert!(is_change(&events[cancelled + 1]));
}

#[test]
fn test_controller_works_without_subscribers() {
    let frames = ManualFrameScheduler::new();
    let mut vp = ViewportController::new(&Config::default(), frames, Arc::new(EventBus::new()));
    vp.initialize(1000.0, 800.0).expect("valid surface");
    vp.pan(5.0, 5.0, false);
    assert_eq!(vp.transform().x, 5.0);
}
