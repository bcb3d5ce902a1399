//! Headless demo: drives a viewport through a short scripted session on a
//! real frame clock and logs every event the controller emits.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use viewkit::{
    init_logging, AppEvent, Config, EventBus, ManualFrameScheduler, Point, SettingsEvent,
    SurfaceSize, ViewportController, BUILD_DATE, VERSION,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("ViewKit {} (built {})", VERSION, BUILD_DATE);

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| Config::default_path().ok());
    let config = match &config_path {
        Some(path) => Config::load_or_default(path)?,
        None => Config::default(),
    };

    let bus = Arc::new(EventBus::with_config(config.events.bus_config()));
    let listener = tokio::spawn(log_events(bus.receiver()));
    bus.publish(AppEvent::Settings(SettingsEvent::Loaded {
        path: config_path.map(|p| p.display().to_string()),
    }))?;

    let frames = ManualFrameScheduler::new();
    let mut viewport = ViewportController::new(&config, frames.clone(), bus.clone());
    let surface = config.viewport.surface();
    viewport.initialize(surface.width, surface.height)?;

    let mut clock = interval(config.animation.frame_interval());
    clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    viewport.zoom_in(true);
    viewport.zoom_in(true);
    settle(&mut viewport, &frames, &mut clock).await;

    let anchor = Point::new(surface.width * 0.75, surface.height * 0.25);
    viewport.rotate(87.0, Some(anchor), true);
    settle(&mut viewport, &frames, &mut clock).await;

    viewport.pan(-120.0, 80.0, false);
    viewport.flip_horizontal(true);
    settle(&mut viewport, &frames, &mut clock).await;

    viewport.fit_to_screen(SurfaceSize::new(surface.width * 2.0, surface.height), true);
    settle(&mut viewport, &frames, &mut clock).await;

    info!("Final: {}", viewport);
    info!("Visible content: {:?}", viewport.visible_bounds());

    viewport.cleanup();
    drop(viewport);
    drop(bus);

    let seen = listener.await?;
    info!("Listener received {} events", seen);
    Ok(())
}

/// Deliver frames on the clock until the running animation settles.
async fn settle(
    viewport: &mut ViewportController,
    frames: &ManualFrameScheduler,
    clock: &mut Interval,
) {
    while viewport.is_animating() {
        clock.tick().await;
        for frame in frames.take_due() {
            viewport.on_frame(frame);
        }
    }
    info!("Settled at {}", viewport.transform());
}

async fn log_events(mut events: tokio::sync::broadcast::Receiver<AppEvent>) -> usize {
    let mut seen = 0;
    loop {
        match events.recv().await {
            Ok(event) => {
                seen += 1;
                debug!("[{}] {}", event.category(), event.description());
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Event listener lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
    seen
}
