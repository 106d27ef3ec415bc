use preview_core::driver::*;
use preview_core::params::*;
use preview_core::state::RenderState;
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(100);

struct StubSurface {
    loaded: bool,
    frames: Vec<RenderState>,
}

impl StubSurface {
    fn new() -> Self {
        Self {
            loaded: false,
            frames: Vec::new(),
        }
    }
}

impl RenderSurface for StubSurface {
    fn load(&mut self) {
        self.loaded = true;
    }
    fn loaded(&self) -> bool {
        self.loaded
    }
    fn paint(&mut self, frame: &RenderState) {
        self.frames.push(frame.clone());
    }
}

#[test]
fn timer_counts_whole_intervals() {
    let mut timer = FrameTimer::new(INTERVAL);
    assert!(timer.enabled(), "timers ship enabled");
    assert_eq!(timer.poll(Duration::from_millis(250)), 2);
    // the 50 ms remainder carries over
    assert_eq!(timer.poll(Duration::from_millis(50)), 1);
    assert_eq!(timer.poll(Duration::from_millis(99)), 0);
}

#[test]
fn zero_interval_is_raised_to_one_millisecond() {
    let mut timer = FrameTimer::new(Duration::ZERO);
    assert_eq!(timer.interval(), Duration::from_millis(1));
    assert_eq!(timer.poll(Duration::from_millis(3)), 3);
}

#[test]
fn disabled_timer_accumulates_nothing() {
    let mut timer = FrameTimer::new(INTERVAL);
    timer.set_enabled(false);
    assert_eq!(timer.poll(Duration::from_secs(10)), 0);

    // no burst after a long disabled span
    timer.set_enabled(true);
    assert_eq!(timer.poll(Duration::from_millis(50)), 0);
    assert_eq!(timer.poll(Duration::from_millis(50)), 1);
}

#[test]
fn disabling_discards_the_partial_interval() {
    let mut timer = FrameTimer::new(INTERVAL);
    assert_eq!(timer.poll(Duration::from_millis(90)), 0);
    timer.set_enabled(false);
    timer.set_enabled(true);
    assert_eq!(
        timer.poll(Duration::from_millis(90)),
        0,
        "re-enable starts from a clean phase"
    );
}

#[test]
fn driver_starts_armed_and_toggles() {
    let mut driver = RenderDriver::new(INTERVAL);
    assert_eq!(driver.state(), DriverState::Armed);
    driver.disarm();
    assert_eq!(driver.state(), DriverState::Idle);
    driver.toggle();
    assert_eq!(driver.state(), DriverState::Armed);
}

#[test]
fn disarmed_driver_requests_no_frames() {
    let mut driver = RenderDriver::new(INTERVAL);
    let store = ParamStore::new();
    let mut surface = StubSurface::new();
    surface.load();

    driver.disarm();
    for _ in 0..10 {
        assert_eq!(driver.pump(INTERVAL, &store, &mut surface), Ok(0));
    }
    assert!(surface.frames.is_empty(), "no frames while idle");

    driver.arm();
    assert_eq!(driver.pump(INTERVAL, &store, &mut surface), Ok(1));
    assert_eq!(surface.frames.len(), 1);
}

#[test]
fn tick_before_surface_load_skips_rendering() {
    let mut driver = RenderDriver::new(INTERVAL);
    let store = ParamStore::new();
    let mut surface = StubSurface::new();

    assert_eq!(
        driver.pump(INTERVAL, &store, &mut surface),
        Err(DriverError::UninitializedSurface)
    );
    assert!(surface.frames.is_empty());

    // the loop keeps running; once loaded the next tick paints
    surface.load();
    assert_eq!(driver.pump(INTERVAL, &store, &mut surface), Ok(1));
    assert_eq!(surface.frames.len(), 1);
}

#[test]
fn several_elapsed_intervals_coalesce_into_one_redraw() {
    let mut driver = RenderDriver::new(INTERVAL);
    let store = ParamStore::new();
    let mut surface = StubSurface::new();
    surface.load();

    assert_eq!(driver.pump(Duration::from_millis(450), &store, &mut surface), Ok(1));
    assert_eq!(surface.frames.len(), 1);
}

#[test]
fn a_gesture_is_visible_to_the_next_tick() {
    let mut driver = RenderDriver::new(INTERVAL);
    let mut store = ParamStore::new();
    let mut surface = StubSurface::new();
    surface.load();

    driver.pump(INTERVAL, &store, &mut surface).unwrap();
    store.set_clamped(ParamId::Tint(SceneObject::Cube, Channel::R), 255);
    driver.pump(INTERVAL, &store, &mut surface).unwrap();

    assert_eq!(surface.frames[0].cube_rgb[0], 0.0);
    assert_eq!(surface.frames[1].cube_rgb[0], 1.0);
}

#[test]
fn snapshot_is_immutable_once_taken() {
    let mut store = ParamStore::new();
    let frame = store.snapshot();
    store.set_clamped(ParamId::Mirror(MirrorKind::Big), 5);
    assert_eq!(frame.big_mirrors, 1, "a taken snapshot never changes");
    assert_eq!(store.snapshot().big_mirrors, 5);
}

#[test]
fn snapshot_carries_every_committed_value() {
    let mut store = ParamStore::new();
    store.set(ParamId::Tint(SceneObject::Cube, Channel::R), 255).unwrap();
    store
        .set(ParamId::Tint(SceneObject::Tetrahedron, Channel::B), 51)
        .unwrap();
    store.set(ParamId::Camera(Axis::X), 10).unwrap();
    store.set(ParamId::Mirror(MirrorKind::Small), 3).unwrap();

    let frame = store.snapshot();
    assert_eq!(frame.cube_rgb, [1.0, 0.0, 0.0]);
    assert!((frame.tetrahedron_rgb[2] - 0.2).abs() < 1e-6);
    assert_eq!(frame.camera_offset, [10, 0, -5]);
    assert_eq!(frame.big_mirrors, 1);
    assert_eq!(frame.small_mirrors, 3);
}
