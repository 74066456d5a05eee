// Host-side tests for the loader frame driver, run against a fake frame host.

use facet_core::constants::*;
use facet_core::{next_sample, DriverPhase, FrameHost, LoaderDriver, LoaderFrame};

#[derive(Default)]
struct FakeHost {
    next_handle: u32,
    scheduled: Vec<u32>,
    cancelled: Vec<u32>,
    hidden: bool,
}

impl FrameHost for FakeHost {
    type Handle = u32;

    fn subscribe_frame(&mut self) -> Option<u32> {
        self.next_handle += 1;
        self.scheduled.push(self.next_handle);
        Some(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }

    fn is_visible(&self) -> bool {
        !self.hidden
    }
}

fn make_driver() -> LoaderDriver<FakeHost> {
    LoaderDriver::with_preset(FakeHost::default()).unwrap()
}

#[test]
fn preset_staggers_the_three_dots() {
    let frame = LoaderFrame::preset().unwrap();
    let starts: Vec<f64> = frame.dots.iter().map(|d| d.radius.param.start()).collect();
    assert_eq!(starts, RADIUS_STARTS.to_vec());
    let opacity: Vec<f64> = frame.dots.iter().map(|d| d.opacity.current).collect();
    assert_eq!(opacity, OPACITY_STARTS.to_vec());
}

#[test]
fn mount_schedules_first_frame_without_sampling() {
    let mut driver = make_driver();
    assert_eq!(driver.phase(), DriverPhase::Unmounted);
    driver.mount();
    assert_eq!(driver.phase(), DriverPhase::Running);
    assert_eq!(driver.host().scheduled, vec![1]);
    assert_eq!(driver.pending(), Some(1));
    assert_eq!(driver.samples_computed(), 0);
}

#[test]
fn frames_before_mount_are_ignored() {
    let mut driver = make_driver();
    assert!(driver.on_frame(16.0).is_none());
    assert!(driver.host().scheduled.is_empty());
}

#[test]
fn first_frame_sets_the_epoch() {
    let mut driver = make_driver();
    driver.mount();
    let first = driver.on_frame(5_000.0).unwrap();
    // elapsed 0: a dot starting at min sits at the midpoint
    assert!((first.dots[0].radius.current - 12.0).abs() < 1e-9);

    let later = driver.on_frame(5_000.0 + WAVE_PERIOD_MS / 4.0).unwrap();
    assert!((later.dots[0].radius.current - RADIUS_MAX).abs() < 1e-9);
}

#[test]
fn every_dot_uses_the_shared_elapsed_time() {
    let mut driver = make_driver();
    driver.mount();
    driver.on_frame(100.0);
    let frame = driver.on_frame(100.0 + 240.0).unwrap();
    for dot in &frame.dots {
        assert_eq!(dot.radius.current, next_sample(&dot.radius.param, 240.0));
        assert_eq!(dot.opacity.current, next_sample(&dot.opacity.param, 240.0));
    }
    assert_ne!(frame.dots[0].radius.current, frame.dots[1].radius.current);
    assert_ne!(frame.dots[1].radius.current, frame.dots[2].radius.current);
}

#[test]
fn each_frame_publishes_one_snapshot_and_reschedules() {
    let mut driver = make_driver();
    driver.mount();
    for i in 0..3 {
        let published = driver.on_frame(i as f64 * 16.0).unwrap();
        assert_eq!(&published, driver.frame());
    }
    assert_eq!(driver.samples_computed(), 3);
    assert_eq!(driver.host().scheduled, vec![1, 2, 3, 4]);
    assert_eq!(driver.pending(), Some(4));
}

#[test]
fn hidden_host_skips_sampling_but_keeps_the_loop_alive() {
    let mut driver = make_driver();
    driver.mount();
    let before = *driver.frame();
    driver.host_mut().hidden = true;

    assert!(driver.on_frame(0.0).is_none());
    assert!(driver.on_frame(16.0).is_none());
    assert_eq!(driver.samples_computed(), 0);
    assert_eq!(driver.frame(), &before);
    assert_eq!(driver.host().scheduled.len(), 3);

    driver.host_mut().hidden = false;
    let frame = driver.on_frame(32.0).unwrap();
    // the epoch came from the first (hidden) frame
    let dot = frame.dots[2];
    assert_eq!(dot.radius.current, next_sample(&dot.radius.param, 32.0));
}

#[test]
fn unmount_cancels_the_pending_frame() {
    let mut driver = make_driver();
    driver.mount();
    driver.on_frame(0.0);
    driver.unmount();
    assert_eq!(driver.phase(), DriverPhase::Stopped);
    assert_eq!(driver.host().cancelled, vec![2]);
    assert_eq!(driver.pending(), None);
}

#[test]
fn unmount_is_idempotent() {
    let mut driver = make_driver();
    driver.mount();
    driver.unmount();
    driver.unmount();
    assert_eq!(driver.host().cancelled, vec![1]);
}

#[test]
fn late_callback_after_unmount_is_a_no_op() {
    let mut driver = make_driver();
    driver.mount();
    driver.on_frame(0.0);
    let computed = driver.samples_computed();
    let frame = *driver.frame();
    driver.unmount();

    assert!(driver.on_frame(16.0).is_none());
    assert!(driver.on_frame(32.0).is_none());
    assert_eq!(driver.samples_computed(), computed);
    assert_eq!(driver.frame(), &frame);
    assert_eq!(driver.host().scheduled.len(), 2);
}

#[test]
fn mount_after_stop_is_ignored() {
    let mut driver = make_driver();
    driver.mount();
    driver.unmount();
    driver.mount();
    assert_eq!(driver.phase(), DriverPhase::Stopped);
    assert_eq!(driver.host().scheduled, vec![1]);
}
