//! Frame driver for the three-dot loader.
//!
//! The driver never talks to the browser directly. Scheduling and the
//! visibility check go through [`FrameHost`], so the web frontend plugs in
//! `requestAnimationFrame` while tests plug in a fake clock.

use crate::constants::*;
use crate::wave::{next_sample, WaveError, WaveParam};

/// Host capabilities the driver needs from its environment.
pub trait FrameHost {
    type Handle: Copy + std::fmt::Debug;

    /// Ask for one frame callback. `None` if the host could not schedule it.
    fn subscribe_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
    /// Whether the host element currently has a nonzero laid-out width.
    fn is_visible(&self) -> bool;
}

/// A wave channel plus its most recent sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    pub param: WaveParam,
    pub current: f64,
}

impl Channel {
    pub fn new(param: WaveParam) -> Self {
        Self {
            param,
            current: param.start(),
        }
    }

    #[inline]
    fn advance(&self, elapsed_ms: f64) -> Self {
        Self {
            param: self.param,
            current: next_sample(&self.param, elapsed_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotState {
    pub opacity: Channel,
    pub radius: Channel,
}

impl DotState {
    pub fn new(opacity: WaveParam, radius: WaveParam) -> Self {
        Self {
            opacity: Channel::new(opacity),
            radius: Channel::new(radius),
        }
    }

    /// State of every channel at `elapsed_ms`. Does not touch `self`.
    pub fn advanced(&self, elapsed_ms: f64) -> Self {
        Self {
            opacity: self.opacity.advance(elapsed_ms),
            radius: self.radius.advance(elapsed_ms),
        }
    }
}

/// The snapshot published once per visible frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderFrame {
    pub dots: [DotState; DOT_COUNT],
}

impl LoaderFrame {
    /// The stock loader: shared ranges, starts staggered per dot.
    pub fn preset() -> Result<Self, WaveError> {
        let mut dots = Vec::with_capacity(DOT_COUNT);
        for i in 0..DOT_COUNT {
            let opacity = WaveParam::new(OPACITY_MIN, OPACITY_MAX, OPACITY_STARTS[i])?;
            let radius = WaveParam::new(RADIUS_MIN, RADIUS_MAX, RADIUS_STARTS[i])?;
            dots.push(DotState::new(opacity, radius));
        }
        Ok(Self {
            dots: [dots[0], dots[1], dots[2]],
        })
    }

    pub fn advanced(&self, elapsed_ms: f64) -> Self {
        Self {
            dots: self.dots.map(|d| d.advanced(elapsed_ms)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverPhase {
    Unmounted,
    Running,
    Stopped,
}

pub struct LoaderDriver<H: FrameHost> {
    host: H,
    phase: DriverPhase,
    epoch: Option<f64>,
    pending: Option<H::Handle>,
    frame: LoaderFrame,
    samples_computed: u64,
}

impl<H: FrameHost> LoaderDriver<H> {
    pub fn new(host: H, frame: LoaderFrame) -> Self {
        Self {
            host,
            phase: DriverPhase::Unmounted,
            epoch: None,
            pending: None,
            frame,
            samples_computed: 0,
        }
    }

    pub fn with_preset(host: H) -> Result<Self, WaveError> {
        Ok(Self::new(host, LoaderFrame::preset()?))
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    /// Latest published snapshot (the initial state before the first frame).
    pub fn frame(&self) -> &LoaderFrame {
        &self.frame
    }

    pub fn samples_computed(&self) -> u64 {
        self.samples_computed
    }

    pub fn pending(&self) -> Option<H::Handle> {
        self.pending
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn mount(&mut self) {
        if self.phase != DriverPhase::Unmounted {
            log::warn!("[loader] mount ignored in phase {:?}", self.phase);
            return;
        }
        self.phase = DriverPhase::Running;
        self.epoch = None;
        self.pending = self.host.subscribe_frame();
        log::debug!("[loader] mounted, first frame {:?}", self.pending);
    }

    /// Handle one frame callback at `timestamp_ms`.
    ///
    /// Returns the newly published snapshot, or `None` when the frame was
    /// skipped (host not visible) or the driver is no longer running.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Option<LoaderFrame> {
        // this callback consumed whatever was pending
        let stale = self.pending.take();
        if self.phase != DriverPhase::Running {
            if let Some(handle) = stale {
                self.host.cancel_frame(handle);
            }
            return None;
        }

        let epoch = *self.epoch.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - epoch;

        let published = if self.host.is_visible() {
            self.frame = self.frame.advanced(elapsed);
            self.samples_computed += 1;
            Some(self.frame)
        } else {
            None
        };

        self.pending = self.host.subscribe_frame();
        published
    }

    pub fn unmount(&mut self) {
        if self.phase == DriverPhase::Stopped {
            return;
        }
        self.phase = DriverPhase::Stopped;
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        log::debug!(
            "[loader] stopped after {} computed frames",
            self.samples_computed
        );
    }
}
