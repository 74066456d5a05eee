//! Sine oscillator behind the three-dot loader.
//!
//! Each dot animates two channels (radius and opacity). A channel is a
//! [`WaveParam`]: the range it swings over plus a `start` value that fixes
//! where on the curve the channel sits at `t = 0`. Giving each dot a different
//! start staggers the dots instead of pulsing them in lockstep.

use std::f64::consts::PI;
use thiserror::Error;

use crate::constants::WAVE_PERIOD_MS;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WaveError {
    #[error("wave range must have a positive amplitude (min {min}, max {max})")]
    NonPositiveAmplitude { min: f64, max: f64 },

    #[error("wave start {start} lies outside [{min}, {max}]")]
    StartOutOfRange { start: f64, min: f64, max: f64 },

    #[error("wave parameters must be finite")]
    NonFinite,
}

/// One oscillating channel. Only constructible with `max > min` and
/// `min <= start <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParam {
    min: f64,
    max: f64,
    start: f64,
}

impl WaveParam {
    pub fn new(min: f64, max: f64, start: f64) -> Result<Self, WaveError> {
        if !(min.is_finite() && max.is_finite() && start.is_finite()) {
            return Err(WaveError::NonFinite);
        }
        if max <= min {
            return Err(WaveError::NonPositiveAmplitude { min, max });
        }
        if start < min || start > max {
            return Err(WaveError::StartOutOfRange { start, min, max });
        }
        Ok(Self { min, max, start })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn amplitude(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Offset on the sine curve, in radians, encoded by `start`.
    #[inline]
    pub fn phase_shift(&self) -> f64 {
        ((self.start - self.min) / (self.max - self.min)) * PI
    }
}

/// Sample a channel `elapsed_ms` after the animation epoch.
pub fn next_sample(param: &WaveParam, elapsed_ms: f64) -> f64 {
    if param.max <= param.min {
        // unreachable through `WaveParam::new`; keep output finite anyway
        return param.min;
    }
    let amplitude = param.amplitude();
    let vertical_shift = param.min + amplitude;
    let angular = ((2.0 * PI) / WAVE_PERIOD_MS) * elapsed_ms;
    amplitude * (angular - param.phase_shift()).sin() + vertical_shift
}
