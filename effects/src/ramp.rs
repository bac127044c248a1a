//! Statistic counter ramp.
//!
//! A ramp counts from zero to a fixed target over [`RAMP_DURATION_MS`],
//! advancing once every [`RAMP_FRAME_MS`]. The running total is real-valued;
//! the displayed value is its floor until the total reaches the target, at
//! which point the ramp reports the target exactly and stops.

#[cfg(test)]
#[path = "ramp_test.rs"]
mod ramp_test;

use crate::consts::{RAMP_DURATION_MS, RAMP_FRAME_MS};

/// Outcome of one ramp tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampTick {
    /// Display this value and schedule another tick.
    Running(u32),
    /// Display this value; no further ticks.
    Finished(u32),
}

impl RampTick {
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Number of ticks a ramp nominally takes.
#[must_use]
pub fn ramp_steps() -> f64 {
    f64::from(RAMP_DURATION_MS) / f64::from(RAMP_FRAME_MS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterRamp {
    target: u32,
    increment: f64,
    total: f64,
    finished: bool,
}

impl CounterRamp {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target, increment: f64::from(target) / ramp_steps(), total: 0.0, finished: false }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame.
    ///
    /// A zero target finishes on the first tick. Ticking a finished ramp keeps
    /// returning `Finished(target)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self) -> RampTick {
        if self.finished {
            return RampTick::Finished(self.target);
        }
        self.total += self.increment;
        if self.total < f64::from(self.target) {
            // total is in [0, target) here, so the cast cannot wrap.
            RampTick::Running(self.total.floor() as u32)
        } else {
            self.finished = true;
            RampTick::Finished(self.target)
        }
    }
}
