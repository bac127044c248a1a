//! Pacing windows for high-frequency browser events.
//!
//! Both types are clock-free: callers pass timestamps or hold tickets, so the
//! same logic runs under `requestAnimationFrame`, `gloo-timers`, and tests.

#[cfg(test)]
#[path = "pace_test.rs"]
mod pace_test;

/// Outcome of offering a call to a [`Throttle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Run now; a new window opens.
    Run,
    /// Dropped, but the window owes one trailing run. Arm a timer for
    /// `after_ms` and redeem it with [`Throttle::flush`].
    Defer { after_ms: f64 },
    /// Dropped; a trailing run is already armed for this window.
    Pending,
}

/// Leading- and trailing-edge throttle.
///
/// The first call runs. Calls within the following window are dropped, except
/// that the first dropped call asks for one trailing run at the window's end,
/// so the last event of a burst is never lost.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    window_ms: f64,
    last_admitted_ms: Option<f64>,
    trailing: bool,
}

impl Throttle {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, last_admitted_ms: None, trailing: false }
    }

    /// Offer a call at `now_ms`.
    pub fn admit(&mut self, now_ms: f64) -> Gate {
        if let Some(last) = self.last_admitted_ms {
            let elapsed = now_ms - last;
            if (0.0..self.window_ms).contains(&elapsed) {
                if self.trailing {
                    return Gate::Pending;
                }
                self.trailing = true;
                return Gate::Defer { after_ms: self.window_ms - elapsed };
            }
        }
        // A leading run supersedes any trailing run still owed.
        self.trailing = false;
        self.last_admitted_ms = Some(now_ms);
        Gate::Run
    }

    /// Redeem a deferred run at `now_ms`.
    ///
    /// Returns `false` when a leading run already happened since the deferral.
    pub fn flush(&mut self, now_ms: f64) -> bool {
        if !self.trailing {
            return false;
        }
        self.trailing = false;
        self.last_admitted_ms = Some(now_ms);
        true
    }
}

/// Trailing-edge debounce bookkeeping.
///
/// Every [`Debounce::schedule`] supersedes the tickets issued before it; only
/// the holder of the latest ticket may run once its quiet period elapses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}
