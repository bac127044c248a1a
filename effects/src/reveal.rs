//! One-shot bookkeeping for elements entering the viewport.
//!
//! Each observed element fires at most once. Statistic elements (those
//! carrying a numeric target) start a [`CounterRamp`]; everything else gets a
//! persistent "visible" mark. The ledger records which ids have fired so the
//! browser side can stop observing them and ignore late notifications.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

use crate::ramp::CounterRamp;

/// Action to take for an element seen for the first time.
#[derive(Debug, Clone, PartialEq)]
pub enum Reveal {
    /// Add the persistent visible mark.
    Mark,
    /// Start counting up to the element's target.
    Count(CounterRamp),
}

#[derive(Debug, Default)]
pub struct RevealLedger {
    fired: HashSet<String>,
}

impl RevealLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` became visible.
    ///
    /// Returns `None` if the element already fired; re-entering the viewport
    /// never re-animates.
    pub fn on_became_visible(&mut self, id: &str, target: Option<u32>) -> Option<Reveal> {
        if !self.fired.insert(id.to_owned()) {
            return None;
        }
        Some(match target {
            Some(target) => Reveal::Count(CounterRamp::new(target)),
            None => Reveal::Mark,
        })
    }

    #[cfg(test)]
    pub(crate) fn has_fired(&self, id: &str) -> bool {
        self.fired.contains(id)
    }

    #[cfg(test)]
    pub(crate) fn fired_count(&self) -> usize {
        self.fired.len()
    }
}
