//! Runtime diagnostics: transition history and on-demand snapshots.
//!
//! Keeps the last few arbitration changes in a fixed-capacity ring so a
//! host can answer "what has the LED been doing" without scraping logs.
//! Nothing here persists across restarts.

use serde::{Deserialize, Serialize};

use crate::state::StatusState;

/// Ring capacity for recent transitions.
const TRANSITION_SLOTS: usize = 8;

/// One arbitration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: StatusState,
    pub to: StatusState,
    pub at_ms: u32,
}

/// Fixed-capacity history of recent transitions; oldest entries fall off.
#[derive(Debug, Default)]
pub struct TransitionLog {
    entries: heapless::Deque<Transition, TRANSITION_SLOTS>,
    total: u32,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, from: StatusState, to: StatusState, at_ms: u32) {
        if self.entries.is_full() {
            let _ = self.entries.pop_front();
        }
        let _ = self.entries.push_back(Transition { from, to, at_ms });
        self.total = self.total.wrapping_add(1);
    }

    /// Total transitions observed since construction, including those
    /// that have fallen out of the ring.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Retained transitions, oldest first.
    pub fn recent(&self) -> heapless::Vec<Transition, TRANSITION_SLOTS> {
        let mut out = heapless::Vec::new();
        for t in &self.entries {
            let _ = out.push(*t);
        }
        out
    }
}

/// On-demand diagnostics snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// State currently shown.
    pub state: StatusState,
    /// Milliseconds the current state has been shown.
    pub ms_in_state: u32,
    /// Total transitions since startup.
    pub transitions: u32,
    /// Recent transition history, oldest first.
    pub recent: heapless::Vec<Transition, TRANSITION_SLOTS>,
}
