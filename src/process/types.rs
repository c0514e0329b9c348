/*!
 * Process Types
 * Immutable process specifications and run-scoped execution state
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};

/// Immutable description of a process as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub const fn new(pid: Pid, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
        }
    }
}

/// Mutable execution state of one process during one simulation run
///
/// Owned by the run that created it; never shared between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    pid: Pid,
    burst_time: Tick,
    remaining_time: Tick,
    first_run: Option<Tick>,
    completion_time: Option<Tick>,
}

impl ProcessState {
    /// Fresh state for a process that has not been dispatched yet
    #[must_use]
    pub fn new(spec: &ProcessSpec) -> Self {
        let mut state = Self {
            pid: spec.pid,
            burst_time: spec.burst_time,
            remaining_time: 0,
            first_run: None,
            completion_time: None,
        };
        state.reset();
        state
    }

    /// Reinitialize to the not-yet-dispatched state
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.first_run = None;
        self.completion_time = None;
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    #[inline]
    pub fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    /// Time of first dispatch, `None` until the process has run
    #[inline]
    pub fn first_run(&self) -> Option<Tick> {
        self.first_run
    }

    #[inline]
    pub fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Record a dispatch at `now`. Returns true on the first dispatch only.
    pub(crate) fn dispatch(&mut self, now: Tick) -> bool {
        if self.first_run.is_some() {
            return false;
        }
        self.first_run = Some(now);
        true
    }

    /// Run for up to `units` starting at `start`; returns the units actually executed
    pub(crate) fn execute(&mut self, units: Tick, start: Tick) -> Tick {
        let executed = units.min(self.remaining_time).max(0);
        self.remaining_time -= executed;
        if self.remaining_time == 0 && self.completion_time.is_none() {
            self.completion_time = Some(start + executed);
        }
        executed
    }
}
