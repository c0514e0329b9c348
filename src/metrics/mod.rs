/*!
 * Metrics Module
 * Per-process turnaround/waiting/response derivation and run-wide aggregates
 */

mod stats;

pub use stats::RunStats;

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{Pid, Tick};
use crate::process::{ProcessSpec, ProcessState};
use serde::{Deserialize, Serialize};

/// Final record of a completed process with its derived metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessOutcome {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub first_run: Tick,
    pub completion_time: Tick,
    /// completion - arrival
    pub turnaround_time: Tick,
    /// turnaround - burst
    pub waiting_time: Tick,
    /// first_run - arrival
    pub response_time: Tick,
}

impl ProcessOutcome {
    /// Derive metrics for a finished process
    ///
    /// Fails with `InternalInvariant` if the process never ran to completion
    /// or the derived values break the ordering every valid schedule obeys.
    pub fn derive(spec: &ProcessSpec, state: &ProcessState) -> Result<Self> {
        let (first_run, completion_time) = match (state.first_run(), state.completion_time()) {
            (Some(first_run), Some(completion)) if state.is_complete() => (first_run, completion),
            _ => {
                return Err(SimulationError::InternalInvariant(format!(
                    "process {} did not complete (remaining {})",
                    spec.pid,
                    state.remaining_time()
                )))
            }
        };

        let turnaround_time = completion_time - spec.arrival_time;
        let waiting_time = turnaround_time - spec.burst_time;
        let response_time = first_run - spec.arrival_time;

        if waiting_time < 0 || response_time < 0 || response_time > waiting_time {
            return Err(SimulationError::InternalInvariant(format!(
                "process {} has inconsistent metrics: turnaround={}, waiting={}, response={}",
                spec.pid, turnaround_time, waiting_time, response_time
            )));
        }

        Ok(Self {
            pid: spec.pid,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            first_run,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        })
    }
}

/// Mean metrics over every process of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Averages {
    pub turnaround: f64,
    pub waiting: f64,
    pub response: f64,
}

impl Averages {
    /// `None` for an empty run, never a division by zero
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Option<Self> {
        if outcomes.is_empty() {
            return None;
        }

        let count = outcomes.len() as f64;
        let mean = |metric: fn(&ProcessOutcome) -> Tick| {
            outcomes.iter().map(metric).sum::<Tick>() as f64 / count
        };

        Some(Self {
            turnaround: mean(|o| o.turnaround_time),
            waiting: mean(|o| o.waiting_time),
            response: mean(|o| o.response_time),
        })
    }
}
