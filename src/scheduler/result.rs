/*!
 * Simulation Result
 * Immutable output of one policy run, consumed by reports and visualizers
 */

use super::types::Policy;
use crate::core::errors::Result;
use crate::core::types::{Pid, Tick};
use crate::metrics::{Averages, ProcessOutcome, RunStats};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Outcome of a single policy run
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationResult {
    pub policy: Policy,
    /// Quantum in effect, round-robin only
    pub quantum: Option<Tick>,
    pub timeline: Timeline,
    /// Per-process outcomes in caller order
    pub processes: Vec<ProcessOutcome>,
    /// Absent when the workload was empty
    pub averages: Option<Averages>,
    pub stats: RunStats,
}

impl SimulationResult {
    /// Human-readable algorithm name, e.g. "Round Robin (Q=3)"
    pub fn algorithm_name(&self) -> String {
        match (self.policy, self.quantum) {
            (Policy::RoundRobin, Some(quantum)) => format!("Round Robin (Q={})", quantum),
            (policy, _) => policy.display_name().to_string(),
        }
    }

    pub fn process(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.processes.iter().find(|outcome| outcome.pid == pid)
    }

    pub fn makespan(&self) -> Tick {
        self.timeline.makespan()
    }

    /// Export as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
