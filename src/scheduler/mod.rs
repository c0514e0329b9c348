/*!
 * Scheduling Engine
 * Deterministic single-CPU simulation of FIFO, SJF, STCF, and round-robin
 */

mod fifo;
mod result;
mod round_robin;
mod run;
mod sjf;
mod stcf;
mod types;

pub use result::SimulationResult;
pub use types::{Policy, TimeQuantum, DEFAULT_QUANTUM};

use crate::config::SimulatorConfig;
use crate::core::errors::Result;
use crate::core::types::Tick;
use crate::process::{validate_processes, ProcessSpec};
use run::Run;
use tracing::{info, instrument, warn};

/// Simulate `policy` over `processes`
///
/// `quantum` applies to round-robin only (default [`DEFAULT_QUANTUM`]) and is
/// ignored by the other policies. Input is validated before any state is built.
pub fn simulate(
    policy: Policy,
    processes: &[ProcessSpec],
    quantum: Option<Tick>,
) -> Result<SimulationResult> {
    validate_processes(processes)?;

    let quantum = match quantum {
        Some(ticks) if policy.uses_quantum() => TimeQuantum::new(ticks)?,
        Some(ticks) => {
            warn!(policy = %policy, quantum = ticks, "Quantum ignored by non round-robin policy");
            TimeQuantum::default()
        }
        None => TimeQuantum::default(),
    };

    execute(policy, processes, quantum)
}

/// Run a validated workload on a fresh working copy
#[instrument(level = "debug", skip(processes), fields(processes = processes.len()))]
fn execute(
    policy: Policy,
    processes: &[ProcessSpec],
    quantum: TimeQuantum,
) -> Result<SimulationResult> {
    info!(
        policy = %policy,
        processes = processes.len(),
        quantum = quantum.get(),
        "Starting simulation"
    );

    let mut run = Run::new(processes)?;
    match policy {
        Policy::Fifo => fifo::schedule(&mut run)?,
        Policy::Sjf => sjf::schedule(&mut run)?,
        Policy::Stcf => stcf::schedule(&mut run)?,
        Policy::RoundRobin => round_robin::schedule(&mut run, quantum)?,
    }

    run.finish(policy, policy.uses_quantum().then_some(quantum))
}

/// Holds an immutable, validated workload and runs policies over it
///
/// Every run starts from a fresh copy of the process state, so runs may be
/// made in any order (or from several threads) without affecting each other.
#[derive(Debug, Clone)]
pub struct Simulator {
    processes: Vec<ProcessSpec>,
    quantum: TimeQuantum,
}

impl Simulator {
    /// Create simulator with the default quantum
    pub fn new(processes: Vec<ProcessSpec>) -> Result<Self> {
        validate_processes(&processes)?;
        Ok(Self {
            processes,
            quantum: TimeQuantum::default(),
        })
    }

    /// Create simulator with custom round-robin quantum
    pub fn with_quantum(processes: Vec<ProcessSpec>, quantum: Tick) -> Result<Self> {
        let quantum = TimeQuantum::new(quantum)?;
        let mut simulator = Self::new(processes)?;
        simulator.quantum = quantum;
        Ok(simulator)
    }

    pub fn from_config(processes: Vec<ProcessSpec>, config: &SimulatorConfig) -> Result<Self> {
        Self::with_quantum(processes, config.quantum)
    }

    #[inline]
    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }

    #[inline]
    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Run one policy with the configured quantum
    pub fn run(&self, policy: Policy) -> Result<SimulationResult> {
        execute(policy, &self.processes, self.quantum)
    }

    /// Run round-robin with a one-off quantum
    pub fn run_round_robin(&self, quantum: Tick) -> Result<SimulationResult> {
        execute(Policy::RoundRobin, &self.processes, TimeQuantum::new(quantum)?)
    }

    /// Run each policy in order
    pub fn run_all(&self, policies: &[Policy]) -> Result<Vec<SimulationResult>> {
        policies.iter().map(|&policy| self.run(policy)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{SimulationError, ValidationError};
    use crate::timeline::{Label, TimelineEntry};

    fn workload() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 0, 5),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 2, 8),
            ProcessSpec::new(4, 3, 6),
        ]
    }

    #[test]
    fn test_fifo_basic() {
        let result = simulate(Policy::Fifo, &workload(), None).unwrap();
        let completions: Vec<_> = result.processes.iter().map(|p| p.completion_time).collect();
        assert_eq!(completions, vec![5, 8, 16, 22]);
        assert_eq!(result.quantum, None);
    }

    #[test]
    fn test_round_robin_reports_quantum() {
        let result = simulate(Policy::RoundRobin, &workload(), Some(4)).unwrap();
        assert_eq!(result.quantum, Some(4));
        assert_eq!(result.algorithm_name(), "Round Robin (Q=4)");
    }

    #[test]
    fn test_quantum_ignored_for_other_policies() {
        let result = simulate(Policy::Sjf, &workload(), Some(0)).unwrap();
        assert_eq!(result.quantum, None);
        assert_eq!(result.algorithm_name(), "SJF");
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        assert_eq!(
            simulate(Policy::RoundRobin, &workload(), Some(0)),
            Err(SimulationError::Validation(
                ValidationError::NonPositiveQuantum(0)
            ))
        );
        assert!(Simulator::with_quantum(workload(), -2).is_err());
        assert!(Simulator::new(workload()).unwrap().run_round_robin(0).is_err());
    }

    #[test]
    fn test_idle_gap_before_first_arrival() {
        let processes = [ProcessSpec::new(1, 2, 3)];
        for policy in Policy::ALL {
            let result = simulate(policy, &processes, None).unwrap();
            assert_eq!(
                result.timeline.entries(),
                &[
                    TimelineEntry::new(Label::Idle, 0, 2),
                    TimelineEntry::new(Label::Process(1), 2, 5),
                ],
                "policy {}",
                policy
            );
        }
    }

    #[test]
    fn test_run_all_preserves_order() {
        let simulator = Simulator::new(workload()).unwrap();
        let results = simulator.run_all(&Policy::ALL).unwrap();
        let policies: Vec<_> = results.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }
}
