/*!
 * Run State
 * Working copy of process state, logical clock, and timeline for one run
 */

use super::result::SimulationResult;
use super::types::{Policy, TimeQuantum};
use crate::core::errors::{Result, SimulationError};
use crate::core::types::{Pid, Tick};
use crate::metrics::{Averages, ProcessOutcome, RunStats};
use crate::process::{ProcessSpec, ProcessState};
use crate::timeline::{Label, Timeline};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// One executed slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Slice {
    pub start: Tick,
    pub end: Tick,
    pub completed: bool,
}

/// State owned by a single policy invocation
///
/// Built fresh from the immutable specs on every run, so runs never observe
/// each other's mutations.
pub(super) struct Run<'a> {
    specs: &'a [ProcessSpec],
    states: BTreeMap<Pid, ProcessState>,
    timeline: Timeline,
    clock: Tick,
    total_burst: Tick,
    // Latest instant any valid schedule can reach
    bound: Tick,
}

impl<'a> Run<'a> {
    /// Fails if the schedule horizon does not fit in a `Tick`
    pub fn new(specs: &'a [ProcessSpec]) -> Result<Self> {
        let overflow = || {
            SimulationError::InternalInvariant(
                "workload horizon overflows the time axis".to_string(),
            )
        };

        let total_burst = specs
            .iter()
            .try_fold(0 as Tick, |total, spec| total.checked_add(spec.burst_time))
            .ok_or_else(overflow)?;
        let max_arrival = specs.iter().map(|s| s.arrival_time).max().unwrap_or(0);
        let bound = max_arrival.checked_add(total_burst).ok_or_else(overflow)?;

        let states = specs
            .iter()
            .map(|spec| (spec.pid, ProcessState::new(spec)))
            .collect();

        Ok(Self {
            specs,
            states,
            timeline: Timeline::new(),
            clock: 0,
            total_burst,
            bound,
        })
    }

    /// Specs in caller order
    #[inline]
    pub fn specs(&self) -> &'a [ProcessSpec] {
        self.specs
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock
    }

    pub fn has_incomplete(&self) -> bool {
        self.states.values().any(|state| !state.is_complete())
    }

    /// Arrived, unfinished processes in caller order, with remaining time
    pub fn ready(&self) -> impl Iterator<Item = (&'a ProcessSpec, Tick)> + '_ {
        let now = self.clock;
        self.specs.iter().filter_map(move |spec| {
            let state = self.states.get(&spec.pid)?;
            (spec.arrival_time <= now && !state.is_complete())
                .then_some((spec, state.remaining_time()))
        })
    }

    /// Earliest arrival among unfinished processes that have not arrived yet
    pub fn next_arrival(&self) -> Result<Tick> {
        let now = self.clock;
        self.specs
            .iter()
            .filter(|spec| spec.arrival_time > now)
            .filter(|spec| self.states.get(&spec.pid).is_some_and(|s| !s.is_complete()))
            .map(|spec| spec.arrival_time)
            .min()
            .ok_or_else(|| {
                SimulationError::InternalInvariant(format!(
                    "no process left to arrive after {}",
                    now
                ))
            })
    }

    /// Advance the clock to `until`, recording the gap as idle
    pub fn idle_until(&mut self, until: Tick) -> Result<()> {
        if until <= self.clock {
            return Ok(());
        }
        self.check_bound(until)?;

        debug!(from = self.clock, to = until, "CPU idle");
        self.timeline.record(Label::Idle, self.clock, until);
        self.clock = until;
        Ok(())
    }

    /// Dispatch `pid` and run it for up to `units`, advancing the clock
    pub fn execute(&mut self, pid: Pid, units: Tick) -> Result<Slice> {
        let start = self.clock;
        let state = self.states.get_mut(&pid).ok_or_else(|| {
            SimulationError::InternalInvariant(format!("process {} is not part of this run", pid))
        })?;

        if state.is_complete() {
            return Err(SimulationError::InternalInvariant(format!(
                "process {} dispatched after completion",
                pid
            )));
        }

        if state.dispatch(start) {
            debug!(pid, at = start, "first dispatch");
        }
        let executed = state.execute(units, start);
        let completed = state.is_complete();
        let end = start + executed;

        self.check_bound(end)?;
        self.timeline.record(Label::Process(pid), start, end);
        self.clock = end;

        Ok(Slice {
            start,
            end,
            completed,
        })
    }

    fn check_bound(&self, until: Tick) -> Result<()> {
        if until > self.bound {
            return Err(SimulationError::InternalInvariant(format!(
                "clock advanced to {} past safety bound {}",
                until, self.bound
            )));
        }
        Ok(())
    }

    /// Derive metrics and seal the run into an immutable result
    pub fn finish(self, policy: Policy, quantum: Option<TimeQuantum>) -> Result<SimulationResult> {
        let processes = self
            .specs
            .iter()
            .map(|spec| {
                let state = self.states.get(&spec.pid).ok_or_else(|| {
                    SimulationError::InternalInvariant(format!(
                        "process {} has no run state",
                        spec.pid
                    ))
                })?;
                ProcessOutcome::derive(spec, state)
            })
            .collect::<Result<Vec<_>>>()?;

        if self.timeline.busy_time() != self.total_burst {
            return Err(SimulationError::InternalInvariant(format!(
                "timeline executes {} units but workload needs {}",
                self.timeline.busy_time(),
                self.total_burst
            )));
        }

        let averages = Averages::from_outcomes(&processes);
        let stats = RunStats::collect(&self.timeline, &processes);

        info!(
            policy = %policy,
            processes = processes.len(),
            makespan = stats.makespan,
            context_switches = stats.context_switches,
            preemptions = stats.preemptions,
            "Simulation complete"
        );

        Ok(SimulationResult {
            policy,
            quantum: quantum.map(|q| q.get()),
            timeline: self.timeline,
            processes,
            averages,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_records_and_advances() {
        let specs = [ProcessSpec::new(1, 0, 5)];
        let mut run = Run::new(&specs).unwrap();

        let slice = run.execute(1, 3).unwrap();
        assert_eq!(
            slice,
            Slice {
                start: 0,
                end: 3,
                completed: false
            }
        );
        assert_eq!(run.now(), 3);

        let slice = run.execute(1, 3).unwrap();
        assert_eq!(slice.end, 5);
        assert!(slice.completed);
        assert!(!run.has_incomplete());
        assert_eq!(run.timeline.len(), 1);
    }

    #[test]
    fn test_execute_unknown_or_finished_process_fails() {
        let specs = [ProcessSpec::new(1, 0, 1)];
        let mut run = Run::new(&specs).unwrap();

        assert!(run.execute(9, 1).is_err());
        run.execute(1, 1).unwrap();
        assert!(matches!(
            run.execute(1, 1),
            Err(SimulationError::InternalInvariant(_))
        ));
    }

    #[test]
    fn test_idle_past_bound_fails() {
        let specs = [ProcessSpec::new(1, 2, 1)];
        let mut run = Run::new(&specs).unwrap();

        assert!(run.idle_until(2).is_ok());
        assert!(matches!(
            run.idle_until(10),
            Err(SimulationError::InternalInvariant(_))
        ));
    }

    #[test]
    fn test_new_rejects_overflowing_horizon() {
        let specs = [ProcessSpec::new(1, Tick::MAX - 1, 2)];
        assert!(matches!(
            Run::new(&specs),
            Err(SimulationError::InternalInvariant(_))
        ));
    }

    #[test]
    fn test_next_arrival_skips_arrived_and_finished() {
        let specs = [
            ProcessSpec::new(1, 0, 1),
            ProcessSpec::new(2, 9, 1),
            ProcessSpec::new(3, 4, 1),
        ];
        let mut run = Run::new(&specs).unwrap();
        assert_eq!(run.next_arrival().unwrap(), 4);

        run.execute(1, 1).unwrap();
        run.idle_until(4).unwrap();
        run.execute(3, 1).unwrap();
        assert_eq!(run.next_arrival().unwrap(), 9);

        run.idle_until(9).unwrap();
        run.execute(2, 1).unwrap();
        assert!(run.next_arrival().is_err());
    }

    #[test]
    fn test_ready_respects_arrival_and_completion() {
        let specs = [
            ProcessSpec::new(1, 0, 1),
            ProcessSpec::new(2, 0, 2),
            ProcessSpec::new(3, 4, 1),
        ];
        let mut run = Run::new(&specs).unwrap();
        run.execute(1, 1).unwrap();

        let ready: Vec<Pid> = run.ready().map(|(spec, _)| spec.pid).collect();
        assert_eq!(ready, vec![2]);
    }

    #[test]
    fn test_finish_rejects_unfinished_run() {
        let specs = [ProcessSpec::new(1, 0, 2)];
        let mut run = Run::new(&specs).unwrap();
        run.execute(1, 1).unwrap();

        assert!(run.finish(Policy::Fifo, None).is_err());
    }
}
