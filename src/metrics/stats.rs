/*!
 * Run Statistics
 * Whole-run CPU usage figures derived from the finished timeline
 */

use super::ProcessOutcome;
use crate::core::types::{Pid, Tick};
use crate::timeline::{Label, Timeline};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Run-wide statistics on the logical time axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunStats {
    pub makespan: Tick,
    pub busy_time: Tick,
    pub idle_time: Tick,
    /// busy_time / makespan
    pub utilization: f64,
    /// completed processes per time unit
    pub throughput: f64,
    /// switches from one process to a different one (idle gaps ignored)
    pub context_switches: u64,
    /// execution intervals that end before their process completes
    pub preemptions: u64,
}

impl RunStats {
    pub fn collect(timeline: &Timeline, outcomes: &[ProcessOutcome]) -> Self {
        let makespan = timeline.makespan();
        if makespan == 0 {
            return Self::default();
        }

        let completions: HashMap<Pid, Tick> = outcomes
            .iter()
            .map(|outcome| (outcome.pid, outcome.completion_time))
            .collect();

        let mut context_switches = 0;
        let mut preemptions = 0;
        let mut previous: Option<Pid> = None;

        for entry in timeline {
            let Label::Process(pid) = entry.label else {
                continue;
            };

            if previous.is_some_and(|prev| prev != pid) {
                context_switches += 1;
            }
            previous = Some(pid);

            if completions
                .get(&pid)
                .is_some_and(|&completion| entry.end < completion)
            {
                preemptions += 1;
            }
        }

        let busy_time = timeline.busy_time();
        let idle_time = timeline.idle_time();

        Self {
            makespan,
            busy_time,
            idle_time,
            utilization: busy_time as f64 / makespan as f64,
            throughput: outcomes.len() as f64 / makespan as f64,
            context_switches,
            preemptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessSpec, ProcessState};

    fn outcome(pid: Pid, burst: Tick, first_run: Tick, completion: Tick) -> ProcessOutcome {
        let spec = ProcessSpec::new(pid, 0, burst);
        let mut state = ProcessState::new(&spec);
        state.dispatch(first_run);
        state.execute(burst, completion - burst);
        ProcessOutcome::derive(&spec, &state).unwrap()
    }

    #[test]
    fn test_empty_timeline_yields_zeroes() {
        assert_eq!(RunStats::collect(&Timeline::new(), &[]), RunStats::default());
    }

    #[test]
    fn test_preemption_and_switch_counts() {
        let mut timeline = Timeline::new();
        timeline.record(Label::Process(1), 0, 2);
        timeline.record(Label::Process(2), 2, 4);
        timeline.record(Label::Idle, 4, 6);
        timeline.record(Label::Process(1), 6, 8);

        let outcomes = [outcome(1, 4, 0, 8), outcome(2, 2, 2, 4)];
        let stats = RunStats::collect(&timeline, &outcomes);

        assert_eq!(stats.makespan, 8);
        assert_eq!(stats.busy_time, 6);
        assert_eq!(stats.idle_time, 2);
        assert_eq!(stats.context_switches, 2);
        assert_eq!(stats.preemptions, 1);
        assert_eq!(stats.utilization, 0.75);
        assert_eq!(stats.throughput, 0.25);
    }
}
