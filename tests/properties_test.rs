/*!
 * Property Tests
 * Schedule invariants over randomly generated valid workloads
 */

use cpu_sched_sim::{simulate, Label, Policy, ProcessSpec, SimulationResult, Tick};
use proptest::prelude::*;

fn workload_strategy() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..30, 1i64..12), 1..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| ProcessSpec::new(i as u32 + 1, arrival, burst))
            .collect()
    })
}

fn policy_strategy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

fn check_schedule(
    result: &SimulationResult,
    processes: &[ProcessSpec],
) -> Result<(), TestCaseError> {
    // Per-process metric ordering
    for outcome in &result.processes {
        prop_assert!(outcome.waiting_time >= 0);
        prop_assert!(outcome.response_time >= 0);
        prop_assert!(outcome.response_time <= outcome.waiting_time);
        prop_assert!(outcome.turnaround_time >= outcome.burst_time);
        prop_assert!(outcome.completion_time >= outcome.arrival_time + outcome.burst_time);
    }
    prop_assert_eq!(result.processes.len(), processes.len());

    // Gap-free, overlap-free, merged timeline starting at 0
    let entries = result.timeline.entries();
    prop_assert_eq!(entries.first().map(|e| e.start), Some(0));
    for entry in entries {
        prop_assert!(entry.start < entry.end);
    }
    for pair in entries.windows(2) {
        prop_assert_eq!(pair[0].end, pair[1].start);
        prop_assert_ne!(pair[0].label, pair[1].label);
    }

    // Executed time matches total demand, per process and overall
    let total_burst: Tick = processes.iter().map(|p| p.burst_time).sum();
    prop_assert_eq!(result.timeline.busy_time(), total_burst);
    for spec in processes {
        let executed: Tick = entries
            .iter()
            .filter(|e| e.label == Label::Process(spec.pid))
            .map(|e| e.duration())
            .sum();
        prop_assert_eq!(executed, spec.burst_time);
    }

    // Nothing runs before it arrives
    for entry in entries {
        if let Label::Process(pid) = entry.label {
            let spec = processes.iter().find(|p| p.pid == pid).unwrap();
            prop_assert!(entry.start >= spec.arrival_time);
        }
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_schedule_invariants(
        processes in workload_strategy(),
        policy in policy_strategy(),
        quantum in 1i64..6,
    ) {
        let result = simulate(policy, &processes, Some(quantum)).unwrap();
        check_schedule(&result, &processes)?;
    }

    #[test]
    fn prop_simulation_is_deterministic(
        processes in workload_strategy(),
        policy in policy_strategy(),
    ) {
        let first = simulate(policy, &processes, None).unwrap();
        let second = simulate(policy, &processes, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_preemptive_runs_are_single_slices(
        processes in workload_strategy(),
    ) {
        for policy in Policy::ALL.into_iter().filter(|p| !p.is_preemptive()) {
            let result = simulate(policy, &processes, None).unwrap();
            prop_assert_eq!(result.stats.preemptions, 0);
            for outcome in &result.processes {
                prop_assert_eq!(outcome.response_time, outcome.waiting_time);
            }
        }
    }

    #[test]
    fn prop_fifo_runs_in_stable_arrival_order(
        processes in workload_strategy(),
    ) {
        let result = simulate(Policy::Fifo, &processes, None).unwrap();
        let executed: Vec<u32> = result
            .timeline
            .iter()
            .filter_map(|e| e.label.pid())
            .collect();

        let mut expected = processes.clone();
        expected.sort_by_key(|p| p.arrival_time);
        let expected: Vec<u32> = expected.iter().map(|p| p.pid).collect();
        prop_assert_eq!(executed, expected);
    }
}
