/*!
 * Report Module
 * Text rendering of simulation results: input, results, and comparison tables
 */

mod gantt;

pub use gantt::{gantt, glyph_for, IDLE_GLYPH, MAX_GANTT_WIDTH};

use crate::process::ProcessSpec;
use crate::scheduler::SimulationResult;

const RULE_WIDTH: usize = 60;

fn banner(title: &str) -> [String; 3] {
    let rule = "=".repeat(RULE_WIDTH);
    [rule.clone(), title.to_string(), rule]
}

fn join(lines: Vec<String>) -> String {
    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Workload as supplied, one row per process
pub fn input_table(processes: &[ProcessSpec]) -> String {
    let mut lines = vec![
        "PROCESS INPUT:".to_string(),
        "PID | Arrival | Burst".to_string(),
        "----|---------|-------".to_string(),
    ];
    lines.extend(processes.iter().map(|p| {
        format!(
            "{:<4}| {:<7} | {}",
            format!("P{}", p.pid),
            p.arrival_time,
            p.burst_time
        )
    }));
    join(lines)
}

/// Per-process results of one run followed by its averages
pub fn results_table(result: &SimulationResult) -> String {
    let title = format!("{} SCHEDULING RESULTS", result.algorithm_name());
    let mut lines: Vec<String> = banner(&title).into();

    lines.push(format!(
        "{:<4} {:<8} {:<6} {:<9} {:<6} {:<6} {:<6}",
        "PID", "Arrival", "Burst", "Complete", "TAT", "WT", "RT"
    ));
    lines.push(format!(
        "{} {} {} {} {} {} {}",
        "-".repeat(4),
        "-".repeat(8),
        "-".repeat(6),
        "-".repeat(9),
        "-".repeat(6),
        "-".repeat(6),
        "-".repeat(6)
    ));

    for p in &result.processes {
        lines.push(format!(
            "P{:<3} {:<8} {:<6} {:<9} {:<6} {:<6} {:<6}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.completion_time,
            p.turnaround_time,
            p.waiting_time,
            p.response_time
        ));
    }

    lines.push(String::new());
    match result.averages {
        Some(avg) => {
            lines.push(format!("Average Turnaround Time: {:.2}", avg.turnaround));
            lines.push(format!("Average Waiting Time: {:.2}", avg.waiting));
            lines.push(format!("Average Response Time: {:.2}", avg.response));
        }
        None => {
            lines.push("Average Turnaround Time: n/a".to_string());
            lines.push("Average Waiting Time: n/a".to_string());
            lines.push("Average Response Time: n/a".to_string());
        }
    }

    join(lines)
}

/// One row of averages per algorithm
pub fn comparison_table(results: &[SimulationResult]) -> String {
    let mut lines: Vec<String> = banner("ALGORITHM COMPARISON").into();

    lines.push(format!(
        "{:<15} {:<8} {:<8} {:<8}",
        "Algorithm", "Avg TAT", "Avg WT", "Avg RT"
    ));
    lines.push(format!(
        "{} {} {} {}",
        "-".repeat(15),
        "-".repeat(8),
        "-".repeat(8),
        "-".repeat(8)
    ));

    for result in results {
        let name = result.algorithm_name();
        lines.push(match result.averages {
            Some(avg) => format!(
                "{:<15} {:<8.2} {:<8.2} {:<8.2}",
                name, avg.turnaround, avg.waiting, avg.response
            ),
            None => format!("{:<15} {:<8} {:<8} {:<8}", name, "n/a", "n/a", "n/a"),
        });
    }

    join(lines)
}
