/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Runs the configured policies over the sample workload and prints:
 * - the workload
 * - per-policy results tables and text Gantt charts
 * - an algorithm comparison table
 */

use cpu_sched_sim::{init_tracing, report, ProcessSpec, Simulator, SimulatorConfig};
use tracing::info;

/// The classic four-process teaching workload
fn sample_workload() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new(1, 0, 5),
        ProcessSpec::new(2, 1, 3),
        ProcessSpec::new(3, 2, 8),
        ProcessSpec::new(4, 3, 6),
    ]
}

fn main() -> miette::Result<()> {
    init_tracing();

    let config = SimulatorConfig::from_env()?;
    info!(
        quantum = config.quantum,
        policies = ?config.policies,
        export_json = config.export_json,
        "Simulator configured"
    );

    let simulator = Simulator::from_config(sample_workload(), &config)?;
    println!("{}", report::input_table(simulator.processes()));

    let mut results = Vec::with_capacity(config.policies.len());
    for &policy in &config.policies {
        let result = simulator.run(policy)?;

        println!();
        println!("{}", report::results_table(&result));
        println!();
        println!("{}", report::gantt(&result));

        if config.export_json {
            println!("{}", result.to_json()?);
        }

        results.push(result);
    }

    println!();
    println!("{}", report::comparison_table(&results));

    Ok(())
}
