/*!
 * SJF Policy
 * Non-preemptive shortest job first over the arrived set
 */

use super::run::Run;
use crate::core::errors::{Result, SimulationError};
use crate::process::ProcessSpec;
use tracing::debug;

pub(super) fn schedule(run: &mut Run<'_>) -> Result<()> {
    let mut remaining: Vec<&ProcessSpec> = run.specs().iter().collect();

    while !remaining.is_empty() {
        let now = run.now();

        // min_by_key keeps the first minimum, so ties go to caller order
        let shortest = remaining
            .iter()
            .enumerate()
            .filter(|(_, spec)| spec.arrival_time <= now)
            .min_by_key(|(_, spec)| spec.burst_time)
            .map(|(index, _)| index);

        let Some(index) = shortest else {
            let next_arrival = remaining
                .iter()
                .map(|spec| spec.arrival_time)
                .min()
                .ok_or_else(|| {
                    SimulationError::InternalInvariant("SJF remaining set emptied".to_string())
                })?;
            run.idle_until(next_arrival)?;
            continue;
        };

        let spec = remaining.remove(index);
        let slice = run.execute(spec.pid, spec.burst_time)?;
        debug!(pid = spec.pid, start = slice.start, end = slice.end, "SJF dispatch");
    }

    Ok(())
}
