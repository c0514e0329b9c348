/*!
 * FIFO Policy
 * Run to completion in arrival order
 */

use super::run::Run;
use crate::core::errors::Result;
use crate::process::ProcessSpec;
use tracing::debug;

pub(super) fn schedule(run: &mut Run<'_>) -> Result<()> {
    // Stable sort: equal arrivals keep caller order
    let mut order: Vec<&ProcessSpec> = run.specs().iter().collect();
    order.sort_by_key(|spec| spec.arrival_time);

    for spec in order {
        if run.now() < spec.arrival_time {
            run.idle_until(spec.arrival_time)?;
        }

        let slice = run.execute(spec.pid, spec.burst_time)?;
        debug!(pid = spec.pid, start = slice.start, end = slice.end, "FIFO dispatch");
    }

    Ok(())
}
