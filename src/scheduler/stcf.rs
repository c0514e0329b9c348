/*!
 * STCF Policy
 * Preemptive shortest remaining time first, one time unit per decision
 */

use super::run::Run;
use crate::core::errors::Result;
use tracing::trace;

pub(super) fn schedule(run: &mut Run<'_>) -> Result<()> {
    while run.has_incomplete() {
        let now = run.now();

        // First minimum in caller order wins ties
        let next = run
            .ready()
            .min_by_key(|&(_, remaining)| remaining)
            .map(|(spec, _)| spec.pid);

        match next {
            Some(pid) => {
                let slice = run.execute(pid, 1)?;
                trace!(pid, at = now, completed = slice.completed, "STCF unit");
            }
            None => {
                let next_arrival = run.next_arrival()?;
                run.idle_until(next_arrival)?;
            }
        }
    }

    Ok(())
}
