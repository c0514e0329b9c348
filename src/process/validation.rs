/*!
 * Process Workload Validation
 * Reject malformed process lists before any run state is built
 */

use super::types::ProcessSpec;
use crate::core::errors::ValidationError;
use crate::core::types::Tick;
use std::collections::HashSet;

/// Validate a workload: positive unique pids, positive bursts, non-negative arrivals,
/// and a horizon (latest arrival + total burst) that fits in a `Tick`
pub fn validate_processes(processes: &[ProcessSpec]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(processes.len());
    let mut total_burst: Tick = 0;
    let mut max_arrival: Tick = 0;

    for spec in processes {
        if spec.pid == 0 {
            return Err(ValidationError::InvalidPid(spec.pid));
        }

        if spec.burst_time <= 0 {
            return Err(ValidationError::NonPositiveBurst {
                pid: spec.pid,
                burst_time: spec.burst_time,
            });
        }

        if spec.arrival_time < 0 {
            return Err(ValidationError::NegativeArrival {
                pid: spec.pid,
                arrival_time: spec.arrival_time,
            });
        }

        if !seen.insert(spec.pid) {
            return Err(ValidationError::DuplicatePid(spec.pid));
        }

        total_burst = total_burst.checked_add(spec.burst_time).ok_or_else(|| {
            ValidationError::HorizonOverflow(format!(
                "total burst time overflows at process {}",
                spec.pid
            ))
        })?;
        max_arrival = max_arrival.max(spec.arrival_time);
    }

    max_arrival.checked_add(total_burst).ok_or_else(|| {
        ValidationError::HorizonOverflow(format!(
            "latest arrival {} plus total burst {}",
            max_arrival, total_burst
        ))
    })?;

    Ok(())
}

/// Validate a round-robin quantum
pub fn validate_quantum(quantum: Tick) -> Result<Tick, ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::NonPositiveQuantum(quantum));
    }
    Ok(quantum)
}
