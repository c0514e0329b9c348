/*!
 * Round-Robin Policy
 * Fixed quantum over a FIFO ready queue
 */

use super::run::Run;
use super::types::TimeQuantum;
use crate::core::errors::Result;
use crate::core::types::Pid;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// FIFO ready queue with membership tracking so a pid is never queued twice
#[derive(Debug, Default)]
struct ReadyQueue {
    queue: VecDeque<Pid>,
    queued: HashSet<Pid>,
}

impl ReadyQueue {
    fn push(&mut self, pid: Pid) {
        if self.queued.insert(pid) {
            self.queue.push_back(pid);
        }
    }

    fn pop(&mut self) -> Option<Pid> {
        let pid = self.queue.pop_front()?;
        self.queued.remove(&pid);
        Some(pid)
    }

    fn contains(&self, pid: Pid) -> bool {
        self.queued.contains(&pid)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Enqueue arrived, unfinished, not yet queued processes in caller order
    fn admit(&mut self, run: &Run<'_>, exclude: Option<Pid>) {
        let arrivals: Vec<Pid> = run
            .ready()
            .map(|(spec, _)| spec.pid)
            .filter(|&pid| !self.contains(pid) && Some(pid) != exclude)
            .collect();

        for pid in arrivals {
            self.push(pid);
        }
    }
}

pub(super) fn schedule(run: &mut Run<'_>, quantum: TimeQuantum) -> Result<()> {
    let mut ready = ReadyQueue::default();

    for spec in run.specs().iter().filter(|spec| spec.arrival_time <= 0) {
        ready.push(spec.pid);
    }

    while !ready.is_empty() || run.has_incomplete() {
        ready.admit(run, None);

        let Some(pid) = ready.pop() else {
            let next_arrival = run.next_arrival()?;
            run.idle_until(next_arrival)?;
            continue;
        };

        let slice = run.execute(pid, quantum.get())?;
        debug!(
            pid,
            start = slice.start,
            end = slice.end,
            completed = slice.completed,
            "RR slice"
        );

        // Arrivals during the slice queue ahead of the preempted process
        ready.admit(run, Some(pid));

        if !slice.completed {
            ready.push(pid);
        }
    }

    Ok(())
}
