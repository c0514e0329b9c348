/*!
 * CPU Scheduling Simulator Library
 * Deterministic FIFO, SJF, STCF, and round-robin simulation with metrics
 */

pub mod config;
pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod timeline;

// Re-exports
pub use config::SimulatorConfig;
pub use crate::core::errors::{Result, SimulationError, ValidationError};
pub use crate::core::types::{Pid, Tick};
pub use metrics::{Averages, ProcessOutcome, RunStats};
pub use monitoring::init_tracing;
pub use process::{ProcessSpec, ProcessState};
pub use scheduler::{simulate, Policy, SimulationResult, Simulator, TimeQuantum, DEFAULT_QUANTUM};
pub use timeline::{Label, Timeline, TimelineEntry};
