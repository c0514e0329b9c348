/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Tick};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input validation errors, raised before any simulation state exists
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Process id {0} is not a positive integer")]
    #[diagnostic(
        code(validation::invalid_pid),
        help("Process ids start at 1.")
    )]
    InvalidPid(Pid),

    #[error("Process {pid} has non-positive burst time {burst_time}")]
    #[diagnostic(
        code(validation::non_positive_burst),
        help("Every process must require at least one unit of CPU time.")
    )]
    NonPositiveBurst { pid: Pid, burst_time: Tick },

    #[error("Process {pid} has negative arrival time {arrival_time}")]
    #[diagnostic(
        code(validation::negative_arrival),
        help("Arrival times are measured from 0 on the logical time axis.")
    )]
    NegativeArrival { pid: Pid, arrival_time: Tick },

    #[error("Duplicate process id {0}")]
    #[diagnostic(
        code(validation::duplicate_pid),
        help("Process ids must be unique within a workload.")
    )]
    DuplicatePid(Pid),

    #[error("Workload horizon overflows the time axis: {0}")]
    #[diagnostic(
        code(validation::horizon_overflow),
        help("Latest arrival plus total burst time must fit in a signed 64-bit tick count.")
    )]
    HorizonOverflow(String),

    #[error("Round-robin quantum must be positive, got {0}")]
    #[diagnostic(
        code(validation::non_positive_quantum),
        help("Use a quantum of at least 1 time unit.")
    )]
    NonPositiveQuantum(Tick),

    #[error("Unknown scheduling policy '{0}'")]
    #[diagnostic(
        code(validation::unknown_policy),
        help("Valid policies: fifo, sjf, stcf, round_robin.")
    )]
    UnknownPolicy(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum SimulationError {
    #[error("Validation error: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal invariant violated: {0}")]
    #[diagnostic(
        code(simulator::internal_invariant),
        help("The engine reached a state valid input can never produce. Please report this issue.")
    )]
    InternalInvariant(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(simulator::configuration_error),
        help("Review the SCHED_SIM_* environment variables or the configuration document.")
    )]
    Configuration(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(simulator::serialization_error))]
    Serialization(String),
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::Serialization(err.to_string())
    }
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulationError>;
