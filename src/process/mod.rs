/*!
 * Process Module
 * Process specifications, per-run execution state, and input validation
 */

pub mod types;
pub mod validation;

pub use types::{ProcessSpec, ProcessState};
pub use validation::{validate_processes, validate_quantum};
