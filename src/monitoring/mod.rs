/*!
 * Monitoring Module
 * Tracing subscriber initialization
 */

pub mod tracer;

pub use tracer::{init_tracing, ENV_TRACE_JSON};
