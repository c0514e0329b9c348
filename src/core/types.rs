/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Point or span on the logical time axis (unit granularity)
///
/// Signed so that malformed input (negative arrivals) can be represented
/// and rejected by validation instead of being unrepresentable.
pub type Tick = i64;
