/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Priority value. The meaningful range and its direction (which end is
/// "most urgent") are declared per run, not assumed by the engine.
pub type Priority = i32;

/// Simulated time in abstract integer time units
pub type SimTime = u64;
