/*!
 * Core Module
 * Shared primitives used across the simulator
 */

pub mod types;

pub use types::{Pid, Priority, SimTime};
