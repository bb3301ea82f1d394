/*!
 * Gate Scheduler Library
 * Weighted round-robin admission across fastpass and regular lines
 */

pub mod core;
pub mod gate;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::{ConfigError, GateError, GateResult, SerializableError};
pub use crate::core::id::EntityId;
pub use crate::core::limits::{CANONICAL_PATTERN, MAX_PATTERN_LEN};
pub use crate::core::types::Class;
pub use gate::{ClassStats, Gate, GateConfig, GateStats, ScanHit, ServicePattern, SharedGate};
pub use monitoring::{init_tracing, span_gate};
