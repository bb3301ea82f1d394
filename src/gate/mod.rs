/*!
 * Gate Scheduler
 * Admits waiting entities from two classes by a fixed weighted round-robin pattern
 */

use crate::core::errors::ConfigError;
use crate::core::id::EntityId;
use crate::core::types::Class;
use std::collections::VecDeque;
use tracing::info;

pub mod config;
mod operations;
pub mod pattern;
pub mod shared;
pub mod stats;

pub use config::GateConfig;
pub use pattern::{ScanHit, ServicePattern};
pub use shared::SharedGate;
pub use stats::{ClassStats, GateStats};

use stats::Counters;

/// Gate scheduler
///
/// Owns one FIFO line per class, the immutable service pattern, and the
/// cursor (last served slot). Designed for a single caller; wrap it in a
/// [`SharedGate`] when several threads need it.
#[derive(Debug, Clone)]
pub struct Gate<T = EntityId> {
    queues: [VecDeque<T>; Class::COUNT],
    pattern: ServicePattern,
    recognized: [bool; Class::COUNT],
    // None until the first serve, so the first scan starts at slot 0
    cursor: Option<usize>,
    counters: Counters,
}

impl<T> Gate<T> {
    /// Create a gate with the canonical F,R,R,R pattern
    pub fn new() -> Self {
        Self::with_pattern(ServicePattern::canonical())
    }

    /// Create a gate with a custom pattern; classes named by the pattern are recognized
    pub fn with_pattern(pattern: ServicePattern) -> Self {
        let mut recognized = [false; Class::COUNT];
        for class in pattern.iter() {
            recognized[class.index()] = true;
        }
        Self::from_parts(pattern, recognized)
    }

    /// Create a gate from a configuration, validating it first
    pub fn from_config(config: &GateConfig) -> Result<Self, ConfigError> {
        let validated = config.validate()?;
        Ok(Self::from_parts(validated.pattern, validated.recognized))
    }

    fn from_parts(pattern: ServicePattern, recognized: [bool; Class::COUNT]) -> Self {
        info!(pattern = %pattern, len = pattern.len(), "Gate initialized");

        Self {
            queues: [VecDeque::new(), VecDeque::new()],
            pattern,
            recognized,
            cursor: None,
            counters: Counters::default(),
        }
    }

    /// Service pattern in use
    pub fn pattern(&self) -> &ServicePattern {
        &self.pattern
    }

    /// Index of the last served slot, `None` before the first serve
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether enqueue accepts `class`
    #[inline]
    pub fn recognizes(&self, class: Class) -> bool {
        self.recognized[class.index()]
    }

    /// Get statistics snapshot
    pub fn stats(&self) -> GateStats {
        let waiting = [
            self.queues[Class::Fastpass.index()].len(),
            self.queues[Class::Regular.index()].len(),
        ];
        self.counters
            .snapshot(waiting, self.cursor, self.pattern.len())
    }
}

impl<T> Default for Gate<T> {
    fn default() -> Self {
        Self::new()
    }
}
