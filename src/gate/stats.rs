/*!
 * Gate Statistics
 * Counters updated by gate operations and their serializable snapshot
 */

use crate::core::types::Class;
use serde::{Deserialize, Serialize};

/// Per-class counters in a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStats {
    pub enqueued: u64,
    pub served: u64,
    pub cancelled: u64,
    pub waiting: usize,
}

/// Point-in-time gate statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateStats {
    pub fastpass: ClassStats,
    pub regular: ClassStats,
    /// Pattern slots passed over because their class was empty
    pub slots_skipped: u64,
    /// Last served slot, if any
    pub cursor: Option<usize>,
    pub pattern_len: usize,
}

impl GateStats {
    pub fn class(&self, class: Class) -> &ClassStats {
        match class {
            Class::Fastpass => &self.fastpass,
            Class::Regular => &self.regular,
        }
    }

    pub fn total_served(&self) -> u64 {
        self.fastpass.served + self.regular.served
    }
}

/// Running counters owned by the gate
#[derive(Debug, Clone, Default)]
pub(super) struct Counters {
    pub enqueued: [u64; Class::COUNT],
    pub served: [u64; Class::COUNT],
    pub cancelled: [u64; Class::COUNT],
    pub slots_skipped: u64,
}

impl Counters {
    pub fn snapshot(
        &self,
        waiting: [usize; Class::COUNT],
        cursor: Option<usize>,
        pattern_len: usize,
    ) -> GateStats {
        let class_stats = |class: Class| ClassStats {
            enqueued: self.enqueued[class.index()],
            served: self.served[class.index()],
            cancelled: self.cancelled[class.index()],
            waiting: waiting[class.index()],
        };

        GateStats {
            fastpass: class_stats(Class::Fastpass),
            regular: class_stats(Class::Regular),
            slots_skipped: self.slots_skipped,
            cursor,
            pattern_len,
        }
    }
}
