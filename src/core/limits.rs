/*!
 * Gate Limits and Constants
 *
 * Centralized location for pattern defaults and bounds.
 */

use super::types::Class;

// =============================================================================
// SERVICE PATTERN
// =============================================================================

/// Canonical service pattern: one fastpass slot per three regular slots
pub const CANONICAL_PATTERN: [Class; 4] = [
    Class::Fastpass,
    Class::Regular,
    Class::Regular,
    Class::Regular,
];

/// Maximum service pattern length
/// [PERF] Bounds the worst-case forward scan of serve/peek
pub const MAX_PATTERN_LEN: usize = 64;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Environment variable holding the service pattern, e.g. "F,R,R,R"
pub const ENV_PATTERN: &str = "GATE_PATTERN";

/// Environment variable holding the recognized classes, e.g. "fastpass,regular"
pub const ENV_CLASSES: &str = "GATE_CLASSES";

/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "GATE_TRACE_JSON";
