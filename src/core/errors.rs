/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Class;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gate operation errors with serialization support
///
/// `EmptyGate` is an expected runtime outcome (no work available), while
/// `InvalidClass` signals caller misuse. Neither leaves a partial mutation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum GateError {
    #[error("Invalid class: {0}")]
    #[diagnostic(
        code(gate::invalid_class),
        help("Use a class this gate recognizes: fastpass or regular.")
    )]
    InvalidClass(String),

    #[error("Gate is empty: no entity waiting in any class")]
    #[diagnostic(
        code(gate::empty),
        help("Nothing to serve right now. Wait for arrivals or poll again later.")
    )]
    EmptyGate,
}

impl GateError {
    /// Whether the caller can expect the same call to succeed later
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyGate)
    }
}

/// Construction-time configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Service pattern is empty")]
    #[diagnostic(
        code(config::empty_pattern),
        help("Provide at least one slot, e.g. F,R,R,R.")
    )]
    EmptyPattern,

    #[error("Service pattern has {len} slots, maximum is {max}")]
    #[diagnostic(
        code(config::pattern_too_long),
        help("Reduce the ratio to its smallest equivalent form.")
    )]
    PatternTooLong { len: usize, max: usize },

    #[error("No recognized classes configured")]
    #[diagnostic(
        code(config::no_classes),
        help("Recognize at least one of fastpass or regular.")
    )]
    NoRecognizedClasses,

    #[error("Service pattern names unrecognized class {0}")]
    #[diagnostic(
        code(config::unrecognized_in_pattern),
        help("Every pattern slot must name a recognized class.")
    )]
    UnrecognizedInPattern(Class),

    #[error("Recognized class {0} never appears in the service pattern")]
    #[diagnostic(
        code(config::unserved_class),
        help("Entities of this class would never be served. Add a slot for it.")
    )]
    UnservedClass(Class),

    #[error("Invalid class in configuration: {0}")]
    #[diagnostic(
        code(config::invalid_class),
        help("Valid classes: fastpass (f), regular (r).")
    )]
    InvalidClass(String),

    #[error("Failed to parse gate configuration: {0}")]
    #[diagnostic(code(config::parse), help("Check the configuration document syntax."))]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Result alias for gate operations
pub type GateResult<T> = Result<T, GateError>;

/// Flat error shape for handing failures across an API boundary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializableError {
    pub error_type: String,
    pub message: String,
}

impl SerializableError {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
        }
    }
}

impl From<GateError> for SerializableError {
    fn from(err: GateError) -> Self {
        let error_type = match err {
            GateError::InvalidClass(_) => "invalid_class",
            GateError::EmptyGate => "empty_gate",
        };
        Self::new(error_type, err.to_string())
    }
}

impl From<ConfigError> for SerializableError {
    fn from(err: ConfigError) -> Self {
        Self::new("config_error", err.to_string())
    }
}
