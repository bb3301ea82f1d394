/*!
 * Gate Configuration
 *
 * Construction-time settings: the service pattern and the recognized classes
 */

use super::pattern::{parse_classes, ServicePattern};
use crate::core::errors::ConfigError;
use crate::core::limits::{CANONICAL_PATTERN, ENV_CLASSES, ENV_PATTERN};
use crate::core::types::Class;
use serde::{Deserialize, Serialize};

/// Gate configuration
///
/// Validated once by [`GateConfig::validate`]; the resulting pattern is
/// immutable for the lifetime of the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Repeating slot sequence
    pub pattern: Vec<Class>,
    /// Classes accepted by enqueue
    pub recognized: Vec<Class>,
}

/// Output of a successful validation
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub pattern: ServicePattern,
    pub recognized: [bool; Class::COUNT],
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            pattern: CANONICAL_PATTERN.to_vec(),
            recognized: Class::ALL.to_vec(),
        }
    }
}

impl GateConfig {
    /// Configuration with a custom pattern and every class recognized
    pub fn with_pattern(pattern: Vec<Class>) -> Self {
        Self {
            pattern,
            ..Self::default()
        }
    }

    /// Restrict the recognized classes
    pub fn recognize(mut self, classes: Vec<Class>) -> Self {
        self.recognized = classes;
        self
    }

    /// Load from environment
    ///
    /// Environment variables:
    /// - GATE_PATTERN: comma-separated slots (default: F,R,R,R)
    /// - GATE_CLASSES: comma-separated recognized classes (default: all)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_PATTERN) {
            config.pattern = parse_classes(raw.split(','))?;
        }
        if let Ok(raw) = std::env::var(ENV_CLASSES) {
            config.recognized = parse_classes(raw.split(','))?;
        }

        Ok(config)
    }

    /// Load from a JSON document; missing fields take defaults
    ///
    /// Class tokens accept the same aliases as the environment form and an
    /// unknown token is reported as `InvalidClass`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct Inner {
            pattern: Option<Vec<String>>,
            recognized: Option<Vec<String>>,
        }

        let inner: Inner = serde_json::from_str(json)?;
        let mut config = Self::default();

        if let Some(pattern) = inner.pattern {
            config.pattern = parse_classes(pattern.iter().map(String::as_str))?;
        }
        if let Some(recognized) = inner.recognized {
            config.recognized = parse_classes(recognized.iter().map(String::as_str))?;
        }

        Ok(config)
    }

    /// Check every construction constraint
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let pattern = ServicePattern::new(self.pattern.clone())?;

        if self.recognized.is_empty() {
            return Err(ConfigError::NoRecognizedClasses);
        }

        let mut recognized = [false; Class::COUNT];
        for class in &self.recognized {
            recognized[class.index()] = true;
        }

        if let Some(class) = pattern.iter().find(|c| !recognized[c.index()]) {
            return Err(ConfigError::UnrecognizedInPattern(class));
        }

        if let Some(&class) = Class::ALL
            .iter()
            .find(|c| recognized[c.index()] && !pattern.contains(**c))
        {
            return Err(ConfigError::UnservedClass(class));
        }

        Ok(ValidatedConfig {
            pattern,
            recognized,
        })
    }
}
