/*!
 * Core Types
 * Waiting classes shared across the gate
 */

use super::errors::GateError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Priority class an entity waits in
///
/// Closed set: the gate has exactly one waiting line per variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    /// Expedited line
    Fastpass = 0,
    /// Standard line
    Regular = 1,
}

impl Class {
    /// Every class, in index order
    pub const ALL: [Class; 2] = [Class::Fastpass, Class::Regular];

    /// Number of classes
    pub const COUNT: usize = Self::ALL.len();

    /// Convert to string representation
    ///
    /// # Performance
    /// Hot path - used in every structured log field
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fastpass => "fastpass",
            Self::Regular => "regular",
        }
    }

    /// Single-letter form used in compact pattern notation
    #[inline]
    pub const fn short(&self) -> char {
        match self {
            Self::Fastpass => 'F',
            Self::Regular => 'R',
        }
    }

    /// Dense index for per-class array storage
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Class {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fastpass" | "fast" | "f" => Ok(Self::Fastpass),
            "regular" | "reg" | "r" => Ok(Self::Regular),
            _ => Err(GateError::InvalidClass(s.to_string())),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Class {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Class {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
