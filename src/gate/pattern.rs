/*!
 * Service Pattern
 * Fixed repeating slot sequence and the forward scan over it
 */

use crate::core::errors::{ConfigError, GateError};
use crate::core::limits::{CANONICAL_PATTERN, MAX_PATTERN_LEN};
use crate::core::types::Class;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Immutable, validated service pattern
///
/// Never empty and never longer than [`MAX_PATTERN_LEN`], so every scan
/// terminates within a bounded number of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePattern {
    slots: Box<[Class]>,
}

/// Result of a successful forward scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHit {
    /// Slot index that was selected
    pub index: usize,
    /// Class named by that slot
    pub class: Class,
    /// Empty slots passed over before the hit
    pub skipped: usize,
}

impl ServicePattern {
    /// Build a pattern from slots
    pub fn new(slots: Vec<Class>) -> Result<Self, ConfigError> {
        if slots.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        if slots.len() > MAX_PATTERN_LEN {
            return Err(ConfigError::PatternTooLong {
                len: slots.len(),
                max: MAX_PATTERN_LEN,
            });
        }
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// The 1 fastpass : 3 regular pattern
    pub fn canonical() -> Self {
        Self {
            slots: CANONICAL_PATTERN.to_vec().into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn slot(&self, index: usize) -> Option<Class> {
        self.slots.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Class> + '_ {
        self.slots.iter().copied()
    }

    /// Number of slots naming `class`
    pub fn ratio(&self, class: Class) -> usize {
        self.slots.iter().filter(|&&c| c == class).count()
    }

    pub fn contains(&self, class: Class) -> bool {
        self.slots.contains(&class)
    }

    /// Slot following `index`, wrapping
    #[inline(always)]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Slot a scan begins at, given the last served slot
    #[inline]
    pub fn start_after(&self, cursor: Option<usize>) -> usize {
        cursor.map_or(0, |index| self.next_index(index))
    }

    /// Forward scan from the slot after `cursor`
    ///
    /// Visits at most `len()` slots, wrapping once, and returns the first slot
    /// whose class satisfies `ready`. `None` means no slot in the whole cycle
    /// names a ready class. Pure: the caller decides whether to commit.
    pub fn scan<F>(&self, cursor: Option<usize>, mut ready: F) -> Option<ScanHit>
    where
        F: FnMut(Class) -> bool,
    {
        let start = self.start_after(cursor);
        (0..self.slots.len()).find_map(|skipped| {
            let index = (start + skipped) % self.slots.len();
            let class = self.slots[index];
            ready(class).then_some(ScanHit {
                index,
                class,
                skipped,
            })
        })
    }
}

impl Default for ServicePattern {
    fn default() -> Self {
        Self::canonical()
    }
}

impl FromStr for ServicePattern {
    type Err = ConfigError;

    /// Parse comma-separated class tokens, e.g. "F,R,R,R"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_classes(s.split(','))?)
    }
}

/// Parse class tokens from configuration, skipping blank entries
pub(super) fn parse_classes<'a, I>(tokens: I) -> Result<Vec<Class>, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Class>().map_err(|err| match err {
                GateError::InvalidClass(token) => ConfigError::InvalidClass(token),
                GateError::EmptyGate => ConfigError::InvalidClass(token.to_string()),
            })
        })
        .collect()
}

impl fmt::Display for ServicePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", class.short())?;
        }
        Ok(())
    }
}

impl Serialize for ServicePattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.slots.iter())
    }
}
