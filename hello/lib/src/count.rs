//! Typed world count.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseWorldCountError;
use crate::greeting::hello;

/// The number of worlds reported by a greeting.
///
/// Any `i32` is a valid count, negatives included.
///
/// ## Examples
///
/// ```rust
/// use hello_worlds::WorldCount;
///
/// let count = WorldCount::new(3);
/// assert_eq!(count.get(), 3);
/// assert_eq!(count.to_string(), "3");
/// assert_eq!(count.greeting(), "Hello, there are 3worlds");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WorldCount(i32);

impl WorldCount {
    pub const fn new(count: i32) -> Self {
        Self(count)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// Formats this count with [`hello`].
    pub fn greeting(self) -> String {
        hello(self.0)
    }
}

impl From<i32> for WorldCount {
    fn from(count: i32) -> Self {
        Self(count)
    }
}

impl From<WorldCount> for i32 {
    fn from(count: WorldCount) -> Self {
        count.0
    }
}

impl fmt::Display for WorldCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a base-10 count, ignoring surrounding whitespace.
///
/// ```rust
/// use hello_worlds::{ParseWorldCountError, WorldCount};
///
/// assert_eq!("+12".parse::<WorldCount>(), Ok(WorldCount::new(12)));
/// assert_eq!("  ".parse::<WorldCount>(), Err(ParseWorldCountError::Empty));
/// assert!("twelve".parse::<WorldCount>().is_err());
/// ```
impl FromStr for WorldCount {
    type Err = ParseWorldCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseWorldCountError::Empty);
        }

        trimmed
            .parse::<i32>()
            .map(Self)
            .map_err(|source| ParseWorldCountError::Invalid {
                input: trimmed.to_string(),
                source,
            })
    }
}
