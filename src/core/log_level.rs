//! Severity level masks
//!
//! A [`Level`] is a set of enabled ranks rather than a threshold. Appenders
//! declare the ranks they want with a mask such as `Level::ERROR | Level::FATAL`
//! and an event is delivered when its rank intersects that mask.

use super::error::LoggerError;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::str::FromStr;

/// A bitmask of severity ranks.
///
/// # Examples
///
/// ```
/// use rust_fanout_logger::Level;
///
/// let severe = Level::ERROR | Level::FATAL;
/// assert!(severe.matches(Level::FATAL));
/// assert!(!severe.matches(Level::INFO));
/// assert!(Level::ALL.matches(Level::TRACE));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Level(u32);

impl Level {
    pub const NONE: Level = Level(0);
    pub const TRACE: Level = Level(1 << 0);
    pub const DEBUG: Level = Level(1 << 1);
    pub const INFO: Level = Level(1 << 2);
    pub const WARNING: Level = Level(1 << 3);
    pub const ERROR: Level = Level(1 << 4);
    pub const FATAL: Level = Level(1 << 5);
    /// Every bit set, including bits no named rank uses.
    pub const ALL: Level = Level(!0);

    /// The six named ranks, in declaration order.
    pub const RANKS: [Level; 6] = [
        Level::TRACE,
        Level::DEBUG,
        Level::INFO,
        Level::WARNING,
        Level::ERROR,
        Level::FATAL,
    ];

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Level(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true when the two masks share at least one bit.
    ///
    /// This is the predicate used to decide whether an appender receives an
    /// event.
    #[must_use]
    pub const fn matches(self, other: Level) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true when every bit of `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Level) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true when exactly one named rank is set and nothing else.
    #[must_use]
    pub fn is_rank(self) -> bool {
        Self::RANKS.contains(&self)
    }

    #[must_use]
    pub const fn union(self, other: Level) -> Level {
        Level(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Level) -> Level {
        Level(self.0 & other.0)
    }

    /// Iterate over the named ranks contained in this mask.
    pub fn ranks(self) -> impl Iterator<Item = Level> {
        Self::RANKS.into_iter().filter(move |rank| self.contains(*rank))
    }

    /// The display name of a single rank, or `None` for any other mask.
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Level::TRACE => Some("TRACE"),
            Level::DEBUG => Some("DEBUG"),
            Level::INFO => Some("INFO"),
            Level::WARNING => Some("WARNING"),
            Level::ERROR => Some("ERROR"),
            Level::FATAL => Some("FATAL"),
            _ => None,
        }
    }

    /// Terminal color for a single rank; multi-rank masks render uncolored.
    pub fn color_code(self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            Level::TRACE => Some(BrightBlack),
            Level::DEBUG => Some(Blue),
            Level::INFO => Some(Green),
            Level::WARNING => Some(Yellow),
            Level::ERROR => Some(Red),
            Level::FATAL => Some(BrightRed),
            _ => None,
        }
    }
}

impl BitOr for Level {
    type Output = Level;

    fn bitor(self, rhs: Level) -> Level {
        self.union(rhs)
    }
}

impl BitOrAssign for Level {
    fn bitor_assign(&mut self, rhs: Level) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Level {
    type Output = Level;

    fn bitand(self, rhs: Level) -> Level {
        self.intersection(rhs)
    }
}

impl BitAndAssign for Level {
    fn bitand_assign(&mut self, rhs: Level) {
        self.0 &= rhs.0;
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        Level(!self.0)
    }
}

impl FromIterator<Level> for Level {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        iter.into_iter().fold(Level::NONE, Level::union)
    }
}

impl From<u32> for Level {
    fn from(bits: u32) -> Self {
        Level(bits)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Level::ALL {
            return f.write_str("ALL");
        }
        if self.is_empty() {
            return f.write_str("NONE");
        }
        if let Some(name) = self.as_str() {
            return f.pad(name);
        }

        let mut first = true;
        for rank in self.ranks() {
            if !first {
                f.write_str("|")?;
            }
            first = false;
            f.write_str(rank.as_str().unwrap_or_default())?;
        }

        // Bits outside the named ranks are shown raw so nothing is hidden
        let unnamed = self.0 & !Self::RANKS.into_iter().collect::<Level>().0;
        if unnamed != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{:#x}", unnamed)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self)
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Parse a mask such as `"info"`, `"error|fatal"`, `"WARN, ERROR"` or `"all"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut level = Level::NONE;
        let mut seen_any = false;

        for part in s.split(['|', ',']) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            seen_any = true;
            level |= match part.to_uppercase().as_str() {
                "TRACE" => Level::TRACE,
                "DEBUG" => Level::DEBUG,
                "INFO" => Level::INFO,
                "WARN" | "WARNING" => Level::WARNING,
                "ERROR" => Level::ERROR,
                "FATAL" => Level::FATAL,
                "ALL" => Level::ALL,
                "NONE" => Level::NONE,
                _ => return Err(LoggerError::invalid_level(s)),
            };
        }

        if !seen_any {
            return Err(LoggerError::invalid_level(s));
        }
        Ok(level)
    }
}
