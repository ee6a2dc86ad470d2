//! Clock-time model for the planning day.
//!
//! # Design
//!
//! Times of day are held as whole minutes since midnight, `0..1440`.  The
//! planning window may start at any minute and may cross midnight (or span
//! up to two days), so all arithmetic on `ClockTime` wraps modulo one day.
//! Integer minutes keep period boundaries exact; no floating-point drift and
//! no datetime library.

use std::fmt;
use std::str::FromStr;

use crate::PeriodId;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1_440;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A wall-clock time of day with minute resolution.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from hour and minute.  Returns `None` outside `00:00..=23:59`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<ClockTime> {
        if hour < 24 && minute < 60 {
            Some(ClockTime((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Build from any minute count, wrapping past midnight.
    #[inline]
    pub fn from_minutes(minutes: u32) -> ClockTime {
        ClockTime((minutes % MINUTES_PER_DAY) as u16)
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// The time `minutes` later, wrapping past midnight.
    #[inline]
    pub fn add_minutes(self, minutes: u32) -> ClockTime {
        ClockTime::from_minutes(self.minutes() + minutes % MINUTES_PER_DAY)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:00", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = String;

    /// Accepts `HH:MM` or `HH:MM:SS` (seconds must be zero).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let field = |i: usize| -> Result<u32, String> {
            parts[i]
                .parse::<u32>()
                .map_err(|_| format!("invalid time {s:?}: expected HH:MM[:SS]"))
        };
        let (hour, minute) = match parts.len() {
            2 => (field(0)?, field(1)?),
            3 => {
                if field(2)? != 0 {
                    return Err(format!("invalid time {s:?}: seconds must be zero"));
                }
                (field(0)?, field(1)?)
            }
            _ => return Err(format!("invalid time {s:?}: expected HH:MM[:SS]")),
        };
        ClockTime::from_hm(hour, minute).ok_or_else(|| format!("invalid time {s:?}: out of range"))
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ── Period ────────────────────────────────────────────────────────────────────

/// One bucket of the planning day.
///
/// Periods form a cyclic sequence: the successor of period `P-1` is period 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Period {
    /// Cyclic index, `0..P`.
    pub id:           PeriodId,
    pub start:        ClockTime,
    pub end:          ClockTime,
    /// Bucket length in minutes (identical for every period of a grid).
    pub span_minutes: u32,
    /// Required simultaneous agents.  Zero until demand has been estimated.
    pub demand:       u32,
}

impl Period {
    /// 1-based row label used in the period table.
    #[inline]
    pub fn label(&self) -> u32 {
        self.id.0 + 1
    }

    /// Bucket length in seconds — the arrival window for demand simulation.
    #[inline]
    pub fn span_secs(&self) -> f64 {
        self.span_minutes as f64 * 60.0
    }

    /// `true` if the bucket's end time is on the following calendar day.
    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}-{}", self.label(), self.start, self.end)
    }
}
