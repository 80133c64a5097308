use std::fmt;

use chrono::{DateTime, Local};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Bucketed description of the time elapsed since a file was modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Months(i64),
    Years(i64),
}

impl RelativeAge {
    /// Timestamps in the future count as "just now".
    pub fn from_elapsed_secs(seconds: i64) -> Self {
        match seconds {
            s if s < MINUTE => Self::JustNow,
            s if s < HOUR => Self::Minutes(s / MINUTE),
            s if s < DAY => Self::Hours(s / HOUR),
            s if s < MONTH => Self::Days(s / DAY),
            s if s < YEAR => Self::Months(s / MONTH),
            s => Self::Years(s / YEAR),
        }
    }

    pub fn between(then: &DateTime<Local>, now: &DateTime<Local>) -> Self {
        Self::from_elapsed_secs(now.signed_duration_since(*then).num_seconds())
    }

    pub fn since(then: &DateTime<Local>) -> Self {
        Self::between(then, &Local::now())
    }
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match *self {
            Self::JustNow => return f.write_str("just now"),
            Self::Minutes(n) => (n, "minute"),
            Self::Hours(n) => (n, "hour"),
            Self::Days(n) => (n, "day"),
            Self::Months(n) => (n, "month"),
            Self::Years(n) => (n, "year"),
        };
        let plural = if n == 1 { "" } else { "s" };
        write!(f, "{n} {unit}{plural} ago")
    }
}
