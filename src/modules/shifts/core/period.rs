use crate::shared::core::primitives::round2;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftPeriod {
    Morning,
    #[serde(alias = "afternoon")]
    Middle,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shift period: {0}")]
pub struct UnknownPeriod(pub String);

impl ShiftPeriod {
    pub const ALL: [ShiftPeriod; 3] = [
        ShiftPeriod::Morning,
        ShiftPeriod::Middle,
        ShiftPeriod::Evening,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftPeriod::Morning => "morning",
            ShiftPeriod::Middle => "middle",
            ShiftPeriod::Evening => "evening",
        }
    }

    /// Canonical start and end of the period's shift on `date`.
    pub fn default_window(self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let (start, end) = match self {
            ShiftPeriod::Morning => ((8, 0), (15, 0)),
            ShiftPeriod::Middle => ((11, 0), (19, 30)),
            ShiftPeriod::Evening => ((15, 0), (22, 15)),
        };
        (at(date, start), at(date, end))
    }
}

fn at(date: NaiveDate, (hour, minute): (u32, u32)) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
}

impl fmt::Display for ShiftPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftPeriod {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftPeriod::Morning),
            "middle" | "afternoon" => Ok(ShiftPeriod::Middle),
            "evening" => Ok(ShiftPeriod::Evening),
            _ => Err(UnknownPeriod(s.to_string())),
        }
    }
}

/// Buckets a shift by its start time alone.
///
/// Middle shifts end at 19:30, so a 19:00-19:29 start still counts as middle.
/// Anything outside the operating windows falls back to evening.
pub fn classify_period(start: NaiveDateTime) -> ShiftPeriod {
    match (start.hour(), start.minute()) {
        (8..=10, _) => ShiftPeriod::Morning,
        (11..=14, _) => ShiftPeriod::Middle,
        (15..=18, _) => ShiftPeriod::Evening,
        (19, m) if m < 30 => ShiftPeriod::Middle,
        (19, _) => ShiftPeriod::Evening,
        (20..=22, _) => ShiftPeriod::Evening,
        _ => ShiftPeriod::Evening,
    }
}

/// Length of `start..end` in hours, rounded to two decimals. Negative when reversed.
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let millis = (end - start).num_milliseconds() as f64;
    round2(millis / 3_600_000.0)
}
