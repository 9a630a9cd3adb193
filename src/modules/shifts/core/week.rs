use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which weekday opens a displayed week. The personal calendar runs Sunday to
/// Saturday, the staffing board and analytics run Monday to Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekConvention {
    #[serde(rename = "sunday")]
    SundayStart,
    #[serde(rename = "monday")]
    MondayStart,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown week convention: {0}")]
pub struct UnknownConvention(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("week of {0} runs past the supported calendar")]
pub struct WeekOutOfRange(pub NaiveDate);

impl WeekConvention {
    pub fn as_str(self) -> &'static str {
        match self {
            WeekConvention::SundayStart => "sunday",
            WeekConvention::MondayStart => "monday",
        }
    }

    fn days_into_week(self, date: NaiveDate) -> u32 {
        match self {
            WeekConvention::SundayStart => date.weekday().num_days_from_sunday(),
            WeekConvention::MondayStart => date.weekday().num_days_from_monday(),
        }
    }
}

impl fmt::Display for WeekConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekConvention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sunday_start" | "sun" => Ok(WeekConvention::SundayStart),
            "monday" | "monday_start" | "mon" => Ok(WeekConvention::MondayStart),
            _ => Err(UnknownConvention(s.to_string())),
        }
    }
}

/// First day of the week containing `date`.
pub fn week_start(date: NaiveDate, convention: WeekConvention) -> NaiveDate {
    let back = convention.days_into_week(date);
    date.checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(date)
}

/// Anchor of the week `delta_weeks` away from the week containing `anchor`.
/// A mid-week anchor is snapped to its week start first, so the result is
/// always a week start. Moving past either end of the calendar stays put.
pub fn shift_week(anchor: NaiveDate, delta_weeks: i64, convention: WeekConvention) -> NaiveDate {
    let start = week_start(anchor, convention);
    let days = delta_weeks.unsigned_abs().saturating_mul(7);
    let moved = if delta_weeks >= 0 {
        start.checked_add_days(Days::new(days))
    } else {
        start.checked_sub_days(Days::new(days))
    };
    moved.unwrap_or(start)
}

/// Anchor of the week containing `today`. Recomputed, never offset from a previous anchor.
pub fn current_week(today: NaiveDate, convention: WeekConvention) -> NaiveDate {
    week_start(today, convention)
}

/// The inclusive instant range covered by one displayed week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekWindow {
    /// Fails when the seventh day of the week does not exist in chrono's calendar.
    pub fn new(anchor: NaiveDate, convention: WeekConvention) -> Result<Self, WeekOutOfRange> {
        let first = week_start(anchor, convention);
        let start = first.and_time(NaiveTime::MIN);
        // 00:00 + 7 days - 1 ms, i.e. 23:59:59.999 on the seventh day.
        let end = start
            .checked_add_signed(TimeDelta::days(7))
            .and_then(|next| next.checked_sub_signed(TimeDelta::milliseconds(1)))
            .ok_or(WeekOutOfRange(anchor))?;
        Ok(Self { start, end })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.first_day().iter_days().take(7)
    }
}
