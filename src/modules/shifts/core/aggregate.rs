// Weekly aggregation: bucket a flat shift list into days, periods and positions,
// and summarize hours.
//
// Everything here is recomputed from the input list on every call. Nothing is
// cached or patched in place, so identical inputs always give identical boards.

use crate::modules::shifts::core::period::ShiftPeriod;
use crate::modules::shifts::core::position::Position;
use crate::modules::shifts::core::shift::ShiftRecord;
use crate::modules::shifts::core::week::{WeekConvention, WeekOutOfRange, WeekWindow};
use crate::shared::core::primitives::round2;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Days in a displayed week. Also the average-hours denominator.
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    pub shifts: Vec<ShiftRecord>,
    /// Every [`Position`] is present, in display order, even when empty.
    pub by_position: BTreeMap<Position, Vec<ShiftRecord>>,
}

impl PeriodBucket {
    pub fn empty() -> Self {
        Self {
            shifts: Vec::new(),
            by_position: Position::ALL.into_iter().map(|p| (p, Vec::new())).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.shifts.len()
    }

    pub fn for_position(&self, position: Position) -> &[ShiftRecord] {
        self.by_position
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn sort(&mut self) {
        self.shifts.sort_by_key(|s| s.start_time);
        for list in self.by_position.values_mut() {
            list.sort_by_key(|s| s.start_time);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodCounts {
    pub morning: usize,
    pub middle: usize,
    pub evening: usize,
    pub total: usize,
}

impl PeriodCounts {
    fn add(&mut self, period: ShiftPeriod) {
        match period {
            ShiftPeriod::Morning => self.morning += 1,
            ShiftPeriod::Middle => self.middle += 1,
            ShiftPeriod::Evening => self.evening += 1,
        }
        self.total += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub morning: PeriodBucket,
    pub middle: PeriodBucket,
    pub evening: PeriodBucket,
}

impl DayBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            morning: PeriodBucket::empty(),
            middle: PeriodBucket::empty(),
            evening: PeriodBucket::empty(),
        }
    }

    pub fn period(&self, period: ShiftPeriod) -> &PeriodBucket {
        match period {
            ShiftPeriod::Morning => &self.morning,
            ShiftPeriod::Middle => &self.middle,
            ShiftPeriod::Evening => &self.evening,
        }
    }

    fn period_mut(&mut self, period: ShiftPeriod) -> &mut PeriodBucket {
        match period {
            ShiftPeriod::Morning => &mut self.morning,
            ShiftPeriod::Middle => &mut self.middle,
            ShiftPeriod::Evening => &mut self.evening,
        }
    }

    /// Head-count per period, as shown in the board's day header.
    pub fn counts(&self) -> PeriodCounts {
        PeriodCounts {
            morning: self.morning.count(),
            middle: self.middle.count(),
            evening: self.evening.count(),
            total: self.morning.count() + self.middle.count() + self.evening.count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionHours {
    pub position: Position,
    pub hours: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekSummary {
    pub total_shifts: usize,
    pub total_hours: f64,
    /// Known positions with at least one shift this week.
    pub hours_by_position: BTreeMap<Position, f64>,
    pub average_hours_per_day: f64,
}

impl WeekSummary {
    pub fn from_shifts<'a>(shifts: impl IntoIterator<Item = &'a ShiftRecord>) -> Self {
        let mut total_shifts = 0;
        let mut total_hours = 0.0;
        let mut hours_by_position: BTreeMap<Position, f64> = BTreeMap::new();
        for shift in shifts {
            let hours = shift.hours();
            total_shifts += 1;
            total_hours += hours;
            if let Some(position) = shift.position() {
                *hours_by_position.entry(position).or_default() += hours;
            }
        }
        for hours in hours_by_position.values_mut() {
            *hours = round2(*hours);
        }
        Self {
            total_shifts,
            total_hours: round2(total_hours),
            hours_by_position,
            average_hours_per_day: round2(total_hours / DAYS_PER_WEEK as f64),
        }
    }

    /// Positions by hours, largest first, with their share of all position hours.
    pub fn position_breakdown(&self) -> Vec<PositionHours> {
        let position_total: f64 = self.hours_by_position.values().sum();
        let mut breakdown: Vec<PositionHours> = self
            .hours_by_position
            .iter()
            .map(|(position, hours)| PositionHours {
                position: *position,
                hours: *hours,
                percentage: if position_total > 0.0 {
                    round2(hours / position_total * 100.0)
                } else {
                    0.0
                },
            })
            .collect();
        breakdown.sort_by(|a, b| {
            b.hours
                .total_cmp(&a.hours)
                .then_with(|| a.position.cmp(&b.position))
        });
        breakdown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBoard {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub convention: WeekConvention,
    pub days: Vec<DayBucket>,
    pub summary: WeekSummary,
    /// Shifts placed in a period list but in no position grouping.
    pub unmapped_shift_ids: Vec<i64>,
}

impl WeekBoard {
    pub fn day(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// Groups `shifts` into the week containing `anchor`.
///
/// `shifts` may be a superset of the week; anything starting outside
/// `[week start 00:00, week start + 6 days 23:59:59.999]` is ignored, and the
/// summary only counts what was placed. Fails only for a week running past
/// the end of the calendar.
pub fn build_week(
    shifts: &[ShiftRecord],
    anchor: NaiveDate,
    convention: WeekConvention,
) -> Result<WeekBoard, WeekOutOfRange> {
    let window = WeekWindow::new(anchor, convention)?;
    let mut days: Vec<DayBucket> = window.days().map(DayBucket::empty).collect();
    let mut placed: Vec<&ShiftRecord> = Vec::new();
    let mut unmapped_shift_ids = Vec::new();

    for shift in shifts.iter().filter(|s| window.contains(s.start_time)) {
        let Some(day) = days.iter_mut().find(|d| d.date == shift.date()) else {
            continue;
        };
        let bucket = day.period_mut(shift.period());
        bucket.shifts.push(shift.clone());
        match shift.position() {
            Some(position) => bucket
                .by_position
                .entry(position)
                .or_default()
                .push(shift.clone()),
            None => unmapped_shift_ids.push(shift.id),
        }
        placed.push(shift);
    }

    for day in &mut days {
        for period in ShiftPeriod::ALL {
            day.period_mut(period).sort();
        }
    }

    Ok(WeekBoard {
        week_start: window.first_day(),
        week_end: window.last_day(),
        convention,
        days,
        summary: WeekSummary::from_shifts(placed),
        unmapped_shift_ids,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: PeriodCounts,
}

/// Per-period head-count of the shifts starting on `date`.
pub fn summarize_day(shifts: &[ShiftRecord], date: NaiveDate) -> DaySummary {
    let mut counts = PeriodCounts::default();
    for shift in shifts.iter().filter(|s| s.date() == date) {
        counts.add(shift.period());
    }
    DaySummary { date, counts }
}
