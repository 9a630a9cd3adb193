use crate::modules::shifts::core::period::ShiftPeriod;
use chrono::{NaiveDate, NaiveDateTime};

/// A request to put an employee on a shift. Also used to replace an existing
/// shift's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleShift {
    pub user_id: String,
    pub branch_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub position: String,
    pub notes: Option<String>,
}

impl ScheduleShift {
    /// Quick-add: the period's canonical window on `date`.
    pub fn for_period(
        user_id: impl Into<String>,
        branch_id: i64,
        date: NaiveDate,
        period: ShiftPeriod,
        position: impl Into<String>,
    ) -> Self {
        let (start_time, end_time) = period.default_window(date);
        Self {
            user_id: user_id.into(),
            branch_id,
            start_time,
            end_time,
            position: position.into(),
            notes: None,
        }
    }
}
