use crate::modules::shifts::core::aggregate::{
    DaySummary, PositionHours, WeekBoard, WeekSummary, build_week, summarize_day,
};
use crate::modules::shifts::core::shift::ShiftRecord;
use crate::modules::shifts::core::week::{WeekConvention, current_week, week_start};
use crate::modules::shifts::use_cases::view_week::queries_port::ShiftQueries;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

/// Requested week start, or the current week when none was given.
pub fn resolve_anchor(
    start_date: Option<NaiveDate>,
    convention: WeekConvention,
    today: NaiveDate,
) -> NaiveDate {
    match start_date {
        Some(date) => week_start(date, convention),
        None => current_week(today, convention),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyHours {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    #[serde(flatten)]
    pub summary: WeekSummary,
    pub breakdown: Vec<PositionHours>,
}

/// Read side: fetch a branch's shifts and aggregate them for one view.
///
/// Every call takes a fresh snapshot. The store may return more than asked
/// for, so results are filtered again here before aggregating.
#[derive(Clone)]
pub struct WeekViewHandler {
    queries: Arc<dyn ShiftQueries + Send + Sync>,
}

impl WeekViewHandler {
    pub fn new(queries: Arc<dyn ShiftQueries + Send + Sync>) -> Self {
        Self { queries }
    }

    pub async fn branch_shifts(&self, branch_id: i64) -> anyhow::Result<Vec<ShiftRecord>> {
        let mut shifts = self.queries.list_by_branch(branch_id).await?;
        shifts.retain(|s| s.branch_id == branch_id);
        Ok(shifts)
    }

    pub async fn branch_week(
        &self,
        branch_id: i64,
        anchor: NaiveDate,
        convention: WeekConvention,
    ) -> anyhow::Result<WeekBoard> {
        let shifts = self.branch_shifts(branch_id).await?;
        let board = build_week(&shifts, anchor, convention)?;
        Ok(report_unmapped(branch_id, board))
    }

    pub async fn employee_week(
        &self,
        branch_id: i64,
        user_id: &str,
        anchor: NaiveDate,
        convention: WeekConvention,
    ) -> anyhow::Result<WeekBoard> {
        let mut shifts = self.queries.list_by_employee(branch_id, user_id).await?;
        shifts.retain(|s| s.branch_id == branch_id && s.user_id == user_id);
        let board = build_week(&shifts, anchor, convention)?;
        Ok(report_unmapped(branch_id, board))
    }

    pub async fn weekly_hours(
        &self,
        branch_id: i64,
        anchor: NaiveDate,
        convention: WeekConvention,
    ) -> anyhow::Result<WeeklyHours> {
        let board = self.branch_week(branch_id, anchor, convention).await?;
        let breakdown = board.summary.position_breakdown();
        Ok(WeeklyHours {
            week_start: board.week_start,
            week_end: board.week_end,
            summary: board.summary,
            breakdown,
        })
    }

    pub async fn day_summary(&self, branch_id: i64, date: NaiveDate) -> anyhow::Result<DaySummary> {
        let shifts = self.branch_shifts(branch_id).await?;
        Ok(summarize_day(&shifts, date))
    }
}

fn report_unmapped(branch_id: i64, board: WeekBoard) -> WeekBoard {
    if !board.unmapped_shift_ids.is_empty() {
        tracing::warn!(
            branch_id,
            shift_ids = ?board.unmapped_shift_ids,
            "shifts with unknown positions left out of position groupings"
        );
    }
    board
}
