use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::shifts::core::week::{WeekConvention, WeekOutOfRange};
use crate::modules::shifts::use_cases::view_week::handler::resolve_anchor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct WeekParams {
    pub start_date: Option<NaiveDate>,
    pub convention: Option<String>,
}

impl WeekParams {
    fn convention_or(&self, default: WeekConvention) -> Option<WeekConvention> {
        match &self.convention {
            None => Some(default),
            Some(raw) => raw.parse().ok(),
        }
    }

    /// Convention and anchor for this request, `None` on an unknown convention.
    fn resolve(&self, default: WeekConvention) -> Option<(WeekConvention, NaiveDate)> {
        let convention = self.convention_or(default)?;
        let today = Local::now().date_naive();
        Some((
            convention,
            resolve_anchor(self.start_date, convention, today),
        ))
    }
}

#[derive(Deserialize)]
pub struct DaySummaryParams {
    pub target_date: Option<NaiveDate>,
}

fn respond<T: Serialize>(result: anyhow::Result<T>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) if e.downcast_ref::<WeekOutOfRange>().is_some() => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load shifts");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_branch_shifts(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
) -> impl IntoResponse {
    respond(state.week_view.branch_shifts(branch_id).await)
}

pub async fn handle_weekly_board(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
    Query(params): Query<WeekParams>,
) -> impl IntoResponse {
    let Some((convention, anchor)) = params.resolve(state.weeks.board) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    respond(
        state
            .week_view
            .branch_week(branch_id, anchor, convention)
            .await,
    )
}

pub async fn handle_employee_week(
    State(state): State<AppState>,
    Path((branch_id, user_id)): Path<(i64, String)>,
    Query(params): Query<WeekParams>,
) -> impl IntoResponse {
    let Some((convention, anchor)) = params.resolve(state.weeks.personal) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    respond(
        state
            .week_view
            .employee_week(branch_id, &user_id, anchor, convention)
            .await,
    )
}

pub async fn handle_weekly_hours(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
    Query(params): Query<WeekParams>,
) -> impl IntoResponse {
    let Some((convention, anchor)) = params.resolve(state.weeks.board) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    respond(
        state
            .week_view
            .weekly_hours(branch_id, anchor, convention)
            .await,
    )
}

pub async fn handle_day_summary(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
    Query(params): Query<DaySummaryParams>,
) -> impl IntoResponse {
    let date = params
        .target_date
        .unwrap_or_else(|| Local::now().date_naive());
    respond(state.week_view.day_summary(branch_id, date).await)
}
