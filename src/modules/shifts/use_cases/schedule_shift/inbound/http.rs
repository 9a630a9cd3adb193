use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::shifts::core::period::ShiftPeriod;
use crate::modules::shifts::core::shift::parse_wall_clock;
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::modules::shifts::use_cases::schedule_shift::handler::ApplicationError;
use crate::shared::core::primitives::LooseId;
use crate::shell::state::AppState;

/// Either explicit `start_time`/`end_time`, or a `date` plus `period` for the
/// period's default window.
#[derive(Deserialize)]
pub struct ScheduleShiftBody {
    pub user_id: LooseId,
    pub branch_id: LooseId,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub date: Option<NaiveDate>,
    pub period: Option<ShiftPeriod>,
    pub position: String,
    pub notes: Option<String>,
}

impl ScheduleShiftBody {
    pub fn into_command(self) -> Option<ScheduleShift> {
        let branch_id = self.branch_id.as_i64()?;
        let user_id = self.user_id.into_key();
        let mut command = match (self.start_time, self.end_time, self.date, self.period) {
            (Some(start), Some(end), _, _) => ScheduleShift {
                user_id,
                branch_id,
                start_time: parse_wall_clock(&start)?,
                end_time: parse_wall_clock(&end)?,
                position: self.position,
                notes: None,
            },
            (None, None, Some(date), Some(period)) => {
                ScheduleShift::for_period(user_id, branch_id, date, period, self.position)
            }
            _ => return None,
        };
        command.notes = self.notes;
        Some(command)
    }
}

fn parse_body(body: Result<Json<ScheduleShiftBody>, JsonRejection>) -> Option<ScheduleShift> {
    let Json(body) = body.ok()?;
    body.into_command()
}

fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Domain(reason) => (StatusCode::CONFLICT, reason).into_response(),
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn handle_schedule(
    State(state): State<AppState>,
    body: Result<Json<ScheduleShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(command) = parse_body(body) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state.schedule_handler.schedule(command).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_reschedule(
    State(state): State<AppState>,
    Path(shift_id): Path<i64>,
    body: Result<Json<ScheduleShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(command) = parse_body(body) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state.schedule_handler.reschedule(shift_id, command).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_remove(
    State(state): State<AppState>,
    Path(shift_id): Path<i64>,
) -> impl IntoResponse {
    match state.schedule_handler.remove(shift_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
