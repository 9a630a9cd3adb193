use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::shifts::use_cases::schedule_shift::inbound::http as schedule_http;
use crate::modules::shifts::use_cases::view_week::inbound::http as week_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/shifts", post(schedule_http::handle_schedule))
        .route(
            "/shifts/{shift_id}",
            put(schedule_http::handle_reschedule).delete(schedule_http::handle_remove),
        )
        .route("/shifts/branch/{branch_id}", get(week_http::handle_branch_shifts))
        .route(
            "/shifts/weekly-board/{branch_id}",
            get(week_http::handle_weekly_board),
        )
        .route(
            "/shifts/employee/{branch_id}/{user_id}",
            get(week_http::handle_employee_week),
        )
        .route(
            "/shifts/weekly-hours/{branch_id}",
            get(week_http::handle_weekly_hours),
        )
        .route("/shifts/summary/{branch_id}", get(week_http::handle_day_summary))
        .with_state(state)
}
