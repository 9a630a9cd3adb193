use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{Local, NaiveDate};

use crate::modules::shifts::core::aggregate::{DayBucket, PositionHours};
use crate::modules::shifts::core::week::WeekConvention;
use crate::modules::shifts::use_cases::view_week::handler::{WeeklyHours, resolve_anchor};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPositionHours {
    pub position: String,
    pub hours: f64,
    pub percentage: f64,
}

impl From<PositionHours> for GqlPositionHours {
    fn from(v: PositionHours) -> Self {
        Self {
            position: v.position.label().to_string(),
            hours: v.hours,
            percentage: v.percentage,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlWeeklyHours {
    pub week_start: String,
    pub week_end: String,
    pub total_shifts: i64,
    pub total_hours: f64,
    pub average_hours_per_day: f64,
    pub positions: Vec<GqlPositionHours>,
}

impl From<WeeklyHours> for GqlWeeklyHours {
    fn from(v: WeeklyHours) -> Self {
        Self {
            week_start: v.week_start.to_string(),
            week_end: v.week_end.to_string(),
            total_shifts: v.summary.total_shifts as i64,
            total_hours: v.summary.total_hours,
            average_hours_per_day: v.summary.average_hours_per_day,
            positions: v.breakdown.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDayCounts {
    pub date: String,
    pub morning: i64,
    pub middle: i64,
    pub evening: i64,
    pub total: i64,
}

impl From<&DayBucket> for GqlDayCounts {
    fn from(day: &DayBucket) -> Self {
        let counts = day.counts();
        Self {
            date: day.date.to_string(),
            morning: counts.morning as i64,
            middle: counts.middle as i64,
            evening: counts.evening as i64,
            total: counts.total as i64,
        }
    }
}

fn parse_week(
    start_date: Option<String>,
    convention: Option<String>,
    default: WeekConvention,
) -> GqlResult<(WeekConvention, NaiveDate)> {
    let convention = match convention {
        Some(raw) => raw.parse::<WeekConvention>()?,
        None => default,
    };
    let start_date = start_date
        .map(|raw| raw.parse::<NaiveDate>())
        .transpose()?;
    let anchor = resolve_anchor(start_date, convention, Local::now().date_naive());
    Ok((convention, anchor))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn weekly_hours(
        &self,
        context: &Context<'_>,
        branch_id: i64,
        start_date: Option<String>,
    ) -> GqlResult<GqlWeeklyHours> {
        let state = context.data_unchecked::<AppState>();
        let (convention, anchor) = parse_week(start_date, None, state.weeks.board)?;
        let hours = state
            .week_view
            .weekly_hours(branch_id, anchor, convention)
            .await?;
        Ok(hours.into())
    }

    async fn weekly_board(
        &self,
        context: &Context<'_>,
        branch_id: i64,
        start_date: Option<String>,
        convention: Option<String>,
    ) -> GqlResult<Vec<GqlDayCounts>> {
        let state = context.data_unchecked::<AppState>();
        let (convention, anchor) = parse_week(start_date, convention, state.weeks.board)?;
        let board = state
            .week_view
            .branch_week(branch_id, anchor, convention)
            .await?;
        Ok(board.days.iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod view_week_graphql_inbound_tests {
    use std::sync::Arc;

    use crate::modules::shifts::adapters::outbound::shifts_in_memory::InMemoryShifts;
    use crate::shell::config::WeekDefaults;
    use crate::shell::graphql::schema;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::shifts::{ShiftRecordBuilder, at};

    async fn make_test_state() -> AppState {
        let store = InMemoryShifts::new();
        store
            .seed(vec![
                ShiftRecordBuilder::new()
                    .id(1)
                    .start(at(2024, 1, 1, 8, 0))
                    .end(at(2024, 1, 1, 15, 0))
                    .build(),
            ])
            .await;
        AppState::in_memory(Arc::new(store), WeekDefaults::default())
    }

    #[tokio::test]
    async fn it_should_resolve_weekly_hours() {
        let response = schema(make_test_state().await)
            .execute(
                r#"{ weeklyHours(branchId: 1, startDate: "2024-01-01") {
                    weekStart totalShifts totalHours positions { position hours percentage }
                } }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["weeklyHours"]["weekStart"], "2024-01-01");
        assert_eq!(json["weeklyHours"]["totalShifts"], 1);
        assert_eq!(json["weeklyHours"]["positions"][0]["position"], "Cashtill");
        assert_eq!(json["weeklyHours"]["positions"][0]["percentage"], 100.0);
    }

    #[tokio::test]
    async fn it_should_resolve_weekly_board_counts() {
        let response = schema(make_test_state().await)
            .execute(
                r#"{ weeklyBoard(branchId: 1, startDate: "2024-01-01") { date morning total } }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = response.data.into_json().unwrap();
        assert_eq!(json["weeklyBoard"].as_array().unwrap().len(), 7);
        assert_eq!(json["weeklyBoard"][0]["morning"], 1);
        assert_eq!(json["weeklyBoard"][1]["total"], 0);
    }

    #[tokio::test]
    async fn it_should_answer_an_error_for_the_last_calendar_week() {
        let response = schema(make_test_state().await)
            .execute(r#"{ weeklyHours(branchId: 1, startDate: "+262142-12-31") { totalHours } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("past the supported calendar"));
    }

    #[tokio::test]
    async fn it_should_reject_an_unknown_convention() {
        let response = schema(make_test_state().await)
            .execute(r#"{ weeklyBoard(branchId: 1, convention: "friday") { date } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("unknown week convention"));
    }
}
