use crate::modules::shifts::adapters::outbound::shifts_in_memory::InMemoryShifts;
use crate::modules::shifts::core::period::ShiftPeriod;
use crate::modules::shifts::core::position::Position;
use crate::modules::shifts::core::shift::{IngestError, ShiftRow, ingest_rows};
use crate::modules::shifts::core::week::{WeekConvention, shift_week};
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::modules::shifts::use_cases::schedule_shift::handler::ScheduleShiftHandler;
use crate::modules::shifts::use_cases::view_week::handler::WeekViewHandler;
use chrono::NaiveDate;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn schedules_shifts_and_reads_them_back_per_week() {
    let store = Arc::new(InMemoryShifts::new());
    let scheduler = ScheduleShiftHandler::new(store.clone());
    let view = WeekViewHandler::new(store.clone());

    let commands = [
        ScheduleShift::for_period("u-1", 1, date(2024, 1, 1), ShiftPeriod::Morning, "Cashtill"),
        ScheduleShift::for_period(
            "u-2",
            1,
            date(2024, 1, 2),
            ShiftPeriod::Middle,
            Position::Domyos.label(),
        ),
        ScheduleShift::for_period("u-1", 1, date(2024, 1, 7), ShiftPeriod::Evening, "Cashtill"),
        ScheduleShift::for_period(
            "u-1",
            1,
            date(2024, 1, 8),
            ShiftPeriod::Morning,
            Position::Wedze.label(),
        ),
        ScheduleShift::for_period("u-3", 2, date(2024, 1, 1), ShiftPeriod::Morning, "Cashtill"),
    ];
    for command in commands {
        scheduler.schedule(command).await.unwrap();
    }

    let board = view
        .branch_week(1, date(2024, 1, 3), WeekConvention::MondayStart)
        .await
        .unwrap();
    assert_eq!(board.week_start, date(2024, 1, 1));
    assert_eq!(board.week_end, date(2024, 1, 7));
    assert_eq!(board.summary.total_shifts, 3);
    assert_eq!(board.days[0].morning.for_position(Position::Cashtill).len(), 1);
    assert_eq!(board.days[1].middle.for_position(Position::Domyos).len(), 1);
    assert_eq!(board.days[6].evening.count(), 1);
    assert!(board.unmapped_shift_ids.is_empty());

    let hours = view
        .weekly_hours(1, date(2024, 1, 1), WeekConvention::MondayStart)
        .await
        .unwrap();
    assert_eq!(hours.summary.total_hours, 22.75);
    assert_eq!(hours.summary.average_hours_per_day, 3.25);
    assert_eq!(hours.breakdown[0].position, Position::Cashtill);
    assert_eq!(hours.breakdown[0].hours, 14.25);
    assert_eq!(hours.breakdown[0].percentage, 62.64);
    assert_eq!(hours.breakdown[1].percentage, 37.36);

    // The same Sunday evening opens the next Sunday-start week.
    let next = shift_week(date(2024, 1, 1), 1, WeekConvention::SundayStart);
    assert_eq!(next, date(2024, 1, 7));
    let mine = view
        .employee_week(1, "u-1", next, WeekConvention::SundayStart)
        .await
        .unwrap();
    assert_eq!(mine.summary.total_shifts, 2);
    assert_eq!(mine.days[0].evening.count(), 1);
    assert_eq!(mine.days[1].morning.for_position(Position::Wedze).len(), 1);

    let monday = view.day_summary(1, date(2024, 1, 1)).await.unwrap();
    assert_eq!(monday.counts.morning, 1);
    assert_eq!(monday.counts.total, 1);
}

#[tokio::test]
async fn ingests_a_fetched_batch_and_skips_malformed_rows() {
    let rows: Vec<ShiftRow> = serde_json::from_str(
        r#"[
            {"id": 10, "user_id": "u-1", "branch_id": "1",
             "start_time": "2024-01-01T08:00:00Z", "end_time": "2024-01-01T15:00:00Z",
             "position": "Cashtill", "employee": "Ana"},
            {"id": "11", "user_id": 42, "branch_id": 1,
             "start_time": "2024-01-01 11:30", "end_time": "2024-01-01 19:30",
             "position": "Bakery", "employee": {"name": "Bo", "notes": "trainee"}},
            {"id": 12, "user_id": "u-3", "branch_id": 1,
             "start_time": "soon", "end_time": "2024-01-01T22:00:00",
             "position": "Wedze (Ski department)"}
        ]"#,
    )
    .unwrap();

    let ingested = ingest_rows(rows);
    assert_eq!(ingested.records.len(), 2);
    assert_eq!(ingested.rejected.len(), 1);
    assert_eq!(ingested.rejected[0].id, "12");
    assert!(matches!(
        ingested.rejected[0].reason,
        IngestError::InvalidTimestamp { field: "start_time", .. }
    ));

    let store = Arc::new(InMemoryShifts::new());
    store.seed(ingested.records).await;
    let view = WeekViewHandler::new(store);

    let board = view
        .branch_week(1, date(2024, 1, 1), WeekConvention::MondayStart)
        .await
        .unwrap();
    let monday = &board.days[0];
    assert_eq!(
        monday.morning.for_position(Position::Cashtill)[0]
            .employee_name
            .as_deref(),
        Some("Ana")
    );
    assert_eq!(monday.middle.count(), 1);
    assert_eq!(monday.middle.shifts[0].notes.as_deref(), Some("trainee"));
    assert_eq!(board.unmapped_shift_ids, vec![11]);
    assert_eq!(board.summary.total_shifts, 2);
    assert_eq!(board.summary.total_hours, 15.0);
    assert_eq!(board.summary.hours_by_position.len(), 1);
}
