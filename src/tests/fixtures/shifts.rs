// Shared shift fixtures. The default record is read from json/shift_record.json
// through the same ingestion path the API uses.

use crate::modules::shifts::core::position::Position;
use crate::modules::shifts::core::shift::{NewShift, ShiftRecord, ShiftRow};
use chrono::{NaiveDate, NaiveDateTime};

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub struct ShiftRecordBuilder {
    inner: ShiftRecord,
}

impl Default for ShiftRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ShiftRecordBuilder {
    pub fn new() -> Self {
        let row: ShiftRow = serde_json::from_str(include_str!("json/shift_record.json")).unwrap();
        Self {
            inner: ShiftRecord::try_from(row).unwrap(),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn branch_id(mut self, v: i64) -> Self {
        self.inner.branch_id = v;
        self
    }

    pub fn start(mut self, v: NaiveDateTime) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end(mut self, v: NaiveDateTime) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn position(mut self, v: Position) -> Self {
        self.inner.position = v.label().to_string();
        self
    }

    pub fn position_label(mut self, v: impl Into<String>) -> Self {
        self.inner.position = v.into();
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn employee_name(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_name = Some(v.into());
        self
    }

    pub fn build(self) -> ShiftRecord {
        self.inner
    }

    pub fn build_new(self) -> NewShift {
        let position = self.inner.position().expect("fixture position must be known");
        NewShift {
            user_id: self.inner.user_id,
            branch_id: self.inner.branch_id,
            start_time: self.inner.start_time,
            end_time: self.inner.end_time,
            position,
            notes: self.inner.notes,
        }
    }
}

#[cfg(test)]
mod shift_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ShiftRecordBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.branch_id, 1);
        assert_eq!(built.start_time, at(2024, 1, 1, 8, 0));
        assert_eq!(built.end_time, at(2024, 1, 1, 15, 0));
        assert_eq!(built.position(), Some(Position::Cashtill));
        assert_eq!(built.notes, None);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ShiftRecordBuilder::new()
            .id(9)
            .user_id("u-9")
            .branch_id(4)
            .start(at(2024, 2, 1, 11, 0))
            .end(at(2024, 2, 1, 19, 30))
            .position(Position::Quechua)
            .notes("inventory")
            .employee_name("Tal")
            .build();

        assert_eq!(custom.id, 9);
        assert_eq!(custom.user_id, "u-9");
        assert_eq!(custom.branch_id, 4);
        assert_eq!(custom.hours(), 8.5);
        assert_eq!(custom.position, "Quechua (Hiking department)");
        assert_eq!(custom.notes.as_deref(), Some("inventory"));
        assert_eq!(custom.employee_name.as_deref(), Some("Tal"));
    }
}
