use crate::modules::shifts::core::period::{ShiftPeriod, classify_period, duration_hours};
use crate::modules::shifts::core::position::Position;
use crate::shared::core::primitives::LooseId;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored shift, as every view reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: i64,
    pub user_id: String,
    pub branch_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Position label as stored. Labels outside [`Position`] are kept verbatim.
    pub position: String,
    pub notes: Option<String>,
    pub employee_name: Option<String>,
}

impl ShiftRecord {
    pub fn position(&self) -> Option<Position> {
        Position::from_label(&self.position)
    }

    pub fn period(&self) -> ShiftPeriod {
        classify_period(self.start_time)
    }

    pub fn hours(&self) -> f64 {
        duration_hours(self.start_time, self.end_time)
    }

    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }
}

/// A shift that has passed validation but has no identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    pub user_id: String,
    pub branch_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub position: Position,
    pub notes: Option<String>,
}

impl NewShift {
    pub fn into_record(self, id: i64) -> ShiftRecord {
        ShiftRecord {
            id,
            user_id: self.user_id,
            branch_id: self.branch_id,
            start_time: self.start_time,
            end_time: self.end_time,
            position: self.position.label().to_string(),
            notes: self.notes,
            employee_name: None,
        }
    }
}

/// Employee display data. Older payloads carry a bare name, newer ones an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeDisplay {
    Name(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
}

/// Transport shape of a shift, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRow {
    pub id: LooseId,
    pub user_id: LooseId,
    pub branch_id: LooseId,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// Missing labels are kept as an unknown (empty) position.
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub employee: Option<EmployeeDisplay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("invalid shift id: {0:?}")]
    InvalidId(String),

    #[error("invalid branch id: {0:?}")]
    InvalidBranch(String),

    #[error("missing employee reference")]
    MissingEmployee,

    #[error("invalid {field}: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("unreadable shift row: {0}")]
    Malformed(String),
}

const WALL_CLOCK_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Reads a timestamp as naive wall-clock time. A UTC offset, if present, is
/// dropped and the written local time kept.
pub fn parse_wall_clock(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    WALL_CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn timestamp(field: &'static str, raw: Option<&str>) -> Result<NaiveDateTime, IngestError> {
    let raw = raw.ok_or(IngestError::MissingField(field))?;
    parse_wall_clock(raw).ok_or_else(|| IngestError::InvalidTimestamp {
        field,
        value: raw.to_string(),
    })
}

impl TryFrom<ShiftRow> for ShiftRecord {
    type Error = IngestError;

    fn try_from(row: ShiftRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .as_i64()
            .ok_or_else(|| IngestError::InvalidId(row.id.clone().into_key()))?;
        let branch_id = row
            .branch_id
            .as_i64()
            .ok_or_else(|| IngestError::InvalidBranch(row.branch_id.clone().into_key()))?;
        let user_id = row.user_id.into_key();
        if user_id.is_empty() {
            return Err(IngestError::MissingEmployee);
        }
        let start_time = timestamp("start_time", row.start_time.as_deref())?;
        let end_time = timestamp("end_time", row.end_time.as_deref())?;

        let (employee_name, employee_notes) = match row.employee {
            Some(EmployeeDisplay::Name(name)) => (Some(name), None),
            Some(EmployeeDisplay::Detailed { name, notes }) => (name, notes),
            None => (None, None),
        };

        Ok(ShiftRecord {
            id,
            user_id,
            branch_id,
            start_time,
            end_time,
            position: row
                .position
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            notes: row.notes.or(employee_notes),
            employee_name,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub id: String,
    pub reason: IngestError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingested {
    pub records: Vec<ShiftRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl Ingested {
    fn accept(&mut self, id: String, result: Result<ShiftRecord, IngestError>) {
        match result {
            Ok(record) => self.records.push(record),
            Err(reason) => {
                tracing::warn!(shift_id = %id, %reason, "dropping malformed shift row");
                self.rejected.push(RejectedRow { id, reason });
            }
        }
    }
}

/// Normalizes a fetched batch. Bad rows are dropped and reported, never fatal.
pub fn ingest_rows(rows: impl IntoIterator<Item = ShiftRow>) -> Ingested {
    let mut ingested = Ingested::default();
    for row in rows {
        let id = row.id.clone().into_key();
        ingested.accept(id, ShiftRecord::try_from(row));
    }
    ingested
}

/// Like [`ingest_rows`], for a batch still in JSON form. A row whose shape
/// does not even fit [`ShiftRow`] is rejected on its own.
pub fn ingest_values(values: impl IntoIterator<Item = serde_json::Value>) -> Ingested {
    let mut ingested = Ingested::default();
    for value in values {
        let id = match value.get("id") {
            Some(serde_json::Value::String(s)) => s.trim().to_string(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let result = serde_json::from_value::<ShiftRow>(value)
            .map_err(|e| IngestError::Malformed(e.to_string()))
            .and_then(ShiftRecord::try_from);
        ingested.accept(id, result);
    }
    ingested
}
