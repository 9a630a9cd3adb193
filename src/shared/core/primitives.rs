use serde::{Deserialize, Serialize};

/// An identifier as it arrives over the wire: some clients send `3`, others `"3"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseId {
    Number(i64),
    Text(String),
}

impl LooseId {
    /// Integer form of the id, if it has one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            LooseId::Number(n) => Some(*n),
            LooseId::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Canonical string key. Empty when the id is blank.
    pub fn into_key(self) -> String {
        match self {
            LooseId::Number(n) => n.to_string(),
            LooseId::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<i64> for LooseId {
    fn from(value: i64) -> Self {
        LooseId::Number(value)
    }
}

impl From<&str> for LooseId {
    fn from(value: &str) -> Self {
        LooseId::Text(value.to_string())
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
