use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Branch roles, declared in board display order. `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Capitan (Shift manager)")]
    Capitan,
    #[serde(rename = "Cashtill")]
    Cashtill,
    #[serde(rename = "Quechua (Hiking department)")]
    Quechua,
    #[serde(rename = "Mobility department")]
    Mobility,
    #[serde(rename = "Domyos (fitness department)")]
    Domyos,
    #[serde(rename = "Wedze (Ski department)")]
    Wedze,
    #[serde(rename = "Fitting rooms")]
    FittingRooms,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: {0}")]
pub struct UnknownPosition(pub String);

impl Position {
    pub const ALL: [Position; 7] = [
        Position::Capitan,
        Position::Cashtill,
        Position::Quechua,
        Position::Mobility,
        Position::Domyos,
        Position::Wedze,
        Position::FittingRooms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::Capitan => "Capitan (Shift manager)",
            Position::Cashtill => "Cashtill",
            Position::Quechua => "Quechua (Hiking department)",
            Position::Mobility => "Mobility department",
            Position::Domyos => "Domyos (fitness department)",
            Position::Wedze => "Wedze (Ski department)",
            Position::FittingRooms => "Fitting rooms",
        }
    }

    pub fn from_label(label: &str) -> Option<Position> {
        let label = label.trim();
        Position::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_label(s).ok_or_else(|| UnknownPosition(s.to_string()))
    }
}
