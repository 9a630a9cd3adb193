use crate::modules::shifts::core::week::WeekConvention;
use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "SHIFT_BOARD_ADDR";
pub const BOARD_WEEK_VAR: &str = "SHIFT_BOARD_BOARD_WEEK";
pub const PERSONAL_WEEK_VAR: &str = "SHIFT_BOARD_PERSONAL_WEEK";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Week conventions used when a request does not name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDefaults {
    /// Staffing board and hours analytics.
    pub board: WeekConvention,
    /// An employee's own week.
    pub personal: WeekConvention,
}

impl Default for WeekDefaults {
    fn default() -> Self {
        Self {
            board: WeekConvention::MondayStart,
            personal: WeekConvention::SundayStart,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub weeks: WeekDefaults,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr.parse().map_err(|_| ConfigError::Invalid {
            key: ADDR_VAR,
            value: addr.clone(),
        })?;
        let defaults = WeekDefaults::default();
        Ok(Self {
            addr,
            weeks: WeekDefaults {
                board: convention(&lookup, BOARD_WEEK_VAR, defaults.board)?,
                personal: convention(&lookup, PERSONAL_WEEK_VAR, defaults.personal)?,
            },
        })
    }
}

fn convention(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: WeekConvention,
) -> Result<WeekConvention, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
