//! History query validation helpers
//!
//! Pure validation and lookup functions for vault history queries. The
//! dashboard's history route handlers validate a chain id and a period
//! token before hitting their data source; the period also determines the
//! window length and the aggregation bucket size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

const DAY_SECS: u64 = 86_400;

/// Aggregation bucket size for a history series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hourly,
    Daily,
}

/// Supported history window tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "all")]
    AllTime,
}

impl HistoryPeriod {
    pub const ALL: [HistoryPeriod; 5] = [
        HistoryPeriod::SevenDays,
        HistoryPeriod::ThirtyDays,
        HistoryPeriod::NinetyDays,
        HistoryPeriod::OneYear,
        HistoryPeriod::AllTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryPeriod::SevenDays => "7d",
            HistoryPeriod::ThirtyDays => "30d",
            HistoryPeriod::NinetyDays => "90d",
            HistoryPeriod::OneYear => "1y",
            HistoryPeriod::AllTime => "all",
        }
    }

    /// Window length in seconds. `None` means unbounded (all-time).
    pub fn duration_secs(&self) -> Option<u64> {
        match self {
            HistoryPeriod::SevenDays => Some(7 * DAY_SECS),
            HistoryPeriod::ThirtyDays => Some(30 * DAY_SECS),
            HistoryPeriod::NinetyDays => Some(90 * DAY_SECS),
            HistoryPeriod::OneYear => Some(365 * DAY_SECS),
            HistoryPeriod::AllTime => None,
        }
    }

    /// Bucket size used when aggregating the window: hourly for short
    /// windows, daily for long ones.
    pub fn granularity(&self) -> Granularity {
        match self {
            HistoryPeriod::SevenDays | HistoryPeriod::ThirtyDays => Granularity::Hourly,
            HistoryPeriod::NinetyDays | HistoryPeriod::OneYear | HistoryPeriod::AllTime => {
                Granularity::Daily
            }
        }
    }
}

impl FromStr for HistoryPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(HistoryPeriod::SevenDays),
            "30d" => Ok(HistoryPeriod::ThirtyDays),
            "90d" => Ok(HistoryPeriod::NinetyDays),
            "1y" => Ok(HistoryPeriod::OneYear),
            "all" => Ok(HistoryPeriod::AllTime),
            other => Err(ValidationError::UnknownPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a chain id: a positive integer within 32-bit signed range.
///
/// Only plain decimal digits are accepted; signs, whitespace, and values
/// past `i32::MAX` are rejected.
pub fn parse_chain_id(s: &str) -> Result<i32, ValidationError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidChainId(s.to_string()));
    }

    s.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::InvalidChainId(s.to_string()))
}

pub fn is_valid_chain_id(s: &str) -> bool {
    parse_chain_id(s).is_ok()
}

pub fn is_valid_period(s: &str) -> bool {
    HistoryPeriod::from_str(s).is_ok()
}
