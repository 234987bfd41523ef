//! Timestamp formatting utilities
//!
//! Both formatters stamp events with the same layout. The default is
//! `2024-Jan-05 15:04:05.123`; ISO 8601, RFC 3339, Unix milliseconds and
//! custom strftime layouts are available for the `t` field as well.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime layout of [`TimestampFormat::Classic`]
pub const CLASSIC_LAYOUT: &str = "%Y-%b-%d %H:%M:%S%.3f";

/// Timestamp layout used by the formatters
///
/// # Examples
///
/// ```
/// use rust_kv_logger::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap();
/// assert_eq!(TimestampFormat::Classic.format(&t), "2024-Jan-05 15:04:05.000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `2024-Jan-05 15:04:05.123` (month as a three-letter abbreviation)
    #[default]
    Classic,

    /// ISO 8601 with milliseconds: `2024-01-05T15:04:05.123Z`
    Iso8601,

    /// RFC 3339 format: `2024-01-05T15:04:05.123+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1704467045123`
    UnixMillis,

    /// Custom strftime format, checked by [`TimestampFormat::custom`]
    Custom(String),
}

impl TimestampFormat {
    /// Build a custom layout, rejecting strings chrono cannot format
    pub fn custom(layout: impl Into<String>) -> Result<Self> {
        let layout = layout.into();
        if StrftimeItems::new(&layout).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "timestamp format",
                format!("invalid strftime layout '{}'", layout),
            ));
        }
        Ok(TimestampFormat::Custom(layout))
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Classic => datetime.format(CLASSIC_LAYOUT).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => {
                datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, false)
            }
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(layout) => {
                // A layout that slipped past `custom()` must not panic inside a log call
                let mut out = String::new();
                if write!(out, "{}", datetime.format(layout)).is_err() {
                    return datetime.format(CLASSIC_LAYOUT).to_string();
                }
                out
            }
        }
    }
}
