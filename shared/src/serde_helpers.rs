//! Common serde helpers for API payloads

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// The browser client sends `Date.toISOString()` output, so the time part
/// is accepted and dropped.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Deserialize a `NaiveDate` via [`parse_date`]
pub fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

/// Deserialize an optional `NaiveDate` via [`parse_date`] (null → None)
pub fn flexible_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}"))),
        None => Ok(None),
    }
}

/// Distinguish an absent field from an explicit null.
///
/// Use together with `#[serde(default)]`:
/// - field absent → `None`
/// - `null` → `Some(None)`
/// - value → `Some(Some(v))`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
