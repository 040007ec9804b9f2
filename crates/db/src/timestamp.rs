//! Lenient parsing of ISO-8601 local date-times.
//!
//! Clients send timestamps with or without seconds (`2025-10-30T14:30` from
//! `datetime-local` inputs). Both are accepted; output always carries seconds.
//!
//! Use as `#[serde(deserialize_with = "db::timestamp::deserialize")]`.

use chrono::NaiveDateTime;
use serde::{de::Error as _, Deserialize, Deserializer};

/// `%.f` also matches an absent fraction.
const WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, WITH_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, WITHOUT_SECONDS))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| D::Error::custom(format!("invalid date-time '{raw}': {e}")))
}
