use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Timestamp deserializer accepting epoch milliseconds, RFC3339 strings,
/// and the naive `YYYY-MM-DDTHH:MM:SS` strings that chat exports carry.
///
/// An unparseable timestamp degrades to the Unix epoch instead of failing:
/// the timestamp only feeds the recency tiebreak, and a bad value must
/// sort as the earliest possible time rather than abort a corpus load.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_timestamp_value(&value))
}

fn parse_timestamp_value(value: &Value) -> DateTime<Utc> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or(DateTime::UNIX_EPOCH),
        Value::String(s) => parse_timestamp_str(s),
        _ => DateTime::UNIX_EPOCH,
    }
}

fn parse_timestamp_str(s: &str) -> DateTime<Utc> {
    if let Ok(ts) = s.parse::<DateTime<Utc>>() {
        return ts;
    }
    // Naive local form without zone, e.g. "2024-01-06T09:00:00".
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return naive.and_utc();
    }
    DateTime::UNIX_EPOCH
}
