// Utility functions
use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::DateTime as BsonDateTime;
use unicode_normalization::UnicodeNormalization;

/// Formats a BSON date as ISO-8601 UTC with millisecond precision.
///
/// Dates outside chrono's range fall back to the raw millisecond value.
pub fn bson_to_iso8601(dt: &BsonDateTime) -> String {
    match DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()) {
        Some(utc) => utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => dt.timestamp_millis().to_string(),
    }
}

pub fn chrono_to_bson(dt: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(dt.timestamp_millis())
}

/// Strips accents, drops everything but ASCII letters and whitespace,
/// lowercases and joins words with dots: "Débora Lima" -> "debora.lima".
pub fn slugify(text: &str) -> String {
    let letters: String = text
        .nfd()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    letters
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}
