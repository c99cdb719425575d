//! Movie records as served by the movie API.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::Result;
use crate::error::DecodeError;
use crate::types::MovieId;

/// One bookable movie.
///
/// Records are immutable once received; a fresh fetch replaces them
/// wholesale. Missing or unparseable optional fields decode to `None`
/// rather than failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Stable identifier, keyed as `_id` on the wire.
    #[serde(rename = "_id", alias = "id")]
    pub id: MovieId,

    #[serde(default)]
    pub title: String,

    /// Calendar release date.
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_date: Option<NaiveDate>,

    /// Poster image URI.
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub poster_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl MovieRecord {
    /// Create a record with only the required fields set.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: None,
            poster_url: None,
            description: None,
        }
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parse a release date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are reduced to their UTC calendar date.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_utc().date())
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::String(ref s)) => parse_release_date(s),
        _ => None,
    };
    if parsed.is_none() && value.as_ref().is_some_and(|v| !v.is_null()) {
        debug!(?value, "Ignoring unrecognised release date");
    }
    Ok(parsed)
}

fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Decode a movie list body.
///
/// Accepts both `{"movies": [...]}` and a bare JSON array; a null or absent
/// `movies` field is an empty list. Order is preserved exactly as received.
/// A record that cannot be decoded is skipped so the rest still render.
pub fn decode_movie_list(body: &[u8]) -> Result<Vec<MovieRecord>> {
    let items = match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("movies") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(DecodeError {
                    message: format!(
                        "expected `movies` to be an array, found {}",
                        kind(&other)
                    ),
                }
                .into());
            }
        },
        other => {
            return Err(DecodeError {
                message: format!("expected a movie list, found {}", kind(&other)),
            }
            .into());
        }
    };

    let total = items.len();
    let movies: Vec<MovieRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(movie) => Some(movie),
            Err(e) => {
                warn!(index, error = %e, "Skipping undecodable movie record");
                None
            }
        })
        .collect();

    debug!(total, decoded = movies.len(), "Decoded movie list");
    Ok(movies)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
