//! # Wire Types
//!
//! Book records as the review service returns them from `GET /books`.
//!
//! The service is not strict about its records, so decoding is lenient:
//! a single malformed record must not sink the whole collection.
//!
//! ```text
//! {"_id": "...", "title": "...", "author": "...", "coverImage": "...", "rating": 4.5}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single book as consumed by the catalog.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Book {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub author: String,
    #[serde(
        rename = "coverImage",
        alias = "coverImageUrl",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub cover_image_url: String,
    /// `None` when the record carries no usable number.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
}

impl Book {
    /// Integer floor of the rating, the value bucket filters compare against.
    pub fn rating_floor(&self) -> Option<i64> {
        self.rating.map(|r| r.floor() as i64)
    }
}

/// Ids arrive as strings (document stores) or numbers (relational backends).
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Numbers pass through, numeric strings are parsed, everything else is `None`.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let rating = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(rating.filter(|r| r.is_finite()))
}
