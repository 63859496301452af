//! Movie record as it travels over the wire.
//!
//! # Design
//! One type serves both directions. Records built on the client carry no
//! `id`/`slug`; the server fills them in and they come back on list
//! responses. Field names are camelCase on the wire.
//!
//! Server records are read leniently: `id` may be a JSON string or number,
//! and `null` text fields or `genre` read as empty, so one odd record never
//! sinks a whole listing.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single movie.
///
/// `rating` and `duration` are `None` when the form value was not a number.
/// `None` encodes as JSON `null`, which the server rejects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Opaque server identifier. Numeric ids are kept in their decimal form.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opaque_id")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synopsis: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    pub rating: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_actor: String,
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(id)),
        Some(Value::Number(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(D::Error::custom(format!("unsupported id: {other}"))),
    }
}
