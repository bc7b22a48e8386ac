use sea_orm::Set;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::movie;

/// Marker the provider puts in `Response` when a call succeeded.
pub const RESPONSE_OK: &str = "True";

/// A movie as kept in the local store. Every field is free text, including
/// year and runtime.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
}

/// Result of an exact-title lookup, shaped like the provider's payload.
/// Text fields that are missing or `null` read as `""`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MovieDetails {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub year: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub rated: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub released: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub runtime: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub genre: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub director: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub writer: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub actors: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub plot: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub response: String,
    pub error: Option<String>,
}

impl MovieDetails {
    pub fn is_success(&self) -> bool {
        self.response == RESPONSE_OK
    }
}

/// One entry of a fuzzy search. Too thin to be stored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    #[serde(rename = "Title", deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "Year", deserialize_with = "null_as_empty")]
    pub year: String,
    #[serde(rename = "imdbID", deserialize_with = "null_as_empty")]
    pub imdb_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_empty")]
    pub media_type: String,
    #[serde(rename = "Poster", deserialize_with = "null_as_empty")]
    pub poster: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<MovieDetails> for MovieRecord {
    fn from(d: MovieDetails) -> Self {
        Self {
            title: d.title,
            year: d.year,
            rated: d.rated,
            released: d.released,
            runtime: d.runtime,
            genre: d.genre,
            director: d.director,
            writer: d.writer,
            actors: d.actors,
            plot: d.plot,
        }
    }
}

impl From<movie::Model> for MovieRecord {
    fn from(m: movie::Model) -> Self {
        Self {
            title: m.title,
            year: m.year,
            rated: m.rated,
            released: m.released,
            runtime: m.runtime,
            genre: m.genre,
            director: m.director,
            writer: m.writer,
            actors: m.actors,
            plot: m.plot,
        }
    }
}

impl From<MovieRecord> for movie::ActiveModel {
    fn from(r: MovieRecord) -> Self {
        Self {
            title: Set(r.title),
            year: Set(r.year),
            rated: Set(r.rated),
            released: Set(r.released),
            runtime: Set(r.runtime),
            genre: Set(r.genre),
            director: Set(r.director),
            writer: Set(r.writer),
            actors: Set(r.actors),
            plot: Set(r.plot),
        }
    }
}
