use reqwest::StatusCode;
use serde::{Deserialize, de::Error as _};
use tracing::{debug, warn};

use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, RESPONSE_OK, SearchHit},
};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

const UNKNOWN_ERROR: &str = "Unknown error";

/// Client for the OMDb API. Holds no state between calls beyond the shared
/// `reqwest::Client`.
pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        if api_key.trim().is_empty() {
            warn!("no OMDB_API_KEY provided, the provider will reject requests");
        }

        Self { client, api_key, base_url }
    }

    /// Exact-title lookup (`t=`). Matching is done by the provider and is
    /// case-insensitive.
    pub async fn lookup_by_title(&self, title: &str) -> AppResult<MovieDetails> {
        debug!(title = %title, "looking up movie by title");
        let body = self.get(("t", title)).await?;
        parse_lookup(&body)
    }

    /// Fuzzy search (`s=`). Hits come back in provider order.
    pub async fn search_by_term(&self, term: &str) -> AppResult<Vec<SearchHit>> {
        debug!(term = %term, "searching movies by term");
        let body = self.get(("s", term)).await?;
        parse_search(&body)
    }

    /// The request URL carries the API key, so it is stripped from transport
    /// errors before they reach logs or users.
    async fn get(&self, param: (&str, &str)) -> AppResult<String> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[param, ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = resp.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "provider returned non-200 status");
            return Err(AppError::HttpStatus(status.as_u16()));
        }

        Ok(resp.text().await.map_err(reqwest::Error::without_url)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    search: Option<Vec<SearchHit>>,
}

fn parse_lookup(body: &str) -> AppResult<MovieDetails> {
    let details: MovieDetails = serde_json::from_str(body)?;
    if !details.is_success() {
        return Err(api_error(details.error));
    }
    Ok(details)
}

fn parse_search(body: &str) -> AppResult<Vec<SearchHit>> {
    let resp: SearchResponse = serde_json::from_str(body)?;
    if resp.response != RESPONSE_OK {
        return Err(api_error(resp.error));
    }
    // An empty array is zero hits; a missing one is a malformed body.
    resp.search.ok_or_else(|| serde_json::Error::missing_field("Search").into())
}

fn api_error(message: Option<String>) -> AppError {
    AppError::Api(message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
}
