#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use movieshelf::{MovieRecord, MovieRepository, MovieStore, OmdbClient, db};
use serde_json::json;
use tempfile::TempDir;

pub const API_KEY: &str = "test-key";

/// A store backed by a fresh SQLite file. Keep the `TempDir` alive for as long
/// as the store is used.
pub async fn temp_store() -> (MovieStore, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
    let db = db::connect_and_migrate(&url).await.expect("connect and migrate");
    (MovieStore::new(db), dir)
}

/// Starts a fake OMDb on an ephemeral port and returns its base URL.
pub async fn spawn_provider() -> String {
    let app = Router::new().route("/", get(provider));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake provider");
    });
    format!("http://{addr}/")
}

pub fn client(base_url: &str) -> OmdbClient {
    OmdbClient::new(reqwest::Client::new(), API_KEY.to_string(), base_url.to_string())
}

pub async fn repository() -> (MovieRepository, MovieStore, TempDir) {
    let (store, dir) = temp_store().await;
    let base_url = spawn_provider().await;
    let repo = MovieRepository::new(store.clone(), client(&base_url));
    (repo, store, dir)
}

pub fn record(title: &str, actors: &str) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        year: "2000".to_string(),
        actors: actors.to_string(),
        ..Default::default()
    }
}

async fn provider(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("apikey").map(String::as_str) != Some(API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"Response": "False", "Error": "Invalid API key!"})),
        )
            .into_response();
    }

    if let Some(title) = params.get("t") {
        return lookup(title);
    }
    if let Some(term) = params.get("s") {
        return search(term);
    }

    Json(json!({"Response": "False", "Error": "Incorrect IMDb ID."})).into_response()
}

fn lookup(title: &str) -> Response {
    match title.to_lowercase().as_str() {
        "the matrix" => Json(json!({
            "Title": "The Matrix",
            "Year": "1999",
            "Rated": "R",
            "Released": "31 Mar 1999",
            "Runtime": "136 min",
            "Genre": "Action, Sci-Fi",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Writer": "Lilly Wachowski, Lana Wachowski",
            "Actors": "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
            "Plot": "Neo learns the truth about the Matrix.",
            "imdbID": "tt0133093",
            "Response": "True"
        }))
        .into_response(),
        "batman: the dark knight returns, part 1" => Json(json!({
            "Title": "Batman: The Dark Knight Returns, Part 1",
            "Year": "2012",
            "Response": "True"
        }))
        .into_response(),
        "solo" => Json(json!({"Title": "Solo", "Response": "True"})).into_response(),
        "teapot" => StatusCode::IM_A_TEAPOT.into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response(),
    }
}

fn search(term: &str) -> Response {
    match term.to_lowercase().as_str() {
        "matrix" => Json(json!({
            "Response": "True",
            "totalResults": "3",
            "Search": [
                {"Title": "The Matrix", "Year": "1999", "imdbID": "tt0133093", "Type": "movie", "Poster": "https://img/1.jpg"},
                {"Title": "The Matrix Reloaded", "Year": "2003", "imdbID": "tt0234215", "Type": "movie", "Poster": "https://img/2.jpg"},
                {"Title": "The Matrix Revolutions", "Year": "2003", "imdbID": "tt0242653", "Type": "movie"}
            ]
        }))
        .into_response(),
        "nothingmatches" => Json(json!({"Response": "True", "Search": []})).into_response(),
        "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response(),
    }
}
