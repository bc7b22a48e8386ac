//! Movie metadata lookups against the OMDb API, with a local SQLite shelf
//! for saved and seeded movies.

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod omdb;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::{AppError, AppResult};
pub use models::{MovieDetails, MovieRecord, SearchHit};
pub use omdb::OmdbClient;
pub use repository::MovieRepository;
pub use store::MovieStore;
