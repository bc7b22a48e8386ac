use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::{
    error::AppResult,
    models::{MovieDetails, MovieRecord, SearchHit},
    omdb::OmdbClient,
    seed,
    store::MovieStore,
};

/// The one entry point consumers use for movie data. Store failures are
/// logged and handed back; provider results pass through untouched.
pub struct MovieRepository {
    store: MovieStore,
    omdb: OmdbClient,
    seed_lock: Mutex<()>,
}

impl MovieRepository {
    pub fn new(store: MovieStore, omdb: OmdbClient) -> Self {
        Self { store, omdb, seed_lock: Mutex::new(()) }
    }

    pub async fn insert_one(&self, movie: MovieRecord) -> AppResult<()> {
        debug!(title = %movie.title, "inserting movie");
        self.store
            .upsert(movie)
            .await
            .inspect(|_| debug!("movie inserted"))
            .inspect_err(|err| error!(error = %err, "failed to insert movie"))
    }

    pub async fn insert_many(&self, movies: Vec<MovieRecord>) -> AppResult<()> {
        debug!(count = movies.len(), "inserting movies");
        self.store
            .upsert_many(movies)
            .await
            .inspect(|_| debug!("movies inserted"))
            .inspect_err(|err| error!(error = %err, "failed to insert movies"))
    }

    /// Stores a lookup result, replacing any saved movie with the same title.
    pub async fn save_lookup(&self, details: MovieDetails) -> AppResult<()> {
        self.insert_one(details.into()).await
    }

    pub async fn search_by_title(&self, title: &str) -> AppResult<Vec<MovieRecord>> {
        debug!(title = %title, "searching stored movies by title");
        self.store
            .find_by_title_contains(title)
            .await
            .inspect(|found| debug!(found = found.len(), "title search finished"))
            .inspect_err(|err| error!(error = %err, "failed to search movies by title"))
    }

    pub async fn search_by_actor(&self, actor: &str) -> AppResult<Vec<MovieRecord>> {
        debug!(actor = %actor, "searching stored movies by actor");
        self.store
            .find_by_actor_contains(actor)
            .await
            .inspect(|found| debug!(found = found.len(), "actor search finished"))
            .inspect_err(|err| error!(error = %err, "failed to search movies by actor"))
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.store
            .count()
            .await
            .inspect_err(|err| error!(error = %err, "failed to count movies"))
    }

    pub async fn clear_all(&self) -> AppResult<()> {
        debug!("clearing database");
        self.store
            .clear_all()
            .await
            .map(|removed| debug!(removed = removed, "database cleared"))
            .inspect_err(|err| error!(error = %err, "failed to clear database"))
    }

    pub async fn lookup_from_api(&self, title: &str) -> AppResult<MovieDetails> {
        self.omdb
            .lookup_by_title(title)
            .await
            .inspect(|movie| debug!(title = %movie.title, "lookup succeeded"))
            .inspect_err(|err| error!(title = %title, error = %err, "lookup failed"))
    }

    pub async fn search_many_from_api(&self, term: &str) -> AppResult<Vec<SearchHit>> {
        self.omdb
            .search_by_term(term)
            .await
            .inspect(|hits| debug!(found = hits.len(), "provider search succeeded"))
            .inspect_err(|err| error!(term = %term, error = %err, "provider search failed"))
    }

    /// Writes the built-in movies when the store is empty. Returns whether
    /// anything was written. Concurrent callers on the same repository are
    /// serialized, so at most one of them seeds.
    pub async fn seed_if_empty(&self) -> AppResult<bool> {
        let _guard = self.seed_lock.lock().await;

        let count = self.count().await?;
        if count > 0 {
            debug!(count = count, "movies already present, skipping seed");
            return Ok(false);
        }

        let movies = seed::builtin_movies();
        info!(count = movies.len(), "seeding built-in movies");
        self.insert_many(movies).await?;
        Ok(true)
    }
}
