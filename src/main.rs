use std::time::Duration;

use movieshelf::{MovieRepository, MovieStore, OmdbClient, config::Config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movieshelf=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("movieshelf/0.1")
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);
    let omdb = OmdbClient::new(http, config.omdb_api_key.clone(), config.omdb_base_url.clone());
    let repo = MovieRepository::new(store, omdb);

    if config.clear_on_start {
        tracing::info!("clearing database on start");
        repo.clear_all().await?;
    }

    let seeded = repo.seed_if_empty().await?;
    let count = repo.count().await?;
    tracing::info!(seeded = seeded, movies = count, "movie shelf ready");

    Ok(())
}
