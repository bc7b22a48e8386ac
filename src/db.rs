use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::debug;

use crate::error::AppResult;

const PRAGMAS: [&str; 3] =
    ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA cache_size=-64000"];

/// Opens the database and brings the schema up to date. The returned handle
/// is meant to be created once and shared for the life of the process.
pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    debug!(database_url = %database_url, "database ready");

    Ok(db)
}
