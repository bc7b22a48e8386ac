use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait, sea_query::OnConflict,
};

use crate::{entities::movie, error::AppResult, models::MovieRecord};

/// Local movie table. Cheap to clone; clones share the connection pool.
///
/// Substring searches use SQLite `LIKE`, which folds ASCII case only:
/// `"gordon"` finds `"Gordon-Levitt"` but non-ASCII letters compare exactly.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Inserts the record, replacing every column of an existing row with
    /// the same title.
    pub async fn upsert(&self, record: MovieRecord) -> AppResult<()> {
        upsert_on(&self.db, record).await
    }

    /// All-or-nothing: either every record lands or the table is untouched.
    pub async fn upsert_many(&self, records: Vec<MovieRecord>) -> AppResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await?;
        for record in records {
            upsert_on(&txn, record).await?;
        }
        txn.commit().await?;

        Ok(())
    }

    /// `%` and `_` in the fragment are not escaped and act as `LIKE`
    /// wildcards, so `"%"` matches every row.
    pub async fn find_by_title_contains(&self, fragment: &str) -> AppResult<Vec<MovieRecord>> {
        self.find_where(movie::Column::Title, fragment).await
    }

    /// Matches against the raw comma-joined actors text, so the fragment must
    /// appear in stored order. Wildcards behave as in `find_by_title_contains`.
    pub async fn find_by_actor_contains(&self, fragment: &str) -> AppResult<Vec<MovieRecord>> {
        self.find_where(movie::Column::Actors, fragment).await
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    /// Deletes every row and returns how many were removed.
    pub async fn clear_all(&self) -> AppResult<u64> {
        let res = movie::Entity::delete_many().exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn find_where(&self, column: movie::Column, fragment: &str) -> AppResult<Vec<MovieRecord>> {
        let rows = movie::Entity::find()
            .filter(column.contains(fragment))
            .order_by_asc(movie::Column::Title)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(MovieRecord::from).collect())
    }
}

async fn upsert_on<C: ConnectionTrait>(conn: &C, record: MovieRecord) -> AppResult<()> {
    let model = movie::ActiveModel::from(record);

    movie::Entity::insert(model)
        .on_conflict(
            OnConflict::column(movie::Column::Title)
                .update_columns([
                    movie::Column::Year,
                    movie::Column::Rated,
                    movie::Column::Released,
                    movie::Column::Runtime,
                    movie::Column::Genre,
                    movie::Column::Director,
                    movie::Column::Writer,
                    movie::Column::Actors,
                    movie::Column::Plot,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}
