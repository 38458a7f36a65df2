// src/repositories/favorite_repository.rs

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::FavoriteRecord;
use crate::error::{AppError, AppResult};

/// Durable store of favorite movies, keyed by movie id.
///
/// Every call blocks the calling thread; callers run it on a worker.
#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    fn find_by_id(&self, id: i64) -> AppResult<Option<FavoriteRecord>>;

    /// Inserts the record, replacing any row with the same id
    fn insert(&self, record: &FavoriteRecord) -> AppResult<()>;

    fn delete(&self, record: &FavoriteRecord) -> AppResult<()>;

    fn list_all(&self) -> AppResult<Vec<FavoriteRecord>>;

    fn count(&self) -> AppResult<usize>;
}

pub struct SqliteFavoriteRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteFavoriteRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &Row) -> Result<FavoriteRecord, rusqlite::Error> {
        Ok(FavoriteRecord {
            id: row.get("id")?,
            title: row.get("title")?,
            release_date: row.get("release_date")?,
            poster_path: row.get("poster_path")?,
            rating: row.get("rating")?,
            synopsis: row.get("synopsis")?,
        })
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    fn find_by_id(&self, id: i64) -> AppResult<Option<FavoriteRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM favorite_movies WHERE id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_record) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn insert(&self, record: &FavoriteRecord) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO favorite_movies (id, title, release_date, poster_path, rating, synopsis)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                record.title,
                record.release_date,
                record.poster_path,
                record.rating,
                record.synopsis,
            ],
        )?;

        Ok(())
    }

    fn delete(&self, record: &FavoriteRecord) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM favorite_movies WHERE id = ?1", params![record.id])?;
        Ok(())
    }

    fn list_all(&self) -> AppResult<Vec<FavoriteRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM favorite_movies ORDER BY title, id")?;

        let records: Vec<FavoriteRecord> = stmt
            .query_map([], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn count(&self) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM favorite_movies", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
