use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::types::Json;
use tracing::info;

use crate::dto::{
    format_dto::{MatchFormat, UnknownFormat},
    match_dto::{Match, MatchRow},
};

/// Failures of the saved-match store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The database rejected or failed the statement.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored timestamp is not valid RFC 3339.
    #[error("bad timestamp in match {id}: {source}")]
    Timestamp {
        id: String,
        source: chrono::ParseError,
    },

    /// A stored format is not one of the known formats.
    #[error("bad format in match {id}: {source}")]
    Format { id: String, source: UnknownFormat },
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS matches (
            id TEXT PRIMARY KEY NOT NULL,
            format TEXT NOT NULL,
            created_at TEXT NOT NULL,
            team_a TEXT NOT NULL,
            team_b TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

impl TryFrom<MatchRow> for Match {
    type Error = StoreError;

    fn try_from(row: MatchRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|source| StoreError::Timestamp {
                id: row.id.clone(),
                source,
            })?
            .with_timezone(&Utc);

        let format = row
            .format
            .parse::<MatchFormat>()
            .map_err(|source| StoreError::Format {
                id: row.id.clone(),
                source,
            })?;

        Ok(Match {
            id: row.id,
            format,
            created_at,
            team_a: row.team_a.0,
            team_b: row.team_b.0,
        })
    }
}

/// Stores the match in one statement. Saving an id twice keeps the first copy.
/// Returns whether a new row was written.
pub async fn save_match(pool: &SqlitePool, saved: &Match) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO matches (id, format, created_at, team_a, team_b)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
        "#,
    )
    .bind(&saved.id)
    .bind(saved.format.as_str())
    .bind(saved.created_at.to_rfc3339())
    .bind(Json(&saved.team_a))
    .bind(Json(&saved.team_b))
    .execute(pool)
    .await?;

    let inserted = result.rows_affected() > 0;
    if inserted {
        info!("Saved match {}.", saved.id);
    } else {
        info!("Match {} was already saved.", saved.id);
    }
    Ok(inserted)
}

/// Saved matches in the order they were saved.
pub async fn list_matches(pool: &SqlitePool) -> Result<Vec<Match>> {
    let rows = sqlx::query_as::<_, MatchRow>(
        "SELECT id, format, created_at, team_a, team_b FROM matches ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Match::try_from).collect()
}

pub async fn get_match(pool: &SqlitePool, id: &str) -> Result<Option<Match>> {
    let row = sqlx::query_as::<_, MatchRow>(
        "SELECT id, format, created_at, team_a, team_b FROM matches WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Match::try_from).transpose()
}

/// Returns false when no match had that id.
pub async fn delete_match(pool: &SqlitePool, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM matches WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
