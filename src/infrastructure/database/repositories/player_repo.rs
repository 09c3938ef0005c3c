use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{NewPlayer, Player, RsvpStatus};
use crate::domain::repositories::{PlayerRepository, RepositoryError};

/// SQLite implementation of PlayerRepository
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_player(row: &sqlx::sqlite::SqliteRow) -> Player {
        use sqlx::Row;

        let status_str: String = row.get("status");

        Player {
            id: row.get("id"),
            name: row.get("name"),
            status: RsvpStatus::from_str(&status_str).unwrap_or(RsvpStatus::Out),
            rsvp_timestamp: row.get("rsvp_timestamp"),
            paid: row.get::<i32, _>("paid") != 0,
            checked_in: row.get::<i32, _>("checked_in") != 0,
        }
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn find_all(&self) -> Result<Vec<Player>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM players ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(rows.iter().map(Self::row_to_player).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM players WHERE name = ? ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.as_ref().map(Self::row_to_player))
    }

    async fn insert(&self, player: NewPlayer) -> Result<Player, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players (name, status, rsvp_timestamp, paid, checked_in)
            VALUES (?, ?, ?, 0, 0)
            "#,
        )
        .bind(&player.name)
        .bind(player.status.as_str())
        .bind(player.rsvp_timestamp)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(player.into_player(result.last_insert_rowid()))
    }

    async fn save(&self, player: &Player) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = ?, status = ?, rsvp_timestamp = ?, paid = ?, checked_in = ?
            WHERE id = ?
            "#,
        )
        .bind(&player.name)
        .bind(player.status.as_str())
        .bind(player.rsvp_timestamp)
        .bind(player.paid as i32)
        .bind(player.checked_in as i32)
        .bind(player.id)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("player {}", player.id)));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM players")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }
}
