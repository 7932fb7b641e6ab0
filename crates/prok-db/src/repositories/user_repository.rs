//! User repository: identity records keyed by username/email uniqueness.

use crate::{DbError, Result as DbErrorResult};

use prok_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, username, email, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(unique_or_sqlx)?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, email, password_hash, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    /// Single disjunctive lookup: the identifier is matched exactly
    /// against either username or email, case-sensitive as stored.
    pub async fn find_by_identifier(&self, identifier: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, email, password_hash, created_at
                FROM users
                WHERE username = ? OR email = ?
            "#,
        )
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    pub async fn username_or_email_taken(
        &self,
        username: &str,
        email: &str,
    ) -> DbErrorResult<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE username = ? OR email = ? LIMIT 1")
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}

/// Surface constraint races (check-then-insert) as a distinct error so the
/// API layer can answer with a conflict instead of a 500.
#[track_caller]
fn unique_or_sqlx(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db) = &e {
        if db.kind() == sqlx::error::ErrorKind::UniqueViolation {
            return DbError::UniqueViolation {
                message: db.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }
    }

    DbError::from(e)
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Corrupt {
            message: format!("Invalid UUID in users.id: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Corrupt {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
