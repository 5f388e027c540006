//! SQLite-backed user repository.
//!
//! Insertion order is the table's rowid order, which is what `list_all`
//! returns. Updates merge in SQL (`COALESCE` keeps absent fields) and hand
//! back the persisted row via `RETURNING`.

use crate::{DbError, Result as DbErrorResult, UserStore};

use cm_core::{User, UserFields};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    name: Option<String>,
    email: Option<String>,
    number: Option<String>,
}

impl UserRow {
    #[track_caller]
    fn into_user(self) -> DbErrorResult<User> {
        let id = Uuid::parse_str(&self.id).map_err(|e| DbError::InvalidData {
            message: format!("Invalid UUID in users.id '{}': {}", self.id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(User {
            id,
            name: self.name,
            email: self.email,
            number: self.number,
        })
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, fields: UserFields) -> DbErrorResult<User> {
        let user = User::new(fields);

        sqlx::query("INSERT INTO users (id, name, email, number) VALUES (?, ?, ?, ?)")
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.number)
            .execute(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list_all(&self) -> DbErrorResult<Vec<User>> {
        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT id, name, email, number FROM users ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(UserRow::into_user)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, name, email, number FROM users WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update_by_id(&self, id: Uuid, fields: UserFields) -> DbErrorResult<Option<User>> {
        // Must stay one statement: read-then-write hits SQLITE_BUSY_SNAPSHOT under WAL
        let row: Option<UserRow> = sqlx::query_as(
            "UPDATE users SET \
                 name = COALESCE(?, name), \
                 email = COALESCE(?, email), \
                 number = COALESCE(?, number) \
             WHERE id = ? \
             RETURNING id, name, email, number",
        )
        .bind(fields.name)
        .bind(fields.email)
        .bind(fields.number)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
