use crate::{DbError, Result as DbErrorResult};

use tg_core::{LookupError, Result as LookupResult, User, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::error;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
pub(crate) struct UserRow {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) email: String,
    pub(crate) created_at: i64,
    pub(crate) last_login: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            created_at: timestamp("users.created_at", r.created_at)?,
            last_login: timestamp("users.last_login", r.last_login)?,
            username: r.username,
            password: r.password,
            email: r.email,
        })
    }
}

#[track_caller]
pub(crate) fn timestamp(column: &str, secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (username, password, email, created_at, last_login)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.email)
        .bind(user.created_at.timestamp())
        .bind(user.last_login.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT username, password, email, created_at, last_login
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    type User = User;

    async fn find_by_username(&self, username: &str) -> LookupResult<User> {
        match UserRepository::find_by_username(self, username).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(LookupError::not_found(username)),
            Err(DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            }) => Err(LookupError::not_found(username)),
            Err(e) => {
                error!("User lookup failed: {}", e);
                Err(LookupError::storage(e.to_string()))
            }
        }
    }
}
