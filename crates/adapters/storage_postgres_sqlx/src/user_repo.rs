//! `PostgreSQL` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use userbase_app::ports::UserRepository;
use userbase_domain::error::UserbaseError;
use userbase_domain::id::UserId;
use userbase_domain::user::{NewUser, User, UserChanges};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i32 = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;
        let email: Option<String> = row.try_get("email")?;

        Ok(Self(User {
            id: UserId::from_raw(id),
            name,
            email,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";
const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";
const SELECT_ALL: &str = "SELECT id, name, email FROM users ORDER BY id";
const UPDATE: &str =
    "UPDATE users SET name = $1, email = $2 WHERE id = $3 RETURNING id, name, email";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = $1 RETURNING id, name, email";

/// `PostgreSQL`-backed user repository.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PostgresUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, UserbaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(user.name)
                .bind(user.email)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, UserbaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(changes.name)
                .bind(changes.email)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
