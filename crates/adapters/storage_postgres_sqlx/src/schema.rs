//! Schema bootstrap for the `users` table.

use sqlx::PgPool;

use crate::error::StorageError;

const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT,
        email TEXT
    )
";

/// Create the `users` table if it does not exist yet.
///
/// Safe to call on every start: an existing table and its rows are left
/// untouched.
///
/// # Errors
///
/// Returns [`StorageError`] if the statement fails.
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    tracing::info!("users table ready");
    Ok(())
}
