//! PostgreSQL implementation of AccessChecker.
//!
//! Reads `profiles.is_admin`; a missing profile is not an administrator.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{db_error, parse_user_id_as_uuid};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AccessChecker;

pub struct PostgresAccessChecker {
    pool: PgPool,
}

impl PostgresAccessChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessChecker for PostgresAccessChecker {
    async fn is_admin(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let row: Option<(bool,)> = sqlx::query_as("SELECT is_admin FROM profiles WHERE id = $1")
            .bind(parse_user_id_as_uuid(user_id)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check admin flag", e))?;

        Ok(row.map(|(is_admin,)| is_admin).unwrap_or(false))
    }
}
