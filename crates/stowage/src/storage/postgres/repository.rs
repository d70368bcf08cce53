//! PostgreSQL repository implementation.
//!
//! Implements `UserRepository` from `stowage_core::storage` using sqlx.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use stowage_core::storage::{RepositoryError, Result, UserRepository};
use stowage_core::user::{NewUser, User};

use super::error::map_sqlx_error;
use super::schema;
use crate::config::Config;

/// PostgreSQL-based user repository.
///
/// The pool connects lazily, so an unreachable database only surfaces as
/// errors on individual requests.
pub struct PostgresUserRepository {
    pool: Option<PgPool>,
}

impl PostgresUserRepository {
    /// Creates a new repository over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses `DATABASE_URL` when set, otherwise the libpq `PG*` environment
    /// variables. An unparsable URL leaves the repository unconfigured.
    pub fn from_config(config: &Config) -> Self {
        let options = match &config.database_url {
            Some(url) => match PgConnectOptions::from_str(url) {
                Ok(options) => options,
                Err(e) => {
                    tracing::error!(error = %e, "Invalid DATABASE_URL, /users routes will fail");
                    return Self { pool: None };
                }
            },
            None => PgConnectOptions::new(),
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect_lazy_with(options);

        Self::new(pool)
    }

    fn pool(&self) -> Result<&PgPool> {
        self.pool
            .as_ref()
            .ok_or(RepositoryError::NotConfigured("DATABASE_URL"))
    }

    /// Creates the users table if it does not exist.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(schema::CREATE_USERS_TABLE)
            .execute(self.pool()?)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(schema::SELECT_USERS)
            .fetch_all(self.pool()?)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, name, email)| User { id, name, email })
            .collect())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<User> {
        let (id, name, email) = sqlx::query_as::<_, (i64, String, String)>(schema::INSERT_USER)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(self.pool()?)
            .await
            .map_err(map_sqlx_error)?;

        Ok(User { id, name, email })
    }
}
