//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::is_valid_table_name;
use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingStore, StoreError, StoreResult};

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Connection(e.to_string()),
            other => StoreError::Operation(other.to_string()),
        }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    suffix: String,
    long_url: String,
    expiry: i64,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping {
            suffix: row.suffix,
            long_url: row.long_url,
            expiry: row.expiry,
        }
    }
}

/// SQL text for one table. The table name is the only interpolated part and
/// is validated as a plain identifier before use.
#[derive(Debug, Clone)]
struct Statements {
    create_table: String,
    select: String,
    upsert: String,
    update_expiry: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            create_table: format!(
                r#"
                CREATE TABLE IF NOT EXISTS "{table}" (
                    suffix   TEXT PRIMARY KEY,
                    long_url TEXT NOT NULL,
                    expiry   BIGINT NOT NULL
                )
                "#
            ),
            select: format!(r#"SELECT suffix, long_url, expiry FROM "{table}" WHERE suffix = $1"#),
            upsert: format!(
                r#"
                INSERT INTO "{table}" (suffix, long_url, expiry)
                VALUES ($1, $2, $3)
                ON CONFLICT (suffix) DO UPDATE
                SET long_url = EXCLUDED.long_url, expiry = EXCLUDED.expiry
                "#
            ),
            update_expiry: format!(r#"UPDATE "{table}" SET expiry = $2 WHERE suffix = $1"#),
        }
    }
}

/// PostgreSQL store keeping one row per suffix.
///
/// Expired rows are not deleted; the resolver ignores them and the next
/// create with the same suffix overwrites them.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
    table: String,
    statements: Statements,
}

impl PgMappingStore {
    /// Creates a store over `table`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Operation`] if `table` is not a plain identifier.
    pub fn new(pool: Arc<PgPool>, table: &str) -> StoreResult<Self> {
        if !is_valid_table_name(table) {
            return Err(StoreError::Operation(format!(
                "Invalid table name '{}'",
                table
            )));
        }

        Ok(Self {
            pool,
            table: table.to_string(),
            statements: Statements::for_table(table),
        })
    }

    /// Creates the mapping table if it does not exist.
    pub async fn ensure_table(&self) -> StoreResult<()> {
        sqlx::query(&self.statements.create_table)
            .execute(self.pool.as_ref())
            .await?;

        tracing::info!("Mapping table '{}' ready", self.table);
        Ok(())
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn get(&self, suffix: &str) -> StoreResult<Option<Mapping>> {
        let row = sqlx::query_as::<_, MappingRow>(&self.statements.select)
            .bind(suffix)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Mapping::from))
    }

    async fn put(&self, mapping: Mapping) -> StoreResult<()> {
        sqlx::query(&self.statements.upsert)
            .bind(&mapping.suffix)
            .bind(&mapping.long_url)
            .bind(mapping.expiry)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn update_expiry(&self, suffix: &str, expiry: i64) -> StoreResult<()> {
        sqlx::query(&self.statements.update_expiry)
            .bind(suffix)
            .bind(expiry)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
