//! Redis-backed mapping store.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingStore, StoreError, StoreResult};

const FIELD_LONG_URL: &str = "long_url";
const FIELD_EXPIRY: &str = "expiry";

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
            StoreError::Connection(e.to_string())
        } else {
            StoreError::Operation(e.to_string())
        }
    }
}

/// Redis store keeping one hash per suffix at `<table>:<suffix>`.
///
/// Every write also sets `EXPIREAT` to the record's expiry, so Redis evicts
/// mappings on its own once they stop being refreshed.
pub struct RedisStore {
    conn: ConnectionManager,
    namespace: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `table` - Key namespace, taken from `MAPPING_TABLE`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, table: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis (namespace '{}')", table);

        Ok(Self {
            conn: manager,
            namespace: table.to_string(),
        })
    }

    fn build_key(&self, suffix: &str) -> String {
        record_key(&self.namespace, suffix)
    }
}

fn record_key(namespace: &str, suffix: &str) -> String {
    format!("{}:{}", namespace, suffix)
}

/// Decodes the fields returned by `HGETALL`.
///
/// A hash without `long_url` is the leftover of an expiry refresh that raced
/// with eviction and is reported as absent.
fn decode_record(
    suffix: &str,
    mut fields: HashMap<String, String>,
) -> StoreResult<Option<Mapping>> {
    let Some(long_url) = fields.remove(FIELD_LONG_URL) else {
        return Ok(None);
    };

    let raw_expiry = fields
        .remove(FIELD_EXPIRY)
        .ok_or_else(|| StoreError::Malformed {
            suffix: suffix.to_string(),
            reason: "missing expiry".to_string(),
        })?;

    let expiry = raw_expiry.parse().map_err(|_| StoreError::Malformed {
        suffix: suffix.to_string(),
        reason: format!("expiry '{}' is not an integer", raw_expiry),
    })?;

    Ok(Some(Mapping {
        suffix: suffix.to_string(),
        long_url,
        expiry,
    }))
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn get(&self, suffix: &str) -> StoreResult<Option<Mapping>> {
        let key = self.build_key(suffix);
        let mut conn = self.conn.clone();

        let fields: HashMap<String, String> = conn.hgetall(&key).await?;
        let mapping = decode_record(suffix, fields)?;

        debug!(
            "Redis HGETALL {}: {}",
            key,
            if mapping.is_some() { "hit" } else { "miss" }
        );

        Ok(mapping)
    }

    async fn put(&self, mapping: Mapping) -> StoreResult<()> {
        let key = self.build_key(&mapping.suffix);
        let mut conn = self.conn.clone();

        redis::pipe()
            .atomic()
            .hset(&key, FIELD_LONG_URL, &mapping.long_url)
            .ignore()
            .hset(&key, FIELD_EXPIRY, mapping.expiry)
            .ignore()
            .expire_at(&key, mapping.expiry)
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;

        debug!("Redis PUT {} (expires at {})", key, mapping.expiry);
        Ok(())
    }

    async fn update_expiry(&self, suffix: &str, expiry: i64) -> StoreResult<()> {
        let key = self.build_key(suffix);
        let mut conn = self.conn.clone();

        redis::pipe()
            .atomic()
            .hset(&key, FIELD_EXPIRY, expiry)
            .ignore()
            .expire_at(&key, expiry)
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;

        debug!("Redis refresh {} (expires at {})", key, expiry);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
