//! Redis-backed view cache shared by several server instances.

use super::service::{CacheError, CacheResult, ViewCache};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// View cache stored in Redis so every instance sees the same stale marks.
///
/// Uses `ConnectionManager` for connection reuse. All operations are
/// fail-open: errors are logged and reads degrade to a miss.
pub struct RedisViewCache {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisViewCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - Lifetime of a cached render (`VIEW_CACHE_TTL_SECONDS`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis view cache");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut probe = manager.clone();
        probe
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis view cache");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "view:".to_string(),
        })
    }

    fn build_key(&self, path: &str) -> String {
        format!("{}{}", self.key_prefix, path)
    }
}

#[async_trait]
impl ViewCache for RedisViewCache {
    async fn get_page(&self, path: &str) -> Option<String> {
        let key = self.build_key(path);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(html)) => {
                debug!(path, "View cache HIT");
                metrics::counter!("view_cache_lookups_total", "result" => "hit").increment(1);
                Some(html)
            }
            Ok(None) => {
                debug!(path, "View cache MISS");
                metrics::counter!("view_cache_lookups_total", "result" => "miss").increment(1);
                None
            }
            Err(e) => {
                warn!(path, error = %e, "Redis GET failed");
                None
            }
        }
    }

    async fn put_page(&self, path: &str, html: &str) {
        let key = self.build_key(path);
        let mut conn = self.client.clone();

        if let Err(e) = conn.set_ex::<_, _, ()>(&key, html, self.ttl_seconds).await {
            warn!(path, error = %e, "Redis SET failed");
        }
    }

    async fn mark_stale(&self, path: &str) {
        let key = self.build_key(path);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) if deleted > 0 => debug!(path, "View cache INVALIDATE"),
            Ok(_) => {}
            Err(e) => warn!(path, error = %e, "Redis DEL failed"),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
