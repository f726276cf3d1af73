//! View cache trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while setting up a cache backend.
///
/// Runtime operations never return errors; they fail open.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache setup.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache of rendered pages keyed by logical view path.
///
/// A path marked stale is re-rendered from the store on its next read.
/// Implementations must be thread-safe and must not disrupt requests when
/// the backend misbehaves: errors are logged and treated as misses.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryViewCache`] - In-process cache
/// - [`crate::infrastructure::cache::RedisViewCache`] - Shared across server instances
#[async_trait]
pub trait ViewCache: Send + Sync {
    /// Returns the cached render of `path`, or `None` on miss, expiry or staleness.
    async fn get_page(&self, path: &str) -> Option<String>;

    /// Stores the render of `path`.
    async fn put_page(&self, path: &str, html: &str);

    /// Marks `path` stale so the next read re-renders it.
    ///
    /// Idempotent; marking an already-stale path has no further effect.
    async fn mark_stale(&self, path: &str);

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reports.
    fn backend(&self) -> &'static str;
}
