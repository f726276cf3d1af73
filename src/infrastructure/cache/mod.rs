//! View cache: rendered pages keyed by path, with a "mark stale" primitive.
//!
//! Provides a [`ViewCache`] trait with two implementations:
//! - [`MemoryViewCache`] - In-process cache, the default
//! - [`RedisViewCache`] - Shared cache for multi-instance deployments

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryViewCache;
pub use redis_cache::RedisViewCache;
pub use service::{CacheError, CacheResult, ViewCache};

#[cfg(test)]
pub(crate) mod testing;
