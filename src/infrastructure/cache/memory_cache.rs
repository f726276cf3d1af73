//! In-process view cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::service::ViewCache;

struct CachedPage {
    html: String,
    stored_at: Instant,
}

/// View cache held in process memory.
///
/// Invalidation is purely in-process: marking a path stale removes its entry
/// without any I/O. Entries also expire after the configured TTL.
pub struct MemoryViewCache {
    pages: RwLock<HashMap<String, CachedPage>>,
    ttl: Duration,
}

impl MemoryViewCache {
    /// Creates an empty cache whose entries live at most `ttl`.
    pub fn new(ttl: Duration) -> Self {
        debug!(ttl_secs = ttl.as_secs(), "Using in-process view cache");
        Self {
            pages: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of paths currently holding a render, expired or not.
    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }
}

#[async_trait]
impl ViewCache for MemoryViewCache {
    async fn get_page(&self, path: &str) -> Option<String> {
        let pages = self.pages.read().await;
        match pages.get(path) {
            Some(page) if page.stored_at.elapsed() < self.ttl => {
                debug!(path, "View cache HIT");
                metrics::counter!("view_cache_lookups_total", "result" => "hit").increment(1);
                Some(page.html.clone())
            }
            _ => {
                debug!(path, "View cache MISS");
                metrics::counter!("view_cache_lookups_total", "result" => "miss").increment(1);
                None
            }
        }
    }

    async fn put_page(&self, path: &str, html: &str) {
        self.pages.write().await.insert(
            path.to_string(),
            CachedPage {
                html: html.to_string(),
                stored_at: Instant::now(),
            },
        );
    }

    async fn mark_stale(&self, path: &str) {
        if self.pages.write().await.remove(path).is_some() {
            debug!(path, "View cache INVALIDATE");
        }
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
