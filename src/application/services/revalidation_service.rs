//! Marks cached views stale after successful mutations.

use std::sync::Arc;

use tracing::debug;

use crate::domain::views::EntityKind;
use crate::infrastructure::cache::ViewCache;

/// Broadcasts "this view is stale" to the view cache.
///
/// Invalidation is infallible at this layer: cache backends fail open and
/// log their own errors.
#[derive(Clone)]
pub struct RevalidationService {
    cache: Arc<dyn ViewCache>,
}

impl RevalidationService {
    pub fn new(cache: Arc<dyn ViewCache>) -> Self {
        Self { cache }
    }

    /// Marks every path in `paths` stale. Paths are independent cache keys.
    pub async fn invalidate(&self, paths: &[&str]) {
        for path in paths {
            self.cache.mark_stale(path).await;
        }
    }

    /// Marks the fixed path set of `kind` stale.
    pub async fn revalidate(&self, kind: EntityKind) {
        let paths = kind.stale_paths();
        debug!(entity = kind.as_str(), ?paths, "Revalidating views");
        self.invalidate(paths).await;
    }
}
