//! Cache double that records invalidations.

use std::sync::Mutex;

use async_trait::async_trait;

use super::ViewCache;

/// Records every path passed to [`ViewCache::mark_stale`] and never caches.
#[derive(Default)]
pub(crate) struct RecordingViewCache {
    stale: Mutex<Vec<String>>,
}

impl RecordingViewCache {
    pub(crate) fn stale_paths(&self) -> Vec<String> {
        self.stale.lock().unwrap().clone()
    }
}

#[async_trait]
impl ViewCache for RecordingViewCache {
    async fn get_page(&self, _path: &str) -> Option<String> {
        None
    }

    async fn put_page(&self, _path: &str, _html: &str) {}

    async fn mark_stale(&self, path: &str) {
        self.stale.lock().unwrap().push(path.to_string());
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "recording"
    }
}
