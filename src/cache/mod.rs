use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

/// Bookkeeping for page-cache invalidation. Successful mutations mark the
/// paths that display the affected entity as stale; whoever serves those
/// pages re-fetches and then clears the mark. This is a marker store, not a
/// cache of page bodies.
#[derive(Default)]
pub struct PageCache {
    stale: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a single path stale.
    pub async fn invalidate(&self, path: &str) {
        debug!(path, "page cache invalidated");
        self.stale.write().await.insert(path.to_string(), Utc::now());
    }

    /// Mark every path in the set stale.
    pub async fn invalidate_all(&self, paths: &[&str]) {
        for path in paths {
            self.invalidate(path).await;
        }
    }

    pub async fn is_stale(&self, path: &str) -> bool {
        self.stale.read().await.contains_key(path)
    }

    /// Clear a mark after the page has been re-rendered.
    pub async fn revalidated(&self, path: &str) -> Option<DateTime<Utc>> {
        self.stale.write().await.remove(path)
    }

    pub async fn stale_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.stale.read().await.keys().cloned().collect();
        paths.sort();
        paths
    }
}
