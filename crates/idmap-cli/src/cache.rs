//! Run-scoped resolution cache
//!
//! Every outcome (including skips, misses and failures) is remembered for the
//! lifetime of one batch so repeated identifiers cost a single request. The
//! cache is never evicted or written to disk.

use idmap_common::Resolution;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Shared identifier -> outcome map.
///
/// Cloning is cheap and every clone sees the same entries. Two workers racing
/// on the same identifier may both miss and both insert; the later write wins.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: Arc<RwLock<HashMap<String, Resolution>>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached outcome for an identifier
    pub fn get(&self, identifier: &str) -> Option<Resolution> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let hit = entries.get(identifier).cloned();
        trace!(identifier, hit = hit.is_some(), "Cache lookup");
        hit
    }

    /// Remember an outcome
    pub fn insert(&self, identifier: impl Into<String>, resolution: Resolution) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(identifier.into(), resolution);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use idmap_common::Record;

    #[test]
    fn test_insert_and_get() {
        let cache = ResolutionCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("TP53").is_none());

        cache.insert("TP53", Resolution::Resolved(Record::new("P04637")));
        cache.insert("http://x", Resolution::Skipped);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("http://x"), Some(Resolution::Skipped));
        assert_eq!(
            cache.get("TP53").and_then(|r| r.record().map(|rec| rec.accession.clone())),
            Some("P04637".to_string())
        );
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = ResolutionCache::new();
        let other = cache.clone();
        other.insert("NOPE", Resolution::NotFound);
        assert_eq!(cache.get("NOPE"), Some(Resolution::NotFound));
    }

    #[test]
    fn test_concurrent_population() {
        let cache = ResolutionCache::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    cache.insert(format!("G{}", i % 4), Resolution::NotFound);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 4);
    }
}
