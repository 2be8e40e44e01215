use crate::domain::Sample;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// SHA-256 of a schema's canonical JSON text.
pub type CacheKey = [u8; 32];

/// Memo table for synthesized samples, keyed by schema structure.
///
/// Entries are never evicted; the cache lives as long as the
/// [`SampleGenerator`](crate::adapters::synthesizer::SampleGenerator) that
/// owns it.
#[derive(Default)]
pub struct SampleCache {
    entries: RwLock<HashMap<CacheKey, Arc<Sample>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` if the schema cannot be serialized, in which case it is not cached.
    pub fn key_for(schema: &Map<String, Value>) -> Option<CacheKey> {
        let bytes = serde_json::to_vec(schema).ok()?;
        Some(Sha256::digest(&bytes).into())
    }

    pub fn get(&self, schema: &Map<String, Value>) -> Option<Arc<Sample>> {
        let key = Self::key_for(schema)?;
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&key).cloned()
    }

    /// Returns the cached sample for `schema`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&self, schema: &Map<String, Value>, compute: F) -> Arc<Sample>
    where
        F: FnOnce() -> Sample,
    {
        let Some(key) = Self::key_for(schema) else {
            return Arc::new(compute());
        };

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(sample) = entries.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return sample.clone();
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let sample = Arc::new(compute());

        // A concurrent miss on the same key may have inserted first; keep theirs.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.entry(key).or_insert(sample).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
