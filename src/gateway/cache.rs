use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Decoded payload plus the instant it was captured.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: Value,
    pub timestamp: Instant,
}

impl CacheEntry {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            timestamp: Instant::now(),
        }
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.timestamp.elapsed() < ttl
    }
}

/// Request key → cached response. Expiry is lazy: stale entries are only
/// dropped when a lookup finds them.
#[derive(Debug)]
pub struct CacheStore {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the payload if fresh; evicts it if stale.
    pub fn lookup(&mut self, key: &str) -> Option<Value> {
        let fresh = self.entries.get(key)?.is_fresh(self.ttl);
        if fresh {
            return self.entries.get(key).map(|entry| entry.payload.clone());
        }

        log::debug!("🗑️  Cache entry expired for {}", key);
        self.entries.remove(key);
        None
    }

    /// Replaces whatever entry `key` had.
    pub fn store(&mut self, key: String, payload: Value) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        self.entries.remove(key)
    }

    /// Removes every entry whose key starts with `prefix`. Returns how many.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
