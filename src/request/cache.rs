//! In-memory response cache with per-entry expiry.
//!
//! Entries are removed lazily, on the first lookup after they expire. There is
//! no size bound and no background sweep.

use log::debug;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Maps a request fingerprint to the raw response body.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn put(&self, key: impl Into<String>, payload: Vec<u8>, ttl: Duration) {
        let now = Instant::now();
        let entry = CacheEntry {
            payload,
            expires_at: now.checked_add(ttl).unwrap_or(now),
        };
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.into(), entry);
    }

    /// Returns the payload stored under `key` if it has not expired.
    /// An expired entry is evicted.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(Instant::now()) => {
                    return Some(entry.payload.clone())
                }
                Some(_) => {}
            }
        }

        // Another writer may have refreshed the entry between the two locks.
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match entries.get(key) {
            Some(entry) if entry.is_expired(Instant::now()) => {
                entries.remove(key);
                debug!("Evicted expired cache entry {}", key);
                None
            }
            Some(entry) => Some(entry.payload.clone()),
            None => None,
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
