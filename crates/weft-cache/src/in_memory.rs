//! In-memory fragment store

use crate::statistics::CacheStatistics;
use crate::store::CacheStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory fragment store.
///
/// Entries live as long as the store itself; there is no eviction policy.
#[derive(Debug, Default)]
pub struct InMemoryCache {
	store: RwLock<HashMap<String, String>>,
	hits: AtomicU64,
	misses: AtomicU64,
}

impl InMemoryCache {
	/// Create a new, empty store
	///
	/// # Examples
	///
	/// ```
	/// use weft_cache::InMemoryCache;
	///
	/// let cache = InMemoryCache::new();
	/// assert!(cache.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored fragments.
	pub fn len(&self) -> usize {
		self.store.read().len()
	}

	/// Returns `true` when nothing has been stored yet.
	pub fn is_empty(&self) -> bool {
		self.store.read().is_empty()
	}

	/// Returns `true` if a fragment is stored under `key`.
	///
	/// Does not count towards hit/miss statistics.
	pub fn contains_key(&self, key: &str) -> bool {
		self.store.read().contains_key(key)
	}

	/// List all stored keys.
	pub fn keys(&self) -> Vec<String> {
		self.store.read().keys().cloned().collect()
	}

	/// Drop every stored fragment and reset statistics.
	pub fn clear(&self) {
		self.store.write().clear();
		self.hits.store(0, Ordering::Relaxed);
		self.misses.store(0, Ordering::Relaxed);
	}
}

impl CacheStore for InMemoryCache {
	fn get(&self, key: &str) -> Option<String> {
		let value = self.store.read().get(key).cloned();
		if value.is_some() {
			self.hits.fetch_add(1, Ordering::Relaxed);
		} else {
			self.misses.fetch_add(1, Ordering::Relaxed);
		}
		value
	}

	fn set(&self, key: &str, value: String) {
		self.store.write().insert(key.to_string(), value);
	}

	fn statistics(&self) -> CacheStatistics {
		let hits = self.hits.load(Ordering::Relaxed);
		let misses = self.misses.load(Ordering::Relaxed);
		CacheStatistics {
			hits,
			misses,
			total_requests: hits + misses,
			entry_count: self.len() as u64,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn cache() -> InMemoryCache {
		InMemoryCache::new()
	}

	#[rstest]
	fn test_get_missing_key(cache: InMemoryCache) {
		assert_eq!(cache.get("missing"), None);
		assert_eq!(cache.statistics().misses, 1);
	}

	#[rstest]
	fn test_set_then_get(cache: InMemoryCache) {
		cache.set("k", "<p>v</p>".to_string());

		assert_eq!(cache.get("k").as_deref(), Some("<p>v</p>"));
		assert!(cache.contains_key("k"));
		assert_eq!(cache.len(), 1);
	}

	#[rstest]
	fn test_set_overwrites(cache: InMemoryCache) {
		cache.set("k", "a".to_string());
		cache.set("k", "b".to_string());

		assert_eq!(cache.get("k").as_deref(), Some("b"));
		assert_eq!(cache.len(), 1);
	}

	#[rstest]
	fn test_statistics_track_fetches(cache: InMemoryCache) {
		let _: Result<String, ()> = cache.fetch("a", || Ok("1".to_string()));
		let _: Result<String, ()> = cache.fetch("a", || Ok("2".to_string()));
		let _: Result<String, ()> = cache.fetch("b", || Ok("3".to_string()));

		let stats = cache.statistics();
		assert_eq!(stats.hits, 1);
		assert_eq!(stats.misses, 2);
		assert_eq!(stats.total_requests, 3);
		assert_eq!(stats.entry_count, 2);
	}

	#[rstest]
	fn test_clear_resets_everything(cache: InMemoryCache) {
		cache.set("k", "v".to_string());
		let _ = cache.get("k");

		cache.clear();

		assert!(cache.is_empty());
		assert_eq!(cache.statistics(), CacheStatistics::default());
	}
}
