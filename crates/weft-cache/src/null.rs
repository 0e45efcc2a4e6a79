//! Pass-through store

use crate::store::CacheStore;

/// A store that never memoizes.
///
/// Every lookup misses, so the renderer recomputes cached fragments on
/// every pass. Useful in development or to disable fragment caching
/// without touching templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl CacheStore for NullCache {
	fn get(&self, _key: &str) -> Option<String> {
		None
	}

	fn set(&self, _key: &str, _value: String) {}
}
