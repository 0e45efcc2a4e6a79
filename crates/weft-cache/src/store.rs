//! The cache store contract.

use crate::statistics::CacheStatistics;

/// Storage backend for rendered fragments.
///
/// Implementations only provide raw `get`/`set`; the fetch-or-compute
/// protocol lives in [`CacheStore::fetch`] so every store shares the same
/// hit/miss semantics.
pub trait CacheStore: Send + Sync {
	/// Returns the stored fragment for `key`, if any.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores `value` under `key`.
	fn set(&self, key: &str, value: String);

	/// Returns a snapshot of the store's statistics.
	fn statistics(&self) -> CacheStatistics {
		CacheStatistics::default()
	}

	/// Returns the fragment stored under `key`, computing and storing it on a miss.
	///
	/// On a hit `compute` is not invoked. On a miss it runs exactly once and
	/// its result is stored before being returned. A failed computation
	/// stores nothing.
	fn fetch<E, F>(&self, key: &str, compute: F) -> Result<String, E>
	where
		F: FnOnce() -> Result<String, E>,
		Self: Sized,
	{
		fetch_from(self, key, compute)
	}
}

impl dyn CacheStore + '_ {
	/// Object-safe counterpart of [`CacheStore::fetch`].
	pub fn fetch_dyn<E, F>(&self, key: &str, compute: F) -> Result<String, E>
	where
		F: FnOnce() -> Result<String, E>,
	{
		fetch_from(self, key, compute)
	}
}

fn fetch_from<S, E, F>(store: &S, key: &str, compute: F) -> Result<String, E>
where
	S: CacheStore + ?Sized,
	F: FnOnce() -> Result<String, E>,
{
	if let Some(hit) = store.get(key) {
		tracing::debug!(key, "fragment cache hit");
		return Ok(hit);
	}

	tracing::debug!(key, "fragment cache miss");
	let value = compute()?;
	store.set(key, value.clone());
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{InMemoryCache, NullCache};
	use rstest::rstest;
	use std::cell::Cell;
	use std::sync::Arc;

	#[rstest]
	fn test_fetch_computes_once_on_miss() {
		let store = InMemoryCache::new();
		let calls = Cell::new(0);

		for _ in 0..3 {
			let value: Result<String, ()> = store.fetch("k", || {
				calls.set(calls.get() + 1);
				Ok("v".to_string())
			});
			assert_eq!(value.unwrap(), "v");
		}

		assert_eq!(calls.get(), 1);
	}

	#[rstest]
	fn test_fetch_failure_stores_nothing() {
		let store = InMemoryCache::new();

		let failed: Result<String, &str> = store.fetch("k", || Err("boom"));
		assert_eq!(failed, Err("boom"));
		assert_eq!(store.get("k"), None);

		let recovered: Result<String, &str> = store.fetch("k", || Ok("ok".to_string()));
		assert_eq!(recovered.unwrap(), "ok");
	}

	#[rstest]
	fn test_fetch_dyn_through_trait_object() {
		let store: Arc<dyn CacheStore> = Arc::new(InMemoryCache::new());

		let first: Result<String, ()> = store.fetch_dyn("k", || Ok("first".to_string()));
		let second: Result<String, ()> = store.fetch_dyn("k", || Ok("second".to_string()));

		assert_eq!(first.unwrap(), "first");
		assert_eq!(second.unwrap(), "first");
	}

	#[rstest]
	fn test_null_store_always_recomputes() {
		let store: Arc<dyn CacheStore> = Arc::new(NullCache);
		let calls = Cell::new(0);

		for expected in ["a", "b"] {
			let value: Result<String, ()> = store.fetch_dyn("k", || {
				calls.set(calls.get() + 1);
				Ok(expected.to_string())
			});
			assert_eq!(value.unwrap(), expected);
		}

		assert_eq!(calls.get(), 2);
	}
}
