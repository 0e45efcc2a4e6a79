//! Fragment cache stores for weft.
//!
//! A fragment cache memoizes the rendered text of a subtree under a key.
//! Renderers consult a [`CacheStore`] only when they reach a cached block;
//! everything else is rendered fresh on every pass.
//!
//! ## Stores
//!
//! - [`NullCache`]: never memoizes, every fetch is a miss
//! - [`InMemoryCache`]: keeps every entry for the lifetime of the store, no eviction
//!
//! ## Example
//!
//! ```
//! use weft_cache::{CacheStore, InMemoryCache};
//!
//! let store = InMemoryCache::new();
//! let first: Result<String, ()> = store.fetch("greeting", || Ok("hello".to_string()));
//! let second: Result<String, ()> = store.fetch("greeting", || Ok("changed".to_string()));
//!
//! assert_eq!(first.unwrap(), "hello");
//! assert_eq!(second.unwrap(), "hello");
//! ```

mod in_memory;
mod key;
mod null;
mod statistics;
mod store;

pub use in_memory::InMemoryCache;
pub use key::CacheKey;
pub use null::NullCache;
pub use statistics::CacheStatistics;
pub use store::CacheStore;
