//! Cache key derivation.

use std::borrow::Cow;

/// Values usable as fragment cache keys.
///
/// Plain values (strings, integers) are their own key. Domain types expose
/// their own key by implementing this trait, typically combining an
/// identifier with a version or timestamp so that changes invalidate the
/// fragment naturally.
///
/// # Example
///
/// ```
/// use weft_cache::CacheKey;
///
/// struct Article {
///     id: u64,
///     revision: u32,
/// }
///
/// impl CacheKey for Article {
///     fn cache_key(&self) -> String {
///         format!("article/{}-{}", self.id, self.revision)
///     }
/// }
///
/// let article = Article { id: 7, revision: 3 };
/// assert_eq!(article.cache_key(), "article/7-3");
/// assert_eq!("sidebar".cache_key(), "sidebar");
/// ```
pub trait CacheKey {
	/// Returns the key the fragment is stored under.
	fn cache_key(&self) -> String;
}

impl CacheKey for str {
	fn cache_key(&self) -> String {
		self.to_string()
	}
}

impl CacheKey for String {
	fn cache_key(&self) -> String {
		self.clone()
	}
}

impl CacheKey for Cow<'_, str> {
	fn cache_key(&self) -> String {
		self.to_string()
	}
}

impl<T: CacheKey + ?Sized> CacheKey for &T {
	fn cache_key(&self) -> String {
		(**self).cache_key()
	}
}

macro_rules! impl_cache_key_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl CacheKey for $ty {
				fn cache_key(&self) -> String {
					self.to_string()
				}
			}
		)*
	};
}

impl_cache_key_display!(char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<A: CacheKey, B: CacheKey> CacheKey for (A, B) {
	fn cache_key(&self) -> String {
		format!("{}/{}", self.0.cache_key(), self.1.cache_key())
	}
}

impl<T: CacheKey> CacheKey for [T] {
	fn cache_key(&self) -> String {
		self.iter()
			.map(CacheKey::cache_key)
			.collect::<Vec<_>>()
			.join("/")
	}
}

impl<T: CacheKey> CacheKey for Vec<T> {
	fn cache_key(&self) -> String {
		self.as_slice().cache_key()
	}
}
