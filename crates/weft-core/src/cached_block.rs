//! Fragment-cached subtrees.

use crate::builder::{Builder, TagSet, Trailing};
use crate::error::Result;
use crate::registry::Registry;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::rc::Rc;
use weft_cache::CacheKey;

type Block = Box<dyn Fn(&mut Builder) -> Result<Trailing>>;

/// A subtree whose rendered text is looked up in the cache store.
///
/// The key is derived once, at construction, through [`CacheKey`]. The
/// child tree is built from the block at most once per node, whether or not
/// the store already holds the rendered text. Clones share that state.
#[derive(Clone)]
pub struct CachedBlock(Rc<CachedBlockState>);

struct CachedBlockState {
	key: String,
	block: Block,
	registry: Registry,
	children: OnceCell<TagSet>,
}

impl CachedBlock {
	/// Creates a cached block resolving components against the process-wide
	/// registry.
	pub fn new<K, F, R>(key: &K, block: F) -> Self
	where
		K: CacheKey + ?Sized,
		F: Fn(&mut Builder) -> Result<R> + 'static,
		R: Into<Trailing>,
	{
		Self::new_in(Registry::global(), key, block)
	}

	/// Creates a cached block resolving components against `registry`.
	pub fn new_in<K, F, R>(registry: &Registry, key: &K, block: F) -> Self
	where
		K: CacheKey + ?Sized,
		F: Fn(&mut Builder) -> Result<R> + 'static,
		R: Into<Trailing>,
	{
		Self(Rc::new(CachedBlockState {
			key: key.cache_key(),
			block: Box::new(move |b: &mut Builder| block(b).map(Into::into)),
			registry: registry.clone(),
			children: OnceCell::new(),
		}))
	}

	/// The cache key.
	pub fn key(&self) -> &str {
		&self.0.key
	}

	/// Returns the child tree, building it on first call.
	pub fn children(&self) -> Result<&TagSet> {
		self.0
			.children
			.get_or_try_init(|| TagSet::build_in(&self.0.registry, |b| (self.0.block)(b)))
	}

	/// Returns `true` once the child tree has been built.
	pub fn is_materialized(&self) -> bool {
		self.0.children.get().is_some()
	}
}

impl fmt::Debug for CachedBlock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CachedBlock")
			.field("key", &self.0.key)
			.field("materialized", &self.is_materialized())
			.finish()
	}
}
