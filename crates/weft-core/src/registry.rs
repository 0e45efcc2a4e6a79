//! Component registry.
//!
//! Maps component names to classes. Builders consult it for
//! [`Builder::component`](crate::Builder::component) and to decide whether a
//! dynamically dispatched call is a component or a tag.
//!
//! A process-wide registry is available through [`Registry::global`]; any
//! other `Registry` value can be passed explicitly to isolate a set of
//! components. Clones share the same underlying table.

use crate::component::ComponentClass;
use crate::error::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// How a dynamically dispatched name is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Build a tag with that name.
	Tag,
	/// Instantiate the component registered under that name.
	Component,
}

#[derive(Default)]
struct RegistryInner {
	components: HashMap<String, Arc<ComponentClass>>,
	resolutions: HashMap<String, Resolution>,
}

/// Name to component class mapping.
#[derive(Clone, Default)]
pub struct Registry {
	inner: Arc<RwLock<RegistryInner>>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide registry.
	pub fn global() -> &'static Registry {
		GLOBAL_REGISTRY.get_or_init(Registry::new)
	}

	/// Registers a named class.
	///
	/// Registering a name again replaces the previous class. Anonymous
	/// classes are ignored.
	pub fn register(&self, class: Arc<ComponentClass>) {
		let Some(name) = class.name().map(str::to_string) else {
			tracing::debug!("skipping registration of anonymous component");
			return;
		};

		let mut inner = self.inner.write();
		if inner.components.insert(name.clone(), class).is_some() {
			tracing::warn!(component = %name, "component registration replaced an existing entry");
		} else {
			tracing::debug!(component = %name, "component registered");
		}
	}

	/// Returns the class registered under `name`.
	pub fn get(&self, name: &str) -> Option<Arc<ComponentClass>> {
		self.inner.read().components.get(name).cloned()
	}

	/// Returns the class registered under `name`.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownComponent`] if nothing is registered under `name`.
	pub fn fetch(&self, name: &str) -> Result<Arc<ComponentClass>> {
		self.get(name).ok_or_else(|| Error::UnknownComponent {
			key: name.to_string(),
		})
	}

	/// Returns `true` if a class is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.inner.read().components.contains_key(name)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.inner.read().components.keys().cloned().collect();
		names.sort();
		names
	}

	/// Number of registered classes.
	pub fn len(&self) -> usize {
		self.inner.read().components.len()
	}

	/// Returns `true` if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.inner.read().components.is_empty()
	}

	/// Decides whether `name` dispatches to a component or a tag.
	///
	/// The answer is computed on first use and cached: a name first resolved
	/// as a tag keeps resolving as a tag even if a component is registered
	/// under it later, until [`Registry::clear_resolutions`] is called.
	pub fn resolve(&self, name: &str) -> Resolution {
		if let Some(resolution) = self.inner.read().resolutions.get(name) {
			return *resolution;
		}

		let mut inner = self.inner.write();
		let resolution = if inner.components.contains_key(name) {
			Resolution::Component
		} else {
			Resolution::Tag
		};
		let resolution = *inner
			.resolutions
			.entry(name.to_string())
			.or_insert(resolution);
		tracing::debug!(name, ?resolution, "dispatch path resolved");
		resolution
	}

	/// Forgets every cached dispatch resolution.
	pub fn clear_resolutions(&self) {
		self.inner.write().resolutions.clear();
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("components", &self.names())
			.finish_non_exhaustive()
	}
}
