//! Slot recording and lookup.

use super::schema::Schema;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::registry::Registry;
use once_cell::unsync::OnceCell;
use std::collections::HashMap;

/// Collects the slot fills made by a component's content block.
#[derive(Debug)]
pub(crate) struct SlotRecorder {
	declared: Vec<String>,
	filled: HashMap<String, Node>,
}

impl SlotRecorder {
	pub(crate) fn new(schema: &Schema) -> Self {
		Self {
			declared: schema.slot_names().map(str::to_string).collect(),
			filled: HashMap::new(),
		}
	}

	pub(crate) fn ensure_declared(&self, name: &str) -> Result<()> {
		if self.declared.iter().any(|declared| declared == name) {
			Ok(())
		} else {
			Err(Error::UnknownSlot {
				slot: name.to_string(),
			})
		}
	}

	pub(crate) fn fill(&mut self, name: &str, content: Node) {
		self.filled.insert(name.to_string(), content);
	}

	pub(crate) fn into_filled(self) -> HashMap<String, Node> {
		self.filled
	}
}

/// Resolved slot contents of one component instance.
///
/// Filled slots are stored as recorded. Unfilled declared slots produce
/// their default on first access, at most once.
pub(crate) struct SlotTable {
	filled: HashMap<String, Node>,
	defaults: Vec<(String, OnceCell<Node>)>,
}

impl SlotTable {
	pub(crate) fn new(schema: &Schema, filled: HashMap<String, Node>) -> Self {
		let defaults = schema
			.slot_names()
			.filter(|name| !filled.contains_key(*name))
			.map(|name| (name.to_string(), OnceCell::new()))
			.collect();
		Self { filled, defaults }
	}

	pub(crate) fn get(&self, name: &str, schema: &Schema, registry: &Registry) -> Result<&Node> {
		if let Some(node) = self.filled.get(name) {
			return Ok(node);
		}
		let unknown = || Error::UnknownSlot {
			slot: name.to_string(),
		};
		let cell = self
			.defaults
			.iter()
			.find(|(declared, _)| declared == name)
			.map(|(_, cell)| cell)
			.ok_or_else(unknown)?;
		let spec = schema.slot_spec(name).ok_or_else(unknown)?;
		cell.get_or_try_init(|| spec.produce(registry))
	}

	pub(crate) fn is_filled(&self, name: &str) -> bool {
		self.filled.contains_key(name)
	}
}

impl std::fmt::Debug for SlotTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut filled: Vec<&str> = self.filled.keys().map(String::as_str).collect();
		filled.sort_unstable();
		f.debug_struct("SlotTable")
			.field("filled", &filled)
			.field("defaults", &self.defaults.iter().map(|(name, _)| name).collect::<Vec<_>>())
			.finish()
	}
}
