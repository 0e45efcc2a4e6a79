//! Prop and slot declarations of a component class.
//!
//! A [`Schema`] is an immutable value built once per component class.
//! Subclasses start from a copy of their parent's schema and extend it, so
//! declarations on a subclass never leak into the parent.

use super::props::Props;
use crate::builder::{Builder, TagSet, Trailing};
use crate::error::{Error, Result};
use crate::node::Node;
use crate::registry::Registry;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Transformation applied to a supplied prop value.
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Block producing the default content of a slot.
pub type SlotProducer = Arc<dyn Fn(&mut Builder) -> Result<Trailing> + Send + Sync>;

/// Declaration of one prop.
#[derive(Clone)]
pub struct PropSpec {
	default: Option<Value>,
	transform: Option<Transform>,
}

impl PropSpec {
	/// A prop the caller must supply.
	pub fn required() -> Self {
		Self {
			default: None,
			transform: None,
		}
	}

	/// A prop falling back to `value` when not supplied.
	pub fn default(value: impl Into<Value>) -> Self {
		Self {
			default: Some(value.into()),
			transform: None,
		}
	}

	/// Passes supplied values through `f`.
	///
	/// Defaults are used as declared and are not transformed.
	pub fn transform<F>(mut self, f: F) -> Self
	where
		F: Fn(Value) -> Value + Send + Sync + 'static,
	{
		self.transform = Some(Arc::new(f));
		self
	}

	/// Returns `true` when the prop has no default.
	pub fn is_required(&self) -> bool {
		self.default.is_none()
	}

	/// The declared default.
	pub fn default_value(&self) -> Option<&Value> {
		self.default.as_ref()
	}
}

impl fmt::Debug for PropSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PropSpec")
			.field("default", &self.default)
			.field("transform", &self.transform.is_some())
			.finish()
	}
}

#[derive(Clone, Default)]
enum SlotDefault {
	#[default]
	Empty,
	Text(String),
	Block(SlotProducer),
}

/// Declaration of one slot and its default content.
#[derive(Clone, Default)]
pub struct SlotSpec {
	default: SlotDefault,
}

impl SlotSpec {
	/// A slot that renders nothing unless filled.
	pub fn empty() -> Self {
		Self::default()
	}

	/// A slot defaulting to literal text.
	pub fn text(text: impl Into<String>) -> Self {
		Self {
			default: SlotDefault::Text(text.into()),
		}
	}

	/// A slot whose default content is built by `block` on first access.
	pub fn block<F, R>(block: F) -> Self
	where
		F: Fn(&mut Builder) -> Result<R> + Send + Sync + 'static,
		R: Into<Trailing>,
	{
		Self {
			default: SlotDefault::Block(Arc::new(move |b: &mut Builder| block(b).map(Into::into))),
		}
	}

	/// Produces the default content.
	pub(crate) fn produce(&self, registry: &Registry) -> Result<Node> {
		match &self.default {
			SlotDefault::Empty => Ok(TagSet::new().into()),
			SlotDefault::Text(text) => Ok(Node::text(text.clone())),
			SlotDefault::Block(block) => Ok(TagSet::build_in(registry, |b| block(b))?.into()),
		}
	}
}

impl fmt::Debug for SlotSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let default = match &self.default {
			SlotDefault::Empty => "empty",
			SlotDefault::Text(_) => "text",
			SlotDefault::Block(_) => "block",
		};
		f.debug_struct("SlotSpec").field("default", &default).finish()
	}
}

/// Ordered prop and slot declarations.
#[derive(Debug, Clone, Default)]
pub struct Schema {
	props: Vec<(String, PropSpec)>,
	slots: Vec<(String, SlotSpec)>,
}

impl Schema {
	/// Creates an empty schema.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a prop (builder style).
	pub fn prop(mut self, name: impl Into<String>, spec: PropSpec) -> Self {
		self.add_prop(name, spec);
		self
	}

	/// Declares a slot (builder style).
	pub fn slot(mut self, name: impl Into<String>, spec: SlotSpec) -> Self {
		self.add_slot(name, spec);
		self
	}

	/// Declares a prop, replacing an earlier declaration of the same name.
	pub fn add_prop(&mut self, name: impl Into<String>, spec: PropSpec) {
		upsert(&mut self.props, name.into(), spec);
	}

	/// Declares a slot, replacing an earlier declaration of the same name.
	pub fn add_slot(&mut self, name: impl Into<String>, spec: SlotSpec) {
		upsert(&mut self.slots, name.into(), spec);
	}

	/// Returns a copy of `self` extended with the declarations of `other`.
	pub fn merged(&self, other: &Schema) -> Schema {
		let mut merged = self.clone();
		for (name, spec) in &other.props {
			merged.add_prop(name.clone(), spec.clone());
		}
		for (name, spec) in &other.slots {
			merged.add_slot(name.clone(), spec.clone());
		}
		merged
	}

	/// Declared prop names in order.
	pub fn prop_names(&self) -> impl Iterator<Item = &str> {
		self.props.iter().map(|(name, _)| name.as_str())
	}

	/// Declared slot names in order.
	pub fn slot_names(&self) -> impl Iterator<Item = &str> {
		self.slots.iter().map(|(name, _)| name.as_str())
	}

	/// Returns the declaration of a prop.
	pub fn prop_spec(&self, name: &str) -> Option<&PropSpec> {
		self.props.iter().find(|(n, _)| n == name).map(|(_, spec)| spec)
	}

	/// Returns the declaration of a slot.
	pub fn slot_spec(&self, name: &str) -> Option<&SlotSpec> {
		self.slots.iter().find(|(n, _)| n == name).map(|(_, spec)| spec)
	}

	/// Returns `true` if `name` is a declared slot.
	pub fn declares_slot(&self, name: &str) -> bool {
		self.slot_spec(name).is_some()
	}

	/// Returns `true` if no props are declared.
	///
	/// Untyped components accept any props unchanged.
	pub fn is_untyped(&self) -> bool {
		self.props.is_empty()
	}

	/// Resolves supplied props against the declarations.
	///
	/// Only declared props are kept, in declaration order. A supplied value
	/// goes through the prop's transform, a missing one falls back to the
	/// default.
	///
	/// # Errors
	///
	/// Returns [`Error::MissingProp`] for the first required prop not supplied.
	pub fn resolve(&self, supplied: Props) -> Result<Props> {
		if self.is_untyped() {
			return Ok(supplied);
		}

		let mut resolved = Props::new();
		for (name, spec) in &self.props {
			let value = match (supplied.get(name), &spec.default) {
				(Some(value), _) => match &spec.transform {
					Some(transform) => transform(value.clone()),
					None => value.clone(),
				},
				(None, Some(default)) => default.clone(),
				(None, None) => return Err(Error::MissingProp { prop: name.clone() }),
			};
			resolved.insert(name.clone(), value);
		}
		Ok(resolved)
	}
}

fn upsert<T>(entries: &mut Vec<(String, T)>, name: String, value: T) {
	match entries.iter_mut().find(|(existing, _)| *existing == name) {
		Some(entry) => entry.1 = value,
		None => entries.push((name, value)),
	}
}
