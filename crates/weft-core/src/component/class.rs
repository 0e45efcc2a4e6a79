//! Component classes.

use super::instance::{ComponentNode, ContentBlock};
use super::props::Props;
use super::r#trait::{Component, EmptyComponent, FnComponent};
use super::schema::{PropSpec, Schema, SlotSpec};
use crate::builder::{Builder, Trailing};
use crate::error::Result;
use crate::registry::Registry;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A component type: an optional name, a schema and a render hook.
///
/// Classes are values. Declaring a prop or slot consumes the class and
/// returns the extended one; [`ComponentClass::subclass`] copies the schema
/// and hook so the subclass can be extended without touching its parent.
#[derive(Clone)]
pub struct ComponentClass {
	name: Option<String>,
	schema: Schema,
	hook: Arc<dyn Component>,
}

impl ComponentClass {
	/// Creates a class from a [`Component`] implementation, taking its name
	/// and schema.
	pub fn new<C: Component>(component: C) -> Self {
		Self {
			name: C::name().map(str::to_string),
			schema: C::schema(),
			hook: Arc::new(component),
		}
	}

	/// Creates an anonymous, untyped class whose render hook is `hook`.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use weft_core::{ComponentClass, Registry};
	///
	/// let badge = Arc::new(ComponentClass::from_fn(|cx, b| {
	///     let label = cx.prop_str("label").unwrap_or("new").to_string();
	///     b.tag("span", label)
	/// }));
	///
	/// let node = badge.instantiate_in(&Registry::new(), (), None).unwrap();
	/// assert_eq!(node.children().unwrap().len(), 1);
	/// ```
	pub fn from_fn<F, R>(hook: F) -> Self
	where
		F: Fn(&super::ComponentContext<'_>, &mut Builder) -> Result<R> + Send + Sync + 'static,
		R: Into<Trailing> + 'static,
	{
		Self {
			name: None,
			schema: Schema::new(),
			hook: Arc::new(FnComponent::new(hook)),
		}
	}

	/// Creates an anonymous class that renders nothing.
	pub fn empty() -> Self {
		Self {
			name: None,
			schema: Schema::new(),
			hook: Arc::new(EmptyComponent),
		}
	}

	/// Sets the registry name.
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Declares a prop.
	pub fn prop(mut self, name: impl Into<String>, spec: PropSpec) -> Self {
		self.schema.add_prop(name, spec);
		self
	}

	/// Declares a slot.
	pub fn slot(mut self, name: impl Into<String>, spec: SlotSpec) -> Self {
		self.schema.add_slot(name, spec);
		self
	}

	/// Adds every declaration of `schema`.
	pub fn extend(mut self, schema: &Schema) -> Self {
		self.schema = self.schema.merged(schema);
		self
	}

	/// Replaces the render hook.
	pub fn render_with<C: Component>(mut self, component: C) -> Self {
		self.hook = Arc::new(component);
		self
	}

	/// Replaces the render hook with a closure.
	pub fn render_fn<F, R>(mut self, hook: F) -> Self
	where
		F: Fn(&super::ComponentContext<'_>, &mut Builder) -> Result<R> + Send + Sync + 'static,
		R: Into<Trailing> + 'static,
	{
		self.hook = Arc::new(FnComponent::new(hook));
		self
	}

	/// Derives an anonymous subclass.
	///
	/// The subclass starts with a copy of this class's schema and render
	/// hook; later declarations on it leave this class unchanged.
	pub fn subclass(&self) -> Self {
		Self {
			name: None,
			schema: self.schema.clone(),
			hook: Arc::clone(&self.hook),
		}
	}

	/// The registry name, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// The declared props and slots.
	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	pub(crate) fn hook(&self) -> &dyn Component {
		self.hook.as_ref()
	}

	/// Registers the class in the process-wide registry under its name.
	pub fn register(self) -> Arc<Self> {
		self.register_in(Registry::global())
	}

	/// Registers the class in `registry` under its name.
	///
	/// Anonymous classes are returned without being registered.
	pub fn register_in(self, registry: &Registry) -> Arc<Self> {
		let class = Arc::new(self);
		if class.name.is_some() {
			registry.register(Arc::clone(&class));
		}
		class
	}

	/// Instantiates the class against the process-wide registry.
	///
	/// # Errors
	///
	/// Returns [`crate::Error::MissingProp`] if a required prop is missing.
	pub fn instantiate(self: &Arc<Self>, props: impl Into<Props>) -> Result<ComponentNode> {
		self.instantiate_in(Registry::global(), props, None)
	}

	/// Instantiates the class with a content block, against the
	/// process-wide registry.
	///
	/// The block is evaluated right away to record slot fills and again,
	/// lazily, if the render hook asks for the raw content.
	pub fn with_content<F, R>(self: &Arc<Self>, props: impl Into<Props>, block: F) -> Result<ComponentNode>
	where
		F: Fn(&mut Builder) -> Result<R> + 'static,
		R: Into<Trailing>,
	{
		let block: ContentBlock = Rc::new(move |b: &mut Builder| block(b).map(Into::into));
		self.instantiate_in(Registry::global(), props, Some(block))
	}

	/// Instantiates the class against `registry`.
	pub fn instantiate_in(
		self: &Arc<Self>,
		registry: &Registry,
		props: impl Into<Props>,
		content: Option<ContentBlock>,
	) -> Result<ComponentNode> {
		ComponentNode::new(Arc::clone(self), registry.clone(), props.into(), content)
	}
}

impl fmt::Debug for ComponentClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentClass")
			.field("name", &self.name)
			.field("schema", &self.schema)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use crate::props;
	use rstest::{fixture, rstest};

	#[fixture]
	fn base() -> ComponentClass {
		ComponentClass::from_fn(|cx, b| b.tag("p", cx.prop_str("label").unwrap_or_default().to_string()))
			.prop("label", PropSpec::required())
	}

	#[rstest]
	fn test_subclass_props_do_not_leak_to_parent(base: ComponentClass) {
		let child = base.subclass().prop("icon", PropSpec::default("star"));

		assert!(child.schema().prop_spec("icon").is_some());
		assert!(child.schema().prop_spec("label").is_some());
		assert!(base.schema().prop_spec("icon").is_none());
	}

	#[rstest]
	fn test_subclass_is_anonymous(base: ComponentClass) {
		let named = base.named("field");
		assert_eq!(named.name(), Some("field"));
		assert_eq!(named.subclass().name(), None);
	}

	#[rstest]
	fn test_missing_required_prop_fails_construction(base: ComponentClass) {
		let class = Arc::new(base);
		let error = class.instantiate_in(&Registry::new(), (), None).unwrap_err();
		assert_eq!(
			error,
			Error::MissingProp {
				prop: "label".into()
			}
		);
	}

	#[rstest]
	fn test_register_in_uses_name(base: ComponentClass) {
		let registry = Registry::new();
		base.clone().register_in(&registry);
		base.named("field").register_in(&registry);

		assert_eq!(registry.names(), vec!["field".to_string()]);
	}

	#[rstest]
	fn test_empty_class_renders_nothing() {
		let class = Arc::new(ComponentClass::empty());
		let node = class
			.instantiate_in(&Registry::new(), props! { "any" => 1 }, None)
			.unwrap();
		assert!(node.children().unwrap().is_empty());
	}
}
