//! Component instances.
//!
//! Construction resolves props and records slot fills right away. The
//! render hook, the raw content and each slot default are evaluated lazily,
//! at most once per instance. Clones of a [`ComponentNode`] share that
//! state.

use super::class::ComponentClass;
use super::props::Props;
use super::slots::{SlotRecorder, SlotTable};
use crate::builder::{Builder, TagSet, Trailing};
use crate::error::Result;
use crate::node::Node;
use crate::registry::Registry;
use once_cell::unsync::OnceCell;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A caller-supplied content block.
pub type ContentBlock = Rc<dyn Fn(&mut Builder) -> Result<Trailing>>;

/// A component instance in the node tree.
#[derive(Clone)]
pub struct ComponentNode(Rc<ComponentState>);

struct ComponentState {
	class: Arc<ComponentClass>,
	registry: Registry,
	props: Props,
	content_block: Option<ContentBlock>,
	slots: SlotTable,
	content: OnceCell<TagSet>,
	children: OnceCell<TagSet>,
}

impl ComponentNode {
	pub(crate) fn new(
		class: Arc<ComponentClass>,
		registry: Registry,
		props: Props,
		content_block: Option<ContentBlock>,
	) -> Result<Self> {
		let props = class.schema().resolve(props)?;

		let mut recorder = Builder::recording(registry.clone(), SlotRecorder::new(class.schema()));
		if let Some(block) = &content_block {
			block(&mut recorder)?;
		}
		let filled = recorder
			.into_slots()
			.map(SlotRecorder::into_filled)
			.unwrap_or_default();
		let slots = SlotTable::new(class.schema(), filled);

		Ok(Self(Rc::new(ComponentState {
			class,
			registry,
			props,
			content_block,
			slots,
			content: OnceCell::new(),
			children: OnceCell::new(),
		})))
	}

	/// The class this instance was built from.
	pub fn class(&self) -> &Arc<ComponentClass> {
		&self.0.class
	}

	/// The class's registry name.
	pub fn name(&self) -> Option<&str> {
		self.0.class.name()
	}

	/// The resolved props, fixed at construction.
	pub fn props(&self) -> &Props {
		&self.0.props
	}

	/// Returns the children produced by the render hook.
	///
	/// The hook runs on first call only; later calls return the same tag set.
	pub fn children(&self) -> Result<&TagSet> {
		self.0.children.get_or_try_init(|| {
			tracing::trace!(component = self.name().unwrap_or("anonymous"), "invoking render hook");
			let cx = ComponentContext { node: self };
			let mut builder = Builder::new(self.0.registry.clone());
			let trailing = self.0.class.hook().render(&cx, &mut builder)?;
			builder.append_trailing(trailing);
			Ok(builder.into_tag_set())
		})
	}

	/// Returns `true` once the render hook has run.
	pub fn is_materialized(&self) -> bool {
		self.0.children.get().is_some()
	}

	/// The caller's content block evaluated as a plain tag set, ignoring
	/// slot semantics.
	pub fn content(&self) -> Result<&TagSet> {
		self.0.content.get_or_try_init(|| match &self.0.content_block {
			Some(block) => TagSet::build_in(&self.0.registry, |b| block(b)),
			None => Ok(TagSet::new()),
		})
	}

	/// Returns the content of a declared slot, falling back to its default.
	///
	/// # Errors
	///
	/// Returns [`crate::Error::UnknownSlot`] if the slot is not declared.
	pub fn slot(&self, name: &str) -> Result<&Node> {
		self.0.slots.get(name, self.0.class.schema(), &self.0.registry)
	}
}

impl fmt::Debug for ComponentNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentNode")
			.field("name", &self.name())
			.field("props", &self.0.props)
			.field("slots", &self.0.slots)
			.field("materialized", &self.is_materialized())
			.finish()
	}
}

/// What a render hook sees of its instance.
pub struct ComponentContext<'a> {
	node: &'a ComponentNode,
}

impl<'a> ComponentContext<'a> {
	/// The instance being rendered.
	pub fn node(&self) -> &'a ComponentNode {
		self.node
	}

	/// The class's registry name.
	pub fn name(&self) -> Option<&'a str> {
		self.node.name()
	}

	/// The resolved props.
	pub fn props(&self) -> &'a Props {
		self.node.props()
	}

	/// Returns one prop.
	pub fn prop(&self, name: &str) -> Option<&'a Value> {
		self.node.props().get(name)
	}

	/// Returns a prop holding a string.
	pub fn prop_str(&self, name: &str) -> Option<&'a str> {
		self.prop(name).and_then(Value::as_str)
	}

	/// Returns the content of a slot, ready to be appended.
	pub fn slot(&self, name: &str) -> Result<Node> {
		self.node.slot(name).cloned()
	}

	/// Returns `true` if the caller filled `name` explicitly.
	pub fn is_slot_filled(&self, name: &str) -> bool {
		self.node.0.slots.is_filled(name)
	}

	/// Returns the caller's raw content, ready to be appended.
	pub fn content(&self) -> Result<Node> {
		self.node.content().map(|set| set.clone().into())
	}

	/// Returns `true` if the caller supplied a content block.
	pub fn has_content(&self) -> bool {
		self.node.0.content_block.is_some()
	}

	/// The registry the instance resolves components against.
	pub fn registry(&self) -> &'a Registry {
		&self.node.0.registry
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{PropSpec, SlotSpec};
	use crate::error::Error;
	use crate::node::NodeKind;
	use crate::props;
	use rstest::{fixture, rstest};
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[fixture]
	fn registry() -> Registry {
		Registry::new()
	}

	fn card() -> Arc<ComponentClass> {
		Arc::new(
			ComponentClass::from_fn(|cx, b| {
				b.child(cx.slot("title")?);
				b.child(cx.content()?);
				Ok(())
			})
			.slot("title", SlotSpec::text("Untitled")),
		)
	}

	fn content(block: impl Fn(&mut Builder) -> Result<Trailing> + 'static) -> Option<ContentBlock> {
		let block: ContentBlock = Rc::new(block);
		Some(block)
	}

	#[rstest]
	fn test_render_hook_runs_once(registry: Registry) {
		static CALLS: AtomicUsize = AtomicUsize::new(0);
		let class = Arc::new(ComponentClass::from_fn(|_, b| {
			CALLS.fetch_add(1, Ordering::SeqCst);
			b.tag("hr", ())
		}));
		let node = class.instantiate_in(&registry, (), None).unwrap();

		assert!(!node.is_materialized());
		node.children().unwrap();
		node.clone().children().unwrap();

		assert!(node.is_materialized());
		assert_eq!(CALLS.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_unfilled_slot_uses_default(registry: Registry) {
		let node = card().instantiate_in(&registry, (), None).unwrap();
		assert_eq!(node.slot("title").unwrap().as_text(), Some("Untitled"));
	}

	#[rstest]
	fn test_filled_slot_suppresses_default(registry: Registry) {
		let node = card()
			.instantiate_in(
				&registry,
				(),
				content(|b| {
					b.slot("title", "Hello")?;
					Ok(Trailing::Nothing)
				}),
			)
			.unwrap();

		assert_eq!(node.slot("title").unwrap().as_text(), Some("Hello"));
	}

	#[rstest]
	fn test_filling_undeclared_slot_fails(registry: Registry) {
		let error = card()
			.instantiate_in(
				&registry,
				(),
				content(|b| {
					b.slot("footer", "x")?;
					Ok(Trailing::Nothing)
				}),
			)
			.unwrap_err();

		assert_eq!(error, Error::UnknownSlot { slot: "footer".into() });
	}

	#[rstest]
	fn test_reading_undeclared_slot_fails(registry: Registry) {
		let node = card().instantiate_in(&registry, (), None).unwrap();
		assert!(matches!(node.slot("footer"), Err(Error::UnknownSlot { .. })));
	}

	#[rstest]
	fn test_slot_recording_ignores_other_calls(registry: Registry) {
		let node = card()
			.instantiate_in(
				&registry,
				(),
				content(|b| {
					assert!(b.is_recording_slots());
					b.tag("p", "body")?;
					b.component("not-registered", ())?;
					b.slot_with("title", |b| b.tag("h1", "Hi"))?;
					Ok(Trailing::Nothing)
				}),
			)
			.unwrap();

		assert_eq!(node.slot("title").unwrap().kind(), NodeKind::TagSet);
	}

	#[rstest]
	fn test_content_ignores_slot_fills(registry: Registry) {
		let node = card()
			.instantiate_in(
				&registry,
				(),
				content(|b| {
					b.slot("title", "T")?;
					b.tag("p", "body")?;
					Ok(Trailing::Nothing)
				}),
			)
			.unwrap();

		assert_eq!(node.content().unwrap().len(), 1);
		assert_eq!(node.children().unwrap().len(), 2);
	}

	#[rstest]
	fn test_slot_default_evaluated_lazily_once(registry: Registry) {
		static CALLS: AtomicUsize = AtomicUsize::new(0);
		let class = Arc::new(ComponentClass::empty().slot(
			"aside",
			SlotSpec::block(|b| {
				CALLS.fetch_add(1, Ordering::SeqCst);
				b.tag("aside", "default")
			}),
		));
		let node = class.instantiate_in(&registry, (), None).unwrap();

		assert_eq!(CALLS.load(Ordering::SeqCst), 0);
		node.slot("aside").unwrap();
		node.slot("aside").unwrap();
		assert_eq!(CALLS.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_props_visible_in_render_hook(registry: Registry) {
		let class = Arc::new(
			ComponentClass::from_fn(|cx, b| b.tag("label", cx.prop_str("label").unwrap_or_default().to_string()))
				.prop("label", PropSpec::required()),
		);
		let node = class
			.instantiate_in(&registry, props! { "label" => "Email" }, None)
			.unwrap();

		match node.children().unwrap().last() {
			Some(Node::ContentTag(tag)) => assert_eq!(tag.content().as_text(), Some("Email")),
			other => panic!("expected label tag, got {:?}", other),
		}
	}
}
