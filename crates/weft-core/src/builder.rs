//! Tree construction.
//!
//! A [`Builder`] is handed to every construction block. Each DSL call on it
//! appends one child to the [`TagSet`] under construction. When the block
//! returns, its return value is offered as trailing content (see
//! [`Trailing`]), so a block can declare some children and return one more.
//!
//! Inside a component's content block the builder runs in slot-recording
//! mode: only [`Builder::slot`] and [`Builder::slot_with`] have an effect and
//! everything else is a no-op. The same block can therefore be evaluated
//! both for its slot fills and for its raw content.

use crate::attributes::Attributes;
use crate::cached_block::CachedBlock;
use crate::component::{ComponentNode, ContentBlock, Props, SlotRecorder};
use crate::error::Result;
use crate::node::Node;
use crate::registry::{Registry, Resolution};
use crate::tag::{Content, Tag, TagArgs};
use std::borrow::Cow;
use std::rc::Rc;
use weft_cache::CacheKey;

/// An ordered, append-only list of child nodes.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
	children: Vec<Node>,
}

impl TagSet {
	/// Creates an empty tag set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a tag set holding `children` in order.
	pub fn from_children(children: Vec<Node>) -> Self {
		Self { children }
	}

	/// Builds a tag set from a construction block, resolving components
	/// against the process-wide registry.
	///
	/// # Examples
	///
	/// ```
	/// use weft_core::TagSet;
	///
	/// let set = TagSet::build(|b| {
	///     b.tag("h1", "Title")?;
	///     Ok("free text")
	/// })
	/// .unwrap();
	///
	/// assert_eq!(set.len(), 2);
	/// assert_eq!(set.last().and_then(|n| n.as_text()), Some("free text"));
	/// ```
	pub fn build<F, R>(block: F) -> Result<Self>
	where
		F: FnOnce(&mut Builder) -> Result<R>,
		R: Into<Trailing>,
	{
		Self::build_in(Registry::global(), block)
	}

	/// Builds a tag set from a construction block against an explicit registry.
	pub fn build_in<F, R>(registry: &Registry, block: F) -> Result<Self>
	where
		F: FnOnce(&mut Builder) -> Result<R>,
		R: Into<Trailing>,
	{
		let mut builder = Builder::new(registry.clone());
		let trailing = block(&mut builder)?.into();
		builder.append_trailing(trailing);
		Ok(builder.into_tag_set())
	}

	/// Children in append order.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Iterates children in append order.
	pub fn iter(&self) -> std::slice::Iter<'_, Node> {
		self.children.iter()
	}

	/// The most recently appended child.
	pub fn last(&self) -> Option<&Node> {
		self.children.last()
	}

	/// Number of children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns `true` when nothing was appended.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	pub(crate) fn push(&mut self, node: Node) -> usize {
		self.children.push(node);
		self.children.len() - 1
	}
}

impl<'a> IntoIterator for &'a TagSet {
	type Item = &'a Node;
	type IntoIter = std::slice::Iter<'a, Node>;

	fn into_iter(self) -> Self::IntoIter {
		self.children.iter()
	}
}

/// Handle to a child appended by a [`Builder`] call.
///
/// Returning it from a construction block marks that child as the trailing
/// content; it is only appended again if other children followed it.
/// Calls made while recording slots return a detached handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appended {
	index: Option<usize>,
}

impl Appended {
	fn at(index: usize) -> Self {
		Self { index: Some(index) }
	}

	fn detached() -> Self {
		Self { index: None }
	}

	/// Position of the child in its tag set, if it was appended.
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	/// Returns `true` if the call appended nothing.
	pub fn is_detached(&self) -> bool {
		self.index.is_none()
	}
}

/// The value a construction block returns.
///
/// Text and nodes are appended as one more child unless they already are the
/// last child. Anything else (unit, booleans, numbers) is dropped.
#[derive(Debug, Clone, Default)]
pub enum Trailing {
	/// Nothing to append.
	#[default]
	Nothing,
	/// Text, appended as a text node.
	Text(String),
	/// A node, appended as is.
	Node(Node),
	/// A child the block already appended.
	Appended(Appended),
}

impl From<()> for Trailing {
	fn from(_: ()) -> Self {
		Trailing::Nothing
	}
}

macro_rules! impl_trailing_nothing {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Trailing {
				fn from(_: $ty) -> Self {
					Trailing::Nothing
				}
			}
		)*
	};
}

impl_trailing_nothing!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Trailing {
	fn from(text: &str) -> Self {
		Trailing::Text(text.to_string())
	}
}

impl From<String> for Trailing {
	fn from(text: String) -> Self {
		Trailing::Text(text)
	}
}

impl From<Cow<'_, str>> for Trailing {
	fn from(text: Cow<'_, str>) -> Self {
		Trailing::Text(text.into_owned())
	}
}

impl From<Node> for Trailing {
	fn from(node: Node) -> Self {
		Trailing::Node(node)
	}
}

impl From<TagSet> for Trailing {
	fn from(set: TagSet) -> Self {
		Trailing::Node(set.into())
	}
}

impl From<ComponentNode> for Trailing {
	fn from(component: ComponentNode) -> Self {
		Trailing::Node(component.into())
	}
}

impl From<CachedBlock> for Trailing {
	fn from(block: CachedBlock) -> Self {
		Trailing::Node(block.into())
	}
}

impl From<Appended> for Trailing {
	fn from(appended: Appended) -> Self {
		Trailing::Appended(appended)
	}
}

impl<T: Into<Trailing>> From<Option<T>> for Trailing {
	fn from(value: Option<T>) -> Self {
		value.map_or(Trailing::Nothing, Into::into)
	}
}

/// Arguments of a dynamically dispatched call, see [`Builder::call`].
///
/// Props double as attributes when the name resolves to a tag; content
/// becomes the component's content when it resolves to a component.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
	content: Option<Content>,
	props: Props,
}

impl From<()> for CallArgs {
	fn from(_: ()) -> Self {
		Self::default()
	}
}

impl From<Props> for CallArgs {
	fn from(props: Props) -> Self {
		Self {
			content: None,
			props,
		}
	}
}

impl<C: Into<Content>> From<(C, Props)> for CallArgs {
	fn from((content, props): (C, Props)) -> Self {
		Self {
			content: Some(content.into()),
			props,
		}
	}
}

macro_rules! impl_call_args_content {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for CallArgs {
				fn from(content: $ty) -> Self {
					Self {
						content: Some(content.into()),
						props: Props::new(),
					}
				}
			}
		)*
	};
}

impl_call_args_content!(&str, String, Node, Content);

/// Receiver of the construction DSL.
pub struct Builder {
	set: TagSet,
	registry: Registry,
	slots: Option<SlotRecorder>,
}

impl Builder {
	pub(crate) fn new(registry: Registry) -> Self {
		Self {
			set: TagSet::new(),
			registry,
			slots: None,
		}
	}

	pub(crate) fn recording(registry: Registry, slots: SlotRecorder) -> Self {
		Self {
			set: TagSet::new(),
			registry,
			slots: Some(slots),
		}
	}

	/// The registry component calls resolve against.
	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Returns `true` inside a component's content block while its slot
	/// fills are being recorded.
	pub fn is_recording_slots(&self) -> bool {
		self.slots.is_some()
	}

	/// Children appended so far.
	pub fn children(&self) -> &[Node] {
		self.set.children()
	}

	/// Appends a tag, see [`Tag::build`].
	pub fn tag(&mut self, name: impl Into<String>, args: impl Into<TagArgs>) -> Result<Appended> {
		if self.is_recording_slots() {
			return Ok(Appended::detached());
		}
		let node = Tag::build(name, args)?;
		Ok(self.append(node))
	}

	/// Appends a tag whose content is built by `block`.
	pub fn tag_with<F, R>(
		&mut self,
		name: impl Into<String>,
		attributes: impl Into<Attributes>,
		block: F,
	) -> Result<Appended>
	where
		F: FnOnce(&mut Builder) -> Result<R>,
		R: Into<Trailing>,
	{
		if self.is_recording_slots() {
			return Ok(Appended::detached());
		}
		let node = Tag::build_with(&self.registry, name, attributes, block)?;
		Ok(self.append(node))
	}

	/// Appends a text node, or the node itself if `value` already is one.
	pub fn text(&mut self, value: impl Into<Content>) -> Result<Appended> {
		if self.is_recording_slots() {
			return Ok(Appended::detached());
		}
		let node = value.into().into_node()?;
		Ok(self.append(node))
	}

	/// Appends an already built node, such as a component instance.
	pub fn child(&mut self, node: impl Into<Node>) -> Appended {
		if self.is_recording_slots() {
			return Appended::detached();
		}
		self.append(node.into())
	}

	/// Instantiates the component registered under `key` and appends it.
	///
	/// # Errors
	///
	/// Fails if `key` is not registered or a required prop is missing.
	pub fn component(&mut self, key: &str, props: impl Into<Props>) -> Result<Appended> {
		self.append_component(key, props.into(), None)
	}

	/// Like [`Builder::component`], with a content block for the component.
	pub fn component_with<F, R>(&mut self, key: &str, props: impl Into<Props>, block: F) -> Result<Appended>
	where
		F: Fn(&mut Builder) -> Result<R> + 'static,
		R: Into<Trailing>,
	{
		let block: ContentBlock = Rc::new(move |b: &mut Builder| block(b).map(Into::into));
		self.append_component(key, props.into(), Some(block))
	}

	/// Appends a fragment-cached block under the key derived from `key`.
	///
	/// The block runs at most once, the first time its rendered text is
	/// needed and not found in the cache store.
	pub fn cache<K, F, R>(&mut self, key: &K, block: F) -> Appended
	where
		K: CacheKey + ?Sized,
		F: Fn(&mut Builder) -> Result<R> + 'static,
		R: Into<Trailing>,
	{
		if self.is_recording_slots() {
			return Appended::detached();
		}
		let node = CachedBlock::new_in(&self.registry, key, block);
		self.append(node.into())
	}

	/// Fills a slot with content.
	///
	/// Only meaningful inside a component's content block; a no-op anywhere
	/// else. A later fill of the same slot replaces an earlier one.
	///
	/// # Errors
	///
	/// Returns [`crate::Error::UnknownSlot`] if the component does not declare `name`.
	pub fn slot(&mut self, name: &str, content: impl Into<Content>) -> Result<()> {
		let Some(slots) = self.slots.as_mut() else {
			return Ok(());
		};
		slots.ensure_declared(name)?;
		let node = content.into().into_node()?;
		slots.fill(name, node);
		Ok(())
	}

	/// Fills a slot with the tag set built by `block`.
	pub fn slot_with<F, R>(&mut self, name: &str, block: F) -> Result<()>
	where
		F: FnOnce(&mut Builder) -> Result<R>,
		R: Into<Trailing>,
	{
		let Some(slots) = self.slots.as_ref() else {
			return Ok(());
		};
		slots.ensure_declared(name)?;
		let set = TagSet::build_in(&self.registry, block)?;
		if let Some(slots) = self.slots.as_mut() {
			slots.fill(name, set.into());
		}
		Ok(())
	}

	/// Dispatches `name` to a component call if a component is registered
	/// under it, or to a tag call otherwise.
	///
	/// The resolution is cached by the registry on first use; see
	/// [`Registry::resolve`].
	pub fn call(&mut self, name: &str, args: impl Into<CallArgs>) -> Result<Appended> {
		let CallArgs { content, props } = args.into();
		match self.registry.resolve(name) {
			Resolution::Component => {
				let block = content.map(content_block);
				self.append_component(name, props, block)
			}
			Resolution::Tag => {
				let args = TagArgs::new().attributes(props.to_attributes());
				match content {
					Some(content) => self.tag(name, args.content(content)),
					None => self.tag(name, args),
				}
			}
		}
	}

	/// Like [`Builder::call`], with a construction block.
	///
	/// The block becomes the component's content block or the tag's content.
	pub fn call_with<F, R>(&mut self, name: &str, props: impl Into<Props>, block: F) -> Result<Appended>
	where
		F: Fn(&mut Builder) -> Result<R> + 'static,
		R: Into<Trailing>,
	{
		let props = props.into();
		match self.registry.resolve(name) {
			Resolution::Component => self.component_with(name, props, block),
			Resolution::Tag => self.tag_with(name, props.to_attributes(), block),
		}
	}

	fn append_component(&mut self, key: &str, props: Props, block: Option<ContentBlock>) -> Result<Appended> {
		if self.is_recording_slots() {
			return Ok(Appended::detached());
		}
		let class = self.registry.fetch(key)?;
		let component = class.instantiate_in(&self.registry, props, block)?;
		Ok(self.append(component.into()))
	}

	fn append(&mut self, node: Node) -> Appended {
		Appended::at(self.set.push(node))
	}

	pub(crate) fn append_trailing(&mut self, trailing: Trailing) {
		match trailing {
			Trailing::Nothing => {}
			Trailing::Text(text) => {
				let repeated = self.set.last().and_then(Node::as_text) == Some(text.as_str());
				if !repeated {
					self.set.push(Node::text(text));
				}
			}
			Trailing::Node(node) => {
				self.set.push(node);
			}
			Trailing::Appended(Appended { index: Some(index) }) => {
				if index + 1 != self.set.len() {
					if let Some(node) = self.set.children().get(index).cloned() {
						self.set.push(node);
					}
				}
			}
			Trailing::Appended(_) => {}
		}
	}

	pub(crate) fn into_tag_set(self) -> TagSet {
		self.set
	}

	pub(crate) fn into_slots(self) -> Option<SlotRecorder> {
		self.slots
	}
}

impl std::fmt::Debug for Builder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Builder")
			.field("children", &self.set.len())
			.field("recording_slots", &self.is_recording_slots())
			.finish()
	}
}

fn content_block(content: Content) -> ContentBlock {
	Rc::new(move |b: &mut Builder| {
		b.text(content.clone())?;
		Ok(Trailing::Nothing)
	})
}
