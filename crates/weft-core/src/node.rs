//! Node model.
//!
//! A tree is made of [`Node`] values. Every variant carries a [`NodeKind`]
//! discriminant that renderers dispatch on through the [`Visitor`] protocol:
//! a node accepts a visitor and calls back the handler for its own variant.
//!
//! Tags, text and tag sets are plain owned values. Components and cached
//! blocks share their lazily materialized state between clones, so a node
//! that appears twice in a tree is still built at most once.

use crate::attributes::Attributes;
use crate::builder::TagSet;
use crate::cached_block::CachedBlock;
use crate::component::ComponentNode;
use crate::error::Result;

/// Discriminant of a [`Node`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// Self-closing tag.
	UnaryTag,
	/// Tag with content and a closing tag.
	ContentTag,
	/// Literal text.
	TextNode,
	/// Ordered list of children.
	TagSet,
	/// Component instance.
	Component,
	/// Fragment-cached subtree.
	CachedBlock,
}

impl NodeKind {
	/// Snake-case name of the variant.
	pub fn as_str(&self) -> &'static str {
		match self {
			NodeKind::UnaryTag => "unary_tag",
			NodeKind::ContentTag => "content_tag",
			NodeKind::TextNode => "text_node",
			NodeKind::TagSet => "tag_set",
			NodeKind::Component => "component",
			NodeKind::CachedBlock => "cached_block",
		}
	}
}

impl std::fmt::Display for NodeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A node in the markup tree.
#[derive(Debug, Clone)]
pub enum Node {
	/// A self-closing tag such as `<br />`.
	UnaryTag(UnaryTag),
	/// A tag wrapping text or a tag set.
	ContentTag(ContentTag),
	/// Literal text, emitted as is.
	Text(TextNode),
	/// An ordered list of children.
	TagSet(TagSet),
	/// A component instance.
	Component(ComponentNode),
	/// A subtree whose rendered text goes through the fragment cache.
	CachedBlock(CachedBlock),
}

impl Node {
	/// Creates a text node.
	pub fn text(text: impl Into<String>) -> Self {
		Node::Text(TextNode::new(text))
	}

	/// Returns the variant discriminant.
	pub fn kind(&self) -> NodeKind {
		match self {
			Node::UnaryTag(_) => NodeKind::UnaryTag,
			Node::ContentTag(_) => NodeKind::ContentTag,
			Node::Text(_) => NodeKind::TextNode,
			Node::TagSet(_) => NodeKind::TagSet,
			Node::Component(_) => NodeKind::Component,
			Node::CachedBlock(_) => NodeKind::CachedBlock,
		}
	}

	/// Returns the tag name for tag variants.
	pub fn tag_name(&self) -> Option<&str> {
		match self {
			Node::UnaryTag(tag) => Some(tag.name()),
			Node::ContentTag(tag) => Some(tag.name()),
			_ => None,
		}
	}

	/// Returns the text of a text node.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Node::Text(text) => Some(text.as_str()),
			_ => None,
		}
	}

	/// Dispatches to the visitor handler matching this node's variant.
	pub fn accept<V: Visitor + ?Sized>(&self, visitor: &V) -> Result<V::Output> {
		match self {
			Node::UnaryTag(tag) => visitor.visit_unary_tag(tag),
			Node::ContentTag(tag) => visitor.visit_content_tag(tag),
			Node::Text(text) => visitor.visit_text_node(text),
			Node::TagSet(set) => visitor.visit_tag_set(set),
			Node::Component(component) => visitor.visit_component(component),
			Node::CachedBlock(block) => visitor.visit_cached_block(block),
		}
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::text(text)
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::text(text)
	}
}

impl From<UnaryTag> for Node {
	fn from(tag: UnaryTag) -> Self {
		Node::UnaryTag(tag)
	}
}

impl From<ContentTag> for Node {
	fn from(tag: ContentTag) -> Self {
		Node::ContentTag(tag)
	}
}

impl From<TextNode> for Node {
	fn from(text: TextNode) -> Self {
		Node::Text(text)
	}
}

impl From<TagSet> for Node {
	fn from(set: TagSet) -> Self {
		Node::TagSet(set)
	}
}

impl From<ComponentNode> for Node {
	fn from(component: ComponentNode) -> Self {
		Node::Component(component)
	}
}

impl From<CachedBlock> for Node {
	fn from(block: CachedBlock) -> Self {
		Node::CachedBlock(block)
	}
}

/// A self-closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryTag {
	name: String,
	attributes: Attributes,
}

impl UnaryTag {
	/// Creates a unary tag.
	pub fn new(name: impl Into<String>, attributes: impl Into<Attributes>) -> Self {
		Self {
			name: name.into(),
			attributes: attributes.into(),
		}
	}

	/// Returns the tag name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}
}

/// A tag with content.
///
/// The content is either a [`TextNode`] or a [`TagSet`] built from a block.
#[derive(Debug, Clone)]
pub struct ContentTag {
	name: String,
	attributes: Attributes,
	content: Box<Node>,
}

impl ContentTag {
	/// Creates a content tag.
	pub fn new(
		name: impl Into<String>,
		content: impl Into<Node>,
		attributes: impl Into<Attributes>,
	) -> Self {
		Self {
			name: name.into(),
			attributes: attributes.into(),
			content: Box::new(content.into()),
		}
	}

	/// Returns the tag name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the content node.
	pub fn content(&self) -> &Node {
		&self.content
	}
}

/// Literal text.
///
/// Text is never escaped by the core; see the renderer options for opt-in
/// escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
	text: String,
}

impl TextNode {
	/// Creates a text node.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	/// Returns the text.
	pub fn as_str(&self) -> &str {
		&self.text
	}
}

impl std::fmt::Display for TextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

/// Double-dispatch visitor over node variants.
///
/// Implement one handler per variant; [`Node::accept`] picks the handler.
/// Components default to visiting their materialized children.
pub trait Visitor {
	/// What each handler produces.
	type Output;

	/// Visits any node.
	fn visit(&self, node: &Node) -> Result<Self::Output> {
		node.accept(self)
	}

	/// Visits a self-closing tag.
	fn visit_unary_tag(&self, tag: &UnaryTag) -> Result<Self::Output>;

	/// Visits a tag with content.
	fn visit_content_tag(&self, tag: &ContentTag) -> Result<Self::Output>;

	/// Visits literal text.
	fn visit_text_node(&self, text: &TextNode) -> Result<Self::Output>;

	/// Visits an ordered list of children.
	fn visit_tag_set(&self, set: &TagSet) -> Result<Self::Output>;

	/// Visits a component through its materialized children.
	fn visit_component(&self, component: &ComponentNode) -> Result<Self::Output> {
		self.visit_tag_set(component.children()?)
	}

	/// Visits a fragment-cached subtree.
	fn visit_cached_block(&self, block: &CachedBlock) -> Result<Self::Output>;
}
