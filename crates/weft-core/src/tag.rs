//! Tag construction.
//!
//! [`Tag::build`] turns a tag name plus optional content and attributes into
//! a node:
//!
//! - no content and no block: a [`UnaryTag`]
//! - textual content: a [`ContentTag`] wrapping a [`TextNode`]
//! - a construction block: a [`ContentTag`] wrapping the [`TagSet`] the block built
//!
//! Values that are not tag names but have a textual representation become
//! plain text nodes through [`text`].

use crate::attributes::Attributes;
use crate::builder::{Builder, TagSet, Trailing};
use crate::error::{Error, Result};
use crate::node::{ContentTag, Node, UnaryTag};
use crate::registry::Registry;
use serde_json::Value;
use std::borrow::Cow;

/// A value offered as tag content.
#[derive(Debug, Clone)]
pub enum Content {
	/// Literal text.
	Text(String),
	/// A dynamic value; only scalars have a textual representation.
	Value(Value),
	/// An already built node, embedded as is.
	Node(Node),
}

impl Content {
	/// Converts the content into a node.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidContent`] for `null`, arrays and objects.
	pub fn into_node(self) -> Result<Node> {
		match self {
			Content::Text(text) => Ok(Node::text(text)),
			Content::Node(node) => Ok(node),
			Content::Value(Value::String(text)) => Ok(Node::text(text)),
			Content::Value(Value::Number(number)) => Ok(Node::text(number.to_string())),
			Content::Value(Value::Bool(flag)) => Ok(Node::text(flag.to_string())),
			Content::Value(other) => Err(Error::InvalidContent {
				value: other.to_string(),
			}),
		}
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Content::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Content::Text(text)
	}
}

impl From<&String> for Content {
	fn from(text: &String) -> Self {
		Content::Text(text.clone())
	}
}

impl From<Cow<'_, str>> for Content {
	fn from(text: Cow<'_, str>) -> Self {
		Content::Text(text.into_owned())
	}
}

impl From<Value> for Content {
	fn from(value: Value) -> Self {
		Content::Value(value)
	}
}

impl From<&Value> for Content {
	fn from(value: &Value) -> Self {
		Content::Value(value.clone())
	}
}

impl From<Node> for Content {
	fn from(node: Node) -> Self {
		Content::Node(node)
	}
}

impl From<TagSet> for Content {
	fn from(set: TagSet) -> Self {
		Content::Node(set.into())
	}
}

/// Arguments of a tag call: optional content plus attributes.
///
/// Most callers never name this type; the conversions let a tag call take
/// `()`, some content, an [`Attributes`] value, or a `(content, attributes)`
/// pair.
#[derive(Debug, Clone, Default)]
pub struct TagArgs {
	content: Option<Content>,
	attributes: Attributes,
}

impl TagArgs {
	/// Empty arguments: a unary tag without attributes.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the content.
	pub fn content(mut self, content: impl Into<Content>) -> Self {
		self.content = Some(content.into());
		self
	}

	/// Sets the attributes.
	pub fn attributes(mut self, attributes: impl Into<Attributes>) -> Self {
		self.attributes = attributes.into();
		self
	}

	/// Splits into content and attributes.
	pub fn into_parts(self) -> (Option<Content>, Attributes) {
		(self.content, self.attributes)
	}
}

impl From<()> for TagArgs {
	fn from(_: ()) -> Self {
		Self::new()
	}
}

impl From<Attributes> for TagArgs {
	fn from(attributes: Attributes) -> Self {
		Self::new().attributes(attributes)
	}
}

impl From<Content> for TagArgs {
	fn from(content: Content) -> Self {
		Self::new().content(content)
	}
}

impl<C: Into<Content>> From<(C, Attributes)> for TagArgs {
	fn from((content, attributes): (C, Attributes)) -> Self {
		Self::new().content(content).attributes(attributes)
	}
}

macro_rules! impl_tag_args_content {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for TagArgs {
				fn from(content: $ty) -> Self {
					Self::new().content(content)
				}
			}
		)*
	};
}

impl_tag_args_content!(&str, String, &String, Cow<'_, str>, Value, &Value, Node, TagSet);

macro_rules! impl_display_content {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Content {
				fn from(value: $ty) -> Self {
					Content::Text(value.to_string())
				}
			}

			impl From<$ty> for TagArgs {
				fn from(value: $ty) -> Self {
					Self::new().content(value)
				}
			}
		)*
	};
}

impl_display_content!(char, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Tag factory.
pub struct Tag;

impl Tag {
	/// Builds a tag without a construction block.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidContent`] if the content has no textual
	/// representation.
	pub fn build(name: impl Into<String>, args: impl Into<TagArgs>) -> Result<Node> {
		let (content, attributes) = args.into().into_parts();
		match content {
			None => Ok(UnaryTag::new(name, attributes).into()),
			Some(content) => Ok(ContentTag::new(name, content.into_node()?, attributes).into()),
		}
	}

	/// Builds a tag whose content is the tag set produced by `block`.
	///
	/// Component calls inside the block resolve against `registry`.
	pub fn build_with<F, R>(
		registry: &Registry,
		name: impl Into<String>,
		attributes: impl Into<Attributes>,
		block: F,
	) -> Result<Node>
	where
		F: FnOnce(&mut Builder) -> Result<R>,
		R: Into<Trailing>,
	{
		let content = TagSet::build_in(registry, block)?;
		Ok(ContentTag::new(name, content, attributes).into())
	}
}

/// Builds a tag, see [`Tag::build`].
///
/// # Examples
///
/// ```
/// use weft_core::{attrs, tag};
///
/// let br = tag("br", ()).unwrap();
/// assert_eq!(br.tag_name(), Some("br"));
///
/// let title = tag("h1", ("Hello", attrs! { "id" => "title" })).unwrap();
/// assert_eq!(title.tag_name(), Some("h1"));
/// ```
pub fn tag(name: impl Into<String>, args: impl Into<TagArgs>) -> Result<Node> {
	Tag::build(name, args)
}

/// Builds a tag from a construction block, resolving components against the
/// process-wide registry.
pub fn tag_with<F, R>(name: impl Into<String>, attributes: impl Into<Attributes>, block: F) -> Result<Node>
where
	F: FnOnce(&mut Builder) -> Result<R>,
	R: Into<Trailing>,
{
	Tag::build_with(Registry::global(), name, attributes, block)
}

/// Wraps any value with a textual representation as a text node.
///
/// Nodes pass through unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidContent`] if the value has no textual
/// representation.
pub fn text(value: impl Into<Content>) -> Result<Node> {
	value.into().into_node()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attrs;
	use crate::node::NodeKind;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_no_content_builds_unary_tag() {
		let node = tag("br", ()).unwrap();
		assert_eq!(node.kind(), NodeKind::UnaryTag);
	}

	#[rstest]
	fn test_attributes_only_builds_unary_tag() {
		let node = tag("input", attrs! { "type" => "text" }).unwrap();
		match node {
			Node::UnaryTag(tag) => assert!(tag.attributes().contains_key("type")),
			other => panic!("expected unary tag, got {:?}", other.kind()),
		}
	}

	#[rstest]
	#[case(TagArgs::from("Hello"), "Hello")]
	#[case(TagArgs::from(42), "42")]
	#[case(TagArgs::from(json!(1.5)), "1.5")]
	#[case(TagArgs::from(("x", attrs! { "id" => "a" })), "x")]
	fn test_textual_content_builds_content_tag(#[case] args: TagArgs, #[case] expected: &str) {
		match tag("p", args).unwrap() {
			Node::ContentTag(tag) => assert_eq!(tag.content().as_text(), Some(expected)),
			other => panic!("expected content tag, got {:?}", other.kind()),
		}
	}

	#[rstest]
	#[case(json!(null))]
	#[case(json!([1, 2]))]
	#[case(json!({ "a": 1 }))]
	fn test_non_textual_content_is_rejected(#[case] value: Value) {
		let expected = Error::InvalidContent {
			value: value.to_string(),
		};
		assert_eq!(tag("p", value.clone()).unwrap_err(), expected);
		assert_eq!(text(value).unwrap_err(), expected);
	}

	#[rstest]
	fn test_block_builds_content_tag_with_tag_set() {
		let registry = Registry::new();
		let node = Tag::build_with(&registry, "div", (), |b| {
			b.tag("h1", "Title")?;
			b.tag("p", "Paragraph")?;
			Ok(())
		})
		.unwrap();

		match node {
			Node::ContentTag(tag) => match tag.content() {
				Node::TagSet(set) => assert_eq!(set.len(), 2),
				other => panic!("expected tag set, got {:?}", other.kind()),
			},
			other => panic!("expected content tag, got {:?}", other.kind()),
		}
	}

	#[rstest]
	fn test_text_passes_nodes_through() {
		let br = tag("br", ()).unwrap();
		assert_eq!(text(br).unwrap().kind(), NodeKind::UnaryTag);
		assert_eq!(text("raw").unwrap().as_text(), Some("raw"));
	}
}
