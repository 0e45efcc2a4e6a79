//! AST dialect: a structural rendering of the tree, for tooling and
//! structural comparison.

use crate::renderer::{Dialect, Renderer};
use serde::Serialize;
use weft_core::{
	Attributes, CachedBlock, ComponentNode, ContentTag, Node, TagSet, TextNode, UnaryTag, Visitor,
};

/// One node of the structural rendering.
///
/// Serializes as a mapping tagged by `variant`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum AstNode {
	/// A self-closing tag.
	UnaryTag {
		/// Tag name.
		name: String,
		/// Normalized attributes.
		attributes: Attributes,
	},
	/// A tag with content.
	ContentTag {
		/// Tag name.
		name: String,
		/// Normalized attributes.
		attributes: Attributes,
		/// The rendered content.
		content: Box<AstNode>,
	},
	/// Literal text.
	TextNode {
		/// The text.
		content: String,
	},
	/// An ordered list of children.
	TagSet {
		/// Children in order.
		children: Vec<AstNode>,
	},
	/// A component instance and its materialized children.
	Component {
		/// Registry name of the class.
		#[serde(skip_serializing_if = "Option::is_none")]
		name: Option<String>,
		/// Children produced by the render hook.
		children: Vec<AstNode>,
	},
	/// A fragment-cached subtree.
	CachedBlock {
		/// The cache key.
		key: String,
		/// Children built from the block.
		children: Vec<AstNode>,
	},
}

/// Renders node trees as JSON structures.
///
/// Cached blocks are rendered structurally and never consult a store.
#[derive(Debug, Clone, Default)]
pub struct AstRenderer {
	pretty: bool,
}

impl AstRenderer {
	/// Creates a renderer producing compact JSON.
	pub fn new() -> Self {
		Self::default()
	}

	/// Produces indented JSON.
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	/// Renders a node to its structure.
	pub fn to_ast(&self, node: &Node) -> crate::Result<AstNode> {
		Ok(self.visit(node)?)
	}

	/// Renders a node to a JSON value.
	pub fn to_value(&self, node: &Node) -> crate::Result<serde_json::Value> {
		Ok(serde_json::to_value(self.to_ast(node)?)?)
	}

	fn children(&self, set: &TagSet) -> weft_core::Result<Vec<AstNode>> {
		set.iter().map(|child| self.visit(child)).collect()
	}

	fn encode(&self, ast: &AstNode) -> crate::Result<String> {
		let json = if self.pretty {
			serde_json::to_string_pretty(ast)?
		} else {
			serde_json::to_string(ast)?
		};
		Ok(json)
	}
}

impl Visitor for AstRenderer {
	type Output = AstNode;

	fn visit_unary_tag(&self, tag: &UnaryTag) -> weft_core::Result<AstNode> {
		Ok(AstNode::UnaryTag {
			name: tag.name().to_string(),
			attributes: tag.attributes().clone(),
		})
	}

	fn visit_content_tag(&self, tag: &ContentTag) -> weft_core::Result<AstNode> {
		Ok(AstNode::ContentTag {
			name: tag.name().to_string(),
			attributes: tag.attributes().clone(),
			content: Box::new(self.visit(tag.content())?),
		})
	}

	fn visit_text_node(&self, text: &TextNode) -> weft_core::Result<AstNode> {
		Ok(AstNode::TextNode {
			content: text.as_str().to_string(),
		})
	}

	fn visit_tag_set(&self, set: &TagSet) -> weft_core::Result<AstNode> {
		Ok(AstNode::TagSet {
			children: self.children(set)?,
		})
	}

	fn visit_component(&self, component: &ComponentNode) -> weft_core::Result<AstNode> {
		Ok(AstNode::Component {
			name: component.name().map(str::to_string),
			children: self.children(component.children()?)?,
		})
	}

	fn visit_cached_block(&self, block: &CachedBlock) -> weft_core::Result<AstNode> {
		Ok(AstNode::CachedBlock {
			key: block.key().to_string(),
			children: self.children(block.children()?)?,
		})
	}
}

impl Renderer for AstRenderer {
	fn dialect(&self) -> Dialect {
		Dialect::Ast
	}

	fn render(&self, node: &Node) -> crate::Result<String> {
		self.encode(&self.visit(node)?)
	}

	fn render_tag_set(&self, set: &TagSet) -> crate::Result<String> {
		self.encode(&self.visit_tag_set(set)?)
	}

	fn render_component(&self, component: &ComponentNode) -> crate::Result<String> {
		self.encode(&self.visit_component(component)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;
	use weft_core::{ComponentClass, Registry, Tag, attrs, tag};

	#[fixture]
	fn renderer() -> AstRenderer {
		AstRenderer::new()
	}

	#[rstest]
	fn test_content_tag_structure(renderer: AstRenderer) {
		let node = tag("h1", ("Hello", attrs! { "id" => "title" })).unwrap();

		assert_eq!(
			renderer.to_value(&node).unwrap(),
			json!({
				"variant": "content_tag",
				"name": "h1",
				"attributes": { "id": ["title"] },
				"content": { "variant": "text_node", "content": "Hello" }
			})
		);
	}

	#[rstest]
	fn test_tag_set_children(renderer: AstRenderer) {
		let registry = Registry::new();
		let node = Tag::build_with(&registry, "ul", (), |b| {
			b.tag("li", "a")?;
			b.tag("br", ())
		})
		.unwrap();

		let Ok(AstNode::ContentTag { content, .. }) = renderer.to_ast(&node) else {
			panic!("expected content tag");
		};
		match *content {
			AstNode::TagSet { children } => assert_eq!(children.len(), 2),
			other => panic!("expected tag set, got {:?}", other),
		}
	}

	#[rstest]
	fn test_component_and_cached_block(renderer: AstRenderer) {
		let registry = Registry::new();
		let class = ComponentClass::from_fn(|_, b| b.tag("hr", ()))
			.named("divider")
			.register_in(&registry);
		let set = weft_core::TagSet::build_in(&registry, |b| {
			b.child(class.instantiate_in(&registry, (), None)?);
			b.cache("k", |b| b.text("cached"));
			Ok(())
		})
		.unwrap();

		let rendered = renderer.render_tag_set(&set).unwrap();
		let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
		assert_eq!(value["children"][0]["variant"], "component");
		assert_eq!(value["children"][0]["name"], "divider");
		assert_eq!(value["children"][1]["variant"], "cached_block");
		assert_eq!(value["children"][1]["key"], "k");
	}
}
