//! Markdown dialect.
//!
//! Headings, list items, emphasis, strong emphasis and links map to their
//! Markdown syntax. Any other tag degrades to its content followed by a
//! blank line, and unary tags render as nothing.

use crate::renderer::{Dialect, Renderer};
use std::sync::Arc;
use weft_cache::{CacheStore, NullCache};
use weft_core::{AttrValue, CachedBlock, ComponentNode, ContentTag, Node, TagSet, TextNode, UnaryTag, Visitor};

/// Renders node trees as Markdown.
///
/// Cached blocks go through the injected store under keys prefixed with
/// `markdown:`, so fragments other dialects put in a shared store are never
/// mixed in. The default store never memoizes.
///
/// No [`RenderOptions`](crate::RenderOptions) apply to this dialect.
#[derive(Clone)]
pub struct MarkdownRenderer {
	store: Arc<dyn CacheStore>,
}

impl Default for MarkdownRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl MarkdownRenderer {
	/// Creates a renderer that does not memoize cached blocks.
	pub fn new() -> Self {
		Self::with_store(Arc::new(NullCache))
	}

	/// Creates a renderer over an explicit fragment store.
	pub fn with_store(store: Arc<dyn CacheStore>) -> Self {
		Self { store }
	}

	/// Store key of a cached block.
	pub fn fragment_key(&self, key: &str) -> String {
		format!("markdown:{key}")
	}
}

fn heading(level: usize, content: &str) -> String {
	format!("{} {content}\n\n", "#".repeat(level))
}

impl Visitor for MarkdownRenderer {
	type Output = String;

	fn visit_unary_tag(&self, _tag: &UnaryTag) -> weft_core::Result<String> {
		Ok(String::new())
	}

	fn visit_content_tag(&self, tag: &ContentTag) -> weft_core::Result<String> {
		let content = self.visit(tag.content())?;
		let rendered = match tag.name() {
			"h1" => heading(1, &content),
			"h2" => heading(2, &content),
			"h3" => heading(3, &content),
			"h4" => heading(4, &content),
			"h5" => heading(5, &content),
			"h6" => heading(6, &content),
			"li" => format!("* {content}\n"),
			"em" => format!("_{content}_"),
			"strong" => format!("**{content}**"),
			"a" => {
				let href = tag
					.attributes()
					.get("href")
					.and_then(AttrValue::joined)
					.unwrap_or_default();
				format!("[{content}]({href})")
			}
			_ => format!("{content}\n\n"),
		};
		Ok(rendered)
	}

	fn visit_text_node(&self, text: &TextNode) -> weft_core::Result<String> {
		Ok(text.as_str().to_string())
	}

	fn visit_tag_set(&self, set: &TagSet) -> weft_core::Result<String> {
		set.iter().map(|child| self.visit(child)).collect()
	}

	fn visit_cached_block(&self, block: &CachedBlock) -> weft_core::Result<String> {
		self.store
			.as_ref()
			.fetch_dyn(&self.fragment_key(block.key()), || self.visit_tag_set(block.children()?))
	}
}

impl Renderer for MarkdownRenderer {
	fn dialect(&self) -> Dialect {
		Dialect::Markdown
	}

	fn render(&self, node: &Node) -> crate::Result<String> {
		Ok(self.visit(node)?)
	}

	fn render_tag_set(&self, set: &TagSet) -> crate::Result<String> {
		Ok(self.visit_tag_set(set)?)
	}

	fn render_component(&self, component: &ComponentNode) -> crate::Result<String> {
		Ok(self.visit_component(component)?)
	}
}

impl std::fmt::Debug for MarkdownRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MarkdownRenderer").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use weft_core::{Registry, Tag, attrs, tag};

	#[fixture]
	fn renderer() -> MarkdownRenderer {
		MarkdownRenderer::new()
	}

	#[rstest]
	#[case("h1", "# t\n\n")]
	#[case("h3", "### t\n\n")]
	#[case("h6", "###### t\n\n")]
	#[case("li", "* t\n")]
	#[case("em", "_t_")]
	#[case("strong", "**t**")]
	#[case("p", "t\n\n")]
	fn test_tag_table(renderer: MarkdownRenderer, #[case] name: &str, #[case] expected: &str) {
		let node = tag(name, "t").unwrap();
		assert_eq!(renderer.render(&node).unwrap(), expected);
	}

	#[rstest]
	fn test_unary_tag_renders_nothing(renderer: MarkdownRenderer) {
		assert_eq!(renderer.render(&tag("hr", ()).unwrap()).unwrap(), "");
	}

	#[rstest]
	fn test_nested_document(renderer: MarkdownRenderer) {
		let registry = Registry::new();
		let node = Tag::build_with(&registry, "div", (), |div| {
			div.tag("h1", "heading 1")?;
			div.tag("p", "para 1")?;
			div.tag_with("div", (), |d2| {
				d2.tag_with("p", (), |p| {
					p.tag("strong", "This is a link: ")?;
					p.tag("a", ("click", attrs! { "href" => "https://google.com" }))?;
					Ok("<- click that")
				})
			})
		})
		.unwrap();

		assert_eq!(
			renderer.render(&node).unwrap(),
			"# heading 1\n\npara 1\n\n**This is a link: **[click](https://google.com)<- click that\n\n\n\n\n\n"
		);
	}

	#[rstest]
	fn test_cached_block_keys_are_prefixed() {
		let store = Arc::new(weft_cache::InMemoryCache::new());
		store.set("k", "<h1>T</h1>".to_string());
		let renderer = MarkdownRenderer::with_store(store.clone());
		let node: Node = CachedBlock::new_in(&Registry::new(), "k", |b| b.tag("h1", "T")).into();

		assert_eq!(renderer.render(&node).unwrap(), "# T\n\n");
		assert_eq!(store.get("markdown:k"), Some("# T\n\n".to_string()));
	}
}
