//! HTML dialect.

use crate::escape::html_escape;
use crate::options::RenderOptions;
use crate::renderer::{Dialect, Renderer, shared_store};
use std::borrow::Cow;
use std::sync::Arc;
use weft_cache::CacheStore;
use weft_core::{
	AttrValue, Attributes, CachedBlock, ComponentNode, ContentTag, Node, TagSet, TextNode,
	UnaryTag, Visitor,
};

/// Elements that are always rendered self-closing.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Tag name that renders as a full document when it has content.
///
/// The preamble is emitted wherever such a tag appears in the tree, so a
/// document is expected to be the root.
pub const DOCUMENT_TAG: &str = "html";

const DOCTYPE: &str = "<!DOCTYPE html>\n";
const LINE_BREAK: &str = "\n";

/// Returns `true` for elements that never have content.
pub fn is_void_element(name: &str) -> bool {
	VOID_ELEMENTS.contains(&name)
}

/// Renders node trees as HTML.
///
/// # Example
///
/// ```
/// use weft_core::{attrs, tag};
/// use weft_render::{HtmlRenderer, Renderer};
///
/// let node = tag("h1", ("Hello", attrs! { "id" => "title", "class" => ["c1", "c2"] })).unwrap();
/// let html = HtmlRenderer::new().render(&node).unwrap();
///
/// assert_eq!(html, r#"<h1 id="title" class="c1 c2">Hello</h1>"#);
/// ```
#[derive(Clone)]
pub struct HtmlRenderer {
	store: Arc<dyn CacheStore>,
	options: RenderOptions,
}

impl Default for HtmlRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl HtmlRenderer {
	/// Creates a renderer over the process-wide fragment store.
	pub fn new() -> Self {
		Self {
			store: shared_store(),
			options: RenderOptions::default(),
		}
	}

	/// Creates a renderer over an explicit fragment store.
	pub fn with_store(store: Arc<dyn CacheStore>) -> Self {
		Self {
			store,
			options: RenderOptions::default(),
		}
	}

	/// Replaces the options.
	pub fn with_options(mut self, options: RenderOptions) -> Self {
		self.options = options;
		self
	}

	/// The options in use.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// The fragment store consulted at cached blocks.
	pub fn store(&self) -> &Arc<dyn CacheStore> {
		&self.store
	}

	/// Store key of a cached block under these options.
	///
	/// Fragments rendered with different escaping, line breaks or document
	/// language never share an entry.
	///
	/// ```
	/// use weft_render::{HtmlRenderer, RenderOptions};
	///
	/// let renderer = HtmlRenderer::new().with_options(RenderOptions::new().escape(true));
	/// assert_eq!(renderer.fragment_key("nav"), "html:escape:compact:en:nav");
	/// ```
	pub fn fragment_key(&self, key: &str) -> String {
		let escape = if self.options.escape { "escape" } else { "raw" };
		let layout = if self.options.line_breaks { "lines" } else { "compact" };
		format!("html:{escape}:{layout}:{}:{key}", self.options.lang)
	}

	fn escaped<'a>(&self, text: &'a str) -> Cow<'a, str> {
		if self.options.escape {
			html_escape(text)
		} else {
			Cow::Borrowed(text)
		}
	}

	/// Writes `<name` and the attributes. A `document` tag is preceded by the
	/// doctype and gets the configured `lang` unless it carries one.
	fn open_tag(&self, out: &mut String, name: &str, attributes: &Attributes, document: bool) {
		if document {
			out.push_str(DOCTYPE);
		}
		out.push('<');
		out.push_str(name);
		if document && !attributes.contains_key("lang") {
			let mut with_lang = Attributes::new().with("lang", self.options.lang.as_str());
			for (attr, value) in attributes.iter() {
				with_lang.insert(attr, value.clone());
			}
			self.push_attributes(out, None, &with_lang);
		} else {
			self.push_attributes(out, None, attributes);
		}
	}

	fn push_attributes(&self, out: &mut String, prefix: Option<&str>, attributes: &Attributes) {
		for (name, value) in attributes.iter() {
			let name: Cow<'_, str> = match prefix {
				Some(prefix) => Cow::Owned(format!("{prefix}-{name}")),
				None => Cow::Borrowed(name),
			};
			match value {
				AttrValue::List(values) => {
					out.push(' ');
					out.push_str(&name);
					out.push_str("=\"");
					out.push_str(&self.escaped(&values.join(" ")));
					out.push('"');
				}
				AttrValue::Bool(true) => {
					out.push(' ');
					out.push_str(&name);
				}
				AttrValue::Bool(false) => {}
				AttrValue::Map(nested) => self.push_attributes(out, Some(&name), nested),
			}
		}
	}

	fn self_closing(&self, name: &str, attributes: &Attributes) -> String {
		let mut out = String::new();
		self.open_tag(&mut out, name, attributes, false);
		out.push_str(" />");
		out
	}
}

impl Visitor for HtmlRenderer {
	type Output = String;

	fn visit_unary_tag(&self, tag: &UnaryTag) -> weft_core::Result<String> {
		Ok(self.self_closing(tag.name(), tag.attributes()))
	}

	fn visit_content_tag(&self, tag: &ContentTag) -> weft_core::Result<String> {
		if is_void_element(tag.name()) {
			return Ok(self.self_closing(tag.name(), tag.attributes()));
		}

		let content = self.visit(tag.content())?;
		let mut out = String::with_capacity(content.len() + 2 * tag.name().len() + 5);
		self.open_tag(&mut out, tag.name(), tag.attributes(), tag.name() == DOCUMENT_TAG);
		out.push('>');
		let wrap = self.options.line_breaks
			&& matches!(tag.content(), Node::TagSet(set) if !set.is_empty());
		if wrap {
			out.push_str(LINE_BREAK);
		}
		out.push_str(&content);
		if wrap {
			out.push_str(LINE_BREAK);
		}
		out.push_str("</");
		out.push_str(tag.name());
		out.push('>');
		Ok(out)
	}

	fn visit_text_node(&self, text: &TextNode) -> weft_core::Result<String> {
		Ok(self.escaped(text.as_str()).into_owned())
	}

	fn visit_tag_set(&self, set: &TagSet) -> weft_core::Result<String> {
		let parts = set
			.iter()
			.map(|child| self.visit(child))
			.collect::<weft_core::Result<Vec<_>>>()?;
		let separator = if self.options.line_breaks { LINE_BREAK } else { "" };
		Ok(parts.join(separator))
	}

	fn visit_cached_block(&self, block: &CachedBlock) -> weft_core::Result<String> {
		self.store
			.as_ref()
			.fetch_dyn(&self.fragment_key(block.key()), || self.visit_tag_set(block.children()?))
	}
}

impl Renderer for HtmlRenderer {
	fn dialect(&self) -> Dialect {
		Dialect::Html
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

impl std::fmt::Debug for HtmlRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HtmlRenderer")
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use weft_cache::InMemoryCache;
	use weft_core::{Registry, Tag, attrs, tag};

	#[fixture]
	fn renderer() -> HtmlRenderer {
		HtmlRenderer::with_store(Arc::new(InMemoryCache::new()))
	}

	#[rstest]
	#[case(tag("br", ()).unwrap(), "<br />")]
	#[case(tag("html", ()).unwrap(), "<html />")]
	#[case(tag("p", "Hi").unwrap(), "<p>Hi</p>")]
	#[case(tag("input", attrs! { "type" => "text", "name" => "email" }).unwrap(), r#"<input type="text" name="email" />"#)]
	#[case(tag("button", ("Go", attrs! { "disabled" => true, "hidden" => false })).unwrap(), "<button disabled>Go</button>")]
	#[case(tag("div", attrs! { "data" => attrs! { "foo" => 1, "bar" => "x" } }).unwrap(), r#"<div data-foo="1" data-bar="x" />"#)]
	#[case(tag("div", attrs! { "data" => attrs! { "on" => true, "off" => false } }).unwrap(), "<div data-on />")]
	fn test_render(renderer: HtmlRenderer, #[case] node: Node, #[case] expected: &str) {
		assert_eq!(renderer.render(&node).unwrap(), expected);
	}

	#[rstest]
	fn test_void_element_self_closes_with_block(renderer: HtmlRenderer) {
		let node = Tag::build_with(&Registry::new(), "img", attrs! { "src" => "a.png" }, |b| {
			b.text("ignored")
		})
		.unwrap();

		assert_eq!(renderer.render(&node).unwrap(), r#"<img src="a.png" />"#);
	}

	#[rstest]
	fn test_tag_set_concatenates_without_separator(renderer: HtmlRenderer) {
		let set = TagSet::build_in(&Registry::new(), |b| {
			b.tag("h1", "T")?;
			b.tag("p", "P")
		})
		.unwrap();

		assert_eq!(renderer.render_tag_set(&set).unwrap(), "<h1>T</h1><p>P</p>");
	}

	#[rstest]
	fn test_line_breaks_variant(renderer: HtmlRenderer) {
		let renderer = renderer.with_options(RenderOptions::new().line_breaks(true));
		let node = Tag::build_with(&Registry::new(), "div", attrs! { "class" => "box" }, |b| {
			b.tag("p", "para")?;
			Ok("free text")
		})
		.unwrap();

		assert_eq!(
			renderer.render(&node).unwrap(),
			"<div class=\"box\">\n<p>para</p>\nfree text\n</div>"
		);
	}

	#[rstest]
	fn test_text_is_not_escaped_by_default(renderer: HtmlRenderer) {
		let node = tag("p", "<b>bold</b>").unwrap();
		assert_eq!(renderer.render(&node).unwrap(), "<p><b>bold</b></p>");
	}

	#[rstest]
	fn test_escape_option(renderer: HtmlRenderer) {
		let renderer = renderer.with_options(RenderOptions::new().escape(true));
		let node = tag("p", ("a < b", attrs! { "title" => "\"q\"" })).unwrap();

		assert_eq!(
			renderer.render(&node).unwrap(),
			r#"<p title="&quot;q&quot;">a &lt; b</p>"#
		);
	}

	#[rstest]
	#[case(attrs! {}, "<!DOCTYPE html>\n<html lang=\"en\"><body>x</body></html>")]
	#[case(attrs! { "lang" => "fr" }, "<!DOCTYPE html>\n<html lang=\"fr\"><body>x</body></html>")]
	fn test_document_tag(renderer: HtmlRenderer, #[case] attributes: Attributes, #[case] expected: &str) {
		let node = Tag::build_with(&Registry::new(), "html", attributes, |b| b.tag("body", "x")).unwrap();
		assert_eq!(renderer.render(&node).unwrap(), expected);
	}

	#[rstest]
	#[case(RenderOptions::new(), "html:raw:compact:en:k")]
	#[case(RenderOptions::new().escape(true), "html:escape:compact:en:k")]
	#[case(RenderOptions::new().line_breaks(true).lang("de"), "html:raw:lines:de:k")]
	fn test_fragment_key_follows_options(
		renderer: HtmlRenderer,
		#[case] options: RenderOptions,
		#[case] expected: &str,
	) {
		assert_eq!(renderer.with_options(options).fragment_key("k"), expected);
	}
}
