//! Integration tests for swapping renderers over the same tree

use rstest::{fixture, rstest};
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use weft::prelude::*;
use weft::weft_core::Tag;
use weft::{AstRenderer, Dialect, HtmlRenderer, InMemoryCache, MarkdownRenderer, Registry};

#[fixture]
fn document() -> Node {
	let registry = Registry::new();
	Tag::build_with(&registry, "div", (), |div| {
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
	.unwrap()
}

#[rstest]
fn test_markdown_document(document: Node) {
	assert_eq!(
		document.render_with(&MarkdownRenderer::new()).unwrap(),
		"# heading 1\n\npara 1\n\n**This is a link: **[click](https://google.com)<- click that\n\n\n\n\n\n"
	);
}

#[rstest]
fn test_html_document(document: Node) {
	let renderer = HtmlRenderer::with_store(Arc::new(InMemoryCache::new()));
	assert_eq!(
		document.render_with(&renderer).unwrap(),
		r#"<div><h1>heading 1</h1><p>para 1</p><div><p><strong>This is a link: </strong><a href="https://google.com">click</a><- click that</p></div></div>"#
	);
}

#[rstest]
fn test_markdown_list() {
	let registry = Registry::new();
	let node = Tag::build_with(&registry, "ul", (), |ul| {
		ul.tag("li", "one")?;
		ul.tag_with("li", (), |li| li.tag("em", "two"))
	})
	.unwrap();

	assert_eq!(
		node.render_with(&MarkdownRenderer::new()).unwrap(),
		"* one\n* _two_\n\n\n"
	);
}

#[rstest]
fn test_ast_document(document: Node) {
	let value = AstRenderer::new().to_value(&document).unwrap();

	assert_eq!(value["variant"], "content_tag");
	assert_eq!(value["name"], "div");
	assert_eq!(value["content"]["variant"], "tag_set");
	assert_eq!(
		value["content"]["children"][0],
		json!({
			"variant": "content_tag",
			"name": "h1",
			"attributes": {},
			"content": { "variant": "text_node", "content": "heading 1" }
		})
	);
}

#[rstest]
fn test_ast_pretty_output_parses(document: Node) {
	let rendered = document
		.render_with(&AstRenderer::new().pretty(true))
		.unwrap();

	assert!(rendered.contains('\n'));
	let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
	assert_eq!(value, AstRenderer::new().to_value(&document).unwrap());
}

#[rstest]
#[serial(default_renderer)]
fn test_default_renderer_swap(document: Node) {
	let previous = weft::set_default_renderer(Arc::new(MarkdownRenderer::new()));
	assert_eq!(weft::default_renderer().dialect(), Dialect::Markdown);
	assert!(weft::render(&document).unwrap().starts_with("# heading 1"));

	weft::set_default_renderer(previous);
	assert_eq!(weft::default_renderer().dialect(), Dialect::Html);
	assert!(weft::render(&document).unwrap().starts_with("<div>"));
}
