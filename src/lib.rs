//! # Weft
//!
//! Declarative markup trees for Rust.
//!
//! Weft builds an in-memory tree of markup nodes from construction blocks,
//! then serializes it through a swappable renderer. Subtrees can be memoized
//! in a fragment cache, and reusable pieces are written as components with
//! declared props and slots.
//!
//! ## Crates
//!
//! - [`weft_core`]: nodes, the builder DSL, components and the registry
//! - [`weft_render`]: HTML, Markdown and AST renderers
//! - [`weft_cache`]: fragment cache stores
//!
//! ## Quick Start
//!
//! ```
//! use weft::prelude::*;
//!
//! let page = weft::tag_with("div", attrs! { "class" => "box" }, |b| {
//!     b.tag("h1", "Title")?;
//!     b.tag("p", "Paragraph")
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     weft::render(&page).unwrap(),
//!     r#"<div class="box"><h1>Title</h1><p>Paragraph</p></div>"#
//! );
//! ```
//!
//! ## Components
//!
//! ```
//! use std::sync::Arc;
//! use weft::prelude::*;
//!
//! let input = Arc::new(
//!     ComponentClass::from_fn(|cx, b| {
//!         let name = cx.prop_str("name").unwrap_or_default().to_string();
//!         b.tag_with("div", attrs! { "class" => "input" }, move |b| {
//!             b.tag("input", attrs! { "type" => "text", "name" => name })
//!         })
//!     })
//!     .prop("name", PropSpec::required()),
//! );
//!
//! let html = input.render(props! { "name" => "email" }).unwrap();
//! assert_eq!(html, r#"<div class="input"><input type="text" name="email" /></div>"#);
//! ```

pub use weft_cache;
pub use weft_core;
pub use weft_render;

pub use weft_cache::{CacheKey, CacheStatistics, CacheStore, InMemoryCache, NullCache};
pub use weft_core::{
	AttrValue, Attributes, Builder, CachedBlock, Component, ComponentClass, ComponentContext,
	ComponentNode, Error, Node, NodeKind, PropSpec, Props, Registry, Schema, SlotSpec, TagSet,
	Trailing, Visitor, attrs, props,
};
pub use weft_render::{
	AstRenderer, CacheBackend, ConfigError, Dialect, HtmlRenderer, MarkdownRenderer, RenderClass,
	RenderError, RenderOptions, RenderToString, Renderer, RendererConfig, default_renderer,
	set_default_renderer,
};

use weft_core::tag::{Content, TagArgs};

/// Builds a tag, see [`weft_core::Tag::build`].
pub fn tag(name: impl Into<String>, args: impl Into<TagArgs>) -> weft_core::Result<Node> {
	weft_core::tag(name, args)
}

/// Builds a tag whose content is the tag set produced by `block`.
pub fn tag_with<F, R>(
	name: impl Into<String>,
	attributes: impl Into<Attributes>,
	block: F,
) -> weft_core::Result<Node>
where
	F: FnOnce(&mut Builder) -> weft_core::Result<R>,
	R: Into<Trailing>,
{
	weft_core::tag_with(name, attributes, block)
}

/// Wraps a value with a textual representation as a text node.
pub fn text(value: impl Into<Content>) -> weft_core::Result<Node> {
	weft_core::text(value)
}

/// Wraps `block` in a fragment-cached block under the key derived from `key`.
pub fn cache<K, F, R>(key: &K, block: F) -> Node
where
	K: CacheKey + ?Sized,
	F: Fn(&mut Builder) -> weft_core::Result<R> + 'static,
	R: Into<Trailing>,
{
	CachedBlock::new(key, block).into()
}

/// Renders with the process-wide default renderer.
pub fn render(node: &Node) -> weft_render::Result<String> {
	weft_render::render(node)
}

/// Renders with an explicit renderer.
pub fn render_with(renderer: &dyn Renderer, node: &Node) -> weft_render::Result<String> {
	weft_render::render_with(renderer, node)
}

/// Everything needed to write templates.
pub mod prelude {
	pub use crate::{
		AttrValue, Attributes, Builder, CacheKey, Component, ComponentClass, ComponentContext,
		Node, PropSpec, Props, RenderClass, RenderToString, Renderer, Schema, SlotSpec, TagSet,
		Trailing,
	};
	pub use crate::{attrs, props};
}
