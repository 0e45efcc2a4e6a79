//! The renderer contract and the process-wide default renderer.

use crate::dialect::HtmlRenderer;
use crate::error::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use weft_cache::InMemoryCache;
use weft_core::{CachedBlock, ComponentClass, ComponentNode, Node, Props, TagSet};

static DEFAULT_RENDERER: OnceLock<RwLock<Arc<dyn Renderer>>> = OnceLock::new();
static SHARED_STORE: OnceLock<Arc<InMemoryCache>> = OnceLock::new();

/// Output dialect of a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
	/// HTML markup.
	#[default]
	Html,
	/// Markdown text.
	Markdown,
	/// JSON structure mirroring the node variants.
	Ast,
}

impl Dialect {
	/// Lowercase name of the dialect.
	pub fn as_str(&self) -> &'static str {
		match self {
			Dialect::Html => "html",
			Dialect::Markdown => "markdown",
			Dialect::Ast => "ast",
		}
	}
}

impl std::fmt::Display for Dialect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Turns node trees into text.
///
/// Renderers hold no per-render state; one instance can render any number
/// of trees. The only shared state is the fragment cache store a dialect
/// may consult at cached blocks.
pub trait Renderer: Send + Sync {
	/// The output dialect.
	fn dialect(&self) -> Dialect;

	/// Renders any node.
	fn render(&self, node: &Node) -> Result<String>;

	/// Renders a tag set.
	fn render_tag_set(&self, set: &TagSet) -> Result<String>;

	/// Renders a component instance through its children.
	fn render_component(&self, component: &ComponentNode) -> Result<String>;
}

/// The process-wide fragment store used by renderers built with `new()`.
pub fn shared_store() -> Arc<InMemoryCache> {
	Arc::clone(SHARED_STORE.get_or_init(|| Arc::new(InMemoryCache::new())))
}

fn default_slot() -> &'static RwLock<Arc<dyn Renderer>> {
	DEFAULT_RENDERER.get_or_init(|| RwLock::new(Arc::new(HtmlRenderer::new())))
}

/// The process-wide default renderer.
///
/// An [`HtmlRenderer`] over [`shared_store`] until replaced.
pub fn default_renderer() -> Arc<dyn Renderer> {
	Arc::clone(&default_slot().read())
}

/// Replaces the process-wide default renderer, returning the previous one.
pub fn set_default_renderer(renderer: Arc<dyn Renderer>) -> Arc<dyn Renderer> {
	tracing::debug!(dialect = %renderer.dialect(), "default renderer replaced");
	std::mem::replace(&mut *default_slot().write(), renderer)
}

/// Renders a node with the default renderer.
pub fn render(node: &Node) -> Result<String> {
	default_renderer().render(node)
}

/// Renders a node with an explicit renderer.
pub fn render_with(renderer: &dyn Renderer, node: &Node) -> Result<String> {
	renderer.render(node)
}

/// Rendering shortcut for anything that forms a tree.
pub trait RenderToString {
	/// Renders with the process-wide default renderer.
	fn render_to_string(&self) -> Result<String> {
		self.render_with(default_renderer().as_ref())
	}

	/// Renders with `renderer`.
	fn render_with(&self, renderer: &dyn Renderer) -> Result<String>;
}

impl RenderToString for Node {
	fn render_with(&self, renderer: &dyn Renderer) -> Result<String> {
		renderer.render(self)
	}
}

impl RenderToString for TagSet {
	fn render_with(&self, renderer: &dyn Renderer) -> Result<String> {
		renderer.render_tag_set(self)
	}
}

impl RenderToString for ComponentNode {
	fn render_with(&self, renderer: &dyn Renderer) -> Result<String> {
		renderer.render_component(self)
	}
}

impl RenderToString for CachedBlock {
	fn render_with(&self, renderer: &dyn Renderer) -> Result<String> {
		renderer.render(&Node::CachedBlock(self.clone()))
	}
}

/// Class-level rendering: instantiate and render in one call.
pub trait RenderClass {
	/// Instantiates the class with `props` and renders it with the default
	/// renderer.
	fn render(&self, props: impl Into<Props>) -> Result<String>;
}

impl RenderClass for Arc<ComponentClass> {
	fn render(&self, props: impl Into<Props>) -> Result<String> {
		self.instantiate(props)?.render_to_string()
	}
}
