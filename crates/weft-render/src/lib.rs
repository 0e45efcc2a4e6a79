//! Weft Render - renderers for weft node trees
//!
//! A renderer walks a node tree through the [`weft_core::Visitor`]
//! protocol and produces text. Three dialects are provided:
//!
//! - [`HtmlRenderer`]: HTML with void elements, boolean and nested attribute
//!   expansion, and a full-document preamble for the `html` tag
//! - [`MarkdownRenderer`]: a fixed tag to Markdown table
//! - [`AstRenderer`]: a JSON structure mirroring the node variants
//!
//! Cached blocks are the only place a renderer touches shared state: their
//! rendered text is fetched from, or stored into, the renderer's
//! [`weft_cache::CacheStore`].
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use weft_cache::InMemoryCache;
//! use weft_core::{Registry, TagSet};
//! use weft_render::{HtmlRenderer, RenderOptions, Renderer};
//!
//! let set = TagSet::build_in(&Registry::new(), |b| {
//!     b.tag("h1", "Title")?;
//!     b.tag("p", "Paragraph")
//! })
//! .unwrap();
//!
//! let renderer = HtmlRenderer::with_store(Arc::new(InMemoryCache::new()))
//!     .with_options(RenderOptions::new().line_breaks(true));
//!
//! assert_eq!(renderer.render_tag_set(&set).unwrap(), "<h1>Title</h1>\n<p>Paragraph</p>");
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod escape;
pub mod options;
pub mod renderer;

pub use config::{CacheBackend, RendererConfig};
pub use dialect::{AstNode, AstRenderer, HtmlRenderer, MarkdownRenderer};
pub use error::{ConfigError, RenderError, Result};
pub use options::RenderOptions;
pub use renderer::{
	Dialect, RenderClass, RenderToString, Renderer, default_renderer, render, render_with,
	set_default_renderer, shared_store,
};
