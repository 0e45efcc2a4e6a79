//! Weft Core - markup node trees and the construction DSL
//!
//! Builds an in-memory tree of markup nodes from construction blocks. The
//! tree is later turned into text (or structure) by a renderer from
//! `weft-render`; this crate never produces output itself.
//!
//! ## Architecture
//!
//! - [`node`]: the [`Node`] sum type and the [`Visitor`] protocol renderers implement
//! - [`attributes`]: normalized tag attributes
//! - [`tag`]: tag construction from a name, content and attributes
//! - [`builder`]: the [`Builder`] handed to every construction block, and [`TagSet`]
//! - [`component`]: component classes, props, slots and instances
//! - [`registry`]: name to component class mapping and dynamic dispatch
//! - [`cached_block`]: subtrees whose rendered text goes through the fragment cache
//!
//! ## Example
//!
//! ```
//! use weft_core::{TagSet, attrs};
//!
//! let page = TagSet::build(|b| {
//!     b.tag_with("div", attrs! { "class" => "box" }, |b| {
//!         b.tag("h1", "Title")?;
//!         b.tag("p", "Paragraph")
//!     })
//! })
//! .unwrap();
//!
//! assert_eq!(page.len(), 1);
//! ```
//!
//! ## Laziness
//!
//! Tags and text are built eagerly. Component children, component content,
//! slot defaults and cached block children are built on first access and
//! memoized on the node, so each is computed at most once.
//!
//! Nodes are single-threaded values (`!Send`). The registry is shared and
//! internally locked.

pub mod attributes;
pub mod builder;
pub mod cached_block;
pub mod component;
pub mod error;
pub mod node;
pub mod registry;
pub mod tag;

pub use attributes::{AttrValue, Attributes};
pub use builder::{Appended, Builder, CallArgs, TagSet, Trailing};
pub use cached_block::CachedBlock;
pub use component::{
	Component, ComponentClass, ComponentContext, ComponentNode, ContentBlock, PropSpec, Props,
	Schema, SlotSpec,
};
pub use error::{Error, Result};
pub use node::{ContentTag, Node, NodeKind, TextNode, UnaryTag, Visitor};
pub use registry::{Registry, Resolution};
pub use tag::{Content, Tag, TagArgs, tag, tag_with, text};
pub use weft_cache::CacheKey;
