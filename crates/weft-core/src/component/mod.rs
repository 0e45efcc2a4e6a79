//! Component model.
//!
//! A component class pairs a [`Schema`] of declared props and slots with a
//! render hook. Instantiating a class resolves the caller's props against
//! the schema, records the slot fills made by the caller's content block,
//! and yields a [`ComponentNode`] whose children are built on first access.
//!
//! ## Usage
//!
//! ```
//! use weft_core::{ComponentClass, PropSpec, Registry, SlotSpec, TagSet, attrs, props};
//!
//! let registry = Registry::new();
//!
//! ComponentClass::from_fn(|cx, b| {
//!     let title = cx.slot("title")?;
//!     let body = cx.content()?;
//!     b.tag_with("section", attrs! { "class" => cx.prop_str("variant").unwrap_or("plain") }, move |b| {
//!         b.child(title.clone());
//!         b.child(body.clone());
//!         Ok(())
//!     })
//! })
//! .named("card")
//! .prop("variant", PropSpec::default("plain"))
//! .slot("title", SlotSpec::text("Untitled"))
//! .register_in(&registry);
//!
//! let page = TagSet::build_in(&registry, |b| {
//!     b.component_with("card", props! { "variant" => "wide" }, |b| {
//!         b.slot("title", "Hello")?;
//!         b.tag("p", "Body")
//!     })
//! })
//! .unwrap();
//!
//! assert_eq!(page.len(), 1);
//! ```

mod class;
mod instance;
mod props;
mod schema;
mod slots;
mod r#trait;

pub use class::ComponentClass;
pub use instance::{ComponentContext, ComponentNode, ContentBlock};
pub use props::Props;
pub use schema::{PropSpec, Schema, SlotProducer, SlotSpec, Transform};
pub(crate) use slots::SlotRecorder;
pub use r#trait::Component;
