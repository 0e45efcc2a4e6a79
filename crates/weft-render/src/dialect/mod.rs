//! Output dialects.
//!
//! Each dialect is a [`weft_core::Visitor`] with one handler per node
//! variant, wrapped in the [`Renderer`](crate::Renderer) contract.

mod ast;
mod html;
mod markdown;

pub use ast::{AstNode, AstRenderer};
pub use html::{DOCUMENT_TAG, HtmlRenderer, VOID_ELEMENTS, is_void_element};
pub use markdown::MarkdownRenderer;
