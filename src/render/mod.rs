//! Markup rendering
//!
//! Turns a scanned [`Node`](crate::tree::Node) tree into the self-contained
//! folder browser page. Escaping helpers are shared with the sitemap.

pub mod escape;
pub mod html;
mod template;

pub use html::{render_document, render_node, render_tree, RenderContext, RenderOptions};
