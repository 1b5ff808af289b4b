//! Folder browser rendering
//!
//! Each node renders to its own fragment; a directory's fragment is its header
//! plus the concatenated fragments of its children. No buffer is shared
//! between calls, so any subtree can be rendered and inspected on its own.

use crate::error::GenerateError;
use crate::render::escape::escape_html;
use crate::render::template;
use crate::tree::node::{Node, NodeKind};
use crate::tree::path::{canonicalize_root, web_path};
use crate::tree::scanner::Scanner;
use std::path::Path;
use tracing::{debug, instrument};

const INDENT: &str = "    ";

/// Options for the rendered page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target of the "View XML Sitemap" button; no button when `None`
    pub sitemap_link: Option<String>,
}

impl RenderOptions {
    pub fn with_sitemap_link(href: impl Into<String>) -> Self {
        Self {
            sitemap_link: Some(href.into()),
        }
    }
}

/// Immutable state for one render call
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Traversal root; file links are relative to it
    pub root: &'a Path,
    pub options: &'a RenderOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(root: &'a Path, options: &'a RenderOptions) -> Self {
        Self { root, options }
    }
}

/// Scan `root` with the default exclusions and render the page
pub fn render_tree(root: &Path, options: &RenderOptions) -> Result<String, GenerateError> {
    let root = canonicalize_root(root)?;
    let tree = Scanner::new(root).scan()?;
    render_document(&tree, options)
}

/// Render a scanned tree into a complete HTML document
///
/// `tree` is the root node; its path is the traversal root.
#[instrument(skip_all, fields(root = %tree.path.display()))]
pub fn render_document(tree: &Node, options: &RenderOptions) -> Result<String, GenerateError> {
    let ctx = RenderContext::new(&tree.path, options);
    let sitemap_link = options.sitemap_link.as_deref();

    let mut html = template::preamble(&tree.name, sitemap_link.is_some());
    html.push_str(&render_root(&ctx, tree)?);
    html.push_str(&template::epilogue(sitemap_link));

    debug!(bytes = html.len(), "Rendered folder tree document");
    Ok(html)
}

/// The root is always expanded and its container always visible
fn render_root(ctx: &RenderContext<'_>, root: &Node) -> Result<String, GenerateError> {
    let mut out = format!(
        "<div class=\"folder collapsible active\">{}</div>\n<div class=\"nested\" style=\"display:block;\">\n",
        escape_html(&root.name)
    );
    for child in &root.children {
        out.push_str(&render_node(ctx, child, 1)?);
    }
    out.push_str("</div>\n");
    Ok(out)
}

/// Render one node (and its subtree) at the given depth
pub fn render_node(
    ctx: &RenderContext<'_>,
    node: &Node,
    depth: usize,
) -> Result<String, GenerateError> {
    let indent = INDENT.repeat(depth);
    let name = escape_html(&node.name);

    match node.kind {
        NodeKind::File => render_file(ctx, node, &indent),
        NodeKind::Excluded => Ok(format!(
            "{indent}<div class=\"excluded\">(excluded: {name} folder)</div>\n"
        )),
        NodeKind::PermissionDenied => Ok(format!(
            "{indent}<div class=\"folder collapsible\">{name}</div>\n\
             {indent}<div class=\"nested\">\n\
             {indent}<div class=\"excluded\">(permission denied)</div>\n\
             {indent}</div>\n"
        )),
        NodeKind::Directory => {
            let mut out = format!(
                "{indent}<div class=\"folder collapsible\">{name}</div>\n\
                 {indent}<div class=\"nested\">\n"
            );
            for child in &node.children {
                out.push_str(&render_node(ctx, child, depth + 1)?);
            }
            out.push_str(&format!("{indent}</div>\n"));
            Ok(out)
        }
    }
}

fn render_file(
    ctx: &RenderContext<'_>,
    node: &Node,
    indent: &str,
) -> Result<String, GenerateError> {
    let href = escape_html(&web_path(ctx.root, &node.path)?);
    Ok(format!(
        "{indent}<div class=\"file\"><span>{}</span><span class=\"file-actions\">\
         <a href=\"{href}\" target=\"_blank\" class=\"btn btn-view\">View</a>\
         <a href=\"{href}\" download class=\"btn btn-download\">Download</a>\
         </span></div>\n",
        escape_html(&node.name)
    ))
}
