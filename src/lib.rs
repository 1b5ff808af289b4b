//! Dirsite: static folder browser and sitemap generator
//!
//! Walks a directory once and produces two documents: a self-contained HTML
//! page showing the tree as collapsible folders with view/download links for
//! every file, and a sitemap protocol XML file listing every file under a
//! base URL.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod render;
pub mod sitemap;
pub mod tree;
