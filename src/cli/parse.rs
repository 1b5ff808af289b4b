//! CLI parse: clap types for dirsite. No behavior; definitions only.

use crate::sitemap::SitemapOrder;
use clap::Parser;
use std::path::PathBuf;

/// Render a directory as a collapsible HTML file browser and an XML sitemap
#[derive(Parser, Debug)]
#[command(name = "dirsite", version)]
#[command(about = "Render a directory tree as folder_tree.html and sitemap.xml")]
pub struct Cli {
    /// Directory to render (default: current directory)
    pub root: Option<PathBuf>,

    /// Base URL prepended to every sitemap location
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory the documents are written to (default: ROOT)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Only render the folder tree; no sitemap and no sitemap button
    #[arg(long)]
    pub no_sitemap: bool,

    /// Directory name never descended into; repeat to exclude several.
    /// Replaces the configured list.
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Sitemap entry order
    #[arg(long, value_enum)]
    pub sitemap_order: Option<SitemapOrder>,

    /// Configuration file path (layered over the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
