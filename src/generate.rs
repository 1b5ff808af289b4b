//! Generator driver
//!
//! Runs the tree renderer and the sitemap builder against one canonicalized
//! root and hands both documents to a [`DocumentSink`].

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::render::render_document;
use crate::sitemap::{render_sitemap, SitemapBuilder};
use crate::tree::node::TreeStats;
use crate::tree::path::canonicalize_root;
use crate::tree::scanner::Scanner;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Destination for generated documents
pub trait DocumentSink {
    /// Store `contents` under `name`, replacing any previous document
    fn write_document(&mut self, name: &str, contents: &str) -> Result<(), GenerateError>;
}

/// Writes documents as files into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl DocumentSink for DirectorySink {
    fn write_document(&mut self, name: &str, contents: &str) -> Result<(), GenerateError> {
        let path = self.dir.join(name);
        fs::write(&path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote document");
        Ok(())
    }
}

/// Outcome of a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Canonical traversal root
    pub root: PathBuf,
    pub html_file: String,
    /// Set when the sitemap was generated
    pub sitemap_file: Option<String>,
    pub stats: TreeStats,
    pub sitemap_entries: Option<usize>,
}

impl GenerationReport {
    /// Success message printed by the CLI
    pub fn summary(&self) -> String {
        match &self.sitemap_file {
            Some(sitemap) => format!("Generated {} and {} successfully!", self.html_file, sitemap),
            None => format!("Generated {} successfully!", self.html_file),
        }
    }
}

/// Generate the folder tree page and, if enabled, the sitemap
///
/// `today` is written into every sitemap `<lastmod>`.
#[instrument(skip_all, fields(root = %config.root_dir().display()))]
pub fn run(
    config: &GeneratorConfig,
    sink: &mut dyn DocumentSink,
    today: NaiveDate,
) -> Result<GenerationReport, GenerateError> {
    let start = Instant::now();
    let root = canonicalize_root(&config.root_dir())?;
    let exclusions = config.exclusions();
    info!(root = %root.display(), "Generating site files");

    let tree = Scanner::new(root.clone())
        .with_exclusions(exclusions.clone())
        .scan()?;
    let stats = tree.stats();
    let html = render_document(&tree, &config.render_options())?;
    sink.write_document(&config.html_file, &html)?;

    let sitemap_entries = if config.sitemap {
        let entries = SitemapBuilder::new(root.clone(), &config.base_url)
            .with_exclusions(exclusions)
            .with_sitemap_file(config.sitemap_file.clone())
            .with_order(config.sitemap_order)
            .with_lastmod(today)
            .entries()?;
        sink.write_document(&config.sitemap_file, &render_sitemap(&entries))?;
        Some(entries.len())
    } else {
        None
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
        files = stats.files,
        directories = stats.directories,
        excluded = stats.excluded,
        denied = stats.denied,
        sitemap_entries = ?sitemap_entries,
        duration_ms,
        "Generation complete"
    );

    Ok(GenerationReport {
        root,
        html_file: config.html_file.clone(),
        sitemap_file: config.sitemap.then(|| config.sitemap_file.clone()),
        stats,
        sitemap_entries,
    })
}
