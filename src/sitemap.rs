//! XML Sitemap
//!
//! Walks the traversal root with `walkdir` and lists every file as a sitemap
//! protocol 0.9 `<url>` entry under a base URL. Unlike the tree scanner, any
//! walk error fails the whole build.

use crate::error::GenerateError;
use crate::render::escape::escape_xml;
use crate::tree::exclude::ExclusionSet;
use crate::tree::path::{normalize_base_url, web_path};
use crate::tree::scanner::compare_entries;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Default sitemap file name; files with this basename are never listed
pub const DEFAULT_SITEMAP_FILE: &str = "sitemap.xml";

pub const CHANGE_FREQUENCY: &str = "monthly";
pub const PRIORITY: f32 = 0.8;

/// Order in which files are listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SitemapOrder {
    /// Same order as the folder tree: directories first, names ascending
    #[default]
    Sorted,
    /// Raw directory listing order of the platform
    Walk,
}

/// One `<url>` element
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub lastmod: NaiveDate,
    pub changefreq: &'static str,
    pub priority: f32,
}

impl SitemapEntry {
    fn to_xml(&self) -> String {
        format!(
            "   <url>\n      <loc>{}</loc>\n      <lastmod>{}</lastmod>\n      <changefreq>{}</changefreq>\n      <priority>{:.1}</priority>\n   </url>\n",
            escape_xml(&self.url),
            self.lastmod.format("%Y-%m-%d"),
            self.changefreq,
            self.priority
        )
    }
}

/// Builds the sitemap for one traversal root
pub struct SitemapBuilder {
    root: PathBuf,
    base_url: String,
    exclusions: ExclusionSet,
    sitemap_file: String,
    order: SitemapOrder,
    lastmod: NaiveDate,
}

impl SitemapBuilder {
    /// Create a builder dated today (local time)
    pub fn new(root: PathBuf, base_url: &str) -> Self {
        Self {
            root,
            base_url: normalize_base_url(base_url),
            exclusions: ExclusionSet::default(),
            sitemap_file: DEFAULT_SITEMAP_FILE.to_string(),
            order: SitemapOrder::default(),
            lastmod: Local::now().date_naive(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Name of the sitemap output; files with this basename are skipped
    pub fn with_sitemap_file(mut self, name: impl Into<String>) -> Self {
        self.sitemap_file = name.into();
        self
    }

    pub fn with_order(mut self, order: SitemapOrder) -> Self {
        self.order = order;
        self
    }

    /// Date written to every `<lastmod>`
    pub fn with_lastmod(mut self, lastmod: NaiveDate) -> Self {
        self.lastmod = lastmod;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Walk the root and collect one entry per file
    #[instrument(skip(self), fields(root = %self.root.display(), order = ?self.order))]
    pub fn entries(&self) -> Result<Vec<SitemapEntry>, GenerateError> {
        let mut walker = WalkDir::new(&self.root).min_depth(1).follow_links(false);
        if self.order == SitemapOrder::Sorted {
            walker = walker.sort_by(|a, b| {
                compare_entries(is_directory(a), a.file_name(), is_directory(b), b.file_name())
            });
        }

        let exclusions = &self.exclusions;
        let mut entries = Vec::new();
        for entry in walker
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && exclusions.contains(e.file_name())))
        {
            let entry = entry?;
            if is_directory(&entry) {
                continue;
            }
            if entry.file_name() == self.sitemap_file.as_str() {
                debug!(path = %entry.path().display(), "Skipping sitemap file");
                continue;
            }

            let web_path = web_path(&self.root, entry.path())?;
            entries.push(SitemapEntry {
                url: format!("{}{}", self.base_url, web_path),
                lastmod: self.lastmod,
                changefreq: CHANGE_FREQUENCY,
                priority: PRIORITY,
            });
        }

        debug!(entry_count = entries.len(), "Collected sitemap entries");
        Ok(entries)
    }

    /// Walk the root and serialize the sitemap document
    pub fn build(&self) -> Result<String, GenerateError> {
        Ok(render_sitemap(&self.entries()?))
    }
}

/// Wrap entries in the sitemap protocol envelope
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{}\">\n",
        SITEMAP_NAMESPACE
    );
    for entry in entries {
        xml.push_str(&entry.to_xml());
    }
    xml.push_str("</urlset>");
    xml
}

/// Directories, following symlinks so linked directories are never listed as files
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
