//! Configuration System
//!
//! Layered configuration for a generator run. Sources, lowest precedence first:
//! built-in defaults, the global config file, an explicit `--config` file,
//! `DIRSITE_*` environment variables. CLI flags are applied on top by the
//! binary before validation.

use crate::error::GenerateError;
use crate::logging::LoggingConfig;
use crate::render::RenderOptions;
use crate::sitemap::{SitemapOrder, DEFAULT_SITEMAP_FILE};
use crate::tree::exclude::{ExclusionSet, DEFAULT_EXCLUDED};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Default name of the rendered folder tree page
pub const DEFAULT_HTML_FILE: &str = "folder_tree.html";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Traversal root (defaults to the current directory)
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Prefix of every sitemap location; not validated
    #[serde(default)]
    pub base_url: String,

    /// Directory the documents are written to (defaults to the root, so
    /// the page's relative links resolve)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default = "default_html_file")]
    pub html_file: String,

    #[serde(default = "default_sitemap_file")]
    pub sitemap_file: String,

    /// Generate the sitemap (and link it from the page)
    #[serde(default = "default_true")]
    pub sitemap: bool,

    /// Directory basenames that are never descended into
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub sitemap_order: SitemapOrder,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_html_file() -> String {
    DEFAULT_HTML_FILE.to_string()
}

fn default_sitemap_file() -> String {
    DEFAULT_SITEMAP_FILE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: None,
            base_url: String::new(),
            output_dir: None,
            html_file: default_html_file(),
            sitemap_file: default_sitemap_file(),
            sitemap: true,
            exclude: default_exclude(),
            sitemap_order: SitemapOrder::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    OutputFile(String, String),
    Exclude(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::OutputFile(key, msg) => write!(f, "{}: {}", key, msg),
            ValidationError::Exclude(msg) => write!(f, "exclude: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GeneratorConfig {
    /// Traversal root, defaulting to the current directory
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Output directory, defaulting to the traversal root
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| self.root_dir())
    }

    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::new(self.exclude.iter().cloned())
    }

    pub fn render_options(&self) -> RenderOptions {
        if self.sitemap {
            RenderOptions::with_sitemap_link(self.sitemap_file.clone())
        } else {
            RenderOptions::default()
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (key, name) in [("html_file", &self.html_file), ("sitemap_file", &self.sitemap_file)] {
            if let Err(msg) = validate_file_name(name) {
                errors.push(ValidationError::OutputFile(key.to_string(), msg));
            }
        }

        if self.sitemap && self.html_file == self.sitemap_file {
            errors.push(ValidationError::OutputFile(
                "sitemap_file".to_string(),
                format!("must differ from html_file ('{}')", self.html_file),
            ));
        }

        for name in &self.exclude {
            if name.is_empty() {
                errors.push(ValidationError::Exclude(
                    "entries cannot be empty".to_string(),
                ));
            } else if name.contains('/') || name.contains('\\') {
                errors.push(ValidationError::Exclude(format!(
                    "'{}' must be a directory name, not a path",
                    name
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into a single error
    pub fn ensure_valid(&self) -> Result<(), GenerateError> {
        self.validate().map_err(|errors| {
            let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
            GenerateError::Config(messages.join("; "))
        })
    }
}

fn validate_file_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("cannot be empty".to_string());
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!("'{}' must be a file name, not a path", name));
    }
    if name == "." || name == ".." {
        return Err(format!("'{}' is not a file name", name));
    }
    Ok(())
}
