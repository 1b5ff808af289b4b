//! CLI route: resolves the run configuration and executes the generator.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, GeneratorConfig};
use crate::error::GenerateError;
use crate::generate::{self, DirectorySink};
use crate::logging::LoggingConfig;
use chrono::Local;
use tracing::{info, warn};

/// Runtime context for CLI execution: the fully merged configuration.
#[derive(Debug, Clone)]
pub struct RunContext {
    config: GeneratorConfig,
}

impl RunContext {
    /// Load configuration and apply CLI flags on top.
    /// Precedence: CLI flags > environment > explicit config file > global config file > defaults.
    pub fn new(cli: &Cli) -> Result<Self, GenerateError> {
        let config = ConfigLoader::load(cli.config.as_deref())?;
        Self::from_config(config, cli)
    }

    /// Apply CLI flags to an already loaded configuration and validate it.
    pub fn from_config(mut config: GeneratorConfig, cli: &Cli) -> Result<Self, GenerateError> {
        if let Some(ref root) = cli.root {
            config.root = Some(root.clone());
        }
        if let Some(ref base_url) = cli.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(ref output_dir) = cli.output_dir {
            config.output_dir = Some(output_dir.clone());
        }
        if cli.no_sitemap {
            config.sitemap = false;
        }
        if !cli.exclude.is_empty() {
            config.exclude = cli.exclude.clone();
        }
        if let Some(order) = cli.sitemap_order {
            config.sitemap_order = order;
        }
        apply_logging_flags(&mut config.logging, cli);

        config.ensure_valid()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn logging_config(&self) -> &LoggingConfig {
        &self.config.logging
    }

    /// Generate the documents into the output directory and return the success message.
    pub fn execute(&self) -> Result<String, GenerateError> {
        let output_dir = self.config.output_dir();
        let mut sink = DirectorySink::new(output_dir.clone());
        let report = generate::run(&self.config, &mut sink, Local::now().date_naive())?;
        if dunce::canonicalize(&output_dir).ok().as_ref() != Some(&report.root) {
            warn!(
                output_dir = %output_dir.display(),
                root = %report.root.display(),
                "Page written outside the root; its file links are relative to the root"
            );
        }
        info!(root = %report.root.display(), "Command completed successfully");
        Ok(report.summary())
    }
}

fn apply_logging_flags(logging: &mut LoggingConfig, cli: &Cli) {
    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }
}
