//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key; list values such as
/// `exclude` are replaced as a whole, never appended.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("base_url", "")?
        .set_default("html_file", crate::config::DEFAULT_HTML_FILE)?
        .set_default("sitemap_file", crate::sitemap::DEFAULT_SITEMAP_FILE)?
        .set_default("sitemap", true)?
        .set_default("exclude", crate::tree::exclude::DEFAULT_EXCLUDED.to_vec())?
        .set_default("sitemap_order", "sorted")?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
