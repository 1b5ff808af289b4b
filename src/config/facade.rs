//! Config loader facade: assembles the sources and deserializes the result.

use super::merge::merge_policy;
use super::sources::{environment, explicit_file, global_file};
use super::GeneratorConfig;
use crate::error::GenerateError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, an optional explicit file and
    /// the environment.
    pub fn load(explicit: Option<&Path>) -> Result<GeneratorConfig, GenerateError> {
        Self::load_with_global(global_file::global_config_path(), explicit)
    }

    /// Load with a caller-chosen global config path (`None` skips it)
    pub fn load_with_global(
        global: Option<PathBuf>,
        explicit: Option<&Path>,
    ) -> Result<GeneratorConfig, GenerateError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder, global.as_deref())?;
        if let Some(path) = explicit {
            debug!(config_path = %path.display(), "Loading explicit configuration file");
            builder = explicit_file::add_to_builder(builder, path);
        }
        builder = environment::add_to_builder(builder);

        let config: GeneratorConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
