//! Environment source: `DIRSITE_*` variables.
//!
//! `DIRSITE_BASE_URL=https://example.org` sets `base_url`,
//! `DIRSITE_EXCLUDE=.git,target` sets the exclusion list and
//! `DIRSITE_LOGGING__LEVEL=debug` reaches into nested tables.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "DIRSITE";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(source())
}

fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("exclude")
        .try_parsing(true)
}
