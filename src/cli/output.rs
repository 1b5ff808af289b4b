//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::GenerateError;

/// Map domain errors to a string for CLI output.
///
/// Filesystem errors pass through untranslated.
pub fn map_error(e: &GenerateError) -> String {
    e.to_string()
}
