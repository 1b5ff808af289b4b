//! Path canonicalization and web path conversion

use crate::error::GenerateError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::{Component, Path, PathBuf};

/// Characters escaped inside a URL path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Canonicalize the traversal root
///
/// Resolves `.`/`..` and symlinks so the root always has a basename to display,
/// and checks that it is a directory. Uses `dunce` so Windows roots do not
/// come back as verbatim `\\?\` paths.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, GenerateError> {
    let canonical = dunce::canonicalize(path)?;
    if !canonical.is_dir() {
        return Err(GenerateError::NotADirectory(canonical));
    }
    Ok(canonical)
}

/// Basename of a path, or the whole path when it has none (e.g. `/`)
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// URL path of `path` relative to `root`
///
/// Each component is percent-encoded and the components are joined with
/// forward slashes, so the result never depends on the host separator.
/// Non-UTF-8 names are converted lossily before encoding.
pub fn web_path(root: &Path, path: &Path) -> Result<String, GenerateError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        GenerateError::InvalidPath(format!(
            "{} is not inside {}",
            path.display(),
            root.display()
        ))
    })?;

    let segments: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => {
                Some(utf8_percent_encode(&segment.to_string_lossy(), SEGMENT).to_string())
            }
            _ => None,
        })
        .collect();

    Ok(segments.join("/"))
}

/// Guarantee a single trailing `/` on a non-empty base URL
///
/// An empty base URL stays empty so that locations become root-relative.
pub fn normalize_base_url(base_url: &str) -> String {
    let mut normalized = base_url.to_string();
    if !normalized.is_empty() && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}
