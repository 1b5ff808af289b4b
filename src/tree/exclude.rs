//! Excluded directory names.

use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Built-in exclusions, used when nothing else is configured.
pub const DEFAULT_EXCLUDED: &[&str] = &[".git"];

/// Directory basenames that are never descended into.
///
/// Matching is exact and case-sensitive on the basename only; the position of
/// the directory in the tree does not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.names.contains(name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED.iter().copied())
    }
}
