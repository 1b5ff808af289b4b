//! Directory scanner for building the rendered tree

use crate::error::GenerateError;
use crate::tree::exclude::ExclusionSet;
use crate::tree::node::Node;
use crate::tree::path;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// One entry of a directory listing
#[derive(Debug, Clone)]
pub struct Listing {
    pub path: PathBuf,
    pub name: OsString,
    /// Whether the entry is a directory, following symlinks
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Source of directory listings
///
/// The scanner only ever asks for the immediate children of one directory at
/// a time, so a failing listing stays local to that directory.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<Listing>>;
}

/// Lists directories from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<Listing>> {
        let mut listings = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            let is_symlink = file_type.is_symlink();
            // Dangling links have no target metadata and count as files
            let is_dir = if is_symlink {
                fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false)
            } else {
                file_type.is_dir()
            };
            listings.push(Listing {
                path,
                name: entry.file_name(),
                is_dir,
                is_symlink,
            });
        }
        Ok(listings)
    }
}

/// Tree ordering: directories first, then by name (byte order, case-sensitive)
pub fn compare_entries(a_is_dir: bool, a_name: &OsStr, b_is_dir: bool, b_name: &OsStr) -> Ordering {
    b_is_dir.cmp(&a_is_dir).then_with(|| a_name.cmp(b_name))
}

/// Builds the ordered node tree below a traversal root
pub struct Scanner<L = FsLister> {
    root: PathBuf,
    exclusions: ExclusionSet,
    lister: L,
}

impl Scanner<FsLister> {
    /// Create a scanner over the local filesystem
    pub fn new(root: PathBuf) -> Self {
        Self::with_lister(root, FsLister)
    }
}

impl<L: DirectoryLister> Scanner<L> {
    /// Create a scanner with a custom listing source
    pub fn with_lister(root: PathBuf, lister: L) -> Self {
        Self {
            root,
            exclusions: ExclusionSet::default(),
            lister,
        }
    }

    /// Replace the default exclusion set
    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Scan the whole tree
    ///
    /// A failure to list the root itself is fatal. Below the root, a directory
    /// whose listing is refused with `PermissionDenied` becomes a placeholder
    /// node and the scan carries on with its siblings; any other listing error
    /// aborts the scan.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn scan(&self) -> Result<Node, GenerateError> {
        let listings = self.lister.list(&self.root)?;
        let children = self.children_of(listings)?;
        let root = Node::directory(self.root.clone(), path::display_name(&self.root), children);
        let stats = root.stats();
        debug!(
            directories = stats.directories,
            files = stats.files,
            excluded = stats.excluded,
            denied = stats.denied,
            "Scanned directory tree"
        );
        Ok(root)
    }

    fn children_of(&self, mut listings: Vec<Listing>) -> Result<Vec<Node>, GenerateError> {
        listings.sort_by(|a, b| compare_entries(a.is_dir, &a.name, b.is_dir, &b.name));
        listings
            .into_iter()
            .map(|listing| self.scan_entry(listing))
            .collect()
    }

    fn scan_entry(&self, listing: Listing) -> Result<Node, GenerateError> {
        let name = listing.name.to_string_lossy().into_owned();

        if !listing.is_dir {
            return Ok(Node::file(listing.path, name));
        }

        if self.exclusions.contains(&listing.name) {
            debug!(path = %listing.path.display(), "Skipping excluded directory");
            return Ok(Node::excluded(listing.path, name));
        }

        if listing.is_symlink {
            debug!(path = %listing.path.display(), "Not descending into symlinked directory");
            return Ok(Node::directory(listing.path, name, Vec::new()));
        }

        match self.lister.list(&listing.path) {
            Ok(entries) => {
                let children = self.children_of(entries)?;
                Ok(Node::directory(listing.path, name, children))
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                warn!(path = %listing.path.display(), "Permission denied listing directory");
                Ok(Node::permission_denied(listing.path, name))
            }
            Err(e) => Err(e.into()),
        }
    }
}
