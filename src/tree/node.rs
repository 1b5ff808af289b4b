//! Tree node types

use std::path::PathBuf;

/// What a node stands for in the rendered tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A directory that was listed; its children are populated
    Directory,
    /// Anything that is not a directory (regular files, dangling symlinks)
    File,
    /// A directory whose name is in the exclusion set; never descended
    Excluded,
    /// A directory whose listing was refused by the operating system
    PermissionDenied,
}

/// A position in the directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Absolute path on the filesystem
    pub path: PathBuf,
    /// Display name (the basename)
    pub name: String,
    pub kind: NodeKind,
    /// Directories first, then files, each group ascending by name
    pub children: Vec<Node>,
}

/// Counts collected over a scanned tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub excluded: usize,
    pub denied: usize,
}

impl Node {
    pub fn directory(path: PathBuf, name: String, children: Vec<Node>) -> Self {
        Self {
            path,
            name,
            kind: NodeKind::Directory,
            children,
        }
    }

    pub fn file(path: PathBuf, name: String) -> Self {
        Self::leaf(path, name, NodeKind::File)
    }

    pub fn excluded(path: PathBuf, name: String) -> Self {
        Self::leaf(path, name, NodeKind::Excluded)
    }

    pub fn permission_denied(path: PathBuf, name: String) -> Self {
        Self::leaf(path, name, NodeKind::PermissionDenied)
    }

    fn leaf(path: PathBuf, name: String, kind: NodeKind) -> Self {
        Self {
            path,
            name,
            kind,
            children: Vec::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// All file nodes below this node, in render order
    pub fn files(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a Node>) {
        if self.is_file() {
            out.push(self);
        }
        for child in &self.children {
            child.collect_files(out);
        }
    }

    /// Count nodes by kind, excluding this node itself
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for child in &self.children {
            match child.kind {
                NodeKind::Directory => stats.directories += 1,
                NodeKind::File => stats.files += 1,
                NodeKind::Excluded => stats.excluded += 1,
                NodeKind::PermissionDenied => {
                    stats.directories += 1;
                    stats.denied += 1;
                }
            }
            let nested = child.stats();
            stats.directories += nested.directories;
            stats.files += nested.files;
            stats.excluded += nested.excluded;
            stats.denied += nested.denied;
        }
        stats
    }
}
