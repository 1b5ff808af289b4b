//! Directory Tree
//!
//! Scans a traversal root into an ordered tree of folder and file nodes. The
//! tree is the input of the HTML renderer; the sitemap walks the filesystem on
//! its own but shares the exclusion rules and path conversion defined here.

pub mod exclude;
pub mod node;
pub mod path;
pub mod scanner;

pub use exclude::ExclusionSet;
pub use node::{Node, NodeKind, TreeStats};
pub use scanner::{DirectoryLister, FsLister, Listing, Scanner};
