//! Property-based tests for coverage and ordering

use dirsite::render::{render_document, RenderOptions};
use dirsite::sitemap::SitemapBuilder;
use dirsite::tree::{Node, NodeKind, Scanner};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Relative file paths: up to two directory levels, `.txt` names so a file can
/// never collide with a directory of the same name.
fn file_paths() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        (
            prop_oneof![Just(String::new()), "[a-cA-C]", "[a-c]/[a-c]"],
            "[a-zA-Z]{1,5}\\.txt",
        ),
        1..16,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(dir, file)| {
                if dir.is_empty() {
                    file
                } else {
                    format!("{}/{}", dir, file)
                }
            })
            .collect()
    })
}

fn write_files(root: &Path, files: &BTreeSet<String>) {
    for rel in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, rel).unwrap();
    }
    fs::create_dir_all(root.join(".git").join("refs")).unwrap();
    fs::write(root.join(".git").join("refs").join("hidden.txt"), "x").unwrap();
}

fn hrefs(html: &str) -> Vec<String> {
    html.lines()
        .filter(|line| line.trim_start().starts_with("<div class=\"file\">"))
        .filter_map(|line| {
            let start = line.find("href=\"")? + 6;
            let len = line[start..].find('"')?;
            Some(line[start..start + len].to_string())
        })
        .collect()
}

fn locs(xml: &str) -> Vec<String> {
    xml.lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("<loc>")?
                .strip_suffix("</loc>")
                .map(str::to_string)
        })
        .collect()
}

fn check_order(node: &Node) -> Result<(), TestCaseError> {
    let is_dir = |n: &Node| n.kind != NodeKind::File;
    for pair in node.children.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        prop_assert!(
            (is_dir(a) && !is_dir(b)) || (is_dir(a) == is_dir(b) && a.name < b.name),
            "{} must precede {}",
            a.name,
            b.name
        );
    }
    for child in &node.children {
        check_order(child)?;
    }
    Ok(())
}

/// Test that every file shows up exactly once in both documents
#[test]
fn test_every_file_listed_once_in_both_documents() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(48));

    runner
        .run(&file_paths(), |paths| {
            let expected: BTreeSet<String> = paths.into_iter().collect();
            let temp_dir = TempDir::new().unwrap();
            let root = temp_dir.path().canonicalize().unwrap();
            write_files(&root, &expected);

            let tree = Scanner::new(root.clone()).scan().unwrap();
            let html = render_document(&tree, &RenderOptions::default()).unwrap();
            let xml = SitemapBuilder::new(root, "").build().unwrap();

            let tree_hrefs = hrefs(&html);
            let sitemap_locs = locs(&xml);

            prop_assert_eq!(tree_hrefs.len(), expected.len());
            prop_assert_eq!(sitemap_locs.len(), expected.len());
            prop_assert_eq!(tree_hrefs.iter().cloned().collect::<BTreeSet<_>>(), expected.clone());
            prop_assert_eq!(sitemap_locs.iter().cloned().collect::<BTreeSet<_>>(), expected);
            // Default sitemap order is the tree order
            prop_assert_eq!(tree_hrefs, sitemap_locs);

            Ok(())
        })
        .unwrap();
}

/// Test that directories precede files and names ascend at every level
#[test]
fn test_children_ordering_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(48));

    runner
        .run(&file_paths(), |paths| {
            let files: BTreeSet<String> = paths.into_iter().collect();
            let temp_dir = TempDir::new().unwrap();
            let root = temp_dir.path().canonicalize().unwrap();
            write_files(&root, &files);

            let tree = Scanner::new(root).scan().unwrap();
            check_order(&tree)
        })
        .unwrap();
}
