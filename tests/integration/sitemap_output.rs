//! Integration tests for the XML sitemap

use super::test_utils::{build_site, locs, without_lastmod};
use chrono::NaiveDate;
use dirsite::sitemap::{SitemapBuilder, SitemapOrder};
use dirsite::tree::ExclusionSet;
use std::collections::BTreeSet;
use tempfile::TempDir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

/// Test the docs/README/.git scenario end to end
#[test]
fn test_scenario_entries() {
    let temp_dir = TempDir::new().unwrap();
    build_site(temp_dir.path(), &["docs/a.md", "README.md", ".git/HEAD"]);

    let xml = SitemapBuilder::new(temp_dir.path().to_path_buf(), "https://example.org/pet/")
        .build()
        .unwrap();

    let got: BTreeSet<_> = locs(&xml).into_iter().collect();
    let expected: BTreeSet<_> = [
        "https://example.org/pet/docs/a.md".to_string(),
        "https://example.org/pet/README.md".to_string(),
    ]
    .into_iter()
    .collect();
    assert_eq!(got, expected);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.ends_with("</urlset>"));
    assert_eq!(xml.matches("<changefreq>monthly</changefreq>").count(), 2);
    assert_eq!(xml.matches("<priority>0.8</priority>").count(), 2);
}

/// Test that nested paths use forward slashes in locations
#[test]
fn test_nested_locations_use_forward_slashes() {
    let temp_dir = TempDir::new().unwrap();
    build_site(temp_dir.path(), &["sub/dir/file.txt"]);

    let xml = SitemapBuilder::new(temp_dir.path().to_path_buf(), "https://example.org")
        .build()
        .unwrap();
    assert_eq!(locs(&xml), vec!["https://example.org/sub/dir/file.txt"]);
}

/// Test that an empty base URL yields root-relative locations
#[test]
fn test_empty_base_url() {
    let temp_dir = TempDir::new().unwrap();
    build_site(temp_dir.path(), &["a/b.txt"]);

    let xml = SitemapBuilder::new(temp_dir.path().to_path_buf(), "")
        .build()
        .unwrap();
    assert_eq!(locs(&xml), vec!["a/b.txt"]);
}

/// Test that two builds differ only in lastmod
#[test]
fn test_builds_differ_only_in_lastmod() {
    let temp_dir = TempDir::new().unwrap();
    build_site(temp_dir.path(), &["x/y.txt", "z.txt", "x/w/v.txt"]);
    let root = temp_dir.path().to_path_buf();

    let first = SitemapBuilder::new(root.clone(), "https://example.org")
        .with_lastmod(date(1))
        .build()
        .unwrap();
    let second = SitemapBuilder::new(root, "https://example.org")
        .with_lastmod(date(2))
        .build()
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(without_lastmod(&first), without_lastmod(&second));
}

/// Test that sorted order matches the folder tree and walk order lists the same set
#[test]
fn test_orders_list_the_same_files() {
    let temp_dir = TempDir::new().unwrap();
    build_site(temp_dir.path(), &["q.txt", "b/c.txt", "a.txt", "B/d.txt"]);
    let root = temp_dir.path().to_path_buf();

    let sorted = locs(&SitemapBuilder::new(root.clone(), "").build().unwrap());
    assert_eq!(sorted, vec!["B/d.txt", "b/c.txt", "a.txt", "q.txt"]);

    let walked = locs(
        &SitemapBuilder::new(root, "")
            .with_order(SitemapOrder::Walk)
            .build()
            .unwrap(),
    );
    let walked: BTreeSet<_> = walked.into_iter().collect();
    let sorted: BTreeSet<_> = sorted.into_iter().collect();
    assert_eq!(walked, sorted);
}

/// Test that exclusions prune whole subtrees
#[test]
fn test_exclusions_prune_subtrees() {
    let temp_dir = TempDir::new().unwrap();
    build_site(
        temp_dir.path(),
        &["node_modules/x/index.js", "app/node_modules/y.js", "app/main.js", ".git/config"],
    );

    let xml = SitemapBuilder::new(temp_dir.path().to_path_buf(), "")
        .with_exclusions(ExclusionSet::new([".git", "node_modules"]))
        .build()
        .unwrap();
    assert_eq!(locs(&xml), vec!["app/main.js"]);
}

/// Test that an unreadable directory fails the whole build
#[cfg(unix)]
#[test]
fn test_permission_denied_fails_build() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    build_site(temp_dir.path(), &["locked/secret.txt", "open.txt"]);
    let locked = temp_dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the directory; nothing to observe then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = SitemapBuilder::new(temp_dir.path().to_path_buf(), "").build();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(result.is_err());
}
