//! Integration tests for complete generator runs

use super::test_utils::{build_site, leaf_hrefs, locs};
use chrono::NaiveDate;
use dirsite::config::GeneratorConfig;
use dirsite::generate::{run, DirectorySink};
use percent_encoding::percent_decode_str;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
}

fn config_for(root: &std::path::Path, out: &std::path::Path) -> GeneratorConfig {
    GeneratorConfig {
        root: Some(root.to_path_buf()),
        output_dir: Some(out.to_path_buf()),
        base_url: "https://example.org/site".to_string(),
        ..GeneratorConfig::default()
    }
}

/// Test that the tree and the sitemap cover the same files
#[test]
fn test_tree_and_sitemap_cover_same_files() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build_site(
        site.path(),
        &["index.html", "css/site.css", "img/a/b.png", ".git/objects/x", "docs/.git/y"],
    );

    let config = config_for(site.path(), out.path());
    let report = run(&config, &mut DirectorySink::new(out.path().to_path_buf()), today()).unwrap();

    let html = fs::read_to_string(out.path().join("folder_tree.html")).unwrap();
    let xml = fs::read_to_string(out.path().join("sitemap.xml")).unwrap();

    let hrefs = leaf_hrefs(&html);
    let urls: Vec<_> = hrefs
        .iter()
        .map(|href| format!("https://example.org/site/{}", href))
        .collect();
    assert_eq!(locs(&xml), urls);
    assert_eq!(hrefs, vec!["css/site.css", "img/a/b.png", "index.html"]);
    assert_eq!(report.stats.files, 3);
    assert_eq!(report.stats.excluded, 2);
    assert_eq!(report.sitemap_entries, Some(3));
}

/// Test running twice with outputs inside the root
#[test]
fn test_second_run_skips_own_sitemap() {
    let site = TempDir::new().unwrap();
    build_site(site.path(), &["page.html"]);

    let config = config_for(site.path(), site.path());
    let mut sink = DirectorySink::new(site.path().to_path_buf());
    run(&config, &mut sink, today()).unwrap();
    run(&config, &mut sink, today()).unwrap();

    let html = fs::read_to_string(site.path().join("folder_tree.html")).unwrap();
    let xml = fs::read_to_string(site.path().join("sitemap.xml")).unwrap();

    assert_eq!(
        leaf_hrefs(&html),
        vec!["folder_tree.html", "page.html", "sitemap.xml"]
    );
    assert_eq!(
        locs(&xml),
        vec![
            "https://example.org/site/folder_tree.html",
            "https://example.org/site/page.html",
        ]
    );
}

/// Test that disabling the sitemap writes only the page
#[test]
fn test_tree_only_run() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build_site(site.path(), &["a.txt"]);

    let config = GeneratorConfig {
        sitemap: false,
        ..config_for(site.path(), out.path())
    };
    let report = run(&config, &mut DirectorySink::new(out.path().to_path_buf()), today()).unwrap();

    assert_eq!(report.summary(), "Generated folder_tree.html successfully!");
    assert!(out.path().join("folder_tree.html").is_file());
    assert!(!out.path().join("sitemap.xml").exists());
}

/// Test that a missing output directory surfaces the write error
#[test]
fn test_unwritable_output_fails() {
    let site = TempDir::new().unwrap();
    build_site(site.path(), &["a.txt"]);
    let missing = site.path().join("no").join("such").join("dir");

    let config = config_for(site.path(), &missing);
    let result = run(&config, &mut DirectorySink::new(missing.clone()), today());
    assert!(result.is_err());
}

/// Test the binary end to end
#[test]
fn test_binary_prints_success_message() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build_site(site.path(), &["docs/a.md", "README.md"]);

    let output = Command::new(env!("CARGO_BIN_EXE_dirsite"))
        .arg(site.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--base-url")
        .arg("https://example.org")
        .arg("--quiet")
        .env_remove("DIRSITE_LOG")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Generated folder_tree.html and sitemap.xml successfully!"
    );
    let xml = fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
    assert_eq!(
        locs(&xml),
        vec!["https://example.org/docs/a.md", "https://example.org/README.md"]
    );
}

/// Test that every page link resolves from the page's own directory
#[test]
fn test_binary_page_links_resolve_next_to_page() {
    let workdir = TempDir::new().unwrap();
    let site = workdir.path().join("site");
    build_site(&site, &["docs/a.md", "my notes/q#1.txt", "README.md"]);

    let output = Command::new(env!("CARGO_BIN_EXE_dirsite"))
        .current_dir(workdir.path())
        .arg("site")
        .arg("--quiet")
        .env_remove("DIRSITE_LOG")
        .env_remove("DIRSITE_OUTPUT_DIR")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let page = site.join("folder_tree.html");
    assert!(!workdir.path().join("folder_tree.html").exists());
    let html = fs::read_to_string(&page).unwrap();
    let hrefs = leaf_hrefs(&html);
    assert_eq!(hrefs, vec!["docs/a.md", "my%20notes/q%231.txt", "README.md"]);

    let page_dir = page.parent().unwrap();
    for href in &hrefs {
        let target = href.split('/').fold(page_dir.to_path_buf(), |acc, seg| {
            acc.join(percent_decode_str(seg).decode_utf8_lossy().as_ref())
        });
        assert!(target.is_file(), "{} does not resolve from {}", href, page.display());
    }
}

/// Test that the binary exits non-zero on a missing root
#[test]
fn test_binary_fails_on_missing_root() {
    let out = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dirsite"))
        .arg(out.path().join("missing"))
        .arg("--output-dir")
        .arg(out.path())
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(!out.path().join("folder_tree.html").exists());
}
