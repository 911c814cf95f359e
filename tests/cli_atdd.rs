#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ARTICLE: &str = r#"---
title: Generative Engine Optimization
---
# Generative Engine Optimization

GEO is the practice of shaping content so AI answer engines can quote it.

## What is GEO?

Acme treats GEO as an editorial discipline.

## Why it matters

- Answers are extracted, not ranked
- Citations drive attribution

## How Acme measures it

| Metric | Before | After |
| --- | --- | --- |
| Citations | 2 | 9 |

In our experience, pages built with the Acme method load 30% faster.

## Further reading

Download the Acme checklist. See [the basics](/guides/geo-basics), [our method](/method) and [case studies](/cases).
"#;

/// Runs the binary with an isolated HOME so no user config leaks in.
fn geo_audit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("geo-audit").expect("binary should compile");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should be created");
    }
    fs::write(&path, content).expect("file should be written");
    path
}

#[test]
fn missing_input_exits_with_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    geo_audit(home.path())
        .args(["audit", "/nonexistent/geo-audit/post.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("input unavailable"));
}

#[test]
fn strong_article_passes_with_json_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    let post = write(dir.path(), "post.md", ARTICLE);

    let output = geo_audit(dir.path())
        .arg("audit")
        .arg(&post)
        .args(["--brand", "Acme", "--format", "json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    assert_eq!(report["tool"], "geo-audit");
    let result = &report["documents"][0]["result"];
    assert_eq!(result["passed"], true);
    assert_eq!(result["max_score"], 100);
    assert!(result["score"].as_u64().unwrap_or(0) >= 70);
    assert_eq!(result["details"]["elements"]["has_tables"], true);
    assert_eq!(
        report["documents"][0]["content_sha256"]
            .as_str()
            .map(str::len),
        Some(64)
    );
}

#[test]
fn title_only_document_needs_improvement() {
    let dir = TempDir::new().expect("temp dir should be created");
    let post = write(dir.path(), "thin.md", "# Title\n");

    geo_audit(dir.path())
        .arg("audit")
        .arg(&post)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NEEDS IMPROVEMENT"))
        .stdout(predicate::str::contains("GEO Content Audit"));
}

#[test]
fn directory_audit_reports_every_markdown_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "docs/a.md", ARTICLE);
    write(dir.path(), "docs/nested/b.markdown", "# Stub\n");
    write(dir.path(), "docs/notes.txt", "ignored");

    let output = geo_audit(dir.path())
        .arg("audit")
        .arg(dir.path().join("docs"))
        .args(["-f", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    let documents = report["documents"].as_array().expect("documents array");
    assert_eq!(documents.len(), 2);
    assert!(documents
        .iter()
        .all(|doc| !doc["path"].as_str().unwrap_or("").ends_with(".txt")));
}

#[test]
fn directory_without_markdown_is_unavailable() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "notes.txt", "plain text");

    geo_audit(dir.path())
        .arg("audit")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no files with extension"));
}

#[test]
fn brand_from_config_file_is_used() {
    let dir = TempDir::new().expect("temp dir should be created");
    let post = write(dir.path(), "post.md", ARTICLE);
    write(dir.path(), "geo-audit.toml", "[audit]\nbrand = \"Acme\"\n");

    let output = geo_audit(dir.path())
        .arg("audit")
        .arg(&post)
        .args(["-f", "json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    let checks = report["documents"][0]["result"]["checks"]
        .as_array()
        .expect("checks array");
    let brand = checks
        .iter()
        .find(|check| check["name"] == "brand_binding")
        .expect("brand check present");
    assert_eq!(brand["points"], 10);
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let post = write(dir.path(), "post.md", ARTICLE);
    write(dir.path(), "geo-audit.toml", "[audit\nbrand = ");

    geo_audit(dir.path())
        .arg("audit")
        .arg(&post)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn sarif_output_lists_findings() {
    let dir = TempDir::new().expect("temp dir should be created");
    let post = write(dir.path(), "thin.md", "# Title\n");

    geo_audit(dir.path())
        .arg("audit")
        .arg(&post)
        .args(["--brand", "Acme", "--format", "sarif"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""))
        .stdout(predicate::str::contains("geo.brand_binding"));
}

#[test]
fn markdown_summary_omits_suggestions() {
    let dir = TempDir::new().expect("temp dir should be created");
    let post = write(dir.path(), "thin.md", "# Title\n");

    geo_audit(dir.path())
        .arg("audit")
        .arg(&post)
        .args(["-f", "md", "--summary"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# GEO Audit Report"))
        .stdout(predicate::str::contains("### Suggestions").not());
}

#[test]
fn schema_article_without_author_fails() {
    let dir = TempDir::new().expect("temp dir should be created");

    geo_audit(dir.path())
        .current_dir(dir.path())
        .args([
            "schema",
            "--type",
            "article",
            "--title",
            "What is GEO",
            "--description",
            "A primer",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required field"));
}

#[test]
fn schema_faq_renders_questions_from_input_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let faqs = write(
        dir.path(),
        "faqs.json",
        r#"[{"question": "What is GEO?", "answer": "Answer-first writing."}]"#,
    );

    let output = geo_audit(dir.path())
        .current_dir(dir.path())
        .args(["schema", "--type", "faq", "--input"])
        .arg(&faqs)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let schema: Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    assert_eq!(schema["@type"], "FAQPage");
    assert_eq!(schema["mainEntity"][0]["name"], "What is GEO?");
}

#[test]
fn empty_brand_flag_leaves_brand_unscored() {
    let dir = TempDir::new().expect("temp dir should be created");
    let post = write(dir.path(), "post.md", ARTICLE);

    let output = geo_audit(dir.path())
        .arg("audit")
        .arg(&post)
        .args(["--brand", "", "-f", "json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    let checks = report["documents"][0]["result"]["checks"]
        .as_array()
        .expect("checks array");
    let brand = checks
        .iter()
        .find(|check| check["name"] == "brand_binding")
        .expect("brand check present");
    assert_eq!(brand["points"], 0);
    assert_eq!(brand["issues"].as_array().map(Vec::len), Some(0));
}

#[test]
fn schema_article_rejects_unknown_author_type() {
    let dir = TempDir::new().expect("temp dir should be created");

    geo_audit(dir.path())
        .current_dir(dir.path())
        .args([
            "schema",
            "--type",
            "article",
            "--title",
            "What is GEO",
            "--description",
            "A primer",
            "--author",
            "Acme",
            "--author-type",
            "Robot",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("author_type 'Robot'"));
}
