//! filter / facets command integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
  {"title": "Running shoes", "description": "Light mesh", "category": "shoes", "size": "m", "color": "black", "price": 80},
  {"title": "Leather boots", "description": "Winter", "category": "shoes", "size": "l", "color": "brown", "price": 150},
  {"title": "Canvas tote", "description": "Everyday bag", "category": "bags", "size": "m", "color": "black", "price": 40}
]"#;

fn write_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn cardsift() -> Command {
    let mut cmd = Command::cargo_bin("cardsift").unwrap();
    cmd.env_remove("CARDSIFT_CONFIG").env_remove("CARDSIFT_LOG");
    cmd
}

#[test]
fn test_filter_category_and_max_price() {
    let catalog = write_file(".json", CATALOG);
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--category", "shoes", "--max", "100", "--simple"])
        .assert()
        .success()
        .stdout("Running shoes\n");
}

#[test]
fn test_filter_search_is_case_insensitive() {
    let catalog = write_file(".json", CATALOG);
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--search", "  WINTER ", "--simple"])
        .assert()
        .success()
        .stdout("Leather boots\n");
}

#[test]
fn test_filter_without_constraints_shows_all() {
    let catalog = write_file(".json", CATALOG);
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Canvas tote"))
        .stdout(predicate::str::contains("of 3 card(s) shown"));
}

#[test]
fn test_filter_zero_matches_prints_suggestions() {
    let catalog = write_file(".json", CATALOG);
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--category", "hats", "--simple"])
        .assert()
        .success()
        .stdout(
            "# Мы подобрали похожие позиции «Тихоходка»\n\
             ~ Running shoes\n\
             ~ Leather boots\n\
             ~ Canvas tote\n",
        );
}

#[test]
fn test_filter_suggestion_prefers_color() {
    let catalog = write_file(".json", CATALOG);
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--color", "brown", "--max", "10", "--simple"])
        .assert()
        .success()
        .stdout("# Популярные товары «Тихоходка»\n~ Leather boots\n");
}

#[test]
fn test_filter_negative_min_is_ignored() {
    let catalog = write_file(".json", CATALOG);
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--min", "-5", "--simple"])
        .assert()
        .success()
        .stdout("Running shoes\nLeather boots\nCanvas tote\n");
}

#[test]
fn test_filter_json_output() {
    let catalog = write_file(".json", CATALOG);
    let output = cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--category", "bags", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 3);
    assert_eq!(report["visible_count"], 1);
    assert_eq!(report["state"]["category"], "bags");
    assert_eq!(report["cards"][0]["title"], "Canvas tote");
    assert!(report.get("suggestion").is_none());
}

#[test]
fn test_filter_yaml_catalog() {
    let catalog = write_file(
        ".yaml",
        "cards:\n  - title: Scarf\n    category: accessories\n    price: \"15\"\n",
    );
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--max", "20", "--simple"])
        .assert()
        .success()
        .stdout("Scarf\n");
}

#[test]
fn test_filter_disabled_control_is_ignored_with_warning() {
    let catalog = write_file(".json", CATALOG);
    let config = write_file(".toml", "[controls]\nsize = false\n");
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--size", "l", "--simple", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("Running shoes\nLeather boots\nCanvas tote\n")
        .stderr(predicate::str::contains("ignored"));
}

#[test]
fn test_filter_unsupported_format() {
    let catalog = write_file(".csv", "title,price\n");
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported catalog format"));
}

#[test]
fn test_filter_misspelled_root_key_fails() {
    let catalog = write_file(".json", r#"{"card": [{"title": "Scarf"}]}"#);
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_filter_empty_catalog_warns() {
    let catalog = write_file(".toml", "cards = []\n");
    cardsift()
        .arg("filter")
        .arg(catalog.path())
        .args(["--simple"])
        .assert()
        .success()
        .stderr(predicate::str::contains("has no cards"));
}

#[test]
fn test_filter_missing_catalog() {
    cardsift()
        .args(["filter", "/nonexistent/catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_facets_lists_tokens_in_order() {
    let catalog = write_file(".json", CATALOG);
    cardsift()
        .arg("facets")
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("shoes, bags"))
        .stdout(predicate::str::contains("black, brown"));
}

#[test]
fn test_facets_json_single_facet() {
    let catalog = write_file(".json", CATALOG);
    let output = cardsift()
        .arg("facets")
        .arg(catalog.path())
        .args(["--facet", "size", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let facets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        facets,
        serde_json::json!([{ "facet": "size", "values": ["m", "l"] }])
    );
}
