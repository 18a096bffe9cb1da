// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the peoplemover CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const BEFORE_JSON: &str = r#"{
    "id": 1,
    "name": "myboard",
    "products": [
        {
            "id": 1,
            "name": "Product A",
            "archived": false,
            "spaceLocation": {"id": 1, "name": "Dearborn"},
            "tags": [{"id": 1, "name": "FordX"}],
            "assignments": [
                {"id": 1, "productId": 1, "placeholder": false, "startDate": "2020-01-01",
                 "person": {"id": 1, "name": "Bert", "spaceRole": {"id": 1, "name": "Engineer"}}},
                {"id": 2, "productId": 1, "placeholder": true,
                 "person": {"id": 2, "name": "Ernie"}}
            ]
        },
        {
            "id": 2,
            "name": "Product B",
            "archived": false,
            "spaceLocation": {"id": 2, "name": "Ann Arbor"},
            "assignments": []
        },
        {
            "id": 3,
            "name": "Old Product",
            "archived": true,
            "assignments": []
        }
    ]
}"#;

const AFTER_JSON: &str = r#"{
    "id": 1,
    "name": "myboard",
    "products": [
        {
            "id": 1,
            "name": "Product A",
            "archived": false,
            "assignments": []
        },
        {
            "id": 2,
            "name": "Product B",
            "archived": false,
            "assignments": [
                {"id": 3, "productId": 2, "placeholder": false,
                 "person": {"id": 1, "name": "Bert", "spaceRole": {"id": 1, "name": "Engineer"}}},
                {"id": 4, "productId": 2, "placeholder": false,
                 "person": {"id": 3, "name": "Grover"}}
            ]
        }
    ]
}"#;

const LAYOUT_JSON: &str = r#"{
    "candidates": [
        {"label": "Product A", "rect": {"top": 5, "left": 4, "right": 54, "bottom": 15}},
        {"label": "Product B", "rect": {"top": 5, "left": 59, "right": 109, "bottom": 15}}
    ],
    "dropped": {"top": 10, "left": 53, "right": 68, "bottom": 12}
}"#;

/// Write a fixture into the temp directory
fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A peoplemover command isolated from the user's config
fn peoplemover(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("peoplemover").unwrap();
    cmd.env("PEOPLEMOVER_CONFIG", dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_compare_reports_moves_removals_and_additions() {
    let dir = TempDir::new().unwrap();
    let before = write_fixture(&dir, "before.json", BEFORE_JSON);
    let after = write_fixture(&dir, "after.json", AFTER_JSON);

    peoplemover(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&after)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bert (Engineer): Product A -> Product B"))
        .stdout(predicate::str::contains("Ernie: Product A assignment cancelled"))
        .stdout(predicate::str::contains("Grover: Assigned to Product B"));
}

#[test]
fn test_compare_identical_boards() {
    let dir = TempDir::new().unwrap();
    let before = write_fixture(&dir, "before.json", BEFORE_JSON);

    peoplemover(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&before)
        .assert()
        .success()
        .stdout(predicate::str::contains("No reassignments"));
}

#[test]
fn test_compare_json_output() {
    let dir = TempDir::new().unwrap();
    let before = write_fixture(&dir, "before.json", BEFORE_JSON);
    let after = write_fixture(&dir, "after.json", AFTER_JSON);

    let output = peoplemover(&dir)
        .args(["--json", "compare"])
        .arg(&before)
        .arg(&after)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["kind"], "moved");
    assert_eq!(entries[0]["fromProduct"]["name"], "Product A");
    assert_eq!(entries[0]["toProduct"]["name"], "Product B");
    assert!(entries[1].get("toProduct").is_none());
    assert!(entries[2].get("fromProduct").is_none());
}

#[test]
fn test_compare_rejects_malformed_snapshot() {
    let dir = TempDir::new().unwrap();
    let before = write_fixture(&dir, "before.json", BEFORE_JSON);
    let broken = write_fixture(
        &dir,
        "broken.json",
        r#"{"products": [{"id": 1, "name": "A", "assignments": [{"id": 1, "person": {"id": 1, "name": "Bert"}}]}]}"#,
    );

    peoplemover(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load the modified board"));
}

/// Bert's card sits under Product B but references a product no board has
const DANGLING_AFTER_JSON: &str = r#"{
    "id": 1,
    "name": "myboard",
    "products": [
        {"id": 1, "name": "Product A", "archived": false, "assignments": []},
        {
            "id": 2,
            "name": "Product B",
            "archived": false,
            "assignments": [
                {"id": 3, "productId": 9, "placeholder": false,
                 "person": {"id": 1, "name": "Bert"}}
            ]
        }
    ]
}"#;

#[test]
fn test_compare_reports_dangling_product_as_unknown() {
    let dir = TempDir::new().unwrap();
    let before = write_fixture(&dir, "before.json", BEFORE_JSON);
    let after = write_fixture(&dir, "after.json", DANGLING_AFTER_JSON);

    peoplemover(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&after)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bert: Product A -> Unknown Product"))
        .stdout(predicate::str::contains("Ernie: Product A assignment cancelled"));
}

#[test]
fn test_compare_uses_configured_unknown_product_label() {
    let dir = TempDir::new().unwrap();
    let before = write_fixture(&dir, "before.json", BEFORE_JSON);
    let after = write_fixture(&dir, "after.json", DANGLING_AFTER_JSON);

    peoplemover(&dir)
        .args(["config", "unknown_product_label", "Future Product"])
        .assert()
        .success();

    peoplemover(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&after)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bert: Product A -> Future Product"));
}

#[test]
fn test_logs_are_plain_without_color() {
    let dir = TempDir::new().unwrap();
    let before = write_fixture(&dir, "before.json", BEFORE_JSON);
    let after = write_fixture(&dir, "after.json", DANGLING_AFTER_JSON);

    peoplemover(&dir)
        .args(["-v", "compare"])
        .arg(&before)
        .arg(&after)
        .assert()
        .success()
        .stderr(predicate::str::contains("assignment references a product other than its holder"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_offset_rejects_nan() {
    let dir = TempDir::new().unwrap();

    peoplemover(&dir)
        .args(["offset", "--rect", "NaN,0,10,10", "--pointer", "1,1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("finite"));
}

#[test]
fn test_drop_resolves_largest_overlap() {
    let dir = TempDir::new().unwrap();
    let layout = write_fixture(&dir, "layout.json", LAYOUT_JSON);

    peoplemover(&dir)
        .arg("drop")
        .arg(&layout)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped on Product B (#1)"));
}

#[test]
fn test_drop_without_target() {
    let dir = TempDir::new().unwrap();
    let layout = write_fixture(
        &dir,
        "layout.json",
        r#"{"candidates": [{"label": "Product A", "rect": {"top": 5, "left": 4, "right": 54, "bottom": 15}}],
            "dropped": {"top": 100, "left": 150, "right": 165, "bottom": 105}}"#,
    );

    peoplemover(&dir)
        .args(["--json", "drop"])
        .arg(&layout)
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_offset() {
    let dir = TempDir::new().unwrap();

    peoplemover(&dir)
        .args(["offset", "--rect", "15,3,53,51", "--pointer", "25,20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x: 22, y: 5"));
}

#[test]
fn test_offset_rejects_bad_rect() {
    let dir = TempDir::new().unwrap();

    peoplemover(&dir)
        .args(["offset", "--rect", "15,3,53", "--pointer", "25,20"])
        .assert()
        .failure();
}

#[test]
fn test_products_active_sorted_by_location() {
    let dir = TempDir::new().unwrap();
    let board = write_fixture(&dir, "board.json", BEFORE_JSON);

    let output = peoplemover(&dir)
        .args(["products", "--sort", "location", "--date", "2020-06-01"])
        .arg(&board)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let b = stdout.find("Product B [Ann Arbor]").unwrap();
    let a = stdout.find("Product A [Dearborn]").unwrap();
    assert!(b < a, "Ann Arbor sorts before Dearborn");
    assert!(stdout.contains("Ernie (placeholder)"));
    assert!(!stdout.contains("Old Product"));
}

#[test]
fn test_products_filtered_by_tag() {
    let dir = TempDir::new().unwrap();
    let board = write_fixture(&dir, "board.json", BEFORE_JSON);

    peoplemover(&dir)
        .args(["products", "--tag", "FordX", "--date", "2020-06-01"])
        .arg(&board)
        .assert()
        .success()
        .stdout(predicate::str::contains("Product A"))
        .stdout(predicate::str::contains("Product B").not());
}

#[test]
fn test_products_all_marks_archived() {
    let dir = TempDir::new().unwrap();
    let board = write_fixture(&dir, "board.json", BEFORE_JSON);

    peoplemover(&dir)
        .args(["products", "--all", "--date", "2020-06-01"])
        .arg(&board)
        .assert()
        .success()
        .stdout(predicate::str::contains("Old Product (archived) (0 assigned)"))
        .stdout(predicate::str::contains("Product A [Dearborn] (2 assigned)"));
}

#[test]
fn test_products_output_writes_listed_board() {
    let dir = TempDir::new().unwrap();
    let board = write_fixture(&dir, "board.json", BEFORE_JSON);
    let output = dir.path().join("listed.json");

    peoplemover(&dir)
        .args(["products", "--tag", "FordX", "--date", "2020-06-01", "--output"])
        .arg(&output)
        .arg(&board)
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["name"], "myboard");
    let products = written["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Product A");
}

#[test]
fn test_time_on_product() {
    let dir = TempDir::new().unwrap();
    let board = write_fixture(&dir, "board.json", BEFORE_JSON);

    peoplemover(&dir)
        .args(["time-on-product", "--date", "2020-01-10"])
        .arg(&board)
        .assert()
        .success()
        .stdout(predicate::str::contains("Product A\tBert\t10 days"))
        .stdout(predicate::str::contains("Product A\tErnie\t0 days"));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();

    peoplemover(&dir)
        .args(["config", "unknown_product_label", "Future Product"])
        .assert()
        .success();

    peoplemover(&dir)
        .args(["config", "unknown_product_label"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Future Product\n"));

    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_unknown_key() {
    let dir = TempDir::new().unwrap();

    peoplemover(&dir)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}
