//! Property-based tests for urldup using proptest
//!
//! These tests generate random front-matter content to test edge cases and
//! ensure robustness across a wide range of potential inputs.

use assert_cmd::prelude::*;
use proptest::prelude::*;
use std::fs;
use std::process::Command;

const NAME: &str = "urldup";

/// Generate plausible url front-matter values
fn url_value_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{1,8}", 1..4)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

/// Generate whitespace padding around a line
fn padding_strategy() -> impl Strategy<Value = (String, String)> {
    (" {0,4}", " {0,4}\t{0,2}")
}

/// Generate front-matter lines that must never be candidates
fn non_candidate_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Prefix not at position 0
        url_value_strategy().prop_map(|v| format!("seeurl: {v}")),
        url_value_strategy().prop_map(|v| format!("canonical-url: {v}")),
        url_value_strategy().prop_map(|v| format!("the url: {v} is mentioned")),
        // Different front-matter keys
        Just("title: Some post".to_string()),
        Just("date: 2021-03-14".to_string()),
        // Case variations of the prefix
        url_value_strategy().prop_map(|v| format!("URL: {v}")),
        url_value_strategy().prop_map(|v| format!("Url: {v}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))] // Default is 256...

    #[test]
    fn test_distinct_url_values_never_report_duplicates(
        values in prop::collection::hash_set(url_value_strategy(), 1..8)
    ) {
        let dir = tempfile::tempdir().unwrap();
        for (i, value) in values.iter().enumerate() {
            fs::write(
                dir.path().join(format!("post{i}.md")),
                format!("title: Post {i}\nurl: {value}\n"),
            )
            .unwrap();
        }

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg(dir.path()).arg("--format").arg("minimal");

        cmd.assert().success();
    }

    #[test]
    fn test_shared_url_value_reports_duplicate_regardless_of_padding(
        value in url_value_strategy(),
        (lead_a, trail_a) in padding_strategy(),
        (lead_b, trail_b) in padding_strategy(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.md"),
            format!("{lead_a}url: {value}{trail_a}\n"),
        )
        .unwrap();
        fs::write(
            dir.path().join("b.md"),
            format!("{lead_b}url: {value}{trail_b}\n"),
        )
        .unwrap();

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg(dir.path()).arg("--format").arg("minimal");

        let assert = cmd.assert().failure().code(1);
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        let expected = format!("found duplicate url: {}", value);
        prop_assert!(stdout.contains(&expected));
    }

    #[test]
    fn test_non_candidate_lines_are_never_reported(
        lines in prop::collection::vec(non_candidate_line_strategy(), 1..10)
    ) {
        let dir = tempfile::tempdir().unwrap();
        // Same non-candidate content in two files must not be a duplicate
        let content = lines.join("\n");
        fs::write(dir.path().join("a.md"), &content).unwrap();
        fs::write(dir.path().join("b.md"), &content).unwrap();

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.arg(dir.path()).arg("--format").arg("minimal");

        cmd.assert().success();
    }

    #[test]
    fn test_scan_is_idempotent(
        values in prop::collection::vec(url_value_strategy(), 1..8)
    ) {
        let dir = tempfile::tempdir().unwrap();
        for (i, value) in values.iter().enumerate() {
            fs::write(
                dir.path().join(format!("post{i}.md")),
                format!("url: {value}\n"),
            )
            .unwrap();
        }

        let first = Command::cargo_bin(NAME)
            .unwrap()
            .arg(dir.path())
            .arg("--format")
            .arg("minimal")
            .output()
            .unwrap();
        let second = Command::cargo_bin(NAME)
            .unwrap()
            .arg(dir.path())
            .arg("--format")
            .arg("minimal")
            .output()
            .unwrap();

        prop_assert_eq!(first.status.code(), second.status.code());
        prop_assert_eq!(first.stdout, second.stdout);
    }
}

#[cfg(test)]
mod unit_property_tests {
    use super::*;
    use proptest::proptest;

    proptest! {

        #[test]
        fn test_url_value_strategy_generates_paths(value in url_value_strategy()) {
            prop_assert!(value.starts_with('/'));
            prop_assert!(value.len() > 1);
            prop_assert!(value.len() < 50);
        }

        #[test]
        fn test_non_candidate_lines_never_start_with_prefix(line in non_candidate_line_strategy()) {
            prop_assert!(!line.trim().starts_with("url:"));
        }

        #[test]
        fn test_padding_is_pure_whitespace((lead, trail) in padding_strategy()) {
            prop_assert!(lead.chars().all(char::is_whitespace));
            prop_assert!(trail.chars().all(char::is_whitespace));
        }
    }
}
