//! End-to-end tests for the wordplay binary

mod support;
use support::harness::{stderr, stdout, TestHarness};

// ============================================================================
// DISEMVOWEL COMMAND TESTS
// ============================================================================

#[test]
fn test_disemvowel_argument() {
    let harness = TestHarness::new();
    let output = harness.run(&["disemvowel", "Morris, Minnesota"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Mrrs, Mnnst\n");
}

#[test]
fn test_disemvowel_punctuation() {
    let harness = TestHarness::new();
    let output = harness.run(&["disemvowel", "An (Unexplained) Elephant!"]);
    assert_eq!(stdout(&output), "n (nxplnd) lphnt!\n");
}

#[test]
fn test_disemvowel_stdin_strips_one_newline() {
    let harness = TestHarness::new();
    let output = harness.run_with_stdin(&["disemvowel"], "pqrst\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "pqrst\n");
}

#[test]
fn test_disemvowel_empty_stdin() {
    let harness = TestHarness::new();
    let output = harness.run(&["disemvowel"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_disemvowel_file_lines() {
    let harness = TestHarness::new();
    let path = harness.write_file("words.txt", "banana\nkiwi\nsky\n");
    let output = harness.run(&["disemvowel", "--lines", "--file", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "bnn\nkw\nsky\n");
}

#[test]
fn test_disemvowel_missing_file_fails() {
    let harness = TestHarness::new();
    let output = harness.run(&["disemvowel", "--file", "nope.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("nope.txt"));
}

#[test]
fn test_text_and_file_conflict() {
    let harness = TestHarness::new();
    let output = harness.run(&["disemvowel", "abc", "--file", "x.txt"]);
    assert!(!output.status.success());
}

// ============================================================================
// PALINDROME COMMAND TESTS
// ============================================================================

#[test]
fn test_palindrome_yes_and_no() {
    let harness = TestHarness::new();
    assert_eq!(stdout(&harness.run(&["palindrome", "abcdefggfedcba"])), "Yes\n");
    assert_eq!(stdout(&harness.run(&["palindrome", "abca"])), "No\n");
    assert_eq!(stdout(&harness.run(&["palindrome", ""])), "Yes\n");
}

#[test]
fn test_palindrome_two_pointer_strategy() {
    let harness = TestHarness::new();
    let output = harness.run(&["palindrome", "--strategy", "two-pointer", "bab"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Yes\n");
}

#[test]
fn test_palindrome_unknown_strategy_rejected() {
    let harness = TestHarness::new();
    let output = harness.run(&["palindrome", "--strategy", "sideways", "bab"]);
    assert!(!output.status.success());
}

#[test]
fn test_palindrome_lines_from_stdin() {
    let harness = TestHarness::new();
    let output = harness.run_with_stdin(&["palindrome", "--lines"], "aa\nab\nbab\n");
    assert_eq!(stdout(&output), "Yes\nNo\nYes\n");
}

#[test]
fn test_palindrome_exit_code() {
    let harness = TestHarness::new();

    let yes = harness.run(&["palindrome", "--exit-code", "baab"]);
    assert_eq!(yes.status.code(), Some(0));

    let no = harness.run(&["palindrome", "--exit-code", "abb"]);
    assert_eq!(no.status.code(), Some(1));
    assert_eq!(stdout(&no), "No\n");

    let no_flag = harness.run(&["palindrome", "abb"]);
    assert_eq!(no_flag.status.code(), Some(0));
}

#[test]
fn test_palindrome_json() {
    let harness = TestHarness::new();
    let output = harness.run(&["--json", "palindrome", "abc"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["command"], "palindrome");
    assert_eq!(value["input"], "abc");
    assert_eq!(value["output"], "No");
}

#[test]
fn test_palindrome_json_lines_array() {
    let harness = TestHarness::new();
    let output = harness.run_with_stdin(&["palindrome", "--json", "--lines"], "a\nab\n");
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["output"], "Yes");
    assert_eq!(items[1]["output"], "No");
}

// ============================================================================
// REVERSE COMMAND TESTS
// ============================================================================

#[test]
fn test_reverse_argument() {
    let harness = TestHarness::new();
    assert_eq!(stdout(&harness.run(&["reverse", "stressed"])), "desserts\n");
}

// ============================================================================
// CONFIG TESTS
// ============================================================================

#[test]
fn test_project_config_sets_json_output() {
    let harness = TestHarness::new();
    harness.write_project_config("output:\n  format: json");

    let output = harness.run(&["disemvowel", "Elephant"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["output"], "lphnt");
}

#[test]
fn test_project_config_strategy() {
    let harness = TestHarness::new();
    harness.write_project_config("palindrome:\n  strategy: two_pointer");

    let output = harness.run(&["--quiet", "config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("two_pointer"));
}

#[test]
fn test_global_config_is_merged() {
    let harness = TestHarness::new();
    let global_dir = harness.path().join(".config/wordplay");
    std::fs::create_dir_all(&global_dir).unwrap();
    std::fs::write(
        global_dir.join("config.md"),
        "---\noutput:\n  format: json\n---\n",
    )
    .unwrap();

    let output = harness.run(&["reverse", "abc"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["output"], "cba");
}

#[test]
fn test_invalid_config_fails_commands() {
    let harness = TestHarness::new();
    harness.write_project_config("logging:\n  level: chatty");

    let output = harness.run(&["palindrome", "aa"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("logging.level"));
}

#[test]
fn test_config_validate_reports_bad_file() {
    let harness = TestHarness::new();
    harness.write_project_config("logging:\n  level: chatty");

    let output = harness.run(&["config", "--validate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("config.md"));
}

#[test]
fn test_config_validate_ok() {
    let harness = TestHarness::new();
    harness.write_project_config("logging:\n  level: info");

    let output = harness.run(&["config", "--validate"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration is valid"));
}

// ============================================================================
// VERSION / COMPLETION TESTS
// ============================================================================

#[test]
fn test_version() {
    let harness = TestHarness::new();
    let output = harness.run(&["version", "--verbose"]);
    let text = stdout(&output);
    assert!(text.starts_with(&format!("wordplay {}", env!("CARGO_PKG_VERSION"))));
    assert!(text.contains("commit:"));
    assert!(text.contains("built:"));
}

#[test]
fn test_completion_bash() {
    let harness = TestHarness::new();
    let output = harness.run(&["completion", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("wordplay"));
}
