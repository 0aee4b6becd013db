//! End-to-end tests of the `plurals` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CUSTOM_TABLE: &str = r#"{
  "supplemental": {
    "plurals-type-cardinal": {
      "en": {
        "pluralRule-count-one": "n = 2",
        "pluralRule-count-other": ""
      }
    }
  }
}"#;

/// The binary, run from an empty directory with no `PLURALS_*` settings
/// leaking in from the environment.
fn plurals(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plurals").unwrap();
    cmd.current_dir(dir.path()).arg("--no-color");
    for key in [
        "PLURALS_CONFIG",
        "PLURALS_RULE_TYPE",
        "PLURALS_RULES_FILE",
        "PLURALS_CACHE_RULES",
        "PLURALS_MAX_HANDLES",
        "PLURALS_LOG_LEVEL",
        "PLURALS_LOG_FORMAT",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_select_russian_cardinals() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["select", "ru", "1", "2", "5", "21", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "one""#))
        .stdout(predicate::str::contains(r#""category": "few""#))
        .stdout(predicate::str::contains(r#""category": "many""#))
        .stdout(predicate::str::contains(r#""fallback": false"#));
}

#[test]
fn test_select_english_ordinals_as_text() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["select", "en", "1", "2", "3", "4", "--ordinal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one"))
        .stdout(predicate::str::contains("two"))
        .stdout(predicate::str::contains("few"))
        .stdout(predicate::str::contains("other"));
}

#[test]
fn test_select_decimals_and_negatives() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["select", "fr", "1.5", "-1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "one""#))
        .stdout(predicate::str::contains("other").not());
}

#[test]
fn test_select_rejects_bad_values_and_locales() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["select", "en", "1", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));

    plurals(&dir)
        .args(["select", "not a locale", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid locale"));
}

#[test]
fn test_unknown_locale_falls_back_to_other() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["select", "xx_ZZ", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "other""#))
        .stdout(predicate::str::contains(r#""fallback": true"#));
}

#[test]
fn test_categories_of_arabic() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["categories", "ar_EG", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""source": "builtin""#))
        .stdout(predicate::str::contains(r#""zero""#))
        .stdout(predicate::str::contains("n % 100 = 3..10"));
}

#[test]
fn test_resolve_legacy_hebrew() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["resolve", "iw_IL", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""legacy_alias": "iw""#))
        .stdout(predicate::str::contains(r#""key": "he_IL""#));
}

#[test]
fn test_locales_lists_builtin_data() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["locales", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""builtin""#))
        .stdout(predicate::str::contains(r#""ru""#));
}

#[test]
fn test_rules_file_overrides_builtin() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plurals.json"), CUSTOM_TABLE).unwrap();

    plurals(&dir)
        .args(["--rules", "plurals.json", "select", "en", "2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "one""#));
}

#[test]
fn test_config_file_selects_ordinal_rules() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plurals.toml"), "rule_type = \"ordinal\"\n").unwrap();

    plurals(&dir)
        .args(["--config", "plurals.toml", "select", "en", "2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "two""#));

    plurals(&dir)
        .args(["--config", "plurals.toml", "select", "en", "2", "--cardinal", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "other""#));
}

#[test]
fn test_environment_selects_ordinal_rules() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .env("PLURALS_RULE_TYPE", "ordinal")
        .args(["select", "en", "3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "few""#));
}

#[test]
fn test_logging_can_be_switched_off() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "PLURALS_CACHE_RULES=off\n").unwrap();

    plurals(&dir)
        .env("PLURALS_LOG_LEVEL", "off")
        .args(["select", "en", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "one""#));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plurals.toml"), "max_handles = 0\n").unwrap();

    plurals(&dir)
        .args(["--config", "plurals.toml", "locales"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_check_accepts_valid_table() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plurals.json"), CUSTOM_TABLE).unwrap();

    plurals(&dir)
        .args(["check", "plurals.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cardinal and 0 ordinal"));
}

#[test]
fn test_check_rejects_broken_conditions() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("broken.toml"),
        r#"
[supplemental."plurals-type-cardinal".en]
"pluralRule-count-one" = "i = 1 and"

[supplemental."plurals-type-cardinal".fr]
"pluralRule-count-one" = "i = 0,1"
"#,
    )
    .unwrap();

    plurals(&dir)
        .args(["check", "broken.toml", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""locale": "en""#))
        .stdout(predicate::str::contains(r#""locale": "fr""#).not())
        .stderr(predicate::str::contains("1 of 2 rule sets"));
}

#[test]
fn test_check_missing_file() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["check", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    plurals(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plurals"));
}
