//! Integration tests for the voyago binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn tools_subcommand_lists_travel_tools() {
    let mut cmd = Command::cargo_bin("voyago").unwrap();
    cmd.arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("book_hotel"))
        .stdout(predicate::str::contains("get_weather"))
        .stdout(predicate::str::contains("convert_currency"));
}

#[test]
fn help_describes_the_assistant() {
    let mut cmd = Command::cargo_bin("voyago").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("travel assistant"));
}

#[test]
fn missing_credentials_fail_without_panicking() {
    let mut cmd = Command::cargo_bin("voyago").unwrap();
    cmd.env_remove("OPENAI_API_KEY")
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .current_dir(std::env::temp_dir())
        .arg("Convert 500 USD to JPY.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
