use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn test_version_output() {
    Command::cargo_bin("fieldopt")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("fieldopt 0.1.0"));
}
