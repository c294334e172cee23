use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("securepass").unwrap();
    // Keep the environment from leaking configuration into the tests.
    for key in [
        "DEFAULT_PASSWORD_LENGTH",
        "DEFAULT_SYMBOLS",
        "MIN_RECOMMENDED_LENGTH",
        "MAX_PASSWORD_LENGTH",
        "GENERATE_HASHES",
        "LOG_LEVEL",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn pin_preset_generates_digits_only() {
    let json = run_json(&["generate", "--preset", "pin", "--no-hashes"]);
    let password = json["passwords"][0]["password"].as_str().unwrap();
    assert_eq!(password.len(), 6);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(json["strength"]["tier"], "weak");
    assert_eq!(json["strength"]["display_percentage"], 20);
    assert_eq!(json["preset"], "pin");
    assert!(json["warning"].is_string());
}

#[test]
fn generate_includes_verifiable_hashes() {
    let json = run_json(&["generate", "--length", "20"]);
    let entry = &json["passwords"][0];
    let password = entry["password"].as_str().unwrap();
    assert_eq!(password.chars().count(), 20);

    let record = entry["hashes"]["pbkdf2"].as_str().unwrap();
    assert!(record.starts_with("pbkdf2_sha256$100000$"));
    assert_eq!(entry["hashes"]["sha256"].as_str().unwrap().len(), 64);
    assert_eq!(entry["hashes"]["sha512"].as_str().unwrap().len(), 128);

    cmd()
        .args(["verify", "--", record, password])
        .assert()
        .success()
        .stdout(contains("matches"));

    cmd()
        .args(["verify", "--", record, "not-the-password"])
        .assert()
        .failure()
        .stdout(contains("does not match"));
}

#[test]
fn count_produces_several_passwords() {
    let json = run_json(&["generate", "-n", "3", "--no-hashes"]);
    let passwords = json["passwords"].as_array().unwrap();
    assert_eq!(passwords.len(), 3);
    assert!(passwords.iter().all(|p| p.get("hashes").is_none()));
}

#[test]
fn disabling_every_class_is_an_error() {
    cmd()
        .args([
            "generate",
            "--no-uppercase",
            "--no-lowercase",
            "--no-numbers",
            "--no-symbols",
        ])
        .assert()
        .failure()
        .stderr(contains("At least one character type must be selected"));
}

#[test]
fn length_above_configured_maximum_is_rejected() {
    cmd()
        .args(["generate", "--length", "500"])
        .assert()
        .failure()
        .stderr(contains("between 1 and 128"));

    cmd()
        .env("MAX_PASSWORD_LENGTH", "1024")
        .args(["generate", "--length", "500", "--no-hashes"])
        .assert()
        .success();
}

#[test]
fn strength_reports_tier_without_generating() {
    let json = run_json(&["strength", "--length", "8", "--no-uppercase", "--no-lowercase", "--no-symbols"]);
    let bits = json["strength"]["entropy_bits"].as_f64().unwrap();
    assert!((bits - 8.0 * 10f64.log2()).abs() < 1e-9);
    assert_eq!(json["strength"]["tier"], "weak");

    cmd()
        .args(["strength", "--preset", "passphrase"])
        .assert()
        .success()
        .stdout(contains("excellent").and(contains("Preset: passphrase")));
}

#[test]
fn presets_lists_all_six() {
    let json = run_json(&["presets"]);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["conservative", "standard", "maximum", "alphanumeric", "pin", "passphrase"]
    );

    cmd()
        .arg("presets")
        .assert()
        .success()
        .stdout(contains("Long Passphrase"));
}

#[test]
fn hash_reads_password_from_stdin() {
    let json = cmd()
        .args(["--json", "hash"])
        .write_stdin("abc\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(
        json["sha256"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn verify_rejects_malformed_record() {
    cmd()
        .args(["verify", "md5$1$aa$bb", "secret"])
        .assert()
        .failure()
        .stderr(contains("Invalid PBKDF2 record"));
}

#[test]
fn custom_symbols_are_used() {
    let json = run_json(&[
        "generate",
        "--no-uppercase",
        "--no-lowercase",
        "--no-numbers",
        "--symbols",
        "#",
        "--length",
        "10",
        "--no-hashes",
    ]);
    assert_eq!(json["passwords"][0]["password"], "##########");
}

#[test]
fn default_command_generates_a_password() {
    cmd()
        .env("GENERATE_HASHES", "false")
        .assert()
        .success()
        .stdout(contains("Strength:"));
}

#[test]
fn invalid_config_values_are_logged() {
    cmd()
        .env("DEFAULT_PASSWORD_LENGTH", "abc")
        .env("LOG_LEVEL", "warn")
        .args(["generate", "--no-hashes"])
        .assert()
        .success()
        .stderr(contains("Ignoring invalid DEFAULT_PASSWORD_LENGTH 'abc'"));
}

#[test]
fn oversized_default_length_falls_back_to_maximum() {
    let out = cmd()
        .env("DEFAULT_PASSWORD_LENGTH", "200")
        .args(["--json", "generate", "--no-hashes"])
        .assert()
        .success()
        .stderr(contains("exceeds MAX_PASSWORD_LENGTH"))
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).unwrap();
    let password = json["passwords"][0]["password"].as_str().unwrap();
    assert_eq!(password.chars().count(), 128);
}

#[test]
fn verify_refuses_huge_iteration_counts() {
    let record = format!("pbkdf2_sha256$4294967295${}${}", "ab".repeat(16), "cd".repeat(32));
    cmd()
        .args(["verify", &record, "secret"])
        .assert()
        .failure()
        .stderr(contains("Invalid PBKDF2 record"));
}
