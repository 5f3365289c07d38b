//! Binary-level tests. Each test points HOME at its own temp dir so the
//! config file under `~/.wztools` never touches the real profile.
// cargo_bin is deprecated in favor of the cargo_bin! macro; both work.
#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn wztools(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("wztools"));
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .write_stdin("");
    cmd
}

fn config_path(home: &TempDir) -> PathBuf {
    home.path().join(".wztools").join("config.json")
}

fn write_config(home: &TempDir, xsuaa_url: &str) {
    let dir = home.path().join(".wztools");
    fs::create_dir_all(&dir).unwrap();
    let config = serde_json::json!({
        "clientId": "sb-client!t123",
        "clientSecret": "s3cr3t",
        "userId": "jane@example.com",
        "password": "hunter2",
        "xsuaaUrl": xsuaa_url,
        "workzoneHost": "acme.dt.launchpad.cfapps.eu10.hana.ondemand.com",
        "subdomain": "acme",
        "subaccountId": "sub-1"
    });
    fs::write(dir.join("config.json"), config.to_string()).unwrap();
}

const INIT_FLAGS: [&str; 17] = [
    "init",
    "--client-id",
    "sb-client!t123",
    "--client-secret",
    "s3cr3t",
    "--user-id",
    "jane@example.com",
    "--password",
    "hunter2",
    "--xsuaa-url",
    "https://acme.authentication.eu10.hana.ondemand.com",
    "--workzone-host",
    "acme.dt.launchpad.cfapps.eu10.hana.ondemand.com",
    "--subdomain",
    "acme",
    "--subaccount-id",
    "sub-1",
];

#[test]
fn status_without_config_reports_not_found() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file not found"))
        .stdout(predicate::str::contains("wztools init"));
}

#[test]
fn clear_cache_without_config_hints_at_init() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .arg("clear_cache")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("Run \"wztools init\" first"));
}

#[test]
fn clear_cache_dash_alias_behaves_the_same() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .arg("clear-cache")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wztools init"));
}

#[test]
fn unknown_command_lists_available_commands() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .arg("purge")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid command: purge"))
        .stdout(predicate::str::contains("wztools init"))
        .stdout(predicate::str::contains("wztools clear_cache"))
        .stdout(predicate::str::contains("wztools status"));
}

#[test]
fn init_with_all_flags_writes_config_without_prompting() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .args(INIT_FLAGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Using provided CLI options"))
        .stdout(predicate::str::contains("Configuration saved successfully"))
        .stdout(predicate::str::contains("config.json"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config_path(&home)).unwrap()).unwrap();
    assert_eq!(saved["userId"], "jane@example.com");
    assert_eq!(
        saved["workzoneHost"],
        "acme.dt.launchpad.cfapps.eu10.hana.ondemand.com"
    );

    wztools(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file exists"));
}

#[test]
fn init_output_never_echoes_secrets() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .args(INIT_FLAGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("s3cr3t").not())
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn init_missing_flags_without_terminal_fails() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .args(["init", "--client-id", "sb-client!t123"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Initialization failed"))
        .stderr(predicate::str::contains("--password"));

    assert!(!config_path(&home).exists());
}

#[test]
fn init_rejects_protocol_in_workzone_host_flag() {
    let home = TempDir::new().unwrap();
    let mut flags = INIT_FLAGS.to_vec();
    flags[12] = "https://acme.dt.launchpad.cfapps.eu10.hana.ondemand.com";

    wztools(&home)
        .args(flags)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("without protocol"))
        .stderr(predicate::str::contains("--workzone-host"));
}

#[test]
fn clear_cache_reports_token_rejection() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/oauth/token");
        then.status(401)
            .json_body(serde_json::json!({"error": "unauthorized"}));
    });

    let home = TempDir::new().unwrap();
    write_config(&home, &server.base_url());

    wztools(&home)
        .arg("clear_cache")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Configuration loaded successfully"))
        .stderr(predicate::str::contains("401 Unauthorized"));

    token_mock.assert();
}

#[test]
fn clear_cache_with_corrupt_config_is_parse_error() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".wztools");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), "{ not json").unwrap();

    wztools(&home)
        .arg("clear_cache")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn shows_version() {
    let home = TempDir::new().unwrap();
    wztools(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
