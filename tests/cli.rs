//
//  createsend
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Integration tests for the `cm` binary: argument parsing, help output and
//! failure modes that do not need network access.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// `cm` with credentials stripped and config directories pointed at a
/// temporary home.
fn cm(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cm").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("APPDATA", home.path())
        .env_remove("CREATESEND_API_KEY")
        .env_remove("CREATESEND_OAUTH_TOKEN")
        .env_remove("CREATESEND_BASE_URL")
        .env_remove("CREATESEND_RETRY_COUNT");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = tempdir().unwrap();
    cm(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("account"))
        .stdout(predicate::str::contains("campaign"))
        .stdout(predicate::str::contains("transactional"));
}

#[test]
fn test_version() {
    let home = tempdir().unwrap();
    cm(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_credentials_fails_with_auth_exit_code() {
    let home = tempdir().unwrap();
    cm(&home)
        .args(["account", "clients"])
        .assert()
        .code(4)
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("No credentials configured"))
        .stderr(predicate::str::contains("CREATESEND_API_KEY"));
}

#[test]
fn test_empty_credential_env_is_ignored() {
    let home = tempdir().unwrap();
    cm(&home)
        .env("CREATESEND_API_KEY", "")
        .args(["account", "billing"])
        .assert()
        .code(4);
}

#[test]
fn test_invalid_retry_count_env() {
    let home = tempdir().unwrap();
    cm(&home)
        .env("CREATESEND_RETRY_COUNT", "-1")
        .args(["account", "clients"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CREATESEND_RETRY_COUNT"));
}

#[test]
fn test_send_without_confirmation_is_usage_error() {
    let home = tempdir().unwrap();
    cm(&home)
        .args(["campaign", "send", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--confirm-to"));
}

#[test]
fn test_dot_segment_endpoint_is_rejected_without_network() {
    let home = tempdir().unwrap();
    cm(&home)
        .env("CREATESEND_API_KEY", "key")
        .args(["client", "lists", ".."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid identifier"));
}

#[test]
fn test_api_rejects_foreign_host() {
    let home = tempdir().unwrap();
    cm(&home)
        .env("CREATESEND_API_KEY", "key")
        .args(["api", "http://evil.example/steal"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is outside"));
}

#[test]
fn test_api_rejects_unsupported_method() {
    let home = tempdir().unwrap();
    cm(&home)
        .env("CREATESEND_API_KEY", "key")
        .args(["api", "-X", "PATCH", "clients.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported HTTP method"));
}
