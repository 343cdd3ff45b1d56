//
//  createsend
//  tests/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Integration tests for loading and saving configuration files.

use std::fs;

use createsend::config::Config;
use createsend::Authentication;
use tempfile::tempdir;

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("createsend/config.toml");

    let config = Config {
        base_url: Some("https://api.example.com/api/v3.3/".to_string()),
        api_key: Some("secret".to_string()),
        retry_count: Some(2),
        timeout_secs: Some(15),
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("api_key = \"secret\""));
    assert!(!written.contains("oauth_token"));
}

#[test]
fn test_loaded_config_builds_client() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "oauth_token = \"tok\"\nbase_url = \"http://api.example.com/\"\n").unwrap();

    let client = Config::load_from(&path)
        .unwrap()
        .client_builder()
        .build()
        .unwrap();
    assert_eq!(client.authentication(), &Authentication::oauth("tok"));
    assert_eq!(client.base_url().as_str(), "https://api.example.com/");
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "retry_count = \"many\"").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}

#[test]
fn test_missing_file_is_an_error_for_load_from() {
    let dir = tempdir().unwrap();
    assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
}
