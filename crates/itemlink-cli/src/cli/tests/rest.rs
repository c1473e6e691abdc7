//! Tests for check, describe, digest.

use super::parse;
use crate::cli::{catalog_path, CliCommand};
use itemlink_core::config::ItemlinkConfig;
use std::path::{Path, PathBuf};

#[test]
fn cli_parse_check() {
    match parse(&["itemlink", "check", "--catalog", "c.toml"]) {
        CliCommand::Check { catalog } => {
            assert_eq!(catalog.as_deref(), Some(Path::new("c.toml")))
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_without_catalog() {
    match parse(&["itemlink", "check"]) {
        CliCommand::Check { catalog } => assert!(catalog.is_none()),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_describe() {
    match parse(&["itemlink", "describe", "ops.json"]) {
        CliCommand::Describe { items, catalog } => {
            assert_eq!(items, Path::new("ops.json"));
            assert!(catalog.is_none());
        }
        _ => panic!("expected Describe"),
    }
}

#[test]
fn cli_parse_digest() {
    match parse(&["itemlink", "digest", "hello world"]) {
        CliCommand::Digest { text } => assert_eq!(text, "hello world"),
        _ => panic!("expected Digest"),
    }
}

#[test]
fn catalog_flag_overrides_config() {
    let cfg = ItemlinkConfig {
        catalog: Some(PathBuf::from("from-config.toml")),
        ..ItemlinkConfig::default()
    };
    assert_eq!(
        catalog_path(Some(PathBuf::from("flag.toml")), &cfg).unwrap(),
        PathBuf::from("flag.toml")
    );
    assert_eq!(
        catalog_path(None, &cfg).unwrap(),
        PathBuf::from("from-config.toml")
    );
    assert!(catalog_path(None, &ItemlinkConfig::default()).is_err());
}
