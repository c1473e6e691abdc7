//! Tests for the resolve subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_resolve() {
    match parse(&["itemlink", "resolve", "items.json"]) {
        CliCommand::Resolve {
            items,
            catalog,
            action,
        } => {
            assert_eq!(items, Path::new("items.json"));
            assert!(catalog.is_none());
            assert!(action.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_with_catalog_and_action() {
    match parse(&[
        "itemlink",
        "resolve",
        "items.json",
        "--catalog",
        "/etc/itemlink/catalog.toml",
        "--action",
        "Edit",
    ]) {
        CliCommand::Resolve {
            items,
            catalog,
            action,
        } => {
            assert_eq!(items, Path::new("items.json"));
            assert_eq!(
                catalog.as_deref(),
                Some(Path::new("/etc/itemlink/catalog.toml"))
            );
            assert_eq!(action.as_deref(), Some("Edit"));
        }
        _ => panic!("expected Resolve with --catalog and --action"),
    }
}

#[test]
fn cli_parse_resolve_requires_items() {
    assert!(Cli::try_parse_from(["itemlink", "resolve"]).is_err());
}
