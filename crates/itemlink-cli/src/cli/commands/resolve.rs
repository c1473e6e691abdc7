//! `itemlink resolve` – print action references for each item.

use anyhow::{bail, Result};
use itemlink_core::catalog::{load_items, Catalog, JsonItem};
use itemlink_core::ItemAction;
use std::path::Path;

/// Outcome of resolving a batch of items.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ResolveReport {
    /// `index<TAB>action<TAB>reference` lines.
    pub lines: Vec<String>,
    /// One message per failed resolution.
    pub failures: Vec<String>,
}

pub(crate) fn resolve_items(
    catalog: &Catalog,
    items: &[JsonItem],
    action: Option<&str>,
) -> Result<ResolveReport> {
    let actions: Vec<&ItemAction<JsonItem>> = match action {
        Some(name) => match catalog.action(name) {
            Some(a) => vec![a],
            None => bail!("catalog has no action named {:?}", name),
        },
        None => catalog.actions().iter().collect(),
    };

    let mut report = ResolveReport::default();
    for (index, item) in items.iter().enumerate() {
        for action in &actions {
            match action.resolve(item) {
                Ok(reference) => report
                    .lines
                    .push(format!("{}\t{}\t{}", index, action.name(), reference)),
                Err(err) => {
                    tracing::warn!(index, action = action.name(), "resolution failed: {}", err);
                    report
                        .failures
                        .push(format!("item {} action {:?}: {}", index, action.name(), err));
                }
            }
        }
    }
    Ok(report)
}

pub fn run_resolve(catalog: &Catalog, items_path: &Path, action: Option<&str>) -> Result<()> {
    let items = load_items(items_path)?;
    let report = resolve_items(catalog, &items, action)?;
    for line in &report.lines {
        println!("{}", line);
    }
    for failure in &report.failures {
        eprintln!("{}", failure);
    }
    if !report.failures.is_empty() {
        bail!("{} resolution(s) failed", report.failures.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemlink_core::catalog::parse_items;
    use itemlink_core::config::ItemlinkConfig;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
            [[fields]]
            name = "id"

            [[actions]]
            name = "Edit"
            template = "/operations/:id/edit"
            params = ["id"]

            [[actions]]
            name = "Delete"
            template = "/operations/:id/delete"
            params = ["id"]
            "#,
            &ItemlinkConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn all_actions_for_all_items() {
        let items = parse_items(r#"[{"id":1},{"id":2}]"#).unwrap();
        let report = resolve_items(&catalog(), &items, None).unwrap();
        assert_eq!(
            report.lines,
            vec![
                "0\tEdit\t#/operations/1/edit",
                "0\tDelete\t#/operations/1/delete",
                "1\tEdit\t#/operations/2/edit",
                "1\tDelete\t#/operations/2/delete",
            ]
        );
        assert!(report.failures.is_empty());
    }

    #[test]
    fn single_action_filter() {
        let items = parse_items(r#"{"id":"a b"}"#).unwrap();
        let report = resolve_items(&catalog(), &items, Some("Delete")).unwrap();
        assert_eq!(report.lines, vec!["0\tDelete\t#/operations/a%20b/delete"]);
    }

    #[test]
    fn unknown_action_is_an_error() {
        let items = parse_items(r#"{"id":1}"#).unwrap();
        assert!(resolve_items(&catalog(), &items, Some("Archive")).is_err());
    }

    #[test]
    fn failures_are_collected() {
        let items = parse_items(r#"[{"id":1},{}]"#).unwrap();
        let report = resolve_items(&catalog(), &items, Some("Edit")).unwrap();
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].starts_with("item 1 action \"Edit\""));
    }
}
