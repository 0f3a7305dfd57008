//! @acp:module "Validate Command"
//! @acp:summary "Report consistency problems in a trait catalog"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;

use crate::catalog::{check_catalog, load_builtin_catalog, load_catalog_file, CatalogIssue};

/// Options for the validate command
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Catalog file to check (built-in catalog when unset)
    pub file: Option<PathBuf>,
    /// Fail when any issue is found
    pub strict: bool,
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let (label, catalog) = match &options.file {
        Some(path) => (
            path.display().to_string(),
            load_catalog_file(path)
                .with_context(|| format!("Failed to load catalog from {:?}", path))?,
        ),
        None => ("built-in catalog".to_string(), load_builtin_catalog()?),
    };

    let issues = check_catalog(&catalog);
    if issues.is_empty() {
        println!(
            "{} {} is valid ({} records)",
            style("✓").green(),
            label,
            catalog.len()
        );
        return Ok(());
    }

    println!(
        "{} {}: {} issue(s) in {} records",
        style("⚠").yellow(),
        label,
        issues.len(),
        catalog.len()
    );
    for issue in &issues {
        println!("  {} {}", issue_marker(issue), issue);
    }

    if options.strict {
        bail!("{} catalog issue(s) found", issues.len());
    }
    Ok(())
}

fn issue_marker(issue: &CatalogIssue) -> console::StyledObject<&'static str> {
    match issue {
        CatalogIssue::ConflictingTraits { .. } => style("!").red(),
        _ => style("-").yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        assert!(execute_validate(ValidateOptions::default()).is_ok());
    }

    #[test]
    fn test_strict_fails_on_issues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.json");
        std::fs::write(
            &path,
            r#"{
                "options": { "op1": ["Fire"], "op2": ["Buff"], "op3": ["None"] },
                "records": [
                    { "zone": "A", "op1": "Fire", "op2": "Buff", "op3": "None", "weapons": ["Sword"] },
                    { "zone": "A", "op1": "Fire", "op2": "Buff", "op3": "None", "weapons": ["Bow"] }
                ]
            }"#,
        )
        .unwrap();

        let lenient = ValidateOptions {
            file: Some(path.clone()),
            strict: false,
        };
        assert!(execute_validate(lenient).is_ok());

        let strict = ValidateOptions {
            file: Some(path),
            strict: true,
        };
        assert!(execute_validate(strict).is_err());
    }
}
