//! @acp:module "Find Command"
//! @acp:summary "Match a trait selection against the catalog and print tiered results"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::catalog::{load_catalog, Catalog, Category};
use crate::matcher::{find_matches_with, PipelineOptions, TieredResults};
use crate::render::{render_results, OutputFormat, RenderOptions};
use crate::selection::Selection;

/// Options for the find command
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Selected base attributes
    pub op1: Vec<String>,
    /// Selected effect types
    pub op2: Vec<String>,
    /// Selected special traits
    pub op3: Vec<String>,
    /// Catalog file (built-in catalog when unset)
    pub catalog: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Expand every tier
    pub expand_all: bool,
    /// Pipeline tuning
    pub pipeline: PipelineOptions,
}

impl FindOptions {
    fn values(&self, category: Category) -> &[String] {
        match category {
            Category::Op1 => &self.op1,
            Category::Op2 => &self.op2,
            Category::Op3 => &self.op3,
        }
    }
}

/// Execute the find command
pub fn execute_find(options: FindOptions) -> Result<()> {
    let catalog = load_catalog(options.catalog.as_deref()).context("Failed to load catalog")?;
    let (selection, results) = run_find(&catalog, &options);

    let output = render_results(
        &results,
        &selection,
        options.format,
        RenderOptions {
            expand_all: options.expand_all,
        },
    )?;
    println!("{}", output);
    Ok(())
}

/// Build the selection from the options and run the pipeline
pub fn run_find(catalog: &Catalog, options: &FindOptions) -> (Selection, TieredResults) {
    let selection = build_selection(catalog, options);
    let results = find_matches_with(catalog, &selection, &options.pipeline);
    (selection, results)
}

/// Turn repeated `--opN` flags into a selection.
///
/// A value given twice stays selected. Values outside the vocabulary are
/// kept (they simply match nothing) and reported at warn level.
pub fn build_selection(catalog: &Catalog, options: &FindOptions) -> Selection {
    let mut selection = Selection::new();

    for category in Category::ALL {
        let vocabulary = catalog.options.for_category(category);
        for value in options.values(category) {
            let value = value.trim();
            if value.is_empty() || selection.contains(category, value) {
                continue;
            }
            if !vocabulary.is_empty() && !catalog.options.contains(category, value) {
                tracing::warn!(
                    "'{}' is not a known {} value and will not match anything",
                    value,
                    category.title().to_lowercase()
                );
            }
            selection.toggle(category, value);
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_builtin_catalog;

    #[test]
    fn test_duplicate_flags_stay_selected() {
        let catalog = load_builtin_catalog().unwrap();
        let options = FindOptions {
            op1: vec!["Strength Boost".to_string(), "Strength Boost".to_string()],
            ..Default::default()
        };
        let selection = build_selection(&catalog, &options);
        assert!(selection.contains(Category::Op1, "Strength Boost"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_builtin_perfect_match() {
        let catalog = load_builtin_catalog().unwrap();
        let options = FindOptions {
            op1: vec!["Strength Boost".to_string()],
            op2: vec!["Physical DMG Boost".to_string()],
            op3: vec!["Crushing".to_string()],
            ..Default::default()
        };

        let (_, results) = run_find(&catalog, &options);
        assert_eq!(results.perfect.len(), 1);
        assert_eq!(
            results.perfect[0].weapons,
            vec!["Forgeborn Scathe".to_string()]
        );
        assert_eq!(
            results.perfect[0].zones,
            vec!["Aburrey Quarry".to_string(), "Quarry Depths".to_string()]
        );
    }

    #[test]
    fn test_no_flags_no_results() {
        let catalog = load_builtin_catalog().unwrap();
        let (selection, results) = run_find(&catalog, &FindOptions::default());
        assert!(selection.is_empty());
        assert!(results.is_empty());
    }
}
