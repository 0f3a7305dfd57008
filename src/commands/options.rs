//! @acp:module "Options Command"
//! @acp:summary "List the selectable values of each trait category"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::catalog::{load_catalog, Catalog, Category};

/// Options for the options command
#[derive(Debug, Clone, Default)]
pub struct OptionsOptions {
    /// Only list this category
    pub category: Option<Category>,
    /// Catalog file (built-in catalog when unset)
    pub catalog: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

/// One vocabulary value and how many records carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionUsage {
    pub value: String,
    pub records: usize,
}

/// Vocabulary listing for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub title: &'static str,
    pub values: Vec<OptionUsage>,
}

/// Execute the options command
pub fn execute_options(options: OptionsOptions) -> Result<()> {
    let catalog = load_catalog(options.catalog.as_deref()).context("Failed to load catalog")?;
    let listings = list_options(&catalog, options.category);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    for listing in &listings {
        println!(
            "{} {} ({})",
            style(listing.category.as_str()).dim(),
            style(listing.title).bold(),
            listing.values.len()
        );
        for usage in &listing.values {
            let count = format!("{} records", usage.records);
            let count = if usage.records == 0 {
                style(count).yellow()
            } else {
                style(count).dim()
            };
            println!("  {:28} {}", usage.value, count);
        }
        println!();
    }

    Ok(())
}

/// Build vocabulary listings in display order
pub fn list_options(catalog: &Catalog, only: Option<Category>) -> Vec<CategoryListing> {
    Category::ALL
        .into_iter()
        .filter(|c| only.map_or(true, |o| o == *c))
        .map(|category| CategoryListing {
            category,
            title: category.title(),
            values: catalog
                .options
                .for_category(category)
                .iter()
                .map(|value| OptionUsage {
                    value: value.clone(),
                    records: catalog.usage_count(category, value),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_builtin_catalog;

    #[test]
    fn test_lists_all_categories() {
        let catalog = load_builtin_catalog().unwrap();
        let listings = list_options(&catalog, None);
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].values.len(), catalog.options.op1.len());
    }

    #[test]
    fn test_single_category_with_counts() {
        let catalog = load_builtin_catalog().unwrap();
        let listings = list_options(&catalog, Some(Category::Op3));
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].category, Category::Op3);

        let crushing = listings[0]
            .values
            .iter()
            .find(|u| u.value == "Crushing")
            .unwrap();
        assert_eq!(crushing.records, 2);
    }
}
