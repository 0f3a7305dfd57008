//! @acp:module "Interactive Command"
//! @acp:summary "Prompt-driven selection with live re-matching"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Drives the selection purely through toggle and reset, re-running the
//! pipeline after every change.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use crate::catalog::{load_catalog, Category};
use crate::matcher::{find_matches_with, PipelineOptions};
use crate::render::{render_results, OutputFormat, RenderOptions};
use crate::selection::Selection;

/// Options for the interactive command
#[derive(Debug, Clone, Default)]
pub struct InteractiveOptions {
    /// Catalog file (built-in catalog when unset)
    pub catalog: Option<PathBuf>,
    /// Expand every tier
    pub expand_all: bool,
    /// Pipeline tuning
    pub pipeline: PipelineOptions,
}

/// Execute the interactive command
pub fn execute_interactive(options: InteractiveOptions) -> Result<()> {
    let catalog = load_catalog(options.catalog.as_deref()).context("Failed to load catalog")?;
    let theme = ColorfulTheme::default();
    let render_options = RenderOptions {
        expand_all: options.expand_all,
    };
    let mut selection = Selection::new();

    loop {
        let actions = menu_items(&selection);
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0..=2 => {
                let category = Category::ALL[choice];
                let values = catalog.options.for_category(category);
                if values.is_empty() {
                    println!("{} No values defined for {}", style("!").yellow(), category.title());
                    continue;
                }
                let defaults: Vec<bool> = values
                    .iter()
                    .map(|v| selection.contains(category, v))
                    .collect();
                let picked = MultiSelect::with_theme(&theme)
                    .with_prompt(category.title())
                    .items(values)
                    .defaults(&defaults)
                    .interact()?;
                apply_picks(&mut selection, category, values, &picked);
            }
            3 => {
                selection.reset();
                println!("{} Selection cleared", style("✓").green());
            }
            _ => break,
        }

        let results = find_matches_with(&catalog, &selection, &options.pipeline);
        let output = render_results(&results, &selection, OutputFormat::Text, render_options)?;
        println!("\n{}\n", output);
    }

    Ok(())
}

fn menu_items(selection: &Selection) -> Vec<String> {
    let mut items: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} ({} selected)", c.title(), selection.get(*c).len()))
        .collect();
    items.push("Reset".to_string());
    items.push("Quit".to_string());
    items
}

/// Reconcile a multi-select result with the selection by toggling only the
/// values whose state changed. Returns the number of toggles applied.
pub fn apply_picks(
    selection: &mut Selection,
    category: Category,
    values: &[String],
    picked: &[usize],
) -> usize {
    let mut toggled = 0;
    for (i, value) in values.iter().enumerate() {
        if picked.contains(&i) != selection.contains(category, value) {
            selection.toggle(category, value);
            toggled += 1;
        }
    }
    toggled
}
