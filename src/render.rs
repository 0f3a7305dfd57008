//! @acp:module "Renderer"
//! @acp:summary "Text and JSON rendering of tiered match results"
//! @acp:domain cli
//! @acp:layer output

use console::style;
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::error::{FinderError, Result};
use crate::matcher::{GroupedResult, Tier, TieredResults};
use crate::selection::Selection;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = FinderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FinderError::Config(format!("Unknown output format: {}", s))),
        }
    }
}

/// Presentation switches for text output
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Show every tier regardless of the default-expand policy
    pub expand_all: bool,
}

/// Render results for the given selection
pub fn render_results(
    results: &TieredResults,
    selection: &Selection,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(results, selection),
        OutputFormat::Text => Ok(render_text(results, selection, options)),
    }
}

fn render_text(results: &TieredResults, selection: &Selection, options: RenderOptions) -> String {
    if selection.is_empty() {
        return format!(
            "{}\n  {}",
            style("Pick at least one trait to start.").bold(),
            style("Weapons matching one or more selected traits will be listed.").dim()
        );
    }

    if results.is_empty() {
        return format!(
            "{}\n  {}",
            style("No matching weapons.").bold(),
            style("Try a different combination.").dim()
        );
    }

    let mut output = String::new();
    output.push_str(&render_selection(selection));
    output.push_str("\n\n");

    for (tier, tier_results) in results.populated() {
        let expanded = options.expand_all || results.expanded_by_default(tier);
        output.push_str(&render_tier_header(tier, tier_results.len(), expanded));
        output.push('\n');

        if expanded {
            for result in tier_results {
                output.push_str(&render_card(result, tier));
                output.push('\n');
            }
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

fn render_selection(selection: &Selection) -> String {
    let parts: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            let values = selection.get(*c);
            let shown = if values.is_empty() {
                "-".to_string()
            } else {
                values.iter().cloned().collect::<Vec<_>>().join(", ")
            };
            format!("{}: {}", c.title(), shown)
        })
        .collect();
    format!("{} {}", style("Selected").dim(), parts.join(" | "))
}

fn render_tier_header(tier: Tier, count: usize, expanded: bool) -> String {
    let marker = if expanded { "▾" } else { "▸" };
    let title = match tier {
        Tier::Perfect => style(tier.title()).bold().blue(),
        _ => style(tier.title()).bold(),
    };
    let mut header = format!("{} {} ({})", marker, title, count);
    if !expanded {
        header.push_str(&format!(
            " {}",
            style("collapsed, pass --expand-all to show").dim()
        ));
    }
    header
}

fn render_card(result: &GroupedResult, tier: Tier) -> String {
    let badge = match tier {
        Tier::Perfect => style(format!("[{}]", tier.badge())).blue().bold(),
        _ => style(format!("[{}]", tier.badge())).dim(),
    };

    let mut card = format!("  {} {}\n", style(result.zones.join(" · ")).dim(), badge);
    for weapon in &result.weapons {
        card.push_str(&format!("    {}\n", style(weapon).bold()));
    }

    let tags: Vec<String> = Category::ALL
        .iter()
        .map(|c| render_tag(result.value(*c), result.is_matched(*c)))
        .collect();
    card.push_str(&format!("    {}", tags.join("  ")));
    card
}

fn render_tag(label: &str, matched: bool) -> String {
    if matched {
        style(format!("✓ {}", label)).blue().to_string()
    } else {
        style(format!("· {}", label)).dim().strikethrough().to_string()
    }
}

fn render_json(results: &TieredResults, selection: &Selection) -> Result<String> {
    #[derive(Serialize)]
    struct JsonOutput<'a> {
        selection: &'a Selection,
        total: usize,
        tiers: &'a TieredResults,
    }

    let output = JsonOutput {
        selection,
        total: results.total(),
        tiers: results,
    };

    serde_json::to_string_pretty(&output).map_err(Into::into)
}
