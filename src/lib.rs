#![forbid(unsafe_code)]

//! @acp:module "Trait Finder Library"
//! @acp:summary "Match, group, rank and tier weapon trait records against a selection"
//! @acp:domain matching
//! @acp:layer api
//! @acp:stability stable
//!
//! # Trait Finder
//!
//! Pick values in up to three trait categories and get back every weapon
//! whose per-zone trait record matches at least one of them, ranked by how
//! many categories match.
//!
//! ## Pipeline
//!
//! - **Match**: flag which categories each record matches, drop zero matches
//! - **Group**: collapse records sharing a weapons list, collecting zones
//! - **Rank**: most matches first, ties broken on the first zone
//! - **Tier**: split into perfect (3/3), high (2/3) and partial (1/3)
//!
//! ## Example
//!
//! ```rust,no_run
//! use trait_finder::{find_matches, load_builtin_catalog, Category, Selection};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = load_builtin_catalog()?;
//!
//!     let mut selection = Selection::new();
//!     selection.toggle(Category::Op1, "Strength Boost");
//!     selection.toggle(Category::Op3, "Crushing");
//!
//!     let tiers = find_matches(&catalog, &selection);
//!     for result in tiers.iter() {
//!         println!("{:?} in {:?}", result.weapons, result.zones);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod matcher;
pub mod render;
pub mod selection;

// Re-exports
pub use catalog::{
    check_catalog, load_builtin_catalog, load_catalog, load_catalog_file, Catalog, CatalogIssue,
    Category, TraitRecord, Vocabularies,
};
pub use config::Config;
pub use error::{FinderError, Result};
pub use matcher::{
    find_matches, find_matches_with, group_matches, match_catalog, rank, ranked_results, regroup,
    GroupedResult, MatchedRecord, PipelineOptions, Tier, TieredResults,
};
pub use render::{render_results, OutputFormat, RenderOptions};
pub use selection::Selection;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
