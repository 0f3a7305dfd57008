//! @acp:module "Matcher"
//! @acp:summary "Match, group, rank and tier catalog records against a selection"
//! @acp:domain matching
//! @acp:layer feature
//!
//! Pipeline: engine -> grouper -> ranker -> tiers. Every run recomputes from
//! the immutable catalog and a snapshot of the selection; nothing is cached.

pub mod engine;
pub mod grouper;
pub mod ranker;
pub mod tiers;
pub mod types;

pub use engine::{
    match_catalog, match_catalog_with, match_record, PipelineOptions, DEFAULT_PARALLEL_THRESHOLD,
};
pub use grouper::{group_matches, regroup};
pub use ranker::{locale_cmp, rank, ranked};
pub use tiers::{Tier, TieredResults};
pub use types::*;

use crate::catalog::Catalog;
use crate::selection::Selection;

/// Grouped and ranked results, before tier partitioning
pub fn ranked_results(
    catalog: &Catalog,
    selection: &Selection,
    options: &PipelineOptions,
) -> Vec<GroupedResult> {
    let matched = match_catalog_with(catalog, selection, options);
    ranked(group_matches(matched))
}

/// Run the full pipeline with default options
pub fn find_matches(catalog: &Catalog, selection: &Selection) -> TieredResults {
    find_matches_with(catalog, selection, &PipelineOptions::default())
}

/// Run the full pipeline
pub fn find_matches_with(
    catalog: &Catalog,
    selection: &Selection,
    options: &PipelineOptions,
) -> TieredResults {
    let tiers = TieredResults::partition(ranked_results(catalog, selection, options));
    tracing::debug!(
        "Tiers: {} perfect, {} high, {} partial",
        tiers.perfect.len(),
        tiers.high.len(),
        tiers.partial.len()
    );
    tiers
}
