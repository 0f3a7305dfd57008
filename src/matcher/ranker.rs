//! @acp:module "Ranker"
//! @acp:summary "Order grouped results by match count, then first zone"
//! @acp:domain matching
//! @acp:layer logic

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use super::types::GroupedResult;

/// Sort in place: `match_count` descending, then `zones[0]` ascending.
///
/// The tie-break uses the first zone collected for each group, so it
/// follows catalog scan order rather than weapon names. The sort is stable.
pub fn rank(results: &mut [GroupedResult]) {
    results.sort_by(compare_results);
}

/// Consuming variant of [`rank`]
pub fn ranked(mut results: Vec<GroupedResult>) -> Vec<GroupedResult> {
    rank(&mut results);
    results
}

pub fn compare_results(a: &GroupedResult, b: &GroupedResult) -> Ordering {
    b.match_count
        .cmp(&a.match_count)
        .then_with(|| locale_cmp(a.first_zone(), b.first_zone()))
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("Root collator unavailable, falling back to byte order: {}", e);
                None
            }
        };
}

/// Locale-aware string comparison using root (CLDR) collation at tertiary strength.
///
/// Accents and case only matter once base letters tie, lowercase sorts
/// before uppercase, and punctuation follows the CLDR symbol order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
