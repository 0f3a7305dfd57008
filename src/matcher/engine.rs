//! @acp:module "Match Engine"
//! @acp:summary "Per-record category matching with an optional data-parallel path"
//! @acp:domain matching
//! @acp:layer logic

use rayon::prelude::*;

use crate::catalog::{Catalog, Category, TraitRecord};
use crate::selection::Selection;

use super::types::{MatchFlags, MatchedRecord};

/// Catalog size at which matching switches to the rayon path
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Tuning knobs for a pipeline run. Output never depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub parallel_threshold: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Match a single record. An empty category set never matches.
pub fn match_record<'a>(record: &'a TraitRecord, selection: &Selection) -> MatchedRecord<'a> {
    let mut matched: MatchFlags = [false; 3];
    for category in Category::ALL {
        matched[category.index()] = selection.contains(category, record.value(category));
    }
    let match_count = matched.iter().filter(|m| **m).count() as u8;

    MatchedRecord {
        record,
        match_count,
        matched,
    }
}

/// Match every record serially, keeping only records with at least one match
pub fn match_catalog<'a>(catalog: &'a Catalog, selection: &Selection) -> Vec<MatchedRecord<'a>> {
    match_catalog_with(catalog, selection, &PipelineOptions::default())
}

/// Match every record, keeping catalog order.
///
/// An empty selection returns immediately without touching the catalog.
pub fn match_catalog_with<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    options: &PipelineOptions,
) -> Vec<MatchedRecord<'a>> {
    if selection.is_empty() {
        tracing::debug!("Empty selection, skipping catalog scan");
        return Vec::new();
    }

    let matched: Vec<MatchedRecord<'a>> = if catalog.len() >= options.parallel_threshold {
        tracing::debug!("Matching {} records in parallel", catalog.len());
        catalog
            .records
            .par_iter()
            .map(|record| match_record(record, selection))
            .filter(|m| m.match_count > 0)
            .collect()
    } else {
        catalog
            .records
            .iter()
            .map(|record| match_record(record, selection))
            .filter(|m| m.match_count > 0)
            .collect()
    };

    tracing::debug!(
        "{} of {} records matched at least one category",
        matched.len(),
        catalog.len()
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Vocabularies;

    fn catalog() -> Catalog {
        Catalog::new(
            Vocabularies::default(),
            vec![
                TraitRecord::new("A", "Fire", "Buff", "None", &["Sword"]),
                TraitRecord::new("B", "Fire", "Debuff", "None", &["Sword"]),
                TraitRecord::new("C", "Ice", "Buff", "Flow", &["Bow"]),
            ],
        )
    }

    #[test]
    fn test_match_record_flags() {
        let record = TraitRecord::new("A", "Fire", "Buff", "None", &["Sword"]);
        let selection = Selection::new()
            .with(Category::Op1, "Fire")
            .with(Category::Op3, "None");

        let m = match_record(&record, &selection);
        assert_eq!(m.matched, [true, false, true]);
        assert_eq!(m.match_count, 2);
    }

    #[test]
    fn test_empty_category_is_not_a_wildcard() {
        let record = TraitRecord::new("A", "Fire", "Buff", "None", &["Sword"]);
        let selection = Selection::new().with(Category::Op1, "Ice");

        let m = match_record(&record, &selection);
        assert_eq!(m.matched, [false, false, false]);
        assert_eq!(m.match_count, 0);
    }

    #[test]
    fn test_empty_selection_short_circuits() {
        let catalog = catalog();
        assert!(match_catalog(&catalog, &Selection::new()).is_empty());
    }

    #[test]
    fn test_zero_match_records_are_dropped() {
        let catalog = catalog();
        let selection = Selection::new().with(Category::Op3, "Flow");

        let matched = match_catalog(&catalog, &selection);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].zone(), "C");
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = catalog();
        let selection = Selection::new().with(Category::Op2, "Buff");

        let zones: Vec<&str> = match_catalog(&catalog, &selection)
            .iter()
            .map(|m| m.zone())
            .collect();
        assert_eq!(zones, vec!["A", "C"]);
    }

    #[test]
    fn test_parallel_path_matches_serial() {
        let records: Vec<TraitRecord> = (0..500)
            .map(|i| {
                let op1 = if i % 3 == 0 { "Fire" } else { "Ice" };
                let op2 = if i % 5 == 0 { "Buff" } else { "Debuff" };
                let weapon = format!("W{}", i % 40);
                TraitRecord::new(format!("Z{:04}", i), op1, op2, "None", &[weapon.as_str()])
            })
            .collect();
        let catalog = Catalog::new(Vocabularies::default(), records);
        let selection = Selection::new()
            .with(Category::Op1, "Fire")
            .with(Category::Op2, "Buff");

        let serial = match_catalog_with(
            &catalog,
            &selection,
            &PipelineOptions {
                parallel_threshold: usize::MAX,
            },
        );
        let parallel = match_catalog_with(
            &catalog,
            &selection,
            &PipelineOptions {
                parallel_threshold: 1,
            },
        );
        assert_eq!(serial, parallel);
    }
}
