//! @acp:module "Catalog Checks"
//! @acp:summary "Non-fatal consistency checks over a loaded catalog"
//! @acp:domain catalog
//! @acp:layer logic
//!
//! None of these problems stop the pipeline. They are surfaced as warnings
//! on load and listed by the `validate` command.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::types::{Catalog, Category, TraitRecord};

/// A consistency problem found in a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Two records share a zone
    DuplicateZone { zone: String },
    /// A record value is not listed in the category vocabulary
    UnknownValue {
        zone: String,
        category: Category,
        value: String,
    },
    /// A record lists no weapons
    EmptyWeapons { zone: String },
    /// The same weapons key carries different traits in different zones.
    /// Grouping keeps the traits of `first_zone`.
    ConflictingTraits {
        weapons: Vec<String>,
        first_zone: String,
        zone: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateZone { zone } => write!(f, "duplicate zone '{}'", zone),
            CatalogIssue::UnknownValue {
                zone,
                category,
                value,
            } => write!(
                f,
                "zone '{}': {} value '{}' is not in the vocabulary",
                zone, category, value
            ),
            CatalogIssue::EmptyWeapons { zone } => write!(f, "zone '{}' lists no weapons", zone),
            CatalogIssue::ConflictingTraits {
                weapons,
                first_zone,
                zone,
            } => write!(
                f,
                "[{}] has different traits in '{}' and '{}' (results use '{}')",
                weapons.join(", "),
                first_zone,
                zone,
                first_zone
            ),
        }
    }
}

/// Run every check, returning issues in catalog order
pub fn check_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen_zones: HashSet<&str> = HashSet::new();
    let mut first_by_key: HashMap<&[String], &TraitRecord> = HashMap::new();

    for record in &catalog.records {
        if !seen_zones.insert(record.zone.as_str()) {
            issues.push(CatalogIssue::DuplicateZone {
                zone: record.zone.clone(),
            });
        }

        for category in Category::ALL {
            let vocabulary = catalog.options.for_category(category);
            let value = record.value(category);
            // An empty vocabulary means the catalog does not constrain that category
            if !vocabulary.is_empty() && !catalog.options.contains(category, value) {
                issues.push(CatalogIssue::UnknownValue {
                    zone: record.zone.clone(),
                    category,
                    value: value.to_string(),
                });
            }
        }

        if record.weapons.is_empty() {
            issues.push(CatalogIssue::EmptyWeapons {
                zone: record.zone.clone(),
            });
            continue;
        }

        match first_by_key.get(record.weapons.as_slice()) {
            Some(first) if !same_traits(first, record) => {
                issues.push(CatalogIssue::ConflictingTraits {
                    weapons: record.weapons.clone(),
                    first_zone: first.zone.clone(),
                    zone: record.zone.clone(),
                });
            }
            Some(_) => {}
            None => {
                first_by_key.insert(record.weapons.as_slice(), record);
            }
        }
    }

    issues
}

fn same_traits(a: &TraitRecord, b: &TraitRecord) -> bool {
    a.op1 == b.op1 && a.op2 == b.op2 && a.op3 == b.op3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Vocabularies;
    use pretty_assertions::assert_eq;

    fn vocab() -> Vocabularies {
        Vocabularies {
            op1: vec!["Fire".to_string(), "Ice".to_string()],
            op2: vec!["Buff".to_string(), "Debuff".to_string()],
            op3: vec!["None".to_string()],
        }
    }

    #[test]
    fn test_clean_catalog() {
        let catalog = Catalog::new(
            vocab(),
            vec![
                TraitRecord::new("A", "Fire", "Buff", "None", &["Sword"]),
                TraitRecord::new("B", "Fire", "Buff", "None", &["Sword"]),
            ],
        );
        assert!(check_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_reports_each_problem() {
        let catalog = Catalog::new(
            vocab(),
            vec![
                TraitRecord::new("A", "Fire", "Buff", "None", &["Sword"]),
                TraitRecord::new("A", "Fire", "Debuff", "None", &["Sword"]),
                TraitRecord::new("C", "Wind", "Buff", "None", &[]),
            ],
        );

        assert_eq!(
            check_catalog(&catalog),
            vec![
                CatalogIssue::DuplicateZone {
                    zone: "A".to_string()
                },
                CatalogIssue::ConflictingTraits {
                    weapons: vec!["Sword".to_string()],
                    first_zone: "A".to_string(),
                    zone: "A".to_string(),
                },
                CatalogIssue::UnknownValue {
                    zone: "C".to_string(),
                    category: Category::Op1,
                    value: "Wind".to_string(),
                },
                CatalogIssue::EmptyWeapons {
                    zone: "C".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_vocabulary_is_unconstrained() {
        let catalog = Catalog::new(
            Vocabularies::default(),
            vec![TraitRecord::new("A", "Anything", "Goes", "Here", &["Sword"])],
        );
        assert!(check_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_weapon_order_is_part_of_key() {
        let catalog = Catalog::new(
            vocab(),
            vec![
                TraitRecord::new("A", "Fire", "Buff", "None", &["Sword", "Bow"]),
                TraitRecord::new("B", "Ice", "Buff", "None", &["Bow", "Sword"]),
            ],
        );
        assert!(check_catalog(&catalog).is_empty());
    }
}
