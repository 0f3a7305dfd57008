//! @acp:module "Matcher Types"
//! @acp:summary "Derived per-record and per-group match results"
//! @acp:domain matching
//! @acp:layer types

use serde::Serialize;

use crate::catalog::{Category, TraitRecord};

/// Per-category match flags, indexed by [`Category::index`]
pub type MatchFlags = [bool; 3];

/// A catalog record annotated with how it matched the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRecord<'a> {
    pub record: &'a TraitRecord,
    /// Number of matched categories, 0 to 3
    pub match_count: u8,
    pub matched: MatchFlags,
}

impl<'a> MatchedRecord<'a> {
    pub fn zone(&self) -> &'a str {
        &self.record.zone
    }

    pub fn weapons(&self) -> &'a [String] {
        &self.record.weapons
    }
}

/// All records sharing one weapons key, collapsed into a single result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedResult {
    /// Every zone that contributed, first-seen order, no duplicates
    pub zones: Vec<String>,
    pub weapons: Vec<String>,
    pub op1: String,
    pub op2: String,
    pub op3: String,
    pub match_count: u8,
    pub matched: MatchFlags,
}

impl GroupedResult {
    /// Seed a group from the first record seen for its key
    pub fn seed(matched: &MatchedRecord<'_>) -> Self {
        let record = matched.record;
        Self {
            zones: vec![record.zone.clone()],
            weapons: record.weapons.clone(),
            op1: record.op1.clone(),
            op2: record.op2.clone(),
            op3: record.op3.clone(),
            match_count: matched.match_count,
            matched: matched.matched,
        }
    }

    /// The zone used for tie-breaking when ranking
    pub fn first_zone(&self) -> &str {
        self.zones.first().map(String::as_str).unwrap_or("")
    }

    pub fn value(&self, category: Category) -> &str {
        match category {
            Category::Op1 => &self.op1,
            Category::Op2 => &self.op2,
            Category::Op3 => &self.op3,
        }
    }

    pub fn is_matched(&self, category: Category) -> bool {
        self.matched[category.index()]
    }
}
