//! @acp:module "Grouper"
//! @acp:summary "Collapse matched records sharing a weapons key into one result"
//! @acp:domain matching
//! @acp:layer logic
//!
//! The key is the exact ordered weapons sequence. The first record seen for
//! a key fixes the group's traits and match flags; later records only
//! contribute their zone.

use std::collections::HashMap;

use super::types::{GroupedResult, MatchedRecord};

/// Insertion-ordered accumulator keyed by weapons sequence
#[derive(Debug, Default)]
struct Groups {
    index: HashMap<Vec<String>, usize>,
    groups: Vec<GroupedResult>,
}

impl Groups {
    fn position(&self, weapons: &[String]) -> Option<usize> {
        self.index.get(weapons).copied()
    }

    fn insert(&mut self, group: GroupedResult) {
        self.index.insert(group.weapons.clone(), self.groups.len());
        self.groups.push(group);
    }

    fn add_zone(&mut self, position: usize, zone: &str) {
        let zones = &mut self.groups[position].zones;
        if !zones.iter().any(|z| z == zone) {
            zones.push(zone.to_string());
        }
    }

    fn into_vec(self) -> Vec<GroupedResult> {
        self.groups
    }
}

/// Group matched records (in catalog order) by weapons key
pub fn group_matches(matched: Vec<MatchedRecord<'_>>) -> Vec<GroupedResult> {
    let mut groups = Groups::default();

    for m in &matched {
        match groups.position(m.weapons()) {
            Some(position) => groups.add_zone(position, m.zone()),
            None => groups.insert(GroupedResult::seed(m)),
        }
    }

    let groups = groups.into_vec();
    tracing::debug!(
        "Grouped {} matched records into {} results",
        matched.len(),
        groups.len()
    );
    groups
}

/// Apply grouping again to already-grouped results.
///
/// Distinct keys pass through untouched; a repeated key keeps the first
/// result and absorbs the other's zones. On grouper output this is a no-op.
pub fn regroup(results: Vec<GroupedResult>) -> Vec<GroupedResult> {
    let mut groups = Groups::default();

    for result in results {
        match groups.position(&result.weapons) {
            Some(position) => {
                for zone in &result.zones {
                    groups.add_zone(position, zone);
                }
            }
            None => groups.insert(result),
        }
    }

    groups.into_vec()
}
