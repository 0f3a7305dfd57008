//! @acp:module "Selection"
//! @acp:summary "Three independent sets of chosen trait values"
//! @acp:domain matching
//! @acp:layer types
//!
//! `toggle` and `reset` are the only mutators. Membership is all that
//! matters to matching; sets are ordered only so output is deterministic.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Category;

/// User selection across the three categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub op1: BTreeSet<String>,
    pub op2: BTreeSet<String>,
    pub op3: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the category if absent, remove it if present.
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, category: Category, value: &str) -> bool {
        let set = self.set_mut(category);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    /// Clear all three categories
    pub fn reset(&mut self) {
        self.op1.clear();
        self.op2.clear();
        self.op3.clear();
    }

    /// Builder-style toggle, handy when assembling a selection from flags
    pub fn with(mut self, category: Category, value: &str) -> Self {
        self.toggle(category, value);
        self
    }

    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Op1 => &self.op1,
            Category::Op2 => &self.op2,
            Category::Op3 => &self.op3,
        }
    }

    fn set_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Op1 => &mut self.op1,
            Category::Op2 => &mut self.op2,
            Category::Op3 => &mut self.op3,
        }
    }

    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.get(category).contains(value)
    }

    /// True when nothing is selected in any category
    pub fn is_empty(&self) -> bool {
        self.op1.is_empty() && self.op2.is_empty() && self.op3.is_empty()
    }

    /// Total number of selected values
    pub fn len(&self) -> usize {
        self.op1.len() + self.op2.len() + self.op3.len()
    }
}
