//! @acp:module "Catalog Types"
//! @acp:summary "Trait records, option vocabularies and categories"
//! @acp:domain catalog
//! @acp:layer types

use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// One of the three independent option categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Op1,
    Op2,
    Op3,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Op1, Category::Op2, Category::Op3];

    /// Zero-based position, matching `matched[i]` flags
    pub fn index(self) -> usize {
        match self {
            Category::Op1 => 0,
            Category::Op2 => 1,
            Category::Op3 => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Op1 => "op1",
            Category::Op2 => "op2",
            Category::Op3 => "op3",
        }
    }

    /// Human-facing category title
    pub fn title(self) -> &'static str {
        match self {
            Category::Op1 => "Base attribute",
            Category::Op2 => "Effect type",
            Category::Op3 => "Special trait",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "op1" => Ok(Category::Op1),
            "2" | "op2" => Ok(Category::Op2),
            "3" | "op3" => Ok(Category::Op3),
            _ => Err(FinderError::InvalidCategory(s.to_string())),
        }
    }
}

/// A single per-zone trait record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRecord {
    /// Unique origin context of this record
    pub zone: String,
    pub op1: String,
    pub op2: String,
    pub op3: String,
    /// Entities sharing this trait record, in catalog order
    pub weapons: Vec<String>,
}

impl TraitRecord {
    pub fn new(
        zone: impl Into<String>,
        op1: impl Into<String>,
        op2: impl Into<String>,
        op3: impl Into<String>,
        weapons: &[&str],
    ) -> Self {
        Self {
            zone: zone.into(),
            op1: op1.into(),
            op2: op2.into(),
            op3: op3.into(),
            weapons: weapons.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Trait value for the given category
    pub fn value(&self, category: Category) -> &str {
        match category {
            Category::Op1 => &self.op1,
            Category::Op2 => &self.op2,
            Category::Op3 => &self.op3,
        }
    }
}

/// Permissible values per category, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabularies {
    #[serde(default)]
    pub op1: Vec<String>,
    #[serde(default)]
    pub op2: Vec<String>,
    #[serde(default)]
    pub op3: Vec<String>,
}

impl Vocabularies {
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Op1 => &self.op1,
            Category::Op2 => &self.op2,
            Category::Op3 => &self.op3,
        }
    }

    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.for_category(category).iter().any(|v| v == value)
    }
}

/// Immutable catalog: vocabularies plus ordered trait records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub options: Vocabularies,
    #[serde(default)]
    pub records: Vec<TraitRecord>,
}

impl Catalog {
    pub fn new(options: Vocabularies, records: Vec<TraitRecord>) -> Self {
        Self { options, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose value in `category` equals `value`
    pub fn usage_count(&self, category: Category, value: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.value(category) == value)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("op1".parse::<Category>().unwrap(), Category::Op1);
        assert_eq!("2".parse::<Category>().unwrap(), Category::Op2);
        assert_eq!("OP3".parse::<Category>().unwrap(), Category::Op3);
        assert!("op4".parse::<Category>().is_err());
    }

    #[test]
    fn test_record_value_by_category() {
        let record = TraitRecord::new("A", "Fire", "Buff", "None", &["Sword"]);
        assert_eq!(record.value(Category::Op1), "Fire");
        assert_eq!(record.value(Category::Op2), "Buff");
        assert_eq!(record.value(Category::Op3), "None");
    }

    #[test]
    fn test_usage_count() {
        let catalog = Catalog::new(
            Vocabularies::default(),
            vec![
                TraitRecord::new("A", "Fire", "Buff", "None", &["Sword"]),
                TraitRecord::new("B", "Fire", "Debuff", "None", &["Bow"]),
            ],
        );
        assert_eq!(catalog.usage_count(Category::Op1, "Fire"), 2);
        assert_eq!(catalog.usage_count(Category::Op2, "Buff"), 1);
        assert_eq!(catalog.usage_count(Category::Op3, "Flow"), 0);
    }
}
