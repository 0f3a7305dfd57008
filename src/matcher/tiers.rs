//! @acp:module "Tier Partitioner"
//! @acp:summary "Split ranked results into perfect, high and partial tiers"
//! @acp:domain matching
//! @acp:layer logic

use serde::Serialize;

use super::types::GroupedResult;

/// Result bucket by match count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 3 of 3 categories matched
    Perfect,
    /// 2 of 3
    High,
    /// 1 of 3
    Partial,
}

impl Tier {
    /// Highest tier first
    pub const ALL: [Tier; 3] = [Tier::Perfect, Tier::High, Tier::Partial];

    pub fn from_match_count(count: u8) -> Option<Self> {
        match count {
            3 => Some(Tier::Perfect),
            2 => Some(Tier::High),
            1 => Some(Tier::Partial),
            _ => None,
        }
    }

    pub fn match_count(self) -> u8 {
        match self {
            Tier::Perfect => 3,
            Tier::High => 2,
            Tier::Partial => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::High => "high",
            Tier::Partial => "partial",
        }
    }

    /// Section heading
    pub fn title(self) -> &'static str {
        match self {
            Tier::Perfect => "Perfect match",
            Tier::High => "2 of 3 match",
            Tier::Partial => "1 of 3 match",
        }
    }

    /// Short badge shown on each result card
    pub fn badge(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::High => "2/3",
            Tier::Partial => "1/3",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranked results split by tier, each tier keeping ranked order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TieredResults {
    pub perfect: Vec<GroupedResult>,
    pub high: Vec<GroupedResult>,
    pub partial: Vec<GroupedResult>,
}

impl TieredResults {
    /// Partition a ranked sequence. Order within each tier is preserved.
    pub fn partition(ranked: Vec<GroupedResult>) -> Self {
        let mut tiers = Self::default();
        for result in ranked {
            match Tier::from_match_count(result.match_count) {
                Some(Tier::Perfect) => tiers.perfect.push(result),
                Some(Tier::High) => tiers.high.push(result),
                Some(Tier::Partial) => tiers.partial.push(result),
                None => tracing::debug!(
                    "Dropping result with match count {} ({})",
                    result.match_count,
                    result.weapons.join(", ")
                ),
            }
        }
        tiers
    }

    pub fn get(&self, tier: Tier) -> &[GroupedResult] {
        match tier {
            Tier::Perfect => &self.perfect,
            Tier::High => &self.high,
            Tier::Partial => &self.partial,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.perfect.is_empty() && self.high.is_empty() && self.partial.is_empty()
    }

    pub fn total(&self) -> usize {
        self.perfect.len() + self.high.len() + self.partial.len()
    }

    /// Non-empty tiers, highest first
    pub fn populated(&self) -> impl Iterator<Item = (Tier, &[GroupedResult])> + '_ {
        Tier::ALL
            .into_iter()
            .map(move |tier| (tier, self.get(tier)))
            .filter(|(_, results)| !results.is_empty())
    }

    /// All results in ranked order
    pub fn iter(&self) -> impl Iterator<Item = &GroupedResult> + '_ {
        self.perfect
            .iter()
            .chain(self.high.iter())
            .chain(self.partial.iter())
    }

    /// Whether a tier starts expanded: only when every higher tier is empty.
    pub fn expanded_by_default(&self, tier: Tier) -> bool {
        Tier::ALL
            .into_iter()
            .take_while(|t| *t != tier)
            .all(|t| self.get(t).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(zone: &str, match_count: u8) -> GroupedResult {
        GroupedResult {
            zones: vec![zone.to_string()],
            weapons: vec![zone.to_lowercase()],
            op1: String::new(),
            op2: String::new(),
            op3: String::new(),
            match_count,
            matched: [match_count >= 1, match_count >= 2, match_count >= 3],
        }
    }

    #[test]
    fn test_partition_preserves_order() {
        let tiers = TieredResults::partition(vec![
            result("A", 3),
            result("B", 2),
            result("C", 2),
            result("D", 1),
        ]);
        assert_eq!(tiers.perfect.len(), 1);
        assert_eq!(
            tiers.high.iter().map(|r| r.first_zone()).collect::<Vec<_>>(),
            vec!["B", "C"]
        );
        assert_eq!(tiers.partial.len(), 1);
        assert_eq!(tiers.total(), 4);
    }

    #[test]
    fn test_zero_count_never_lands_in_a_tier() {
        let tiers = TieredResults::partition(vec![result("A", 0)]);
        assert!(tiers.is_empty());
    }

    #[test]
    fn test_expand_policy_with_perfect() {
        let tiers = TieredResults::partition(vec![result("A", 3), result("B", 2), result("C", 1)]);
        assert!(tiers.expanded_by_default(Tier::Perfect));
        assert!(!tiers.expanded_by_default(Tier::High));
        assert!(!tiers.expanded_by_default(Tier::Partial));
    }

    #[test]
    fn test_expand_policy_without_perfect() {
        let tiers = TieredResults::partition(vec![result("B", 2), result("C", 1)]);
        assert!(tiers.expanded_by_default(Tier::High));
        assert!(!tiers.expanded_by_default(Tier::Partial));

        let partial_only = TieredResults::partition(vec![result("C", 1)]);
        assert!(partial_only.expanded_by_default(Tier::Partial));
    }

    #[test]
    fn test_populated_skips_empty_tiers() {
        let tiers = TieredResults::partition(vec![result("A", 3), result("C", 1)]);
        let populated: Vec<Tier> = tiers.populated().map(|(t, _)| t).collect();
        assert_eq!(populated, vec![Tier::Perfect, Tier::Partial]);
    }
}
