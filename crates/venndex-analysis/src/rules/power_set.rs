//! Rule: power-set
//!
//! Reports the power-set size of a selected set, but only while the number
//! of subsets is small enough to be worth spelling out (default: sets of up
//! to 4 members, so at most 16 subsets). Empty sets are skipped.

use crate::{Insight, InsightRule, SetStudy};

const DEFAULT_MAX_CARDINALITY: usize = 4;

pub struct PowerSetRule {
    pub max_cardinality: usize,
}

impl Default for PowerSetRule {
    fn default() -> Self {
        Self {
            max_cardinality: DEFAULT_MAX_CARDINALITY,
        }
    }
}

impl InsightRule for PowerSetRule {
    fn id(&self) -> &str {
        "power-set"
    }

    fn description(&self) -> &str {
        "Power-set size of small selected sets"
    }

    fn check(&self, study: &SetStudy) -> Vec<Insight> {
        study
            .sets
            .iter()
            .filter(|set| set.size() > 0 && set.size() <= self.max_cardinality)
            .map(|set| Insight::PowerSet {
                category: set.category.clone(),
                cardinality: set.size(),
                subsets: 1 << set.size(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venndex_core::{Category, Item};

    fn item(id: u32, name: &str, categories: &[&str]) -> Item {
        Item {
            id,
            name: name.into(),
            categories: categories.iter().map(|c| (*c).into()).collect(),
        }
    }

    #[test]
    fn reports_two_to_the_cardinality() {
        let items = vec![
            item(4, "charmander", &["fire"]),
            item(5, "charmeleon", &["fire"]),
            item(6, "charizard", &["fire", "flying"]),
        ];
        let study = SetStudy::new(&items, &[Category::new("fire")]).unwrap();
        let insights = PowerSetRule::default().check(&study);
        assert_eq!(
            insights,
            vec![Insight::PowerSet {
                category: Category::new("fire"),
                cardinality: 3,
                subsets: 8,
            }]
        );
    }

    #[test]
    fn skips_empty_and_large_sets() {
        let items: Vec<Item> = (0..10)
            .map(|i| item(i, &format!("mon-{i}"), &["water"]))
            .collect();
        let selection = [Category::new("water"), Category::new("dragon")];
        let study = SetStudy::new(&items, &selection).unwrap();

        // water has 10 members (too large), dragon has none
        let insights = PowerSetRule::default().check(&study);
        assert!(insights.is_empty());
    }

    #[test]
    fn custom_threshold() {
        let items: Vec<Item> = (0..10)
            .map(|i| item(i, &format!("mon-{i}"), &["water"]))
            .collect();
        let study = SetStudy::new(&items, &[Category::new("water")]).unwrap();
        let rule = PowerSetRule {
            max_cardinality: 10,
        };
        let insights = rule.check(&study);
        assert_eq!(
            insights,
            vec![Insight::PowerSet {
                category: Category::new("water"),
                cardinality: 10,
                subsets: 1024,
            }]
        );
    }
}
