//! Rule: universe
//!
//! Reports the universe cardinality. Always fires exactly once.

use crate::{Insight, InsightRule, SetStudy};

pub struct UniverseRule;

impl InsightRule for UniverseRule {
    fn id(&self) -> &str {
        "universe"
    }

    fn description(&self) -> &str {
        "The cardinality of the universe set"
    }

    fn check(&self, study: &SetStudy) -> Vec<Insight> {
        vec![Insight::Universe {
            size: study.universe_size,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venndex_core::{Category, Item};

    #[test]
    fn reports_universe_size() {
        let items = vec![
            Item {
                id: 25,
                name: "pikachu".into(),
                categories: vec!["electric".into()],
            },
            Item {
                id: 26,
                name: "raichu".into(),
                categories: vec!["electric".into()],
            },
        ];
        let study = SetStudy::new(&items, &[Category::new("electric")]).unwrap();
        let insights = UniverseRule.check(&study);
        assert_eq!(insights, vec![Insight::Universe { size: 2 }]);
    }
}
