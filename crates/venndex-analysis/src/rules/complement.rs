//! Rule: complement
//!
//! Reports the complement cardinality of every selected set: how many items
//! in the universe are outside it.

use crate::{Insight, InsightRule, SetStudy};

pub struct ComplementRule;

impl InsightRule for ComplementRule {
    fn id(&self) -> &str {
        "complement"
    }

    fn description(&self) -> &str {
        "Complement cardinality of each selected set"
    }

    fn check(&self, study: &SetStudy) -> Vec<Insight> {
        study
            .sets
            .iter()
            .map(|set| Insight::Complement {
                category: set.category.clone(),
                size: study.universe_size - set.size(),
            })
            .collect()
    }
}
