//! Rule: pair-relation
//!
//! Classifies every unordered pair of selected sets: disjoint, proper
//! subset one way or the other, or equal. At most one relation is reported
//! per pair (subset checks are mutually exclusive by construction), except
//! that an empty set is both disjoint from and a subset of a non-empty one.

use crate::{Insight, InsightRule, SetStudy};

pub struct PairRelationRule;

impl InsightRule for PairRelationRule {
    fn id(&self) -> &str {
        "pair-relation"
    }

    fn description(&self) -> &str {
        "Disjointness, containment, and equality between selected sets"
    }

    fn check(&self, study: &SetStudy) -> Vec<Insight> {
        let mut insights = Vec::new();
        for (left, right) in study.pairs() {
            let shared = left
                .member_ids
                .iter()
                .filter(|id| right.id_set.contains(*id))
                .count();
            if shared == 0 {
                insights.push(Insight::Disjoint {
                    left: left.letter,
                    right: right.letter,
                });
            }

            let left_in_right = left.is_subset_of(right);
            let right_in_left = right.is_subset_of(left);
            if left_in_right && left.size() < right.size() {
                insights.push(Insight::ProperSubset {
                    inner: left.letter,
                    outer: right.letter,
                });
            } else if right_in_left && right.size() < left.size() {
                insights.push(Insight::ProperSubset {
                    inner: right.letter,
                    outer: left.letter,
                });
            } else if left_in_right && right_in_left {
                insights.push(Insight::Equal {
                    left: left.letter,
                    right: right.letter,
                });
            }
        }
        insights
    }
}
