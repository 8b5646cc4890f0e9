//! Set-relation analysis over a venndex category selection.
//!
//! Provides a trait-based rule framework that inspects the selected sets
//! (letters A through D, in selection order) and reports tagged insights
//! alongside formal set definitions and a pairwise operations table.

mod rules;

pub use rules::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use venndex_core::{dedup_categories, Category, Item, MAX_DIAGRAM_SETS};

/// Letters assigned to selected sets, in selection order.
pub const SET_LETTERS: [char; MAX_DIAGRAM_SETS] = ['A', 'B', 'C', 'D'];

// ---------------------------------------------------------------------------
// Study context
// ---------------------------------------------------------------------------

/// One lettered selected set with its precomputed membership.
#[derive(Debug, Clone)]
pub struct StudySet {
    pub letter: char,
    pub category: Category,
    /// Member ids in collection order.
    pub member_ids: Vec<u32>,
    /// The same ids, hashed for O(1) relation checks.
    pub id_set: HashSet<u32>,
}

impl StudySet {
    pub fn size(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_subset_of(&self, other: &StudySet) -> bool {
        self.member_ids.iter().all(|id| other.id_set.contains(id))
    }
}

/// Precomputed context for one selection: universe size plus one
/// [`StudySet`] per selected category. Rules read this, never the raw
/// collection.
#[derive(Debug, Clone)]
pub struct SetStudy {
    pub universe_size: usize,
    pub sets: Vec<StudySet>,
}

impl SetStudy {
    /// Build the study, or refuse: `None` for an empty selection or one
    /// past the letter supply (same refusal philosophy as the partition
    /// engine — more than four sets has no diagram and no letters).
    pub fn new(items: &[Item], selection: &[Category]) -> Option<Self> {
        let selected = dedup_categories(selection.to_vec());
        if selected.is_empty() || selected.len() > MAX_DIAGRAM_SETS {
            return None;
        }

        let sets = selected
            .into_iter()
            .zip(SET_LETTERS)
            .map(|(category, letter)| {
                let member_ids: Vec<u32> = items
                    .iter()
                    .filter(|i| i.categories.contains(&category))
                    .map(|i| i.id)
                    .collect();
                let id_set = member_ids.iter().copied().collect();
                StudySet {
                    letter,
                    category,
                    member_ids,
                    id_set,
                }
            })
            .collect();

        Some(SetStudy {
            universe_size: items.len(),
            sets,
        })
    }

    /// Every unordered pair of selected sets, left before right.
    pub fn pairs(&self) -> impl Iterator<Item = (&StudySet, &StudySet)> + '_ {
        self.sets.iter().enumerate().flat_map(move |(i, left)| {
            self.sets[i + 1..].iter().map(move |right| (left, right))
        })
    }
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Formal definition of one selected set, as the sets list presents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDefinition {
    pub letter: char,
    pub category: Category,
    pub size: usize,
    /// Ids in collection order.
    pub member_ids: Vec<u32>,
}

/// One computed set operation: cardinality plus numerically sorted ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOperation {
    pub size: usize,
    pub member_ids: Vec<u32>,
}

/// The four operations shown for each unordered pair of selected sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairOperations {
    pub left: char,
    pub right: char,
    pub intersection: SetOperation,
    pub union: SetOperation,
    pub left_minus_right: SetOperation,
    pub right_minus_left: SetOperation,
}

/// A tagged analysis observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Insight {
    /// The universe cardinality, always reported.
    Universe { size: usize },
    /// Complement cardinality of one selected set.
    Complement { category: Category, size: usize },
    /// Power-set size, reported only for small inhabited sets.
    PowerSet {
        category: Category,
        cardinality: usize,
        subsets: usize,
    },
    /// The pair shares no members.
    Disjoint { left: char, right: char },
    /// Strict containment between the pair.
    ProperSubset { inner: char, outer: char },
    /// Mutual containment: the sets are equal.
    Equal { left: char, right: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub definitions: Vec<SetDefinition>,
    pub operations: Vec<PairOperations>,
    pub insights: Vec<Insight>,
}

// ---------------------------------------------------------------------------
// Rule trait and configuration
// ---------------------------------------------------------------------------

/// Trait that all insight rules implement.
pub trait InsightRule: Send + Sync {
    /// Unique rule identifier (e.g., "pair-relation").
    fn id(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Run the rule against a study and return its insights.
    fn check(&self, study: &SetStudy) -> Vec<Insight>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Rule ids to skip.
    #[serde(default)]
    pub disabled: HashSet<String>,
}

impl AnalyzerConfig {
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        !self.disabled.contains(rule_id)
    }
}

// ---------------------------------------------------------------------------
// Analyzer engine
// ---------------------------------------------------------------------------

pub struct Analyzer {
    rules: Vec<Box<dyn InsightRule>>,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with all built-in rules.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            rules: builtin_rules(),
            config,
        }
    }

    /// Get a reference to the registered rules.
    pub fn rules(&self) -> &[Box<dyn InsightRule>] {
        &self.rules
    }

    /// Analyze a selection over a collection. `None` is the refusal for an
    /// empty or over-capacity selection; everything else produces a report,
    /// even when every set is empty.
    pub fn analyze(&self, items: &[Item], selection: &[Category]) -> Option<AnalysisReport> {
        let study = SetStudy::new(items, selection)?;

        let definitions = study
            .sets
            .iter()
            .map(|s| SetDefinition {
                letter: s.letter,
                category: s.category.clone(),
                size: s.size(),
                member_ids: s.member_ids.clone(),
            })
            .collect();

        let operations = study
            .pairs()
            .map(|(left, right)| pair_operations(left, right))
            .collect();

        let mut insights = Vec::new();
        for rule in &self.rules {
            if self.config.is_enabled(rule.id()) {
                insights.extend(rule.check(&study));
            }
        }

        Some(AnalysisReport {
            definitions,
            operations,
            insights,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

fn pair_operations(left: &StudySet, right: &StudySet) -> PairOperations {
    let op = |ids: Vec<u32>| {
        let mut ids = ids;
        ids.sort_unstable();
        SetOperation {
            size: ids.len(),
            member_ids: ids,
        }
    };

    let intersection: Vec<u32> = left
        .member_ids
        .iter()
        .copied()
        .filter(|id| right.id_set.contains(id))
        .collect();
    let union: Vec<u32> = left
        .member_ids
        .iter()
        .copied()
        .chain(
            right
                .member_ids
                .iter()
                .copied()
                .filter(|id| !left.id_set.contains(id)),
        )
        .collect();
    let left_minus_right: Vec<u32> = left
        .member_ids
        .iter()
        .copied()
        .filter(|id| !right.id_set.contains(id))
        .collect();
    let right_minus_left: Vec<u32> = right
        .member_ids
        .iter()
        .copied()
        .filter(|id| !left.id_set.contains(id))
        .collect();

    PairOperations {
        left: left.letter,
        right: right.letter,
        intersection: op(intersection),
        union: op(union),
        left_minus_right: op(left_minus_right),
        right_minus_left: op(right_minus_left),
    }
}

/// Return all built-in insight rules.
fn builtin_rules() -> Vec<Box<dyn InsightRule>> {
    vec![
        Box::new(UniverseRule),
        Box::new(ComplementRule),
        Box::new(PowerSetRule::default()),
        Box::new(PairRelationRule),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
