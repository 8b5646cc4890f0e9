use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::catalogs::STANDARD_CATEGORIES;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A single category label. Lowercased and trimmed on every construction
/// path, including deserialization, so comparisons are plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Category(String);

impl Category {
    pub fn new(label: impl AsRef<str>) -> Self {
        Category(label.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::new(&label)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::new(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// The closed set of known category labels. Keeps the catalog order (it
/// drives challenge generation and UI listings) alongside a hashed index
/// for O(1) membership checks.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    labels: Vec<Category>,
    index: HashSet<Category>,
}

impl Vocabulary {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vocabulary {
            labels: Vec::new(),
            index: HashSet::new(),
        };
        for label in labels {
            let cat = Category::new(label);
            if out.index.insert(cat.clone()) {
                out.labels.push(cat);
            }
        }
        out
    }

    /// The 18-label creature-type catalog.
    pub fn standard() -> Self {
        Vocabulary::new(STANDARD_CATEGORIES)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.index.contains(category)
    }

    /// Labels in canonical catalog order.
    pub fn labels(&self) -> &[Category] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// One creature record. Immutable once loaded; the engine never mutates it.
/// The upstream loader's field name `types` is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(alias = "types")]
    pub categories: Vec<Category>,
}

// ---------------------------------------------------------------------------
// FilterSpec
// ---------------------------------------------------------------------------

/// Normalized filter triple parsed from a formula or assembled from a
/// selection. Fields are private: every construction path deduplicates,
/// keeps first-appearance order, and folds a one-category intersection
/// clause into the union list (the predicate is pointwise identical and
/// it is the only representation the formula grammar can reproduce).
/// Wire keys match the presentation layer's filter object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SpecWire")]
pub struct FilterSpec {
    #[serde(rename = "intersection")]
    intersect_all: Vec<Category>,
    #[serde(rename = "union")]
    union_any: Vec<Category>,
    #[serde(rename = "difference")]
    exclude_any: Vec<Category>,
}

#[derive(Deserialize)]
struct SpecWire {
    #[serde(default)]
    intersection: Vec<Category>,
    #[serde(default)]
    union: Vec<Category>,
    #[serde(default)]
    difference: Vec<Category>,
}

impl From<SpecWire> for FilterSpec {
    fn from(wire: SpecWire) -> Self {
        FilterSpec::assemble(wire.intersection, wire.union, wire.difference)
    }
}

impl FilterSpec {
    /// Build a spec from raw category lists, dropping anything outside the
    /// vocabulary. Total: malformed input shrinks the sets, never errors.
    pub fn new(
        intersect_all: Vec<Category>,
        union_any: Vec<Category>,
        exclude_any: Vec<Category>,
        vocab: &Vocabulary,
    ) -> Self {
        let keep = |cats: Vec<Category>| -> Vec<Category> {
            cats.into_iter().filter(|c| vocab.contains(c)).collect()
        };
        Self::assemble(keep(intersect_all), keep(union_any), keep(exclude_any))
    }

    pub(crate) fn assemble(
        intersect: Vec<Category>,
        union: Vec<Category>,
        exclude: Vec<Category>,
    ) -> Self {
        let mut intersect = dedup_categories(intersect);
        let mut union = dedup_categories(union);
        let exclude = dedup_categories(exclude);
        if intersect.len() == 1 {
            let only = intersect.remove(0);
            if !union.contains(&only) {
                union.insert(0, only);
            }
        }
        FilterSpec {
            intersect_all: intersect,
            union_any: union,
            exclude_any: exclude,
        }
    }

    /// Categories an item must all have.
    pub fn intersect_all(&self) -> &[Category] {
        &self.intersect_all
    }

    /// Categories of which an item must have at least one (vacuous if empty).
    pub fn union_any(&self) -> &[Category] {
        &self.union_any
    }

    /// Categories an item must not have (vacuous if empty).
    pub fn exclude_any(&self) -> &[Category] {
        &self.exclude_any
    }

    pub fn is_empty(&self) -> bool {
        self.intersect_all.is_empty() && self.union_any.is_empty() && self.exclude_any.is_empty()
    }
}

/// Deduplicate, keeping first appearance. Lists here stay tiny (bounded by
/// the vocabulary), so the quadratic scan beats hashing.
pub fn dedup_categories(cats: Vec<Category>) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::with_capacity(cats.len());
    for c in cats {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Regions and partition outcome
// ---------------------------------------------------------------------------

/// One region of the diagram. Identity is the unordered `categories` set.
/// `members` is carried only for disjoint regions (tooltip content); layout
/// regions are sizing-only. Wire keys are the shape the chart consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "sets")]
    pub categories: Vec<Category>,
    pub size: usize,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
}

/// Outcome of a partition request. Refusals are values, not errors: the
/// caller branches on the variant to decide presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Partition {
    /// No categories selected; there is nothing to diagram.
    NoSelection,
    /// More than `MAX_DIAGRAM_SETS` categories selected.
    OverCapacity { selected: usize },
    /// Every layout region is empty; the diagram has nothing to render.
    Degenerate,
    Regions {
        /// Cumulative intersection counts for every non-empty subset of the
        /// selection, used for circle sizing. Overlapping, never disjoint.
        layout: Vec<Region>,
        /// Exact membership per subset: items with all "on" categories and
        /// none of the "off" ones. Only inhabited regions are listed.
        disjoint: Vec<Region>,
    },
}

impl Partition {
    pub fn is_refusal(&self) -> bool {
        matches!(self, Partition::NoSelection | Partition::OverCapacity { .. })
    }

    /// The `(layout, disjoint)` pair, when there is anything to render.
    pub fn regions(&self) -> Option<(&[Region], &[Region])> {
        match self {
            Partition::Regions { layout, disjoint } => Some((layout, disjoint)),
            _ => None,
        }
    }
}
