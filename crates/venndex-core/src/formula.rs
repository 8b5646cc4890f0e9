use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Category, FilterSpec, Vocabulary};

/// Maximal runs of lowercase letters — how the difference side of a formula
/// is scanned for category tokens, operators and all.
static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]+").unwrap());

/// Parse a free-text set-algebra formula into a normalized [`FilterSpec`].
///
/// Total: never errors. Unknown tokens are dropped silently, malformed
/// input degrades to smaller sets.
///
/// Grammar, left to right:
/// - everything after the first `\` is the difference side; any recognized
///   category found in it (by raw word scan) joins the exclude set;
/// - the main side splits on `∪` into groups; each group is stripped of
///   parentheses and split on `∩`;
/// - a group with two or more valid categories extends the intersection
///   set (all groups share the one set — a known grammar boundary), a
///   group with exactly one joins the union set, an empty group is ignored.
pub fn parse_formula(formula: &str, vocab: &Vocabulary) -> FilterSpec {
    let cleaned = formula.to_lowercase();
    let cleaned = cleaned.trim();

    let (main, diff) = match cleaned.split_once('\\') {
        Some((main, diff)) => (main, diff),
        None => (cleaned, ""),
    };

    let exclude: Vec<Category> = RE_WORD
        .find_iter(diff)
        .map(|m| Category::new(m.as_str()))
        .filter(|c| vocab.contains(c))
        .collect();

    let mut intersect: Vec<Category> = Vec::new();
    let mut union: Vec<Category> = Vec::new();
    for group in main.split('∪') {
        let tokens: Vec<Category> = group
            .replace(['(', ')'], "")
            .split('∩')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Category::new)
            .filter(|c| vocab.contains(c))
            .collect();
        match tokens.len() {
            0 => {}
            1 => union.extend(tokens),
            _ => intersect.extend(tokens),
        }
    }

    FilterSpec::assemble(intersect, union, exclude)
}

/// Render the canonical formula for a spec: the intersection clause as a
/// parenthesized `∩`-group, union categories appended with `∪`, then a
/// `\`-prefixed exclusion clause. Empty spec renders as the empty string.
///
/// `format_spec(parse_formula(x))` may differ from `x` textually, but
/// re-parsing the result always reproduces the same three sets.
pub fn format_spec(spec: &FilterSpec) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !spec.intersect_all().is_empty() {
        parts.push(format!("({})", join(spec.intersect_all(), " ∩ ")));
    }
    parts.extend(spec.union_any().iter().map(|c| c.to_string()));

    let mut formula = parts.join(" ∪ ");
    if !spec.exclude_any().is_empty() {
        formula.push_str(" \\ ");
        formula.push_str(&join(spec.exclude_any(), " ∪ "));
    }
    formula
}

fn join(categories: &[Category], sep: &str) -> String {
    categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}
