//! JSON-string boundary for bindings and presentation code.
//!
//! All functions take string inputs and return JSON strings wrapped in a
//! `FfiResult` envelope, minimizing the surface area and guaranteeing that
//! no panic crosses the boundary.

use serde::{Deserialize, Serialize};

use crate::challenge::challenge_formula;
use crate::filter::evaluate;
use crate::formula::{format_spec, parse_formula};
use crate::partition::partition;
use crate::types::{FilterSpec, Item, Partition, Vocabulary};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn ok_json<T: Serialize>(data: T) -> String {
    let envelope = FfiResult {
        success: true,
        data: Some(data),
        error: None,
    };
    serde_json::to_string(&envelope)
        .unwrap_or_else(|e| err_json(&format!("JSON serialization error: {e}")))
}

fn err_json(message: &str) -> String {
    serde_json::to_string(&FfiResult::<()> {
        success: false,
        data: None,
        error: Some(message.to_string()),
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Combined apply output
// ---------------------------------------------------------------------------

/// Everything the presentation layer needs after one formula submission:
/// the parsed spec, its canonical rendering, the filtered list, and the
/// Venn partition for the spec's selection.
#[derive(Debug, Serialize)]
pub struct ApplyOutcome {
    pub spec: FilterSpec,
    pub formula: String,
    pub filtered: Vec<Item>,
    pub venn: Partition,
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Parse a formula against the standard vocabulary.
///
/// Input: formula text
/// Output: JSON `FfiResult<FilterSpec>`
pub fn parse_to_json(formula: &str) -> String {
    let result = std::panic::catch_unwind(|| {
        let vocab = Vocabulary::standard();
        parse_formula(formula, &vocab)
    });
    match result {
        Ok(spec) => ok_json(spec),
        Err(_) => err_json("Internal engine panic"),
    }
}

/// Render the canonical formula for a spec (the checkbox-to-text sync path).
/// Unknown categories in the input are dropped, matching the parser.
///
/// Input: JSON `{ "intersection": [...], "union": [...], "difference": [...] }`
/// Output: JSON `FfiResult<String>`
pub fn format_to_json(spec_json: &str) -> String {
    let spec: FilterSpec = match serde_json::from_str(spec_json) {
        Ok(s) => s,
        Err(e) => return err_json(&format!("Invalid spec JSON: {e}")),
    };
    let result = std::panic::catch_unwind(|| {
        let vocab = Vocabulary::standard();
        let spec = FilterSpec::new(
            spec.intersect_all().to_vec(),
            spec.union_any().to_vec(),
            spec.exclude_any().to_vec(),
            &vocab,
        );
        format_spec(&spec)
    });
    match result {
        Ok(formula) => ok_json(formula),
        Err(_) => err_json("Internal engine panic"),
    }
}

/// Run the whole interaction for one formula submission: parse, filter,
/// partition.
///
/// Input: JSON array of items (`types` accepted for `categories`) + formula text
/// Output: JSON `FfiResult<ApplyOutcome>`
pub fn apply_to_json(items_json: &str, formula: &str) -> String {
    let items: Vec<Item> = match serde_json::from_str(items_json) {
        Ok(i) => i,
        Err(e) => return err_json(&format!("Invalid items JSON: {e}")),
    };

    let result = std::panic::catch_unwind(move || {
        let vocab = Vocabulary::standard();
        let spec = parse_formula(formula, &vocab);
        let filtered = evaluate(&items, &spec);
        let venn = partition(&items, &spec.selected());
        ApplyOutcome {
            formula: format_spec(&spec),
            spec,
            filtered,
            venn,
        }
    });
    match result {
        Ok(outcome) => ok_json(outcome),
        Err(_) => err_json("Internal engine panic"),
    }
}

/// Generate a random challenge formula over the standard vocabulary.
///
/// Output: JSON `FfiResult<String>`
pub fn challenge_to_json() -> String {
    let result = std::panic::catch_unwind(|| {
        let mut rng = rand::thread_rng();
        challenge_formula(&Vocabulary::standard(), &mut rng)
    });
    match result {
        Ok(formula) => ok_json(formula),
        Err(_) => err_json("Internal engine panic"),
    }
}
