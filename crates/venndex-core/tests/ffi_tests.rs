use serde_json::{json, Value};
use venndex_core::{apply_to_json, challenge_to_json, format_to_json, parse_to_json};

fn assert_success(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], true, "expected success=true, got: {json}");
    v
}

fn assert_failure(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], false, "expected success=false, got: {json}");
    v
}

fn dex_json() -> String {
    json!([
        { "id": 4, "name": "charmander", "types": ["fire"] },
        { "id": 6, "name": "charizard", "types": ["fire", "flying"] },
        { "id": 7, "name": "squirtle", "types": ["water"] },
        { "id": 721, "name": "volcanion", "types": ["fire", "water"] },
    ])
    .to_string()
}

// ---------------------------------------------------------------------------
// parse_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_parse_formula() {
    let result = parse_to_json("(fire ∩ flying) ∪ water");
    let v = assert_success(&result);
    assert_eq!(v["data"]["intersection"], json!(["fire", "flying"]));
    assert_eq!(v["data"]["union"], json!(["water"]));
    assert_eq!(v["data"]["difference"], json!([]));
}

#[test]
fn ffi_parse_empty_formula() {
    let v = assert_success(&parse_to_json(""));
    assert_eq!(v["data"]["intersection"], json!([]));
    assert_eq!(v["data"]["union"], json!([]));
    assert_eq!(v["data"]["difference"], json!([]));
}

// ---------------------------------------------------------------------------
// format_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_format_spec() {
    let spec = json!({
        "intersection": ["fire", "flying"],
        "union": ["water"],
        "difference": ["poison"],
    })
    .to_string();
    let v = assert_success(&format_to_json(&spec));
    assert_eq!(v["data"], json!(r"(fire ∩ flying) ∪ water \ poison"));
}

#[test]
fn ffi_format_drops_unknown_categories() {
    let spec = json!({ "union": ["fire", "lava"] }).to_string();
    let v = assert_success(&format_to_json(&spec));
    assert_eq!(v["data"], json!("fire"));
}

#[test]
fn ffi_format_rejects_invalid_json() {
    let v = assert_failure(&format_to_json("not json"));
    assert!(v["error"].as_str().unwrap().contains("Invalid spec JSON"));
}

// ---------------------------------------------------------------------------
// apply_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_apply_full_interaction() {
    let result = apply_to_json(&dex_json(), "fire");
    let v = assert_success(&result);

    assert_eq!(v["data"]["formula"], json!("fire"));
    assert_eq!(v["data"]["spec"]["union"], json!(["fire"]));

    let filtered = v["data"]["filtered"].as_array().unwrap();
    let names: Vec<&str> = filtered
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["charmander", "charizard", "volcanion"]);

    let venn = &v["data"]["venn"];
    assert_eq!(venn["status"], json!("regions"));
    assert_eq!(venn["layout"][0]["size"], json!(3));
    assert_eq!(venn["disjoint"][0]["data"], json!(["charizard", "charmander", "volcanion"]));
}

#[test]
fn ffi_apply_empty_formula_refuses_diagram() {
    let v = assert_success(&apply_to_json(&dex_json(), ""));
    assert_eq!(v["data"]["filtered"].as_array().unwrap().len(), 4);
    assert_eq!(v["data"]["venn"]["status"], json!("no-selection"));
}

#[test]
fn ffi_apply_over_capacity_formula() {
    let v = assert_success(&apply_to_json(
        &dex_json(),
        "fire ∪ water ∪ grass ∪ ice ∪ rock",
    ));
    assert_eq!(v["data"]["venn"]["status"], json!("over-capacity"));
    assert_eq!(v["data"]["venn"]["selected"], json!(5));
}

#[test]
fn ffi_apply_rejects_invalid_items() {
    let v = assert_failure(&apply_to_json("{ not items }", "fire"));
    assert!(v["error"].as_str().unwrap().contains("Invalid items JSON"));
}

// ---------------------------------------------------------------------------
// challenge_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_challenge_reparses_to_non_empty_spec() {
    let v = assert_success(&challenge_to_json());
    let formula = v["data"].as_str().unwrap();

    let parsed = assert_success(&parse_to_json(formula));
    let spec = &parsed["data"];
    let total = spec["intersection"].as_array().unwrap().len()
        + spec["union"].as_array().unwrap().len()
        + spec["difference"].as_array().unwrap().len();
    assert!(total > 0, "challenge parsed to nothing: {formula}");
}
