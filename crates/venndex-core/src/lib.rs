pub mod catalogs;
pub mod challenge;
pub mod ffi;
pub mod filter;
pub mod formula;
pub mod partition;
pub mod types;

pub use catalogs::{MAX_DIAGRAM_SETS, STANDARD_CATEGORIES};
pub use challenge::challenge_formula;
pub use ffi::{apply_to_json, challenge_to_json, format_to_json, parse_to_json};
pub use filter::evaluate;
pub use formula::{format_spec, parse_formula};
pub use partition::{find_region, partition};
pub use types::*;
