//! Built-in insight rules.

pub mod complement;
pub mod pair_relation;
pub mod power_set;
pub mod universe;

pub use complement::ComplementRule;
pub use pair_relation::PairRelationRule;
pub use power_set::PowerSetRule;
pub use universe::UniverseRule;
