/// Canonical creature-type catalog, in the order the dex presents them.
/// Formula tokens and filter selections outside this set are dropped.
pub const STANDARD_CATEGORIES: [&str; 18] = [
    "bug", "ice", "fire", "dark", "rock", "water", "grass", "steel", "fairy", "ghost", "normal",
    "dragon", "poison", "flying", "ground", "psychic", "electric", "fighting",
];

/// Largest selection the Venn layout can render.
/// Five sets would mean 31 regions, beyond what the diagram and its
/// tooltip lookup are designed to present.
pub const MAX_DIAGRAM_SETS: usize = 4;
