use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Vocabulary;

/// First operator is drawn from the first two entries, second from all three.
const OPS: [&str; 3] = ["∪", "∩", "\\"];

/// Build a random challenge formula of the shape `(t0 op1 t1) op2 t2` over
/// three distinct vocabulary labels. Every token comes from the vocabulary,
/// so the result always re-parses into a non-empty spec.
///
/// Generic over the RNG so tests can seed a `StdRng`; a vocabulary with
/// fewer than three labels degrades to a plain union of what is there.
pub fn challenge_formula<R: Rng + ?Sized>(vocab: &Vocabulary, rng: &mut R) -> String {
    let picks: Vec<_> = vocab.labels().choose_multiple(rng, 3).collect();
    if picks.len() < 3 {
        return picks
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" ∪ ");
    }
    let op1 = OPS[rng.gen_range(0..2)];
    let op2 = OPS[rng.gen_range(0..3)];
    format!("({} {} {}) {} {}", picks[0], op1, picks[1], op2, picks[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse_formula;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_output_is_deterministic() {
        let vocab = Vocabulary::standard();
        let a = challenge_formula(&vocab, &mut StdRng::seed_from_u64(7));
        let b = challenge_formula(&vocab, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn challenges_reparse_to_non_empty_specs() {
        let vocab = Vocabulary::standard();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let formula = challenge_formula(&vocab, &mut rng);
            assert!(formula.starts_with('('), "unexpected shape: {formula}");
            let spec = parse_formula(&formula, &vocab);
            assert!(!spec.is_empty(), "formula parsed to nothing: {formula}");
        }
    }

    #[test]
    fn tiny_vocabulary_degrades_to_a_union() {
        let vocab = Vocabulary::new(["fire", "water"]);
        let mut rng = StdRng::seed_from_u64(1);
        let formula = challenge_formula(&vocab, &mut rng);
        let spec = parse_formula(&formula, &vocab);
        assert_eq!(spec.union_any().len(), 2);
    }
}
