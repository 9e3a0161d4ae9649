//! Closing the sampled relation under reversal

use crate::relation::Relation;
use itertools::Itertools;

/// Build the symmetric relation from a raw sample.
///
/// The output lists the original pairs first, then one reverse per original, with
/// self-pairs dropped and exact repeats removed (first occurrence kept). `(a, b)` and
/// `(b, a)` are different tuples and both survive.
pub fn symmetrize(sampled: &[Relation]) -> Vec<Relation> {
    let symmetric: Vec<Relation> = sampled
        .iter()
        .copied()
        .chain(sampled.iter().map(Relation::reversed))
        .filter(|r| !r.is_self_loop())
        .unique()
        .collect();

    log::debug!(
        "Symmetrized {} sampled relations into {}",
        sampled.len(),
        symmetric.len()
    );
    symmetric
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: u64, b: u64) -> Relation {
        Relation::new(a, b)
    }

    #[test]
    fn adds_reverse_edges_after_originals() {
        let out = symmetrize(&[rel(1, 2), rel(2, 3)]);
        assert_eq!(out, vec![rel(1, 2), rel(2, 3), rel(2, 1), rel(3, 2)]);
    }

    #[test]
    fn drops_self_pairs() {
        let out = symmetrize(&[rel(4, 4), rel(1, 2)]);
        assert_eq!(out, vec![rel(1, 2), rel(2, 1)]);
    }

    #[test]
    fn mutual_sample_does_not_duplicate() {
        // both directions sampled independently
        let out = symmetrize(&[rel(1, 2), rel(2, 1), rel(1, 2)]);
        assert_eq!(out, vec![rel(1, 2), rel(2, 1)]);
    }

    #[test]
    fn idempotent() {
        let once = symmetrize(&[rel(1, 2), rel(3, 1), rel(3, 3), rel(2, 1)]);
        let twice = symmetrize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(symmetrize(&[]).is_empty());
    }
}
