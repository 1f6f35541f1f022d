//! Random element reordering and reorientation.
//!
//! [`shuffle_elements`] draws a uniform permutation of the element positions,
//! moves every element set along with its elements, then reverses the vertex
//! order of `nelements / 2` distinct elements chosen uniformly at random.
//!
//! The random source is always explicit. [`TopologyShuffler`] bundles a
//! generator (a seeded [`SmallRng`] by default) for callers that shuffle the
//! same mesh repeatedly and want reproducible runs.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::algs::renumber::apply_permutation;
use crate::topology::mesh::Mesh;

/// What a shuffle did to the mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShuffleOutcome {
    /// `new → old` element positions.
    pub permutation: Vec<usize>,
    /// Post-shuffle positions whose vertex order was reversed, ascending.
    pub flipped: Vec<usize>,
}

/// Shuffle `mesh` in place using `rng`.
pub fn shuffle_elements<R: Rng + ?Sized>(mesh: &mut Mesh, rng: &mut R) -> ShuffleOutcome {
    let n = mesh.nelements;

    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);
    apply_permutation(mesh, &permutation);

    let mut flipped = index::sample(rng, n, n / 2).into_vec();
    flipped.sort_unstable();
    for &pos in &flipped {
        mesh.elements[pos].reverse();
    }

    log::debug!(
        "shuffle: permuted {n} elements, flipped {}",
        flipped.len()
    );
    crate::debug_invariants!(*mesh, "shuffle");
    ShuffleOutcome {
        permutation,
        flipped,
    }
}

/// A shuffler that owns its random generator.
#[derive(Clone, Debug)]
pub struct TopologyShuffler<R = SmallRng> {
    rng: R,
}

impl TopologyShuffler<SmallRng> {
    /// Deterministic shuffler seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Shuffler seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> TopologyShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Shuffle `mesh` with the owned generator.
    pub fn shuffle(&mut self, mesh: &mut Mesh) -> ShuffleOutcome {
        shuffle_elements(mesh, &mut self.rng)
    }

    /// Hand the generator back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::sets::{ALL, ElementSets, NodeSets};

    fn ring(n: usize) -> Mesh {
        let vertices = (0..n).map(|i| [i as f64, 0.0]).collect();
        let elements = (0..n).map(|i| vec![i, (i + 1) % n]).collect();
        let elsets: ElementSets = [("first-half", (0..n / 2).collect::<Vec<_>>())]
            .into_iter()
            .collect();
        Mesh::with_sets(vertices, elements, NodeSets::new(), elsets).unwrap()
    }

    #[test]
    fn same_seed_same_outcome() {
        let mut a = ring(10);
        let mut b = ring(10);
        let out_a = TopologyShuffler::seeded(7).shuffle(&mut a);
        let out_b = TopologyShuffler::seeded(7).shuffle(&mut b);
        assert_eq!(out_a, out_b);
        assert_eq!(a, b);
    }

    #[test]
    fn outcome_describes_the_new_order() {
        let original = ring(9);
        let mut mesh = original.clone();
        let outcome = TopologyShuffler::seeded(3).shuffle(&mut mesh);

        assert_eq!(outcome.flipped.len(), 4);
        for (new, &old) in outcome.permutation.iter().enumerate() {
            let mut expected = original.element(old).unwrap().to_vec();
            if outcome.flipped.binary_search(&new).is_ok() {
                expected.reverse();
            }
            assert_eq!(mesh.element(new), Some(expected.as_slice()));
        }
        assert_eq!(mesh.elsets().get(ALL).unwrap().len(), 9);
    }

    #[test]
    fn sets_follow_their_elements() {
        let original = ring(12);
        let mut mesh = original.clone();
        let outcome = TopologyShuffler::seeded(11).shuffle(&mut mesh);
        let members = mesh.elsets().get("first-half").unwrap();
        assert_eq!(members.len(), 6);
        assert!(members.windows(2).all(|w| w[0] < w[1]));
        for &new in members {
            assert!(outcome.permutation[new] < 6);
        }
    }

    #[test]
    fn empty_and_single_element_meshes() {
        let mut empty = Mesh::new(Vec::new(), Vec::new()).unwrap();
        let outcome = TopologyShuffler::seeded(0).shuffle(&mut empty);
        assert!(outcome.permutation.is_empty());
        assert!(outcome.flipped.is_empty());

        let mut single = Mesh::new(vec![[0.0, 0.0], [1.0, 0.0]], vec![vec![0, 1]]).unwrap();
        let outcome = TopologyShuffler::seeded(0).shuffle(&mut single);
        assert_eq!(outcome.permutation, vec![0]);
        assert!(outcome.flipped.is_empty());
        assert_eq!(single.element(0), Some(&[0, 1][..]));
    }
}
