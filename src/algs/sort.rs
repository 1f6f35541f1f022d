//! Canonical element ordering by connectivity walk.
//!
//! Each element is treated as a directed edge from its leading vertex (first)
//! to its trailing vertex (last). [`sort_elements`] rebuilds the element
//! order as a sequence of chains:
//!
//! 1. The chain starts at the smallest vertex that ends exactly one unvisited
//!    element (the end of an open chain). If no such vertex exists, it starts
//!    at the smallest vertex ending any unvisited element (closed loops).
//! 2. From the current vertex, the next element is the unvisited one ending
//!    there whose other end has the smallest index; ties go to the lower
//!    current position. It is reversed if needed so the current vertex leads,
//!    and the walk continues from its trailing vertex.
//! 3. A chain stops when no unvisited element ends at the current vertex.
//!
//! The rule depends only on the set of elements, not on their current order
//! or orientation (up to exact duplicates), so `shuffle` followed by `sort`
//! returns a closed ring to `[0, 1], [1, 2], ..., [n-1, 0]`. Element sets
//! are remapped exactly as for a shuffle.

use crate::algs::renumber::apply_permutation;
use crate::topology::mesh::Mesh;

/// What a sort did to the mesh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// `new → old` element positions.
    pub permutation: Vec<usize>,
    /// Post-sort positions whose vertex order was reversed, ascending.
    pub reversed: Vec<usize>,
    /// Number of chains walked.
    pub chains: usize,
}

fn ends(element: &[usize]) -> (usize, usize) {
    (element[0], element[element.len() - 1])
}

/// Sort `mesh` into canonical chain order.
pub fn sort_elements(mesh: &mut Mesh) -> SortOutcome {
    let (permutation, needs_reverse, chains) = chain_order(&mesh.elements, mesh.nvertices);

    apply_permutation(mesh, &permutation);
    let mut reversed = Vec::new();
    for (new, &old) in permutation.iter().enumerate() {
        if needs_reverse[old] {
            mesh.elements[new].reverse();
            reversed.push(new);
        }
    }

    log::debug!(
        "sort: {} elements in {chains} chains, {} reversed",
        mesh.nelements,
        reversed.len()
    );
    crate::debug_invariants!(*mesh, "sort");
    SortOutcome {
        permutation,
        reversed,
        chains,
    }
}

/// Compute the walk order: `(new → old, reverse flag per old position, chains)`.
fn chain_order(elements: &[Vec<usize>], nvertices: usize) -> (Vec<usize>, Vec<bool>, usize) {
    let n = elements.len();
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); nvertices];
    let mut degree = vec![0usize; nvertices];
    for (pos, element) in elements.iter().enumerate() {
        let (lead, trail) = ends(element);
        incident[lead].push(pos);
        degree[lead] += 1;
        if trail != lead {
            incident[trail].push(pos);
        }
        degree[trail] += 1;
    }

    let mut visited = vec![false; n];
    let mut needs_reverse = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut chains = 0usize;

    while order.len() < n {
        let start = degree
            .iter()
            .position(|&d| d == 1)
            .or_else(|| degree.iter().position(|&d| d > 0));
        let Some(mut current) = start else {
            break;
        };
        chains += 1;
        let chain_start = order.len();

        loop {
            let next = incident[current]
                .iter()
                .copied()
                .filter(|&pos| !visited[pos])
                .map(|pos| {
                    let (lead, trail) = ends(&elements[pos]);
                    let other = if lead == current { trail } else { lead };
                    (other, pos)
                })
                .min();
            let Some((other, pos)) = next else {
                break;
            };
            let (lead, trail) = ends(&elements[pos]);
            visited[pos] = true;
            degree[lead] -= 1;
            degree[trail] -= 1;
            needs_reverse[pos] = lead != current;
            order.push(pos);
            current = other;
        }
        log::trace!(
            "sort: chain {chains} covers {} elements",
            order.len() - chain_start
        );
    }

    (order, needs_reverse, chains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::renumber::permute_elements;
    use crate::topology::sets::{ALL, ElementSets, NodeSets};

    fn ring(n: usize) -> Mesh {
        let vertices = (0..n).map(|i| [i as f64, 0.0]).collect();
        let elements = (0..n).map(|i| vec![i, (i + 1) % n]).collect();
        Mesh::new(vertices, elements).unwrap()
    }

    #[test]
    fn sorted_ring_is_a_fixed_point() {
        let mut mesh = ring(8);
        let before = mesh.clone();
        let outcome = mesh.sort();
        assert_eq!(outcome.permutation, (0..8).collect::<Vec<_>>());
        assert!(outcome.reversed.is_empty());
        assert_eq!(outcome.chains, 1);
        assert_eq!(mesh, before);
    }

    #[test]
    fn restores_reversed_and_permuted_ring() {
        let vertices = (0..4).map(|i| [i as f64, 0.0]).collect();
        let elements = vec![vec![3, 2], vec![0, 3], vec![1, 0], vec![2, 1]];
        let elsets: ElementSets = [("has-vertex-0", vec![1, 2])].into_iter().collect();
        let mut mesh = Mesh::with_sets(vertices, elements, NodeSets::new(), elsets).unwrap();

        let outcome = mesh.sort();
        assert_eq!(
            mesh.elements(),
            &[vec![0, 1], vec![1, 2], vec![2, 3], vec![3, 0]]
        );
        assert_eq!(outcome.permutation, vec![2, 3, 0, 1]);
        assert_eq!(outcome.reversed, vec![0, 1, 2, 3]);
        assert_eq!(mesh.elsets().get("has-vertex-0"), Some(&[0, 3][..]));
        assert_eq!(mesh.elsets().get(ALL), Some(&[0, 1, 2, 3][..]));
    }

    #[test]
    fn open_chains_start_at_their_smallest_end() {
        // two open chains: 1-2-3 and 5-4
        let vertices = (0..6).map(|i| [i as f64, 0.0]).collect();
        let elements = vec![vec![4, 5], vec![3, 2], vec![1, 2]];
        let mut mesh = Mesh::new(vertices, elements).unwrap();
        let outcome = mesh.sort();
        assert_eq!(outcome.chains, 2);
        assert_eq!(mesh.elements(), &[vec![1, 2], vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn sort_is_independent_of_prior_order() {
        let mut a = ring(7);
        let mut b = ring(7);
        permute_elements(&mut b, &[6, 4, 2, 0, 1, 3, 5]).unwrap();
        a.sort();
        b.sort();
        assert_eq!(a.elements(), b.elements());
    }

    #[test]
    fn polygon_elements_walk_between_end_vertices() {
        let vertices = (0..5).map(|i| [i as f64, 0.0]).collect();
        let elements = vec![vec![4, 3, 2], vec![0, 1, 2]];
        let mut mesh = Mesh::new(vertices, elements).unwrap();
        let outcome = mesh.sort();
        assert_eq!(outcome.chains, 1);
        assert_eq!(mesh.elements(), &[vec![0, 1, 2], vec![2, 3, 4]]);
        assert_eq!(outcome.reversed, vec![1]);
    }

    #[test]
    fn empty_mesh() {
        let mut mesh = Mesh::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(mesh.sort(), SortOutcome::default());
    }
}
