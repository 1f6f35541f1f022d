use mesh_reorder::DebugInvariants;
use mesh_reorder::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn circle(nelements: usize) -> Mesh {
    circle_mesh(CircleMeshOptions {
        nelements,
        ..Default::default()
    })
    .unwrap()
}

fn normalized(element: &[usize]) -> Vec<usize> {
    let mut el = element.to_vec();
    el.sort_unstable();
    el
}

fn element_multiset(mesh: &Mesh) -> Vec<Vec<usize>> {
    let mut all: Vec<_> = mesh.elements().iter().map(|el| normalized(el)).collect();
    all.sort();
    all
}

/// Element contents of each named set, orientation-normalized.
fn set_contents(mesh: &Mesh) -> BTreeMap<String, Vec<Vec<usize>>> {
    mesh.elsets()
        .iter()
        .filter(|(name, _)| *name != ALL)
        .map(|(name, positions)| {
            let mut members: Vec<_> = positions
                .iter()
                .map(|&p| normalized(mesh.element(p).unwrap()))
                .collect();
            members.sort();
            (name.to_string(), members)
        })
        .collect()
}

fn assert_consistent(mesh: &Mesh) {
    assert!(mesh.validate_invariants().is_ok(), "{:?}", mesh.validate_invariants());
    let expected: Vec<usize> = (0..mesh.nelements()).collect();
    assert_eq!(mesh.elsets().get(ALL), Some(expected.as_slice()));
    for (_, positions) in mesh.elsets().iter() {
        assert!(positions.iter().all(|&p| p < mesh.nelements()));
    }
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Shuffle,
    Split,
    Sort,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Shuffle), Just(Op::Split), Just(Op::Sort)]
}

proptest! {
    #[test]
    fn shuffle_is_a_bijection(n in 2usize..40, seed in any::<u64>()) {
        let original = circle(n);
        let mut mesh = original.clone();
        let outcome = TopologyShuffler::seeded(seed).shuffle(&mut mesh);

        prop_assert_eq!(mesh.nelements(), n);
        prop_assert_eq!(mesh.nvertices(), n);
        prop_assert_eq!(outcome.flipped.len(), n / 2);
        prop_assert_eq!(element_multiset(&mesh), element_multiset(&original));
        prop_assert_eq!(set_contents(&mesh), set_contents(&original));
        prop_assert_eq!(mesh.vertices(), original.vertices());
        prop_assert_eq!(mesh.nsets(), original.nsets());
        assert_consistent(&mesh);
    }

    #[test]
    fn split_removes_exactly_the_seams(n in 4usize..40, seed in any::<u64>(), shuffle_first in any::<bool>()) {
        let mut mesh = circle(n);
        if shuffle_first {
            TopologyShuffler::seeded(seed).shuffle(&mut mesh);
        }
        let before = mesh.clone();
        let outcome = mesh.split().unwrap();

        prop_assert_eq!(mesh.nelements(), before.nelements() - 2);
        let half = n / 2;
        let mut removed: Vec<_> = outcome.removed_elements.iter().map(|el| normalized(el)).collect();
        removed.sort();
        prop_assert_eq!(removed, vec![vec![0, 1], vec![half, half + 1]]);
        for (pos, el) in outcome.removed_positions.iter().zip(outcome.removed_elements.iter()) {
            prop_assert_eq!(before.element(*pos), Some(el.as_slice()));
        }

        let after = set_contents(&mesh);
        for (name, members) in set_contents(&before) {
            let survivors: Vec<_> = members
                .into_iter()
                .filter(|el| !removed_contains(&outcome, el))
                .collect();
            prop_assert_eq!(&after[&name], &survivors);
        }
        assert_consistent(&mesh);
    }

    #[test]
    fn sort_keeps_elements_and_sets(n in 2usize..40, seed in any::<u64>()) {
        let mut mesh = circle(n);
        TopologyShuffler::seeded(seed).shuffle(&mut mesh);
        let before = mesh.clone();
        let outcome = mesh.sort();

        prop_assert_eq!(outcome.permutation.len(), n);
        prop_assert_eq!(element_multiset(&mesh), element_multiset(&before));
        prop_assert_eq!(set_contents(&mesh), set_contents(&before));
        // idempotent once sorted
        let again = mesh.clone().sort();
        prop_assert_eq!(again.permutation, (0..n).collect::<Vec<_>>());
        prop_assert!(again.reversed.is_empty());
        assert_consistent(&mesh);
    }

    #[test]
    fn invariants_hold_across_operation_sequences(
        n in 4usize..30,
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 1..8),
    ) {
        let mut mesh = circle(n);
        let mut shuffler = TopologyShuffler::seeded(seed);
        for op in ops {
            let count = mesh.nelements();
            match op {
                Op::Shuffle => {
                    shuffler.shuffle(&mut mesh);
                    prop_assert_eq!(mesh.nelements(), count);
                }
                Op::Split => {
                    let before = mesh.clone();
                    match mesh.split() {
                        Ok(_) => {
                            prop_assert_eq!(mesh.nelements(), count - 2);
                        }
                        Err(_) => {
                            prop_assert_eq!(&mesh, &before);
                        }
                    }
                }
                Op::Sort => {
                    mesh.sort();
                    prop_assert_eq!(mesh.nelements(), count);
                }
            }
            assert_consistent(&mesh);
        }
    }
}

fn removed_contains(outcome: &SplitOutcome, element: &[usize]) -> bool {
    outcome
        .removed_elements
        .iter()
        .any(|el| normalized(el) == element)
}
