//! Seam splitting: structural removal of two elements.
//!
//! The two seams are the vertex pairs `(0, 1)` and `(n / 2, n / 2 + 1)`
//! where `n` is the vertex count. For each seam the first element (in current
//! order) containing both vertices is removed. Survivors are renumbered
//! contiguously, and every element set drops the removed positions and
//! remaps the rest.
//!
//! All lookups happen before the first write, so a failed split leaves the
//! mesh untouched.

use crate::algs::renumber::removal_map;
use crate::mesh_error::MeshError;
use crate::topology::mesh::Mesh;

/// Number of elements a successful split removes.
pub const SEAM_COUNT: usize = 2;

/// What a split removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOutcome {
    /// The seam pairs that were searched for.
    pub seams: [(usize, usize); SEAM_COUNT],
    /// Pre-split positions of the removed elements, ascending.
    pub removed_positions: [usize; SEAM_COUNT],
    /// The removed elements, in the order of `removed_positions`.
    pub removed_elements: [Vec<usize>; SEAM_COUNT],
}

/// Seam vertex pairs for a mesh with `nvertices` vertices.
pub fn seam_pairs(nvertices: usize) -> [(usize, usize); SEAM_COUNT] {
    let half = nvertices / 2;
    [(0, 1), (half, half + 1)]
}

/// Position of the first element containing both `a` and `b`.
pub fn find_element_with(elements: &[Vec<usize>], a: usize, b: usize) -> Option<usize> {
    elements
        .iter()
        .position(|el| el.contains(&a) && el.contains(&b))
}

/// Remove the seam elements from `mesh`.
///
/// Fails with [`MeshError::SplitTooFewVertices`] below four vertices,
/// [`MeshError::SeamElementMissing`] when a seam has no element, and
/// [`MeshError::SeamElementShared`] when one element spans both seams.
pub fn split_seams(mesh: &mut Mesh) -> Result<SplitOutcome, MeshError> {
    if mesh.nvertices < 4 {
        return Err(MeshError::SplitTooFewVertices {
            nvertices: mesh.nvertices,
        });
    }
    let seams = seam_pairs(mesh.nvertices);

    let mut removed_positions = [0usize; SEAM_COUNT];
    for (slot, &(a, b)) in removed_positions.iter_mut().zip(seams.iter()) {
        *slot = find_element_with(&mesh.elements, a, b)
            .ok_or(MeshError::SeamElementMissing { seam: (a, b) })?;
    }
    if removed_positions[0] == removed_positions[1] {
        return Err(MeshError::SeamElementShared {
            element: removed_positions[0],
            seams,
        });
    }
    removed_positions.sort_unstable();

    let old_nelements = mesh.nelements;
    let mut removed_elements: [Vec<usize>; SEAM_COUNT] = Default::default();
    for (i, &pos) in removed_positions.iter().enumerate().rev() {
        removed_elements[i] = mesh.elements.remove(pos);
    }

    let old_to_new = removal_map(old_nelements, &removed_positions);
    mesh.elsets.remap(&old_to_new);
    mesh.nelements -= SEAM_COUNT;
    mesh.elsets.reset_all(mesh.nelements);

    log::debug!(
        "split: removed elements {removed_positions:?} for seams {seams:?}, {} remain",
        mesh.nelements
    );
    crate::debug_invariants!(*mesh, "split");
    Ok(SplitOutcome {
        seams,
        removed_positions,
        removed_elements,
    })
}
