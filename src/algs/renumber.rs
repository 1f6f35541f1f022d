//! Renumbering utilities for element order and element sets.
//!
//! A permutation is stored as a `new → old` table: `perm[k]` is the old
//! position of the element that ends up at position `k`. Element sets are
//! stored by position, so they are remapped through the inverse (`old → new`)
//! table, built once per mutation for O(1) lookups.

use crate::mesh_error::MeshError;
use crate::topology::mesh::Mesh;

/// Check that `perm` is a bijection on `[0, n)`.
pub fn check_permutation(perm: &[usize], n: usize) -> Result<(), MeshError> {
    if perm.len() != n {
        return Err(MeshError::InvalidPermutation(format!(
            "expected {n} entries, got {}",
            perm.len()
        )));
    }
    let mut seen = vec![false; n];
    for &old in perm {
        match seen.get_mut(old) {
            None => {
                return Err(MeshError::InvalidPermutation(format!(
                    "position {old} out of range for {n} elements"
                )));
            }
            Some(true) => {
                return Err(MeshError::InvalidPermutation(format!(
                    "duplicate position {old}"
                )));
            }
            Some(flag) => *flag = true,
        }
    }
    Ok(())
}

/// Invert a `new → old` permutation into an `old → new` table.
pub fn inverse_permutation(perm: &[usize]) -> Result<Vec<usize>, MeshError> {
    check_permutation(perm, perm.len())?;
    Ok(invert_unchecked(perm))
}

fn invert_unchecked(perm: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; perm.len()];
    for (new, &old) in perm.iter().enumerate() {
        inverse[old] = new;
    }
    inverse
}

/// Build the `old → new` table for removing `removed` from `[0, n)`.
///
/// Removed positions map to `None`; survivors keep their relative order and
/// are numbered contiguously from 0. Entries of `removed` outside the range
/// are ignored.
pub fn removal_map(n: usize, removed: &[usize]) -> Vec<Option<usize>> {
    let mut keep = vec![true; n];
    for &pos in removed {
        if let Some(flag) = keep.get_mut(pos) {
            *flag = false;
        }
    }
    let mut next = 0usize;
    keep.into_iter()
        .map(|kept| {
            kept.then(|| {
                next += 1;
                next - 1
            })
        })
        .collect()
}

/// Reorder the mesh elements by a caller-provided `new → old` permutation.
///
/// Element sets are remapped so each set keeps the same elements.
pub fn permute_elements(mesh: &mut Mesh, perm: &[usize]) -> Result<(), MeshError> {
    check_permutation(perm, mesh.nelements)?;
    apply_permutation(mesh, perm);
    crate::debug_invariants!(*mesh, "permute_elements");
    Ok(())
}

/// Reorder elements and remap element sets; `perm` must already be checked.
pub(crate) fn apply_permutation(mesh: &mut Mesh, perm: &[usize]) {
    let inverse = invert_unchecked(perm);
    let reordered: Vec<_> = perm
        .iter()
        .map(|&old| std::mem::take(&mut mesh.elements[old]))
        .collect();
    mesh.elements = reordered;

    let old_to_new: Vec<Option<usize>> = inverse.into_iter().map(Some).collect();
    mesh.elsets.remap(&old_to_new);
    mesh.elsets.reset_all(mesh.nelements);
}
