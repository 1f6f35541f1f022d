//! Index validation helpers.
//!
//! These checks back both [`Mesh`](crate::topology::mesh::Mesh) construction
//! and its [`DebugInvariants`](crate::debug_invariants::DebugInvariants)
//! implementation, so a malformed input and a stale index after a mutation
//! are reported through the same variants.

use crate::mesh_error::MeshError;
use crate::topology::sets::{ALL, ElementSets, NodeSets};

/// Minimum number of vertices in an element.
pub const MIN_ELEMENT_VERTICES: usize = 2;

/// Ensure every element has at least two vertices, all in `[0, nvertices)`.
pub fn validate_elements(elements: &[Vec<usize>], nvertices: usize) -> Result<(), MeshError> {
    for (element, vertices) in elements.iter().enumerate() {
        if vertices.len() < MIN_ELEMENT_VERTICES {
            return Err(MeshError::ElementTooShort {
                element,
                len: vertices.len(),
            });
        }
        if let Some(&vertex) = vertices.iter().find(|&&v| v >= nvertices) {
            return Err(MeshError::VertexIndexOutOfRange {
                element,
                vertex,
                nvertices,
            });
        }
    }
    Ok(())
}

/// Ensure every node-set entry lies in `[0, nvertices)`.
pub fn validate_node_sets(nsets: &NodeSets, nvertices: usize) -> Result<(), MeshError> {
    for (name, vertices) in nsets.iter() {
        // sets are ordered, so the last entry is the largest
        if let Some(&vertex) = vertices.last() {
            if vertex >= nvertices {
                return Err(MeshError::NodeSetIndexOutOfRange {
                    set: name.to_string(),
                    vertex,
                    nvertices,
                });
            }
        }
    }
    Ok(())
}

/// Ensure every element-set entry lies in `[0, nelements)`.
pub fn validate_element_sets(elsets: &ElementSets, nelements: usize) -> Result<(), MeshError> {
    for (name, positions) in elsets.iter() {
        if let Some(&element) = positions.iter().find(|&&p| p >= nelements) {
            return Err(MeshError::ElementIndexOutOfRange {
                set: name.to_string(),
                element,
                nelements,
            });
        }
    }
    Ok(())
}

/// Ensure the reserved `all` set is exactly `0..nelements`.
pub fn validate_all_set(elsets: &ElementSets, nelements: usize) -> Result<(), MeshError> {
    let fresh = elsets
        .get(ALL)
        .is_some_and(|all| all.len() == nelements && all.iter().enumerate().all(|(i, &p)| i == p));
    if fresh {
        Ok(())
    } else {
        Err(MeshError::StaleAllSet { nelements })
    }
}
