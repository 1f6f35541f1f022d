//! MeshError: Unified error type for mesh-reorder public APIs
//!
//! Every fallible operation in the crate reports one of these variants. They
//! fall into three groups: out-of-range indices detected at construction or
//! after a mutation, violated preconditions of a mutating operation, and
//! failures reported by the persistence and rendering collaborators.

use thiserror::Error;

/// Unified error type for mesh-reorder operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// An element references a vertex outside `[0, nvertices)`.
    #[error("element {element} references vertex {vertex}, but the mesh has {nvertices} vertices")]
    VertexIndexOutOfRange {
        element: usize,
        vertex: usize,
        nvertices: usize,
    },
    /// A node set references a vertex outside `[0, nvertices)`.
    #[error("nset `{set}` references vertex {vertex}, but the mesh has {nvertices} vertices")]
    NodeSetIndexOutOfRange {
        set: String,
        vertex: usize,
        nvertices: usize,
    },
    /// An element set references an element position outside `[0, nelements)`.
    #[error("elset `{set}` references element {element}, but the mesh has {nelements} elements")]
    ElementIndexOutOfRange {
        set: String,
        element: usize,
        nelements: usize,
    },
    /// An element has fewer than two vertices.
    #[error("element {element} has {len} vertices (at least 2 required)")]
    ElementTooShort { element: usize, len: usize },

    /// `split` needs at least four vertices so both seam pairs are distinct.
    #[error("split requires at least 4 vertices, mesh has {nvertices}")]
    SplitTooFewVertices { nvertices: usize },
    /// No element contains both vertices of a seam pair.
    #[error("no element contains seam vertices {seam:?}")]
    SeamElementMissing { seam: (usize, usize) },
    /// Both seam pairs resolved to the same element.
    #[error("seams {seams:?} both resolve to element {element}")]
    SeamElementShared {
        element: usize,
        seams: [(usize, usize); 2],
    },
    /// A supplied permutation is not a bijection on `[0, n)`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
    /// Generator parameters do not describe a usable mesh.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// The renderer does not know the requested color scheme.
    #[error("unknown colormap `{0}`")]
    UnknownColormap(String),

    /// The reserved `all` element set no longer covers `[0, nelements)`.
    #[error("elset `all` is stale: expected 0..{nelements}")]
    StaleAllSet { nelements: usize },
    /// A cached count drifted from the length of its backing array.
    #[error("cached {what} count {cached} does not match actual {actual}")]
    CountMismatch {
        what: &'static str,
        cached: usize,
        actual: usize,
    },

    /// I/O failure while saving or rendering.
    #[error("I/O error: {0}")]
    Io(String),
    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err.to_string())
    }
}

impl From<bincode::Error> for MeshError {
    fn from(err: bincode::Error) -> Self {
        MeshError::Serialization(err.to_string())
    }
}
