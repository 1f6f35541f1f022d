//! Mesh topology: the mesh model, its named subsets, and index validation.
//!
//! Most users work with [`Mesh`] directly; [`sets`] holds the node/element
//! subset tables and [`validation`] the checks shared by construction and
//! the post-mutation invariant checks.

pub mod mesh;
pub mod sets;
pub mod validation;

pub use mesh::{Element, Mesh, Vertex};
pub use sets::{ALL, ElementSets, NodeSets};
