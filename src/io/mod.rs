//! Mesh output collaborators.
//!
//! Writers consume a finished [`Mesh`] through its read-only accessors:
//! [`snapshot::BincodeSnapshot`] persists the raw fields and
//! [`svg::SvgRenderer`] draws the mesh.

pub mod snapshot;
pub mod svg;

use crate::mesh_error::MeshError;
use crate::topology::mesh::Mesh;
use std::io::Write;

/// Trait for writers that serialize or render a mesh.
pub trait MeshWriter {
    /// Write `mesh` to `writer`.
    fn write<W: Write>(&self, writer: W, mesh: &Mesh) -> Result<(), MeshError>;
}
