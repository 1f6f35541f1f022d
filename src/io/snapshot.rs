//! Binary snapshots of a mesh.
//!
//! A snapshot stores vertices, elements, and element sets with bincode. Node
//! sets are not included. Loading produces a [`MeshSnapshot`]; turning it
//! back into a [`Mesh`] re-validates every index.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::io::MeshWriter;
use crate::mesh_error::MeshError;
use crate::topology::mesh::{Element, Mesh, Vertex};
use crate::topology::sets::{ElementSets, NodeSets};

/// Raw fields captured by a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshSnapshot {
    pub vertices: Vec<Vertex>,
    pub elements: Vec<Element>,
    pub elsets: ElementSets,
}

impl MeshSnapshot {
    /// Copy the persisted fields out of `mesh`.
    pub fn of(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices().to_vec(),
            elements: mesh.elements().to_vec(),
            elsets: mesh.elsets().clone(),
        }
    }

    /// Build a new mesh (without node sets) from the snapshot.
    pub fn into_mesh(self) -> Result<Mesh, MeshError> {
        Mesh::with_sets(self.vertices, self.elements, NodeSets::new(), self.elsets)
    }
}

/// Bincode snapshot writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeSnapshot;

impl MeshWriter for BincodeSnapshot {
    fn write<W: Write>(&self, mut writer: W, mesh: &Mesh) -> Result<(), MeshError> {
        bincode::serialize_into(&mut writer, &MeshSnapshot::of(mesh))?;
        writer.flush()?;
        log::debug!(
            "snapshot: wrote {} vertices, {} elements",
            mesh.nvertices(),
            mesh.nelements()
        );
        Ok(())
    }
}

/// Read a snapshot written by [`BincodeSnapshot`].
pub fn load_snapshot<R: Read>(reader: R) -> Result<MeshSnapshot, MeshError> {
    Ok(bincode::deserialize_from(reader)?)
}
