//! The 2D linear mesh model.
//!
//! A [`Mesh`] owns vertex coordinates, element connectivity, and two named
//! subset tables. Element order matters: [`ElementSets`] reference elements
//! by position, and the vertex order inside an element encodes its
//! orientation. The mutating operations ([`Mesh::shuffle`], [`Mesh::split`],
//! [`Mesh::sort`]) all keep the following invariants:
//!
//! 1. every vertex index in an element or node set is in `[0, nvertices)`;
//! 2. every element position in an element set is in `[0, nelements)`;
//! 3. the element set `"all"` equals `0..nelements`;
//! 4. the cached counts equal the lengths of the backing arrays.
//!
//! The model owns all of its data; inputs are moved in and accessors hand out
//! shared borrows only, so the only way to change a mesh is through the
//! operations above.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rand::Rng;

use crate::algs::shuffle::{ShuffleOutcome, shuffle_elements};
use crate::algs::sort::{SortOutcome, sort_elements};
use crate::algs::split::{SplitOutcome, split_seams};
use crate::debug_invariants::DebugInvariants;
use crate::geometry::bounds::BoundingBox;
use crate::io::MeshWriter;
use crate::io::snapshot::BincodeSnapshot;
use crate::mesh_error::MeshError;
use crate::topology::sets::{ElementSets, NodeSets};
use crate::topology::validation::{
    validate_all_set, validate_element_sets, validate_elements, validate_node_sets,
};

/// A 2D vertex coordinate.
pub type Vertex = [f64; 2];

/// An element: the ordered vertex indices it connects.
pub type Element = Vec<usize>;

/// Vertices, oriented elements, and the node/element sets that refer to them.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) elements: Vec<Element>,
    pub(crate) nsets: NodeSets,
    pub(crate) elsets: ElementSets,
    pub(crate) nvertices: usize,
    pub(crate) nelements: usize,
}

impl Mesh {
    /// Build a mesh without named sets (apart from `"all"`).
    pub fn new(vertices: Vec<Vertex>, elements: Vec<Element>) -> Result<Self, MeshError> {
        Self::with_sets(vertices, elements, NodeSets::new(), ElementSets::new())
    }

    /// Build a mesh with node and element sets.
    ///
    /// All indices are validated; any stored `"all"` element set is replaced
    /// by `0..nelements`.
    pub fn with_sets(
        vertices: Vec<Vertex>,
        elements: Vec<Element>,
        nsets: NodeSets,
        elsets: ElementSets,
    ) -> Result<Self, MeshError> {
        let nvertices = vertices.len();
        let nelements = elements.len();
        validate_elements(&elements, nvertices)?;
        validate_node_sets(&nsets, nvertices)?;
        validate_element_sets(&elsets, nelements)?;

        let mut mesh = Mesh {
            vertices,
            elements,
            nsets,
            elsets,
            nvertices,
            nelements,
        };
        mesh.elsets.reset_all(nelements);
        log::debug!("mesh: built with {nvertices} vertices, {nelements} elements");
        Ok(mesh)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Vertex indices of the element at `position`.
    pub fn element(&self, position: usize) -> Option<&[usize]> {
        self.elements.get(position).map(Vec::as_slice)
    }

    pub fn nsets(&self) -> &NodeSets {
        &self.nsets
    }

    pub fn elsets(&self) -> &ElementSets {
        &self.elsets
    }

    pub fn nvertices(&self) -> usize {
        self.nvertices
    }

    pub fn nelements(&self) -> usize {
        self.nelements
    }

    /// Bounding box of all vertices, `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.vertices)
    }

    pub fn x_min(&self) -> Option<f64> {
        self.bounding_box().map(|b| b.x_min())
    }

    pub fn x_max(&self) -> Option<f64> {
        self.bounding_box().map(|b| b.x_max())
    }

    pub fn y_min(&self) -> Option<f64> {
        self.bounding_box().map(|b| b.y_min())
    }

    pub fn y_max(&self) -> Option<f64> {
        self.bounding_box().map(|b| b.y_max())
    }

    /// Midpoint of the bounding box.
    pub fn center(&self) -> Option<[f64; 2]> {
        self.bounding_box().map(|b| b.center())
    }

    /// Randomly reorder the elements and flip the orientation of half of them.
    ///
    /// Element sets follow their elements to the new positions.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ShuffleOutcome {
        shuffle_elements(self, rng)
    }

    /// Remove the two seam elements and renumber the survivors.
    ///
    /// See [`split_seams`] for the seam rule and the error cases. On error
    /// the mesh is left unchanged.
    pub fn split(&mut self) -> Result<SplitOutcome, MeshError> {
        split_seams(self)
    }

    /// Restore a canonical, connectivity-ordered element sequence.
    ///
    /// See [`sort_elements`] for the ordering rule.
    pub fn sort(&mut self) -> SortOutcome {
        sort_elements(self)
    }

    /// Write a snapshot of vertices, elements, and element sets to `path`.
    ///
    /// Node sets are not part of the snapshot.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MeshError> {
        let file = File::create(path)?;
        BincodeSnapshot.write(BufWriter::new(file), self)
    }
}

impl DebugInvariants for Mesh {
    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.nvertices != self.vertices.len() {
            return Err(MeshError::CountMismatch {
                what: "vertex",
                cached: self.nvertices,
                actual: self.vertices.len(),
            });
        }
        if self.nelements != self.elements.len() {
            return Err(MeshError::CountMismatch {
                what: "element",
                cached: self.nelements,
                actual: self.elements.len(),
            });
        }
        validate_elements(&self.elements, self.nvertices)?;
        validate_node_sets(&self.nsets, self.nvertices)?;
        validate_element_sets(&self.elsets, self.nelements)?;
        validate_all_set(&self.elsets, self.nelements)
    }
}
