//! # mesh-reorder
//!
//! mesh-reorder models a 2D linear mesh (vertices plus ordered connectivity
//! elements) and the topology edits that have to keep auxiliary index subsets
//! consistent: random reordering and reorientation, seam splitting with
//! renumbering, and canonical re-sorting.
//!
//! ## Features
//! - [`Mesh`](topology::mesh::Mesh) with named node sets and element sets,
//!   derived bounding box and center
//! - Shuffle, split, and sort operations that remap every element set
//!   through an inverse permutation
//! - A circle-mesh generator with quadrant element sets
//! - Bincode snapshots and SVG rendering
//!
//! ## Determinism
//!
//! Randomized operations take an explicit [`rand::Rng`].
//! [`TopologyShuffler::seeded`](algs::shuffle::TopologyShuffler::seeded)
//! wraps a `SmallRng` so runs are reproducible; tests fix seeds explicitly.
//!
//! ## Invariant checks
//!
//! Every mutation re-validates the mesh in debug builds. Enable the
//! `check-invariants` feature to keep the checks in release builds.
//!
//! ```rust
//! use mesh_reorder::prelude::*;
//!
//! let mut mesh = circle_mesh(CircleMeshOptions { nelements: 12, ..Default::default() })?;
//! TopologyShuffler::seeded(42).shuffle(&mut mesh);
//! mesh.split()?;
//! assert_eq!(mesh.nelements(), 10);
//! mesh.sort();
//! # Ok::<(), MeshError>(())
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod mesh_generation;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::renumber::permute_elements;
    pub use crate::algs::shuffle::{ShuffleOutcome, TopologyShuffler};
    pub use crate::algs::sort::SortOutcome;
    pub use crate::algs::split::SplitOutcome;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::bounds::BoundingBox;
    pub use crate::io::MeshWriter;
    pub use crate::io::snapshot::{BincodeSnapshot, MeshSnapshot, load_snapshot};
    pub use crate::io::svg::{Colormap, DrawOptions, SvgRenderer};
    pub use crate::mesh_error::MeshError;
    pub use crate::mesh_generation::{CircleMeshOptions, circle_mesh};
    pub use crate::topology::mesh::{Element, Mesh, Vertex};
    pub use crate::topology::sets::{ALL, ElementSets, NodeSets};
}
