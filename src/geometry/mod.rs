//! Geometry utilities for mesh-reorder.
//!
//! Only axis-aligned bounds are provided; they back the mesh's derived
//! extent accessors and the renderer's square viewport.

pub mod bounds;
