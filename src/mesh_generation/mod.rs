//! Mesh generators with named vertex and element sets.

use std::f64::consts::TAU;

use crate::mesh_error::MeshError;
use crate::topology::mesh::{Element, Mesh, Vertex};
use crate::topology::sets::{ALL, ElementSets, NodeSets};

/// Element set of the first quarter of a circle (counter-clockwise from +x).
pub const UPPER_RIGHT: &str = "upper-right";
/// Element set of the second quarter.
pub const UPPER_LEFT: &str = "upper-left";
/// Element set of the third quarter.
pub const BOTTOM_LEFT: &str = "bottom-left";
/// Element set of the fourth quarter.
pub const BOTTOM_RIGHT: &str = "bottom-right";

/// Parameters of [`circle_mesh`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleMeshOptions {
    pub center: [f64; 2],
    pub radius: f64,
    /// Number of segments, equal to the number of vertices.
    pub nelements: usize,
}

impl Default for CircleMeshOptions {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            radius: 1.0,
            nelements: 24,
        }
    }
}

fn invalid_geometry(message: impl Into<String>) -> MeshError {
    MeshError::InvalidGeometry(message.into())
}

/// Closed polyline approximating a circle.
///
/// Vertex `k` sits at angle `2πk / n`; element `k` is `[k, (k + 1) % n]`.
/// The node set `all` holds every vertex. Besides `all`, the element sets
/// split the ring into the quarters [`UPPER_RIGHT`], [`UPPER_LEFT`],
/// [`BOTTOM_LEFT`], and [`BOTTOM_RIGHT`] using integer division of `n`.
pub fn circle_mesh(options: CircleMeshOptions) -> Result<Mesh, MeshError> {
    let CircleMeshOptions {
        center,
        radius,
        nelements: n,
    } = options;
    if n < 2 {
        return Err(invalid_geometry(format!(
            "circle needs at least 2 elements, got {n}"
        )));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(invalid_geometry(format!(
            "radius must be positive and finite, got {radius}"
        )));
    }
    if !center.iter().all(|c| c.is_finite()) {
        return Err(invalid_geometry("center must be finite"));
    }

    let vertices: Vec<Vertex> = (0..n)
        .map(|k| {
            let angle = TAU * k as f64 / n as f64;
            [
                center[0] + radius * angle.cos(),
                center[1] + radius * angle.sin(),
            ]
        })
        .collect();
    let elements: Vec<Element> = (0..n).map(|k| vec![k, (k + 1) % n]).collect();

    let nsets: NodeSets = [(ALL, 0..n)].into_iter().collect();
    let elsets: ElementSets = [
        (ALL, 0..n),
        (UPPER_RIGHT, 0..n / 4),
        (UPPER_LEFT, n / 4..n / 2),
        (BOTTOM_LEFT, n / 2..3 * n / 4),
        (BOTTOM_RIGHT, 3 * n / 4..n),
    ]
    .into_iter()
    .collect();

    Mesh::with_sets(vertices, elements, nsets, elsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_circle() {
        let mesh = circle_mesh(CircleMeshOptions::default()).unwrap();
        assert_eq!(mesh.nvertices(), 24);
        assert_eq!(mesh.nelements(), 24);
        assert_eq!(mesh.element(23), Some(&[23, 0][..]));
        assert_eq!(mesh.nsets().get(ALL).unwrap().len(), 24);
        assert_eq!(mesh.elsets().len(), 5);
    }

    #[test]
    fn vertices_lie_on_the_circle() {
        let options = CircleMeshOptions {
            center: [2.0, -1.0],
            radius: 3.0,
            nelements: 8,
        };
        let mesh = circle_mesh(options).unwrap();
        for v in mesh.vertices() {
            let r = ((v[0] - 2.0).powi(2) + (v[1] + 1.0).powi(2)).sqrt();
            assert!((r - 3.0).abs() < 1e-12);
        }
        let first = mesh.vertices()[0];
        assert!((first[0] - 5.0).abs() < 1e-12 && (first[1] + 1.0).abs() < 1e-12);
        let [cx, cy] = mesh.center().unwrap();
        assert!((cx - 2.0).abs() < 1e-12 && (cy + 1.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_sets_for_uneven_counts() {
        let mesh = circle_mesh(CircleMeshOptions {
            nelements: 10,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(mesh.elsets().get(UPPER_RIGHT), Some(&[0, 1][..]));
        assert_eq!(mesh.elsets().get(UPPER_LEFT), Some(&[2, 3, 4][..]));
        assert_eq!(mesh.elsets().get(BOTTOM_LEFT), Some(&[5, 6][..]));
        assert_eq!(mesh.elsets().get(BOTTOM_RIGHT), Some(&[7, 8, 9][..]));
    }

    #[test]
    fn rejects_degenerate_parameters() {
        for options in [
            CircleMeshOptions {
                nelements: 1,
                ..Default::default()
            },
            CircleMeshOptions {
                radius: 0.0,
                ..Default::default()
            },
            CircleMeshOptions {
                radius: f64::NAN,
                ..Default::default()
            },
            CircleMeshOptions {
                center: [f64::INFINITY, 0.0],
                ..Default::default()
            },
        ] {
            assert!(matches!(
                circle_mesh(options),
                Err(MeshError::InvalidGeometry(_))
            ));
        }
    }
}
