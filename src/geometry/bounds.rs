//! Axis-aligned bounds of a 2D point cloud.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[[f64; 2]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox {
            min: *first,
            max: *first,
        };
        for p in rest {
            for axis in 0..2 {
                bbox.min[axis] = bbox.min[axis].min(p[axis]);
                bbox.max[axis] = bbox.max[axis].max(p[axis]);
            }
        }
        Some(bbox)
    }

    pub fn x_min(&self) -> f64 {
        self.min[0]
    }

    pub fn x_max(&self) -> f64 {
        self.max[0]
    }

    pub fn y_min(&self) -> f64 {
        self.min[1]
    }

    pub fn y_max(&self) -> f64 {
        self.max[1]
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    /// Midpoint of the box.
    pub fn center(&self) -> [f64; 2] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
        ]
    }

    /// Square window centred on the box with half-extent `max(width, height)`.
    ///
    /// Used for equal-aspect plotting; a degenerate box yields a unit window.
    pub fn square_viewport(&self) -> BoundingBox {
        let mut r = self.width().max(self.height());
        if r <= 0.0 {
            r = 1.0;
        }
        let [cx, cy] = self.center();
        BoundingBox {
            min: [cx - r, cy - r],
            max: [cx + r, cy + r],
        }
    }
}
