//! Axis-aligned regions in world coordinates

use super::algebra::Vec2;

/// Axis-aligned world-space box with `min <= max` on both axes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Build from two arbitrary corners, ordering each axis
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Get the width of the box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if this box contains a point (edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp a point into the box, axis by axis
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}
