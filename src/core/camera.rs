//! Camera mapping world coordinates to the normalized [0,1]² viewport

use crate::domain::{Bounds, Mat2, Vec2};

/// Affine world ↔ normalized transform
///
/// `project(p) = projection · (p − origin) + (0.5, 0.5)`. The inverse matrix is
/// computed whenever the projection changes, never lazily.
#[derive(Clone, Debug)]
pub struct Camera {
    origin: Vec2,
    projection: Mat2,
    unprojection: Mat2,
}

impl Camera {
    /// Create a camera; `projection` must be invertible
    pub fn new(origin: Vec2, projection: Mat2) -> Self {
        debug_assert!(
            projection.determinant() != 0.0,
            "camera projection matrix must be invertible"
        );
        Self {
            origin,
            projection,
            unprojection: projection.inverse(),
        }
    }

    /// Uniform scale with a flipped Y axis, so world Y grows upwards on screen
    pub fn with_scale(origin: Vec2, scale: f64) -> Self {
        Self::new(origin, Mat2::from_scale(scale, -scale))
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn projection(&self) -> Mat2 {
        self.projection
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Replace the projection matrix and recompute its inverse
    pub fn set_projection(&mut self, projection: Mat2) {
        debug_assert!(
            projection.determinant() != 0.0,
            "camera projection matrix must be invertible"
        );
        self.projection = projection;
        self.unprojection = projection.inverse();
    }

    /// World → normalized
    pub fn project(&self, world: Vec2) -> Vec2 {
        self.projection * (world - self.origin) + Vec2::HALF
    }

    /// Normalized → world, exact inverse of [`Camera::project`]
    pub fn unproject(&self, normalized: Vec2) -> Vec2 {
        self.unprojection * (normalized - Vec2::HALF) + self.origin
    }

    /// World-space box covering the normalized rectangle between two corners
    pub fn scene_bounds(&self, top_left: Vec2, bottom_right: Vec2) -> Bounds {
        Bounds::from_corners(self.unproject(top_left), self.unproject(bottom_right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cameras() -> Vec<Camera> {
        vec![
            Camera::with_scale(Vec2::ZERO, 0.05),
            Camera::with_scale(Vec2::new(3.5, -12.25), 0.125),
            Camera::new(
                Vec2::new(-1.0, 2.0),
                Mat2::from_cols(Vec2::new(0.1, 0.02), Vec2::new(-0.03, -0.08)),
            ),
            Camera::new(Vec2::new(7.0, 7.0), Mat2::from_scale(-0.2, 0.01)),
        ]
    }

    #[test]
    fn test_origin_projects_to_center() {
        for camera in cameras() {
            let center = camera.project(camera.origin());
            assert_relative_eq!(center.x, 0.5);
            assert_relative_eq!(center.y, 0.5);
        }
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let points = [
            Vec2::ZERO,
            Vec2::new(1.0, 1.0),
            Vec2::new(-10.0, 9.75),
            Vec2::new(1234.5, -0.001),
            Vec2::new(-3.3e-4, 2.2e3),
        ];
        for camera in cameras() {
            for &p in &points {
                let back = camera.unproject(camera.project(p));
                assert_relative_eq!(back.x, p.x, epsilon = 1e-9, max_relative = 1e-12);
                assert_relative_eq!(back.y, p.y, epsilon = 1e-9, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_default_camera_flips_y() {
        let camera = Camera::with_scale(Vec2::ZERO, 0.05);
        // top-left of the viewport is (-10, 10) in the world
        let top_left = camera.unproject(Vec2::ZERO);
        assert_relative_eq!(top_left.x, -10.0);
        assert_relative_eq!(top_left.y, 10.0);
        let p = camera.project(Vec2::new(0.0, 5.0));
        assert!(p.y < 0.5);
    }

    #[test]
    fn test_scene_bounds_are_ordered() {
        for camera in cameras() {
            let bounds = camera.scene_bounds(Vec2::ZERO, Vec2::new(1.0, 1.0));
            assert!(bounds.min.x <= bounds.max.x);
            assert!(bounds.min.y <= bounds.max.y);
        }
        let camera = Camera::with_scale(Vec2::ZERO, 0.05);
        let bounds = camera.scene_bounds(Vec2::ZERO, Vec2::new(1.0, 1.0));
        assert_relative_eq!(bounds.min.x, -10.0);
        assert_relative_eq!(bounds.min.y, -10.0);
        assert_relative_eq!(bounds.max.x, 10.0);
        assert_relative_eq!(bounds.max.y, 10.0);
    }

    #[test]
    fn test_setters_recompute_inverse() {
        let mut camera = Camera::with_scale(Vec2::ZERO, 0.05);
        camera.set_projection(Mat2::from_scale(0.1, -0.1));
        camera.set_origin(Vec2::new(2.0, 2.0));
        let corner = camera.unproject(Vec2::ZERO);
        assert_relative_eq!(corner.x, -3.0);
        assert_relative_eq!(corner.y, 7.0);
        assert_eq!(camera.projection(), Mat2::from_scale(0.1, -0.1));
    }
}
