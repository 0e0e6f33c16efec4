//! Minimal 3D helpers for the wireframe sketches.

use nalgebra::{Point3, Rotation3, Vector3};

/// Rotation matching an intrinsic X, then Y, then Z Euler sequence.
pub fn euler_xyz(angles: Vector3<f32>) -> Rotation3<f32> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angles.x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), angles.y)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), angles.z)
}

/// The twelve edges of a unit cube centred on the origin (half extent 1).
pub fn cube_edges() -> [(Point3<f32>, Point3<f32>); 12] {
    let c = |x: f32, y: f32, z: f32| Point3::new(x, y, z);
    [
        // Along x
        (c(-1.0, 1.0, 1.0), c(1.0, 1.0, 1.0)),
        (c(-1.0, -1.0, 1.0), c(1.0, -1.0, 1.0)),
        (c(-1.0, -1.0, -1.0), c(1.0, -1.0, -1.0)),
        (c(-1.0, 1.0, -1.0), c(1.0, 1.0, -1.0)),
        // Along y
        (c(-1.0, 1.0, 1.0), c(-1.0, -1.0, 1.0)),
        (c(1.0, 1.0, 1.0), c(1.0, -1.0, 1.0)),
        (c(1.0, 1.0, -1.0), c(1.0, -1.0, -1.0)),
        (c(-1.0, 1.0, -1.0), c(-1.0, -1.0, -1.0)),
        // Along z
        (c(-1.0, 1.0, -1.0), c(-1.0, 1.0, 1.0)),
        (c(1.0, 1.0, -1.0), c(1.0, 1.0, 1.0)),
        (c(1.0, -1.0, -1.0), c(1.0, -1.0, 1.0)),
        (c(-1.0, -1.0, -1.0), c(-1.0, -1.0, 1.0)),
    ]
}

/// A pinhole camera on the positive z axis looking at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Distance from the origin.
    pub distance: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
}

impl Camera {
    pub const fn new(distance: f32, fov_deg: f32) -> Self {
        Self { distance, fov_deg }
    }

    /// Half of the visible height in the z = 0 plane.
    pub fn half_height(&self) -> f64 {
        (self.distance * (self.fov_deg.to_radians() / 2.0).tan()) as f64
    }

    /// Project `p` onto the z = 0 plane, so points at z = 0 keep their
    /// coordinates. Points at or behind the camera are clamped just in front
    /// of it.
    pub fn project(&self, p: Point3<f32>) -> (f64, f64) {
        let depth = (self.distance - p.z).max(self.distance * 0.05);
        let scale = self.distance / depth;
        ((p.x * scale) as f64, (p.y * scale) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_plane_is_identity() {
        let camera = Camera::new(50.0, 50.0);
        assert_eq!(camera.project(Point3::new(3.0, -2.0, 0.0)), (3.0, -2.0));
    }

    #[test]
    fn test_project_nearer_is_larger() {
        let camera = Camera::new(50.0, 50.0);
        let near = camera.project(Point3::new(1.0, 0.0, 10.0));
        let far = camera.project(Point3::new(1.0, 0.0, -10.0));
        assert!(near.0 > 1.0);
        assert!(far.0 < 1.0);
    }

    #[test]
    fn test_project_behind_camera_is_finite() {
        let camera = Camera::new(50.0, 50.0);
        let (x, y) = camera.project(Point3::new(1.0, 1.0, 80.0));
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_euler_preserves_length() {
        let r = euler_xyz(Vector3::new(0.3, 1.1, -2.0));
        let v = r * Vector3::new(1.0, 2.0, 3.0);
        assert!((v.norm() - 14.0f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_cube_edges_are_axis_aligned() {
        for (a, b) in cube_edges() {
            let d = b - a;
            let nonzero = [d.x, d.y, d.z].iter().filter(|c| c.abs() > 0.0).count();
            assert_eq!(nonzero, 1);
            assert!((d.norm() - 2.0).abs() < 1e-6);
        }
    }
}
