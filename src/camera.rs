// src/camera.rs

use crate::geometry::{Vec2, Vec3};

/// Ray-casting camera: a world position plus a 2D facing direction and a 2D
/// view-plane vector whose length sets the horizontal field of view.
///
/// Vertical orientation is not modeled; screen rows map straight to world
/// height through the ray reconstruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec3,
    pub dir: Vec2,
    pub plane: Vec2,
}

impl Camera {
    pub fn new(pos: Vec3, dir: Vec2, plane: Vec2) -> Self {
        Self { pos, dir, plane }
    }

    /// Camera facing `yaw` radians from +x, with the view plane perpendicular to
    /// the direction and scaled by `fov_scale` (0.66 gives roughly 66 degrees).
    pub fn from_yaw(pos: Vec3, yaw: f32, fov_scale: f32) -> Self {
        let dir = glam::Vec2::from_angle(yaw);
        let plane = dir.perp() * -fov_scale;
        Self {
            pos,
            dir: dir.into(),
            plane: plane.into(),
        }
    }

    /// Turns the camera in place by `angle` radians (counter-clockwise).
    pub fn rotate(&mut self, angle: f32) {
        let rotation = glam::Vec2::from_angle(angle);
        self.dir = rotation.rotate(self.dir.into()).into();
        self.plane = rotation.rotate(self.plane.into()).into();
    }

    /// Moves along the facing direction, keeping the height.
    pub fn advance(&mut self, distance: f32) {
        self.pos.x += self.dir.x * distance;
        self.pos.y += self.dir.y * distance;
    }

    /// Screen position `(x, y)` of a world point, inverting the per-pixel ray
    /// reconstruction. `None` for points at or behind the camera.
    pub fn project(&self, point: Vec3, width: u32, height: u32) -> Option<(f32, f32)> {
        let rel = point - self.pos;
        let det = self.dir.x * self.plane.y - self.plane.x * self.dir.y;
        if det.abs() <= f32::EPSILON {
            return None;
        }

        let depth = (rel.x * self.plane.y - self.plane.x * rel.y) / det;
        if depth <= f32::EPSILON {
            return None;
        }
        let lateral = (self.dir.x * rel.y - rel.x * self.dir.y) / det;

        let x_norm = lateral / depth;
        let z_norm = rel.z / depth + self.pos.z;
        Some(((x_norm + 1.0) * width as f32 / 2.0, (1.0 - z_norm) * height as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::reconstruct_ray_point;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn yaw_zero_faces_positive_x() {
        let cam = Camera::from_yaw(Vec3::new(0.0, 0.0, 0.5), 0.0, 0.66);
        assert_relative_eq!(cam.dir.x, 1.0);
        assert_relative_eq!(cam.dir.y, 0.0);
        assert_relative_eq!(cam.plane.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(cam.plane.y.abs(), 0.66, epsilon = 1e-6);
    }

    #[test]
    fn rotate_keeps_plane_perpendicular() {
        let mut cam = Camera::from_yaw(Vec3::ZERO, 0.3, 0.66);
        cam.rotate(FRAC_PI_2);

        let dot = cam.dir.x * cam.plane.x + cam.dir.y * cam.plane.y;
        assert_relative_eq!(dot, 0.0, epsilon = 1e-6);
        assert_relative_eq!(glam::Vec2::from(cam.plane).length(), 0.66, epsilon = 1e-5);
        assert_relative_eq!(cam.dir.x, (0.3f32 + FRAC_PI_2).cos(), epsilon = 1e-6);
    }

    #[test]
    fn advance_moves_along_dir() {
        let mut cam = Camera::new(Vec3::new(1.0, 1.0, 0.5), Vec2::new(0.0, 1.0), Vec2::new(0.66, 0.0));
        cam.advance(2.0);
        assert_eq!(cam.pos, Vec3::new(1.0, 3.0, 0.5));
    }

    #[test]
    fn project_centers_point_straight_ahead() {
        let cam = Camera::from_yaw(Vec3::new(0.0, 0.0, 0.5), 0.0, 0.66);
        let (x, y) = cam.project(Vec3::new(5.0, 0.0, 0.5), 200, 100).unwrap();
        assert_relative_eq!(x, 100.0, epsilon = 1e-4);
        assert_relative_eq!(y, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn project_rejects_points_behind() {
        let cam = Camera::from_yaw(Vec3::new(0.0, 0.0, 0.5), 0.0, 0.66);
        assert!(cam.project(Vec3::new(-1.0, 0.0, 0.5), 200, 100).is_none());
        assert!(cam.project(Vec3::new(0.0, 3.0, 0.5), 200, 100).is_none());
    }

    #[test]
    fn project_inverts_ray_reconstruction() {
        let cam = Camera::from_yaw(Vec3::new(1.0, -2.0, 0.4), 0.7, 0.66);
        for &(px, py) in &[(0u32, 0u32), (37, 12), (199, 99), (100, 50)] {
            let ray_point = reconstruct_ray_point(px, py, 200, 100, cam.dir, cam.plane, cam.pos);
            let (x, y) = cam.project(ray_point, 200, 100).unwrap();
            assert_relative_eq!(x, px as f32, epsilon = 1e-2);
            assert_relative_eq!(y, py as f32, epsilon = 1e-2);
        }
    }
}
