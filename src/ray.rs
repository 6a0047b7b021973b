// src/ray.rs

use crate::geometry::{Vec2, Vec3};

/// Maps screen pixel `(x, y)` to a world-space point on the view plane.
///
/// The ray for the pixel is the line through `camera_pos` and the returned
/// point; the result is not a direction vector. Camera x/y are folded in but the
/// vertical component is the bare normalized screen height `1 - y / height`.
#[inline]
pub fn reconstruct_ray_point(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    camera_dir: Vec2,
    camera_plane: Vec2,
    camera_pos: Vec3,
) -> Vec3 {
    let x_norm = 2.0 * x as f32 / width as f32 - 1.0;
    let offset = camera_dir + camera_plane * x_norm;
    let z_norm = 1.0 - (y as f32 / height as f32);

    Vec3::new(offset.x + camera_pos.x, offset.y + camera_pos.y, z_norm)
}
