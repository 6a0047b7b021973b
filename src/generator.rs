// src/generator.rs

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::Camera;
use crate::geometry::{Vec2, Vec3};
use crate::triangle::Triangle;

/// Seeded source of well-shaped random triangles, for benchmarks and
/// randomized tests. The same seed always yields the same sequence.
pub struct TriangleGenerator {
    rng: StdRng,
}

impl TriangleGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Opaque 24-bit color.
    pub fn random_color(&mut self) -> u32 {
        self.rng.gen_range(0x10_10_10..=0xFF_FF_FF)
    }

    /// Triangle around `center` spanned by the axes `across` and `up`.
    ///
    /// Vertices sit at roughly even angles with a bounded jitter so the
    /// triangle never collapses into a sliver.
    pub fn generate_triangle(&mut self, center: Vec3, across: Vec3, up: Vec3, avg_radius: f32) -> Triangle {
        let max_perturbation = PI / 3.0 * 0.3;
        let start = self.rng.gen_range(0.0..2.0 * PI);

        let mut vertices = [Vec3::ZERO; 3];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let angle = start + i as f32 * 2.0 * PI / 3.0 + self.rng.gen_range(-max_perturbation..max_perturbation);
            let radius = self.rng.gen_range(avg_radius * 0.7..avg_radius * 1.2);
            *vertex = center + across * (radius * angle.cos()) + up * (radius * angle.sin());
        }

        Triangle::new(vertices[0], vertices[1], vertices[2]).with_color(self.random_color())
    }

    /// Triangle placed `near..far` units ahead of `camera`, inside its view and
    /// roughly facing it, with a random forward tilt.
    pub fn generate_facing_triangle(&mut self, camera: &Camera, near: f32, far: f32) -> Triangle {
        let forward = Vec3::new(camera.dir.x, camera.dir.y, 0.0);
        let plane_len = glam::Vec2::from(camera.plane).length().max(f32::EPSILON);
        let across = Vec3::new(camera.plane.x / plane_len, camera.plane.y / plane_len, 0.0);

        let depth = self.rng.gen_range(near..far);
        let lateral = self.rng.gen_range(-0.3f32..0.3) * depth * plane_len;
        let vertical = self.rng.gen_range(-0.2f32..0.2) * depth;
        let center = camera.pos + forward * depth + across * lateral + Vec3::new(0.0, 0.0, vertical);

        let tilt = self.rng.gen_range(-0.5f32..0.5);
        let up = Vec3::new(0.0, 0.0, 1.0) + forward * tilt;
        let radius = self.rng.gen_range(0.15f32..0.35) * depth;

        self.generate_triangle(center, across, up, radius)
    }

    /// `count` facing triangles; about half carry unit texture coordinates.
    pub fn generate_scene(&mut self, camera: &Camera, count: usize, near: f32, far: f32) -> Vec<Triangle> {
        (0..count)
            .map(|_| {
                let triangle = self.generate_facing_triangle(camera, near, far);
                if self.rng.gen_bool(0.5) {
                    triangle.with_uvs(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0))
                } else {
                    triangle
                }
            })
            .collect()
    }
}
