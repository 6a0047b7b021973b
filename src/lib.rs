// src/lib.rs

pub mod barycentric;
pub mod camera;
pub mod demo_scene;
pub mod error;
pub mod framebuffer;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod params;
pub mod rasterizer;
pub mod ray;
pub mod shading;
pub mod texture;
pub mod triangle;

pub use barycentric::{compute_barycentric_weights, BarycentricBasis, Weights};
pub use camera::Camera;
pub use error::{RasterError, RasterResult};
pub use framebuffer::FrameBuffers;
pub use generator::TriangleGenerator;
pub use geometry::{Vec2, Vec3};
pub use intersection::intersect_ray_with_triangle_plane;
pub use params::{RasterRegion, RenderSettings, ScanPolicy};
pub use rasterizer::{draw_triangle, draw_triangle_sequential, rasterize_row, DrawCall, FrameStats, RowStats};
pub use ray::reconstruct_ray_point;
pub use shading::{darken, shade, ShadeType};
pub use texture::Texture;
pub use triangle::Triangle;
