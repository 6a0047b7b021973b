// src/demo_scene.rs

use log::debug;

use crate::camera::Camera;
use crate::error::RasterResult;
use crate::framebuffer::FrameBuffers;
use crate::geometry::{Vec2, Vec3};
use crate::params::{RasterRegion, RenderSettings};
use crate::rasterizer::{draw_triangle, DrawCall, FrameStats};
use crate::texture::Texture;
use crate::triangle::Triangle;

pub const SKY_COLOR: u32 = 0x20_30_48;

const FLOOR_COLOR: u32 = 0x4A_7A_3C;
const BACK_WALL_COLOR: u32 = 0xB0_A0_80;
const SIDE_WALL_COLOR: u32 = 0x90_90_A8;
const PILLAR_COLOR: u32 = 0xC0_50_30;

const CHECKER_LIGHT: u32 = 0xE8_E8_E8;
const CHECKER_DARK: u32 = 0x30_30_30;

/// Index into [`DemoScene::textures`].
pub type TextureId = usize;

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub triangle: Triangle,
    pub texture: Option<TextureId>,
}

/// Fixed test scene: a floor, a back wall, one shaded side wall, a pillar and a
/// checkerboard panel in front of the camera.
#[derive(Clone, Debug)]
pub struct DemoScene {
    pub camera: Camera,
    pub objects: Vec<SceneObject>,
    pub textures: Vec<Texture>,
    pub background: u32,
}

impl DemoScene {
    pub fn texture(&self, id: Option<TextureId>) -> Option<&Texture> {
        id.and_then(|id| self.textures.get(id))
    }

    pub fn triangle_count(&self) -> usize {
        self.objects.len()
    }

    /// Clears the buffers and draws every object in order, one dispatch per
    /// triangle. Triangles that project off screen are skipped.
    pub fn render(&self, buffers: &mut FrameBuffers, settings: &RenderSettings) -> RasterResult<FrameStats> {
        buffers.clear(self.background);

        let mut stats = FrameStats::default();
        let mut skipped = 0;
        for object in &self.objects {
            let Some(region) = RasterRegion::covering(&object.triangle, &self.camera, settings) else {
                skipped += 1;
                continue;
            };
            let mut draw = DrawCall::new(&object.triangle, &self.camera, settings, region);
            if let Some(texture) = self.texture(object.texture) {
                draw = draw.with_texture(texture);
            }
            stats = stats.merge(draw_triangle(buffers, &draw)?);
        }

        debug!(
            "frame: {} triangles drawn, {} off screen, {} pixels written",
            self.objects.len() - skipped,
            skipped,
            stats.drawn
        );
        Ok(stats)
    }
}

/// Two triangles covering the quad `a b c d` (counter-clockwise), with UVs
/// running from `a` = (0, 0) to `c` = (1, 1).
fn quad(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> [Triangle; 2] {
    let (uv_a, uv_b, uv_c, uv_d) = (
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    );
    [
        Triangle::new(a, b, c).with_uvs(uv_a, uv_b, uv_c),
        Triangle::new(a, c, d).with_uvs(uv_a, uv_c, uv_d),
    ]
}

fn push_quad(objects: &mut Vec<SceneObject>, corners: [Vec3; 4], color: u32, darken_by: i32, texture: Option<TextureId>) {
    let [a, b, c, d] = corners;
    for triangle in quad(a, b, c, d) {
        objects.push(SceneObject {
            triangle: triangle.with_color(color).with_darken(darken_by),
            texture,
        });
    }
}

pub fn create_demo_scene() -> RasterResult<DemoScene> {
    let checker = Texture::checkerboard(64, 64, 8, CHECKER_LIGHT, CHECKER_DARK)?;
    let checker_id: TextureId = 0;

    let mut objects = Vec::new();

    // Floor, z = 0.
    push_quad(
        &mut objects,
        [
            Vec3::new(0.5, -6.0, 0.0),
            Vec3::new(12.0, -6.0, 0.0),
            Vec3::new(12.0, 6.0, 0.0),
            Vec3::new(0.5, 6.0, 0.0),
        ],
        FLOOR_COLOR,
        0,
        None,
    );

    // Back wall.
    push_quad(
        &mut objects,
        [
            Vec3::new(11.0, -6.0, 0.0),
            Vec3::new(11.0, 6.0, 0.0),
            Vec3::new(11.0, 6.0, 2.5),
            Vec3::new(11.0, -6.0, 2.5),
        ],
        BACK_WALL_COLOR,
        0,
        None,
    );

    // Left wall, flat-darkened.
    push_quad(
        &mut objects,
        [
            Vec3::new(0.5, 4.0, 0.0),
            Vec3::new(11.0, 4.0, 0.0),
            Vec3::new(11.0, 4.0, 2.5),
            Vec3::new(0.5, 4.0, 2.5),
        ],
        SIDE_WALL_COLOR,
        0x28,
        None,
    );

    // Pillar face, partly hidden behind the panel.
    push_quad(
        &mut objects,
        [
            Vec3::new(7.0, -2.2, 0.0),
            Vec3::new(7.0, -1.2, 0.0),
            Vec3::new(7.0, -1.2, 2.0),
            Vec3::new(7.0, -2.2, 2.0),
        ],
        PILLAR_COLOR,
        0,
        None,
    );

    // Textured panel.
    push_quad(
        &mut objects,
        [
            Vec3::new(4.0, -1.5, 0.2),
            Vec3::new(4.0, 0.5, 0.2),
            Vec3::new(4.0, 0.5, 1.2),
            Vec3::new(4.0, -1.5, 1.2),
        ],
        CHECKER_DARK,
        0,
        Some(checker_id),
    );

    Ok(DemoScene {
        camera: Camera::from_yaw(Vec3::new(0.0, 0.0, 0.5), 0.0, 0.66),
        objects,
        textures: vec![checker],
        background: SKY_COLOR,
    })
}
