// src/texture.rs

use crate::error::{RasterError, RasterResult};
use crate::geometry::Vec2;

/// Packed 24-bit RGB texels, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Texture {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> RasterResult<Self> {
        if width == 0 || height == 0 || pixels.len() != (width as usize) * (height as usize) {
            return Err(RasterError::InvalidTexture {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn solid(width: u32, height: u32, color: u32) -> RasterResult<Self> {
        Self::new(width, height, vec![color; (width as usize) * (height as usize)])
    }

    /// Alternating `cell`-sized squares of `a` and `b`.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: u32, b: u32) -> RasterResult<Self> {
        let cell = cell.max(1);
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b }))
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Nearest-neighbour lookup at normalized `uv`.
    ///
    /// Returns `None` when the computed index falls outside the texel array,
    /// in which case the caller draws its flat color instead.
    #[inline]
    pub fn sample(&self, uv: Vec2) -> Option<u32> {
        let tex_x = (uv.x * self.width as f32).floor();
        let tex_y = (uv.y * self.height as f32).floor();
        let len = self.pixels.len() as f32;
        if !(tex_x >= 0.0 && tex_y >= 0.0 && tex_x < len && tex_y < self.height as f32) {
            return None;
        }

        let index = tex_x as usize + tex_y as usize * self.width as usize;
        self.pixels.get(index).copied()
    }
}
