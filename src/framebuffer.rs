// src/framebuffer.rs

use rayon::prelude::*;

use crate::error::{RasterError, RasterResult};

/// Row-major color and depth buffers shared by every triangle of a frame.
///
/// `zbuf` holds the nearest ray distance written so far for each pixel. Only the
/// host resets it (via [`FrameBuffers::clear`]) between frames; drawing never does.
#[derive(Clone, Debug)]
pub struct FrameBuffers {
    width: u32,
    height: u32,
    pub screen: Vec<u32>,
    pub zbuf: Vec<f32>,
}

impl FrameBuffers {
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            screen: vec![0; len],
            zbuf: vec![f32::INFINITY; len],
        })
    }

    /// Wraps buffers allocated elsewhere. Both must hold `width * height` cells.
    pub fn from_parts(width: u32, height: u32, screen: Vec<u32>, zbuf: Vec<f32>) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        for actual in [screen.len(), zbuf.len()] {
            if actual != expected {
                return Err(RasterError::BufferSizeMismatch {
                    width,
                    height,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self {
            width,
            height,
            screen,
            zbuf,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Start-of-frame reset: fills the screen with `color` and pushes every depth
    /// to infinity.
    pub fn clear(&mut self, color: u32) {
        self.screen.fill(color);
        self.zbuf.fill(f32::INFINITY);
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.screen[self.index(x, y)])
    }

    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.zbuf[self.index(x, y)])
    }

    /// Disjoint `(y, screen_row, zbuf_row)` views, one per screen row.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [u32], &mut [f32])> + '_ {
        let width = self.width as usize;
        self.screen
            .chunks_mut(width)
            .zip(self.zbuf.chunks_mut(width))
            .enumerate()
            .map(|(y, (screen, zbuf))| (y, screen, zbuf))
    }

    /// Parallel counterpart of [`FrameBuffers::rows_mut`].
    pub fn par_rows_mut(
        &mut self,
    ) -> impl IndexedParallelIterator<Item = (usize, (&mut [u32], &mut [f32]))> + '_ {
        let width = self.width as usize;
        self.screen
            .par_chunks_mut(width)
            .zip(self.zbuf.par_chunks_mut(width))
            .enumerate()
    }

    /// Raw screen memory, for handing the frame to a presenter as-is.
    pub fn screen_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.screen)
    }

    /// Screen contents as `R G B` byte triples, top row first.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.screen.len() * 3);
        for &color in &self.screen {
            let [b, g, r, _] = color.to_le_bytes();
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }
}
