// src/error.rs

use thiserror::Error;

pub type RasterResult<T> = Result<T, RasterError>;

/// Reasons a draw is refused before any row is rasterized.
///
/// Per-pixel misses are never errors; these only cover inputs that would make
/// the row kernels index outside the buffers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RasterError {
    #[error("buffer holds {actual} cells, expected {expected} for {width}x{height}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("region rows {start_y}..{end_y} cols {min_x}..{max_x} exceed {width}x{height} screen")]
    RegionOutOfBounds {
        start_y: u32,
        end_y: u32,
        min_x: u32,
        max_x: u32,
        width: u32,
        height: u32,
    },

    #[error("texture {width}x{height} has {len} texels")]
    InvalidTexture { width: u32, height: u32, len: usize },

    #[error("invalid render settings: {0}")]
    InvalidSettings(String),
}

impl RasterError {
    pub fn invalid_settings(details: impl Into<String>) -> Self {
        Self::InvalidSettings(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = RasterError::invalid_settings("fog distance must be positive");
        assert!(format!("{err}").contains("fog distance"));

        let err = RasterError::InvalidTexture {
            width: 2,
            height: 2,
            len: 3,
        };
        assert_eq!(format!("{err}"), "texture 2x2 has 3 texels");
    }
}
