// src/params.rs

use crate::camera::Camera;
use crate::error::{RasterError, RasterResult};
use crate::shading::ShadeType;
use crate::triangle::Triangle;

/// How a row invocation decides when to stop sweeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Stop at the first geometric miss after the row has entered the
    /// triangle. Assumes the triangle covers one contiguous run per row.
    #[default]
    StopAfterSpan,
    /// Visit every column of the region.
    FullScan,
}

/// Frame-wide configuration shared by every draw.
///
/// # Example
///
/// ```
/// use ray_raster::{RenderSettings, ShadeType};
///
/// let settings = RenderSettings::default()
///     .with_screen(320, 200)
///     .with_hud_height(180)
///     .with_shade_type(ShadeType::Linear);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels, HUD included.
    pub height: u32,
    /// Rows above the HUD; draws are clamped to `0..hud_height`.
    pub hud_height: u32,
    pub shade_type: ShadeType,
    pub textures_enabled: bool,
    /// Distance at which depth shading reaches full strength.
    pub fog_distance: f32,
    /// Maximum depth-shade darkening.
    pub shade_threshold: i32,
    pub scan_policy: ScanPolicy,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            hud_height: 480,
            shade_type: ShadeType::Quadratic,
            textures_enabled: true,
            fog_distance: 10.0,
            shade_threshold: 75,
            scan_policy: ScanPolicy::StopAfterSpan,
        }
    }
}

impl RenderSettings {
    /// Sets the screen size and resets the HUD split to the full height.
    #[must_use]
    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self.hud_height = height;
        self
    }

    #[must_use]
    pub fn with_hud_height(mut self, hud_height: u32) -> Self {
        self.hud_height = hud_height;
        self
    }

    #[must_use]
    pub fn with_shade_type(mut self, shade_type: ShadeType) -> Self {
        self.shade_type = shade_type;
        self
    }

    #[must_use]
    pub fn with_textures(mut self, enabled: bool) -> Self {
        self.textures_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_fog(mut self, fog_distance: f32, shade_threshold: i32) -> Self {
        self.fog_distance = fog_distance;
        self.shade_threshold = shade_threshold;
        self
    }

    #[must_use]
    pub fn with_scan_policy(mut self, scan_policy: ScanPolicy) -> Self {
        self.scan_policy = scan_policy;
        self
    }

    pub fn validate(&self) -> RasterResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.hud_height == 0 || self.hud_height > self.height {
            return Err(RasterError::invalid_settings(format!(
                "hud height {} outside 1..={}",
                self.hud_height, self.height
            )));
        }
        if !(self.fog_distance.is_finite() && self.fog_distance > 0.0) {
            return Err(RasterError::invalid_settings(format!(
                "fog distance {} must be positive",
                self.fog_distance
            )));
        }
        if self.shade_threshold < 0 {
            return Err(RasterError::invalid_settings(format!(
                "shade threshold {} must not be negative",
                self.shade_threshold
            )));
        }
        Ok(())
    }
}

/// Screen rectangle swept by one draw: rows `start_y..end_y`, columns
/// `min_x..max_x`. Invocation `i` handles row `start_y + i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterRegion {
    pub start_y: u32,
    pub end_y: u32,
    pub min_x: u32,
    pub max_x: u32,
}

impl RasterRegion {
    pub fn new(start_y: u32, end_y: u32, min_x: u32, max_x: u32) -> Self {
        Self {
            start_y,
            end_y,
            min_x,
            max_x,
        }
    }

    /// The whole visible screen above the HUD.
    pub fn full(settings: &RenderSettings) -> Self {
        Self::new(0, settings.hud_height, 0, settings.width)
    }

    /// Number of row invocations.
    pub fn rows(&self) -> u32 {
        self.end_y.saturating_sub(self.start_y)
    }

    pub fn columns(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.columns() == 0
    }

    /// Bounding box of projected screen points, clamped to the visible screen.
    /// Returns `None` when the box lies entirely off screen.
    pub fn from_screen_bounds(points: &[(f32, f32)], settings: &RenderSettings) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.0, first.0, first.1, first.1);
        for &(x, y) in rest {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let width = settings.width as f32;
        let visible = settings.hud_height as f32;
        if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
            return None;
        }
        if max_x < 0.0 || min_x >= width || max_y < 0.0 || min_y >= visible {
            return None;
        }

        let region = Self {
            start_y: min_y.floor().max(0.0) as u32,
            end_y: (max_y.floor() + 1.0).min(visible) as u32,
            min_x: min_x.floor().max(0.0) as u32,
            max_x: (max_x.floor() + 1.0).min(width) as u32,
        };
        (!region.is_empty()).then_some(region)
    }

    /// Screen box covering `triangle` as seen from `camera`.
    ///
    /// Falls back to the full visible screen when a vertex is at or behind the
    /// camera, since the projected outline is unbounded then. `None` when the
    /// triangle projects entirely off screen.
    pub fn covering(triangle: &Triangle, camera: &Camera, settings: &RenderSettings) -> Option<Self> {
        let mut points = [(0.0, 0.0); 3];
        for (point, vertex) in points.iter_mut().zip(triangle.vertices()) {
            match camera.project(vertex, settings.width, settings.height) {
                Some(projected) => *point = projected,
                None => return Some(Self::full(settings)),
            }
        }
        Self::from_screen_bounds(&points, settings)
    }

    pub fn validate(&self, settings: &RenderSettings) -> RasterResult<()> {
        if self.start_y > self.end_y
            || self.end_y > settings.height
            || self.min_x > self.max_x
            || self.max_x > settings.width
        {
            return Err(RasterError::RegionOutOfBounds {
                start_y: self.start_y,
                end_y: self.end_y,
                min_x: self.min_x,
                max_x: self.max_x,
                width: settings.width,
                height: settings.height,
            });
        }
        Ok(())
    }
}
