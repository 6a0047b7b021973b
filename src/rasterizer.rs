// src/rasterizer.rs

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::barycentric::{compute_barycentric_weights, Weights};
use crate::camera::Camera;
use crate::error::{RasterError, RasterResult};
use crate::framebuffer::FrameBuffers;
use crate::intersection::intersect_ray_with_triangle_plane;
use crate::params::{RasterRegion, RenderSettings, ScanPolicy};
use crate::ray::reconstruct_ray_point;
use crate::shading::{darken, shade};
use crate::texture::Texture;
use crate::triangle::Triangle;

/// Everything one triangle draw reads. Nothing here is mutated while rows run.
#[derive(Clone, Copy, Debug)]
pub struct DrawCall<'a> {
    pub triangle: &'a Triangle,
    pub texture: Option<&'a Texture>,
    pub camera: &'a Camera,
    pub settings: &'a RenderSettings,
    pub region: RasterRegion,
}

impl<'a> DrawCall<'a> {
    pub fn new(
        triangle: &'a Triangle,
        camera: &'a Camera,
        settings: &'a RenderSettings,
        region: RasterRegion,
    ) -> Self {
        Self {
            triangle,
            texture: None,
            camera,
            settings,
            region,
        }
    }

    pub fn with_texture(mut self, texture: &'a Texture) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Per-row counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowStats {
    /// Columns examined before the row finished.
    pub visited: u32,
    /// Columns whose ray landed inside the triangle.
    pub hits: u32,
    /// Hits that won the depth test and were written.
    pub drawn: u32,
    pub stopped_early: bool,
}

/// Counters summed over every row of a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub rows: u32,
    pub visited: u64,
    pub hits: u64,
    pub drawn: u64,
    pub rows_stopped_early: u32,
}

impl FrameStats {
    pub fn with_row(mut self, row: RowStats) -> Self {
        self.rows += 1;
        self.visited += u64::from(row.visited);
        self.hits += u64::from(row.hits);
        self.drawn += u64::from(row.drawn);
        self.rows_stopped_early += u32::from(row.stopped_early);
        self
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            rows: self.rows + other.rows,
            visited: self.visited + other.visited,
            hits: self.hits + other.hits,
            drawn: self.drawn + other.drawn,
            rows_stopped_early: self.rows_stopped_early + other.rows_stopped_early,
        }
    }
}

/// Casts the pixel's ray and returns the in-triangle weights and ray distance.
#[inline]
fn trace_pixel(draw: &DrawCall<'_>, x: u32, y: u32) -> Option<(Weights, f32)> {
    let tri = draw.triangle;
    let cam = draw.camera;

    let ray_point = reconstruct_ray_point(
        x,
        y,
        draw.settings.width,
        draw.settings.height,
        cam.dir,
        cam.plane,
        cam.pos,
    );
    let hit = intersect_ray_with_triangle_plane(cam.pos, ray_point, tri.v0, tri.v1, tri.v2)?;
    let weights = compute_barycentric_weights(hit, tri.v0, &tri.basis)?;

    Some((weights, hit.distance(cam.pos)))
}

/// Final color of a depth-winning hit: texel or flat color, flat darken, then
/// depth shading.
#[inline]
fn resolve_color(draw: &DrawCall<'_>, weights: Weights, distance: f32) -> u32 {
    let tri = draw.triangle;
    let settings = draw.settings;
    let mut color = tri.color;

    if settings.textures_enabled {
        if let (Some([uv0, uv1, uv2]), Some(texture)) = (tri.uvs, draw.texture) {
            let uv = uv0 * weights.w0 + uv1 * weights.w1 + uv2 * weights.w2;
            if let Some(texel) = texture.sample(uv) {
                color = texel;
            }
        }
    }

    let color = darken(color, tri.darken_by as f32);
    shade(
        settings.shade_type,
        settings.fog_distance,
        settings.shade_threshold,
        distance,
        color,
    )
}

/// Sweeps one screen row of the draw region left to right.
///
/// `invocation` selects row `region.start_y + invocation`; `screen_row` and
/// `zbuf_row` are that row's full-width slices. A pixel is written only when its
/// ray distance is strictly below the stored depth. Under
/// [`ScanPolicy::StopAfterSpan`] the sweep ends at the first geometric miss that
/// follows an in-triangle pixel, whether or not that pixel won its depth test.
pub fn rasterize_row(
    draw: &DrawCall<'_>,
    invocation: u32,
    screen_row: &mut [u32],
    zbuf_row: &mut [f32],
) -> RowStats {
    let y = draw.region.start_y + invocation;
    let max_x = draw.region.max_x.min(screen_row.len().min(zbuf_row.len()) as u32);
    let stop_after_span = draw.settings.scan_policy == ScanPolicy::StopAfterSpan;

    let mut stats = RowStats::default();
    let mut entered = false;

    for x in draw.region.min_x..max_x {
        stats.visited += 1;

        let Some((weights, distance)) = trace_pixel(draw, x, y) else {
            if entered && stop_after_span {
                stats.stopped_early = true;
                break;
            }
            continue;
        };

        entered = true;
        stats.hits += 1;

        let cell = x as usize;
        if distance < zbuf_row[cell] {
            zbuf_row[cell] = distance;
            screen_row[cell] = resolve_color(draw, weights, distance);
            stats.drawn += 1;
        }
    }

    stats
}

fn validate_draw(buffers: &FrameBuffers, draw: &DrawCall<'_>) -> RasterResult<()> {
    let settings = draw.settings;
    settings.validate()?;
    if buffers.width() != settings.width || buffers.height() != settings.height {
        return Err(RasterError::BufferSizeMismatch {
            width: settings.width,
            height: settings.height,
            expected: settings.width as usize * settings.height as usize,
            actual: buffers.screen.len(),
        });
    }
    draw.region.validate(settings)
}

/// Runs one row invocation per region row, in parallel across rows.
///
/// Rows write disjoint slices so no locking is involved. Draws that share
/// buffers must be issued one after another: the depth test reads whatever the
/// previous draw committed.
pub fn draw_triangle(buffers: &mut FrameBuffers, draw: &DrawCall<'_>) -> RasterResult<FrameStats> {
    if let Err(err) = validate_draw(buffers, draw) {
        warn!("rejecting triangle draw: {err}");
        return Err(err);
    }

    let region = draw.region;
    let start = region.start_y as usize;
    let rows = region.rows() as usize;

    let stats = buffers
        .par_rows_mut()
        .skip(start)
        .take(rows)
        .map(|(y, (screen_row, zbuf_row))| {
            rasterize_row(draw, (y - start) as u32, screen_row, zbuf_row)
        })
        .fold(FrameStats::default, FrameStats::with_row)
        .reduce(FrameStats::default, FrameStats::merge);

    log_draw(&region, &stats);
    Ok(stats)
}

/// Single-threaded [`draw_triangle`]; produces identical buffers.
pub fn draw_triangle_sequential(
    buffers: &mut FrameBuffers,
    draw: &DrawCall<'_>,
) -> RasterResult<FrameStats> {
    if let Err(err) = validate_draw(buffers, draw) {
        warn!("rejecting triangle draw: {err}");
        return Err(err);
    }

    let region = draw.region;
    let start = region.start_y as usize;
    let stats = buffers
        .rows_mut()
        .skip(start)
        .take(region.rows() as usize)
        .map(|(y, screen_row, zbuf_row)| rasterize_row(draw, (y - start) as u32, screen_row, zbuf_row))
        .fold(FrameStats::default(), FrameStats::with_row);

    log_draw(&region, &stats);
    Ok(stats)
}

fn log_draw(region: &RasterRegion, stats: &FrameStats) {
    debug!(
        "drew rows {}..{} cols {}..{}: {} hits, {} written",
        region.start_y, region.end_y, region.min_x, region.max_x, stats.hits, stats.drawn
    );
    trace!(
        "{} of {} rows stopped early, {} columns visited",
        stats.rows_stopped_early,
        stats.rows,
        stats.visited
    );
}
