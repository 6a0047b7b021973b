// tests/properties.rs

use approx::assert_relative_eq;
use rand::Rng;

use ray_raster::{
    compute_barycentric_weights, draw_triangle, draw_triangle_sequential, Camera, DrawCall, FrameBuffers,
    FrameStats, RasterRegion, RasterResult, RenderSettings, ScanPolicy, Texture, Triangle, TriangleGenerator,
    Vec3,
};

const WIDTH: u32 = 96;
const HEIGHT: u32 = 64;

type DrawFn = fn(&mut FrameBuffers, &DrawCall<'_>) -> RasterResult<FrameStats>;

fn eye() -> Camera {
    Camera::from_yaw(Vec3::new(0.0, 0.0, 0.5), 0.0, 0.66)
}

fn scene(seed: u64, count: usize) -> Vec<Triangle> {
    TriangleGenerator::seeded(seed).generate_scene(&eye(), count, 2.0, 12.0)
}

fn checker() -> Texture {
    Texture::checkerboard(16, 16, 4, 0xDD_DD_DD, 0x22_22_22).unwrap()
}

fn render<'t>(
    triangles: impl IntoIterator<Item = &'t Triangle>,
    settings: &RenderSettings,
    draw_fn: DrawFn,
) -> (FrameBuffers, FrameStats) {
    let camera = eye();
    let texture = checker();
    let mut buffers = FrameBuffers::new(settings.width, settings.height).unwrap();
    let mut total = FrameStats::default();

    for tri in triangles {
        let Some(region) = RasterRegion::covering(tri, &camera, settings) else {
            continue;
        };
        let draw = DrawCall::new(tri, &camera, settings, region).with_texture(&texture);
        total = total.merge(draw_fn(&mut buffers, &draw).unwrap());
    }
    (buffers, total)
}

fn settings() -> RenderSettings {
    RenderSettings::default().with_screen(WIDTH, HEIGHT)
}

#[test]
fn parallel_and_sequential_dispatch_agree() {
    let triangles = scene(11, 40);
    let (parallel, parallel_stats) = render(&triangles, &settings(), draw_triangle);
    let (sequential, sequential_stats) = render(&triangles, &settings(), draw_triangle_sequential);

    assert_eq!(parallel.screen, sequential.screen);
    assert_eq!(parallel.zbuf, sequential.zbuf);
    assert_eq!(parallel_stats, sequential_stats);
    assert!(parallel_stats.drawn > 0);
}

#[test]
fn depth_buffer_does_not_depend_on_draw_order() {
    let triangles = scene(5, 30);
    let (forward, _) = render(&triangles, &settings(), draw_triangle);
    let (backward, _) = render(triangles.iter().rev(), &settings(), draw_triangle);

    assert_eq!(forward.zbuf, backward.zbuf);
}

#[test]
fn depth_buffer_only_decreases() {
    let triangles = scene(23, 25);
    let camera = eye();
    let settings = settings();
    let mut buffers = FrameBuffers::new(WIDTH, HEIGHT).unwrap();

    for tri in &triangles {
        let Some(region) = RasterRegion::covering(tri, &camera, &settings) else {
            continue;
        };
        let before = buffers.zbuf.clone();
        draw_triangle(&mut buffers, &DrawCall::new(tri, &camera, &settings, region)).unwrap();

        for (old, new) in before.iter().zip(&buffers.zbuf) {
            assert!(new <= old);
            assert!(!new.is_nan());
        }
    }
}

#[test]
fn early_exit_produces_the_same_frame_as_full_scan() {
    let triangles = scene(99, 30);
    let (early, early_stats) = render(&triangles, &settings(), draw_triangle);
    let (full, full_stats) = render(
        &triangles,
        &settings().with_scan_policy(ScanPolicy::FullScan),
        draw_triangle,
    );

    assert_eq!(early.zbuf, full.zbuf);
    assert_eq!(early.screen, full.screen);
    assert!(early_stats.visited <= full_stats.visited);
    assert!(early_stats.rows_stopped_early > 0);
}

#[test]
fn written_pixels_have_finite_depth() {
    let triangles = scene(8, 20);
    let (buffers, stats) = render(&triangles, &settings(), draw_triangle);

    let finite = buffers.zbuf.iter().filter(|z| z.is_finite()).count();
    assert!(finite > 0);
    assert!(stats.drawn as usize >= finite);
    for (color, depth) in buffers.screen.iter().zip(&buffers.zbuf) {
        if depth.is_infinite() {
            assert_eq!(*color, 0);
        }
    }
}

#[test]
fn barycentric_weights_recover_mixing_coefficients() {
    let mut generator = TriangleGenerator::seeded(314);
    let camera = eye();

    for _ in 0..200 {
        let tri = generator.generate_facing_triangle(&camera, 2.0, 12.0);
        let rng = generator.rng();
        let a: f32 = rng.gen_range(0.05..0.9);
        let b: f32 = rng.gen_range(0.05..(0.95 - a).max(0.06));
        let c = 1.0 - a - b;
        if c < 0.05 {
            continue;
        }

        let point = tri.v0 * a + tri.v1 * b + tri.v2 * c;
        let weights = compute_barycentric_weights(point, tri.v0, &tri.basis).expect("interior point");
        assert_relative_eq!(weights.w0, a, epsilon = 1e-3);
        assert_relative_eq!(weights.w1, b, epsilon = 1e-3);
        assert_relative_eq!(weights.w2, c, epsilon = 1e-3);
        assert_relative_eq!(weights.sum(), 1.0, epsilon = 1e-4);
    }
}
