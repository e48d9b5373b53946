//! Core ray tracing renderer.
//!
//! Implements:
//! - Recursive ray tracing with a fixed bounce cap
//! - Sky gradient background
//! - Anti-aliasing via multi-sampling
//! - Gamma correction
//! - Row-partitioned rendering, one worker thread per row band

use crate::rows::{partition_rows, render_rows, CHANNELS};
use crate::sampler::{gen_f32, PixelSampler, SeededSampler};
use crate::{Camera, Color, Hittable, Ray, RenderError};
use crossbeam::thread;
use log::{debug, info};
use lumen_math::Interval;
use rand::RngCore;
use std::time::Instant;

/// Smallest accepted hit distance, keeps scattered rays off their own surface.
pub const T_MIN: f32 = 0.001;

/// Default bounce cap for `ray_color`.
pub const MAX_DEPTH: u32 = 50;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Number of worker threads
    pub threads: u32,
    /// Base seed for the per-pixel generators
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            samples_per_pixel: 200,
            max_depth: MAX_DEPTH,
            threads: 1,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Check that the configuration describes a renderable image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::NoSamples);
        }
        if self.threads == 0 {
            return Err(RenderError::NoThreads);
        }
        Ok(())
    }
}

/// Everything a worker needs to render its rows, borrowed read-only.
pub struct RenderContext<'a, S> {
    pub camera: &'a Camera,
    pub world: &'a dyn Hittable,
    pub config: &'a RenderConfig,
    pub sampler: &'a S,
}

/// Compute the color seen by a ray.
///
/// Scattering recurses with `depth + 1` until the material absorbs the ray
/// or `depth` reaches `max_depth`, either of which yields black. Rays that
/// escape the scene pick up the sky gradient.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) if depth < max_depth => {
            result.attenuation * ray_color(&result.scattered, world, depth + 1, max_depth, rng)
        }
        _ => Color::ZERO,
    }
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.99 * Interval::UNIT.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// Returns the average linear color of `config.samples_per_pixel` jittered
/// samples. Row 0 is the bottom of the image.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    row: u32,
    col: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (col as f32 + gen_f32(rng)) / config.width as f32;
        let v = (row as f32 + gen_f32(rng)) / config.height as f32;
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, 0, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Row-major 8-bit RGB image, row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All channel values, three per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the pixel at (row, col).
    pub fn pixel(&self, row: u32, col: u32) -> [u8; 3] {
        let start = (row as usize * self.width as usize + col as usize) * CHANNELS;
        [self.data[start], self.data[start + 1], self.data[start + 2]]
    }

    /// Channel values of one row, left to right.
    pub fn row(&self, row: u32) -> &[u8] {
        let len = self.width as usize * CHANNELS;
        let start = row as usize * len;
        &self.data[start..start + len]
    }
}

/// Render the scene using per-pixel generators seeded from `config.seed`.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Result<PixelBuffer, RenderError> {
    render_with(camera, world, config, &SeededSampler::new(config.seed))
}

/// Render the scene on `config.threads` worker threads.
///
/// Rows are partitioned up front and each worker gets the matching disjoint
/// slice of the buffer. Returns once every worker has finished.
pub fn render_with<S: PixelSampler>(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    sampler: &S,
) -> Result<PixelBuffer, RenderError> {
    config.validate()?;

    let mut image = PixelBuffer::new(config.width, config.height);
    let spans = partition_rows(config.height, config.threads);
    let ctx = RenderContext {
        camera,
        world,
        config,
        sampler,
    };
    let ctx = &ctx;

    info!(
        "Rendering {}x{} @ {} spp on {} threads...",
        config.width, config.height, config.samples_per_pixel, config.threads
    );
    let start = Instant::now();

    // One OS thread per span; all are joined before the scope returns
    let spawned = thread::scope(|s| -> Result<(), RenderError> {
        let mut rest: &mut [u8] = &mut image.data;
        for (worker, span) in spans.into_iter().enumerate() {
            let (slice, tail) =
                std::mem::take(&mut rest).split_at_mut(span.channel_len(config.width));
            rest = tail;
            debug!("Worker {worker} takes rows {}..{}", span.start, span.end());
            s.builder()
                .name(format!("lumen-worker-{worker}"))
                .spawn(move |_| render_rows(span, slice, ctx))?;
        }
        Ok(())
    });
    spawned.map_err(|_| RenderError::WorkerPanicked)??;

    info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
