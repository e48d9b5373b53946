//! End-to-end rendering through the threaded row renderer.

use lumen_renderer::{
    render, render_with, write_ppm, Camera, Color, HitRecord, Hittable, HittableList, Interval,
    Lambertian, Metal, PixelSampler, Ray, RenderConfig, RenderError, Sphere, Vec3,
};
use rand::RngCore;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic stand-in for the random source: a plain LCG per pixel.
struct LcgRng(u64);

impl RngCore for LcgRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

struct LcgSampler {
    width: u32,
}

impl PixelSampler for LcgSampler {
    type Rng = LcgRng;

    fn pixel_rng(&self, row: u32, col: u32) -> LcgRng {
        LcgRng(row as u64 * self.width as u64 + col as u64)
    }
}

/// Wraps a scene and counts hit queries.
struct CountingWorld {
    inner: HittableList,
    queries: AtomicUsize,
}

impl Hittable for CountingWorld {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.inner.hit(ray, ray_t)
    }
}

fn four_sphere_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Lambertian::new(Color::new(0.8, 0.3, 0.3)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.8, 0.8)),
    )));
    world
}

fn small_config(threads: u32) -> RenderConfig {
    RenderConfig {
        width: 24,
        height: 18,
        samples_per_pixel: 4,
        max_depth: 10,
        threads,
        seed: 1234,
    }
}

#[test]
fn empty_scene_looking_down_is_pure_sky() {
    let world = CountingWorld {
        inner: HittableList::new(),
        queries: AtomicUsize::new(0),
    };
    let camera = Camera::look_at(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), Vec3::Z, 10.0, 1.0);
    let config = RenderConfig {
        width: 8,
        height: 6,
        samples_per_pixel: 3,
        max_depth: 50,
        threads: 2,
        seed: 7,
    };

    let image = render(&camera, &world, &config).expect("render should succeed");

    // Looking straight down the gradient is white
    for row in 0..config.height {
        for col in 0..config.width {
            assert_eq!(image.pixel(row, col), [255, 255, 255], "pixel ({row}, {col})");
        }
    }

    // One query per sample: nothing was hit, so nothing recursed
    let expected = (config.width * config.height * config.samples_per_pixel) as usize;
    assert_eq!(world.queries.load(Ordering::Relaxed), expected);
}

#[test]
fn thread_count_does_not_change_the_image() {
    let world = four_sphere_scene();
    let camera = Camera::new();
    let sampler = LcgSampler { width: 24 };

    let single = render_with(&camera, &world, &small_config(1), &sampler).unwrap();
    let quad = render_with(&camera, &world, &small_config(4), &sampler).unwrap();
    // 18 rows over 5 threads leaves a remainder for the last worker
    let uneven = render_with(&camera, &world, &small_config(5), &sampler).unwrap();

    assert_eq!(single.data(), quad.data());
    assert_eq!(single.data(), uneven.data());
}

#[test]
fn seeded_render_is_reproducible_across_thread_counts() {
    let world = four_sphere_scene();
    let camera = Camera::new();

    let single = render(&camera, &world, &small_config(1)).unwrap();
    let quad = render(&camera, &world, &small_config(4)).unwrap();
    assert_eq!(single, quad);
}

#[test]
fn more_threads_than_rows() {
    let world = four_sphere_scene();
    let camera = Camera::new();
    let config = RenderConfig {
        height: 3,
        threads: 8,
        ..small_config(1)
    };
    let reference = RenderConfig {
        threads: 1,
        ..config.clone()
    };

    let image = render(&camera, &world, &config).unwrap();
    assert_eq!(image, render(&camera, &world, &reference).unwrap());
    assert_eq!(image.data().len(), 24 * 3 * 3);
}

#[test]
fn every_pixel_is_written() {
    // The sky is never black and the red sphere's shading is never fully
    // black at four samples, so an all-zero pixel means a slot was skipped
    let world = four_sphere_scene();
    let camera = Camera::new();

    let config = RenderConfig {
        max_depth: 50,
        ..small_config(3)
    };

    let image = render(&camera, &world, &config).unwrap();
    for row in 0..image.height() {
        for col in 0..image.width() {
            assert_ne!(image.pixel(row, col), [0, 0, 0], "pixel ({row}, {col})");
        }
    }
}

#[test]
fn invalid_config_is_rejected() {
    let world = HittableList::new();
    let camera = Camera::new();

    let no_threads = RenderConfig {
        threads: 0,
        ..small_config(1)
    };
    assert!(matches!(
        render(&camera, &world, &no_threads),
        Err(RenderError::NoThreads)
    ));

    let no_rows = RenderConfig {
        height: 0,
        ..small_config(1)
    };
    assert!(matches!(
        render(&camera, &world, &no_rows),
        Err(RenderError::InvalidDimensions { height: 0, .. })
    ));
}

#[test]
fn ppm_starts_with_the_top_row() {
    // Empty scene: the top of the default frame looks up into blue sky,
    // the bottom looks down toward white
    let world = HittableList::new();
    let camera = Camera::new();
    let config = RenderConfig {
        width: 4,
        height: 4,
        samples_per_pixel: 2,
        ..small_config(2)
    };
    let image = render(&camera, &world, &config).unwrap();

    let mut out = Vec::new();
    write_ppm(&mut out, &image).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(&lines[..3], &["P3", "4 4", "255"]);
    assert_eq!(lines.len(), 3 + 16);

    let red = |line: &str| -> u32 { line.split(' ').next().unwrap().parse().unwrap() };
    let top = image.pixel(3, 0);
    let bottom = image.pixel(0, 0);
    assert_eq!(lines[3], format!("{} {} {}", top[0], top[1], top[2]));
    assert_eq!(lines[lines.len() - 4], format!("{} {} {}", bottom[0], bottom[1], bottom[2]));
    assert!(red(lines[3]) < red(lines[lines.len() - 1]));
}
