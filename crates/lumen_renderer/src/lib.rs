//! Lumen renderer - CPU ray tracing of sphere scenes.
//!
//! Traces rays through every pixel against a flat list of spheres,
//! scatters them off diffuse and mirror materials, and fills an 8-bit
//! RGB buffer from one worker thread per band of rows, each owning a
//! contiguous slice of the buffer.

mod camera;
mod error;
mod hittable;
mod material;
mod ppm;
mod renderer;
mod rows;
mod sampler;
mod sphere;

pub use camera::Camera;
pub use error::RenderError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{
    random_in_unit_sphere, reflect, Color, Lambertian, Material, Metal, ScatterResult,
};
pub use ppm::write_ppm;
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, render_with, sky_gradient,
    PixelBuffer, RenderConfig, RenderContext, MAX_DEPTH, T_MIN,
};
pub use rows::{partition_rows, render_rows, RowSpan, CHANNELS};
pub use sampler::{gen_f32, PixelSampler, SeededSampler};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
