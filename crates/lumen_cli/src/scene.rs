//! The built-in scene.

use lumen_renderer::{Color, HittableList, Lambertian, Metal, Sphere, Vec3};

/// Two diffuse and two mirror spheres resting on a large diffuse ground sphere.
pub fn demo_scene() -> HittableList {
    let mut world = HittableList::new();

    // Center
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Lambertian::new(Color::new(0.8, 0.3, 0.3)),
    )));

    // Ground
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    )));

    // Right and left mirrors
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
