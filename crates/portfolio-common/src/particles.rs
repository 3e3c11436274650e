/// Decorative particle fields.
///
/// `DriftField` is the hero's flat field of dots that wander between two
/// random viewport points. `FloatingField` is the project section's cloud of
/// small polyhedra, simulated in 3D and drawn through a perspective camera.
/// Both take an explicit RNG so layouts are reproducible in tests.
use rand::Rng;

use crate::viewport::Viewport;

pub const HERO_PARTICLE_COUNT: usize = 20;
pub const FIELD_PARTICLE_COUNT: usize = 50;

/// One hero dot. Positions are fractions of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftParticle {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Seconds per loop.
    pub duration: f64,
}

impl DriftParticle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            from: (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)),
            to: (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)),
            duration: rng.random_range(10.0..20.0),
        }
    }

    /// Custom properties for the stylesheet's drift keyframes.
    pub fn css_vars(&self) -> String {
        format!(
            "--x0:{:.1}%;--y0:{:.1}%;--x1:{:.1}%;--y1:{:.1}%;--dur:{:.1}s",
            self.from.0 * 100.0,
            self.from.1 * 100.0,
            self.to.0 * 100.0,
            self.to.1 * 100.0,
            self.duration
        )
    }
}

#[derive(Debug, Clone)]
pub struct DriftField {
    pub particles: Vec<DriftParticle>,
}

impl DriftField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| DriftParticle::random(rng)).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(self, other: Vec3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polyhedron {
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl Polyhedron {
    pub fn for_index(i: usize) -> Self {
        match i % 3 {
            0 => Polyhedron::Octahedron,
            1 => Polyhedron::Dodecahedron,
            _ => Polyhedron::Icosahedron,
        }
    }

    /// Sides of the outline used when drawing the silhouette.
    pub fn outline_sides(self) -> usize {
        match self {
            Polyhedron::Octahedron => 4,
            Polyhedron::Dodecahedron => 5,
            Polyhedron::Icosahedron => 6,
        }
    }
}

const BASE_SCALE: f64 = 0.1;
const HOVER_SCALE: f64 = 0.2;
const SCALE_LERP: f64 = 0.1;
const SPIN_PER_FRAME: f64 = 0.001;
const BOB_AMPLITUDE: f64 = 0.002;
const CURSOR_SPREAD: f64 = 5.0;
const ATTRACT_RADIUS: f64 = 2.0;
const ATTRACT_RATE: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingParticle {
    pub kind: Polyhedron,
    pub position: Vec3,
    pub rotation: (f64, f64),
    pub scale: f64,
    /// Base hue in degrees.
    pub hue: f64,
    /// Hue of the emissive glow.
    pub glow_hue: f64,
}

impl FloatingParticle {
    pub fn color(&self) -> String {
        format!("hsl({:.0}, 70%, 60%)", self.hue)
    }

    pub fn glow(&self) -> String {
        format!("hsl({:.0}, 70%, 30%)", self.glow_hue)
    }
}

/// Camera looking down -z from `(0, 0, CAMERA_Z)`.
pub const CAMERA_Z: f64 = 8.0;
pub const CAMERA_FOV_DEG: f64 = 75.0;
const FOG_NEAR: f64 = 5.0;
const FOG_FAR: f64 = 15.0;
const NEAR_CLIP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub depth: f64,
}

impl Projected {
    /// Opacity after linear fog between depths 5 and 15.
    pub fn opacity(&self) -> f64 {
        let fog = ((self.depth - FOG_NEAR) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0);
        0.8 * (1.0 - fog)
    }
}

#[derive(Debug, Clone)]
pub struct FloatingField {
    pub particles: Vec<FloatingParticle>,
}

impl FloatingField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|i| FloatingParticle {
                kind: Polyhedron::for_index(i),
                position: Vec3::new(
                    rng.random_range(-5.0..5.0),
                    rng.random_range(-5.0..5.0),
                    rng.random_range(-5.0..5.0),
                ),
                rotation: (0.0, 0.0),
                scale: BASE_SCALE,
                hue: rng.random_range(180.0..270.0),
                glow_hue: rng.random_range(180.0..270.0),
            })
            .collect();
        Self { particles }
    }

    /// One animation frame. `elapsed` is seconds since the field started,
    /// `cursor_ndc` the cursor in normalized device coordinates.
    pub fn step(&mut self, elapsed: f64, cursor_ndc: Option<(f64, f64)>, hovered: Option<usize>) {
        let attractor =
            cursor_ndc.map(|(x, y)| Vec3::new(x * CURSOR_SPREAD, y * CURSOR_SPREAD, 0.0));

        for (i, p) in self.particles.iter_mut().enumerate() {
            p.position.y += (elapsed + i as f64).sin() * BOB_AMPLITUDE;

            if let Some(target) = attractor {
                if p.position.distance(target) < ATTRACT_RADIUS {
                    p.position.x += (target.x - p.position.x) * ATTRACT_RATE;
                    p.position.y += (target.y - p.position.y) * ATTRACT_RATE;
                }
            }

            p.rotation.0 += SPIN_PER_FRAME;
            p.rotation.1 += SPIN_PER_FRAME;

            let goal = if hovered == Some(i) { HOVER_SCALE } else { BASE_SCALE };
            p.scale += (goal - p.scale) * SCALE_LERP;
        }
    }

    pub fn project(&self, index: usize, viewport: Viewport) -> Option<Projected> {
        let p = self.particles.get(index)?;
        project_point(p.position, p.scale, viewport)
    }

    /// Index of the nearest particle whose silhouette covers the screen point.
    pub fn hit_test(&self, x: f64, y: f64, viewport: Viewport) -> Option<usize> {
        (0..self.particles.len())
            .filter_map(|i| self.project(i, viewport).map(|p| (i, p)))
            .filter(|(_, p)| ((p.x - x).powi(2) + (p.y - y).powi(2)).sqrt() <= p.radius)
            .min_by(|a, b| a.1.depth.total_cmp(&b.1.depth))
            .map(|(i, _)| i)
    }
}

/// Rotation of the backing gradient plane at `elapsed` seconds.
pub fn gradient_rotation(elapsed: f64) -> f64 {
    elapsed * 0.1
}

fn project_point(point: Vec3, size: f64, viewport: Viewport) -> Option<Projected> {
    if viewport.is_empty() {
        return None;
    }
    let depth = CAMERA_Z - point.z;
    if depth < NEAR_CLIP {
        return None;
    }
    let focal = 1.0 / (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
    let ndc_x = point.x * focal / viewport.aspect() / depth;
    let ndc_y = point.y * focal / depth;
    Some(Projected {
        x: (ndc_x + 1.0) / 2.0 * viewport.width,
        y: (1.0 - ndc_y) / 2.0 * viewport.height,
        radius: size * focal / depth * viewport.height / 2.0,
        depth,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn drift_particles_stay_in_bounds() {
        let field = DriftField::generate(HERO_PARTICLE_COUNT, &mut rng());
        assert_eq!(field.particles.len(), 20);
        for p in &field.particles {
            assert!((10.0..20.0).contains(&p.duration));
            for v in [p.from.0, p.from.1, p.to.0, p.to.1] {
                assert!((0.0..1.0).contains(&v));
            }
        }
    }

    #[test]
    fn drift_css_vars() {
        let p = DriftParticle {
            from: (0.125, 0.5),
            to: (0.75, 0.0),
            duration: 12.34,
        };
        assert_eq!(p.css_vars(), "--x0:12.5%;--y0:50.0%;--x1:75.0%;--y1:0.0%;--dur:12.3s");
    }

    #[test]
    fn field_kinds_cycle_and_hues_are_blue() {
        let field = FloatingField::generate(FIELD_PARTICLE_COUNT, &mut rng());
        assert_eq!(field.particles.len(), 50);
        assert_eq!(field.particles[0].kind, Polyhedron::Octahedron);
        assert_eq!(field.particles[1].kind, Polyhedron::Dodecahedron);
        assert_eq!(field.particles[2].kind, Polyhedron::Icosahedron);
        assert_eq!(field.particles[3].kind, Polyhedron::Octahedron);
        for p in &field.particles {
            assert!((180.0..270.0).contains(&p.hue));
            assert!(p.position.x.abs() <= 5.0);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = FloatingField::generate(10, &mut rng());
        let b = FloatingField::generate(10, &mut rng());
        assert_eq!(a.particles, b.particles);
    }

    fn single(position: Vec3) -> FloatingField {
        FloatingField {
            particles: vec![FloatingParticle {
                kind: Polyhedron::Octahedron,
                position,
                rotation: (0.0, 0.0),
                scale: BASE_SCALE,
                hue: 200.0,
                glow_hue: 200.0,
            }],
        }
    }

    #[test]
    fn cursor_pulls_nearby_particle() {
        let mut field = single(Vec3::new(1.0, 0.0, 0.0));
        // ndc (0.3, 0) puts the attractor at (1.5, 0, 0)
        field.step(0.0, Some((0.3, 0.0)), None);
        let x = field.particles[0].position.x;
        assert!((x - (1.0 + (1.5 - 1.0) * 0.02)).abs() < 1e-9, "x = {x}");
    }

    #[test]
    fn cursor_ignores_distant_particle() {
        let mut field = single(Vec3::new(-4.0, 0.0, 0.0));
        field.step(0.0, Some((0.9, 0.0)), None);
        assert_eq!(field.particles[0].position.x, -4.0);
    }

    #[test]
    fn hovered_particle_grows_others_shrink() {
        let mut field = single(Vec3::default());
        field.step(0.0, None, Some(0));
        assert!((field.particles[0].scale - 0.11).abs() < 1e-9);
        field.step(0.0, None, None);
        assert!(field.particles[0].scale < 0.11);
        assert!((field.particles[0].rotation.0 - 0.002).abs() < 1e-12);
    }

    #[test]
    fn origin_projects_to_center() {
        let field = single(Vec3::default());
        let vp = Viewport::new(800.0, 600.0);
        let p = field.project(0, vp).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
        assert_eq!(p.depth, 8.0);
        assert!(p.opacity() > 0.0 && p.opacity() < 0.8);
        assert_eq!(field.hit_test(400.0, 300.0, vp), Some(0));
        assert_eq!(field.hit_test(0.0, 0.0, vp), None);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let field = single(Vec3::new(0.0, 0.0, 9.0));
        assert!(field.project(0, Viewport::new(800.0, 600.0)).is_none());
    }
}
