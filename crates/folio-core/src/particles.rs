//! Star/sun background simulation.
//!
//! A [`ParticleField`] is seeded for one [`ThemeMode`] and a [`Viewport`]:
//! 48 twinkling stars at night, 18 suns with rays by day. Each frame the
//! particles drift by their velocity and wrap around the viewport edges.
//! [`ParticleField::sprites`] turns the field into draw-ready shapes for a
//! given moment so renderers never touch the animation math.

use std::f64::consts::TAU;

use rand::Rng;

use crate::theme::ThemeMode;

/// Stars seeded in dark mode.
pub const STAR_COUNT: usize = 48;
/// Suns seeded in light mode.
pub const SUN_COUNT: usize = 18;
/// How far past an edge a particle drifts before it wraps.
pub const WRAP_MARGIN: f64 = 20.0;
/// Full parallax travel in pixels across the viewport.
pub const PARALLAX_STRENGTH: f64 = 30.0;
/// Rays drawn around each sun.
pub const SUN_RAYS: usize = 8;
/// How far the background layer extends past each window edge, so the
/// parallax shift never uncovers it.
pub const LAYER_BLEED: f64 = 20.0;

const MAX_SPEED: f64 = 0.08;

/// Drawing surface size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface with no area; nothing is drawn on it.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Which shape the particles draw as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Star,
    Sun,
}

impl From<ThemeMode> for ParticleKind {
    fn from(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            ParticleKind::Star
        } else {
            ParticleKind::Sun
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: &'static str,
    pub opacity: f64,
    /// Phase offset for twinkling and ray wobble.
    pub twinkle: f64,
}

impl Particle {
    fn seed<R: Rng + ?Sized>(kind: ParticleKind, viewport: Viewport, rng: &mut R) -> Self {
        let x = rng.random::<f64>() * viewport.width;
        let y = rng.random::<f64>() * viewport.height;
        let dx = rng.random_range(-MAX_SPEED..MAX_SPEED);
        let dy = rng.random_range(-MAX_SPEED..MAX_SPEED);
        let twinkle = rng.random::<f64>() * TAU;

        let (r, color, opacity) = match kind {
            ParticleKind::Star => (
                1.2 + rng.random::<f64>() * 1.8,
                if rng.random_bool(0.3) { "#ffe066" } else { "#ffffff" },
                0.7 + rng.random::<f64>() * 0.3,
            ),
            ParticleKind::Sun => (
                10.0 + rng.random::<f64>() * 10.0,
                if rng.random_bool(0.5) { "#FFD600" } else { "#FF9800" },
                0.18 + rng.random::<f64>() * 0.18,
            ),
        };

        Self {
            x,
            y,
            r,
            dx,
            dy,
            color,
            opacity,
            twinkle,
        }
    }

    fn advance(&mut self, viewport: Viewport) {
        self.x += self.dx;
        self.y += self.dy;
        self.x = wrap(self.x, viewport.width);
        self.y = wrap(self.y, viewport.height);
    }
}

fn wrap(pos: f64, extent: f64) -> f64 {
    if pos < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if pos > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        pos
    }
}

/// One sun ray, from the sun center to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub x2: f64,
    pub y2: f64,
}

/// A particle as it should be painted at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: &'static str,
    pub opacity: f64,
    /// Glow blur radius.
    pub glow: f64,
    /// Empty for stars.
    pub rays: Vec<Ray>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    kind: ParticleKind,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seeds a field for `mode`. An empty viewport yields an empty field.
    pub fn seed<R: Rng + ?Sized>(mode: ThemeMode, viewport: Viewport, rng: &mut R) -> Self {
        let kind = ParticleKind::from(mode);
        let count = if viewport.is_empty() {
            0
        } else {
            match kind {
                ParticleKind::Star => STAR_COUNT,
                ParticleKind::Sun => SUN_COUNT,
            }
        };
        let particles = (0..count)
            .map(|_| Particle::seed(kind, viewport, rng))
            .collect();

        Self {
            kind,
            viewport,
            particles,
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self) {
        let viewport = self.viewport;
        for p in &mut self.particles {
            p.advance(viewport);
        }
    }

    /// Changes the wrap bounds. Particles keep their positions.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Draw-ready shapes at `elapsed_ms` since the animation started.
    pub fn sprites(&self, elapsed_ms: f64) -> Vec<Sprite> {
        self.particles
            .iter()
            .map(|p| match self.kind {
                ParticleKind::Star => {
                    let twinkle = 0.7 + 0.3 * (elapsed_ms / 600.0 + p.twinkle).sin();
                    Sprite {
                        x: p.x,
                        y: p.y,
                        radius: p.r * twinkle,
                        color: p.color,
                        opacity: p.opacity * twinkle,
                        glow: 8.0 * twinkle,
                        rays: Vec::new(),
                    }
                }
                ParticleKind::Sun => {
                    let rays = (0..SUN_RAYS)
                        .map(|i| {
                            let angle = i as f64 / SUN_RAYS as f64 * TAU;
                            let wobble = (elapsed_ms / 800.0 + p.twinkle + i as f64).sin() * 2.0;
                            let len = p.r + 10.0 + wobble;
                            // (0, len) rotated by `angle`
                            Ray {
                                x2: p.x - len * angle.sin(),
                                y2: p.y + len * angle.cos(),
                            }
                        })
                        .collect();
                    Sprite {
                        x: p.x,
                        y: p.y,
                        radius: p.r,
                        color: p.color,
                        opacity: p.opacity,
                        glow: 32.0,
                        rays,
                    }
                }
            })
            .collect()
    }
}

/// Size of the background layer for a window of size `window`.
pub fn layer_viewport(window: Viewport) -> Viewport {
    if window.is_empty() {
        return window;
    }
    Viewport::new(window.width + 2.0 * LAYER_BLEED, window.height + 2.0 * LAYER_BLEED)
}

/// Maps a pointer position to the background offset in pixels.
///
/// `viewport` is the window the pointer coordinates are measured in, not
/// the larger background layer. The center of the window maps to no offset; the corners map to
/// `±PARALLAX_STRENGTH / 2` against the pointer direction.
pub fn parallax_offset(viewport: Viewport, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
    if viewport.is_empty() {
        return (0.0, 0.0);
    }
    let x = pointer_x / viewport.width - 0.5;
    let y = pointer_y / viewport.height - 0.5;
    (-x * PARALLAX_STRENGTH, -y * PARALLAX_STRENGTH)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_seed_counts_follow_mode() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = ParticleField::seed(ThemeMode::Dark, viewport(), &mut rng);
        let suns = ParticleField::seed(ThemeMode::Light, viewport(), &mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        assert_eq!(stars.kind(), ParticleKind::Star);
        assert_eq!(suns.len(), SUN_COUNT);
        assert_eq!(suns.kind(), ParticleKind::Sun);
    }

    #[test]
    fn test_seeded_attributes_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let stars = ParticleField::seed(ThemeMode::Dark, viewport(), &mut rng);
        for p in stars.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((1.2..3.0).contains(&p.r));
            assert!((0.7..=1.0).contains(&p.opacity));
            assert!(p.dx.abs() <= MAX_SPEED && p.dy.abs() <= MAX_SPEED);
            assert!(p.color == "#ffe066" || p.color == "#ffffff");
        }

        let suns = ParticleField::seed(ThemeMode::Light, viewport(), &mut rng);
        for p in suns.particles() {
            assert!((10.0..20.0).contains(&p.r));
            assert!((0.18..=0.36).contains(&p.opacity));
            assert!(p.color == "#FFD600" || p.color == "#FF9800");
        }
    }

    #[test]
    fn test_empty_viewport_seeds_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::seed(ThemeMode::Dark, Viewport::new(0.0, 600.0), &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn test_wrap_to_opposite_edge() {
        assert_eq!(wrap(-20.5, 800.0), 820.0);
        assert_eq!(wrap(820.5, 800.0), -20.0);
        assert_eq!(wrap(-20.0, 800.0), -20.0);
        assert_eq!(wrap(400.0, 800.0), 400.0);
    }

    #[test]
    fn test_step_keeps_particles_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::seed(ThemeMode::Light, viewport(), &mut rng);
        for _ in 0..50_000 {
            field.step();
        }
        for p in field.particles() {
            assert!((-WRAP_MARGIN..=800.0 + WRAP_MARGIN).contains(&p.x));
            assert!((-WRAP_MARGIN..=600.0 + WRAP_MARGIN).contains(&p.y));
        }
    }

    #[test]
    fn test_step_moves_by_velocity() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::seed(ThemeMode::Dark, viewport(), &mut rng);
        let before = field.particles()[0].clone();
        field.step();
        let after = &field.particles()[0];
        assert!((after.x - (before.x + before.dx)).abs() < 1e-9);
        assert!((after.y - (before.y + before.dy)).abs() < 1e-9);
    }

    #[test]
    fn test_sun_sprites_have_rays() {
        let mut rng = StdRng::seed_from_u64(5);
        let field = ParticleField::seed(ThemeMode::Light, viewport(), &mut rng);
        let sprites = field.sprites(1234.0);
        assert_eq!(sprites.len(), SUN_COUNT);
        for (sprite, p) in sprites.iter().zip(field.particles()) {
            assert_eq!(sprite.rays.len(), SUN_RAYS);
            for ray in &sprite.rays {
                let len = ((ray.x2 - p.x).powi(2) + (ray.y2 - p.y).powi(2)).sqrt();
                assert!(len >= p.r + 8.0 - 1e-9 && len <= p.r + 12.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_star_twinkle_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = ParticleField::seed(ThemeMode::Dark, viewport(), &mut rng);
        for t in [0.0, 300.0, 900.0, 5000.0] {
            for (sprite, p) in field.sprites(t).iter().zip(field.particles()) {
                assert!(sprite.rays.is_empty());
                assert!(sprite.radius >= p.r * 0.4 - 1e-9 && sprite.radius <= p.r + 1e-9);
            }
        }
    }

    #[test]
    fn test_layer_bleeds_past_window_by_more_than_parallax() {
        let window = viewport();
        let layer = layer_viewport(window);
        assert_eq!(layer, Viewport::new(840.0, 640.0));

        // Measured against the window, the center is still at rest even
        // though the layer is larger.
        assert_eq!(parallax_offset(window, 400.0, 300.0), (0.0, 0.0));
        assert_ne!(parallax_offset(layer, 400.0, 300.0), (0.0, 0.0));

        let (max_x, max_y) = parallax_offset(window, 0.0, 0.0);
        assert!(max_x <= LAYER_BLEED && max_y <= LAYER_BLEED);
        assert!(layer_viewport(Viewport::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_parallax_offset() {
        let vp = viewport();
        assert_eq!(parallax_offset(vp, 400.0, 300.0), (0.0, 0.0));
        assert_eq!(parallax_offset(vp, 0.0, 0.0), (15.0, 15.0));
        assert_eq!(parallax_offset(vp, 800.0, 600.0), (-15.0, -15.0));
        assert_eq!(parallax_offset(Viewport::new(0.0, 0.0), 10.0, 10.0), (0.0, 0.0));
    }
}
