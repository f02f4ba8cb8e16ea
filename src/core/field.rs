use crate::constants::{
    LINK_ALPHA_MAX, LINK_DISTANCE, PARTICLE_COUNT, PARTICLE_MAX_SPEED, PARTICLE_RADIUS_MAX,
    PARTICLE_RADIUS_MIN, PHASE_STEP, PULSE_ALPHA_BASE, PULSE_ALPHA_SPAN,
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Drawing bounds of the field in CSS pixels. Doubles as the wrap boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half-open containment: `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// A drifting point. Velocity and radius are fixed for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub phase: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, phase: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            phase,
        }
    }

    /// Current fill opacity of the dot.
    #[inline]
    pub fn alpha(&self) -> f32 {
        pulse_alpha(self.phase)
    }

    fn advance(&mut self, bounds: Viewport, phase_step: f32) {
        self.pos += self.vel;
        // sin() is periodic, so folding the phase keeps f32 precision over long sessions
        self.phase = (self.phase + phase_step).rem_euclid(TAU);
        self.pos.x = wrap_axis(self.pos.x, bounds.width);
        self.pos.y = wrap_axis(self.pos.y, bounds.height);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub phase_step: f32,
    pub link_distance: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            max_speed: PARTICLE_MAX_SPEED,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            phase_step: PHASE_STEP,
            link_distance: LINK_DISTANCE,
        }
    }
}

/// Connection between two particles, indices ordered `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Drawing target for the field. The browser implements it on a Canvas2D
/// context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, bounds: Viewport);
    fn dot(&mut self, center: Vec2, radius: f32, alpha: f32);
    fn link(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Viewport,
    config: FieldConfig,
}

impl ParticleField {
    /// Scatter `config.count` particles uniformly inside `bounds`.
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, bounds: Viewport, rng: &mut R) -> Self {
        let speed = config.max_speed;
        let radius_span = config.radius_max - config.radius_min;
        let particles = (0..config.count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.gen::<f32>() * bounds.width,
                    rng.gen::<f32>() * bounds.height,
                );
                let vel = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                    (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                );
                let radius = config.radius_min + rng.gen::<f32>() * radius_span;
                let phase = rng.gen::<f32>() * TAU;
                Particle::new(pos, vel, radius, phase)
            })
            .collect();
        Self {
            particles,
            bounds,
            config,
        }
    }

    pub fn from_particles(bounds: Viewport, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            bounds,
            config: FieldConfig::default(),
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    /// New drawing bounds. Particles keep their positions; anything now out
    /// of range wraps on its next step.
    pub fn resize(&mut self, bounds: Viewport) {
        self.bounds = bounds;
    }

    /// Advance every particle by one frame without drawing.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        let phase_step = self.config.phase_step;
        for p in &mut self.particles {
            p.advance(bounds, phase_step);
        }
    }

    /// Every unordered pair closer than the link distance, each exactly once.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        let max_distance = self.config.link_distance;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let distance = ps[a].pos.distance(ps[b].pos);
                link_alpha(distance, max_distance).map(|alpha| Link {
                    a,
                    b,
                    distance,
                    alpha,
                })
            })
        })
    }

    /// One display frame: clear, move and draw every dot, then the links.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.bounds);
        let bounds = self.bounds;
        let phase_step = self.config.phase_step;
        for p in &mut self.particles {
            p.advance(bounds, phase_step);
            surface.dot(p.pos, p.radius, p.alpha());
        }
        for link in self.links() {
            surface.link(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                link.alpha,
            );
        }
    }
}

/// Fill opacity for a pulse phase; always within `BASE ± SPAN`.
#[inline]
pub fn pulse_alpha(phase: f32) -> f32 {
    PULSE_ALPHA_BASE + PULSE_ALPHA_SPAN * phase.sin()
}

/// Line opacity for a pair `distance` apart, `None` at or beyond `max_distance`.
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32) -> Option<f32> {
    (distance < max_distance).then(|| LINK_ALPHA_MAX * (1.0 - distance / max_distance))
}

/// Wrap one coordinate into `[0, extent)`. Leaving past the far edge snaps to
/// 0; leaving below 0 re-enters just inside the far edge.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 || v >= extent {
        return 0.0;
    }
    if v < 0.0 {
        let wrapped = v.rem_euclid(extent);
        // rem_euclid can round up to `extent` for tiny negatives
        return if wrapped < extent { wrapped } else { 0.0 };
    }
    v
}
