use crate::{config::FieldConfig, pointer::PointerState};
use glam::Vec2;
use rand::Rng;

/// A drifting point of the network.
///
/// `base_vel` is fixed at creation: pointer pushes are added to `vel` and
/// then damped back toward it frame by frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base_vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Creates a particle whose velocity is also its baseline velocity.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            base_vel: vel,
            radius,
        }
    }

    /// Spawns a particle uniformly inside `[0, size.x) × [0, size.y)`.
    ///
    /// Each velocity component is `(u - 0.5) * cfg.base_speed` for an
    /// independent uniform `u`, and the radius is uniform in `[1, 3)`.
    ///
    /// ### Parameters
    /// - `size` - Surface size in pixels.
    /// - `cfg` - Field configuration providing `base_speed`.
    /// - `rng` - Random source.
    pub fn random_in(size: Vec2, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y);
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * cfg.base_speed,
            (rng.random::<f32>() - 0.5) * cfg.base_speed,
        );
        let radius = rng.random_range(1.0..3.0);
        Self::new(pos, vel, radius)
    }

    /// Velocity delta pushed onto this particle by the pointer this frame.
    ///
    /// Zero when the pointer is absent, outside the influence radius, or
    /// exactly on top of the particle (no direction to push in).
    pub fn repulsion(&self, pointer: &PointerState, cfg: &FieldConfig) -> Vec2 {
        let Some(p) = pointer.position() else {
            return Vec2::ZERO;
        };
        let radius = cfg.pointer_influence_radius;
        let away = self.pos - p;
        let dist = away.length();
        if dist >= radius {
            return Vec2::ZERO;
        }
        let falloff = (radius - dist) / radius;
        away.normalize_or_zero() * falloff * cfg.pointer_force_scale
    }

    /// Advances the particle by one frame.
    ///
    /// 1. Adds pointer repulsion (see [`Particle::repulsion`]).
    /// 2. Relaxes velocity toward `base_vel` by `cfg.damping_factor`.
    /// 3. Integrates position with an implicit timestep of one frame.
    /// 4. Reflects each axis whose new coordinate left `[0, size]`, then
    ///    clamps the position back inside.
    pub fn update(&mut self, cfg: &FieldConfig, pointer: &PointerState, size: Vec2) {
        self.vel += self.repulsion(pointer, cfg);
        self.vel += (self.base_vel - self.vel) * cfg.damping_factor;
        self.pos += self.vel;

        if self.pos.x < 0.0 || self.pos.x > size.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > size.y {
            self.vel.y = -self.vel.y;
        }
        self.pos = self.pos.clamp(Vec2::ZERO, size.max(Vec2::ZERO));
    }
}
