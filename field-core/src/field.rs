use crate::{config::FieldConfig, particle::Particle, pointer::PointerState};
use glam::Vec2;
use rand::Rng;

/// The particle batch together with the surface size it lives in.
#[derive(Debug, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    size: Vec2,
}

impl ParticleField {
    /// Builds a freshly seeded field for a surface of `size`.
    pub fn seeded(size: Vec2, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let mut field = Self::default();
        field.reseed(size, cfg, rng);
        field
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Discards the current batch and seeds a new one for `size`.
    ///
    /// The particle count is picked from `size.x` via
    /// [`FieldConfig::particle_count_for`]. The old vector is replaced, not
    /// edited in place.
    pub fn reseed(&mut self, size: Vec2, cfg: &FieldConfig, rng: &mut impl Rng) {
        let count = cfg.particle_count_for(size.x);
        self.particles = (0..count)
            .map(|_| Particle::random_in(size, cfg, rng))
            .collect();
        self.size = size;
        log::debug!(
            "reseeded {} particles for {}x{} surface",
            count,
            size.x,
            size.y
        );
    }

    /// Runs one update step on every particle.
    pub fn step(&mut self, cfg: &FieldConfig, pointer: &PointerState) {
        let size = self.size;
        for p in &mut self.particles {
            p.update(cfg, pointer, size);
        }
    }

    /// Iterates over every unordered pair `(i, j)` with `i < j` closer than
    /// `max_dist`, yielding the pair and its distance.
    pub fn pairs_within(&self, max_dist: f32) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            ((i + 1)..ps.len()).filter_map(move |j| {
                let d = ps[i].pos.distance(ps[j].pos);
                (d < max_dist).then_some((i, j, d))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn reseed_replaces_population_with_narrow_count() {
        let cfg = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let mut field = ParticleField::seeded(Vec2::new(1280.0, 720.0), &cfg, &mut rng);
        assert_eq!(field.particles.len(), 50);

        let narrow = Vec2::new(400.0, 300.0);
        field.reseed(narrow, &cfg, &mut rng);

        assert_eq!(field.particles.len(), 25);
        assert_eq!(field.size(), narrow);
        for p in &field.particles {
            assert!(p.pos.x < narrow.x && p.pos.y < narrow.y);
        }
    }

    #[test]
    fn step_keeps_everything_in_bounds() {
        let cfg = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let size = Vec2::new(200.0, 120.0);
        let mut field = ParticleField::seeded(size, &cfg, &mut rng);
        let mut pointer = PointerState::default();
        pointer.move_to(Vec2::new(100.0, 60.0));

        for _ in 0..2_000 {
            field.step(&cfg, &pointer);
            for p in &field.particles {
                assert!(p.pos.x >= 0.0 && p.pos.x <= size.x);
                assert!(p.pos.y >= 0.0 && p.pos.y <= size.y);
            }
        }
    }

    #[test]
    fn pairs_within_is_strict_and_unordered() {
        let mut field = ParticleField::default();
        field.particles = vec![
            Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0),
            Particle::new(Vec2::new(100.0, 0.0), Vec2::ZERO, 1.0),
            Particle::new(Vec2::new(250.0, 0.0), Vec2::ZERO, 1.0),
        ];

        let pairs: Vec<_> = field.pairs_within(150.0).collect();

        // (0,2) is 250 apart; (1,2) is exactly 150 and must be excluded.
        assert_eq!(pairs, vec![(0, 1, 100.0)]);
    }
}
