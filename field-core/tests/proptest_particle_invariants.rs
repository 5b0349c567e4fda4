//! Property-based invariant tests for the particle update step.
//!
//! 1. Bounds — after any update every coordinate lies in `[0, size]`.
//! 2. Reflection — a particle leaving through an edge has that velocity
//!    component flipped and ends on the edge.
//! 3. Damping convergence — with no pointer and no wall contact the velocity
//!    gap to baseline shrinks by `(1 - damping)` each frame.
//! 4. Pointer monotonicity — closer particles are pushed strictly harder.

use field_core::{config::FieldConfig, particle::Particle, pointer::PointerState};
use glam::Vec2;
use proptest::prelude::*;

fn size_strategy() -> impl Strategy<Value = Vec2> {
    (1.0f32..2000.0, 1.0f32..1200.0).prop_map(|(w, h)| Vec2::new(w, h))
}

proptest! {
    #[test]
    fn update_keeps_particle_in_bounds(
        size in size_strategy(),
        fx in 0.0f32..=1.0,
        fy in 0.0f32..=1.0,
        vx in -20.0f32..20.0,
        vy in -20.0f32..20.0,
        pointer in proptest::option::of((0.0f32..2000.0, 0.0f32..1200.0)),
    ) {
        let cfg = FieldConfig::default();
        let mut p = Particle::new(Vec2::new(fx * size.x, fy * size.y), Vec2::new(vx, vy), 2.0);
        let mut ps = PointerState::default();
        if let Some((x, y)) = pointer {
            ps.move_to(Vec2::new(x, y));
        }

        for _ in 0..8 {
            p.update(&cfg, &ps, size);
            prop_assert!(p.pos.x >= 0.0 && p.pos.x <= size.x);
            prop_assert!(p.pos.y >= 0.0 && p.pos.y <= size.y);
        }
    }

    #[test]
    fn crossing_left_edge_flips_x_velocity(
        size in size_strategy(),
        x in 0.0f32..1.0,
        speed in 1.5f32..10.0,
    ) {
        let cfg = FieldConfig { damping_factor: 0.0, ..FieldConfig::default() };
        let mut p = Particle::new(Vec2::new(x, size.y * 0.5), Vec2::new(-speed, 0.0), 1.0);

        p.update(&cfg, &PointerState::default(), size);

        prop_assert_eq!(p.vel.x, speed);
        prop_assert_eq!(p.pos.x, 0.0);
    }

    #[test]
    fn damping_converges_geometrically(
        bx in -0.15f32..0.15,
        by in -0.15f32..0.15,
        kick_x in -2.0f32..2.0,
        kick_y in -2.0f32..2.0,
        frames in 1usize..40,
    ) {
        let cfg = FieldConfig::default();
        // Large surface, centred start: no wall contact within 40 frames.
        let size = Vec2::new(10_000.0, 10_000.0);
        let mut p = Particle::new(size * 0.5, Vec2::new(bx, by), 1.0);
        p.vel += Vec2::new(kick_x, kick_y);
        let gap0 = (p.vel - p.base_vel).length();

        for _ in 0..frames {
            p.update(&cfg, &PointerState::default(), size);
        }

        let expected = gap0 * (1.0 - cfg.damping_factor).powi(frames as i32);
        let gap = (p.vel - p.base_vel).length();
        prop_assert!((gap - expected).abs() <= 1e-4 + expected * 1e-4);
    }

    #[test]
    fn closer_particles_get_stronger_push(
        angle in 0.0f32..std::f32::consts::TAU,
        d1 in 1.0f32..148.0,
        delta in 0.5f32..100.0,
    ) {
        let cfg = FieldConfig::default();
        let d2 = (d1 + delta).min(149.5);
        prop_assume!(d1 < d2);

        let origin = Vec2::new(500.0, 500.0);
        let dir = Vec2::from_angle(angle);
        let near = Particle::new(origin + dir * d1, Vec2::ZERO, 1.0);
        let far = Particle::new(origin + dir * d2, Vec2::ZERO, 1.0);
        let mut ps = PointerState::default();
        ps.move_to(origin);

        prop_assert!(near.repulsion(&ps, &cfg).length() > far.repulsion(&ps, &cfg).length());
    }
}
