//! Simulation state and core entity types
//!
//! Everything needed to reproduce a run lives here: the population, the
//! arena bounds, and the seed the spawn RNG is reconstructed from.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::error::Result;
use crate::sim::spawn;

/// Particle color state.
///
/// `Neutral` is the initial, non-infectious state; every other variant is a
/// carrier. `White` appears in one legacy palette and is kept for
/// compatibility, but the default palette does not include it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Neutral,
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Yellow,
    White,
}

impl Color {
    /// All carrier (non-Neutral) variants, census display order.
    pub const CARRIERS: [Color; 7] = [
        Color::Orange,
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Red,
        Color::Yellow,
        Color::White,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Neutral => "neutral",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    /// Whether this color can infect a Neutral particle on contact.
    #[inline]
    pub fn is_carrier(&self) -> bool {
        *self != Color::Neutral
    }
}

/// A circular particle bouncing inside the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Center position, arena-local coordinates.
    pub pos: DVec2,
    /// Per-axis velocity components; each axis reflects independently.
    pub vel: DVec2,
    /// Circle radius. Constant after creation.
    pub radius: f64,
    /// Scalar speed magnitude fixed at spawn. Only read by
    /// [`Particle::override_direction`].
    pub speed: f64,
    /// Infection state. Starts `Neutral`.
    pub color: Color,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, speed: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
            color: Color::Neutral,
        }
    }

    /// Advance one tick and reflect off the arena walls.
    ///
    /// Position is not clamped: a fast particle may overshoot a wall by up
    /// to |vel| for one tick before the flipped velocity carries it back.
    /// Reflection checks each axis independently and flips the sign at most
    /// once per axis per tick.
    pub fn integrate(&mut self, bounds: DVec2) {
        self.pos += self.vel;

        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= bounds.y {
            self.vel.y = -self.vel.y;
        }
    }

    /// Replace the velocity with `dir * speed`, both axes, unconditionally.
    ///
    /// `dir` comes from the control map and is not normalized; a mapping of
    /// (2, 0) doubles the particle's horizontal speed.
    pub fn override_direction(&mut self, dir: DVec2) {
        self.vel = dir * self.speed;
    }
}

/// Complete simulation state.
///
/// The population vector is the single mutable resource; every step function
/// takes it by reference from here rather than through any global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility.
    pub seed: u64,
    /// Arena dimensions (width, height).
    pub bounds: DVec2,
    /// The fixed population. No additions or removals after spawn.
    pub particles: Vec<Particle>,
    /// Simulation tick counter.
    pub time_ticks: u64,
}

impl SimState {
    /// Validate the config, spawn the population, and seed the infection.
    pub fn new(config: &ArenaConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut particles = spawn::spawn_population(config, &mut rng)?;
        spawn::seed_colors(&mut particles, &config.palette, config.seed_count, &mut rng);

        Ok(Self {
            seed,
            bounds: DVec2::new(config.width, config.height),
            particles,
            time_ticks: 0,
        })
    }

    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut p = Particle::new(DVec2::new(100.0, 100.0), DVec2::new(3.0, -2.0), 10.0, 3.0);
        p.integrate(DVec2::new(890.0, 800.0));
        assert_eq!(p.pos, DVec2::new(103.0, 98.0));
        assert_eq!(p.vel, DVec2::new(3.0, -2.0));
    }

    #[test]
    fn test_integrate_reflects_each_axis_once() {
        // Touching the left wall and the top wall in the same tick.
        let mut p = Particle::new(DVec2::new(11.0, 11.0), DVec2::new(-2.0, -2.0), 10.0, 2.0);
        p.integrate(DVec2::new(890.0, 800.0));
        // Position overshoots; only the velocity flips.
        assert_eq!(p.pos, DVec2::new(9.0, 9.0));
        assert_eq!(p.vel, DVec2::new(2.0, 2.0));

        // Next tick moves back inward without flipping again.
        p.integrate(DVec2::new(890.0, 800.0));
        assert_eq!(p.pos, DVec2::new(11.0, 11.0));
        assert_eq!(p.vel, DVec2::new(2.0, 2.0));
    }

    #[test]
    fn test_integrate_reflects_right_and_bottom_walls() {
        let mut p = Particle::new(DVec2::new(879.5, 790.5), DVec2::new(1.0, 1.0), 10.0, 1.0);
        p.integrate(DVec2::new(890.0, 800.0));
        assert_eq!(p.vel, DVec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_override_direction_replaces_both_axes() {
        let mut p = Particle::new(DVec2::new(50.0, 50.0), DVec2::new(3.0, -3.0), 10.0, 3.0);
        p.override_direction(DVec2::new(0.0, -2.0));
        assert_eq!(p.vel, DVec2::new(0.0, -6.0));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Reflection flips a violated axis exactly once per tick: after
            // one integrate, any axis outside the wall band points back in.
            #[test]
            fn prop_reflection_points_back_inward(
                x in 10.0..880.0f64,
                y in 10.0..790.0f64,
                vx in -8.0..8.0f64,
                vy in -8.0..8.0f64,
            ) {
                let bounds = DVec2::new(890.0, 800.0);
                let mut p = Particle::new(
                    DVec2::new(x, y),
                    DVec2::new(vx, vy),
                    10.0,
                    vx.abs().max(vy.abs()),
                );
                p.integrate(bounds);

                if p.pos.x - p.radius <= 0.0 {
                    prop_assert!(p.vel.x >= 0.0);
                }
                if p.pos.x + p.radius >= bounds.x {
                    prop_assert!(p.vel.x <= 0.0);
                }
                if p.pos.y - p.radius <= 0.0 {
                    prop_assert!(p.vel.y >= 0.0);
                }
                if p.pos.y + p.radius >= bounds.y {
                    prop_assert!(p.vel.y <= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_new_particle_is_neutral() {
        let p = Particle::new(DVec2::ZERO, DVec2::ZERO, 1.0, 1.0);
        assert_eq!(p.color, Color::Neutral);
        assert!(!p.color.is_carrier());
        assert!(Color::Red.is_carrier());
    }
}
