//! Initial population placement and infection seeding
//!
//! Rejection sampling keeps spawned particles from overlapping; the retry
//! loop is bounded so an over-dense arena fails with an error instead of
//! spinning forever.

use glam::DVec2;
use rand::Rng;

use crate::config::ArenaConfig;
use crate::error::{Error, Result};
use crate::sim::state::{Color, Particle};

/// Spawn `config.count` non-overlapping particles.
///
/// Positions are uniform in `[radius, bound - radius)` per axis. A candidate
/// is rejected when its center lies within `2 * radius` of any placed
/// particle; the test assumes the uniform radius all spawned particles
/// share. Velocity axes are independently `+speed` or `-speed` with equal
/// probability, with `speed` uniform in `[speed_min, speed_max)`.
///
/// Errors with [`Error::SpawnExhausted`] when a single particle cannot be
/// placed within `config.max_spawn_attempts` tries.
pub fn spawn_population<R: Rng>(config: &ArenaConfig, rng: &mut R) -> Result<Vec<Particle>> {
    let mut particles = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let particle = place_one(config, &particles, rng)?;
        particles.push(particle);
    }
    Ok(particles)
}

fn place_one<R: Rng>(
    config: &ArenaConfig,
    placed: &[Particle],
    rng: &mut R,
) -> Result<Particle> {
    let radius = config.radius;
    let min_dist = radius * 2.0;

    for _ in 0..config.max_spawn_attempts {
        let pos = DVec2::new(
            rng.random_range(radius..config.width - radius),
            rng.random_range(radius..config.height - radius),
        );

        if placed.iter().any(|p| p.pos.distance(pos) < min_dist) {
            continue;
        }

        let speed = rng.random_range(config.speed_min..config.speed_max);
        let vel = DVec2::new(
            if rng.random_bool(0.5) { speed } else { -speed },
            if rng.random_bool(0.5) { speed } else { -speed },
        );
        return Ok(Particle::new(pos, vel, radius, speed));
    }

    Err(Error::SpawnExhausted {
        attempts: config.max_spawn_attempts,
    })
}

/// Force-color `seed_count` particles so the infection has somewhere to
/// start; without this no particle ever leaves `Neutral`.
///
/// The first index is uniform over the whole population, the second over its
/// lower half, and so on, each successive draw halving the range. Draws may
/// land on the same particle, in which case fewer distinct carriers result.
pub fn seed_colors<R: Rng>(
    particles: &mut [Particle],
    palette: &[Color],
    seed_count: usize,
    rng: &mut R,
) {
    if particles.is_empty() || palette.is_empty() {
        return;
    }
    let mut range = particles.len();
    for _ in 0..seed_count {
        if range == 0 {
            break;
        }
        let idx = rng.random_range(0..range);
        let color = palette[rng.random_range(0..palette.len())];
        particles[idx].color = color;
        range /= 2;
    }
}
