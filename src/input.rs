//! Directional input mapping
//!
//! The host's input source (keyboard or otherwise) produces discrete
//! [`Command`]s; the [`ControlMap`] translates them into direction vectors.
//! The mapping is data rather than code: hosts disagree on which key maps
//! to which axis and sign, so nothing here hardcodes a convention beyond
//! the default table.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::sim::Particle;

/// A discrete directional command from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
}

/// Command-to-direction table.
///
/// Directions are raw multipliers for [`Particle::override_direction`]; the
/// default table uses magnitude 2 on the steered axis, WASD-style in
/// screen space (y grows downward, so `Up` is -y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlMap {
    pub up: DVec2,
    pub down: DVec2,
    pub left: DVec2,
    pub right: DVec2,
}

impl Default for ControlMap {
    fn default() -> Self {
        Self {
            up: DVec2::new(0.0, -2.0),
            down: DVec2::new(0.0, 2.0),
            left: DVec2::new(-2.0, 0.0),
            right: DVec2::new(2.0, 0.0),
        }
    }
}

impl ControlMap {
    pub fn direction(&self, command: Command) -> DVec2 {
        match command {
            Command::Up => self.up,
            Command::Down => self.down,
            Command::Left => self.left,
            Command::Right => self.right,
        }
    }
}

/// Apply a uniform direction override to the whole population.
pub fn apply_steer(particles: &mut [Particle], dir: DVec2) {
    for particle in particles {
        particle.override_direction(dir);
    }
}
