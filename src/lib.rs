//! Chroma Arena - a bounded-arena particle simulation with color infection
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, infection)
//! - `config`: Validated initialization parameters
//! - `input`: Directional command mapping applied uniformly to the population
//! - `telemetry`: Per-color census of the population

pub mod config;
pub mod error;
pub mod input;
pub mod sim;
pub mod telemetry;

pub use config::ArenaConfig;
pub use error::{Error, Result};
pub use input::{Command, ControlMap};
pub use sim::{Color, Particle, SimState, TickInput, resolve_collision, tick};
pub use telemetry::{ColorCensus, census};

/// Default configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 890.0;
    pub const ARENA_HEIGHT: f64 = 800.0;

    /// Population defaults
    pub const PARTICLE_COUNT: usize = 500;
    pub const PARTICLE_RADIUS: f64 = 10.0;

    /// Speed magnitude range, uniform per particle at spawn
    pub const SPEED_MIN: f64 = 1.0;
    pub const SPEED_MAX: f64 = 4.0;

    /// How many particles are pre-colored to start the infection
    pub const SEED_COUNT: usize = 2;

    /// Per-particle cap on placement attempts before spawn gives up
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}
