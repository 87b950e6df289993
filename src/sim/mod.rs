//! Deterministic simulation module
//!
//! All engine logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no sub-stepping
//! - Seeded RNG only (spawn-time randomness, none during ticking)
//! - Stable pair iteration order (ascending index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{particles_overlap, resolve_collision};
pub use spawn::{seed_colors, spawn_population};
pub use state::{Color, Particle, SimState};
pub use tick::{TickInput, tick};
