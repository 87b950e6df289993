//! Per-tick simulation step
//!
//! One tick, in strict order: apply any directional override, integrate
//! every particle, then run the all-pairs collision sweep in ascending
//! index order. Later pairs in the sweep observe the mutations earlier
//! pairs made in the same tick; parallelizing the sweep would change that
//! and with it the observable infection spread.

use crate::input::Command;
use crate::sim::collision::resolve_collision;
use crate::sim::state::SimState;

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional command to apply uniformly to every particle this tick.
    pub steer: Option<Command>,
    /// Direction table used to translate `steer`.
    pub controls: crate::input::ControlMap,
}

/// Advance the simulation by one tick.
pub fn tick(state: &mut SimState, input: &TickInput) {
    if let Some(cmd) = input.steer {
        crate::input::apply_steer(&mut state.particles, input.controls.direction(cmd));
    }

    for particle in &mut state.particles {
        particle.integrate(state.bounds);
    }

    sweep_pairs(state);

    state.time_ticks += 1;
}

/// O(n^2) all-pairs sweep, pair (i, j) with i < j visited exactly once in
/// ascending order. `split_at_mut` hands out the two disjoint borrows.
fn sweep_pairs(state: &mut SimState) {
    let n = state.particles.len();
    for i in 0..n {
        let (head, tail) = state.particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_collision(a, b);
        }
    }
}
