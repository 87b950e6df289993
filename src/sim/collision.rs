//! Pairwise collision detection and resolution
//!
//! The response is deliberately simple, not real impulse physics: the
//! overlap correction is split evenly and the velocities are swapped in
//! full, which reads as elastic for equal-radius, equal-speed particles.
//! Everything lives behind [`resolve_collision`] so a mass-aware impulse
//! response could be substituted without touching the sweep in `tick`.

use std::mem;

use crate::sim::state::{Color, Particle};

/// Narrow-phase test: centers closer than the sum of radii.
#[inline]
pub fn particles_overlap(a: &Particle, b: &Particle) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Resolve one particle pair in place. Returns whether they collided.
///
/// On contact, in order:
/// 1. Separate: push each particle `overlap / 2` apart along the
///    center-to-center angle. The split is even regardless of radius.
/// 2. Swap velocities in full, both axes.
/// 3. Infect: a `Neutral` particle takes the other's color when exactly one
///    side is a carrier. Two carriers never recolor each other; two
///    `Neutral` particles stay `Neutral`.
///
/// The exact-center-overlap case (`dist == 0`) is well-defined:
/// `atan2(0, 0) == 0`, so separation pushes along the x axis. No division
/// by the distance occurs anywhere.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) -> bool {
    let d = b.pos - a.pos;
    let dist = d.length();

    if dist >= a.radius + b.radius {
        return false;
    }

    let angle = d.y.atan2(d.x);
    let overlap = (a.radius + b.radius) - dist;
    let push = glam::DVec2::new(angle.cos(), angle.sin()) * (overlap / 2.0);

    a.pos -= push;
    b.pos += push;

    mem::swap(&mut a.vel, &mut b.vel);

    infect(a, b);
    true
}

/// One-way color transfer: the Neutral side takes the carrier side's color.
/// Both-Neutral and both-carrier pairs are left untouched.
fn infect(a: &mut Particle, b: &mut Particle) {
    if a.color == Color::Neutral && b.color != Color::Neutral {
        a.color = b.color;
    } else if b.color == Color::Neutral && a.color != Color::Neutral {
        b.color = a.color;
    }
}
