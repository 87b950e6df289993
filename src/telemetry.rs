//! Per-color population census
//!
//! An O(n) pass over the population, computed on demand; no persistent
//! counters to drift out of sync with the particles.

use std::collections::HashMap;
use std::fmt;

use crate::sim::{Color, Particle};

/// Snapshot of how many particles carry each color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCensus {
    counts: HashMap<Color, usize>,
    total: usize,
}

impl ColorCensus {
    pub fn count(&self, color: Color) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Particles still in the Neutral state.
    pub fn neutral(&self) -> usize {
        self.count(Color::Neutral)
    }

    /// Total population covered by this census.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether every particle has been infected.
    pub fn fully_infected(&self) -> bool {
        self.neutral() == 0
    }
}

impl fmt::Display for ColorCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "neutral={}", self.neutral())?;
        for color in Color::CARRIERS {
            let n = self.count(color);
            if n > 0 {
                write!(f, " {}={}", color.as_str(), n)?;
            }
        }
        Ok(())
    }
}

/// Tally the population by color.
pub fn census(particles: &[Particle]) -> ColorCensus {
    let mut counts = HashMap::new();
    for p in particles {
        *counts.entry(p.color).or_insert(0) += 1;
    }
    ColorCensus {
        counts,
        total: particles.len(),
    }
}
