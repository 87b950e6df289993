//! Simulation configuration
//!
//! Everything the host chooses at initialization time, validated up front so
//! the tick loop never has to handle a malformed arena.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::Color;

/// Initialization parameters for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Arena width in arena units.
    pub width: f64,
    /// Arena height in arena units.
    pub height: f64,
    /// Population size. Fixed for the simulation's lifetime.
    pub count: usize,
    /// Radius shared by every spawned particle.
    pub radius: f64,
    /// Lower bound of the per-particle speed magnitude (inclusive).
    pub speed_min: f64,
    /// Upper bound of the per-particle speed magnitude (exclusive).
    pub speed_max: f64,
    /// Carrier colors the infection seeds are drawn from.
    pub palette: Vec<Color>,
    /// How many particles are force-colored after spawn.
    pub seed_count: usize,
    /// Per-particle cap on rejection-sampling attempts.
    pub max_spawn_attempts: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            count: PARTICLE_COUNT,
            radius: PARTICLE_RADIUS,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            palette: vec![
                Color::Orange,
                Color::Blue,
                Color::Green,
                Color::Purple,
                Color::Red,
                Color::Yellow,
            ],
            seed_count: SEED_COUNT,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl ArenaConfig {
    /// Reject configurations that can never produce a valid simulation.
    ///
    /// Runs once at initialization; nothing here is re-checked mid-run.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(invalid("arena dimensions must be finite"));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid("radius must be finite and > 0"));
        }
        if self.width <= self.radius * 2.0 || self.height <= self.radius * 2.0 {
            return Err(invalid(
                "arena must be larger than one particle diameter per axis",
            ));
        }
        if self.count == 0 {
            return Err(invalid("population count must be > 0"));
        }
        if !self.speed_min.is_finite() || !self.speed_max.is_finite() {
            return Err(invalid("speed range must be finite"));
        }
        if self.speed_min <= 0.0 || self.speed_max <= self.speed_min {
            return Err(invalid("speed range must satisfy 0 < speed_min < speed_max"));
        }
        if self.seed_count > self.count {
            return Err(invalid("seed_count cannot exceed population count"));
        }
        if self.seed_count > 0 && self.palette.is_empty() {
            return Err(invalid("palette must be non-empty when seed_count > 0"));
        }
        if self.palette.contains(&Color::Neutral) {
            return Err(invalid("palette must contain carrier colors only"));
        }
        if self.max_spawn_attempts == 0 {
            return Err(invalid("max_spawn_attempts must be > 0"));
        }
        Ok(())
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfiguration(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        ArenaConfig::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_zero_radius() {
        let config = ArenaConfig {
            radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_zero_population() {
        let config = ArenaConfig {
            count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_arena_smaller_than_diameter() {
        let config = ArenaConfig {
            width: 20.0,
            radius: 10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let config = ArenaConfig {
            speed_min: 4.0,
            speed_max: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_dimensions() {
        let config = ArenaConfig {
            width: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_neutral_in_palette() {
        let config = ArenaConfig {
            palette: vec![Color::Red, Color::Neutral],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_seed_count_above_population() {
        let config = ArenaConfig {
            count: 3,
            seed_count: 4,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ArenaConfig::default();
        let json = config.to_json().unwrap();
        let parsed = ArenaConfig::from_json(&json).unwrap();
        assert_eq!(parsed.count, config.count);
        assert_eq!(parsed.palette, config.palette);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let json = r#"{
            "width": 890.0, "height": 800.0, "count": 0, "radius": 10.0,
            "speed_min": 1.0, "speed_max": 4.0,
            "palette": ["Red"], "seed_count": 0, "max_spawn_attempts": 100
        }"#;
        assert!(ArenaConfig::from_json(json).is_err());
    }
}
