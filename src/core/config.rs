//! # Rain Configuration
//!
//! Tunables for the falling-object pool: how many objects exist, where they
//! spawn, how fast they fall and spin, and where they leave the view.
//!
//! Values can be supplied as a RON or TOML file. Every field is optional in
//! the file; anything left out keeps its default from `core::constants`.

use std::path::Path;

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::rain::*;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but break a constraint
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Half-open sampling range `[min, max)`.
///
/// A degenerate range (`min == max`) always yields `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: f32,
    pub max: f32,
}

impl SpawnRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw one uniform sample from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }

    /// True when `value` could have come out of `sample`
    pub fn contains(&self, value: f32) -> bool {
        if self.max <= self.min {
            return value == self.min;
        }
        value >= self.min && value < self.max
    }

    fn check(&self, name: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::Invalid(format!("{name} must be finite")));
        }
        if self.min > self.max {
            return Err(ConfigError::Invalid(format!(
                "{name}: min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        // gen_range needs the width itself to fit in an f32
        if !(self.max - self.min).is_finite() {
            return Err(ConfigError::Invalid(format!(
                "{name}: range from {} to {} is too wide",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Where new objects appear
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnBounds {
    /// Shared by the x and z axes
    pub horizontal: SpawnRange,
    /// Start height, above the visible area
    pub vertical: SpawnRange,
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self {
            horizontal: SpawnRange::new(SPAWN_HORIZONTAL_MIN, SPAWN_HORIZONTAL_MAX),
            vertical: SpawnRange::new(SPAWN_VERTICAL_MIN, SPAWN_VERTICAL_MAX),
        }
    }
}

/// Resource holding every tunable of the rain
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Number of objects kept alive at all times
    pub population_size: usize,
    pub spawn_bounds: SpawnBounds,
    /// Descent speed in units per second; must stay strictly positive
    pub speed_range: SpawnRange,
    /// Per-axis spin in radians per second
    pub rotation_range: SpawnRange,
    /// Objects whose height drops below this are replaced
    pub exit_threshold: f32,
    /// Uniform scale applied to every instance
    pub model_scale: f32,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            population_size: POPULATION_SIZE,
            spawn_bounds: SpawnBounds::default(),
            speed_range: SpawnRange::new(SPEED_MIN, SPEED_MAX),
            rotation_range: SpawnRange::new(ROTATION_RATE_MIN, ROTATION_RATE_MAX),
            exit_threshold: EXIT_THRESHOLD,
            model_scale: MODEL_SCALE,
            seed: None,
        }
    }
}

impl RainConfig {
    /// Check the constraints the pool relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size > MAX_POPULATION_SIZE {
            return Err(ConfigError::Invalid(format!(
                "population_size {} exceeds the limit of {}",
                self.population_size, MAX_POPULATION_SIZE
            )));
        }
        self.spawn_bounds.horizontal.check("spawn_bounds.horizontal")?;
        self.spawn_bounds.vertical.check("spawn_bounds.vertical")?;
        self.speed_range.check("speed_range")?;
        self.rotation_range.check("rotation_range")?;

        if self.speed_range.min <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "speed_range.min must be positive, got {}",
                self.speed_range.min
            )));
        }
        if self.rotation_range.min < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rotation_range.min must not be negative, got {}",
                self.rotation_range.min
            )));
        }
        if !self.exit_threshold.is_finite() {
            return Err(ConfigError::Invalid("exit_threshold must be finite".into()));
        }
        if !(self.model_scale.is_finite() && self.model_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "model_scale must be positive, got {}",
                self.model_scale
            )));
        }
        Ok(())
    }

    /// Parse a config from text in the format implied by `path`'s extension
    pub fn parse(path: &str, contents: &str) -> Result<Self, ConfigError> {
        let config: Self = if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a `.ron` or `.toml` file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(path, &contents)
    }

    /// Resolve the config the app should run with.
    ///
    /// Looks at `BURGER_RAIN_CONFIG` first, then `config/rain.ron`.
    pub fn load_or_default() -> Self {
        Self::resolve(std::env::var(CONFIG_ENV_VAR).ok(), DEFAULT_CONFIG_PATH)
    }

    /// Load from `override_path` if given, else from `default_path` when it exists.
    ///
    /// A missing default file is normal; a broken or missing override is
    /// reported and ignored.
    pub fn resolve(override_path: Option<String>, default_path: &str) -> Self {
        let path = match override_path {
            Some(path) => path,
            None if Path::new(default_path).exists() => default_path.to_string(),
            None => {
                info!("No rain config at {}, using defaults", default_path);
                return Self::default();
            }
        };

        match Self::load_from_file(&path) {
            Ok(config) => {
                info!("Loaded rain config from {}", path);
                config
            }
            Err(e) => {
                warn!("Ignoring rain config {}: {}", path, e);
                Self::default()
            }
        }
    }
}
