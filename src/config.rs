//! Simulation configuration.
//!
//! A [`SimConfig`] is plain data and can be built in code (see the two
//! presets) or loaded from JSON:
//!
//! ```json
//! {
//!   "arena": { "width": 800.0, "height": 600.0 },
//!   "motion": "fall",
//!   "resolve_collisions": false,
//!   "population_cap": 20,
//!   "seed": 42
//! }
//! ```
//!
//! Omitted fields take the defaults of [`SimConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::broadphase::Broadphase;
use crate::types::{Arena, Color, FLASH_FRAMES, MotionMode};

/// Errors raised when loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("arena must have positive finite size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
    #[error("flash_frames must be at least 1")]
    InvalidFlashFrames,
    #[error("grid cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub arena: Arena,
    pub motion: MotionMode,
    /// Run pairwise detection and resolution each step.
    pub resolve_collisions: bool,
    /// Keep spawning falling circles until this many are alive.
    pub population_cap: Option<usize>,
    pub broadphase: Broadphase,
    /// Highlight duration after a collision, in frames.
    pub flash_frames: u32,
    pub highlight: Color,
    /// Maximum contact events buffered between drains; extra are dropped.
    pub max_events: usize,
    /// Seed for spawn and respawn randomness.
    pub seed: u64,
    /// Enable internal timing instrumentation (adds small overhead when true).
    pub enable_timing: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: Arena::new(800.0, 600.0),
            motion: MotionMode::Bounce,
            resolve_collisions: true,
            population_cap: None,
            broadphase: Broadphase::AllPairs,
            flash_frames: FLASH_FRAMES,
            highlight: Color::WHITE,
            max_events: 1024,
            seed: 0x0C0A_F00D,
            enable_timing: false,
        }
    }
}

impl SimConfig {
    /// Falling circles: no collisions, respawn at the top, capped population.
    pub fn falling_circles(width: f32, height: f32) -> Self {
        Self {
            arena: Arena::new(width, height),
            motion: MotionMode::Fall,
            resolve_collisions: false,
            population_cap: Some(20),
            ..Self::default()
        }
    }

    /// Billiard table: wall bounce plus pairwise collisions, fixed population.
    pub fn billiard(width: f32, height: f32) -> Self {
        Self {
            arena: Arena::new(width, height),
            motion: MotionMode::Bounce,
            resolve_collisions: true,
            population_cap: None,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SimConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Arena { width, height } = self.arena;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }
        if self.flash_frames == 0 {
            return Err(ConfigError::InvalidFlashFrames);
        }
        if let Broadphase::Grid { cell_size } = self.broadphase {
            if !(cell_size.is_finite() && cell_size > 0.0) {
                return Err(ConfigError::InvalidCellSize(cell_size));
            }
        }
        Ok(())
    }
}
