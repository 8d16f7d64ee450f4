//! # Configuration
//!
//! Compile-time defaults and the runtime [`SessionConfig`].
//!
//! Every field of the runtime configuration has a default, so a JSON file only
//! needs to name the values it changes:
//!
//! ```
//! use delve::SessionConfig;
//!
//! let config = SessionConfig::from_json_str(r#"{ "enemy_count": 9 }"#).unwrap();
//! assert_eq!(config.enemy_count, 9);
//! assert_eq!(config.enemy.perception_radius, 100.0);
//! ```

use crate::{DelveError, DelveResult, GenerationConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default dungeon width in tiles
pub const DEFAULT_DUNGEON_WIDTH: u32 = 100;

/// Default dungeon height in tiles
pub const DEFAULT_DUNGEON_HEIGHT: u32 = 60;

/// Side length of one tile in world units
pub const TILE_SIZE: f32 = 16.0;

/// Rooms carved per dungeon
pub const DEFAULT_ROOM_COUNT: u32 = 10;

/// Enemies spawned per session
pub const DEFAULT_ENEMY_COUNT: usize = 5;

/// Frames per second the headless host simulates at
pub const TARGET_FPS: u64 = 60;

/// Player-side tuning that does not depend on the chosen class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Side of the square footprint in world units
    pub size: f32,
    /// Movement speed in world units per second
    pub speed: f32,
    /// How long the last attack box stays visible to the host
    pub attack_flash_seconds: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: 12.0,
            speed: 150.0,
            attack_flash_seconds: 0.15,
        }
    }
}

/// Enemy stats and behavior constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Side of the square footprint in world units
    pub size: f32,
    /// Starting health
    pub health: i32,
    /// Movement speed in world units per second (chase and patrol)
    pub speed: f32,
    /// Distance within which the enemy chases the player
    pub perception_radius: f32,
    /// Distance within which the enemy can hit the player
    pub attack_range: f32,
    /// Seconds between enemy hits
    pub attack_cooldown: f32,
    /// Damage one enemy hit deals to the player
    pub contact_damage: i32,
    /// Probability that a spawned enemy patrols instead of waiting
    pub patrol_chance: f64,
    /// Lower bound (inclusive) of the patrol direction timer
    pub patrol_timer_min: f32,
    /// Upper bound (exclusive) of the patrol direction timer
    pub patrol_timer_max: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: 12.0,
            health: 3,
            speed: 40.0,
            perception_radius: 100.0,
            attack_range: 16.0,
            attack_cooldown: 1.0,
            contact_damage: 1,
            patrol_chance: 0.7,
            patrol_timer_min: 2.0,
            patrol_timer_max: 5.0,
        }
    }
}

impl EnemyTuning {
    /// Distance at which a chasing enemy stops closing in on the player.
    pub fn min_approach_distance(&self, player_size: f32) -> f32 {
        (self.size + player_size) / 2.0 + 2.0
    }
}

/// Runtime configuration for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Dungeon generation parameters, including the session seed
    pub generation: GenerationConfig,
    /// Number of enemies spawned at session start
    pub enemy_count: usize,
    /// Player tuning
    pub player: PlayerTuning,
    /// Enemy tuning
    pub enemy: EnemyTuning,
    /// Side of the square portal in world units
    pub portal_size: f32,
    /// Seconds between the player dying and the session finishing
    pub death_delay_seconds: f32,
    /// Seconds between entering the portal and the session finishing
    pub portal_delay_seconds: f32,
    /// Chebyshev radius, in tiles, the host reveals around the player
    pub explore_radius: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            enemy_count: DEFAULT_ENEMY_COUNT,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            portal_size: 20.0,
            death_delay_seconds: 3.0,
            portal_delay_seconds: 0.1,
            explore_radius: 6,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            generation: GenerationConfig::new(seed),
            ..Self::default()
        }
    }

    /// The seed driving generation, spawning and AI.
    pub fn seed(&self) -> u64 {
        self.generation.seed
    }

    /// Parses a (possibly partial) JSON document over the defaults.
    pub fn from_json_str(json: &str) -> DelveResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a (possibly partial) JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> DelveResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Rejects values that would make sampling or timers meaningless.
    pub fn validate(&self) -> DelveResult<()> {
        self.generation.validate()?;

        if !(self.player.size > 0.0) || !(self.enemy.size > 0.0) {
            return Err(DelveError::InvalidConfig(
                "actor sizes must be positive".to_string(),
            ));
        }
        if !(self.player.speed >= 0.0) || !(self.enemy.speed >= 0.0) {
            return Err(DelveError::InvalidConfig(
                "speeds must be non-negative".to_string(),
            ));
        }
        if self.enemy.health <= 0 {
            return Err(DelveError::InvalidConfig(
                "enemy health must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.enemy.patrol_chance) {
            return Err(DelveError::InvalidConfig(format!(
                "patrol chance {} is not a probability",
                self.enemy.patrol_chance
            )));
        }
        if !(self.enemy.patrol_timer_min >= 0.0
            && self.enemy.patrol_timer_min < self.enemy.patrol_timer_max)
        {
            return Err(DelveError::InvalidConfig(format!(
                "patrol timer range [{}, {}) is empty",
                self.enemy.patrol_timer_min, self.enemy.patrol_timer_max
            )));
        }
        if !(self.portal_size > 0.0) {
            return Err(DelveError::InvalidConfig(
                "portal size must be positive".to_string(),
            ));
        }
        if !(self.death_delay_seconds >= 0.0) || !(self.portal_delay_seconds >= 0.0) {
            return Err(DelveError::InvalidConfig(
                "terminal delays must be non-negative".to_string(),
            ));
        }
        if self.explore_radius < 0 {
            return Err(DelveError::InvalidConfig(
                "explore radius must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}
