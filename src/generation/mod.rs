//! # Generation Module
//!
//! Procedural content generation: the dungeon layout and the actors placed in it.
//!
//! Every generator takes an explicit, seedable random source so a seed reproduces
//! the same dungeon and the same spawns.

pub mod dungeon;
pub mod encounters;

pub use dungeon::*;
pub use encounters::*;

use crate::config::{DEFAULT_DUNGEON_HEIGHT, DEFAULT_DUNGEON_WIDTH, DEFAULT_ROOM_COUNT};
use crate::{DelveError, DelveResult, Position};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for dungeon generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Grid width in tiles
    pub width: u32,
    /// Grid height in tiles
    pub height: u32,
    /// Number of rooms carved, in order
    pub room_count: u32,
    /// Minimum room side in tiles
    pub min_room_size: u32,
    /// Maximum room side in tiles (clamped to what the grid can hold)
    pub max_room_size: u32,
    /// Corridor width in tiles
    pub corridor_width: u32,
}

impl GenerationConfig {
    /// Creates the default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!((config.width, config.height), (100, 60));
    /// assert!(config.max_room_size >= config.min_room_size);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: DEFAULT_DUNGEON_WIDTH,
            height: DEFAULT_DUNGEON_HEIGHT,
            room_count: DEFAULT_ROOM_COUNT,
            min_room_size: 3,
            max_room_size: 17,
            corridor_width: 2,
        }
    }

    /// Creates a configuration for testing with smaller, simpler levels.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 40,
            height: 30,
            room_count: 5,
            min_room_size: 3,
            max_room_size: 8,
            corridor_width: 2,
        }
    }

    /// Largest room side that still leaves a one-tile margin inside `extent`.
    pub fn effective_max_room_size(&self, extent: u32) -> u32 {
        self.max_room_size.min(extent.saturating_sub(2))
    }

    /// Fails fast on parameters that cannot produce a dungeon.
    pub fn validate(&self) -> DelveResult<()> {
        if self.min_room_size < 3 {
            return Err(DelveError::InvalidConfig(format!(
                "minimum room size {} is below 3",
                self.min_room_size
            )));
        }
        if self.max_room_size < self.min_room_size {
            return Err(DelveError::InvalidConfig(format!(
                "maximum room size {} is below minimum {}",
                self.max_room_size, self.min_room_size
            )));
        }
        // A room plus its one-tile margin on both sides has to fit.
        let smallest_side = self.width.min(self.height);
        if smallest_side < self.min_room_size + 2 {
            return Err(DelveError::InvalidConfig(format!(
                "{}x{} grid cannot hold a {}-tile room with its margin",
                self.width, self.height, self.min_room_size
            )));
        }
        if self.room_count == 0 {
            return Err(DelveError::InvalidConfig(
                "at least one room is required".to_string(),
            ));
        }
        if self.corridor_width == 0 {
            return Err(DelveError::InvalidConfig(
                "corridor width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Represents a rectangular room in the dungeon.
///
/// Rooms only exist during generation and for locating the goal room; once
/// carved, the grid is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Generation order index
    pub id: u32,
    /// Top-left corner of the room
    pub top_left: Position,
    /// Width of the room in tiles
    pub width: u32,
    /// Height of the room in tiles
    pub height: u32,
}

impl Room {
    /// Creates a new room with the given parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Room, Position};
    ///
    /// let room = Room::new(1, Position::new(5, 5), 10, 8);
    /// assert_eq!(room.id, 1);
    /// assert_eq!(room.center(), Position::new(10, 9));
    /// ```
    pub fn new(id: u32, top_left: Position, width: u32, height: u32) -> Self {
        Self {
            id,
            top_left,
            width,
            height,
        }
    }

    /// Gets the bottom-right corner of the room.
    pub fn bottom_right(&self) -> Position {
        Position::new(
            self.top_left.x + self.width as i32 - 1,
            self.top_left.y + self.height as i32 - 1,
        )
    }

    /// Gets the center position of the room.
    pub fn center(&self) -> Position {
        Position::new(
            self.top_left.x + self.width as i32 / 2,
            self.top_left.y + self.height as i32 / 2,
        )
    }

    /// Checks that the room keeps a one-tile margin inside a `width` x `height` grid.
    pub fn fits_with_margin(&self, width: u32, height: u32) -> bool {
        self.top_left.x >= 1
            && self.top_left.y >= 1
            && self.top_left.x + self.width as i32 <= width as i32 - 1
            && self.top_left.y + self.height as i32 <= height as i32 - 1
    }

    /// Gets all positions within this room.
    pub fn all_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();

        for y in self.top_left.y..(self.top_left.y + self.height as i32) {
            for x in self.top_left.x..(self.top_left.x + self.width as i32) {
                positions.push(Position::new(x, y));
            }
        }

        positions
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.room_count, 10);
        assert_eq!(config.corridor_width, 2);
        assert!(config.validate().is_ok());
        assert!(GenerationConfig::for_testing(1).validate().is_ok());
    }

    #[test]
    fn test_config_rejects_tiny_grid() {
        let mut config = GenerationConfig::new(1);
        config.width = 4;
        assert!(matches!(
            config.validate(),
            Err(DelveError::InvalidConfig(_))
        ));

        config.width = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_ranges() {
        let mut config = GenerationConfig::new(1);
        config.min_room_size = 2;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::new(1);
        config.max_room_size = 2;
        assert!(config.validate().is_err());

        let mut config = GenerationConfig::new(1);
        config.room_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_max_room_size() {
        let config = GenerationConfig::new(1);
        assert_eq!(config.effective_max_room_size(100), 17);
        assert_eq!(config.effective_max_room_size(10), 8);
    }

    #[test]
    fn test_room_geometry() {
        let room = Room::new(1, Position::new(5, 5), 10, 8);

        assert_eq!(room.bottom_right(), Position::new(14, 12));
        assert_eq!(room.center(), Position::new(10, 9));

        let tiles = room.all_positions();
        assert_eq!(tiles.len(), 80);
        assert_eq!(tiles.first(), Some(&Position::new(5, 5)));
        assert_eq!(tiles.last(), Some(&room.bottom_right()));
    }

    #[test]
    fn test_room_margin() {
        assert!(Room::new(0, Position::new(1, 1), 3, 3).fits_with_margin(5, 5));
        assert!(!Room::new(0, Position::new(0, 1), 3, 3).fits_with_margin(5, 5));
        assert!(!Room::new(0, Position::new(2, 1), 3, 3).fits_with_margin(5, 5));
    }

    #[test]
    fn test_utils_rng_is_seeded() {
        let config = GenerationConfig::new(12345);
        let mut a = utils::create_rng(&config);
        let mut b = utils::create_rng(&config);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
