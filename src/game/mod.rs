//! # Game Module
//!
//! Core simulation state: the tile world, actors, AI, combat, and the session
//! that ties them together with a fixed per-tick ordering.
//!
//! Two coordinate spaces are in play:
//! - [`Position`]: integer tile coordinates, used by the grid and by generation
//! - [`WorldPoint`]: continuous world units, used by actors, attacks and the portal

pub mod ai;
pub mod autopilot;
pub mod classes;
pub mod combat;
pub mod entities;
pub mod movement;
pub mod portal;
pub mod state;
pub mod world;

pub use ai::*;
pub use autopilot::*;
pub use classes::*;
pub use combat::*;
pub use entities::*;
pub use movement::*;
pub use portal::*;
pub use state::*;
pub use world::*;

use crate::config::TILE_SIZE;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a tile coordinate in the dungeon grid.
///
/// # Examples
///
/// ```
/// use delve::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.cardinal_adjacent_positions();
/// assert_eq!(adjacent.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns only the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        vec![
            Position::new(self.x, self.y - 1), // N
            Position::new(self.x - 1, self.y), // W
            Position::new(self.x + 1, self.y), // E
            Position::new(self.x, self.y + 1), // S
        ]
    }

    /// World coordinates of the top-left corner of this tile.
    pub fn to_world(self) -> WorldPoint {
        WorldPoint::new(self.x as f32 * TILE_SIZE, self.y as f32 * TILE_SIZE)
    }

    /// Top-left position that centers a square of side `size` inside this tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Position, WorldPoint};
    ///
    /// assert_eq!(Position::new(2, 3).centered_in_tile(12.0), WorldPoint::new(34.0, 50.0));
    /// ```
    pub fn centered_in_tile(self, size: f32) -> WorldPoint {
        let offset = (TILE_SIZE - size) / 2.0;
        let corner = self.to_world();
        WorldPoint::new(corner.x + offset, corner.y + offset)
    }
}

/// A point in continuous world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    /// Creates a new world point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> WorldPoint {
        WorldPoint::new(self.x + dx, self.y + dy)
    }

    /// The tile containing this point.
    ///
    /// Uses floor division, so any negative coordinate lands outside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Position, WorldPoint};
    ///
    /// assert_eq!(WorldPoint::new(31.9, 16.0).to_tile(), Position::new(1, 1));
    /// assert_eq!(WorldPoint::new(-0.5, 0.0).to_tile(), Position::new(-1, 0));
    /// ```
    pub fn to_tile(self) -> Position {
        Position::new(
            (self.x / TILE_SIZE).floor() as i32,
            (self.y / TILE_SIZE).floor() as i32,
        )
    }
}

/// Unique identifier for actors.
pub type EntityId = Uuid;

/// Creates an entity ID from the session's random source.
///
/// Drawing the bytes from the seeded generator keeps whole sessions reproducible.
pub fn new_entity_id<R: Rng + ?Sized>(rng: &mut R) -> EntityId {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
