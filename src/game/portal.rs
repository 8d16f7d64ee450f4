//! # Portal
//!
//! The level exit, centered in the middle tile of the goal room.

use crate::{Aabb, Position, Room, WorldPoint};
use serde::{Deserialize, Serialize};

/// Axis-aligned square the player must step into to complete the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    pub position: WorldPoint,
    pub size: f32,
}

impl Portal {
    /// Creates a portal with its top-left corner at `position`.
    pub fn new(position: WorldPoint, size: f32) -> Self {
        Self { position, size }
    }

    /// Centers a portal on the given room's center tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Portal, Position, Room, WorldPoint};
    ///
    /// let room = Room::new(0, Position::new(2, 2), 3, 3);
    /// let portal = Portal::in_room(&room, 20.0);
    /// assert_eq!(portal.position, WorldPoint::new(46.0, 46.0));
    /// ```
    pub fn in_room(room: &Room, size: f32) -> Self {
        Self::in_tile(room.center(), size)
    }

    /// Centers a portal on `tile`.
    pub fn in_tile(tile: Position, size: f32) -> Self {
        Self::new(tile.centered_in_tile(size), size)
    }

    /// The portal's box.
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.position, self.size)
    }

    /// Tile under the portal's center.
    pub fn tile(&self) -> Position {
        self.bounds().center().to_tile()
    }

    /// Strict overlap with a player footprint.
    pub fn contains_player(&self, player_position: WorldPoint, player_size: f32) -> bool {
        self.bounds().overlaps(&Aabb::square(player_position, player_size))
    }

    /// Whether a revealed tile brings the portal into view. Shared edges count.
    pub fn is_revealed_by(&self, tile: Position) -> bool {
        self.bounds().touches(&Aabb::square(tile.to_world(), crate::config::TILE_SIZE))
    }
}
