//! # Movement & Collision
//!
//! An actor may stand somewhere only if all four corners of its footprint sit on
//! empty, in-bounds tiles. The far corners are taken at `position + size - 1` so a
//! footprint flush against a tile edge does not count as entering the next tile.
//!
//! Moves are all-or-nothing: a diagonal step blocked on either axis is rejected
//! as a whole. There is no sliding along walls.

use crate::{Actor, TileGrid, WorldPoint};
use log::trace;

/// The four corner sample points of a footprint at `position`.
pub fn footprint_corners(position: WorldPoint, size: f32) -> [WorldPoint; 4] {
    let far = size - 1.0;
    [
        position,
        position.offset(far, 0.0),
        position.offset(0.0, far),
        position.offset(far, far),
    ]
}

/// Whether a footprint of side `size` may rest at `position`.
///
/// # Examples
///
/// ```
/// use delve::{can_occupy, Position, TileGrid, TileType, WorldPoint};
///
/// let mut grid = TileGrid::new(4, 4);
/// grid.fill_rect(Position::new(1, 1), 2, 2, TileType::Empty);
///
/// assert!(can_occupy(&grid, WorldPoint::new(16.0, 16.0), 12.0));
/// assert!(can_occupy(&grid, WorldPoint::new(36.0, 36.0), 12.0));
/// assert!(!can_occupy(&grid, WorldPoint::new(37.5, 36.0), 12.0));
/// ```
pub fn can_occupy(grid: &TileGrid, position: WorldPoint, size: f32) -> bool {
    footprint_corners(position, size)
        .iter()
        .all(|corner| grid.is_empty(corner.to_tile()))
}

/// Attempts to displace an actor by `(dx, dy)`.
///
/// Returns whether the move was accepted; the actor is untouched otherwise.
pub fn try_move<A: Actor + ?Sized>(actor: &mut A, dx: f32, dy: f32, grid: &TileGrid) -> bool {
    let target = actor.position().offset(dx, dy);
    if can_occupy(grid, target, actor.size()) {
        actor.set_position(target);
        true
    } else {
        trace!("Move to ({:.1}, {:.1}) blocked", target.x, target.y);
        false
    }
}
