//! # Tile Pathfinding
//!
//! Breadth-first reachability and shortest paths over the empty tiles of a grid.

use crate::{Position, TileGrid};
use ::pathfinding::prelude::{bfs, bfs_reach};
use std::collections::HashSet;

fn open_neighbours(grid: &TileGrid, pos: Position) -> Vec<Position> {
    pos.cardinal_adjacent_positions()
        .into_iter()
        .filter(|&next| grid.is_empty(next))
        .collect()
}

/// Every empty tile 4-connected to `start`, including `start` itself.
///
/// Returns an empty set when `start` is not an empty tile.
pub fn reachable_tiles(grid: &TileGrid, start: Position) -> HashSet<Position> {
    if !grid.is_empty(start) {
        return HashSet::new();
    }
    bfs_reach(start, |&pos| open_neighbours(grid, pos)).collect()
}

/// Shortest 4-connected path of empty tiles from `start` to `goal`, both included.
pub fn find_tile_path(grid: &TileGrid, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !grid.is_empty(start) || !grid.is_empty(goal) {
        return None;
    }
    bfs(&start, |&pos| open_neighbours(grid, pos), |&pos| pos == goal)
}
