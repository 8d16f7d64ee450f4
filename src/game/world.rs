//! # World Representation
//!
//! The dungeon's tile grid and the fog-of-war mask the host reveals.
//!
//! Both are flat buffers addressed by `x + y * width` behind bounds-checked
//! accessors, so an out-of-range coordinate is an error value instead of a panic.

use crate::{DelveError, DelveResult, Position};
use serde::{Deserialize, Serialize};

/// State of a single dungeon cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Empty,
    Wall,
}

impl TileType {
    /// Whether actors may stand on this tile.
    pub fn is_passable(self) -> bool {
        matches!(self, TileType::Empty)
    }
}

/// Fixed-size grid of wall/empty cells.
///
/// Only generation mutates a grid; sessions hold it read-only.
///
/// # Examples
///
/// ```
/// use delve::{Position, TileGrid, TileType};
///
/// let grid = TileGrid::new(10, 6);
/// assert_eq!(grid.get(Position::new(3, 3)), Some(TileType::Wall));
/// assert_eq!(grid.get(Position::new(10, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// Creates a grid filled entirely with walls.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TileType::Wall)
    }

    /// Creates a grid filled with a single tile type.
    pub fn filled(width: u32, height: u32, tile: TileType) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width as usize * height as usize],
        }
    }

    /// Grid width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Checks if a position lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.x as usize + pos.y as usize * self.width as usize)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, pos: Position) -> DelveError {
        DelveError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Gets the tile at a position, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<TileType> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Gets the tile at a position, reporting out-of-bounds access as an error.
    pub fn tile(&self, pos: Position) -> DelveResult<TileType> {
        self.get(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Sets the tile at a position.
    pub fn set(&mut self, pos: Position, tile: TileType) -> DelveResult<()> {
        let index = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.tiles[index] = tile;
        Ok(())
    }

    /// True if the position is inside the grid and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).map(TileType::is_passable).unwrap_or(false)
    }

    /// Sets every in-bounds tile of a rectangle, silently clipping the rest.
    pub fn fill_rect(&mut self, top_left: Position, width: u32, height: u32, tile: TileType) {
        for y in top_left.y..top_left.y + height as i32 {
            for x in top_left.x..top_left.x + width as i32 {
                if let Some(index) = self.index(Position::new(x, y)) {
                    self.tiles[index] = tile;
                }
            }
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Counts tiles of a given type.
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Renders the grid as text, `#` for walls and `.` for empty tiles.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                out.push(match self.get(Position::new(x, y)) {
                    Some(TileType::Empty) => '.',
                    _ => '#',
                });
            }
            out.push('\n');
        }
        out
    }
}

/// Per-tile "has the player seen this" flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploredMask {
    width: u32,
    height: u32,
    explored: Vec<bool>,
}

impl ExploredMask {
    /// Creates a fully unexplored mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            explored: vec![false; width as usize * height as usize],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height {
            Some(pos.x as usize + pos.y as usize * self.width as usize)
        } else {
            None
        }
    }

    /// Whether a tile has been revealed. Out-of-bounds tiles never are.
    pub fn is_explored(&self, pos: Position) -> bool {
        self.index(pos).map(|i| self.explored[i]).unwrap_or(false)
    }

    /// Reveals every in-bounds tile within Chebyshev distance `radius` of `center`.
    ///
    /// Returns the tiles touched (already-explored ones included), so callers can
    /// test them against points of interest.
    pub fn reveal_square(&mut self, center: Position, radius: i32) -> Vec<Position> {
        let mut touched = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let pos = Position::new(center.x + dx, center.y + dy);
                if let Some(index) = self.index(pos) {
                    self.explored[index] = true;
                    touched.push(pos);
                }
            }
        }
        touched
    }

    /// Number of revealed tiles.
    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&e| e).count()
    }
}
