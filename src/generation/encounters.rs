//! # Encounter Generation
//!
//! Chooses spawn tiles for the player and the starting enemies on a carved grid.
//!
//! Tiles are drawn uniformly from the grid's empty tiles. Enemies avoid the
//! player's tile whenever another empty tile exists, but may share tiles with
//! each other.

use crate::{DelveError, DelveResult, GenerationConfig, Generator, Position, TileGrid};
use log::debug;
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

/// Where each actor starts, in tile coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPlan {
    pub player_tile: Position,
    pub enemy_tiles: Vec<Position>,
}

/// Picks spawn tiles on an already-generated grid.
#[derive(Debug, Clone)]
pub struct EncounterGenerator<'a> {
    grid: &'a TileGrid,
    enemy_count: usize,
}

impl<'a> EncounterGenerator<'a> {
    /// Creates a placer for `enemy_count` enemies on `grid`.
    pub fn new(grid: &'a TileGrid, enemy_count: usize) -> Self {
        Self { grid, enemy_count }
    }
}

/// Draws one tile uniformly from the grid's empty tiles.
///
/// # Examples
///
/// ```
/// use delve::{random_empty_tile, Position, TileGrid, TileType};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut grid = TileGrid::new(5, 5);
/// grid.fill_rect(Position::new(2, 2), 1, 1, TileType::Empty);
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(random_empty_tile(&grid, &mut rng).unwrap(), Position::new(2, 2));
/// ```
pub fn random_empty_tile<R: Rng + ?Sized>(grid: &TileGrid, rng: &mut R) -> DelveResult<Position> {
    let empty = grid.empty_positions();
    pick(&empty, rng)
}

fn pick<R: Rng + ?Sized>(tiles: &[Position], rng: &mut R) -> DelveResult<Position> {
    if tiles.is_empty() {
        return Err(DelveError::GenerationFailed(
            "no empty tile to spawn on".to_string(),
        ));
    }
    Ok(tiles[rng.gen_range(0..tiles.len())])
}

impl Generator<SpawnPlan> for EncounterGenerator<'_> {
    fn generate(&self, _config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<SpawnPlan> {
        let player_tile = random_empty_tile(self.grid, rng)?;

        let mut candidates: Vec<Position> = self
            .grid
            .empty_positions()
            .into_iter()
            .filter(|&tile| tile != player_tile)
            .collect();
        if candidates.is_empty() {
            candidates.push(player_tile);
        }

        let enemy_tiles = (0..self.enemy_count)
            .map(|_| pick(&candidates, rng))
            .collect::<DelveResult<Vec<_>>>()?;

        debug!(
            "Spawn plan: player at {:?}, {} enemies",
            player_tile,
            enemy_tiles.len()
        );

        Ok(SpawnPlan {
            player_tile,
            enemy_tiles,
        })
    }

    fn validate(&self, plan: &SpawnPlan, _config: &GenerationConfig) -> DelveResult<()> {
        if plan.enemy_tiles.len() != self.enemy_count {
            return Err(DelveError::GenerationFailed(format!(
                "expected {} enemy spawns, got {}",
                self.enemy_count,
                plan.enemy_tiles.len()
            )));
        }

        let occupied = std::iter::once(&plan.player_tile).chain(plan.enemy_tiles.iter());
        for tile in occupied {
            if !self.grid.is_empty(*tile) {
                return Err(DelveError::GenerationFailed(format!(
                    "spawn tile {:?} is not empty",
                    tile
                )));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "EncounterGenerator"
    }
}
