//! # Dungeon Generation
//!
//! Room-and-corridor layout generation.
//!
//! The generator fills the grid with walls, carves `room_count` rectangles at
//! uniformly random positions, then joins each room to the one generated before
//! it with an L-shaped corridor. Rooms may overlap; overlapping footprints simply
//! merge. Connectivity follows the generation order, which is enough to reach the
//! goal room (the last one generated) from anywhere.

use super::utils;
use crate::{
    reachable_tiles, DelveError, DelveResult, GenerationConfig, Generator, Position, Room,
    TileGrid, TileType,
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

/// A generated dungeon: the carved grid plus its rooms in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub grid: TileGrid,
    pub rooms: Vec<Room>,
}

impl Dungeon {
    /// Wraps a hand-built grid and room list.
    pub fn from_parts(grid: TileGrid, rooms: Vec<Room>) -> Self {
        Self { grid, rooms }
    }

    /// The room hosting the portal: the last one generated.
    pub fn goal_room(&self) -> Option<&Room> {
        self.rooms.last()
    }
}

/// Primary dungeon generator using the room-and-corridor algorithm.
#[derive(Debug, Clone, Default)]
pub struct RoomCorridorGenerator;

impl RoomCorridorGenerator {
    /// Creates a new dungeon generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{GenerationConfig, Generator, RoomCorridorGenerator, TileType};
    /// use delve::generation::utils::create_rng;
    ///
    /// let config = GenerationConfig::new(7);
    /// let mut rng = create_rng(&config);
    /// let dungeon = RoomCorridorGenerator::new().generate(&config, &mut rng).unwrap();
    /// assert_eq!(dungeon.rooms.len(), 10);
    /// assert!(dungeon.grid.count(TileType::Empty) > 0);
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Convenience wrapper that seeds its own generator from the config.
    pub fn generate_seeded(&self, config: &GenerationConfig) -> DelveResult<Dungeon> {
        let mut rng = utils::create_rng(config);
        self.generate(config, &mut rng)
    }

    /// Samples and carves every room, in order.
    fn place_rooms(
        &self,
        grid: &mut TileGrid,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> Vec<Room> {
        let max_width = config.effective_max_room_size(config.width);
        let max_height = config.effective_max_room_size(config.height);
        let mut rooms = Vec::with_capacity(config.room_count as usize);

        for room_id in 0..config.room_count {
            let width = rng.gen_range(config.min_room_size..=max_width);
            let height = rng.gen_range(config.min_room_size..=max_height);

            // Keeps x + width <= grid width - 1, so the border column stays wall.
            let x = rng.gen_range(1..=(config.width - width - 1) as i32);
            let y = rng.gen_range(1..=(config.height - height - 1) as i32);

            let room = Room::new(room_id, Position::new(x, y), width, height);
            self.carve_room(grid, &room);
            rooms.push(room);
        }

        rooms
    }

    /// Carves out a room's whole rectangle.
    fn carve_room(&self, grid: &mut TileGrid, room: &Room) {
        grid.fill_rect(room.top_left, room.width, room.height, TileType::Empty);
    }

    /// Connects each room to its predecessor in generation order.
    fn connect_rooms(&self, grid: &mut TileGrid, rooms: &[Room], config: &GenerationConfig) {
        for pair in rooms.windows(2) {
            let (from, to) = (pair[0].center(), pair[1].center());
            self.carve_l_corridor(grid, from, to, config.corridor_width);
        }
    }

    /// Carves a horizontal band along `start`'s row, then a vertical band along `end`'s column.
    ///
    /// Bands are `width` tiles thick, growing toward +y / +x from the center line.
    /// Both spans include their endpoints so the elbow tile is shared.
    fn carve_l_corridor(&self, grid: &mut TileGrid, start: Position, end: Position, width: u32) {
        for x in start.x.min(end.x)..=start.x.max(end.x) {
            for offset in 0..width as i32 {
                self.carve_interior(grid, Position::new(x, start.y + offset));
            }
        }

        for y in start.y.min(end.y)..=start.y.max(end.y) {
            for offset in 0..width as i32 {
                self.carve_interior(grid, Position::new(end.x + offset, y));
            }
        }
    }

    /// Carves a tile unless it sits on the outer border.
    fn carve_interior(&self, grid: &mut TileGrid, pos: Position) {
        let interior = pos.x >= 1
            && pos.y >= 1
            && pos.x < grid.width() as i32 - 1
            && pos.y < grid.height() as i32 - 1;
        if interior {
            grid.fill_rect(pos, 1, 1, TileType::Empty);
        }
    }

    /// Checks that every room center is reachable from the first room.
    fn validate_connectivity(&self, grid: &TileGrid, rooms: &[Room]) -> DelveResult<()> {
        let Some(first) = rooms.first() else {
            return Ok(());
        };

        let reachable = reachable_tiles(grid, first.center());
        for room in rooms {
            if !reachable.contains(&room.center()) {
                return Err(DelveError::GenerationFailed(format!(
                    "Room {} is not connected to room {}",
                    room.id, first.id
                )));
            }
        }

        Ok(())
    }
}

impl Generator<Dungeon> for RoomCorridorGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<Dungeon> {
        config.validate()?;

        let mut grid = TileGrid::new(config.width, config.height);
        let rooms = self.place_rooms(&mut grid, config, rng);
        self.connect_rooms(&mut grid, &rooms, config);

        let dungeon = Dungeon::from_parts(grid, rooms);
        self.validate(&dungeon, config)?;

        for room in &dungeon.rooms {
            debug!(
                "Room {} at {:?} ({}x{})",
                room.id, room.top_left, room.width, room.height
            );
        }
        info!(
            "{} generated {}x{} dungeon with {} rooms, {} empty tiles (seed {})",
            self.generator_type(),
            config.width,
            config.height,
            dungeon.rooms.len(),
            dungeon.grid.count(TileType::Empty),
            config.seed
        );

        Ok(dungeon)
    }

    fn validate(&self, dungeon: &Dungeon, config: &GenerationConfig) -> DelveResult<()> {
        if dungeon.grid.width() != config.width || dungeon.grid.height() != config.height {
            return Err(DelveError::GenerationFailed(format!(
                "grid is {}x{}, expected {}x{}",
                dungeon.grid.width(),
                dungeon.grid.height(),
                config.width,
                config.height
            )));
        }
        if dungeon.rooms.is_empty() {
            return Err(DelveError::GenerationFailed(
                "Failed to place any rooms".to_string(),
            ));
        }
        self.validate_connectivity(&dungeon.grid, &dungeon.rooms)
    }

    fn generator_type(&self) -> &'static str {
        "RoomCorridorGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_tile_path;

    #[test]
    fn test_generation_with_default_config() {
        let config = GenerationConfig::new(12345);
        let dungeon = RoomCorridorGenerator::new().generate_seeded(&config).unwrap();

        assert_eq!(dungeon.grid.width(), 100);
        assert_eq!(dungeon.grid.height(), 60);
        assert_eq!(dungeon.rooms.len(), 10);
        assert_eq!(dungeon.goal_room().map(|r| r.id), Some(9));
    }

    #[test]
    fn test_rooms_respect_bounds_and_sizes() {
        for seed in 0..20 {
            let config = GenerationConfig::new(seed);
            let dungeon = RoomCorridorGenerator::new().generate_seeded(&config).unwrap();
            for room in &dungeon.rooms {
                assert!((3..=17).contains(&room.width));
                assert!((3..=17).contains(&room.height));
                assert!(room.fits_with_margin(config.width, config.height));
                for pos in room.all_positions() {
                    assert_eq!(dungeon.grid.get(pos), Some(TileType::Empty));
                }
            }
        }
    }

    #[test]
    fn test_border_stays_wall() {
        let config = GenerationConfig::for_testing(99);
        let dungeon = RoomCorridorGenerator::new().generate_seeded(&config).unwrap();
        let (w, h) = (config.width as i32, config.height as i32);
        for x in 0..w {
            assert_eq!(dungeon.grid.get(Position::new(x, 0)), Some(TileType::Wall));
            assert_eq!(dungeon.grid.get(Position::new(x, h - 1)), Some(TileType::Wall));
        }
        for y in 0..h {
            assert_eq!(dungeon.grid.get(Position::new(0, y)), Some(TileType::Wall));
            assert_eq!(dungeon.grid.get(Position::new(w - 1, y)), Some(TileType::Wall));
        }
    }

    #[test]
    fn test_consecutive_rooms_are_connected() {
        let config = GenerationConfig::new(2024);
        let dungeon = RoomCorridorGenerator::new().generate_seeded(&config).unwrap();
        for pair in dungeon.rooms.windows(2) {
            assert_eq!(pair[1].id, pair[0].id + 1);
            let path = find_tile_path(&dungeon.grid, pair[0].center(), pair[1].center());
            assert!(path.is_some(), "room {} cut off from {}", pair[1].id, pair[0].id);
        }
        let reach = reachable_tiles(&dungeon.grid, dungeon.rooms[0].center());
        assert!(dungeon.rooms.iter().all(|r| reach.contains(&r.center())));
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let config = GenerationConfig::new(555);
        let a = RoomCorridorGenerator::new().generate_seeded(&config).unwrap();
        let b = RoomCorridorGenerator::new().generate_seeded(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_l_corridor_carving() {
        let generator = RoomCorridorGenerator::new();
        let mut grid = TileGrid::new(20, 20);

        let start = Position::new(5, 5);
        let end = Position::new(15, 12);
        generator.carve_l_corridor(&mut grid, start, end, 2);

        assert!(grid.is_empty(start));
        assert!(grid.is_empty(end));
        // Elbow and band thickness
        assert!(grid.is_empty(Position::new(15, 5)));
        assert!(grid.is_empty(Position::new(10, 6)));
        assert!(grid.is_empty(Position::new(16, 9)));
        assert!(!grid.is_empty(Position::new(10, 7)));
        assert!(!grid.is_empty(Position::new(14, 9)));
        assert_eq!(grid.count(TileType::Empty), 11 * 2 + 8 * 2 - 2);
    }

    #[test]
    fn test_corridor_toward_origin() {
        let generator = RoomCorridorGenerator::new();
        let mut grid = TileGrid::new(20, 20);
        generator.carve_l_corridor(&mut grid, Position::new(12, 14), Position::new(3, 2), 2);

        let reach = reachable_tiles(&grid, Position::new(12, 14));
        assert!(reach.contains(&Position::new(3, 2)));
    }

    #[test]
    fn test_tiny_grid_fails_fast() {
        let mut config = GenerationConfig::new(1);
        config.width = 3;
        let result = RoomCorridorGenerator::new().generate_seeded(&config);
        assert!(matches!(result, Err(DelveError::InvalidConfig(_))));
    }

    #[test]
    fn test_validation_detects_disconnected_rooms() {
        let generator = RoomCorridorGenerator::new();
        let config = GenerationConfig::for_testing(1);

        let mut grid = TileGrid::new(config.width, config.height);
        let rooms = vec![
            Room::new(0, Position::new(2, 2), 4, 4),
            Room::new(1, Position::new(20, 20), 4, 4),
        ];
        for room in &rooms {
            generator.carve_room(&mut grid, room);
        }

        let result = generator.validate(&Dungeon::from_parts(grid, rooms), &config);
        assert!(matches!(result, Err(DelveError::GenerationFailed(_))));
    }
}
