//! # Autopilot
//!
//! Scripted intent source for headless runs: walks the tile path to the portal
//! and swings at anything the current facing would hit.
//!
//! Movement is one axis at a time. The player first re-centers across the
//! direction of travel inside its current tile, then steps toward the next tile
//! on the path. A 12-unit footprint inside a 16-unit tile has 2 units of slack
//! per side, so this needs `speed * delta <= 4` to stay clear of corridor walls
//! (true at 60 FPS with the default speed).

use crate::config::TILE_SIZE;
use crate::{
    compute_attack_box, find_tile_path, Actor, GameSession, InputIntents, Position,
    SessionStatus,
};
use log::{debug, warn};

/// Path-following state carried between frames.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Remaining tiles to the portal, current tile first
    current_path: Vec<Position>,
    /// Tile the path leads to
    target: Option<Position>,
}

impl Autopilot {
    /// Creates an autopilot with no path yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tiles still ahead, current tile first.
    pub fn current_path(&self) -> &[Position] {
        &self.current_path
    }

    /// Chooses this frame's intents for a frame of `delta` seconds.
    pub fn next_intents(&mut self, session: &GameSession, delta: f32) -> InputIntents {
        if session.status() != SessionStatus::Playing {
            return InputIntents::idle();
        }
        if session.show_full_map() {
            return InputIntents {
                toggle_map_pressed: true,
                ..InputIntents::idle()
            };
        }

        let mut intents = self.movement_intents(session, delta);
        intents.attack_pressed = self.should_attack(session);
        intents
    }

    fn should_attack(&self, session: &GameSession) -> bool {
        let player = session.player();
        if !player.can_attack() {
            return false;
        }

        let geometry = player.class.attack_geometry(player.size);
        let attack_box =
            compute_attack_box(player.position, player.size, player.facing_angle, &geometry);
        session
            .enemies()
            .iter()
            .any(|enemy| attack_box.overlaps(&enemy.footprint()))
    }

    fn movement_intents(&mut self, session: &GameSession, delta: f32) -> InputIntents {
        let here = session.player_tile();
        let goal = session.portal().tile();

        if self.target != Some(goal) || self.current_path.first() != Some(&here) {
            self.replan(session, here, goal);
        }

        let next = match self.current_path.get(1) {
            Some(next) => *next,
            None => return InputIntents::idle(),
        };

        let player = session.player();
        let step = session.config().player.speed * delta;
        let tolerance = (step / 2.0).min((TILE_SIZE - player.size) / 2.0);
        let aligned = here.centered_in_tile(player.size);
        let toward = next.centered_in_tile(player.size);

        let (dx, dy) = if next.x != here.x {
            // Horizontal leg: settle the row first.
            if (aligned.y - player.position.y).abs() > tolerance {
                (0.0, aligned.y - player.position.y)
            } else {
                (toward.x - player.position.x, 0.0)
            }
        } else if (aligned.x - player.position.x).abs() > tolerance {
            (aligned.x - player.position.x, 0.0)
        } else {
            (0.0, toward.y - player.position.y)
        };

        InputIntents {
            move_right: dx > 0.0,
            move_left: dx < 0.0,
            move_up: dy > 0.0,
            move_down: dy < 0.0,
            ..InputIntents::idle()
        }
    }

    fn replan(&mut self, session: &GameSession, here: Position, goal: Position) {
        match find_tile_path(session.grid(), here, goal) {
            Some(path) => {
                debug!("Autopilot path: {} tiles to {:?}", path.len(), goal);
                self.current_path = path;
            }
            None => {
                warn!("Autopilot found no path from {:?} to {:?}", here, goal);
                self.current_path.clear();
            }
        }
        self.target = Some(goal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyTuning;
    use crate::{
        Behavior, Dungeon, Enemy, PlayerClass, Portal, Room, SessionConfig, TileGrid, TileType,
        WorldPoint,
    };
    use uuid::Uuid;

    /// Two rooms joined by a 2-wide corridor, portal in the second room.
    fn corridor_session(enemies: Vec<Enemy>) -> GameSession {
        let mut grid = TileGrid::new(20, 10);
        let first = Room::new(0, Position::new(1, 1), 4, 4);
        let second = Room::new(1, Position::new(14, 4), 4, 4);
        grid.fill_rect(first.top_left, 4, 4, TileType::Empty);
        grid.fill_rect(second.top_left, 4, 4, TileType::Empty);
        grid.fill_rect(Position::new(3, 3), 12, 2, TileType::Empty);
        grid.fill_rect(Position::new(15, 3), 2, 3, TileType::Empty);
        let portal = Portal::in_room(&second, 20.0);

        GameSession::from_parts(
            PlayerClass::Warrior,
            SessionConfig::with_seed(5),
            Dungeon::from_parts(grid, vec![first, second]),
            Position::new(2, 2).centered_in_tile(12.0),
            enemies,
            portal,
        )
        .unwrap()
    }

    #[test]
    fn test_walks_to_portal() {
        let mut session = corridor_session(vec![]);
        let mut pilot = Autopilot::new();
        let delta = 1.0 / 60.0;

        for _ in 0..2_000 {
            let intents = pilot.next_intents(&session, delta);
            session.tick(delta, &intents).unwrap();
            if session.status() != SessionStatus::Playing {
                break;
            }
        }

        assert_eq!(session.status(), SessionStatus::LevelComplete);
    }

    #[test]
    fn test_path_follows_player_tile() {
        let mut session = corridor_session(vec![]);
        let mut pilot = Autopilot::new();
        assert!(pilot.current_path().is_empty());

        let delta = 1.0 / 60.0;
        let intents = pilot.next_intents(&session, delta);
        let path = pilot.current_path().to_vec();
        assert_eq!(path.first(), Some(&Position::new(2, 2)));
        assert_eq!(path.last(), Some(&session.portal().tile()));

        session.tick(delta, &intents).unwrap();
        for _ in 0..300 {
            let intents = pilot.next_intents(&session, delta);
            assert_eq!(pilot.current_path().first(), Some(&session.player_tile()));
            session.tick(delta, &intents).unwrap();
            if session.status() != SessionStatus::Playing {
                break;
            }
        }
        assert!(pilot.current_path().len() < path.len());
    }

    #[test]
    fn test_attacks_enemy_in_front() {
        let mut session = corridor_session(vec![Enemy::new(
            Uuid::from_u128(1),
            WorldPoint::new(48.0, 34.0),
            Behavior::Wait,
            &EnemyTuning::default(),
        )]);
        session.player_mut().facing_angle = 0.0;
        let mut pilot = Autopilot::new();

        let intents = pilot.next_intents(&session, 1.0 / 60.0);
        assert!(intents.attack_pressed);

        session.player_mut().attack_cooldown = 0.2;
        let intents = pilot.next_intents(&session, 1.0 / 60.0);
        assert!(!intents.attack_pressed);
    }

    #[test]
    fn test_closes_full_map() {
        let mut session = corridor_session(vec![]);
        let toggle = InputIntents {
            toggle_map_pressed: true,
            ..Default::default()
        };
        session.tick(0.0, &toggle).unwrap();
        let intents = Autopilot::new().next_intents(&session, 0.1);
        assert!(intents.toggle_map_pressed);
        assert!(!intents.is_moving());
    }

    #[test]
    fn test_idle_once_terminal() {
        let mut session = corridor_session(vec![]);
        session.player_mut().health = 0;
        session.tick(0.0, &InputIntents::idle()).unwrap();
        assert_eq!(session.status(), SessionStatus::PlayerDead);
        let intents = Autopilot::new().next_intents(&session, 0.1);
        assert_eq!(intents, InputIntents::idle());
    }
}
