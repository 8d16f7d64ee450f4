//! # Enemy AI
//!
//! Each enemy carries a fixed [`Behavior`] chosen at spawn. Every tick the player's
//! distance is checked first: inside the perception radius the enemy chases,
//! whatever its behavior. Chasing is a per-tick decision, never stored.
//!
//! | player in view | behavior | tick result                                |
//! |----------------|----------|--------------------------------------------|
//! | yes            | any      | step toward the player ([`EnemyMode::Chase`]) |
//! | no             | Patrol   | wander, re-roll on timer or when blocked   |
//! | no             | Wait     | stand still                                |
//!
//! The AI never deals damage. The session pairs [`Enemy::can_attack`] with
//! [`Enemy::attack`] and applies the hit itself.

use crate::config::EnemyTuning;
use crate::{angle_degrees, new_entity_id, try_move, Behavior, Enemy, Player, TileGrid, WorldPoint};
use log::trace;
use rand::Rng;
use std::f32::consts::TAU;

/// What an enemy did on its last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyMode {
    /// Player within perception radius
    Chase,
    /// Wandering
    Patrol,
    /// Waiting out of sight of the player
    Idle,
}

impl Enemy {
    /// Spawns an enemy, rolling its behavior (and first patrol heading) from `rng`.
    pub fn spawn<R: Rng + ?Sized>(position: WorldPoint, tuning: &EnemyTuning, rng: &mut R) -> Self {
        let id = new_entity_id(rng);
        let behavior = if rng.gen_bool(tuning.patrol_chance) {
            Behavior::Patrol
        } else {
            Behavior::Wait
        };

        let mut enemy = Enemy::new(id, position, behavior, tuning);
        if behavior == Behavior::Patrol {
            enemy.choose_patrol_direction(tuning, rng);
        }
        enemy
    }

    /// Picks a uniformly random heading and a fresh re-roll timer.
    pub fn choose_patrol_direction<R: Rng + ?Sized>(&mut self, tuning: &EnemyTuning, rng: &mut R) {
        let angle: f32 = rng.gen_range(0.0..TAU);
        self.patrol.direction_x = angle.cos();
        self.patrol.direction_y = angle.sin();
        self.patrol.change_timer = rng.gen_range(tuning.patrol_timer_min..tuning.patrol_timer_max);
    }

    /// Whether the player is within the perception radius.
    pub fn can_see(&self, player_position: WorldPoint, tuning: &EnemyTuning) -> bool {
        self.position.distance(player_position) <= tuning.perception_radius
    }

    /// Whether the player is in reach and the attack timer has run out.
    pub fn can_attack(&self, player_position: WorldPoint, tuning: &EnemyTuning) -> bool {
        self.position.distance(player_position) <= tuning.attack_range && self.attack_timer <= 0.0
    }

    /// Restarts the attack timer. The caller applies the damage.
    pub fn attack(&mut self, tuning: &EnemyTuning) {
        self.attack_timer = tuning.attack_cooldown;
    }

    /// Advances this enemy by `delta` seconds.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        delta: f32,
        player: &Player,
        grid: &TileGrid,
        tuning: &EnemyTuning,
        rng: &mut R,
    ) -> EnemyMode {
        self.attack_timer -= delta;

        if self.can_see(player.position, tuning) {
            self.chase(delta, player, grid, tuning);
            EnemyMode::Chase
        } else if self.behavior == Behavior::Patrol {
            self.wander(delta, grid, tuning, rng);
            EnemyMode::Patrol
        } else {
            EnemyMode::Idle
        }
    }

    fn chase(&mut self, delta: f32, player: &Player, grid: &TileGrid, tuning: &EnemyTuning) {
        let dx = player.position.x - self.position.x;
        let dy = player.position.y - self.position.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance == 0.0 || distance <= tuning.min_approach_distance(player.size) {
            return;
        }

        let dir_x = dx / distance;
        let dir_y = dy / distance;
        self.facing_angle = angle_degrees(dir_x, dir_y);

        let step = tuning.speed * delta;
        // No fallback steering: a blocked chase step just waits for the next tick.
        try_move(self, dir_x * step, dir_y * step, grid);
    }

    fn wander<R: Rng + ?Sized>(
        &mut self,
        delta: f32,
        grid: &TileGrid,
        tuning: &EnemyTuning,
        rng: &mut R,
    ) {
        self.patrol.change_timer -= delta;
        if self.patrol.change_timer <= 0.0 {
            self.choose_patrol_direction(tuning, rng);
        }

        self.facing_angle = angle_degrees(self.patrol.direction_x, self.patrol.direction_y);

        let step = tuning.speed * delta;
        let (dx, dy) = (self.patrol.direction_x * step, self.patrol.direction_y * step);
        if !try_move(self, dx, dy, grid) {
            trace!("Enemy {} blocked while patrolling, re-rolling heading", self.id);
            self.choose_patrol_direction(tuning, rng);
        }
    }
}
