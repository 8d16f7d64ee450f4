//! # Entities
//!
//! The player and enemy actors. Both occupy an axis-aligned square footprint
//! anchored at their top-left corner.
//!
//! Health and cooldowns are allowed to run negative; only the predicates
//! ([`Actor::is_dead`], [`Player::can_attack`], [`Enemy::can_attack`]) and
//! [`Actor::display_health`] interpret them.

use crate::config::{EnemyTuning, PlayerTuning};
use crate::{Aabb, EntityId, PlayerClass, WorldPoint};
use serde::{Deserialize, Serialize};

/// Behavior shared by everything that moves through the dungeon.
pub trait Actor {
    /// Top-left corner of the footprint.
    fn position(&self) -> WorldPoint;

    /// Moves the footprint. Callers go through [`crate::try_move`] to keep it on empty tiles.
    fn set_position(&mut self, position: WorldPoint);

    /// Side of the square footprint.
    fn size(&self) -> f32;

    /// Raw health, possibly negative.
    fn health(&self) -> i32;

    /// Facing in degrees, 0 = +x.
    fn facing_angle(&self) -> f32;

    /// The actor's footprint box.
    fn footprint(&self) -> Aabb {
        Aabb::square(self.position(), self.size())
    }

    /// Center of the footprint.
    fn center(&self) -> WorldPoint {
        self.footprint().center()
    }

    /// True once health has dropped to zero or below.
    fn is_dead(&self) -> bool {
        self.health() <= 0
    }

    /// Health clamped for HUD display.
    fn display_health(&self) -> i32 {
        self.health().max(0)
    }
}

/// The player-controlled actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub class: PlayerClass,
    pub position: WorldPoint,
    pub size: f32,
    pub health: i32,
    pub max_health: i32,
    pub facing_angle: f32,
    /// Seconds until the next attack is permitted
    pub attack_cooldown: f32,
}

impl Player {
    /// Creates a player with full health for its class.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Actor, Player, PlayerClass, PlayerTuning, WorldPoint};
    ///
    /// let tuning = PlayerTuning::default();
    /// let player = Player::new(PlayerClass::Mage, WorldPoint::new(2.0, 2.0), &tuning);
    /// assert_eq!(player.health(), 8);
    /// assert!(player.can_attack());
    /// ```
    pub fn new(class: PlayerClass, position: WorldPoint, tuning: &PlayerTuning) -> Self {
        let max_health = class.stats().max_health;
        Self {
            class,
            position,
            size: tuning.size,
            health: max_health,
            max_health,
            facing_angle: 0.0,
            attack_cooldown: 0.0,
        }
    }

    /// Whether the attack cooldown has run out.
    pub fn can_attack(&self) -> bool {
        self.attack_cooldown <= 0.0
    }

    /// Subtracts damage from health.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

impl Actor for Player {
    fn position(&self) -> WorldPoint {
        self.position
    }

    fn set_position(&mut self, position: WorldPoint) {
        self.position = position;
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn facing_angle(&self) -> f32 {
        self.facing_angle
    }
}

/// Behavior assigned to an enemy at spawn, fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    /// Wanders, re-rolling its direction on a timer or when blocked
    Patrol,
    /// Stands still until the player comes into view
    Wait,
}

/// Wander state for patrolling enemies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PatrolState {
    /// Unit direction of travel
    pub direction_x: f32,
    pub direction_y: f32,
    /// Seconds until the direction is re-rolled
    pub change_timer: f32,
}

/// A hostile actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: WorldPoint,
    pub size: f32,
    pub health: i32,
    pub facing_angle: f32,
    pub behavior: Behavior,
    /// Seconds until the next hit on the player is permitted
    pub attack_timer: f32,
    pub patrol: PatrolState,
}

impl Enemy {
    /// Creates an enemy with an explicit behavior and no patrol direction yet.
    pub fn new(
        id: EntityId,
        position: WorldPoint,
        behavior: Behavior,
        tuning: &EnemyTuning,
    ) -> Self {
        Self {
            id,
            position,
            size: tuning.size,
            health: tuning.health,
            facing_angle: 0.0,
            behavior,
            attack_timer: 0.0,
            patrol: PatrolState::default(),
        }
    }

    /// Subtracts damage from health.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

impl Actor for Enemy {
    fn position(&self) -> WorldPoint {
        self.position
    }

    fn set_position(&mut self, position: WorldPoint) {
        self.position = position;
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn facing_angle(&self) -> f32 {
        self.facing_angle
    }
}
