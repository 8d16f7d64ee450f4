//! # Game Session
//!
//! One run through one dungeon: the carved grid, the actors in it, the portal,
//! and the terminal countdowns.
//!
//! ## Tick ordering
//!
//! Each call to [`GameSession::tick`] runs, in order:
//! 1. quit and map toggle handling
//! 2. player movement and attack (skipped while the full map is shown)
//! 3. removal of enemies killed by the attack
//! 4. every enemy's AI step, each followed by its contact hit on the player
//! 5. death and portal checks
//!
//! Once the player dies or reaches the portal the world freezes and only the
//! terminal countdown advances. The session is [`SessionStatus::Finished`] on the
//! first tick where the accumulated time reaches the delay, and further ticks are
//! rejected with [`DelveError::SessionFinished`].

use crate::config::SessionConfig;
use crate::generation::utils::create_rng;
use crate::{
    can_occupy, compute_attack_box, resolve_attack, try_move, Actor, AttackFlash, DelveError,
    DelveResult, Dungeon, EncounterGenerator, Enemy, EntityId, ExploredMask, Generator,
    InputIntents, Player, PlayerClass, Portal, Position, Room, RoomCorridorGenerator, TileGrid,
    WorldPoint,
};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Slack when comparing summed frame times against a countdown delay.
///
/// Summing `1/60` in `f32` lands a hair under `3.0` after 180 frames.
const COUNTDOWN_EPSILON: f32 = 1e-4;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// The player died and the death delay ran out
    Died,
    /// The player reached the portal and the teleport delay ran out
    Escaped,
    /// The host asked to leave
    Quit,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Simulation is running
    Playing,
    /// Health reached zero; counting down the death delay
    PlayerDead,
    /// Player entered the portal; counting down the teleport delay
    LevelComplete,
    /// Terminal delay elapsed (or quit). The host should tear the session down.
    Finished(SessionOutcome),
}

impl SessionStatus {
    /// True for the two countdown states.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::PlayerDead | SessionStatus::LevelComplete)
    }
}

/// Things that happened during a tick, for HUD messages and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    EnemyHit {
        enemy: EntityId,
        damage: i32,
        remaining_health: i32,
    },
    EnemyKilled {
        enemy: EntityId,
    },
    PlayerHit {
        by: EntityId,
        damage: i32,
        remaining_health: i32,
    },
    PlayerDied,
    PortalDiscovered,
    LevelCompleted,
    Quit,
}

/// Running totals for the end-of-run summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStatistics {
    /// Ticks simulated, countdown ticks included
    pub ticks: u64,
    /// Simulated seconds
    pub elapsed_seconds: f64,
    /// Attack activations that passed the cooldown check
    pub attacks_made: u32,
    pub enemies_defeated: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    /// World units walked by the player
    pub distance_travelled: f64,
}

impl SessionStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds an event into the totals.
    pub fn update_from_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::EnemyHit { damage, .. } => {
                self.damage_dealt += u64::from(damage.unsigned_abs());
            }
            SessionEvent::EnemyKilled { .. } => {
                self.enemies_defeated += 1;
            }
            SessionEvent::PlayerHit { damage, .. } => {
                self.damage_taken += u64::from(damage.unsigned_abs());
            }
            _ => {}
        }
    }
}

/// A running dungeon session.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    grid: TileGrid,
    rooms: Vec<Room>,
    player: Player,
    enemies: Vec<Enemy>,
    portal: Portal,
    explored: ExploredMask,
    portal_discovered: bool,
    show_full_map: bool,
    attack_flash: Option<AttackFlash>,
    status: SessionStatus,
    /// Seconds spent in the current terminal state
    terminal_elapsed: f32,
    statistics: SessionStatistics,
    events: Vec<SessionEvent>,
    rng: StdRng,
}

impl GameSession {
    /// Generates a dungeon, spawns the player and enemies, and places the portal.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{GameSession, PlayerClass, SessionConfig, SessionStatus};
    ///
    /// let session = GameSession::new(PlayerClass::Archer, SessionConfig::with_seed(42)).unwrap();
    /// assert_eq!(session.status(), SessionStatus::Playing);
    /// assert_eq!(session.enemies().len(), 5);
    /// assert_eq!(session.player().health, 10);
    /// ```
    pub fn new(class: PlayerClass, config: SessionConfig) -> DelveResult<Self> {
        config.validate()?;
        let mut rng = create_rng(&config.generation);

        let dungeon = RoomCorridorGenerator::new().generate(&config.generation, &mut rng)?;
        let goal = dungeon
            .goal_room()
            .ok_or_else(|| DelveError::GenerationFailed("dungeon has no rooms".to_string()))?;
        let portal = Portal::in_room(goal, config.portal_size);

        let placer = EncounterGenerator::new(&dungeon.grid, config.enemy_count);
        let plan = placer.generate(&config.generation, &mut rng)?;
        placer.validate(&plan, &config.generation)?;

        let player = Player::new(
            class,
            plan.player_tile.centered_in_tile(config.player.size),
            &config.player,
        );
        let enemies: Vec<Enemy> = plan
            .enemy_tiles
            .iter()
            .map(|tile| {
                let position = tile.centered_in_tile(config.enemy.size);
                Enemy::spawn(position, &config.enemy, &mut rng)
            })
            .collect();

        info!(
            "New {} session (seed {}): {} rooms, {} enemies, portal at tile {:?}",
            class,
            config.seed(),
            dungeon.rooms.len(),
            enemies.len(),
            portal.tile()
        );

        Self::assemble(config, dungeon, player, enemies, portal, rng)
    }

    /// Builds a session around a hand-made layout.
    ///
    /// The player must start on a position it could legally occupy.
    pub fn from_parts(
        class: PlayerClass,
        config: SessionConfig,
        dungeon: Dungeon,
        player_position: WorldPoint,
        enemies: Vec<Enemy>,
        portal: Portal,
    ) -> DelveResult<Self> {
        config.validate()?;
        let rng = create_rng(&config.generation);
        let player = Player::new(class, player_position, &config.player);
        Self::assemble(config, dungeon, player, enemies, portal, rng)
    }

    fn assemble(
        config: SessionConfig,
        dungeon: Dungeon,
        player: Player,
        enemies: Vec<Enemy>,
        portal: Portal,
        rng: StdRng,
    ) -> DelveResult<Self> {
        if !can_occupy(&dungeon.grid, player.position, player.size) {
            return Err(DelveError::InvalidState(format!(
                "player cannot stand at ({}, {})",
                player.position.x, player.position.y
            )));
        }

        let explored = ExploredMask::new(dungeon.grid.width(), dungeon.grid.height());
        Ok(Self {
            config,
            grid: dungeon.grid,
            rooms: dungeon.rooms,
            player,
            enemies,
            portal,
            explored,
            portal_discovered: false,
            show_full_map: false,
            attack_flash: None,
            status: SessionStatus::Playing,
            terminal_elapsed: 0.0,
            statistics: SessionStatistics::new(),
            events: Vec::new(),
            rng,
        })
    }

    /// Advances the session by `delta` seconds.
    pub fn tick(&mut self, delta: f32, input: &InputIntents) -> DelveResult<SessionStatus> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(DelveError::InvalidState(format!(
                "tick delta must be a finite, non-negative number of seconds (got {})",
                delta
            )));
        }
        if let SessionStatus::Finished(_) = self.status {
            return Err(DelveError::SessionFinished);
        }

        self.statistics.ticks += 1;
        self.statistics.elapsed_seconds += f64::from(delta);
        self.fade_attack_flash(delta);

        if self.status.is_terminal() {
            self.advance_countdown(delta);
            return Ok(self.status);
        }

        if input.quit_pressed {
            info!("Session quit after {} ticks", self.statistics.ticks);
            self.push_event(SessionEvent::Quit);
            self.status = SessionStatus::Finished(SessionOutcome::Quit);
            return Ok(self.status);
        }

        if input.toggle_map_pressed {
            self.show_full_map = !self.show_full_map;
            debug!("Full map {}", if self.show_full_map { "shown" } else { "hidden" });
        }

        if !self.show_full_map {
            self.player.attack_cooldown -= delta;
            self.move_player(delta, input);
            if input.attack_pressed {
                self.player_attack();
            }
        }

        self.cull_dead_enemies();
        self.update_enemies(delta);
        self.check_terminal_conditions();

        Ok(self.status)
    }

    fn move_player(&mut self, delta: f32, input: &InputIntents) {
        let (axis_x, axis_y) = input.movement_axes();
        let step = self.config.player.speed * delta;
        let (dx, dy) = (axis_x * step, axis_y * step);
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        if try_move(&mut self.player, dx, dy, &self.grid) {
            self.player.facing_angle = crate::angle_degrees(dx, dy);
            self.statistics.distance_travelled += f64::from((dx * dx + dy * dy).sqrt());
        }
    }

    fn player_attack(&mut self) {
        if !self.player.can_attack() {
            trace!("Attack ignored, {:.2}s of cooldown left", self.player.attack_cooldown);
            return;
        }

        let stats = self.player.class.stats();
        let geometry = self.player.class.attack_geometry(self.player.size);
        let attack_box = compute_attack_box(
            self.player.position,
            self.player.size,
            self.player.facing_angle,
            &geometry,
        );

        let report = resolve_attack(&attack_box, &mut self.enemies, stats.attack_damage);

        self.player.attack_cooldown = stats.attack_speed;
        self.attack_flash = Some(AttackFlash {
            attack_box,
            remaining: self.config.player.attack_flash_seconds,
        });
        self.statistics.attacks_made += 1;

        for id in &report.hits {
            let remaining_health = self
                .enemies
                .iter()
                .find(|e| e.id == *id)
                .map(|e| e.health)
                .unwrap_or(0);
            self.push_event(SessionEvent::EnemyHit {
                enemy: *id,
                damage: stats.attack_damage,
                remaining_health,
            });
        }
        for id in report.kills {
            self.push_event(SessionEvent::EnemyKilled { enemy: id });
        }
    }

    fn cull_dead_enemies(&mut self) {
        let before = self.enemies.len();
        self.enemies.retain(|enemy| !enemy.is_dead());
        let removed = before - self.enemies.len();
        if removed > 0 {
            debug!("Removed {} dead enemies, {} left", removed, self.enemies.len());
        }
    }

    fn update_enemies(&mut self, delta: f32) {
        let tuning = &self.config.enemy;
        for enemy in self.enemies.iter_mut() {
            let mode = enemy.update(delta, &self.player, &self.grid, tuning, &mut self.rng);
            trace!("Enemy {} in {:?} mode", enemy.id, mode);

            if enemy.can_attack(self.player.position, tuning) {
                enemy.attack(tuning);
                self.player.take_damage(tuning.contact_damage);
                let event = SessionEvent::PlayerHit {
                    by: enemy.id,
                    damage: tuning.contact_damage,
                    remaining_health: self.player.health,
                };
                self.statistics.update_from_event(&event);
                self.events.push(event);
            }
        }
    }

    fn check_terminal_conditions(&mut self) {
        if self.player.is_dead() {
            info!("Player died after {:.1}s", self.statistics.elapsed_seconds);
            self.enter_terminal(SessionStatus::PlayerDead);
            self.push_event(SessionEvent::PlayerDied);
        } else if self.portal.contains_player(self.player.position, self.player.size) {
            info!("Player reached the portal after {:.1}s", self.statistics.elapsed_seconds);
            self.enter_terminal(SessionStatus::LevelComplete);
            self.push_event(SessionEvent::LevelCompleted);
        }
    }

    fn enter_terminal(&mut self, status: SessionStatus) {
        self.status = status;
        self.terminal_elapsed = 0.0;
    }

    fn advance_countdown(&mut self, delta: f32) {
        self.terminal_elapsed += delta;
        let (delay, outcome) = match self.status {
            SessionStatus::PlayerDead => (self.config.death_delay_seconds, SessionOutcome::Died),
            SessionStatus::LevelComplete => {
                (self.config.portal_delay_seconds, SessionOutcome::Escaped)
            }
            _ => return,
        };

        if self.terminal_elapsed + COUNTDOWN_EPSILON >= delay {
            info!("Session finished: {:?}", outcome);
            self.status = SessionStatus::Finished(outcome);
        }
    }

    fn fade_attack_flash(&mut self, delta: f32) {
        if let Some(flash) = self.attack_flash.as_mut() {
            flash.remaining -= delta;
            if flash.remaining <= 0.0 {
                self.attack_flash = None;
            }
        }
    }

    fn push_event(&mut self, event: SessionEvent) {
        self.statistics.update_from_event(&event);
        self.events.push(event);
    }

    /// Marks every tile within Chebyshev `radius` of `center` as explored.
    ///
    /// Returns true if this call is the one that discovered the portal.
    pub fn mark_explored(&mut self, center: Position, radius: i32) -> bool {
        let touched = self.explored.reveal_square(center, radius);
        if self.portal_discovered {
            return false;
        }

        let portal = self.portal;
        if touched.into_iter().any(|tile| portal.is_revealed_by(tile)) {
            info!("Portal discovered");
            self.portal_discovered = true;
            self.push_event(SessionEvent::PortalDiscovered);
            return true;
        }
        false
    }

    /// Reveals the configured radius around the player's tile.
    pub fn reveal_around_player(&mut self) -> bool {
        let center = self.player_tile();
        self.mark_explored(center, self.config.explore_radius)
    }

    /// Tile under the player's center.
    pub fn player_tile(&self) -> Position {
        self.player.center().to_tile()
    }

    /// Takes every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player access for scripted scenarios.
    ///
    /// Position changes made here bypass collision.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Mutable enemy access for scripted scenarios.
    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn portal(&self) -> &Portal {
        &self.portal
    }

    pub fn explored(&self) -> &ExploredMask {
        &self.explored
    }

    pub fn portal_discovered(&self) -> bool {
        self.portal_discovered
    }

    pub fn show_full_map(&self) -> bool {
        self.show_full_map
    }

    /// The last attack box, while it is still on display.
    pub fn attack_flash(&self) -> Option<&AttackFlash> {
        self.attack_flash.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_player_dead(&self) -> bool {
        self.status == SessionStatus::PlayerDead
            || self.status == SessionStatus::Finished(SessionOutcome::Died)
    }

    pub fn is_level_completed(&self) -> bool {
        self.status == SessionStatus::LevelComplete
            || self.status == SessionStatus::Finished(SessionOutcome::Escaped)
    }

    /// Seconds left on the active terminal countdown, if one is running.
    pub fn terminal_delay_remaining(&self) -> Option<f32> {
        let delay = match self.status {
            SessionStatus::PlayerDead => self.config.death_delay_seconds,
            SessionStatus::LevelComplete => self.config.portal_delay_seconds,
            _ => return None,
        };
        Some((delay - self.terminal_elapsed).max(0.0))
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// HUD health line, e.g. `HP: 12/15`.
    pub fn health_text(&self) -> String {
        format!(
            "HP: {}/{}",
            self.player.display_health(),
            self.player.max_health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyTuning;
    use crate::{Behavior, TileType};
    use uuid::Uuid;

    /// 20x20 grid with one open room covering tiles 1..=18.
    fn open_dungeon() -> Dungeon {
        let mut grid = TileGrid::new(20, 20);
        let room = Room::new(0, Position::new(1, 1), 18, 18);
        grid.fill_rect(room.top_left, room.width, room.height, TileType::Empty);
        Dungeon::from_parts(grid, vec![room])
    }

    fn far_portal() -> Portal {
        Portal::in_tile(Position::new(17, 17), 20.0)
    }

    fn session_with(enemies: Vec<Enemy>) -> GameSession {
        GameSession::from_parts(
            PlayerClass::Warrior,
            SessionConfig::with_seed(9),
            open_dungeon(),
            WorldPoint::new(100.0, 100.0),
            enemies,
            far_portal(),
        )
        .unwrap()
    }

    fn waiting_enemy(x: f32, y: f32, n: u128) -> Enemy {
        Enemy::new(
            Uuid::from_u128(n),
            WorldPoint::new(x, y),
            Behavior::Wait,
            &EnemyTuning::default(),
        )
    }

    #[test]
    fn test_generated_session_is_consistent() {
        let session = GameSession::new(PlayerClass::Mage, SessionConfig::with_seed(1234)).unwrap();
        let player = session.player();
        assert!(can_occupy(session.grid(), player.position, player.size));
        for enemy in session.enemies() {
            assert!(can_occupy(session.grid(), enemy.position, enemy.size));
        }
        let goal = session.rooms().last().unwrap();
        assert_eq!(session.portal().tile(), goal.center());
    }

    #[test]
    fn test_player_moves_up_as_positive_y() {
        let mut session = session_with(vec![]);
        let input = InputIntents {
            move_up: true,
            ..Default::default()
        };
        session.tick(0.1, &input).unwrap();
        assert_eq!(session.player().position, WorldPoint::new(100.0, 115.0));
        assert!((session.player().facing_angle - 90.0).abs() < 1e-4);
        assert!((session.statistics().distance_travelled - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_blocked_move_keeps_facing() {
        let mut session = GameSession::from_parts(
            PlayerClass::Warrior,
            SessionConfig::with_seed(9),
            open_dungeon(),
            WorldPoint::new(16.0, 100.0),
            vec![],
            far_portal(),
        )
        .unwrap();
        let input = InputIntents {
            move_left: true,
            ..Default::default()
        };
        session.tick(0.1, &input).unwrap();
        assert_eq!(session.player().position, WorldPoint::new(16.0, 100.0));
        assert_eq!(session.player().facing_angle, 0.0);
    }

    #[test]
    fn test_attack_sets_cooldown_and_flash() {
        let mut session = session_with(vec![waiting_enemy(114.0, 100.0, 1)]);
        session.tick(0.0, &InputIntents::attack()).unwrap();

        assert_eq!(session.enemies()[0].health, 1);
        assert_eq!(session.player().attack_cooldown, 0.4);
        assert!(session.attack_flash().is_some());
        assert_eq!(session.statistics().attacks_made, 1);
        assert_eq!(session.statistics().damage_dealt, 2);

        // Cooldown still running: no damage.
        session.tick(0.1, &InputIntents::attack()).unwrap();
        assert_eq!(session.enemies()[0].health, 1);
        assert_eq!(session.statistics().attacks_made, 1);
    }

    #[test]
    fn test_killed_enemy_removed_same_tick() {
        let mut session = session_with(vec![waiting_enemy(114.0, 100.0, 1)]);
        session.enemies_mut()[0].health = 2;
        session.tick(0.0, &InputIntents::attack()).unwrap();
        assert!(session.enemies().is_empty());
        let events = session.drain_events();
        assert!(events.contains(&SessionEvent::EnemyKilled {
            enemy: Uuid::from_u128(1)
        }));
        assert_eq!(session.statistics().enemies_defeated, 1);
    }

    #[test]
    fn test_flash_fades() {
        let mut session = session_with(vec![]);
        session.tick(0.0, &InputIntents::attack()).unwrap();
        session.tick(0.1, &InputIntents::idle()).unwrap();
        assert!(session.attack_flash().is_some());
        session.tick(0.1, &InputIntents::idle()).unwrap();
        assert!(session.attack_flash().is_none());
    }

    #[test]
    fn test_map_toggle_blocks_control() {
        let mut session = session_with(vec![]);
        let toggle = InputIntents {
            toggle_map_pressed: true,
            move_right: true,
            ..Default::default()
        };
        session.tick(0.1, &toggle).unwrap();
        assert!(session.show_full_map());
        assert_eq!(session.player().position, WorldPoint::new(100.0, 100.0));

        session.tick(0.1, &toggle).unwrap();
        assert!(!session.show_full_map());
        assert_eq!(session.player().position, WorldPoint::new(115.0, 100.0));
    }

    #[test]
    fn test_cooldown_paused_while_map_shown() {
        let mut session = session_with(vec![]);
        session.player_mut().attack_cooldown = 0.3;
        let toggle = InputIntents {
            toggle_map_pressed: true,
            ..Default::default()
        };
        session.tick(0.1, &toggle).unwrap();
        session.tick(0.1, &InputIntents::idle()).unwrap();
        assert_eq!(session.player().attack_cooldown, 0.3);

        session.tick(0.1, &toggle).unwrap();
        assert!((session.player().attack_cooldown - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_contact_damage() {
        let mut session = session_with(vec![waiting_enemy(110.0, 100.0, 7)]);
        session.tick(0.1, &InputIntents::idle()).unwrap();
        assert_eq!(session.player().health, 14);
        assert_eq!(session.statistics().damage_taken, 1);
        assert_eq!(session.enemies()[0].attack_timer, 1.0);

        // Timer still running on the next tick.
        session.tick(0.1, &InputIntents::idle()).unwrap();
        assert_eq!(session.player().health, 14);
    }

    #[test]
    fn test_quit_finishes_immediately() {
        let mut session = session_with(vec![]);
        let status = session.tick(0.016, &InputIntents::quit()).unwrap();
        assert_eq!(status, SessionStatus::Finished(SessionOutcome::Quit));
        assert!(matches!(
            session.tick(0.016, &InputIntents::idle()),
            Err(DelveError::SessionFinished)
        ));
    }

    #[test]
    fn test_bad_delta_rejected() {
        let mut session = session_with(vec![]);
        assert!(matches!(
            session.tick(-0.1, &InputIntents::idle()),
            Err(DelveError::InvalidState(_))
        ));
        assert!(session.tick(f32::NAN, &InputIntents::idle()).is_err());
        assert_eq!(session.statistics().ticks, 0);
    }

    #[test]
    fn test_portal_discovery_once() {
        let mut session = session_with(vec![]);
        assert!(!session.mark_explored(Position::new(3, 3), 2));
        assert!(!session.portal_discovered());

        assert!(session.mark_explored(Position::new(15, 15), 1));
        assert!(session.portal_discovered());
        assert!(!session.mark_explored(Position::new(17, 17), 1));

        let discoveries = session
            .drain_events()
            .into_iter()
            .filter(|e| *e == SessionEvent::PortalDiscovered)
            .count();
        assert_eq!(discoveries, 1);
    }

    #[test]
    fn test_invalid_start_rejected() {
        let result = GameSession::from_parts(
            PlayerClass::Archer,
            SessionConfig::with_seed(1),
            open_dungeon(),
            WorldPoint::new(0.0, 0.0),
            vec![],
            far_portal(),
        );
        assert!(matches!(result, Err(DelveError::InvalidState(_))));
    }

    #[test]
    fn test_health_text_clamps() {
        let mut session = session_with(vec![]);
        session.player_mut().health = -3;
        assert_eq!(session.health_text(), "HP: 0/15");
    }
}
