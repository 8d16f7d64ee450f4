//! # Combat
//!
//! Player attacks are resolved as a single axis-aligned box placed in front of
//! the attacker. The box stays axis-aligned at every facing angle: its extents
//! are the absolute world-axis projections of the swing's length and thickness,
//! not a rotated rectangle.

use crate::{unit_vector, Aabb, Actor, Enemy, EntityId, WorldPoint};
use log::debug;
use serde::{Deserialize, Serialize};

/// Shape of an attack relative to the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackGeometry {
    /// Extent along the facing direction
    pub length: f32,
    /// Extent across the facing direction
    pub thickness: f32,
    /// Distance from the attacker's center to the near edge of the box
    pub start_offset: f32,
}

impl AttackGeometry {
    /// Long, thin forward swing used by classes without their own shape.
    pub fn thin_swing(attacker_size: f32) -> Self {
        Self {
            length: 100.0,
            thickness: 8.0,
            start_offset: attacker_size / 2.0,
        }
    }
}

/// Computes the attack box for an attacker at `position` facing `facing_angle` degrees.
///
/// # Examples
///
/// ```
/// use delve::{compute_attack_box, Aabb, PlayerClass, WorldPoint};
///
/// let geometry = PlayerClass::Warrior.attack_geometry(12.0);
/// let attack = compute_attack_box(WorldPoint::new(100.0, 100.0), 12.0, 0.0, &geometry);
/// assert_eq!(attack, Aabb::new(112.0, 98.0, 16.0, 16.0));
/// ```
pub fn compute_attack_box(
    position: WorldPoint,
    size: f32,
    facing_angle: f32,
    geometry: &AttackGeometry,
) -> Aabb {
    let (forward_x, forward_y) = unit_vector(facing_angle);
    let (right_x, right_y) = (-forward_y, forward_x);

    let center_x = position.x + size / 2.0;
    let center_y = position.y + size / 2.0;

    let edge_x = center_x + forward_x * geometry.start_offset;
    let edge_y = center_y + forward_y * geometry.start_offset;

    let box_center_x = edge_x + forward_x * (geometry.length / 2.0);
    let box_center_y = edge_y + forward_y * (geometry.length / 2.0);

    let w = (forward_x * geometry.length + right_x * geometry.thickness).abs();
    let h = (forward_y * geometry.length + right_y * geometry.thickness).abs();

    Aabb::new(box_center_x - w / 2.0, box_center_y - h / 2.0, w, h)
}

/// Outcome of one attack activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackReport {
    /// Every enemy the box overlapped
    pub hits: Vec<EntityId>,
    /// The subset of `hits` whose health reached zero
    pub kills: Vec<EntityId>,
    /// Total health removed
    pub damage_dealt: i64,
}

/// Applies `damage` to every living enemy whose footprint strictly overlaps `attack_box`.
///
/// Dead enemies stay in the slice; the caller culls them at its own removal point.
pub fn resolve_attack(attack_box: &Aabb, enemies: &mut [Enemy], damage: i32) -> AttackReport {
    let mut report = AttackReport::default();

    for enemy in enemies.iter_mut().filter(|e| !e.is_dead()) {
        if !attack_box.overlaps(&enemy.footprint()) {
            continue;
        }

        enemy.take_damage(damage);
        report.hits.push(enemy.id);
        report.damage_dealt += i64::from(damage);
        debug!(
            "Hit enemy {} for {} ({} health left)",
            enemy.id,
            damage,
            enemy.display_health()
        );

        if enemy.is_dead() {
            report.kills.push(enemy.id);
        }
    }

    report
}

/// The last attack box, kept around briefly so the host can draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackFlash {
    pub attack_box: Aabb,
    /// Seconds of display time left
    pub remaining: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyTuning;
    use crate::{Behavior, PlayerClass};
    use uuid::Uuid;

    fn enemy_at(x: f32, y: f32, n: u128) -> Enemy {
        Enemy::new(
            Uuid::from_u128(n),
            WorldPoint::new(x, y),
            Behavior::Wait,
            &EnemyTuning::default(),
        )
    }

    fn approx(a: Aabb, b: Aabb) -> bool {
        (a.x - b.x).abs() < 1e-3
            && (a.y - b.y).abs() < 1e-3
            && (a.w - b.w).abs() < 1e-3
            && (a.h - b.h).abs() < 1e-3
    }

    #[test]
    fn test_thin_swing_facing_right() {
        let geometry = AttackGeometry::thin_swing(12.0);
        let attack = compute_attack_box(WorldPoint::new(0.0, 0.0), 12.0, 0.0, &geometry);
        assert_eq!(attack, Aabb::new(12.0, 2.0, 100.0, 8.0));
    }

    #[test]
    fn test_box_rotates_with_facing() {
        let geometry = AttackGeometry::thin_swing(12.0);
        let up = compute_attack_box(WorldPoint::new(0.0, 0.0), 12.0, 90.0, &geometry);
        assert!(approx(up, Aabb::new(2.0, 12.0, 8.0, 100.0)));

        let left = compute_attack_box(WorldPoint::new(0.0, 0.0), 12.0, 180.0, &geometry);
        assert!(approx(left, Aabb::new(-100.0, 2.0, 100.0, 8.0)));
    }

    #[test]
    fn test_diagonal_extents_sum_before_abs() {
        // |fx*L + rx*T| and |fy*L + ry*T|, not |fx*L| + |rx*T|.
        let geometry = AttackGeometry::thin_swing(12.0);
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let reach = 6.0 + half * 6.0 + half * 50.0;

        let up_right = compute_attack_box(WorldPoint::new(0.0, 0.0), 12.0, 45.0, &geometry);
        assert!((up_right.w - 65.05).abs() < 1e-2);
        assert!((up_right.h - 76.37).abs() < 1e-2);
        assert!((up_right.x + up_right.w / 2.0 - reach).abs() < 1e-3);
        assert!((up_right.y + up_right.h / 2.0 - reach).abs() < 1e-3);

        let up_left = compute_attack_box(WorldPoint::new(0.0, 0.0), 12.0, 135.0, &geometry);
        assert!((up_left.w - 76.37).abs() < 1e-2);
        assert!((up_left.h - 65.05).abs() < 1e-2);
        assert!((up_left.x + up_left.w / 2.0 - (12.0 - reach)).abs() < 1e-3);
        assert!((up_left.y + up_left.h / 2.0 - reach).abs() < 1e-3);
    }

    #[test]
    fn test_mage_burst_is_offset() {
        let geometry = PlayerClass::Mage.attack_geometry(12.0);
        let attack = compute_attack_box(WorldPoint::new(0.0, 0.0), 12.0, 0.0, &geometry);
        // Center 6 + offset 32 = near edge at 38.
        assert_eq!(attack, Aabb::new(38.0, 0.0, 12.0, 12.0));
    }

    #[test]
    fn test_warrior_hit_leaves_enemy_alive() {
        let geometry = PlayerClass::Warrior.attack_geometry(12.0);
        let attack = compute_attack_box(WorldPoint::new(100.0, 100.0), 12.0, 0.0, &geometry);
        let mut enemies = vec![enemy_at(114.0, 100.0, 1)];

        let damage = PlayerClass::Warrior.stats().attack_damage;
        let report = resolve_attack(&attack, &mut enemies, damage);

        assert_eq!(enemies[0].health, 1);
        assert!(!enemies[0].is_dead());
        assert_eq!(report.hits, vec![Uuid::from_u128(1)]);
        assert!(report.kills.is_empty());
        assert_eq!(report.damage_dealt, 2);
    }

    #[test]
    fn test_attack_hits_every_overlapping_enemy() {
        let attack = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let mut enemies = vec![
            enemy_at(5.0, 5.0, 1),
            enemy_at(30.0, 30.0, 2),
            enemy_at(200.0, 200.0, 3),
        ];

        let report = resolve_attack(&attack, &mut enemies, 3);

        assert_eq!(report.hits.len(), 2);
        assert_eq!(report.kills.len(), 2);
        assert_eq!(enemies[2].health, 3);
    }

    #[test]
    fn test_touching_edge_is_not_a_hit() {
        let attack = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let mut enemies = vec![enemy_at(10.0, 0.0, 1)];
        let report = resolve_attack(&attack, &mut enemies, 1);
        assert!(report.hits.is_empty());
        assert_eq!(enemies[0].health, 3);
    }

    #[test]
    fn test_dead_enemies_are_skipped() {
        let attack = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let mut enemies = vec![enemy_at(5.0, 5.0, 1)];
        enemies[0].health = 0;
        let report = resolve_attack(&attack, &mut enemies, 1);
        assert!(report.hits.is_empty());
        assert_eq!(enemies[0].health, 0);
    }
}
