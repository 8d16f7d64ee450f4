//! # Player Classes
//!
//! The closed set of playable classes and their fixed stat lines.

use crate::{AttackGeometry, DelveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stat line for a player class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassStats {
    /// Starting and maximum health
    pub max_health: i32,
    /// Damage dealt to each enemy an attack hits
    pub attack_damage: i32,
    /// Seconds between permitted attacks
    pub attack_speed: f32,
    /// Nominal reach in world units
    pub attack_range: f32,
}

/// Playable classes. Chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    Archer,
    Mage,
}

const WARRIOR: ClassStats = ClassStats {
    max_health: 15,
    attack_damage: 2,
    attack_speed: 0.4,
    attack_range: 20.0,
};

const ARCHER: ClassStats = ClassStats {
    max_health: 10,
    attack_damage: 1,
    attack_speed: 0.3,
    attack_range: 100.0,
};

const MAGE: ClassStats = ClassStats {
    max_health: 8,
    attack_damage: 3,
    attack_speed: 0.6,
    attack_range: 120.0,
};

impl PlayerClass {
    /// Every class, in menu order.
    pub const ALL: [PlayerClass; 3] = [
        PlayerClass::Warrior,
        PlayerClass::Archer,
        PlayerClass::Mage,
    ];

    /// The class's fixed stat line.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::PlayerClass;
    ///
    /// let stats = PlayerClass::Warrior.stats();
    /// assert_eq!(stats.max_health, 15);
    /// assert_eq!(stats.attack_damage, 2);
    /// ```
    pub fn stats(self) -> ClassStats {
        match self {
            PlayerClass::Warrior => WARRIOR,
            PlayerClass::Archer => ARCHER,
            PlayerClass::Mage => MAGE,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Archer => "Archer",
            PlayerClass::Mage => "Mage",
        }
    }

    /// Shape of this class's attack box for an attacker of side `attacker_size`.
    pub fn attack_geometry(self, attacker_size: f32) -> AttackGeometry {
        match self {
            PlayerClass::Warrior => AttackGeometry {
                length: 16.0,
                thickness: 16.0,
                start_offset: attacker_size / 2.0,
            },
            PlayerClass::Mage => AttackGeometry {
                length: 12.0,
                thickness: 12.0,
                start_offset: attacker_size + 20.0,
            },
            PlayerClass::Archer => AttackGeometry::thin_swing(attacker_size),
        }
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerClass {
    type Err = DelveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DelveError::InvalidConfig(format!("unknown player class '{}'", s)))
    }
}
