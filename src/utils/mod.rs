//! # Utilities Module
//!
//! Geometry helpers and tile-grid pathfinding.

pub mod math;
pub mod pathfinding;

pub use self::math::*;
pub use self::pathfinding::*;
