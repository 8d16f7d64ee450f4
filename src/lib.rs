//! # Delve
//!
//! Simulation core for a top-down, real-time dungeon crawler.
//!
//! ## Architecture Overview
//!
//! The crate owns everything that decides *what happens* in a run and nothing that
//! decides *how it looks*. A host (renderer, test harness, the bundled headless CLI)
//! drives it once per frame:
//!
//! - **Generation**: rooms carved into an all-wall grid, chained by L-shaped corridors
//! - **World**: an immutable tile grid plus a fog-of-war mask the host fills in
//! - **Entities**: the player (one of three classes) and a handful of enemies
//! - **AI**: a patrol/wait state machine with a per-tick chase override
//! - **Combat**: axis-aligned attack boxes shaped by the player's class
//! - **Session**: fixed per-tick ordering, terminal states and their countdowns
//!
//! All randomness flows through a seeded [`rand::rngs::StdRng`], so a seed fully
//! determines a run given the same sequence of inputs.

pub mod config;
pub mod game;
pub mod generation;
pub mod input;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use utils::*;

pub use config::{EnemyTuning, PlayerTuning, SessionConfig};

/// Core error type for the Delve simulation core.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values cannot produce a playable session
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Checked grid access outside the grid
    #[error("Tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Session state or tick input is invalid
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// The session already ran out its terminal delay
    #[error("Session has already finished")]
    SessionFinished,
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
