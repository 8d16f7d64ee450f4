//! # Input Module
//!
//! The per-frame intent struct the host hands to [`crate::GameSession::tick`],
//! plus a key mapper for hosts that poll a keyboard.
//!
//! Movement intents are level-triggered (held keys). Attack, map toggle and quit
//! are edge-triggered (pressed this frame).

use serde::{Deserialize, Serialize};

/// What the player wants to do this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntents {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub attack_pressed: bool,
    pub toggle_map_pressed: bool,
    pub quit_pressed: bool,
}

impl InputIntents {
    /// No input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Just an attack.
    pub fn attack() -> Self {
        Self {
            attack_pressed: true,
            ..Self::default()
        }
    }

    /// Just a quit request.
    pub fn quit() -> Self {
        Self {
            quit_pressed: true,
            ..Self::default()
        }
    }

    /// Unit movement per axis. Up is +y.
    ///
    /// Opposite keys cancel out.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::InputIntents;
    ///
    /// let intents = InputIntents { move_up: true, move_left: true, ..Default::default() };
    /// assert_eq!(intents.movement_axes(), (-1.0, 1.0));
    /// ```
    pub fn movement_axes(&self) -> (f32, f32) {
        let axis = |positive: bool, negative: bool| {
            f32::from(u8::from(positive)) - f32::from(u8::from(negative))
        };
        (
            axis(self.move_right, self.move_left),
            axis(self.move_up, self.move_down),
        )
    }

    /// Whether any movement key is held.
    pub fn is_moving(&self) -> bool {
        self.movement_axes() != (0.0, 0.0)
    }
}

/// Keys the default key map understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    M,
    Escape,
}

/// Translates polled key state into [`InputIntents`].
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether arrow keys move the player alongside WASD
    pub arrow_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a handler with arrow keys enabled.
    pub fn new() -> Self {
        Self {
            arrow_keys_enabled: true,
        }
    }

    /// Builds this frame's intents from the keys currently held and the keys
    /// pressed since the last frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{InputHandler, Key};
    ///
    /// let intents = InputHandler::new().intents(&[Key::W], &[Key::Space]);
    /// assert!(intents.move_up);
    /// assert!(intents.attack_pressed);
    /// ```
    pub fn intents(&self, held: &[Key], pressed: &[Key]) -> InputIntents {
        let arrows = self.arrow_keys_enabled;
        let held_any =
            |wasd: Key, arrow: Key| held.contains(&wasd) || (arrows && held.contains(&arrow));

        InputIntents {
            move_up: held_any(Key::W, Key::Up),
            move_down: held_any(Key::S, Key::Down),
            move_left: held_any(Key::A, Key::Left),
            move_right: held_any(Key::D, Key::Right),
            attack_pressed: pressed.contains(&Key::Space),
            toggle_map_pressed: pressed.contains(&Key::M),
            quit_pressed: pressed.contains(&Key::Escape),
        }
    }
}
