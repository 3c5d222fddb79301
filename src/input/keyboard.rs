// Keyboard input mapping module
//
// Maps host keyboard state onto the two NES controllers. Both players get
// a default binding; simultaneous key presses are tracked through a set of
// currently held keys.

use super::{Button, Controller};
use std::collections::HashSet;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Which player's controller a mapping feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Player 1
    One,
    /// Player 2
    Two,
}

/// Keyboard binding for a single player
#[derive(Debug, Clone)]
pub struct KeyboardMapping {
    /// Key for the A button
    pub button_a: KeyCode,
    /// Key for the B button
    pub button_b: KeyCode,
    /// Key for Select
    pub select: KeyCode,
    /// Key for Start
    pub start: KeyCode,
    /// Key for Up
    pub up: KeyCode,
    /// Key for Down
    pub down: KeyCode,
    /// Key for Left
    pub left: KeyCode,
    /// Key for Right
    pub right: KeyCode,
}

impl KeyboardMapping {
    /// Default Player 1 binding: arrows for the D-pad, X/Z for A/B,
    /// Enter for Start, Right Shift for Select
    pub fn player1_default() -> Self {
        Self {
            button_a: KeyCode::KeyX,
            button_b: KeyCode::KeyZ,
            select: KeyCode::ShiftRight,
            start: KeyCode::Enter,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// Default Player 2 binding: WASD for the D-pad, K/J for A/B,
    /// Y for Start, U for Select
    pub fn player2_default() -> Self {
        Self {
            button_a: KeyCode::KeyK,
            button_b: KeyCode::KeyJ,
            select: KeyCode::KeyU,
            start: KeyCode::KeyY,
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }

    /// The button a key is bound to, if any
    fn get_button(&self, key: KeyCode) -> Option<Button> {
        if key == self.button_a {
            Some(Button::A)
        } else if key == self.button_b {
            Some(Button::B)
        } else if key == self.select {
            Some(Button::Select)
        } else if key == self.start {
            Some(Button::Start)
        } else if key == self.up {
            Some(Button::Up)
        } else if key == self.down {
            Some(Button::Down)
        } else if key == self.left {
            Some(Button::Left)
        } else if key == self.right {
            Some(Button::Right)
        } else {
            None
        }
    }
}

/// Keyboard state tracker feeding both controller snapshots
pub struct KeyboardHandler {
    player1_mapping: KeyboardMapping,
    player2_mapping: KeyboardMapping,
    /// Keys currently held down
    pressed_keys: HashSet<KeyCode>,
}

impl KeyboardHandler {
    /// Create a handler with the default bindings for both players
    pub fn new() -> Self {
        Self {
            player1_mapping: KeyboardMapping::player1_default(),
            player2_mapping: KeyboardMapping::player2_default(),
            pressed_keys: HashSet::new(),
        }
    }

    /// Create a handler with custom bindings
    pub fn with_mappings(player1: KeyboardMapping, player2: KeyboardMapping) -> Self {
        Self {
            player1_mapping: player1,
            player2_mapping: player2,
            pressed_keys: HashSet::new(),
        }
    }

    /// Record a key press
    pub fn handle_key_press(&mut self, key: PhysicalKey) {
        if let PhysicalKey::Code(code) = key {
            self.pressed_keys.insert(code);
        }
    }

    /// Record a key release
    pub fn handle_key_release(&mut self, key: PhysicalKey) {
        if let PhysicalKey::Code(code) = key {
            self.pressed_keys.remove(&code);
        }
    }

    /// Whether a key is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Build the controller snapshot for a player from the held keys
    pub fn get_controller_state(&self, player: Player) -> Controller {
        let mapping = match player {
            Player::One => &self.player1_mapping,
            Player::Two => &self.player2_mapping,
        };

        let mut controller = Controller::new();
        for &key in &self.pressed_keys {
            if let Some(button) = mapping.get_button(key) {
                controller.set_button(button);
            }
        }
        controller
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}
