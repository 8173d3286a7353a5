use std::collections::HashSet;

use super::controller::{Action, Controller};

/// Analog values whose magnitude is below this are treated as neutral
pub const DEADZONE: f32 = 0.1;

/// Zero out `value` when `|value| < threshold`, otherwise pass it through unchanged
pub fn apply_deadzone(value: f32, threshold: f32) -> f32 {
    if value.abs() < threshold {
        0.0
    } else {
        value
    }
}

/// One analog stick, each axis in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Axes2 {
    pub x: f32,
    pub y: f32,
}

impl Axes2 {
    pub const ZERO: Axes2 = Axes2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Deadzone applied independently per axis
    pub fn filtered(self, threshold: f32) -> Self {
        Self {
            x: apply_deadzone(self.x, threshold),
            y: apply_deadzone(self.y, threshold),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Componentwise sum, clamped back into range
    pub fn combined(self, other: Axes2) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Latched input for one tick: held actions plus both sticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Action>,
    /// Insertion-ordered copy of `held` for `get_down_actions`
    held_vec: Vec<Action>,
    pub left_stick: Axes2,
    pub right_stick: Axes2,
}

impl InputState {
    /// No device / nothing pressed
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Mark an action held. Returns false if it already was.
    pub fn press(&mut self, action: Action) -> bool {
        if self.held.insert(action) {
            self.held_vec.push(action);
            true
        } else {
            false
        }
    }

    /// Mark an action released. Returns false if it was not held.
    pub fn release(&mut self, action: Action) -> bool {
        if self.held.remove(&action) {
            self.held_vec.retain(|&a| a != action);
            true
        } else {
            false
        }
    }

    pub fn set_held(&mut self, action: Action, held: bool) {
        if held {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.held.is_empty() && self.left_stick.is_zero() && self.right_stick.is_zero()
    }

    /// Union of held actions, sticks summed
    pub fn merged(&self, other: &InputState) -> InputState {
        let mut merged = self.clone();
        for &action in other.get_down_actions() {
            merged.press(action);
        }
        merged.left_stick = self.left_stick.combined(other.left_stick);
        merged.right_stick = self.right_stick.combined(other.right_stick);
        merged
    }
}

impl Controller for InputState {
    fn is_down(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    fn get_down_actions(&self) -> &[Action] {
        &self.held_vec
    }
}
