use crate::traits::{GamepadSnapshot, GamepadSource};

use super::controller::Action;
use super::input_state::{Axes2, InputState};

// Standard gamepad layout
pub const AXIS_LEFT_X: usize = 0;
pub const AXIS_LEFT_Y: usize = 1;
pub const AXIS_RIGHT_X: usize = 2;
pub const AXIS_RIGHT_Y: usize = 3;
pub const BUTTON_RECORD: usize = 0;
pub const BUTTON_DESCEND: usize = 4;
pub const BUTTON_ASCEND: usize = 5;

/// Map a raw device reading in `[min, max]` onto `[-1, 1]`; degenerate ranges read as neutral
pub fn normalize_axis(value: i32, min: i32, max: i32) -> f32 {
    if max <= min {
        return 0.0;
    }
    let span = max as f32 - min as f32;
    let t = (value as f32 - min as f32) / span;
    (t * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Convert one snapshot into input, deadzone applied per axis
pub fn snapshot_to_input(snapshot: &GamepadSnapshot, deadzone: f32) -> InputState {
    let mut input = InputState::neutral();
    input.left_stick = Axes2::new(snapshot.axis(AXIS_LEFT_X), snapshot.axis(AXIS_LEFT_Y))
        .filtered(deadzone);
    input.right_stick = Axes2::new(snapshot.axis(AXIS_RIGHT_X), snapshot.axis(AXIS_RIGHT_Y))
        .filtered(deadzone);
    input.set_held(Action::Record, snapshot.button(BUTTON_RECORD));
    input.set_held(Action::Ascend, snapshot.button(BUTTON_ASCEND));
    input.set_held(Action::Descend, snapshot.button(BUTTON_DESCEND));
    input
}

/// Polls a `GamepadSource` once per tick
pub struct GamepadTracker {
    source: Box<dyn GamepadSource>,
    device_index: usize,
    deadzone: f32,
    connected: bool,
}

impl GamepadTracker {
    pub fn new(source: Box<dyn GamepadSource>, device_index: usize, deadzone: f32) -> Self {
        Self {
            source,
            device_index,
            deadzone,
            connected: false,
        }
    }

    /// Current input; neutral when the device is absent
    pub fn poll(&mut self) -> InputState {
        let snapshot = self.source.snapshot(self.device_index);
        let connected = snapshot.is_some();
        if connected != self.connected {
            if connected {
                log::info!("Gamepad {} connected", self.device_index);
            } else {
                log::info!("Gamepad {} disconnected", self.device_index);
            }
            self.connected = connected;
        }
        snapshot
            .map(|s| snapshot_to_input(&s, self.deadzone))
            .unwrap_or_else(InputState::neutral)
    }
}
