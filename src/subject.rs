use glam::Vec3;

use crate::core::{Action, Controller, InputState};

/// The followed object (drone)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Subject {
    pub position: Vec3,
}

const fn to_direction(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Raw movement direction for this tick, not yet normalized.
///
/// `forward` and `right` are the camera's ground-plane axes.
pub fn movement_direction(input: &InputState, forward: Vec3, right: Vec3, up: Vec3) -> Vec3 {
    let along_forward = to_direction(
        input.is_down(Action::Forward),
        input.is_down(Action::Backward),
    ) - input.left_stick.y;
    let along_right =
        to_direction(input.is_down(Action::Right), input.is_down(Action::Left)) + input.left_stick.x;
    let along_up = to_direction(input.is_down(Action::Ascend), input.is_down(Action::Descend));

    forward * along_forward + right * along_right + up * along_up
}

/// Fixed-length step along `direction`; zero direction gives a zero step
pub fn step(direction: Vec3, speed: f32) -> Vec3 {
    direction.normalize_or_zero() * speed
}

impl Subject {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Move by one tick of input. Returns the displacement applied.
    pub fn apply_input(
        &mut self,
        input: &InputState,
        forward: Vec3,
        right: Vec3,
        up: Vec3,
        speed: f32,
    ) -> Vec3 {
        let delta = step(movement_direction(input, forward, right, up), speed);
        self.position += delta;
        delta
    }
}
