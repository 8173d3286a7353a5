/// Raw gamepad state as reported by the host for one device
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    /// Pressed flag per button, standard layout order
    pub buttons: Vec<bool>,
    /// Analog axes in [-1, 1], standard layout order
    pub axes: Vec<f32>,
}

impl GamepadSnapshot {
    pub fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    /// Missing or non-finite axes read as neutral
    pub fn axis(&self, index: usize) -> f32 {
        self.axes
            .get(index)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

/// Gamepad polling - returns `None` when nothing is connected at `index`
pub trait GamepadSource {
    fn snapshot(&mut self, index: usize) -> Option<GamepadSnapshot>;
}

/// Source used when the host has no gamepad support
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGamepad;

impl GamepadSource for NoGamepad {
    fn snapshot(&mut self, _index: usize) -> Option<GamepadSnapshot> {
        None
    }
}
