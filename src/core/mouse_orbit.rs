use glam::Vec2;
use std::f32::consts::TAU;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Fraction of the pending drag applied each tick
pub const ORBIT_DAMPING: f32 = 0.05;

/// Pending rotation below this is treated as settled
const REST_EPSILON: f32 = 1e-6;

/// Damped mouse-drag orbit. The left button rotates; there is no pan.
///
/// Cursor motion queues rotation instead of applying it directly. Each
/// `step` hands out `damping` of what is queued and keeps the rest, so the
/// view eases to a stop after the button is released.
#[derive(Debug, Clone)]
pub struct MouseOrbit {
    damping: f32,
    dragging: bool,
    cursor: Option<Vec2>,
    viewport_height: f32,
    /// Rotation still to apply: x is azimuth, y is polar, in radians
    pending: Vec2,
}

impl Default for MouseOrbit {
    fn default() -> Self {
        Self::new(ORBIT_DAMPING)
    }
}

impl MouseOrbit {
    pub fn new(damping: f32) -> Self {
        Self {
            damping: damping.clamp(f32::EPSILON, 1.0),
            dragging: false,
            cursor: None,
            viewport_height: 1.0,
            pending: Vec2::ZERO,
        }
    }

    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.dragging = *state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = Vec2::new(position.x as f32, position.y as f32);
                if let (true, Some(last)) = (self.dragging, self.cursor) {
                    self.drag(cursor - last);
                }
                self.cursor = Some(cursor);
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::Resized(size) => self.set_viewport_height(size.height),
            WindowEvent::Focused(false) => {
                self.dragging = false;
                self.cursor = None;
            }
            _ => {}
        }
    }

    /// Drag sensitivity is relative to the surface height
    pub fn set_viewport_height(&mut self, height: u32) {
        if height > 0 {
            self.viewport_height = height as f32;
        }
    }

    /// Queue rotation for a cursor move of `delta` pixels.
    ///
    /// A drag across the full surface height is one full turn. Dragging
    /// right or down swings the camera left or up.
    pub fn drag(&mut self, delta: Vec2) {
        self.pending -= delta * TAU / self.viewport_height;
    }

    /// Rotation to apply this tick; the remainder decays by the damping factor
    pub fn step(&mut self) -> Vec2 {
        let applied = self.pending * self.damping;
        self.pending -= applied;
        if self.pending.length() < REST_EPSILON {
            self.pending = Vec2::ZERO;
        }
        applied
    }
}
