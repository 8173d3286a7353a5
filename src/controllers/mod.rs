mod drone_follow;
mod free_fly;

pub use drone_follow::DroneFollow;
pub use free_fly::FreeFly;

use crate::config::RigConfig;
use crate::traits::{FrameController, GamepadSource};

/// Control scheme chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ControlMode {
    /// Keyboard flies the camera
    FreeFly,
    /// Keyboard flies the drone, camera follows
    DroneKeyboard,
    /// Gamepad (with keyboard fallback) flies the drone, camera follows
    DroneGamepad,
}

impl ControlMode {
    pub fn build(
        self,
        config: &RigConfig,
        gamepad: Box<dyn GamepadSource>,
    ) -> Box<dyn FrameController> {
        match self {
            ControlMode::FreeFly => Box::new(FreeFly::new()),
            ControlMode::DroneKeyboard => {
                Box::new(DroneFollow::with_keyboard().with_orbit_damping(config.orbit_damping))
            }
            ControlMode::DroneGamepad => Box::new(
                DroneFollow::with_gamepad(gamepad, config.gamepad_index, config.deadzone)
                    .with_orbit_damping(config.orbit_damping),
            ),
        }
    }

    /// Whether this mode follows a subject that should be framed on load
    pub fn follows_subject(self) -> bool {
        !matches!(self, ControlMode::FreeFly)
    }
}
