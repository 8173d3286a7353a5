pub mod clock;
pub mod controller;
#[cfg(target_os = "linux")]
pub mod evdev_gamepad;
pub mod gamepad;
pub mod input_adapter;
pub mod input_state;
pub mod mouse_orbit;
pub mod timer;

pub use clock::Clock;
pub use controller::{Action, Controller};
#[cfg(target_os = "linux")]
pub use evdev_gamepad::EvdevGamepads;
pub use gamepad::GamepadTracker;
pub use input_adapter::KeyboardTracker;
pub use input_state::{apply_deadzone, Axes2, InputState, DEADZONE};
pub use mouse_orbit::{MouseOrbit, ORBIT_DAMPING};
pub use timer::FixedHz;
