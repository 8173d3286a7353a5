pub mod frame_controller;
pub mod gamepad;
pub mod scene;

pub use frame_controller::*;
pub use gamepad::*;
pub use scene::*;
