use crate::core::{Action, Controller, GamepadTracker, InputState, KeyboardTracker, MouseOrbit};
use crate::traits::{FrameController, GamepadSource};
use crate::world::World;

/// Subject moves with input; the camera orbits it at a fixed radius.
///
/// With a gamepad attached the polled pad state is merged with the keyboard,
/// so the keyboard keeps working when the pad is unplugged. Mouse drags
/// orbit the camera on top of stick input.
pub struct DroneFollow {
    keyboard: KeyboardTracker,
    mouse: MouseOrbit,
    gamepad: Option<GamepadTracker>,
}

impl DroneFollow {
    pub fn with_keyboard() -> Self {
        Self {
            keyboard: KeyboardTracker::new(),
            mouse: MouseOrbit::default(),
            gamepad: None,
        }
    }

    pub fn with_gamepad(source: Box<dyn GamepadSource>, device_index: usize, deadzone: f32) -> Self {
        Self {
            gamepad: Some(GamepadTracker::new(source, device_index, deadzone)),
            ..Self::with_keyboard()
        }
    }

    pub fn with_orbit_damping(mut self, damping: f32) -> Self {
        self.mouse = MouseOrbit::new(damping);
        self
    }

    fn current_input(&mut self) -> InputState {
        let keys = self.keyboard.state();
        match &mut self.gamepad {
            Some(pad) => keys.merged(&pad.poll()),
            None => keys.clone(),
        }
    }
}

impl FrameController for DroneFollow {
    fn name(&self) -> &'static str {
        if self.gamepad.is_some() {
            "drone-gamepad"
        } else {
            "drone-keyboard"
        }
    }

    fn keyboard(&mut self) -> &mut KeyboardTracker {
        &mut self.keyboard
    }

    fn mouse(&mut self) -> Option<&mut MouseOrbit> {
        Some(&mut self.mouse)
    }

    fn tick(&mut self, world: &mut World) {
        let input = self.current_input();
        let speed = world.config.subject_speed;
        let rotation_speed = world.config.rotation_speed;

        world.subject.apply_input(
            &input,
            world.camera.ground_forward(),
            world.camera.right(),
            world.camera.up,
            speed,
        );
        world.sync_drone();
        world.camera.rotate_offset(self.mouse.step());
        world
            .camera
            .orbit(world.subject.position, input.right_stick, rotation_speed);
        world.recorder.update(
            input.is_down(Action::Record),
            world.subject.position,
            &mut world.scene,
        );
    }
}
