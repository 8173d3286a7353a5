use crate::core::KeyboardTracker;
use crate::subject::{movement_direction, step};
use crate::traits::FrameController;
use crate::world::World;

/// Keyboard moves the camera itself; the view direction never changes
#[derive(Default)]
pub struct FreeFly {
    keyboard: KeyboardTracker,
}

impl FreeFly {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameController for FreeFly {
    fn name(&self) -> &'static str {
        "free-fly"
    }

    fn keyboard(&mut self) -> &mut KeyboardTracker {
        &mut self.keyboard
    }

    fn tick(&mut self, world: &mut World) {
        let camera = &mut world.camera;
        let direction = movement_direction(
            self.keyboard.state(),
            camera.ground_forward(),
            camera.right(),
            camera.up,
        );
        camera.translate(step(direction, world.config.free_fly_speed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use winit::keyboard::KeyCode;

    #[test]
    fn moves_camera_not_subject() {
        let mut world = World::default();
        let start = world.camera.position;
        let forward = world.camera.ground_forward();
        let mut controller = FreeFly::new();

        controller.keyboard().on_key_down(KeyCode::KeyW);
        controller.tick(&mut world);

        let moved = world.camera.position - start;
        assert!((moved - forward * 0.1).length() < 1e-5);
        assert_eq!(world.subject.position, Vec3::ZERO);
    }

    #[test]
    fn view_direction_is_preserved() {
        let mut world = World::default();
        let before = world.camera.forward();
        let mut controller = FreeFly::new();
        controller.keyboard().on_key_down(KeyCode::KeyA);
        controller.keyboard().on_key_down(KeyCode::Space);
        for _ in 0..10 {
            controller.tick(&mut world);
        }
        assert!((world.camera.forward() - before).length() < 1e-5);
    }

    #[test]
    fn record_key_does_nothing() {
        let mut world = World::default();
        let mut controller = FreeFly::new();
        controller.keyboard().on_key_down(KeyCode::KeyR);
        controller.tick(&mut world);
        assert!(world.recorder.path().is_empty());
    }
}
