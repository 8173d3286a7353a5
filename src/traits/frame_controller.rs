use winit::event::WindowEvent;

use crate::core::{KeyboardTracker, MouseOrbit};
use crate::world::World;

/// Per-frame control policy: turns latched input into world updates
pub trait FrameController {
    /// Short name for logs and the status line
    fn name(&self) -> &'static str;

    /// Keyboard state latched between ticks
    fn keyboard(&mut self) -> &mut KeyboardTracker;

    /// Mouse-drag orbit, for controllers that orbit a subject
    fn mouse(&mut self) -> Option<&mut MouseOrbit> {
        None
    }

    /// Run one tick against the world
    fn tick(&mut self, world: &mut World);

    /// Route a window event into the keyboard and mouse trackers
    fn process_event(&mut self, event: &WindowEvent) {
        self.keyboard().process_event(event);
        if let Some(mouse) = self.mouse() {
            mouse.process_event(event);
        }
    }
}
