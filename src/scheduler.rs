use glam::Vec3;

use crate::core::timer::RateMeter;
use crate::core::{Clock, FixedHz};
use crate::traits::FrameController;
use crate::world::World;

/// Periodic summary for the host's status line
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub controller: &'static str,
    pub fps: f32,
    pub frame: u64,
    pub subject: Vec3,
    pub camera: Vec3,
    pub waypoints: usize,
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {:.1} fps - drone ({:.2}, {:.2}, {:.2}) - {} waypoints",
            self.controller, self.fps, self.subject.x, self.subject.y, self.subject.z, self.waypoints
        )
    }
}

/// Drives one tick per host frame while running.
///
/// The host calls `frame` from its redraw callback and only schedules
/// another redraw when it returns true.
#[derive(Debug)]
pub struct TickScheduler {
    running: bool,
    clock: Clock,
    status_timer: FixedHz,
    rate: RateMeter,
    status: Option<StatusReport>,
}

impl TickScheduler {
    pub fn new(status_hz: f32) -> Self {
        Self {
            running: false,
            clock: Clock::new(),
            status_timer: FixedHz::new(status_hz),
            rate: RateMeter::new(),
            status: None,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        // time spent stopped is not a frame delta
        self.clock.reset();
        self.running = true;
        log::info!("Tick scheduler started");
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!(
                "Tick scheduler stopped after {} frames",
                self.clock.frame_count()
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one tick if running. Returns whether another frame should be requested.
    pub fn frame(&mut self, world: &mut World, controller: &mut dyn FrameController) -> bool {
        if !self.running {
            return false;
        }

        let info = self.clock.tick();
        controller.tick(world);

        self.rate.record(info.delta);
        if self.status_timer.tick(info.delta) {
            let report = StatusReport {
                controller: controller.name(),
                fps: self.rate.take_rate(),
                frame: info.number,
                subject: world.subject.position,
                camera: world.camera.position,
                waypoints: world.recorder.path().len(),
            };
            log::debug!("{}", report);
            self.status = Some(report);
        }

        self.running
    }

    /// Latest status report, if one was produced since the last call
    pub fn take_status(&mut self) -> Option<StatusReport> {
        self.status.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyboardTracker;

    #[derive(Default)]
    struct CountingController {
        keyboard: KeyboardTracker,
        ticks: usize,
    }

    impl FrameController for CountingController {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn keyboard(&mut self) -> &mut KeyboardTracker {
            &mut self.keyboard
        }

        fn tick(&mut self, _world: &mut World) {
            self.ticks += 1;
        }
    }

    #[test]
    fn stopped_scheduler_does_not_tick() {
        let mut scheduler = TickScheduler::new(2.0);
        let mut world = World::default();
        let mut controller = CountingController::default();

        assert!(!scheduler.frame(&mut world, &mut controller));
        assert_eq!(controller.ticks, 0);
        assert_eq!(scheduler.clock.frame_count(), 0);
    }

    #[test]
    fn running_scheduler_ticks_once_per_frame() {
        let mut scheduler = TickScheduler::new(2.0);
        let mut world = World::default();
        let mut controller = CountingController::default();

        scheduler.start();
        for _ in 0..3 {
            assert!(scheduler.frame(&mut world, &mut controller));
        }
        assert_eq!(controller.ticks, 3);
        assert_eq!(scheduler.clock.frame_count(), 3);

        scheduler.stop();
        assert!(!scheduler.is_running());
        assert!(!scheduler.frame(&mut world, &mut controller));
        assert_eq!(controller.ticks, 3);
    }

    #[test]
    fn restart_continues_frame_numbering() {
        let mut scheduler = TickScheduler::new(2.0);
        let mut world = World::default();
        let mut controller = CountingController::default();

        scheduler.start();
        scheduler.frame(&mut world, &mut controller);
        scheduler.stop();
        scheduler.start();
        scheduler.start();
        scheduler.frame(&mut world, &mut controller);
        assert_eq!(scheduler.clock.frame_count(), 2);
    }

    #[test]
    fn status_report_formats() {
        let report = StatusReport {
            controller: "drone-keyboard",
            fps: 59.94,
            frame: 10,
            subject: Vec3::new(1.0, -5.0, 0.25),
            camera: Vec3::ZERO,
            waypoints: 3,
        };
        assert_eq!(
            report.to_string(),
            "drone-keyboard - 59.9 fps - drone (1.00, -5.00, 0.25) - 3 waypoints"
        );
    }
}
