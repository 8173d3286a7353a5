use glam::Vec3;
use winit::keyboard::KeyCode;

use dronecam::controllers::DroneFollow;
use dronecam::math::CatmullRomCurve;
use dronecam::path::PathRecorder;
use dronecam::scene::SceneGraph;
use dronecam::traits::FrameController;
use dronecam::World;

#[cfg(test)]
mod path_tests {
    use super::*;

    #[test]
    fn test_two_trigger_edges_build_curve_through_both_points() {
        let mut scene = SceneGraph::new();
        let mut recorder = PathRecorder::new(100);

        assert!(recorder.update(true, Vec3::new(1.0, 0.0, 0.0), &mut scene));
        assert!(recorder.curve_node().is_none());
        assert!(!recorder.update(false, Vec3::new(1.5, 0.0, 0.0), &mut scene));
        assert!(recorder.update(true, Vec3::new(2.0, 0.0, 0.0), &mut scene));

        assert_eq!(
            recorder.path().points(),
            &[Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)]
        );

        let curves: Vec<_> = scene.curves().collect();
        assert_eq!(curves.len(), 1);
        let points = curves[0];
        assert_eq!(points.len(), 101);
        assert!((points[0] - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((points[100] - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
        for p in points {
            assert!(p.y.abs() < 1e-5 && p.z.abs() < 1e-5);
        }
    }

    #[test]
    fn test_duplicate_waypoint_gives_degenerate_curve() {
        let mut scene = SceneGraph::new();
        let mut recorder = PathRecorder::new(100);
        let spot = Vec3::new(0.5, 2.0, -1.0);

        recorder.update(true, spot, &mut scene);
        recorder.update(false, spot, &mut scene);
        recorder.update(true, spot, &mut scene);

        assert_eq!(recorder.path().len(), 2);
        let curves: Vec<_> = scene.curves().collect();
        assert_eq!(curves.len(), 1);
        assert!(curves[0].iter().all(|p| (*p - spot).length() < 1e-5));
    }

    #[test]
    fn test_holding_record_key_records_once() {
        let mut world = World::default();
        let mut controller = DroneFollow::with_keyboard();

        controller.keyboard().on_key_down(KeyCode::KeyR);
        for _ in 0..30 {
            controller.tick(&mut world);
        }
        assert_eq!(world.recorder.path().len(), 1);

        controller.keyboard().on_key_up(KeyCode::KeyR);
        controller.keyboard().on_key_down(KeyCode::KeyW);
        for _ in 0..10 {
            controller.tick(&mut world);
        }
        controller.keyboard().on_key_down(KeyCode::KeyR);
        controller.tick(&mut world);

        assert_eq!(world.recorder.path().len(), 2);
        assert_eq!(world.scene.curves().count(), 1);
    }

    #[test]
    fn test_curve_is_replaced_not_accumulated() {
        let mut scene = SceneGraph::new();
        let mut recorder = PathRecorder::new(16);

        for i in 0..5 {
            recorder.update(true, Vec3::new(i as f32, 0.0, 0.0), &mut scene);
            recorder.update(false, Vec3::ZERO, &mut scene);
        }

        assert_eq!(scene.curves().count(), 1);
        assert_eq!(recorder.marker_nodes().len(), 5);
        let curve = recorder.curve_node().and_then(|id| scene.get(id));
        assert!(curve.is_some());
    }

    #[test]
    fn test_spline_passes_through_interior_waypoints() {
        let waypoints = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(3.0, 2.0, 1.0),
            Vec3::new(4.0, 0.0, 1.0),
        ];
        let curve = CatmullRomCurve::new(waypoints.clone());
        let samples = curve.sample(99);

        assert_eq!(samples.len(), 100);
        for (i, w) in waypoints.iter().enumerate() {
            let sample = samples[i * 33];
            assert!((sample - *w).length() < 1e-4, "waypoint {} missed: {:?}", i, sample);
        }
    }
}
