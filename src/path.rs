use glam::Vec3;

use crate::math::{CatmullRomCurve, DEFAULT_SEGMENTS};
use crate::scene::{Node, NodeId};
use crate::traits::SceneSink;

pub const PATH_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const MARKER_RADIUS: f32 = 0.1;

/// Recorded waypoints. Append-only: there is no removal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointPath {
    points: Vec<Vec3>,
}

impl WaypointPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sampled curve through every waypoint, `None` until there are two
    pub fn sample_curve(&self, segments: usize) -> Option<Vec<Vec3>> {
        if self.points.len() < 2 {
            return None;
        }
        Some(CatmullRomCurve::new(self.points.clone()).sample(segments))
    }
}

/// Appends the subject position on each rising edge of the record input and
/// keeps one curve node in the scene in sync with the path.
#[derive(Debug)]
pub struct PathRecorder {
    path: WaypointPath,
    segments: usize,
    was_pressed: bool,
    curve: Option<NodeId>,
    markers: Vec<NodeId>,
}

impl Default for PathRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENTS)
    }
}

impl PathRecorder {
    pub fn new(segments: usize) -> Self {
        Self {
            path: WaypointPath::new(),
            segments: segments.max(1),
            was_pressed: false,
            curve: None,
            markers: Vec::new(),
        }
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    /// Handle of the curve currently displayed
    pub fn curve_node(&self) -> Option<NodeId> {
        self.curve
    }

    pub fn marker_nodes(&self) -> &[NodeId] {
        &self.markers
    }

    /// Feed this tick's record input level. Returns true when a waypoint was appended.
    pub fn update(&mut self, pressed: bool, position: Vec3, scene: &mut dyn SceneSink) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        if rising {
            self.record(position, scene);
        }
        rising
    }

    /// Append `position` unconditionally and rebuild the curve
    pub fn record(&mut self, position: Vec3, scene: &mut dyn SceneSink) {
        self.path.push(position);
        self.markers.push(scene.add_node(Node::Sphere {
            radius: MARKER_RADIUS,
            position,
        }));
        log::debug!(
            "Waypoint {} recorded at ({:.2}, {:.2}, {:.2})",
            self.path.len(),
            position.x,
            position.y,
            position.z
        );
        self.rebuild_curve(scene);
    }

    fn rebuild_curve(&mut self, scene: &mut dyn SceneSink) {
        let Some(points) = self.path.sample_curve(self.segments) else {
            return;
        };

        // old geometry goes before the new one is attached
        if let Some(old) = self.curve.take() {
            if scene.remove_node(old).is_none() {
                log::warn!("Path curve {:?} was already gone from the scene", old);
            }
        }

        log::debug!(
            "Rebuilt path curve: {} waypoints, {} samples",
            self.path.len(),
            points.len()
        );
        self.curve = Some(scene.add_node(Node::Curve {
            points,
            color: PATH_COLOR,
        }));
    }
}
