use glam::Vec3;

use crate::assets::{place, ModelAsset, ModelPlacement, PlacedModel};
use crate::camera::{CameraRig, DEFAULT_POSITION};
use crate::config::RigConfig;
use crate::path::PathRecorder;
use crate::scene::{Node, NodeId, SceneGraph};
use crate::subject::Subject;
use crate::traits::SceneSink;

/// Everything a tick reads or writes. Built once and passed by reference.
#[derive(Debug)]
pub struct World {
    pub camera: CameraRig,
    pub subject: Subject,
    pub recorder: PathRecorder,
    pub scene: SceneGraph,
    pub config: RigConfig,
    drone: Option<NodeId>,
}

impl World {
    pub fn new(config: RigConfig) -> Self {
        Self {
            camera: CameraRig::new(DEFAULT_POSITION, Vec3::ZERO, config.polar_epsilon),
            subject: Subject::default(),
            recorder: PathRecorder::new(config.curve_segments),
            scene: SceneGraph::with_default_lighting(),
            config,
            drone: None,
        }
    }

    /// Add a loaded model to the scene with the given placement
    pub fn add_model(&mut self, asset: &ModelAsset, placement: ModelPlacement) -> (NodeId, PlacedModel) {
        let placed = place(&asset.bounds, placement);
        let id = self.scene.add_node(Node::Model {
            name: asset.name.clone(),
            transform: placed.transform,
            bounds: placed.bounds,
        });
        log::info!(
            "Placed {} as {:?}: world bounds {:?} .. {:?}",
            asset.name,
            placement,
            placed.bounds.min,
            placed.bounds.max
        );
        (id, placed)
    }

    /// Make `asset` the followed subject and frame the camera on it
    pub fn attach_drone(&mut self, asset: &ModelAsset) -> NodeId {
        let (id, placed) = self.add_model(asset, ModelPlacement::Drone);
        self.subject.position = placed.position;
        self.camera.frame_bounds(&placed.bounds);
        self.drone = Some(id);
        id
    }

    /// Move the attached drone model to the subject position
    pub fn sync_drone(&mut self) {
        let Some(id) = self.drone else {
            return;
        };
        let Some(Node::Model { transform, .. }) = self.scene.get(id) else {
            log::warn!("Drone node {:?} is gone; detaching", id);
            self.drone = None;
            return;
        };
        let mut transform = *transform;
        transform.w_axis = self.subject.position.extend(1.0);
        self.scene.set_transform(id, transform);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(RigConfig::default())
    }
}
