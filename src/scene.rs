use glam::{Mat4, Vec3};
use std::collections::BTreeMap;

use crate::math::AABB;
use crate::traits::SceneSink;

/// Handle to a node owned by a scene collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

/// What the rig asks the scene collaborator to display
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    HemisphereLight {
        sky: [f32; 3],
        ground: [f32; 3],
        intensity: f32,
    },
    DirectionalLight {
        color: [f32; 3],
        intensity: f32,
        position: Vec3,
        target: Vec3,
    },
    Cube {
        size: f32,
        color: [f32; 3],
        position: Vec3,
    },
    Sphere {
        radius: f32,
        position: Vec3,
    },
    Model {
        name: String,
        transform: Mat4,
        bounds: AABB,
    },
    /// Polyline through sampled curve points
    Curve { points: Vec<Vec3>, color: [f32; 3] },
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// In-memory scene used by the host window and by tests
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: BTreeMap<NodeId, Node>,
    next_id: u64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lights and ground cube of the demo scene
    pub fn with_default_lighting() -> Self {
        let mut scene = Self::new();
        scene.add_node(Node::HemisphereLight {
            sky: WHITE,
            ground: WHITE,
            intensity: 2.0,
        });
        scene.add_node(Node::DirectionalLight {
            color: WHITE,
            intensity: 3.0,
            position: Vec3::new(50.0, 50.0, 50.0),
            target: Vec3::ZERO,
        });
        scene.add_node(Node::DirectionalLight {
            color: WHITE,
            intensity: 1.5,
            position: Vec3::new(-50.0, 30.0, -50.0),
            target: Vec3::ZERO,
        });
        scene.add_node(Node::Cube {
            size: 1.0,
            color: [0.27, 0.53, 0.67],
            position: Vec3::ZERO,
        });
        scene
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn curves(&self) -> impl Iterator<Item = &[Vec3]> {
        self.nodes.values().filter_map(|node| match node {
            Node::Curve { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl SceneSink for SceneGraph {
    fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.remove(&id)
    }

    fn set_transform(&mut self, id: NodeId, transform: Mat4) -> bool {
        match self.nodes.get_mut(&id) {
            Some(Node::Model {
                transform: current,
                bounds,
                ..
            }) => {
                // bounds are world space; carry them along with the move
                *bounds = bounds.transformed(&(transform * current.inverse()));
                *current = transform;
                true
            }
            _ => false,
        }
    }
}
