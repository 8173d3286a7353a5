use glam::Mat4;

use crate::scene::{Node, NodeId};

/// Scene collaborator - owns whatever the renderer builds for a node
pub trait SceneSink {
    /// Attach a node and return its handle
    fn add_node(&mut self, node: Node) -> NodeId;

    /// Detach a node and release its resources; `None` if the handle is stale
    fn remove_node(&mut self, id: NodeId) -> Option<Node>;

    /// Move a model node. Returns false for stale handles and non-model nodes.
    fn set_transform(&mut self, id: NodeId, transform: Mat4) -> bool;
}
