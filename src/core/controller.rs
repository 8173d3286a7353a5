/// Discrete input action, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Ascend,
    Descend,
    Record,
}

/// Controller - exposes held actions
pub trait Controller {
    /// Check if action is currently held
    fn is_down(&self, action: Action) -> bool;

    /// Get all currently held actions
    fn get_down_actions(&self) -> &[Action];
}
