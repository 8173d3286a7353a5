use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::math::AABB;

/// Models larger than this along any axis are scaled down to fit
pub const MAX_MODEL_EXTENT: f32 = 50.0;
pub const DRONE_SCALE: f32 = 0.05;
pub const DRONE_POSITION: Vec3 = Vec3::new(0.0, -5.0, 0.0);

/// How a loaded model is oriented and positioned in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelPlacement {
    /// Fixed small scale below the origin, never auto-scaled
    Drone,
    /// Scanned environments are stored Z-up; rotate them Y-up at the origin
    Environment,
    /// Auto-scaled and centred on the origin
    Centered,
}

impl ModelPlacement {
    pub fn auto_scale(&self) -> bool {
        !matches!(self, ModelPlacement::Drone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedModel {
    pub transform: Mat4,
    pub position: Vec3,
    /// World-space bounds after the transform
    pub bounds: AABB,
}

/// Transform for a model with local `bounds`
pub fn place(bounds: &AABB, placement: ModelPlacement) -> PlacedModel {
    let max_dim = bounds.max_dimension();
    let fit_scale = if placement.auto_scale() && max_dim > MAX_MODEL_EXTENT {
        MAX_MODEL_EXTENT / max_dim
    } else {
        1.0
    };

    let (scale, rotation, position) = match placement {
        ModelPlacement::Drone => (DRONE_SCALE, Quat::IDENTITY, DRONE_POSITION),
        ModelPlacement::Environment => (fit_scale, Quat::from_rotation_x(-FRAC_PI_2), Vec3::ZERO),
        ModelPlacement::Centered => (fit_scale, Quat::IDENTITY, -bounds.center() * fit_scale),
    };

    let transform = Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position);
    PlacedModel {
        transform,
        position,
        bounds: bounds.transformed(&transform),
    }
}
