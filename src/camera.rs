use glam::{Mat4, Vec2, Vec3};

use crate::core::Axes2;
use crate::math::{Spherical, AABB};

pub const DEFAULT_FOV_DEG: f32 = 45.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 25.0, 50.0);

/// Perspective projection; aspect follows the output surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_deg: DEFAULT_FOV_DEG,
            aspect: 2.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl Projection {
    /// Update aspect from surface size. Zero-sized surfaces (minimised windows) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::warn!("Ignoring zero-sized surface {}x{}", width, height);
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Camera with an orbit target, kept at a spherical offset from that target
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    offset: Spherical,
    polar_epsilon: f32,
}

impl CameraRig {
    pub fn new(position: Vec3, target: Vec3, polar_epsilon: f32) -> Self {
        let mut rig = Self {
            position,
            target,
            up: Vec3::Y,
            projection: Projection::default(),
            offset: Spherical::from_offset(position - target),
            polar_epsilon,
        };
        rig.offset.make_safe(polar_epsilon);
        rig
    }

    pub fn offset(&self) -> Spherical {
        self.offset
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Forward with the vertical component dropped; zero when looking straight up or down
    pub fn ground_forward(&self) -> Vec3 {
        let forward = self.forward();
        Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.ground_forward().cross(self.up).normalize_or_zero()
    }

    /// One orbit tick: rotate the stored offset by stick input, then re-centre on `subject`.
    ///
    /// Radius is carried over from the previous tick so rotation never zooms.
    pub fn orbit(&mut self, subject: Vec3, stick: Axes2, rotation_speed: f32) {
        self.offset
            .rotate(stick.x, stick.y, rotation_speed, self.polar_epsilon);
        self.follow(subject);
    }

    /// Turn the stored offset by `delta` radians (x azimuth, y polar) with the same polar clamp.
    ///
    /// Takes effect on the next `follow` or `orbit`.
    pub fn rotate_offset(&mut self, delta: Vec2) {
        self.offset
            .rotate(-delta.x, -delta.y, 1.0, self.polar_epsilon);
    }

    /// Place the camera at `subject + offset` and look at `subject`
    pub fn follow(&mut self, subject: Vec3) {
        self.position = subject + self.offset.to_offset();
        self.target = subject;
    }

    /// Move camera and target together, keeping the view direction
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Look at `target` from the current position and re-derive the orbit offset
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
        self.offset = Spherical::from_offset(self.position - target);
        self.offset.make_safe(self.polar_epsilon);
        self.position = target + self.offset.to_offset();
    }

    /// Put the camera behind and above `bounds` so the whole model is in view
    pub fn frame_bounds(&mut self, bounds: &AABB) {
        let center = bounds.center();
        let max_dim = bounds.max_dimension();
        self.position = center + Vec3::new(0.0, max_dim * 0.5, max_dim * 1.5);
        self.look_at(center);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        self.projection.set_viewport(width, height)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, Vec3::ZERO, 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn default_rig_looks_at_origin() {
        let rig = CameraRig::default();
        assert_eq!(rig.position, DEFAULT_POSITION);
        assert!(close(rig.forward(), (-DEFAULT_POSITION).normalize()));
        assert!((rig.offset().radius - DEFAULT_POSITION.length()).abs() < 1e-4);
    }

    #[test]
    fn right_is_forward_cross_up() {
        let rig = CameraRig::new(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, 0.1);
        assert!(close(rig.ground_forward(), Vec3::Z));
        assert!(close(rig.right(), Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn orbit_rotates_at_constant_radius() {
        let mut rig = CameraRig::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 0.1);
        let before = rig.offset();
        rig.orbit(Vec3::ZERO, Axes2::new(1.0, 0.0), 0.02);
        let after = rig.offset();

        assert!((after.theta - (before.theta - 0.02)).abs() < 1e-6);
        assert!((after.radius - before.radius).abs() < 1e-5);
        assert!(((rig.position - rig.target).length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn orbit_follows_subject() {
        let mut rig = CameraRig::new(Vec3::new(0.0, 5.0, 5.0), Vec3::ZERO, 0.1);
        let subject = Vec3::new(3.0, 1.0, -2.0);
        rig.orbit(subject, Axes2::ZERO, 0.02);
        assert_eq!(rig.target, subject);
        assert!(close(rig.position, subject + Vec3::new(0.0, 5.0, 5.0)));
    }

    #[test]
    fn coincident_camera_gets_minimum_radius() {
        let mut rig = CameraRig::new(Vec3::ONE, Vec3::ONE, 0.1);
        rig.follow(Vec3::ONE);
        assert!(rig.position.is_finite());
        assert!((rig.position - Vec3::ONE).length() > 0.0);
    }

    #[test]
    fn straight_down_start_is_pushed_off_pole() {
        let rig = CameraRig::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, 0.1);
        assert!((rig.offset().phi - 0.1).abs() < 1e-6);
        assert!(rig.offset().phi < PI);
    }

    #[test]
    fn frame_bounds_places_camera_behind_and_above() {
        let mut rig = CameraRig::default();
        let bounds = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 3.0, 1.0));
        rig.frame_bounds(&bounds);
        // center (0, 1, 0), max dimension 4
        assert_eq!(rig.target, Vec3::new(0.0, 1.0, 0.0));
        assert!(close(rig.position, Vec3::new(0.0, 3.0, 6.0)));
    }

    #[test]
    fn viewport_updates_aspect() {
        let mut rig = CameraRig::default();
        assert!(rig.set_viewport(1920, 1080));
        assert!((rig.projection.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert!(!rig.set_viewport(0, 600));
        assert!((rig.projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn matrices_are_finite() {
        let rig = CameraRig::default();
        assert!(rig.view_matrix().is_finite());
        assert!(rig.projection_matrix().is_finite());
    }
}
