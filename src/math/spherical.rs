use glam::Vec3;
use std::f32::consts::PI;

/// Smallest orbit radius; a camera sitting on its target has no direction
pub const MIN_RADIUS: f32 = 0.05;

/// Spherical coordinates around a target.
///
/// `phi` is the polar angle measured from +Y, `theta` the azimuth measured
/// from +Z towards +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let ring = sin_phi * self.radius;
        Vec3::new(ring * sin_theta, cos_phi * self.radius, ring * cos_theta)
    }

    /// Keep `phi` inside `[epsilon, PI - epsilon]` and the radius above `MIN_RADIUS`
    pub fn make_safe(&mut self, epsilon: f32) {
        if self.phi.is_nan() {
            self.phi = PI * 0.5;
        }
        self.phi = self.phi.clamp(epsilon, PI - epsilon);
        if !(self.radius >= MIN_RADIUS) {
            self.radius = MIN_RADIUS;
        }
    }

    /// Apply one tick of orbit input
    pub fn rotate(&mut self, yaw_input: f32, pitch_input: f32, rotation_speed: f32, epsilon: f32) {
        self.theta -= yaw_input * rotation_speed;
        self.phi -= pitch_input * rotation_speed;
        self.make_safe(epsilon);
    }
}
