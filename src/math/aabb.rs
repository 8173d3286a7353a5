use glam::{Mat4, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`, or `None` when there are no points
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(AABB::new(first, first), |acc, p| acc.expanded(p)))
    }

    pub fn expanded(&self, point: Vec3) -> AABB {
        AABB {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }

    /// Bounds of this box after an affine transform (all eight corners)
    pub fn transformed(&self, transform: &Mat4) -> AABB {
        let corners = (0..8).map(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        });
        AABB::from_points(corners.map(|corner| transform.transform_point3(corner))).unwrap_or(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new() {
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let aabb = AABB::new(min, max);
        assert_eq!(aabb.min, min);
        assert_eq!(aabb.max, max);
    }

    #[test]
    fn test_aabb_center() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_size_and_max_dimension() {
        let aabb = AABB::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 5.0, 3.0));
        assert_eq!(aabb.size(), Vec3::new(2.0, 5.0, 1.0));
        assert_eq!(aabb.max_dimension(), 5.0);
    }

    #[test]
    fn test_from_points_empty() {
        assert!(AABB::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_from_points() {
        let aabb = AABB::from_points([
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-3.0, 4.0, 1.0),
            Vec3::new(0.5, 0.0, -7.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec3::new(-3.0, -2.0, -7.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 1.0));
    }

    #[test]
    fn test_transformed_scale_and_translate() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let transform = Mat4::from_translation(Vec3::new(0.0, -5.0, 0.0))
            * Mat4::from_scale(Vec3::splat(0.5));
        let moved = aabb.transformed(&transform);
        assert!((moved.min - Vec3::new(-0.5, -5.5, -0.5)).length() < 1e-5);
        assert!((moved.max - Vec3::new(0.5, -4.5, 0.5)).length() < 1e-5);
    }

    #[test]
    fn test_transformed_rotation_swaps_axes() {
        // -90 degrees about X maps +Z extent onto +Y
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 10.0));
        let rotated = aabb.transformed(&Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2));
        assert!((rotated.size().y - 10.0).abs() < 1e-4);
        assert!((rotated.size().z - 1.0).abs() < 1e-4);
    }
}
