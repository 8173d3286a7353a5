use glam::Vec3;

/// Segments used when sampling a waypoint curve for display
pub const DEFAULT_SEGMENTS: usize = 100;

/// Centripetal Catmull-Rom curve through a list of control points.
///
/// The curve passes through every point. End tangents come from mirrored
/// phantom points so a two-point curve is a straight segment.
#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
}

/// Cubic `c0 + c1 t + c2 t^2 + c3 t^3` evaluated on all three axes at once
#[derive(Debug, Clone, Copy)]
struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    /// Non-uniform Catmull-Rom segment between `x1` and `x2`
    fn nonuniform(x0: Vec3, x1: Vec3, x2: Vec3, x3: Vec3, dt0: f32, dt1: f32, dt2: f32) -> Self {
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t2 * t
    }
}

impl CatmullRomCurve {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Point at parameter `t` in `[0, 1]`; `None` for an empty curve
    pub fn point_at(&self, t: f32) -> Option<Vec3> {
        let points = &self.points;
        let len = points.len();
        match len {
            0 => return None,
            1 => return Some(points[0]),
            _ => {}
        }

        let p = (len - 1) as f32 * t.clamp(0.0, 1.0);
        let mut index = p.floor() as usize;
        let mut weight = p - index as f32;
        if index >= len - 1 {
            index = len - 2;
            weight = 1.0;
        }

        let p1 = points[index];
        let p2 = points[index + 1];
        let p0 = if index > 0 {
            points[index - 1]
        } else {
            2.0 * points[0] - points[1]
        };
        let p3 = if index + 2 < len {
            points[index + 2]
        } else {
            2.0 * points[len - 1] - points[len - 2]
        };

        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);

        // coincident points
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        Some(CubicPoly::nonuniform(p0, p1, p2, p3, dt0, dt1, dt2).eval(weight))
    }

    /// `segments + 1` points evenly spaced in parameter space
    pub fn sample(&self, segments: usize) -> Vec<Vec3> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let segments = segments.max(1);
        (0..=segments)
            .filter_map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }
}
