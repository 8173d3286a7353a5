mod aabb;
mod spherical;
mod spline;

pub use aabb::AABB;
pub use spherical::{Spherical, MIN_RADIUS};
pub use spline::{CatmullRomCurve, DEFAULT_SEGMENTS};
