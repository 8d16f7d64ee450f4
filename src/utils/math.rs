//! # Game Mathematics
//!
//! Axis-aligned boxes and angle helpers shared by movement, combat and the portal.

use crate::WorldPoint;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    /// Creates a new box.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square box of side `size` anchored at `origin`.
    pub fn square(origin: WorldPoint, size: f32) -> Self {
        Self::new(origin.x, origin.y, size, size)
    }

    /// Center of the box.
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::Aabb;
    ///
    /// let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.overlaps(&Aabb::new(9.0, 9.0, 5.0, 5.0)));
    /// assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 5.0, 5.0)));
    /// ```
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Inclusive overlap: shared edges count.
    pub fn touches(&self, other: &Aabb) -> bool {
        self.x <= other.x + other.w
            && self.x + self.w >= other.x
            && self.y <= other.y + other.h
            && self.y + self.h >= other.y
    }
}

/// Unit vector pointing along `degrees` (0 = +x, 90 = +y).
pub fn unit_vector(degrees: f32) -> (f32, f32) {
    let radians = degrees.to_radians();
    (radians.cos(), radians.sin())
}

/// Angle of the vector `(dx, dy)` in degrees, in `(-180, 180]`.
pub fn angle_degrees(dx: f32, dy: f32) -> f32 {
    dy.atan2(dx).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(-10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(20.0, 20.0, 1.0, 1.0)));
    }

    #[test]
    fn test_touches_is_inclusive() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.touches(&Aabb::new(10.0, 10.0, 4.0, 4.0)));
        assert!(!a.touches(&Aabb::new(10.5, 0.0, 4.0, 4.0)));
    }

    #[test]
    fn test_square_and_center() {
        let b = Aabb::square(WorldPoint::new(4.0, 6.0), 12.0);
        assert_eq!(b, Aabb::new(4.0, 6.0, 12.0, 12.0));
        assert_eq!(b.center(), WorldPoint::new(10.0, 12.0));
    }

    #[test]
    fn test_angles() {
        assert_eq!(angle_degrees(1.0, 0.0), 0.0);
        assert!((angle_degrees(0.0, 1.0) - 90.0).abs() < 1e-4);
        assert!((angle_degrees(-1.0, 0.0) - 180.0).abs() < 1e-4);

        let (fx, fy) = unit_vector(90.0);
        assert!(fx.abs() < 1e-6);
        assert!((fy - 1.0).abs() < 1e-6);
    }
}
