use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;

/// A capsule shape defined as a round segment.
///
/// The segment is aligned with the local `y` axis and centered at the origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// Half the length of the capsule's segment.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis.
    pub fn new(half_height: Real, radius: Real) -> Self {
        Self {
            half_height,
            radius,
        }
    }

    /// The end-points of this capsule's segment, in local-space.
    pub fn local_segment(&self) -> (Point<Real>, Point<Real>) {
        let b = Point::new(0.0, self.half_height, 0.0);
        (Point::new(0.0, -self.half_height, 0.0), b)
    }

    /// The end-points of this capsule's segment, transformed by `pos`.
    pub fn segment(&self, pos: &Isometry<Real>) -> (Point<Real>, Point<Real>) {
        let (a, b) = self.local_segment();
        (pos * a, pos * b)
    }
}

// The core of a capsule is its segment: the whole radius acts as the margin.
impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let y = if dir.y >= 0.0 {
            self.half_height
        } else {
            -self.half_height
        };
        Point::new(0.0, y, 0.0)
    }

    fn margin(&self) -> Real {
        self.radius
    }
}
