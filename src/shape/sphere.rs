use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A sphere shape defined by its radius and centered at the origin of its local frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere from its radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere { radius }
    }
}

// The core of a sphere is its center: the whole radius acts as the margin.
impl SupportMap for Sphere {
    #[inline]
    fn local_support_point(&self, _: &Vector<Real>) -> Point<Real> {
        Point::origin()
    }

    #[inline]
    fn margin(&self) -> Real {
        self.radius
    }
}
