use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
///
/// All the points are expressed in world-space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The original point on the core of the first shape used to compute `self.point`.
    pub orig1: Point<Real>,
    /// The original point on the core of the second shape used to compute `self.point`.
    pub orig2: Point<Real>,
}

impl CSOPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        let point = Point::from(orig1 - orig2);
        CSOPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// CSO point where all components are set to zero.
    pub fn origin() -> Self {
        CSOPoint::new(Point::origin(), Point::origin())
    }

    /// Computes the support point of the CSO of the cores of `g1` and `g2` toward the direction `dir`.
    ///
    /// The direction does not need to be normalized.
    pub fn from_shapes<G1: ?Sized, G2: ?Sized>(
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
        dir: &Vector<Real>,
    ) -> Self
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let sp1 = g1.support_point(pos1, dir);
        let sp2 = g2.support_point(pos2, &-*dir);

        CSOPoint::new(sp1, sp2)
    }

    /// Interpolates the original points of `points` with the barycentric coordinates `bcoords`.
    pub(crate) fn interpolate(points: &[CSOPoint], bcoords: &[Real]) -> (Point<Real>, Point<Real>) {
        let mut p1 = Vector::zeros();
        let mut p2 = Vector::zeros();

        for (pt, b) in points.iter().zip(bcoords.iter()) {
            p1 += pt.orig1.coords * *b;
            p2 += pt.orig2.coords * *b;
        }

        (Point::from(p1), Point::from(p2))
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
