use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;
use crate::shape::{SupportMap, DEFAULT_GJK_MARGIN};

/// A convex shape defined as the convex hull of a point cloud.
///
/// The points do not have to be in convex position: interior points are simply never
/// returned by the support function. Unlike the other margin-carrying shapes, the hull
/// vertices are used as the core of the shape, so the effective shape is the hull
/// inflated by its margin.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "ConvexHullDesc")
)]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
    margin: Real,
}

impl ConvexHull {
    /// Creates a convex hull from a point cloud, with the default GJK margin.
    ///
    /// Returns `None` if `points` is empty.
    pub fn new(points: Vec<Point<Real>>) -> Option<Self> {
        Self::with_margin(points, DEFAULT_GJK_MARGIN)
    }

    /// Creates a convex hull from a point cloud, with an explicit GJK margin.
    ///
    /// Returns `None` if `points` is empty.
    pub fn with_margin(points: Vec<Point<Real>>, margin: Real) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self {
                points,
                margin: margin.max(0.0),
            })
        }
    }

    /// The points this hull was built from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Index of the point of this hull maximizing its dot product with `dir`.
    #[inline]
    pub fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        let mut best_pt = 0;
        let mut best_dot = self.points[0].coords.dot(dir);

        for (i, p) in self.points.iter().enumerate().skip(1) {
            let dot = p.coords.dot(dir);

            if dot > best_dot {
                best_dot = dot;
                best_pt = i;
            }
        }

        best_pt
    }
}

/// Error returned when building a convex hull without any point.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("a convex hull needs at least one point")]
pub struct EmptyConvexHull;

impl TryFrom<Vec<Point<Real>>> for ConvexHull {
    type Error = EmptyConvexHull;

    fn try_from(points: Vec<Point<Real>>) -> Result<Self, Self::Error> {
        Self::new(points).ok_or(EmptyConvexHull)
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct ConvexHullDesc {
    points: Vec<Point<Real>>,
    margin: Real,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<ConvexHullDesc> for ConvexHull {
    type Error = EmptyConvexHull;

    fn try_from(desc: ConvexHullDesc) -> Result<Self, Self::Error> {
        Self::with_margin(desc.points, desc.margin).ok_or(EmptyConvexHull)
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.points[self.support_point_id(dir)]
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }
}
