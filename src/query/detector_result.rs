use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;
use core::mem;

/// The maximum number of contact points a detector can report for a single shape pair.
pub const MAX_MANIFOLD_POINTS: usize = 4;

static_assertions::const_assert!(MAX_MANIFOLD_POINTS > 0 && MAX_MANIFOLD_POINTS <= 4);

/// A contact point computed by a detector.
///
/// All the quantities are expressed in world-space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DetectorResultPoint {
    /// The contact point on the surface of the first shape.
    pub position1: Point<Real>,
    /// The contact point on the surface of the second shape.
    pub position2: Point<Real>,
    /// The penetration depth along the contact normal. Positive when the shapes overlap.
    pub depth: Real,
    /// The identifier of this contact point, used to match points across steps.
    pub id: u32,
}

/// The output of a collision detector.
///
/// This is rebuilt from scratch by every call to
/// [`Detector::detect`](crate::query::Detector::detect).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DetectorResult {
    points: ArrayVec<DetectorResultPoint, MAX_MANIFOLD_POINTS>,
    /// The contact normal, pointing from the first shape toward the second shape.
    pub normal: Vector<Real>,
    /// Whether the point ids are persistent across steps.
    ///
    /// If `true` the consumer should merge these points into its manifold by id. If `false`,
    /// the points are a complete snapshot that replaces the previous manifold.
    pub incremental: bool,
}

impl Default for DetectorResult {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self {
            points: ArrayVec::new(),
            normal: Vector::zeros(),
            incremental: false,
        }
    }

    /// Removes all the points and resets the normal and the `incremental` flag.
    pub fn clear(&mut self) {
        self.points.clear();
        self.normal = Vector::zeros();
        self.incremental = false;
    }

    /// The number of contact points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no contact point was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The contact points.
    #[inline]
    pub fn points(&self) -> &[DetectorResultPoint] {
        &self.points
    }

    /// The largest penetration depth among all the contact points, or `0.0` if there are none.
    pub fn max_depth(&self) -> Real {
        self.points
            .iter()
            .map(|pt| pt.depth)
            .fold(0.0, |a, b| if b > a { b } else { a })
    }

    /// Adds a contact point.
    ///
    /// Returns `false`, leaving the result unchanged, if it already contains
    /// [`MAX_MANIFOLD_POINTS`] points.
    #[inline]
    pub fn push_point(
        &mut self,
        position1: Point<Real>,
        position2: Point<Real>,
        depth: Real,
        id: u32,
    ) -> bool {
        self.points
            .try_push(DetectorResultPoint {
                position1,
                position2,
                depth,
                id,
            })
            .is_ok()
    }

    /// Exchanges the roles of the first and second shapes.
    ///
    /// The contact points of both shapes are swapped and the normal is negated.
    pub fn flip(&mut self) {
        self.normal = -self.normal;

        for pt in &mut self.points {
            mem::swap(&mut pt.position1, &mut pt.position2);
        }
    }
}
