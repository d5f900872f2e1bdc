//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// A support mapping is the only operation the GJK/EPA algorithm needs from a shape, so
/// any type implementing this trait can be handled by the generic detector.
///
/// The support point returned by [`SupportMap::local_support_point`] belongs to the *core*
/// of the shape. The actual shape is that core dilated by a ball of radius [`SupportMap::margin`].
pub trait SupportMap {
    /// Evaluates the support function of the core of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. `dir` does not need to be normalized and may be zero.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The radius of the ball the core of this shape is dilated by.
    fn margin(&self) -> Real;

    /// Evaluates the support function of the core of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}
