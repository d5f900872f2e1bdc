use crate::math::Real;

/// Amount the box half-extents are shrunk by before clamping a point inside of them.
///
/// This keeps the clamped point strictly inside the box so that a point lying exactly
/// on a corner or an edge still yields a well-defined direction.
pub(crate) const HALF_EXTENTS_SHRINK: Real = 1.0e-9;

/// Squared length under which a vector is treated as zero when a direction is needed.
pub(crate) const DIRECTION_EPSILON_SQ: Real = 1.0e-12;
