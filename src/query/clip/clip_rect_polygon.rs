use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// The maximum number of vertices of a quad clipped by a rectangle.
///
/// Each of the four clipping planes adds at most one vertex to a convex polygon.
pub const MAX_CLIPPED_VERTICES: usize = 8;

/// A convex polygon resulting from the clipping of a quad.
pub type ClippedPolygon = ArrayVec<Point<Real>, MAX_CLIPPED_VERTICES>;

/// Cuts a convex polygon with a half-space.
///
/// A point `pt` is considered as inside of the half-space if `dist(pt) <= 0.0`, where
/// `dist` is an affine function. Vertices that don't fit into `result` are dropped.
pub fn clip_halfspace_polygon<const N: usize>(
    polygon: &[Point<Real>],
    result: &mut ArrayVec<Point<Real>, N>,
    dist: impl Fn(&Point<Real>) -> Real,
) {
    result.clear();

    let Some(mut last_pt) = polygon.last() else {
        return;
    };
    let mut last_dist = dist(last_pt);

    for pt in polygon {
        let curr_dist = dist(pt);

        if (curr_dist <= 0.0) != (last_dist <= 0.0) {
            // We crossed the plane, so we need
            // to cut the edge.
            let t = last_dist / (last_dist - curr_dist);

            // Vertices lying exactly on the plane are already kept as they are.
            if t > 0.0 && t < 1.0 {
                let _ = result.try_push(last_pt + (pt - last_pt) * t);
            }
        }

        if curr_dist <= 0.0 {
            let _ = result.try_push(*pt);
        }

        last_pt = pt;
        last_dist = curr_dist;
    }
}

/// Clips a convex polygon with a rectangle.
///
/// The rectangle is centered at `center`, and spans `[-half_u, half_u]` along the unit
/// vector `u` and `[-half_v, half_v]` along the unit vector `v`. The polygon points are
/// clipped by the four slabs orthogonal to the rectangle, so they don't need to lie on
/// its plane.
pub fn clip_rect_polygon(
    center: &Point<Real>,
    u: &Vector<Real>,
    half_u: Real,
    v: &Vector<Real>,
    half_v: Real,
    polygon: &[Point<Real>],
) -> ClippedPolygon {
    let coord_u = |pt: &Point<Real>| (pt - center).dot(u);
    let coord_v = |pt: &Point<Real>| (pt - center).dot(v);
    let mut buf1 = ClippedPolygon::new();
    let mut buf2 = ClippedPolygon::new();

    clip_halfspace_polygon(polygon, &mut buf1, |pt| -coord_u(pt) - half_u);
    clip_halfspace_polygon(&buf1, &mut buf2, |pt| coord_u(pt) - half_u);
    clip_halfspace_polygon(&buf2, &mut buf1, |pt| coord_v(pt) - half_v);
    clip_halfspace_polygon(&buf1, &mut buf2, |pt| -coord_v(pt) - half_v);

    buf2
}
