//! Closest point to the origin on the simplices built by GJK.
//!
//! Each `project_origin*` function returns the point of a segment, triangle or tetrahedron
//! closest to the origin, together with the vertices of the smallest sub-simplex containing
//! it and the barycentric coordinates of that point.

use crate::math::{Point, Real, DEFAULT_EPSILON};

bitflags::bitflags! {
    /// The set of simplex vertices supporting the projection of the origin.
    ///
    /// Bit `i` is set if the `i`-th vertex of the simplex is part of the supporting
    /// sub-simplex.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    pub struct SimplexMask: u8 {
        /// The first vertex.
        const V0 = 1 << 0;
        /// The second vertex.
        const V1 = 1 << 1;
        /// The third vertex.
        const V2 = 1 << 2;
        /// The fourth vertex.
        const V3 = 1 << 3;
    }
}

impl SimplexMask {
    /// The mask containing only the `i`-th vertex.
    #[inline]
    pub fn vertex(i: usize) -> Self {
        Self::from_bits_truncate(1 << i)
    }
}

/// The projection of the origin on a simplex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimplexProjection {
    /// The point of the simplex closest to the origin.
    pub point: Point<Real>,
    /// The vertices of the sub-simplex containing `self.point`.
    pub mask: SimplexMask,
    /// The barycentric coordinates of `self.point`, indexed like the simplex vertices.
    ///
    /// The coordinates of vertices not in `self.mask` are zero.
    pub bcoords: [Real; 4],
}

impl SimplexProjection {
    /// A projection that doesn't touch any vertex.
    pub(crate) fn empty() -> Self {
        Self {
            point: Point::origin(),
            mask: SimplexMask::empty(),
            bcoords: [0.0; 4],
        }
    }

    /// The projection that is exactly the `i`-th vertex `pt`.
    pub(crate) fn vertex(pt: &Point<Real>, i: usize) -> Self {
        let mut bcoords = [0.0; 4];
        bcoords[i] = 1.0;

        Self {
            point: *pt,
            mask: SimplexMask::vertex(i),
            bcoords,
        }
    }

    /// Renumbers the vertices of a projection computed on a sub-simplex.
    ///
    /// The local vertex `i` becomes the vertex `ids[i]` of the enclosing simplex.
    fn remap(self, ids: &[usize]) -> Self {
        let mut result = Self {
            point: self.point,
            mask: SimplexMask::empty(),
            bcoords: [0.0; 4],
        };

        for (local, global) in ids.iter().enumerate() {
            if self.mask.contains(SimplexMask::vertex(local)) {
                result.mask |= SimplexMask::vertex(*global);
                result.bcoords[*global] = self.bcoords[local];
            }
        }

        result
    }
}

fn closest_of(
    best: Option<SimplexProjection>,
    candidate: SimplexProjection,
) -> Option<SimplexProjection> {
    match best {
        Some(best)
            if best.point.coords.norm_squared() <= candidate.point.coords.norm_squared() =>
        {
            Some(best)
        }
        _ => Some(candidate),
    }
}

/// Projects the origin on the segment `[a, b]`.
pub fn project_origin2(a: &Point<Real>, b: &Point<Real>) -> SimplexProjection {
    let ab = b - a;
    let l2 = ab.norm_squared();
    let num = -a.coords.dot(&ab);

    // Also covers zero-length segments, without dividing by zero.
    if num <= 0.0 {
        return SimplexProjection::vertex(a, 0);
    }

    if num >= l2 {
        return SimplexProjection::vertex(b, 1);
    }

    let t = num / l2;

    SimplexProjection {
        point: a + ab * t,
        mask: SimplexMask::V0 | SimplexMask::V1,
        bcoords: [1.0 - t, t, 0.0, 0.0],
    }
}

/// Projects the origin on the triangle `abc`.
pub fn project_origin3(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> SimplexProjection {
    let pts = [a, b, c];
    let ab = b - a;
    let ac = c - a;
    let n = ab.cross(&ac);
    let n2 = n.norm_squared();

    if n2 <= DEFAULT_EPSILON * ab.norm_squared() * ac.norm_squared() {
        // Degenerate triangle: the closest point is on one of its edges.
        let mut best = None;

        for i in 0..3 {
            let j = (i + 1) % 3;
            best = closest_of(best, project_origin2(pts[i], pts[j]).remap(&[i, j]));
        }

        return best.unwrap_or_else(|| SimplexProjection::vertex(a, 0));
    }

    // The origin projects outside of an edge if it lies on the outer side of the
    // plane containing that edge and orthogonal to the triangle.
    let mut best = None;

    for i in 0..3 {
        let j = (i + 1) % 3;

        if n.cross(&(pts[j] - pts[i])).dot(&pts[i].coords) > 0.0 {
            best = closest_of(best, project_origin2(pts[i], pts[j]).remap(&[i, j]));
        }
    }

    if let Some(best) = best {
        return best;
    }

    let point = Point::from(n * (n.dot(&a.coords) / n2));
    let ba = (b - point).cross(&(c - point)).dot(&n) / n2;
    let bb = (c - point).cross(&(a - point)).dot(&n) / n2;

    SimplexProjection {
        point,
        mask: SimplexMask::V0 | SimplexMask::V1 | SimplexMask::V2,
        bcoords: [ba, bb, 1.0 - ba - bb, 0.0],
    }
}

/// Projects the origin on the tetrahedron `abcd`.
///
/// If the origin lies inside of the tetrahedron, the returned mask contains all four vertices.
pub fn project_origin4(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> SimplexProjection {
    const FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 3, 1], [1, 2, 3, 0]];

    let pts = [a, b, c, d];
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let nabc = ab.cross(&ac);
    let volume = nabc.dot(&ad);

    if volume * volume <= DEFAULT_EPSILON * nabc.norm_squared() * ad.norm_squared() {
        // Degenerate tetrahedron: the closest point is on one of its faces.
        let mut best = None;

        for [i, j, k, _] in FACES {
            best = closest_of(
                best,
                project_origin3(pts[i], pts[j], pts[k]).remap(&[i, j, k]),
            );
        }

        return best.unwrap_or_else(|| SimplexProjection::vertex(a, 0));
    }

    let mut best = None;

    for [i, j, k, l] in FACES {
        let n = (pts[j] - pts[i]).cross(&(pts[k] - pts[i]));
        let outward = if n.dot(&(pts[l] - pts[i])) > 0.0 {
            -n
        } else {
            n
        };

        if outward.dot(&pts[i].coords) < 0.0 {
            best = closest_of(
                best,
                project_origin3(pts[i], pts[j], pts[k]).remap(&[i, j, k]),
            );
        }
    }

    if let Some(best) = best {
        return best;
    }

    let ao = -a.coords;
    let bb = ao.dot(&ac.cross(&ad)) / volume;
    let bc = ab.dot(&ao.cross(&ad)) / volume;
    let bd = ab.dot(&ac.cross(&ao)) / volume;

    SimplexProjection {
        point: Point::origin(),
        mask: SimplexMask::all(),
        bcoords: [1.0 - bb - bc - bd, bb, bc, bd],
    }
}
