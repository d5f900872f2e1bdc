use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::query::detectors::detector_sphere_sphere::push_spheres_contact;
use crate::query::DetectorResult;
use crate::shape::Capsule;

/// Contact between capsules.
pub fn detect_capsule_capsule(
    result: &mut DetectorResult,
    capsule1: &Capsule,
    capsule2: &Capsule,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) {
    let seg1 = capsule1.segment(pos1);
    let seg2 = capsule2.segment(pos2);
    let (s, t) = closest_segment_params(seg1, seg2);
    let pt1 = seg1.0 + (seg1.1 - seg1.0) * s;
    let pt2 = seg2.0 + (seg2.1 - seg2.0) * t;

    push_spheres_contact(result, &pt1, capsule1.radius, &pt2, capsule2.radius);
}

/// Computes the parameters of the closest points between the segments `seg1` and `seg2`.
///
/// Returns `(s, t)` such that `seg1.0 + (seg1.1 - seg1.0) * s` and
/// `seg2.0 + (seg2.1 - seg2.0) * t` are the closest points, with `s` and `t` in `[0, 1]`.
/// Parallel overlapping segments resolve to the middle of their overlap.
pub fn closest_segment_params(
    seg1: (Point<Real>, Point<Real>),
    seg2: (Point<Real>, Point<Real>),
) -> (Real, Real) {
    let d1 = seg1.1 - seg1.0;
    let d2 = seg2.1 - seg2.0;
    let r = seg1.0 - seg2.0;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    if a <= DEFAULT_EPSILON && e <= DEFAULT_EPSILON {
        s = 0.0;
        t = 0.0;
    } else if a <= DEFAULT_EPSILON {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(&r);

        if e <= DEFAULT_EPSILON {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > DEFAULT_EPSILON && !ulps_eq!(ae, bb) {
                s = ((b * f - c * e) / denom).clamp(0.0, 1.0);
            } else {
                // Parallel segments: take the middle of the projection of `seg2` on `seg1`.
                let s_start = (-c / a).clamp(0.0, 1.0);
                let s_end = ((b - c) / a).clamp(0.0, 1.0);
                s = (s_start + s_end) * 0.5;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
        }
    }

    (s, t)
}
