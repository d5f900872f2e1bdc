use crate::math::{Isometry, Point, Real};
use crate::query::detectors::detector_sphere_sphere::push_spheres_contact;
use crate::query::DetectorResult;
use crate::shape::{Capsule, Sphere};

/// Contact between a sphere and a capsule.
pub fn detect_sphere_capsule(
    result: &mut DetectorResult,
    sphere: &Sphere,
    capsule: &Capsule,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) {
    let center = Point::from(pos1.translation.vector);
    let (a, b) = capsule.segment(pos2);
    let ab = b - a;
    let l2 = ab.norm_squared();

    let t = if l2 > 0.0 {
        ((center - a).dot(&ab) / l2).clamp(0.0, 1.0)
    } else {
        0.0
    };

    push_spheres_contact(result, &center, sphere.radius, &(a + ab * t), capsule.radius);
}
