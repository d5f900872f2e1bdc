use crate::math::{Isometry, Point, Real, Vector};
use crate::query::DetectorResult;
use crate::shape::Sphere;
use na::ComplexField; // for .sqrt()
use num::Zero;

/// Contact between spheres.
#[inline]
pub fn detect_sphere_sphere(
    result: &mut DetectorResult,
    s1: &Sphere,
    s2: &Sphere,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) {
    let center1 = Point::from(pos1.translation.vector);
    let center2 = Point::from(pos2.translation.vector);
    push_spheres_contact(result, &center1, s1.radius, &center2, s2.radius);
}

/// Contact between two spheres given by their world-space centers and radii.
///
/// This is also used on the closest points of segments for contacts involving capsules.
pub(crate) fn push_spheres_contact(
    result: &mut DetectorResult,
    center1: &Point<Real>,
    radius1: Real,
    center2: &Point<Real>,
    radius2: Real,
) {
    let dir = center2 - center1;
    let sum_radius = radius1 + radius2;
    let distance_squared = dir.norm_squared();

    if distance_squared >= sum_radius * sum_radius {
        return;
    }

    let distance = distance_squared.sqrt();
    let normal = if !distance.is_zero() {
        dir / distance
    } else {
        Vector::x()
    };

    result.normal = normal;
    let _ = result.push_point(
        center1 + normal * radius1,
        center2 - normal * radius2,
        sum_radius - distance,
        0,
    );
}
