use crate::math::{Isometry, Point, Real, Vector};
use crate::query::DetectorResult;
use crate::shape::{Cuboid, Sphere};
use crate::utils::{DIRECTION_EPSILON_SQ, HALF_EXTENTS_SHRINK};
use na::ComplexField; // for .abs(), .sqrt()

/// Contact between a sphere and a box.
///
/// The contact normal points from the sphere toward the box.
pub fn detect_sphere_box(
    result: &mut DetectorResult,
    sphere: &Sphere,
    cuboid: &Cuboid,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) {
    let radius = sphere.radius;
    let center = Point::from(pos1.translation.vector);
    let local_center = pos2.inverse_transform_point(&center);
    let half_extents = cuboid.half_extents;

    let inside = local_center.x.abs() < half_extents.x
        && local_center.y.abs() < half_extents.y
        && local_center.z.abs() < half_extents.z;

    if inside {
        push_inside_contact(result, &center, radius, &local_center, &half_extents, pos2);
        return;
    }

    // Keep the clamped point strictly inside the box to avoid singularities on its corners.
    let shrunk = half_extents.add_scalar(-HALF_EXTENTS_SHRINK);
    let clamped = Point::from(local_center.coords.sup(&-shrunk).inf(&shrunk));
    let local_dir = local_center - clamped;
    let distance_squared = local_dir.norm_squared();

    if distance_squared >= radius * radius {
        return;
    }

    if distance_squared <= DIRECTION_EPSILON_SQ {
        // The center lies on the surface of the box.
        push_inside_contact(result, &center, radius, &local_center, &half_extents, pos2);
        return;
    }

    let distance = distance_squared.sqrt();
    let normal = -(pos2.rotation * (local_dir / distance));

    result.normal = normal;
    let _ = result.push_point(center + normal * radius, pos2 * clamped, radius - distance, 0);
}

// The sphere center is inside of the box: push it out through the closest face.
fn push_inside_contact(
    result: &mut DetectorResult,
    center: &Point<Real>,
    radius: Real,
    local_center: &Point<Real>,
    half_extents: &Vector<Real>,
    pos2: &Isometry<Real>,
) {
    let gaps = half_extents - local_center.coords.abs();
    let axis = gaps.imin();
    let sign = if local_center[axis] >= 0.0 { 1.0 } else { -1.0 };

    let mut local_normal = Vector::zeros();
    local_normal[axis] = -sign;
    let mut face_point = *local_center;
    face_point[axis] = half_extents[axis] * sign;

    let normal = pos2.rotation * local_normal;

    result.normal = normal;
    let _ = result.push_point(
        center + normal * radius,
        pos2 * face_point,
        gaps[axis] + radius,
        0,
    );
}
