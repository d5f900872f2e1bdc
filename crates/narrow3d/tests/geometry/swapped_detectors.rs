use narrow3d::math::{Isometry, Real, Vector};
use narrow3d::na::{Translation3, UnitQuaternion};
use narrow3d::query::{Detector, DetectorContext, DetectorResult};
use narrow3d::shape::{Capsule, Cuboid, Geometry, Sphere};

fn check_flipped(
    direct: Detector,
    swapped: Detector,
    g1: &Geometry,
    g2: &Geometry,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) {
    let mut ctx = DetectorContext::default();
    let mut result12 = DetectorResult::new();
    let mut result21 = DetectorResult::new();

    direct.detect(&mut ctx, &mut result12, g1, g2, pos1, pos2, None);
    swapped.detect(&mut ctx, &mut result21, g2, g1, pos2, pos1, None);

    assert_eq!(result12.num_points(), 1);
    assert_eq!(result21.num_points(), 1);
    assert_eq!(result12.normal, -result21.normal);

    let pt12 = &result12.points()[0];
    let pt21 = &result21.points()[0];
    assert_eq!(pt12.position1, pt21.position2);
    assert_eq!(pt12.position2, pt21.position1);
    assert_eq!(pt12.depth, pt21.depth);
}

#[test]
fn box_sphere_is_flipped_sphere_box() {
    let sphere = Geometry::from(Sphere::new(0.5));
    let cuboid = Geometry::from(Cuboid::new(Vector::new(0.5, 1.0, 0.3)));
    let pos1 = Isometry::translation(0.4, 1.1, 0.1);
    let pos2 = Isometry::from_parts(
        Translation3::new(0.0, 0.1, 0.0),
        UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3),
    );

    check_flipped(
        Detector::SphereBox,
        Detector::BoxSphere,
        &sphere,
        &cuboid,
        &pos1,
        &pos2,
    );
}

#[test]
fn capsule_sphere_is_flipped_sphere_capsule() {
    let sphere = Geometry::from(Sphere::new(0.5));
    let capsule = Geometry::from(Capsule::new(1.0, 0.3));
    let pos1 = Isometry::translation(0.6, 0.4, 0.0);
    let pos2 = Isometry::from_parts(
        Translation3::identity(),
        UnitQuaternion::from_euler_angles(0.0, 0.0, 0.2),
    );

    check_flipped(
        Detector::SphereCapsule,
        Detector::CapsuleSphere,
        &sphere,
        &capsule,
        &pos1,
        &pos2,
    );
}
