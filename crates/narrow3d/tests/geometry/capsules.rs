use narrow3d::math::{Isometry, Point, Real, Vector};
use narrow3d::query::{CollisionMatrix, DetectorContext, DetectorResult};
use narrow3d::shape::{Capsule, Geometry, Sphere};

#[test]
fn parallel_overlapping_capsules() {
    let capsule = Geometry::from(Capsule::new(1.0, 0.5));
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.8, 0.5, 0.0);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    let detector =
        CollisionMatrix::new().detector(capsule.geometry_type(), capsule.geometry_type());
    detector.detect(&mut ctx, &mut result, &capsule, &capsule, &pos1, &pos2, None);

    assert_eq!(result.num_points(), 1);
    assert!(result.normal.iter().all(|x| x.is_finite()));
    assert_relative_eq!(result.normal, Vector::x(), epsilon = 1.0e-6);

    let pt = &result.points()[0];
    assert_relative_eq!(pt.depth, 0.2, epsilon = 1.0e-5);
    // The overlap of both segments spans y in [-0.5, 1.0].
    assert_relative_eq!(pt.position1, Point::new(0.5, 0.25, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(pt.position2, Point::new(0.3, 0.25, 0.0), epsilon = 1.0e-5);
}

#[test]
fn crossed_capsules() {
    let capsule = Geometry::from(Capsule::new(1.0, 0.25));
    // The second capsule lies along the x axis, above the first one.
    let angle = core::f64::consts::FRAC_PI_2 as Real;
    let pos2 = Isometry::new(Vector::new(0.0, 0.0, 0.4), Vector::z() * angle);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    let detector =
        CollisionMatrix::new().detector(capsule.geometry_type(), capsule.geometry_type());
    let pos1 = Isometry::identity();
    detector.detect(&mut ctx, &mut result, &capsule, &capsule, &pos1, &pos2, None);

    assert_eq!(result.num_points(), 1);
    assert_relative_eq!(result.normal, Vector::z(), epsilon = 1.0e-5);
    assert_relative_eq!(result.points()[0].depth, 0.1, epsilon = 1.0e-5);
}

#[test]
fn sphere_against_capsule_cap() {
    let sphere = Geometry::from(Sphere::new(0.5));
    let capsule = Geometry::from(Capsule::new(1.0, 0.5));
    let pos1 = Isometry::translation(0.0, 1.8, 0.0);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    let pos2 = Isometry::identity();
    let detector =
        CollisionMatrix::new().detector(sphere.geometry_type(), capsule.geometry_type());
    detector.detect(&mut ctx, &mut result, &sphere, &capsule, &pos1, &pos2, None);

    assert_eq!(result.num_points(), 1);
    assert_relative_eq!(result.normal, -Vector::y(), epsilon = 1.0e-6);
    assert_relative_eq!(result.points()[0].depth, 0.2, epsilon = 1.0e-5);
}
