// The closed-form detectors and GJK/EPA must agree up to the margins of the shapes.

use narrow3d::math::{Isometry, Real, Vector};
use narrow3d::query::{CollisionMatrix, Detector, DetectorContext, DetectorResult};
use narrow3d::shape::{Capsule, Cuboid, Geometry, Sphere};

fn compare(g1: &Geometry, g2: &Geometry, pos1: &Isometry<Real>, pos2: &Isometry<Real>) {
    let mut ctx = DetectorContext::default();
    let mut closed_form = DetectorResult::new();
    let mut gjk_epa = DetectorResult::new();

    let detector = CollisionMatrix::new().detector(g1.geometry_type(), g2.geometry_type());
    assert_ne!(detector, Detector::GjkEpa);
    detector.detect(&mut ctx, &mut closed_form, g1, g2, pos1, pos2, None);
    Detector::GjkEpa.detect(&mut ctx, &mut gjk_epa, g1, g2, pos1, pos2, None);

    assert!(!closed_form.is_empty());
    assert_eq!(gjk_epa.num_points(), 1);
    assert!(gjk_epa.incremental);

    let tolerance = 2.0 * (g1.margin().max(g2.margin()));
    assert_relative_eq!(closed_form.max_depth(), gjk_epa.max_depth(), epsilon = tolerance);
    assert!(closed_form.normal.dot(&gjk_epa.normal) > 0.99);
}

#[test]
fn sphere_box() {
    let sphere = Geometry::from(Sphere::new(1.0));
    let cuboid = Geometry::from(Cuboid::new(Vector::repeat(0.5)));
    let pos1 = Isometry::translation(0.0, 1.3, 0.0);
    let pos2 = Isometry::identity();

    compare(&sphere, &cuboid, &pos1, &pos2);
    compare(&cuboid, &sphere, &pos2, &pos1);

    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();
    Detector::GjkEpa.detect(&mut ctx, &mut result, &sphere, &cuboid, &pos1, &pos2, None);
    assert_relative_eq!(result.points()[0].depth, 0.2, epsilon = 1.0e-3);
}

#[test]
fn box_box() {
    let cuboid = Geometry::from(Cuboid::new(Vector::repeat(0.5)));
    let pos2 = Isometry::translation(0.0, 0.7, 0.0);

    compare(&cuboid, &cuboid, &Isometry::identity(), &pos2);
}

#[test]
fn capsule_capsule() {
    let capsule = Geometry::from(Capsule::new(1.0, 0.5));
    let pos2 = Isometry::translation(0.8, 0.5, 0.0);

    compare(&capsule, &capsule, &Isometry::identity(), &pos2);
}

#[test]
fn sphere_capsule() {
    let sphere = Geometry::from(Sphere::new(0.5));
    let capsule = Geometry::from(Capsule::new(1.0, 0.5));
    let pos1 = Isometry::translation(0.9, 0.3, 0.0);
    let pos2 = Isometry::identity();

    compare(&sphere, &capsule, &pos1, &pos2);
    compare(&capsule, &sphere, &pos2, &pos1);
}
