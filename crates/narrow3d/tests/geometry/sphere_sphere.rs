use narrow3d::math::{Isometry, Point, Vector};
use narrow3d::query::{CollisionMatrix, Detector, DetectorContext, DetectorResult};
use narrow3d::shape::{Geometry, GeometryType, Sphere};

#[test]
fn overlapping_unit_spheres() {
    let sphere = Geometry::from(Sphere::new(1.0));
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(1.5, 0.0, 0.0);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    let detector = CollisionMatrix::new().detector(GeometryType::Sphere, GeometryType::Sphere);
    assert_eq!(detector, Detector::SphereSphere);
    detector.detect(&mut ctx, &mut result, &sphere, &sphere, &pos1, &pos2, None);

    assert_eq!(result.num_points(), 1);
    assert!(!result.incremental);
    assert_eq!(result.normal, Vector::x());

    let pt = &result.points()[0];
    assert_eq!(pt.id, 0);
    assert_relative_eq!(pt.depth, 0.5);
    assert_relative_eq!(pt.position1, Point::new(1.0, 0.0, 0.0));
    assert_relative_eq!(pt.position2, Point::new(0.5, 0.0, 0.0));
}

#[test]
fn separated_spheres() {
    let sphere = Geometry::from(Sphere::new(1.0));
    let pos2 = Isometry::translation(0.0, 2.5, 0.0);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    Detector::SphereSphere.detect(
        &mut ctx,
        &mut result,
        &sphere,
        &sphere,
        &Isometry::identity(),
        &pos2,
        None,
    );

    assert!(result.is_empty());
}

#[test]
fn coincident_spheres_use_the_x_axis() {
    let sphere = Geometry::from(Sphere::new(0.5));
    let pos = Isometry::translation(1.0, 2.0, 3.0);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    Detector::SphereSphere.detect(&mut ctx, &mut result, &sphere, &sphere, &pos, &pos, None);

    assert_eq!(result.num_points(), 1);
    assert_eq!(result.normal, Vector::x());
    assert_relative_eq!(result.points()[0].depth, 1.0);
}

#[test]
fn mismatching_geometry_yields_no_contact() {
    let sphere = Geometry::from(Sphere::new(0.5));
    let cuboid = Geometry::from(narrow3d::shape::Cuboid::new(Vector::repeat(0.5)));
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();
    let pos = Isometry::identity();

    Detector::SphereSphere.detect(&mut ctx, &mut result, &sphere, &cuboid, &pos, &pos, None);

    assert!(result.is_empty());
}
