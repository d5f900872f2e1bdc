use narrow3d::math::{Isometry, Real, Vector};
use narrow3d::na::{Translation3, UnitQuaternion};
use narrow3d::query::{CollisionMatrix, DetectorContext, DetectorResult, DetectorSettings};
use narrow3d::shape::{Cuboid, Geometry};

fn detect(
    ctx: &mut DetectorContext,
    g1: &Geometry,
    g2: &Geometry,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) -> DetectorResult {
    let mut result = DetectorResult::new();
    let detector = CollisionMatrix::new().detector(g1.geometry_type(), g2.geometry_type());
    detector.detect(ctx, &mut result, g1, g2, pos1, pos2, None);
    result
}

#[test]
fn stacked_unit_boxes() {
    let cuboid = Geometry::from(Cuboid::new(Vector::repeat(0.5)));
    let pos2 = Isometry::translation(0.0, 0.9, 0.0);
    let mut ctx = DetectorContext::default();

    let result = detect(&mut ctx, &cuboid, &cuboid, &Isometry::identity(), &pos2);

    assert_eq!(result.num_points(), 4);
    assert!(!result.incremental);
    assert_relative_eq!(result.normal, Vector::y(), epsilon = 1.0e-6);

    let mut ids: Vec<_> = result.points().iter().map(|pt| pt.id).collect();
    ids.sort();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    for pt in result.points() {
        assert_relative_eq!(pt.depth, 0.1, epsilon = 1.0e-5);
    }
}

#[test]
fn separated_boxes() {
    let cuboid = Geometry::from(Cuboid::new(Vector::repeat(0.5)));
    let mut ctx = DetectorContext::default();
    let rot = UnitQuaternion::from_euler_angles(0.3, 0.2, 0.1);

    for offset in [
        Vector::new(1.5, 0.0, 0.0),
        Vector::new(0.0, -1.5, 0.0),
        Vector::new(0.0, 0.0, 1.5),
        Vector::new(1.2, 1.2, 1.2),
    ] {
        let pos2 = Isometry::from_parts(Translation3::from(offset), rot);
        let result = detect(&mut ctx, &cuboid, &cuboid, &Isometry::identity(), &pos2);
        assert!(result.is_empty(), "unexpected contact at {:?}", offset);
    }
}

#[test]
fn manifold_size_follows_settings() {
    let cuboid = Geometry::from(Cuboid::new(Vector::repeat(0.5)));
    let pos2 = Isometry::translation(0.0, 0.9, 0.0);
    let settings = DetectorSettings {
        max_manifold_points: 2,
        ..DetectorSettings::default()
    };
    let mut ctx = DetectorContext::new(settings);

    let result = detect(&mut ctx, &cuboid, &cuboid, &Isometry::identity(), &pos2);

    assert_eq!(result.num_points(), 2);
}

#[test]
fn detection_is_idempotent() {
    let cuboid1 = Geometry::from(Cuboid::new(Vector::new(0.5, 0.3, 0.7)));
    let cuboid2 = Geometry::from(Cuboid::new(Vector::new(0.4, 0.6, 0.2)));
    let pos1 = Isometry::from_parts(
        Translation3::new(0.1, -0.2, 0.05),
        UnitQuaternion::from_euler_angles(0.1, 0.7, -0.4),
    );
    let pos2 = Isometry::from_parts(
        Translation3::new(0.3, 0.5, -0.1),
        UnitQuaternion::from_euler_angles(-0.6, 0.2, 0.9),
    );
    let mut ctx = DetectorContext::default();

    let first = detect(&mut ctx, &cuboid1, &cuboid2, &pos1, &pos2);
    let second = detect(&mut ctx, &cuboid1, &cuboid2, &pos1, &pos2);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
