use narrow3d::math::{Isometry, Point, Real, Vector};
use narrow3d::na::{Translation3, UnitQuaternion};
use narrow3d::query::gjk::GjkEpa;
use narrow3d::query::{
    CachedDetectorData, CollisionMatrix, Detector, DetectorContext, DetectorResult,
    DetectorSettings, GjkEpaError,
};
use narrow3d::shape::{ConvexHull, Cuboid, Cylinder, Geometry, GeometryType, Sphere};

fn unit_cube_hull() -> ConvexHull {
    let mut points = Vec::new();
    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                points.push(Point::new(x, y, z));
            }
        }
    }

    ConvexHull::with_margin(points, 0.0).unwrap()
}

#[test]
fn sphere_resting_on_convex_hull() {
    let hull = Geometry::from(unit_cube_hull());
    let sphere = Geometry::from(Sphere::new(0.5));
    let pos2 = Isometry::translation(0.0, 0.9, 0.0);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    let detector = CollisionMatrix::new().detector(GeometryType::ConvexHull, GeometryType::Sphere);
    assert_eq!(detector, Detector::GjkEpa);
    detector.detect(&mut ctx, &mut result, &hull, &sphere, &Isometry::identity(), &pos2, None);

    assert_eq!(result.num_points(), 1);
    assert!(result.incremental);
    assert_relative_eq!(result.normal, Vector::y(), epsilon = 1.0e-3);
    assert_relative_eq!(result.points()[0].depth, 0.1, epsilon = 1.0e-3);
    assert_relative_eq!(result.points()[0].position1.y, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(result.points()[0].position2.y, 0.4, epsilon = 1.0e-3);
}

#[test]
fn cylinder_resting_on_box() {
    let cuboid = Geometry::from(Cuboid::new(Vector::repeat(0.5)));
    let cylinder = Geometry::from(Cylinder::new(0.5, 0.5));
    let pos2 = Isometry::translation(0.0, 0.95, 0.0);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    let detector = CollisionMatrix::new().detector(GeometryType::Cuboid, GeometryType::Cylinder);
    detector.detect(&mut ctx, &mut result, &cuboid, &cylinder, &Isometry::identity(), &pos2, None);

    assert_eq!(result.num_points(), 1);
    assert_relative_eq!(result.normal, Vector::y(), epsilon = 1.0e-3);
    assert_relative_eq!(result.points()[0].depth, 0.05, epsilon = 1.0e-3);
}

#[test]
fn sphere_touching_the_cylinder_core_wall() {
    let cylinder = Geometry::from(Cylinder::new(0.5, 0.3));
    let sphere = Geometry::from(Sphere::new(0.5));
    let angle: Real = 0.7;
    let radial = Vector::new(angle.cos(), 0.0, angle.sin());
    // Just outside the core wall, which sits 0.25 away from the axis.
    let center = radial * 0.252 + Vector::y() * 0.1;
    let pos2 = Isometry::translation(center.x, center.y, center.z);
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    let detector = CollisionMatrix::new().detector(GeometryType::Cylinder, GeometryType::Sphere);
    assert_eq!(detector, Detector::GjkEpa);
    detector.detect(&mut ctx, &mut result, &cylinder, &sphere, &Isometry::identity(), &pos2, None);

    assert_eq!(result.num_points(), 1);
    assert_relative_eq!(result.points()[0].depth, 0.548, epsilon = 1.0e-3);
    assert_relative_eq!(result.normal.norm(), 1.0, epsilon = 1.0e-3);
    assert!(result.normal.dot(&radial) > 0.9);
}

#[test]
fn deep_penetration_uses_epa() {
    let mut gjk_epa = GjkEpa::new();
    let cuboid = Cuboid::with_margin(Vector::new(2.0, 1.0, 1.0), 0.0);
    let pos1 = Isometry::translation(3.5, 0.0, 0.0);

    let res = gjk_epa
        .compute_closest_points(&cuboid, &cuboid, &pos1, &Isometry::identity(), None)
        .unwrap();
    assert_relative_eq!(res.distance, -0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*res.normal, -Vector::x(), epsilon = 1.0e-3);

    let pos1 = Isometry::translation(0.0, 0.2, 0.0);
    let res = gjk_epa
        .compute_closest_points(&cuboid, &cuboid, &pos1, &Isometry::identity(), None)
        .unwrap();
    assert_relative_eq!(res.distance, -1.8, epsilon = 1.0e-3);
    assert_relative_eq!(*res.normal, -Vector::y(), epsilon = 1.0e-3);
}

#[test]
fn epa_size_limit_is_reported() {
    let mut gjk_epa = GjkEpa::with_epa_limits(4, 4);
    let cylinder = Cylinder::new(1.0, 1.0);
    let pos2 = Isometry::from_parts(
        Translation3::new(0.1, 0.2, 0.05),
        UnitQuaternion::from_euler_angles(0.3, 0.5, 0.7),
    );

    let res = gjk_epa.compute_closest_points(
        &cylinder,
        &cylinder,
        &Isometry::identity(),
        &pos2,
        None,
    );

    assert_eq!(res, Err(GjkEpaError::EpaDidNotConverge));
}

#[test]
fn gjk_cache_warm_start() {
    let cuboid = Geometry::from(Cuboid::new(Vector::new(0.6, 0.4, 0.5)));
    let cylinder = Geometry::from(Cylinder::new(0.5, 0.3));
    let pos1 = Isometry::identity();
    let pos2 = Isometry::from_parts(
        Translation3::new(0.2, 0.8, 0.1),
        UnitQuaternion::from_euler_angles(0.0, 0.4, 0.0),
    );
    let mut ctx = DetectorContext::default();
    let mut cache = CachedDetectorData::new();
    let mut cold = DetectorResult::new();
    let mut warm = DetectorResult::new();

    Detector::GjkEpa.detect(&mut ctx, &mut cold, &cuboid, &cylinder, &pos1, &pos2, None);
    Detector::GjkEpa.detect(&mut ctx, &mut warm, &cuboid, &cylinder, &pos1, &pos2, Some(&mut cache));
    assert!(cache.gjk_cache().is_some());
    Detector::GjkEpa.detect(&mut ctx, &mut warm, &cuboid, &cylinder, &pos1, &pos2, Some(&mut cache));

    assert_eq!(cold.num_points(), 1);
    assert_eq!(warm.num_points(), 1);
    assert_relative_eq!(cold.max_depth(), 0.1, epsilon = 1.0e-3);
    assert_relative_eq!(cold.max_depth(), warm.max_depth(), epsilon = 1.0e-3);
    assert!(cold.normal.dot(&warm.normal) > 0.999);
}

#[test]
fn disabled_cache_is_left_untouched() {
    let sphere = Geometry::from(Sphere::new(0.5));
    let cuboid = Geometry::from(Cuboid::new(Vector::repeat(0.5)));
    let pos2 = Isometry::translation(0.0, 0.8, 0.0);
    let settings = DetectorSettings {
        enable_gjk_caching: false,
        ..DetectorSettings::default()
    };
    let mut ctx = DetectorContext::new(settings);
    let mut cache = CachedDetectorData::new();
    let mut result = DetectorResult::new();

    Detector::GjkEpa.detect(
        &mut ctx,
        &mut result,
        &cuboid,
        &sphere,
        &Isometry::identity(),
        &pos2,
        Some(&mut cache),
    );

    assert_eq!(result.num_points(), 1);
    assert!(cache.gjk_cache().is_none());
}
