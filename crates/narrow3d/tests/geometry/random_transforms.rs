// Random configurations of every pair of shapes must never break the detectors.

use narrow3d::math::{Isometry, Point, Real, Vector};
use narrow3d::na::{Translation3, UnitQuaternion};
use narrow3d::query::gjk::GjkEpa;
use narrow3d::query::{CollisionMatrix, DetectorContext, DetectorResult, MAX_MANIFOLD_POINTS};
use narrow3d::shape::{Capsule, Cone, ConvexHull, Cuboid, Cylinder, Geometry, Sphere, SupportMap};
use oorandom::Rand32;

fn shapes() -> Vec<Geometry> {
    let hull_points = vec![
        Point::new(0.5, 0.0, 0.0),
        Point::new(-0.5, 0.0, 0.0),
        Point::new(0.0, 0.6, 0.0),
        Point::new(0.0, -0.4, 0.0),
        Point::new(0.0, 0.0, 0.5),
        Point::new(0.0, 0.0, -0.3),
    ];

    vec![
        Sphere::new(0.5).into(),
        Cuboid::new(Vector::new(0.5, 0.3, 0.4)).into(),
        Cylinder::new(0.5, 0.3).into(),
        Cone::new(0.5, 0.4).into(),
        Capsule::new(0.4, 0.3).into(),
        ConvexHull::new(hull_points).unwrap().into(),
    ]
}

fn random_position(rng: &mut Rand32) -> Isometry<Real> {
    random_position_within(rng, 1.0)
}

// Translation coordinates are drawn in `[-extent, extent]`.
fn random_position_within(rng: &mut Rand32, extent: Real) -> Isometry<Real> {
    let mut coord = || (rng.rand_float() as Real) * 2.0 - 1.0;
    let translation = Translation3::new(coord() * extent, coord() * extent, coord() * extent);
    let rotation = UnitQuaternion::from_euler_angles(coord() * 3.0, coord() * 3.0, coord() * 3.0);
    Isometry::from_parts(translation, rotation)
}

fn is_finite(v: &Vector<Real>) -> bool {
    v.iter().all(|x| x.is_finite())
}

#[test]
fn detectors_survive_random_transforms() {
    let mut rng = Rand32::new(0x5eed);
    let shapes = shapes();
    let matrix = CollisionMatrix::new();
    let mut ctx = DetectorContext::default();
    let mut result = DetectorResult::new();

    for _ in 0..200 {
        for g1 in &shapes {
            for g2 in &shapes {
                let pos1 = random_position(&mut rng);
                let pos2 = random_position(&mut rng);
                let detector = matrix.detector(g1.geometry_type(), g2.geometry_type());

                detector.detect(&mut ctx, &mut result, g1, g2, &pos1, &pos2, None);

                assert!(result.num_points() <= MAX_MANIFOLD_POINTS);

                if !result.is_empty() {
                    assert!(is_finite(&result.normal));
                    assert_relative_eq!(result.normal.norm(), 1.0, epsilon = 1.0e-3);
                }

                for pt in result.points() {
                    assert!(pt.depth.is_finite());
                    assert!(is_finite(&pt.position1.coords));
                    assert!(is_finite(&pt.position2.coords));
                }
            }
        }
    }
}

#[test]
fn gjk_epa_terminates_on_random_transforms() {
    let mut rng = Rand32::new(42);
    let shapes = shapes();
    let mut gjk_epa = GjkEpa::new();

    for _ in 0..200 {
        for g1 in &shapes {
            for g2 in &shapes {
                let pos1 = random_position(&mut rng);
                let pos2 = random_position(&mut rng);

                // Either a success or a typed error, but never a panic or a NaN.
                if let Ok(res) = gjk_epa.compute_closest_points(
                    g1.as_support_map(),
                    g2.as_support_map(),
                    &pos1,
                    &pos2,
                    None,
                ) {
                    assert!(res.distance.is_finite());
                    assert!(is_finite(&res.normal));
                    assert!(is_finite(&res.point1.coords));
                    assert!(is_finite(&res.point2.coords));
                }
            }
        }
    }
}

#[test]
fn gjk_epa_succeeds_on_overlapping_random_transforms() {
    let mut rng = Rand32::new(0xc0ffee);
    let shapes = shapes();
    let mut gjk_epa = GjkEpa::new();
    let mut total = 0;
    let mut failures = 0;

    // Every shape contains a ball of radius 0.18 around its origin, so these all overlap.
    for _ in 0..200 {
        for g1 in &shapes {
            for g2 in &shapes {
                let pos1 = random_position_within(&mut rng, 0.08);
                let pos2 = random_position_within(&mut rng, 0.08);
                let (s1, s2) = (g1.as_support_map(), g2.as_support_map());
                total += 1;

                match gjk_epa.compute_closest_points(s1, s2, &pos1, &pos2, None) {
                    Ok(res) => assert!(res.distance < s1.margin() + s2.margin()),
                    Err(_) => failures += 1,
                }
            }
        }
    }

    assert!(failures * 100 <= total, "{} failures out of {}", failures, total);
}
