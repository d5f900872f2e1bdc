use crate::math::{Isometry, Real};
use crate::query::detectors;
use crate::query::{CachedDetectorData, DetectorContext, DetectorResult};
use crate::shape::Geometry;

/// A contact detector for a specific pair of geometry types.
///
/// Only [`Detector::GjkEpa`] uses the mutable state of the [`DetectorContext`] and the
/// per-pair cache. All the other detectors are pure functions of the shapes and their
/// positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Detector {
    /// Sphere against sphere.
    SphereSphere,
    /// Sphere against box.
    SphereBox,
    /// Box against sphere.
    BoxSphere,
    /// Sphere against capsule.
    SphereCapsule,
    /// Capsule against sphere.
    CapsuleSphere,
    /// Capsule against capsule.
    CapsuleCapsule,
    /// Box against box.
    BoxBox,
    /// Any convex shape against any convex shape.
    GjkEpa,
}

impl Detector {
    /// Computes the contacts between `geom1` positioned at `pos1` and `geom2` positioned
    /// at `pos2`.
    ///
    /// `result` is cleared first. If the geometry types don't match this detector, no
    /// contact is generated.
    pub fn detect(
        &self,
        ctx: &mut DetectorContext,
        result: &mut DetectorResult,
        geom1: &Geometry,
        geom2: &Geometry,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        cache: Option<&mut CachedDetectorData>,
    ) {
        result.clear();

        let matched = match self {
            Detector::SphereSphere => match (geom1.as_sphere(), geom2.as_sphere()) {
                (Some(s1), Some(s2)) => {
                    detectors::detect_sphere_sphere(result, s1, s2, pos1, pos2);
                    true
                }
                _ => false,
            },
            Detector::SphereBox => match (geom1.as_sphere(), geom2.as_cuboid()) {
                (Some(s1), Some(c2)) => {
                    detectors::detect_sphere_box(result, s1, c2, pos1, pos2);
                    true
                }
                _ => false,
            },
            Detector::BoxSphere => match (geom1.as_cuboid(), geom2.as_sphere()) {
                (Some(c1), Some(s2)) => {
                    detectors::detect_sphere_box(result, s2, c1, pos2, pos1);
                    result.flip();
                    true
                }
                _ => false,
            },
            Detector::SphereCapsule => match (geom1.as_sphere(), geom2.as_capsule()) {
                (Some(s1), Some(c2)) => {
                    detectors::detect_sphere_capsule(result, s1, c2, pos1, pos2);
                    true
                }
                _ => false,
            },
            Detector::CapsuleSphere => match (geom1.as_capsule(), geom2.as_sphere()) {
                (Some(c1), Some(s2)) => {
                    detectors::detect_sphere_capsule(result, s2, c1, pos2, pos1);
                    result.flip();
                    true
                }
                _ => false,
            },
            Detector::CapsuleCapsule => match (geom1.as_capsule(), geom2.as_capsule()) {
                (Some(c1), Some(c2)) => {
                    detectors::detect_capsule_capsule(result, c1, c2, pos1, pos2);
                    true
                }
                _ => false,
            },
            Detector::BoxBox => match (geom1.as_cuboid(), geom2.as_cuboid()) {
                (Some(c1), Some(c2)) => {
                    detectors::detect_box_box(&ctx.settings, result, c1, c2, pos1, pos2);
                    true
                }
                _ => false,
            },
            Detector::GjkEpa => {
                detectors::detect_gjk_epa(
                    &mut ctx.gjk_epa,
                    &ctx.settings,
                    result,
                    geom1,
                    geom2,
                    pos1,
                    pos2,
                    cache,
                );
                true
            }
        };

        if !matched {
            log::debug!(
                "The {:?} detector cannot handle a {:?} and a {:?}.",
                self,
                geom1.geometry_type(),
                geom2.geometry_type()
            );
        }
    }
}
