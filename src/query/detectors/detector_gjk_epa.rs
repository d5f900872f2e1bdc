use crate::math::{Isometry, Real, DEFAULT_EPSILON};
use crate::query::gjk::GjkEpa;
use crate::query::{CachedDetectorData, DetectorResult, DetectorSettings};
use crate::shape::Geometry;
use na::Unit;

/// Contact between any two convex shapes, using the GJK and EPA algorithms.
///
/// The closest points are computed between the cores of both shapes, then moved onto
/// their margin-inflated surfaces. Failures of the solvers are reported as the absence of
/// contact.
pub fn detect_gjk_epa(
    gjk_epa: &mut GjkEpa,
    settings: &DetectorSettings,
    result: &mut DetectorResult,
    g1: &Geometry,
    g2: &Geometry,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
    cache: Option<&mut CachedDetectorData>,
) {
    let sm1 = g1.as_support_map();
    let sm2 = g2.as_support_map();
    let mut gjk_cache = cache
        .filter(|_| settings.enable_gjk_caching)
        .map(|data| data.gjk_cache_mut());

    gjk_epa.set_epa_limits(settings.max_epa_vertices, settings.max_epa_polyhedron_faces);

    let closest = match gjk_epa.compute_closest_points(sm1, sm2, pos1, pos2, gjk_cache.as_deref_mut())
    {
        Ok(closest) => closest,
        Err(err) => {
            log::debug!(
                "GJK/EPA failed between a {:?} and a {:?}: {}",
                g1.geometry_type(),
                g2.geometry_type(),
                err
            );

            // Don't warm-start the next query with the direction of a failed one.
            if let Some(cache) = gjk_cache {
                cache.clear();
            }
            return;
        }
    };

    let margin1 = sm1.margin();
    let margin2 = sm2.margin();

    if closest.distance >= margin1 + margin2 {
        return;
    }

    let normal = Unit::try_new(closest.point2 - closest.point1, DEFAULT_EPSILON)
        .map(|n| if closest.distance < 0.0 { -n } else { n })
        .unwrap_or(closest.normal);

    result.normal = *normal;
    result.incremental = true;
    let _ = result.push_point(
        closest.point1 + *normal * margin1,
        closest.point2 - *normal * margin2,
        margin1 + margin2 - closest.distance,
        0,
    );
}
