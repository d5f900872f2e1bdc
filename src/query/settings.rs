use crate::math::Real;
use crate::query::epa::{DEFAULT_MAX_EPA_FACES, DEFAULT_MAX_EPA_VERTICES};
use crate::query::gjk::GjkEpa;
use crate::query::MAX_MANIFOLD_POINTS;

/// Parameters of the contact detectors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DetectorSettings {
    /// Penetration depth tolerated before a different separating axis is preferred.
    ///
    /// The box-box detector only selects an edge-edge contact if it is shallower than the
    /// best face contact by more than this amount.
    pub linear_slop: Real,
    /// Distance above which separated box-box contact points are discarded.
    pub contact_persistence_threshold: Real,
    /// The maximum number of points generated for a single shape pair. Values larger than
    /// [`MAX_MANIFOLD_POINTS`] are ignored.
    pub max_manifold_points: usize,
    /// Whether the GJK/EPA detector warm-starts from the per-pair cache.
    pub enable_gjk_caching: bool,
    /// The maximum number of vertices of the EPA polyhedron.
    pub max_epa_vertices: usize,
    /// The maximum number of faces of the EPA polyhedron.
    pub max_epa_polyhedron_faces: usize,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            linear_slop: 0.005,
            contact_persistence_threshold: 0.03,
            max_manifold_points: MAX_MANIFOLD_POINTS,
            enable_gjk_caching: true,
            max_epa_vertices: DEFAULT_MAX_EPA_VERTICES,
            max_epa_polyhedron_faces: DEFAULT_MAX_EPA_FACES,
        }
    }
}

/// The mutable state shared by all the detector invocations of one thread.
#[derive(Clone, Debug, Default)]
pub struct DetectorContext {
    /// The detector parameters.
    pub settings: DetectorSettings,
    /// The GJK/EPA engine, reused across calls to avoid allocations.
    pub gjk_epa: GjkEpa,
}

impl DetectorContext {
    /// Creates a new context with the given settings.
    pub fn new(settings: DetectorSettings) -> Self {
        Self {
            settings,
            gjk_epa: GjkEpa::with_epa_limits(
                settings.max_epa_vertices,
                settings.max_epa_polyhedron_faces,
            ),
        }
    }
}
