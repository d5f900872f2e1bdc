use crate::query::Detector;
use crate::shape::GeometryType;

/// The table selecting the detector to use for each pair of geometry types.
///
/// The lookup is not necessarily symmetric: `detector(a, b)` and `detector(b, a)` may
/// return different detectors, each expecting its arguments in its own order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionMatrix {
    detectors: [[Detector; GeometryType::COUNT]; GeometryType::COUNT],
}

impl Default for CollisionMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionMatrix {
    /// Creates the default table.
    ///
    /// Pairs of spheres, boxes and capsules use closed-form detectors. Everything else
    /// uses GJK/EPA.
    pub fn new() -> Self {
        let mut detectors = [[Detector::GjkEpa; GeometryType::COUNT]; GeometryType::COUNT];
        let dedicated = [
            (GeometryType::Sphere, GeometryType::Sphere, Detector::SphereSphere),
            (GeometryType::Sphere, GeometryType::Cuboid, Detector::SphereBox),
            (GeometryType::Cuboid, GeometryType::Sphere, Detector::BoxSphere),
            (GeometryType::Sphere, GeometryType::Capsule, Detector::SphereCapsule),
            (GeometryType::Capsule, GeometryType::Sphere, Detector::CapsuleSphere),
            (GeometryType::Capsule, GeometryType::Capsule, Detector::CapsuleCapsule),
            (GeometryType::Cuboid, GeometryType::Cuboid, Detector::BoxBox),
        ];

        for (type1, type2, detector) in dedicated {
            detectors[type1.id()][type2.id()] = detector;
        }

        Self { detectors }
    }

    /// The detector handling a geometry of type `type1` against a geometry of type `type2`.
    #[inline]
    pub fn detector(&self, type1: GeometryType, type2: GeometryType) -> Detector {
        self.detectors[type1.id()][type2.id()]
    }

    /// Overrides the detector used for a geometry of type `type1` against a geometry of
    /// type `type2`.
    ///
    /// Only [`Detector::GjkEpa`] can handle any pair. Other detectors generate no contact
    /// for geometry types they don't support.
    pub fn set_detector(&mut self, type1: GeometryType, type2: GeometryType, detector: Detector) {
        self.detectors[type1.id()][type2.id()] = detector;
    }
}
