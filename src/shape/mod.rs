//! Convex shapes supported by the narrow-phase.

pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_hull::{ConvexHull, EmptyConvexHull};
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::geometry::{Geometry, GeometryType};
pub use self::sphere::Sphere;
#[doc(inline)]
pub use self::support_map::SupportMap;

/// The margin given by default to the shapes that are not naturally rounded.
///
/// Boxes, cylinders and cones are shrunk by this amount before being handed to the
/// GJK/EPA algorithm, then inflated back by the same amount when computing contacts.
/// Convex hulls use their vertices as-is and are therefore inflated by their margin.
pub const DEFAULT_GJK_MARGIN: crate::math::Real = 0.05;

mod capsule;
mod cone;
mod convex_hull;
mod cuboid;
mod cylinder;
mod geometry;
mod sphere;
mod support_map;
