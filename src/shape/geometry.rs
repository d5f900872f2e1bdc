use crate::math::Real;
use crate::shape::{Capsule, Cone, ConvexHull, Cuboid, Cylinder, Sphere, SupportMap};

/// Enum representing the type of a geometry.
///
/// The discriminant of each variant is the row/column of this geometry type in the
/// [`CollisionMatrix`](crate::query::CollisionMatrix).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeometryType {
    /// A sphere.
    Sphere = 0,
    /// A box.
    Cuboid = 1,
    /// A cylinder.
    Cylinder = 2,
    /// A cone.
    Cone = 3,
    /// A capsule.
    Capsule = 4,
    /// A convex hull.
    ConvexHull = 5,
}

impl GeometryType {
    /// The number of geometry types.
    pub const COUNT: usize = 6;

    /// All the geometry types, ordered by id.
    pub const ALL: [GeometryType; Self::COUNT] = [
        GeometryType::Sphere,
        GeometryType::Cuboid,
        GeometryType::Cylinder,
        GeometryType::Cone,
        GeometryType::Capsule,
        GeometryType::ConvexHull,
    ];

    /// The integer id of this geometry type.
    #[inline]
    pub fn id(self) -> usize {
        self as usize
    }
}

/// A convex collision geometry.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub enum Geometry {
    /// A sphere.
    Sphere(Sphere),
    /// A box.
    Cuboid(Cuboid),
    /// A cylinder.
    Cylinder(Cylinder),
    /// A cone.
    Cone(Cone),
    /// A capsule.
    Capsule(Capsule),
    /// A convex hull.
    ConvexHull(ConvexHull),
}

impl Geometry {
    /// The type of this geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Sphere(_) => GeometryType::Sphere,
            Geometry::Cuboid(_) => GeometryType::Cuboid,
            Geometry::Cylinder(_) => GeometryType::Cylinder,
            Geometry::Cone(_) => GeometryType::Cone,
            Geometry::Capsule(_) => GeometryType::Capsule,
            Geometry::ConvexHull(_) => GeometryType::ConvexHull,
        }
    }

    /// This geometry as a support-mapped shape.
    pub fn as_support_map(&self) -> &dyn SupportMap {
        match self {
            Geometry::Sphere(s) => s,
            Geometry::Cuboid(s) => s,
            Geometry::Cylinder(s) => s,
            Geometry::Cone(s) => s,
            Geometry::Capsule(s) => s,
            Geometry::ConvexHull(s) => s,
        }
    }

    /// The GJK margin of this geometry.
    pub fn margin(&self) -> Real {
        self.as_support_map().margin()
    }

    /// Converts this geometry to a sphere, if it is one.
    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Geometry::Sphere(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this geometry to a box, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            Geometry::Cuboid(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this geometry to a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match self {
            Geometry::Capsule(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_shape(
    ($($Shape: ident),*) => {$(
        impl From<$Shape> for Geometry {
            fn from(shape: $Shape) -> Self {
                Geometry::$Shape(shape)
            }
        }
    )*}
);

impl_from_shape!(Sphere, Cuboid, Cylinder, Cone, Capsule, ConvexHull);
