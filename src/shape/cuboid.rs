//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{SupportMap, DEFAULT_GJK_MARGIN};
use crate::utils::WSign;

/// A box shape, centered at the origin of its local frame and aligned with its axes.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(from = "CuboidDesc")
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
    margin: Real,
}

impl Cuboid {
    /// Creates a new box from its half-extents, with the default GJK margin.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Self::with_margin(half_extents, DEFAULT_GJK_MARGIN)
    }

    /// Creates a new box from its half-extents and an explicit GJK margin.
    ///
    /// The margin is clamped so that it never exceeds the smallest half-extent.
    #[inline]
    pub fn with_margin(half_extents: Vector<Real>, margin: Real) -> Cuboid {
        let margin = margin.max(0.0).min(half_extents.min());
        Cuboid {
            half_extents,
            margin,
        }
    }

    /// The half-extents of the core of this box, i.e., the box shrunk by its margin.
    #[inline]
    pub fn core_half_extents(&self) -> Vector<Real> {
        self.half_extents.add_scalar(-self.margin)
    }
}

// Deserialized boxes go through `with_margin` so that their margin gets clamped.
#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct CuboidDesc {
    half_extents: Vector<Real>,
    margin: Real,
}

#[cfg(feature = "serde-serialize")]
impl From<CuboidDesc> for Cuboid {
    fn from(desc: CuboidDesc) -> Self {
        Self::with_margin(desc.half_extents, desc.margin)
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.core_half_extents()).into()
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }
}
