//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{SupportMap, DEFAULT_GJK_MARGIN};
use na;
use num::Zero;

/// A cylinder shape with its principal axis aligned with the `y` axis.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(from = "CylinderDesc")
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
    margin: Real,
}

impl Cylinder {
    /// Creates a new cylinder with the default GJK margin.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Self::with_margin(half_height, radius, DEFAULT_GJK_MARGIN)
    }

    /// Creates a new cylinder with an explicit GJK margin.
    pub fn with_margin(half_height: Real, radius: Real, margin: Real) -> Cylinder {
        let margin = margin.max(0.0).min(half_height).min(radius);
        Cylinder {
            half_height,
            radius,
            margin,
        }
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct CylinderDesc {
    half_height: Real,
    radius: Real,
    margin: Real,
}

#[cfg(feature = "serde-serialize")]
impl From<CylinderDesc> for Cylinder {
    fn from(desc: CylinderDesc) -> Self {
        Self::with_margin(desc.half_height, desc.radius, desc.margin)
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        vres[1] = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = na::zero()
        } else {
            vres *= self.radius - self.margin;
        }

        vres[1] = if dir[1] >= 0.0 {
            self.half_height - self.margin
        } else {
            self.margin - self.half_height
        };

        Point::from(vres)
    }

    fn margin(&self) -> Real {
        self.margin
    }
}
