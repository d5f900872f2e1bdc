//! Support mapping based Cone shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{SupportMap, DEFAULT_GJK_MARGIN};
use na::ComplexField; // for .sqrt()

/// A cone with its principal axis aligned with the `y` axis.
///
/// The apex points toward `+y`; the base disk lies at `y = -half_height`.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(from = "ConeDesc")
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// The half-height of the cone.
    pub half_height: Real,
    /// The base radius of the cone.
    pub radius: Real,
    margin: Real,
    // Apex height, base height and base radius of the core.
    core: [Real; 3],
}

impl Cone {
    /// Creates a new cone with the default GJK margin.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cone along the `y` axis.
    /// * `radius` - the length of the cone along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cone {
        Self::with_margin(half_height, radius, DEFAULT_GJK_MARGIN)
    }

    /// Creates a new cone with an explicit GJK margin.
    ///
    /// The margin is clamped so that the core of the cone never turns inside-out.
    pub fn with_margin(half_height: Real, radius: Real, margin: Real) -> Cone {
        let slant = (radius * radius + 4.0 * half_height * half_height).sqrt();

        if slant == 0.0 {
            return Cone {
                half_height,
                radius,
                margin: 0.0,
                core: [half_height, -half_height, radius],
            };
        }

        let sin_theta = radius / slant;
        let cos_theta = 2.0 * half_height / slant;
        let margin = margin.max(0.0).min(radius * cos_theta / (1.0 + sin_theta));

        // The core is the cone shrunk by `margin` along each face normal. Its
        // apex slides along the axis while its base moves up by exactly `margin`.
        let apex = if sin_theta > 0.0 {
            half_height - margin / sin_theta
        } else {
            half_height - margin
        };
        let base = margin - half_height;
        let base_radius = if cos_theta > 0.0 {
            (radius - margin * (1.0 + sin_theta) / cos_theta).max(0.0)
        } else {
            radius - margin
        };

        Cone {
            half_height,
            radius,
            margin,
            core: [apex.max(base), base, base_radius],
        }
    }
}

// The core of a deserialized cone is rebuilt rather than trusted.
#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct ConeDesc {
    half_height: Real,
    radius: Real,
    margin: Real,
}

#[cfg(feature = "serde-serialize")]
impl From<ConeDesc> for Cone {
    fn from(desc: ConeDesc) -> Self {
        Self::with_margin(desc.half_height, desc.radius, desc.margin)
    }
}

impl SupportMap for Cone {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let [apex, base, base_radius] = self.core;
        let horizontal_len = (dir.x * dir.x + dir.z * dir.z).sqrt();

        if horizontal_len == 0.0 {
            return if dir.y > 0.0 {
                Point::new(0.0, apex, 0.0)
            } else {
                Point::new(0.0, base, 0.0)
            };
        }

        let scale = base_radius / horizontal_len;
        let rim = Point::new(dir.x * scale, base, dir.z * scale);

        if dir.y * apex > rim.coords.dot(dir) {
            Point::new(0.0, apex, 0.0)
        } else {
            rim
        }
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }
}
