//! Sign manipulation on scalars and vectors.

use crate::math::{Real, Vector};

/// Copies the sign of `self` onto `to`.
///
/// Unlike a comparison with zero, this distinguishes `-0.0` from `0.0`.
pub trait WSign<Rhs>: Sized {
    /// Returns `to` with the sign bit of `self`.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl WSign<Real> for Real {
    #[inline]
    fn copy_sign_to(self, to: Self) -> Self {
        let signbit = (-0.0 as Real).to_bits();
        Real::from_bits((signbit & self.to_bits()) | (!signbit & to.to_bits()))
    }
}

impl WSign<Vector<Real>> for Vector<Real> {
    #[inline]
    fn copy_sign_to(self, to: Vector<Real>) -> Vector<Real> {
        self.zip_map(&to, |s, t| s.copy_sign_to(t))
    }
}
