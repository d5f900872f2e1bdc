/*!
narrow3d
========

**narrow3d** is the narrow-phase of a 3-dimensional rigid-body collision
pipeline, written with the rust programming language.

Given two convex shapes flagged as potentially overlapping by a broad-phase,
it computes their contact points, contact normal and penetration depth using
either a closed-form detector (sphere, box and capsule pairs) or the generic
GJK/EPA algorithm.

```
use narrow3d::math::{Isometry, Vector};
use narrow3d::query::{CollisionMatrix, DetectorContext, DetectorResult};
use narrow3d::shape::{Geometry, Sphere};

let sphere1 = Geometry::from(Sphere::new(1.0));
let sphere2 = Geometry::from(Sphere::new(1.0));
let pos1 = Isometry::identity();
let pos2 = Isometry::translation(1.5, 0.0, 0.0);

let matrix = CollisionMatrix::new();
let mut context = DetectorContext::default();
let mut result = DetectorResult::new();

let detector = matrix.detector(sphere1.geometry_type(), sphere2.geometry_type());
detector.detect(&mut context, &mut result, &sphere1, &sphere2, &pos1, &pos2, None);

assert_eq!(result.num_points(), 1);
assert_eq!(result.normal, Vector::x());
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Detectors naturally take two shapes and two positions.
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg_attr(all(test, not(feature = "std")), macro_use)]
extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation type placing a shape in world-space.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
