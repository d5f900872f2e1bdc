//! Contact detection between pairs of convex shapes.
//!
//! # General case
//! The entry point of this module is the [`CollisionMatrix`]: given the types of two
//! geometries, it returns the [`Detector`] able to compute their contacts. Running
//! [`Detector::detect`] fills a [`DetectorResult`] with up to [`MAX_MANIFOLD_POINTS`]
//! contact points and a contact normal.
//!
//! * Pairs of spheres, boxes and capsules use dedicated closed-form detectors.
//! * Any other pair uses the GJK algorithm to compute the distance between the shapes,
//!   and the EPA algorithm to compute their penetration depth.
//!
//! The mutable state needed by GJK/EPA is carried by a [`DetectorContext`]. Each thread
//! running contact detection should own its own context.
//!
//! # Specific cases
//! The functions exported by the `details` submodule implement each detector for shapes
//! known at compile-time. They have the form `detect_[shape1]_[shape2]()`.

pub use self::cache::{CachedDetectorData, GjkCache};
pub use self::collision_matrix::CollisionMatrix;
pub use self::detector::Detector;
pub use self::detector_result::{DetectorResult, DetectorResultPoint, MAX_MANIFOLD_POINTS};
pub use self::error::{GjkEpaError, PolyhedronError};
pub use self::settings::{DetectorContext, DetectorSettings};

mod cache;
mod clip;
mod collision_matrix;
mod detector;
mod detector_result;
mod detectors;
pub mod epa;
mod error;
pub mod gjk;
mod settings;

/// Detectors dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::detectors::*;
}
