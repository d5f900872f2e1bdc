//! The Expanding Polytope Algorithm computing the penetration depth of two convex shapes.

pub use self::epa::{Epa, DEFAULT_MAX_EPA_FACES, DEFAULT_MAX_EPA_VERTICES};
pub use self::polyhedron::{EpaPolyhedron, EpaTriangle, EpaVertex};

mod epa;
mod polyhedron;
