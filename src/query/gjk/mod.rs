//! The Gilbert-Johnson-Keerthi distance algorithm, and the GJK/EPA query engine.

pub use self::cso_point::CSOPoint;
pub use self::gjk_epa::{ClosestPoints, GjkEpa};
pub use self::simplex::{
    project_origin2, project_origin3, project_origin4, SimplexMask, SimplexProjection,
};

mod cso_point;
mod gjk_epa;
mod simplex;
