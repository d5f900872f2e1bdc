//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub(crate) use self::consts::*;
pub(crate) use self::wops::WSign;

mod ccw_face_normal;
mod consts;
mod wops;
