//! Polygon clipping used to build box-box contact manifolds.

pub use self::clip_rect_polygon::{
    clip_halfspace_polygon, clip_rect_polygon, ClippedPolygon, MAX_CLIPPED_VERTICES,
};

mod clip_rect_polygon;
