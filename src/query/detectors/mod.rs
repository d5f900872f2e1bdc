//! Implementations of the contact detectors for each supported shape pair.

pub use self::detector_box_box::detect_box_box;
pub use self::detector_capsule_capsule::{closest_segment_params, detect_capsule_capsule};
pub use self::detector_gjk_epa::detect_gjk_epa;
pub use self::detector_sphere_box::detect_sphere_box;
pub use self::detector_sphere_capsule::detect_sphere_capsule;
pub use self::detector_sphere_sphere::detect_sphere_sphere;

mod detector_box_box;
mod detector_capsule_capsule;
mod detector_gjk_epa;
mod detector_sphere_box;
mod detector_sphere_capsule;
mod detector_sphere_sphere;
