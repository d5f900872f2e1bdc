#[macro_use]
extern crate approx;

mod box_box;
mod capsules;
mod closed_form_vs_gjk_epa;
mod gjk_epa;
mod random_transforms;
mod sphere_sphere;
mod swapped_detectors;
