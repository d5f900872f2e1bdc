//! Contact between boxes, using the Separating Axis Theorem and face clipping.

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::clip::{self, ClippedPolygon};
use crate::query::{DetectorResult, DetectorSettings, MAX_MANIFOLD_POINTS};
use crate::shape::Cuboid;
use arrayvec::ArrayVec;
use na::ComplexField; // for .abs(), .sqrt()

/// Squared length under which the cross product of two edge directions is ignored.
const EDGE_AXIS_EPSILON_SQ: Real = 1.0e-12;
/// The id of the single point of an edge-edge contact.
const EDGE_CONTACT_ID: u32 = 4;

// The frame of one of the boxes.
#[derive(Copy, Clone, Debug)]
struct BoxFrame {
    center: Vector<Real>,
    axes: [Vector<Real>; 3],
    half_extents: Vector<Real>,
}

impl BoxFrame {
    fn new(cuboid: &Cuboid, pos: &Isometry<Real>) -> Self {
        let rot = pos.rotation.to_rotation_matrix();
        let rot = rot.matrix();

        Self {
            center: pos.translation.vector,
            axes: [
                rot.column(0).into_owned(),
                rot.column(1).into_owned(),
                rot.column(2).into_owned(),
            ],
            half_extents: cuboid.half_extents,
        }
    }

    // Half the length of the projection of this box on `axis`.
    fn project(&self, axis: &Vector<Real>) -> Real {
        (0..3)
            .map(|i| axis.dot(&self.axes[i]).abs() * self.half_extents[i])
            .sum()
    }
}

#[derive(Copy, Clone, Debug)]
struct SeparatingAxis {
    id: usize,
    axis: Vector<Real>,
    depth: Real,
}

impl SeparatingAxis {
    // Returns `false` if the boxes are separated along `axis`.
    fn test(
        &mut self,
        id: usize,
        axis: Vector<Real>,
        proj1: Real,
        proj2: Real,
        c12: &Vector<Real>,
    ) -> bool {
        let overlap = proj1 + proj2 - axis.dot(c12).abs();

        if overlap <= 0.0 {
            return false;
        }

        if overlap < self.depth {
            *self = SeparatingAxis {
                id,
                axis,
                depth: overlap,
            };
        }

        true
    }
}

/// Contact between boxes.
///
/// Generates up to four contact points when the axis of minimum penetration is a face
/// normal, and a single point when it is the cross product of two edges.
pub fn detect_box_box(
    settings: &DetectorSettings,
    result: &mut DetectorResult,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) {
    let box1 = BoxFrame::new(cuboid1, pos1);
    let box2 = BoxFrame::new(cuboid2, pos2);
    let c12 = box2.center - box1.center;

    let mut best = SeparatingAxis {
        id: 0,
        axis: box1.axes[0],
        depth: Real::MAX,
    };

    /*
     * Face normals.
     */
    for i in 0..3 {
        let axis = box1.axes[i];
        if !best.test(i, axis, box1.half_extents[i], box2.project(&axis), &c12) {
            return;
        }
    }

    for i in 0..3 {
        let axis = box2.axes[i];
        if !best.test(3 + i, axis, box1.project(&axis), box2.half_extents[i], &c12) {
            return;
        }
    }

    // Favor face contacts: an edge axis must be better than the best face by the slop.
    best.depth -= settings.linear_slop;

    /*
     * Edge cross products.
     */
    for i in 0..3 {
        for j in 0..3 {
            let axis = box1.axes[i].cross(&box2.axes[j]);
            let length_squared = axis.norm_squared();

            if length_squared <= EDGE_AXIS_EPSILON_SQ {
                continue;
            }

            let axis = axis / length_squared.sqrt();
            let (proj1, proj2) = (box1.project(&axis), box2.project(&axis));

            if !best.test(6 + i * 3 + j, axis, proj1, proj2, &c12) {
                return;
            }
        }
    }

    best.depth -= settings.linear_slop;

    let normal = if best.axis.dot(&c12) < 0.0 {
        -best.axis
    } else {
        best.axis
    };

    result.normal = normal;

    if best.id >= 6 {
        push_edge_contact(result, &box1, &box2, best.id - 6, &normal, best.depth);
    } else {
        push_face_contacts(settings, result, &box1, &box2, best.id, &normal, best.depth);
    }
}

fn push_edge_contact(
    result: &mut DetectorResult,
    box1: &BoxFrame,
    box2: &BoxFrame,
    edge_id: usize,
    normal: &Vector<Real>,
    depth: Real,
) {
    let (i, j) = (edge_id / 3, edge_id % 3);

    // The supporting edges: box1 toward the normal, box2 toward its opposite.
    let mut p1 = box1.center;
    let mut p2 = box2.center;

    for k in 0..3 {
        if k != i {
            let sign = if box1.axes[k].dot(normal) >= 0.0 { 1.0 } else { -1.0 };
            p1 += box1.axes[k] * (box1.half_extents[k] * sign);
        }

        if k != j {
            let sign = if box2.axes[k].dot(normal) >= 0.0 { -1.0 } else { 1.0 };
            p2 += box2.axes[k] * (box2.half_extents[k] * sign);
        }
    }

    let d1 = box1.axes[i];
    let d2 = box2.axes[j];
    let r = p1 - p2;
    let b = d1.dot(&d2);
    let c = d1.dot(&r);
    let f = d2.dot(&r);
    let denom = 1.0 - b * b;

    let h1 = box1.half_extents[i];
    let h2 = box2.half_extents[j];
    let s = if denom > EDGE_AXIS_EPSILON_SQ {
        ((b * f - c) / denom).clamp(-h1, h1)
    } else {
        0.0
    };
    let t = (b * s + f).clamp(-h2, h2);

    let _ = result.push_point(
        Point::from(p1 + d1 * s),
        Point::from(p2 + d2 * t),
        depth.max(0.0),
        EDGE_CONTACT_ID,
    );
}

fn push_face_contacts(
    settings: &DetectorSettings,
    result: &mut DetectorResult,
    box1: &BoxFrame,
    box2: &BoxFrame,
    face_id: usize,
    normal: &Vector<Real>,
    depth: Real,
) {
    // The reference box owns the separating face. Its normal points toward the incident box.
    let (reference, incident, ref_normal, swapped) = if face_id < 3 {
        (box1, box2, *normal, false)
    } else {
        (box2, box1, -*normal, true)
    };

    let ri = face_id % 3;
    let (ui, vi) = ((ri + 1) % 3, (ri + 2) % 3);
    let ref_center = Point::from(reference.center + ref_normal * reference.half_extents[ri]);

    // The incident face is the one most anti-parallel to the reference normal.
    let ii = (0..3)
        .map(|k| incident.axes[k].dot(&ref_normal).abs())
        .enumerate()
        .fold((0, -1.0), |best, (k, d)| if d > best.1 { (k, d) } else { best })
        .0;
    let inc_normal = if incident.axes[ii].dot(&ref_normal) > 0.0 {
        -incident.axes[ii]
    } else {
        incident.axes[ii]
    };

    let inc_center = Point::from(incident.center + inc_normal * incident.half_extents[ii]);
    let inc_u = incident.axes[(ii + 1) % 3] * incident.half_extents[(ii + 1) % 3];
    let inc_v = incident.axes[(ii + 2) % 3] * incident.half_extents[(ii + 2) % 3];
    let incident_face = [
        inc_center + inc_u + inc_v,
        inc_center - inc_u + inc_v,
        inc_center - inc_u - inc_v,
        inc_center + inc_u - inc_v,
    ];

    let clipped = clip::clip_rect_polygon(
        &ref_center,
        &reference.axes[ui],
        reference.half_extents[ui],
        &reference.axes[vi],
        reference.half_extents[vi],
        &incident_face,
    );

    let selected = reduce_polygon(&clipped, &ref_center, &reference.axes[ui], &reference.axes[vi]);
    let max_points = settings.max_manifold_points.min(MAX_MANIFOLD_POINTS);
    let depth_of = |pt: &Point<Real>| (ref_center - pt).dot(&ref_normal);
    let mut contacts = ArrayVec::<(Point<Real>, Real), MAX_MANIFOLD_POINTS>::new();

    for idx in selected {
        if contacts.len() >= max_points {
            break;
        }

        let pt = clipped[idx];
        let pt_depth = depth_of(&pt);

        if pt_depth >= -settings.contact_persistence_threshold {
            contacts.push((pt, pt_depth));
        }
    }

    // The whole incident face got clipped away: keep its deepest vertex.
    if contacts.is_empty() && max_points > 0 {
        let deepest = incident_face
            .iter()
            .copied()
            .max_by(|a, b| depth_of(a).total_cmp(&depth_of(b)));

        if let Some(pt) = deepest {
            contacts.push((pt, depth_of(&pt)));
        }
    }

    // Clipping and reduction may discard the deepest part of the incident face. The
    // retained contacts must still report the overlap along the separating axis.
    if let Some(deepest) = contacts.iter_mut().max_by(|a, b| a.1.total_cmp(&b.1)) {
        deepest.1 = deepest.1.max(depth);
    }

    for (id, (pt, pt_depth)) in contacts.into_iter().enumerate() {
        let on_reference = pt + ref_normal * pt_depth;
        let (position1, position2) = if swapped {
            (pt, on_reference)
        } else {
            (on_reference, pt)
        };
        let _ = result.push_point(position1, position2, pt_depth, id as u32);
    }
}

/// Selects at most four vertices of the clipped polygon.
///
/// The vertices are the extremal points along the two diagonals of the reference face.
/// This only looks at the shape of the polygon: a deeper vertex lying between two
/// extremal ones is dropped, so the caller restores the separating axis depth on the
/// deepest retained contact.
fn reduce_polygon(
    polygon: &ClippedPolygon,
    center: &Point<Real>,
    u: &Vector<Real>,
    v: &Vector<Real>,
) -> ArrayVec<usize, MAX_MANIFOLD_POINTS> {
    let mut selected = ArrayVec::new();

    if polygon.len() <= MAX_MANIFOLD_POINTS {
        for i in 0..polygon.len() {
            let _ = selected.try_push(i);
        }
        return selected;
    }

    let mut max_diag1 = (0, -Real::MAX);
    let mut max_diag2 = (0, -Real::MAX);
    let mut min_diag1 = (0, Real::MAX);
    let mut min_diag2 = (0, Real::MAX);

    for (i, pt) in polygon.iter().enumerate() {
        let x = (pt - center).dot(u);
        let y = (pt - center).dot(v);
        let diag1 = x + y;
        let diag2 = x - y;

        if diag1 > max_diag1.1 {
            max_diag1 = (i, diag1);
        }
        if diag1 < min_diag1.1 {
            min_diag1 = (i, diag1);
        }
        if diag2 > max_diag2.1 {
            max_diag2 = (i, diag2);
        }
        if diag2 < min_diag2.1 {
            min_diag2 = (i, diag2);
        }
    }

    for candidate in [max_diag1.0, max_diag2.0, min_diag1.0, min_diag2.0] {
        if !selected.contains(&candidate) {
            let _ = selected.try_push(candidate);
        }
    }

    selected
}
