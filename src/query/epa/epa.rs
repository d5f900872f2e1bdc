use crate::math::{Isometry, Real};
use crate::query::epa::EpaPolyhedron;
use crate::query::gjk::{CSOPoint, ClosestPoints};
use crate::query::GjkEpaError;
use crate::shape::SupportMap;
use na::ComplexField; // for .abs()

/// The default maximum number of vertices of the EPA polyhedron.
pub const DEFAULT_MAX_EPA_VERTICES: usize = 128;
/// The default maximum number of faces of the EPA polyhedron.
pub const DEFAULT_MAX_EPA_FACES: usize = 128;

const MAX_ITERATIONS: usize = 40;
const EPA_EPSILON: Real = 1.0e-4;

/// The Expanding Polytope Algorithm.
#[derive(Clone, Debug)]
pub struct Epa {
    polyhedron: EpaPolyhedron,
    /// The maximum number of vertices of the polyhedron.
    pub max_vertices: usize,
    /// The maximum number of faces of the polyhedron.
    pub max_faces: usize,
}

impl Default for Epa {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_EPA_VERTICES, DEFAULT_MAX_EPA_FACES)
    }
}

impl Epa {
    /// Creates a new EPA solver with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new EPA solver with custom limits.
    pub fn with_limits(max_vertices: usize, max_faces: usize) -> Self {
        Self {
            polyhedron: EpaPolyhedron::new(),
            max_vertices,
            max_faces,
        }
    }

    /// Computes the penetration depth of two shapes whose cores overlap.
    ///
    /// The `tetrahedron` must be a non-degenerate tetrahedron of points of the CSO of both
    /// shapes, containing the origin.
    pub fn compute_penetration<G1: ?Sized, G2: ?Sized>(
        &mut self,
        g1: &G1,
        g2: &G2,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        tetrahedron: [CSOPoint; 4],
    ) -> Result<ClosestPoints, GjkEpaError>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        if let Err(err) = self.polyhedron.init(tetrahedron) {
            log::debug!("EPA failed to build its initial polyhedron: {}", err);
            return Err(GjkEpaError::EpaFailedToInit(err));
        }

        for _ in 0..MAX_ITERATIONS {
            let Some((face_id, face)) = self
                .polyhedron
                .nearest_triangle()
                .and_then(|id| Some((id, *self.polyhedron.triangle(id)?)))
            else {
                break;
            };

            let support = CSOPoint::from_shapes(pos1, g1, pos2, g2, &face.normal);
            let improvement = face.normal.dot(&support.point.coords) - face.distance;

            if improvement <= EPA_EPSILON * face.distance.abs().max(1.0) {
                let (point1, point2) = self
                    .polyhedron
                    .closest_points(face_id)
                    .ok_or(GjkEpaError::EpaDidNotConverge)?;

                return Ok(ClosestPoints {
                    point1,
                    point2,
                    normal: face.normal,
                    distance: -face.distance,
                });
            }

            // Each insertion adds one vertex and, the polyhedron being closed, two faces.
            if self.polyhedron.num_vertices() + 1 > self.max_vertices
                || self.polyhedron.num_triangles() + 2 > self.max_faces
            {
                log::debug!(
                    "EPA reached the maximum size of its polyhedron ({} vertices, {} faces).",
                    self.polyhedron.num_vertices(),
                    self.polyhedron.num_triangles()
                );
                return Err(GjkEpaError::EpaDidNotConverge);
            }

            if let Err(err) = self.polyhedron.add_vertex(support, face_id) {
                log::debug!("EPA failed to insert a vertex: {}", err);
                return Err(GjkEpaError::EpaFailedToAddVertex(err));
            }
        }

        log::debug!("EPA did not converge after {} iterations.", MAX_ITERATIONS);
        Err(GjkEpaError::EpaDidNotConverge)
    }
}
