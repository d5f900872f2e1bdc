use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::epa::Epa;
use crate::query::gjk::{self, CSOPoint, SimplexMask, SimplexProjection};
use crate::query::{GjkCache, GjkEpaError};
use crate::shape::SupportMap;
use crate::utils::DIRECTION_EPSILON_SQ;
use arrayvec::ArrayVec;
use na::{ComplexField, Unit}; // for .abs(), .sqrt()

/// The maximum number of iterations of the GJK algorithm.
const MAX_ITERATIONS: usize = 40;
/// Relative tolerance of the GJK termination criterion.
const GJK_EPSILON: Real = 1.0e-4;
/// Smallest squared distance the relative tolerance is scaled by.
///
/// Near a curved core, GJK only converges linearly: a purely relative tolerance would
/// become unreachable when the cores almost touch.
const GJK_MIN_TOLERANCE_SCALE: Real = 1.0e-2;
/// Squared distance below which the origin is considered to lie on the simplex.
const GJK_ORIGIN_EPSILON_SQ: Real = 1.0e-10;
/// Minimal height of a tetrahedron built to enclose the origin.
const PROMOTION_EPSILON: Real = 1.0e-6;

/// The closest points between the cores of two shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosestPoints {
    /// The closest point on the core of the first shape, in world-space.
    pub point1: Point<Real>,
    /// The closest point on the core of the second shape, in world-space.
    pub point2: Point<Real>,
    /// The direction from the first shape toward the second shape.
    pub normal: Unit<Vector<Real>>,
    /// The signed distance between both cores. Negative if they overlap, in which case
    /// this is the opposite of the penetration depth.
    pub distance: Real,
}

/// The GJK/EPA query engine.
///
/// This holds the scratch state of both algorithms so that successive queries reuse its
/// allocations. Each thread running collision detection should own its own engine.
#[derive(Clone, Debug, Default)]
pub struct GjkEpa {
    simplex: ArrayVec<CSOPoint, 4>,
    bcoords: [Real; 4],
    epa: Epa,
}

impl GjkEpa {
    /// Creates an engine with the default EPA polyhedron limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom EPA polyhedron limits.
    pub fn with_epa_limits(max_vertices: usize, max_faces: usize) -> Self {
        Self {
            simplex: ArrayVec::new(),
            bcoords: [0.0; 4],
            epa: Epa::with_limits(max_vertices, max_faces),
        }
    }

    /// Sets the maximum number of vertices and faces of the EPA polyhedron.
    pub fn set_epa_limits(&mut self, max_vertices: usize, max_faces: usize) {
        self.epa.max_vertices = max_vertices;
        self.epa.max_faces = max_faces;
    }

    /// Computes the closest points between the cores of `g1` and `g2`.
    ///
    /// If the cores overlap, EPA computes their penetration depth and the returned
    /// distance is negative.
    ///
    /// If `cache` is provided, it seeds the initial search direction and is updated
    /// with the final one.
    pub fn compute_closest_points<G1: ?Sized, G2: ?Sized>(
        &mut self,
        g1: &G1,
        g2: &G2,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        cache: Option<&mut GjkCache>,
    ) -> Result<ClosestPoints, GjkEpaError>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        self.run(g1, g2, pos1, pos2, cache, true)
    }

    /// Computes the closest points between the cores of `g1` and `g2`, without
    /// computing a penetration depth.
    ///
    /// Overlapping cores are reported with a distance of zero.
    pub fn compute_distance<G1: ?Sized, G2: ?Sized>(
        &mut self,
        g1: &G1,
        g2: &G2,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        cache: Option<&mut GjkCache>,
    ) -> Result<ClosestPoints, GjkEpaError>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        self.run(g1, g2, pos1, pos2, cache, false)
    }

    fn run<G1: ?Sized, G2: ?Sized>(
        &mut self,
        g1: &G1,
        g2: &G2,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        mut cache: Option<&mut GjkCache>,
        with_penetration: bool,
    ) -> Result<ClosestPoints, GjkEpaError>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let support = |dir: &Vector<Real>| CSOPoint::from_shapes(pos1, g1, pos2, g2, dir);
        let center_dir = pos1.translation.vector - pos2.translation.vector;

        // `v` approximates the point of the CSO closest to the origin.
        let mut v = match cache.as_deref() {
            Some(cache) if cache.prev_closest_dir.norm_squared() > DIRECTION_EPSILON_SQ => {
                cache.prev_closest_dir
            }
            _ if center_dir.norm_squared() > DIRECTION_EPSILON_SQ => center_dir,
            _ => Vector::x(),
        };

        self.simplex.clear();

        for _ in 0..MAX_ITERATIONS {
            let w = support(&-v);

            if !self.simplex.is_empty() {
                let v2 = v.norm_squared();
                let improvement = v2 - v.dot(&w.point.coords);
                let duplicate = self.simplex.iter().any(|pt| {
                    (pt.point - w.point).norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
                });

                if improvement <= GJK_EPSILON * v2.max(GJK_MIN_TOLERANCE_SCALE) || duplicate {
                    let (point1, point2) = CSOPoint::interpolate(&self.simplex, &self.bcoords);
                    let distance = v2.sqrt();

                    if let Some(cache) = cache.as_deref_mut() {
                        cache.prev_closest_dir = v;
                    }

                    return Ok(ClosestPoints {
                        point1,
                        point2,
                        normal: Unit::new_unchecked(-v / distance),
                        distance,
                    });
                }
            }

            if self.simplex.try_push(w).is_err() {
                return Err(GjkEpaError::GjkDidNotConverge);
            }

            let proj = self.project_origin();

            if proj.point.coords.norm_squared() <= GJK_ORIGIN_EPSILON_SQ {
                if !with_penetration {
                    let (point1, point2) =
                        CSOPoint::interpolate(&self.simplex, &proj.bcoords);
                    let normal = Unit::try_new(-center_dir, DEFAULT_EPSILON)
                        .unwrap_or_else(Vector::x_axis);

                    return Ok(ClosestPoints {
                        point1,
                        point2,
                        normal,
                        distance: 0.0,
                    });
                }

                let result = self.compute_penetration(g1, g2, pos1, pos2)?;

                if let Some(cache) = cache.as_deref_mut() {
                    cache.prev_closest_dir = -*result.normal;
                }

                return Ok(result);
            }

            self.reduce(&proj);
            v = proj.point.coords;
        }

        log::debug!("GJK did not converge after {} iterations.", MAX_ITERATIONS);
        Err(GjkEpaError::GjkDidNotConverge)
    }

    fn project_origin(&self) -> SimplexProjection {
        match self.simplex.as_slice() {
            [] => SimplexProjection::empty(),
            [a] => SimplexProjection::vertex(&a.point, 0),
            [a, b] => gjk::project_origin2(&a.point, &b.point),
            [a, b, c] => gjk::project_origin3(&a.point, &b.point, &c.point),
            [a, b, c, d, ..] => gjk::project_origin4(&a.point, &b.point, &c.point, &d.point),
        }
    }

    /// Only keeps the simplex vertices supporting `proj`, together with their
    /// barycentric coordinates.
    fn reduce(&mut self, proj: &SimplexProjection) {
        let mut kept = 0;

        for i in 0..self.simplex.len() {
            if proj.mask.contains(SimplexMask::vertex(i)) {
                self.simplex[kept] = self.simplex[i];
                self.bcoords[kept] = proj.bcoords[i];
                kept += 1;
            }
        }

        self.simplex.truncate(kept);
    }

    fn compute_penetration<G1: ?Sized, G2: ?Sized>(
        &mut self,
        g1: &G1,
        g2: &G2,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
    ) -> Result<ClosestPoints, GjkEpaError>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let support = |dir: &Vector<Real>| CSOPoint::from_shapes(pos1, g1, pos2, g2, dir);

        let promoted = match self.simplex.len() {
            1 => self.point_to_tetrahedron(&support),
            2 => self.line_to_tetrahedron(&support),
            3 => self.triangle_to_tetrahedron(&support),
            _ => true,
        };

        let [a, b, c, d] = self.simplex.as_slice() else {
            return Err(GjkEpaError::GjkFailedToMakeTetrahedron);
        };

        if !promoted {
            return Err(GjkEpaError::GjkFailedToMakeTetrahedron);
        }

        self.epa.compute_penetration(g1, g2, pos1, pos2, [*a, *b, *c, *d])
    }

    fn point_to_tetrahedron(&mut self, support: &impl Fn(&Vector<Real>) -> CSOPoint) -> bool {
        let origin = self.simplex[0].point;

        for axis in [Vector::x(), Vector::y(), Vector::z()] {
            for dir in [axis, -axis] {
                let w = support(&dir);

                if (w.point - origin).norm_squared() > PROMOTION_EPSILON * PROMOTION_EPSILON {
                    self.simplex.push(w);

                    if self.line_to_tetrahedron(support) {
                        return true;
                    }

                    let _ = self.simplex.pop();
                }
            }
        }

        false
    }

    fn line_to_tetrahedron(&mut self, support: &impl Fn(&Vector<Real>) -> CSOPoint) -> bool {
        let line = self.simplex[1] - self.simplex[0];

        for axis in [Vector::x(), Vector::y(), Vector::z()] {
            let dir = line.cross(&axis);

            if dir.norm_squared() <= PROMOTION_EPSILON * PROMOTION_EPSILON {
                continue;
            }

            for dir in [dir, -dir] {
                self.simplex.push(support(&dir));

                if self.triangle_to_tetrahedron(support) {
                    return true;
                }

                let _ = self.simplex.pop();
            }
        }

        false
    }

    fn triangle_to_tetrahedron(&mut self, support: &impl Fn(&Vector<Real>) -> CSOPoint) -> bool {
        let a = self.simplex[0].point;
        let normal = (self.simplex[1] - self.simplex[0]).cross(&(self.simplex[2] - self.simplex[0]));
        let area = normal.norm();

        if area <= PROMOTION_EPSILON * PROMOTION_EPSILON {
            return false;
        }

        for dir in [normal, -normal] {
            let w = support(&dir);

            if normal.dot(&(w.point - a)).abs() > PROMOTION_EPSILON * area {
                self.simplex.push(w);
                return true;
            }
        }

        false
    }
}
