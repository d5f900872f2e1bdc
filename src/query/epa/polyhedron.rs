use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;
use crate::query::gjk::{self, CSOPoint};
use crate::query::PolyhedronError;
use crate::utils;
use na::Unit;
use slab::Slab;

/// A vertex of the EPA polyhedron.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpaVertex {
    /// The CSO point at this vertex.
    pub point: CSOPoint,
    // Index of the horizon edge starting at this vertex, while inserting a new vertex.
    loop_edge: Option<usize>,
}

/// A triangular face of the EPA polyhedron.
///
/// The edge `i` goes from `self.vertices[i]` to `self.vertices[(i + 1) % 3]` and is shared
/// with the triangle `self.adjacent[i]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpaTriangle {
    /// The indices of the vertices of this triangle, counter-clockwise seen from the outside.
    pub vertices: [usize; 3],
    /// The indices of the triangles sharing an edge with this one.
    pub adjacent: [Option<usize>; 3],
    /// The outward normal of this triangle.
    pub normal: Unit<Vector<Real>>,
    /// The signed distance from the origin to the plane of this triangle.
    pub distance: Real,
    visited: bool,
    visible: bool,
}

impl EpaTriangle {
    fn is_visible_from(&self, first_vertex: &Point<Real>, pt: &Point<Real>) -> bool {
        self.normal.dot(&(pt - first_vertex)) > 0.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct HorizonEdge {
    a: usize,
    b: usize,
    outer: usize,
}

/// The convex polyhedron expanded by EPA.
///
/// Vertices and triangles are allocated from arenas: the slots of removed triangles are reused
/// by the next insertions, and all the allocations are kept between two queries.
#[derive(Clone, Debug, Default)]
pub struct EpaPolyhedron {
    vertices: Slab<EpaVertex>,
    triangles: Slab<EpaTriangle>,
    center: Point<Real>,
    // Scratch buffers of `add_vertex`.
    stack: Vec<usize>,
    visited: Vec<usize>,
    visible: Vec<usize>,
    horizon: Vec<HorizonEdge>,
    horizon_loop: Vec<usize>,
    new_triangles: Vec<usize>,
}

impl EpaPolyhedron {
    /// Creates an empty polyhedron.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all the vertices and triangles of this polyhedron, keeping its allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }

    /// The number of vertices of this polyhedron.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles of this polyhedron.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// The vertex with the given index.
    pub fn vertex(&self, id: usize) -> Option<&EpaVertex> {
        self.vertices.get(id)
    }

    /// The triangle with the given index.
    pub fn triangle(&self, id: usize) -> Option<&EpaTriangle> {
        self.triangles.get(id)
    }

    /// Iterates through all the triangles of this polyhedron and their indices.
    pub fn triangles(&self) -> impl Iterator<Item = (usize, &EpaTriangle)> {
        self.triangles.iter()
    }

    /// Resets this polyhedron to the given tetrahedron.
    pub fn init(&mut self, tetrahedron: [CSOPoint; 4]) -> Result<(), PolyhedronError> {
        self.clear();

        let [a, mut b, mut c, d] = tetrahedron;
        let volume = (b.point - a.point)
            .cross(&(c.point - a.point))
            .dot(&(d.point - a.point));

        if volume < 0.0 {
            core::mem::swap(&mut b, &mut c);
        }

        self.center =
            Point::from((a.point.coords + b.point.coords + c.point.coords + d.point.coords) / 4.0);

        let ia = self.vertices.insert(EpaVertex::new(a));
        let ib = self.vertices.insert(EpaVertex::new(b));
        let ic = self.vertices.insert(EpaVertex::new(c));
        let id = self.vertices.insert(EpaVertex::new(d));

        // `d` is above the plane of `abc`.
        let faces = [[ia, ic, ib], [ia, ib, id], [ib, ic, id], [ic, ia, id]];
        let mut ids = [0; 4];

        for (face, tri_id) in faces.iter().zip(ids.iter_mut()) {
            let tri = self.make_triangle(*face)?;
            *tri_id = self.triangles.insert(tri);
        }

        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    self.link_if_adjacent(ids[i], ids[j]);
                }
            }
        }

        self.check_adjacency(&ids)
    }

    /// The index of the triangle closest to the origin.
    pub fn nearest_triangle(&self) -> Option<usize> {
        self.triangles
            .iter()
            .min_by(|(_, a), (_, b)| a.distance.total_cmp(&b.distance))
            .map(|(id, _)| id)
    }

    /// The points on each shape corresponding to the projection of the origin on the
    /// triangle `id`.
    pub fn closest_points(&self, id: usize) -> Option<(Point<Real>, Point<Real>)> {
        let tri = self.triangles.get(id)?;
        let a = self.vertices.get(tri.vertices[0])?.point;
        let b = self.vertices.get(tri.vertices[1])?.point;
        let c = self.vertices.get(tri.vertices[2])?.point;
        let proj = gjk::project_origin3(&a.point, &b.point, &c.point);

        Some(CSOPoint::interpolate(&[a, b, c], &proj.bcoords[..3]))
    }

    /// Inserts a new vertex into this polyhedron.
    ///
    /// All the triangles visible from `pt` are removed, starting from the triangle `base`
    /// that must be visible from `pt`. The resulting hole is then filled by a fan of
    /// triangles connecting `pt` to the boundary of the removed region.
    pub fn add_vertex(&mut self, pt: CSOPoint, base: usize) -> Result<(), PolyhedronError> {
        let result = self.add_vertex_impl(pt, base);

        // Leave the flags clean, even if the insertion failed.
        for id in self.visited.drain(..) {
            if let Some(tri) = self.triangles.get_mut(id) {
                tri.visited = false;
                tri.visible = false;
            }
        }

        for edge in &self.horizon {
            if let Some(vertex) = self.vertices.get_mut(edge.a) {
                vertex.loop_edge = None;
            }
        }

        result
    }

    fn add_vertex_impl(&mut self, pt: CSOPoint, base: usize) -> Result<(), PolyhedronError> {
        self.stack.clear();
        self.visited.clear();
        self.visible.clear();
        self.horizon.clear();
        self.horizon_loop.clear();
        self.new_triangles.clear();

        let base_vertex = self.triangle_vertex(base, 0)?;
        let base_tri = self
            .triangles
            .get_mut(base)
            .ok_or(PolyhedronError::InvalidTriangle)?;

        if !base_tri.is_visible_from(&base_vertex, &pt.point) {
            return Err(PolyhedronError::TriangleInvisible);
        }

        base_tri.visited = true;
        base_tri.visible = true;
        self.visited.push(base);
        self.visible.push(base);
        self.stack.push(base);

        /*
         * Flood the triangles visible from `pt` and collect the boundary of that region.
         */
        while let Some(curr) = self.stack.pop() {
            for i in 0..3 {
                let (a, b, adj_id) = {
                    let tri = self
                        .triangles
                        .get(curr)
                        .ok_or(PolyhedronError::NoAdjacentTriangle)?;
                    let adj_id = tri.adjacent[i].ok_or(PolyhedronError::NoAdjacentTriangle)?;
                    (tri.vertices[i], tri.vertices[(i + 1) % 3], adj_id)
                };

                let adj_vertex = self.triangle_vertex(adj_id, 0)?;
                let adj = self
                    .triangles
                    .get_mut(adj_id)
                    .ok_or(PolyhedronError::NoAdjacentTriangle)?;

                if !adj.visited {
                    adj.visited = true;
                    self.visited.push(adj_id);

                    if adj.is_visible_from(&adj_vertex, &pt.point) {
                        adj.visible = true;
                        self.visible.push(adj_id);
                        self.stack.push(adj_id);
                        continue;
                    }
                }

                if !adj.visible {
                    self.horizon.push(HorizonEdge {
                        a,
                        b,
                        outer: adj_id,
                    });
                }
            }
        }

        /*
         * Order the horizon edges into a single closed loop.
         */
        for (k, edge) in self.horizon.iter().enumerate() {
            let vertex = self
                .vertices
                .get_mut(edge.a)
                .ok_or(PolyhedronError::EdgeLoopBroken)?;

            if vertex.loop_edge.is_some() {
                return Err(PolyhedronError::EdgeLoopBroken);
            }

            vertex.loop_edge = Some(k);
        }

        if self.horizon.is_empty() {
            return Err(PolyhedronError::EdgeLoopBroken);
        }

        let mut curr = 0;

        loop {
            self.horizon_loop.push(curr);

            let next = self
                .vertices
                .get(self.horizon[curr].b)
                .and_then(|v| v.loop_edge)
                .ok_or(PolyhedronError::EdgeLoopBroken)?;

            if next == 0 {
                break;
            }

            if self.horizon_loop.len() >= self.horizon.len() {
                return Err(PolyhedronError::EdgeLoopBroken);
            }

            curr = next;
        }

        if self.horizon_loop.len() != self.horizon.len() {
            return Err(PolyhedronError::EdgeLoopBroken);
        }

        /*
         * Replace the visible triangles by a fan around the new vertex.
         */
        for id in &self.visible {
            if self.triangles.contains(*id) {
                let _ = self.triangles.remove(*id);
            }
        }

        let new_vertex = self.vertices.insert(EpaVertex::new(pt));

        for k in 0..self.horizon_loop.len() {
            let edge = self.horizon[self.horizon_loop[k]];
            let mut tri = self.make_triangle([edge.a, edge.b, new_vertex])?;
            tri.adjacent[0] = Some(edge.outer);
            let tri_id = self.triangles.insert(tri);
            self.new_triangles.push(tri_id);

            let outer = self
                .triangles
                .get_mut(edge.outer)
                .ok_or(PolyhedronError::NoOuterTriangle)?;
            let j = (0..3)
                .find(|j| outer.vertices[*j] == edge.b && outer.vertices[(*j + 1) % 3] == edge.a)
                .ok_or(PolyhedronError::NoAdjacentPairIndex)?;
            outer.adjacent[j] = Some(tri_id);
        }

        let num_new = self.new_triangles.len();

        for k in 0..num_new {
            let curr = self.new_triangles[k];
            let next = self.new_triangles[(k + 1) % num_new];

            if let Some(tri) = self.triangles.get_mut(curr) {
                tri.adjacent[1] = Some(next);
            }
            if let Some(tri) = self.triangles.get_mut(next) {
                tri.adjacent[2] = Some(curr);
            }
        }

        let new_triangles = core::mem::take(&mut self.new_triangles);
        let result = self.check_adjacency(&new_triangles);
        self.new_triangles = new_triangles;
        result
    }

    fn triangle_vertex(&self, tri: usize, i: usize) -> Result<Point<Real>, PolyhedronError> {
        self.triangles
            .get(tri)
            .and_then(|tri| self.vertices.get(tri.vertices[i]))
            .map(|v| v.point.point)
            .ok_or(PolyhedronError::InvalidTriangle)
    }

    fn make_triangle(&self, vertices: [usize; 3]) -> Result<EpaTriangle, PolyhedronError> {
        let pt = |i: usize| {
            self.vertices
                .get(vertices[i])
                .map(|v| v.point.point)
                .ok_or(PolyhedronError::InvalidTriangle)
        };
        let (a, b, c) = (pt(0)?, pt(1)?, pt(2)?);
        let normal = utils::ccw_face_normal([&a, &b, &c]).ok_or(PolyhedronError::InvalidTriangle)?;

        // The polyhedron is convex and contains its initial center.
        if normal.dot(&(a - self.center)) <= 0.0 {
            return Err(PolyhedronError::InvalidTriangle);
        }

        Ok(EpaTriangle {
            vertices,
            adjacent: [None; 3],
            normal,
            distance: normal.dot(&a.coords),
            visited: false,
            visible: false,
        })
    }

    // Links the triangles `t1` and `t2` if they share an edge.
    fn link_if_adjacent(&mut self, t1: usize, t2: usize) {
        let (Some(tri1), Some(tri2)) = (self.triangles.get(t1), self.triangles.get(t2)) else {
            return;
        };

        let shared_edge = (0..3).find(|i| {
            let (a, b) = (tri1.vertices[*i], tri1.vertices[(*i + 1) % 3]);
            (0..3).any(|j| tri2.vertices[j] == b && tri2.vertices[(j + 1) % 3] == a)
        });

        if let (Some(i), Some(tri1)) = (shared_edge, self.triangles.get_mut(t1)) {
            tri1.adjacent[i] = Some(t2);
        }
    }

    fn check_adjacency(&self, ids: &[usize]) -> Result<(), PolyhedronError> {
        for id in ids {
            let tri = self
                .triangles
                .get(*id)
                .ok_or(PolyhedronError::InvalidTriangle)?;

            if tri.adjacent.iter().any(|adj| adj.is_none()) {
                return Err(PolyhedronError::NoAdjacentTriangle);
            }
        }

        Ok(())
    }
}

impl EpaVertex {
    fn new(point: CSOPoint) -> Self {
        Self {
            point,
            loop_edge: None,
        }
    }
}
