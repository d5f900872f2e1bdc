/// Structural inconsistencies detected while expanding the EPA polyhedron.
///
/// Any of these aborts the penetration depth computation of the current shape pair.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolyhedronError {
    /// A triangle is degenerate or faces the interior of the polyhedron.
    #[error("degenerate or inverted triangle")]
    InvalidTriangle,
    /// A triangle does not share the expected edge with its neighbor.
    #[error("no matching edge found on an adjacent triangle")]
    NoAdjacentPairIndex,
    /// A triangle has less than three neighbors.
    #[error("missing adjacent triangle")]
    NoAdjacentTriangle,
    /// The boundary of the faces visible from the new vertex is not a single closed loop.
    #[error("the horizon edge loop is broken")]
    EdgeLoopBroken,
    /// A horizon edge has no triangle on its outer side.
    #[error("missing triangle on the outer side of a horizon edge")]
    NoOuterTriangle,
    /// The new vertex does not see the triangle it was computed from.
    #[error("the base triangle is not visible from the new vertex")]
    TriangleInvisible,
}

/// Failure of a GJK/EPA query.
///
/// These are expected, recoverable outcomes of iterative algorithms working with finite
/// precision. Callers usually treat them as "no contact for this step".
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GjkEpaError {
    /// The GJK simplex enclosing the origin could not be promoted to a tetrahedron.
    #[error("GJK failed to build a non-degenerate tetrahedron")]
    GjkFailedToMakeTetrahedron,
    /// GJK reached its iteration limit.
    #[error("GJK did not converge")]
    GjkDidNotConverge,
    /// The initial EPA polyhedron could not be built from the GJK tetrahedron.
    #[error("EPA failed to build its initial polyhedron")]
    EpaFailedToInit(#[source] PolyhedronError),
    /// The EPA polyhedron got corrupted while inserting a new vertex.
    #[error("EPA failed to insert a vertex")]
    EpaFailedToAddVertex(#[source] PolyhedronError),
    /// EPA reached its iteration limit or the maximum size of its polyhedron.
    #[error("EPA did not converge")]
    EpaDidNotConverge,
}
