//! Type definitions for the half-edge data structure.

use glam::Vec3;

/// Type-safe vertex identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

/// Type-safe half-edge identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfEdgeId(pub u32);

/// Type-safe face identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub u32);

impl VertexId {
    #[inline]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

impl HalfEdgeId {
    #[inline]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

impl FaceId {
    #[inline]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A vertex in the DCEL
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Vec3,
    /// One half-edge whose origin is this vertex (arbitrary choice if multiple).
    /// `None` only for vertices no triangle references.
    pub incident_edge: Option<HalfEdgeId>,
}

/// A directed half-edge
///
/// Each undirected edge is represented by two half-edges pointing in opposite
/// directions. On the mesh boundary one of the pair has no face and belongs to
/// a boundary loop instead.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfEdge {
    pub id: HalfEdgeId,
    /// The vertex this half-edge originates from
    pub origin: VertexId,
    /// The opposite-direction half-edge of the same undirected edge
    pub twin: HalfEdgeId,
    /// The next half-edge around the face or boundary loop
    pub next: HalfEdgeId,
    /// The previous half-edge around the face or boundary loop
    pub prev: HalfEdgeId,
    /// The face on this half-edge's side (None for boundary half-edges)
    pub face: Option<FaceId>,
}

impl HalfEdge {
    /// Whether this half-edge has no face on its side
    pub fn is_boundary(&self) -> bool {
        self.face.is_none()
    }
}

/// A triangular face
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub id: FaceId,
    /// One half-edge on the boundary of this face
    pub start_half_edge: HalfEdgeId,
}

/// Result alias for DCEL operations
pub type Result<T> = std::result::Result<T, DcelError>;

/// Errors that can occur while building or validating a DCEL
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DcelError {
    #[error("Index count {len} is not divisible by 3")]
    IndexCountNotMultipleOfThree { len: usize },
    #[error("Triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    VertexIndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("Triangle {triangle} is degenerate (repeats a vertex)")]
    DegenerateTriangle { triangle: usize },
    #[error("Directed edge {from:?} -> {to:?} is used by more than one triangle")]
    NonManifoldEdge { from: VertexId, to: VertexId },
    #[error("Boundary loop cannot be closed at vertex {vertex:?}")]
    OpenBoundary { vertex: VertexId },
    #[error("Invalid mesh topology: {0}")]
    InvalidTopology(String),
}
