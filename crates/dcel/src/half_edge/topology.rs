//! Topology query methods for Dcel.

use glam::Vec3;
use std::collections::HashSet;

use super::types::{Face, FaceId, HalfEdge, HalfEdgeId, Vertex, VertexId};
use super::Dcel;

impl Dcel {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get vertex by ID
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.idx())
    }

    /// Get half-edge by ID
    pub fn half_edge(&self, id: HalfEdgeId) -> Option<&HalfEdge> {
        self.half_edges.get(id.idx())
    }

    /// Get face by ID
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id.idx())
    }

    /// Get all vertices
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get all half-edges
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    /// Get all faces
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of undirected edges. Every edge is a twin pair, boundary
    /// edges included.
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    /// Number of face-less half-edges (one per boundary edge)
    pub fn boundary_half_edge_count(&self) -> usize {
        self.half_edges.iter().filter(|he| he.face.is_none()).count()
    }

    // ========================================================================
    // Topology Queries
    // ========================================================================

    /// Get the destination vertex of a half-edge
    pub fn destination(&self, he_id: HalfEdgeId) -> Option<VertexId> {
        let he = self.half_edge(he_id)?;
        let next = self.half_edge(he.next)?;
        Some(next.origin)
    }

    /// Get the two faces adjacent to an edge.
    /// Returns (face of this half-edge, face of its twin)
    pub fn edge_faces(&self, he_id: HalfEdgeId) -> (Option<FaceId>, Option<FaceId>) {
        let Some(he) = self.half_edge(he_id) else {
            return (None, None);
        };
        let twin_face = self.half_edge(he.twin).and_then(|t| t.face);
        (he.face, twin_face)
    }

    /// Find the half-edge running `from -> to`, if the two vertices are
    /// connected
    pub fn find_half_edge(&self, from: VertexId, to: VertexId) -> Option<HalfEdgeId> {
        self.outgoing_half_edges(from)
            .find(|&he| self.destination(he) == Some(to))
    }

    /// Check if an edge lies on the mesh boundary (either side has no face)
    pub fn is_boundary_edge(&self, he_id: HalfEdgeId) -> bool {
        !matches!(self.edge_faces(he_id), (Some(_), Some(_)))
    }

    /// Check if a vertex is on the boundary (some incident half-edge has no face)
    pub fn is_boundary_vertex(&self, vertex_id: VertexId) -> bool {
        self.walk_vertex(vertex_id)
            .any(|he| self.half_edge(he).map_or(true, |h| h.face.is_none()))
    }

    /// Collect every boundary loop as the ordered half-edges it consists of.
    ///
    /// Boundary half-edges run opposite to the faces they border, so each loop
    /// winds the other way round its hole.
    pub fn boundary_loops(&self) -> Vec<Vec<HalfEdgeId>> {
        let mut visited: HashSet<HalfEdgeId> = HashSet::new();
        let mut loops = Vec::new();

        for he in self.half_edges.iter().filter(|he| he.face.is_none()) {
            if visited.contains(&he.id) {
                continue;
            }
            let mut boundary = Vec::new();
            let mut current = he.id;
            while visited.insert(current) {
                boundary.push(current);
                match self.half_edge(current) {
                    Some(h) => current = h.next,
                    None => break,
                }
            }
            loops.push(boundary);
        }

        loops
    }

    /// Unit normal of a face from its vertex positions (zero if degenerate)
    pub fn face_normal(&self, face_id: FaceId) -> Vec3 {
        let positions: Vec<Vec3> = self
            .face_vertices(face_id)
            .filter_map(|v| self.vertex(v).map(|v| v.position))
            .collect();
        if positions.len() < 3 {
            return Vec3::ZERO;
        }
        (positions[1] - positions[0])
            .cross(positions[2] - positions[0])
            .normalize_or_zero()
    }
}
