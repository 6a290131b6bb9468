//! Lazy traversals around faces and vertices.
//!
//! Both walks stop by comparing the advancing handle against the captured
//! start handle, so they work for cycles of any length. Calling
//! [`Dcel::walk_face`] or [`Dcel::walk_vertex`] again restarts from the same
//! entry point; the iterators are also `Clone`.

use tracing::warn;

use super::types::{FaceId, HalfEdgeId, VertexId};
use super::Dcel;

/// Iterator over the half-edges bounding a face, following `next`
#[derive(Debug, Clone)]
pub struct FaceWalk<'a> {
    mesh: &'a Dcel,
    start: HalfEdgeId,
    current: HalfEdgeId,
    done: bool,
    steps: usize,
}

impl<'a> FaceWalk<'a> {
    fn new(mesh: &'a Dcel, face_id: FaceId) -> Self {
        match mesh.face(face_id) {
            Some(face) => Self {
                mesh,
                start: face.start_half_edge,
                current: face.start_half_edge,
                done: false,
                steps: 0,
            },
            None => Self {
                mesh,
                start: HalfEdgeId(0),
                current: HalfEdgeId(0),
                done: true,
                steps: 0,
            },
        }
    }
}

impl Iterator for FaceWalk<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.steps += 1;
        match self.mesh.half_edge(self.current) {
            Some(he) => self.current = he.next,
            None => self.done = true,
        }

        if self.current == self.start {
            self.done = true;
        } else if self.steps >= self.mesh.half_edge_count() {
            warn!(
                "walk_face: cycle from {:?} never returned to its start, stopping",
                self.start
            );
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over the half-edge umbrella around a vertex
///
/// Yields each outgoing half-edge followed by its `prev` (the incoming
/// half-edge of the same face or boundary wedge), then rotates to
/// `prev.twin`, the next outgoing half-edge.
#[derive(Debug, Clone)]
pub struct VertexWalk<'a> {
    mesh: &'a Dcel,
    start: HalfEdgeId,
    current: HalfEdgeId,
    /// Incoming half-edge still to be yielded for `current`
    incoming: Option<HalfEdgeId>,
    done: bool,
    steps: usize,
}

impl<'a> VertexWalk<'a> {
    fn new(mesh: &'a Dcel, vertex_id: VertexId) -> Self {
        let start = mesh.vertex(vertex_id).and_then(|v| v.incident_edge);
        Self {
            mesh,
            start: start.unwrap_or(HalfEdgeId(0)),
            current: start.unwrap_or(HalfEdgeId(0)),
            incoming: None,
            done: start.is_none(),
            steps: 0,
        }
    }
}

impl Iterator for VertexWalk<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(incoming) = self.incoming.take() {
            // Rotate to the next outgoing half-edge: prev -> twin
            match self.mesh.half_edge(incoming) {
                Some(he) => self.current = he.twin,
                None => self.done = true,
            }
            self.steps += 1;
            if self.current == self.start {
                self.done = true;
            } else if self.steps >= self.mesh.half_edge_count() {
                warn!(
                    "walk_vertex: ring from {:?} never returned to its start, stopping",
                    self.start
                );
                self.done = true;
            }
            return Some(incoming);
        }

        if self.done {
            return None;
        }

        let outgoing = self.current;
        match self.mesh.half_edge(outgoing) {
            Some(he) => self.incoming = Some(he.prev),
            None => self.done = true,
        }
        Some(outgoing)
    }
}

impl Dcel {
    /// Walk the half-edges bounding a face, starting at its start half-edge.
    ///
    /// Yields exactly three half-edges for every face of a valid DCEL, and
    /// nothing for an unknown face.
    pub fn walk_face(&self, face_id: FaceId) -> FaceWalk<'_> {
        FaceWalk::new(self, face_id)
    }

    /// Walk the half-edges incident to a vertex, starting at its incident edge.
    ///
    /// The ring closes at boundary vertices as well, because boundary edges
    /// carry face-less twins linked into boundary loops; the boundary wedge is
    /// part of the sequence. At a pinched vertex the boundary loops chain its
    /// fans together, so every fan is covered.
    pub fn walk_vertex(&self, vertex_id: VertexId) -> VertexWalk<'_> {
        VertexWalk::new(self, vertex_id)
    }

    /// Half-edges leaving a vertex, in ring order
    pub fn outgoing_half_edges(&self, vertex_id: VertexId) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.walk_vertex(vertex_id).step_by(2)
    }

    /// Vertex handles of a face in winding order
    pub fn face_vertices(&self, face_id: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.walk_face(face_id)
            .filter_map(move |he| self.half_edge(he).map(|h| h.origin))
    }

    /// Half-edges bounding a face
    pub fn face_half_edges(&self, face_id: FaceId) -> Vec<HalfEdgeId> {
        self.walk_face(face_id).collect()
    }

    /// Faces around a vertex, in ring order, without repeats
    pub fn vertex_faces(&self, vertex_id: VertexId) -> Vec<FaceId> {
        let mut faces = Vec::new();
        for he in self.outgoing_half_edges(vertex_id) {
            if let Some(face_id) = self.half_edge(he).and_then(|h| h.face) {
                if !faces.contains(&face_id) {
                    faces.push(face_id);
                }
            }
        }
        faces
    }

    /// Vertices connected to a vertex by an edge, in ring order
    pub fn adjacent_vertices(&self, vertex_id: VertexId) -> Vec<VertexId> {
        let mut neighbors = Vec::new();
        for he in self.outgoing_half_edges(vertex_id) {
            if let Some(dest) = self.destination(he) {
                if !neighbors.contains(&dest) {
                    neighbors.push(dest);
                }
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::half_edge::test_fixtures::*;

    #[test]
    fn test_walk_face_yields_three() {
        let mesh = grid(3, 3);
        for face in mesh.faces() {
            let edges: Vec<HalfEdgeId> = mesh.walk_face(face.id).collect();
            assert_eq!(edges.len(), 3);
            for he in edges {
                assert_eq!(mesh.half_edge(he).unwrap().face, Some(face.id));
            }
        }
    }

    #[test]
    fn test_walk_face_stops_on_broken_cycle() {
        let mut mesh = quad();
        // Face 0 now runs into face 1's cycle and never returns to its start
        mesh.half_edges[2].next = HalfEdgeId(3);
        assert_eq!(mesh.walk_face(FaceId(0)).count(), mesh.half_edge_count());
    }

    #[test]
    fn test_walk_face_is_restartable() {
        let mesh = quad();
        let walk = mesh.walk_face(FaceId(1));
        let first: Vec<HalfEdgeId> = walk.clone().collect();
        let second: Vec<HalfEdgeId> = walk.collect();
        assert_eq!(first, second);
        assert_eq!(first, mesh.walk_face(FaceId(1)).collect::<Vec<_>>());
    }

    #[test]
    fn test_walk_unknown_face_is_empty() {
        let mesh = quad();
        assert_eq!(mesh.walk_face(FaceId(99)).count(), 0);
    }

    #[test]
    fn test_walk_vertex_interior_ring() {
        let mesh = octahedron();
        for vertex in mesh.vertices() {
            let ring: Vec<HalfEdgeId> = mesh.walk_vertex(vertex.id).collect();
            // Valence 4: one outgoing and one incoming half-edge per face
            assert_eq!(ring.len(), 8);
            for (i, he) in ring.iter().enumerate() {
                let h = mesh.half_edge(*he).unwrap();
                if i % 2 == 0 {
                    assert_eq!(h.origin, vertex.id);
                } else {
                    assert_eq!(mesh.destination(*he), Some(vertex.id));
                }
            }
            assert_eq!(mesh.vertex_faces(vertex.id).len(), 4);
            assert_eq!(mesh.adjacent_vertices(vertex.id).len(), 4);
        }
    }

    #[test]
    fn test_walk_vertex_outgoing_alternates_with_prev() {
        let mesh = tetrahedron();
        let ring: Vec<HalfEdgeId> = mesh.walk_vertex(VertexId(0)).collect();
        for pair in ring.chunks_exact(2) {
            assert_eq!(mesh.half_edge(pair[0]).unwrap().prev, pair[1]);
        }
        assert_eq!(ring[0], mesh.vertex(VertexId(0)).unwrap().incident_edge.unwrap());
    }

    #[test]
    fn test_walk_vertex_closes_at_boundary() {
        let mesh = quad();
        // Corner 1 touches one face and one boundary wedge
        let ring: Vec<HalfEdgeId> = mesh.walk_vertex(VertexId(1)).collect();
        assert_eq!(ring.len(), 4);
        let faces: Vec<_> = ring.iter().map(|he| mesh.half_edge(*he).unwrap().face).collect();
        assert_eq!(faces.iter().filter(|f| f.is_none()).count(), 2);
        assert_eq!(mesh.vertex_faces(VertexId(1)), vec![FaceId(0)]);

        // Corner 0 touches both faces
        let mut faces = mesh.vertex_faces(VertexId(0));
        faces.sort();
        assert_eq!(faces, vec![FaceId(0), FaceId(1)]);
        let mut neighbors = mesh.adjacent_vertices(VertexId(0));
        neighbors.sort();
        assert_eq!(neighbors, vec![VertexId(1), VertexId(2), VertexId(3)]);
    }

    #[test]
    fn test_walk_vertex_single_triangle() {
        let mesh = single_triangle();
        for vertex in mesh.vertices() {
            assert_eq!(mesh.walk_vertex(vertex.id).count(), 4);
            assert_eq!(mesh.vertex_faces(vertex.id), vec![FaceId(0)]);
        }
    }

    #[test]
    fn test_walk_isolated_vertex_is_empty() {
        let mut positions = quad_positions();
        positions.push(glam::Vec3::ONE);
        let mesh = Dcel::from_indexed_triangles(&positions, &QUAD_INDICES).unwrap();
        assert_eq!(mesh.walk_vertex(VertexId(4)).count(), 0);
        assert_eq!(mesh.walk_vertex(VertexId(42)).count(), 0);
    }
}
