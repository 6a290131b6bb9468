//! Half-edge (DCEL) data structure for triangle meshes
//!
//! Provides topology information (vertex-face adjacency, opposite faces,
//! boundary loops) that is not available in an indexed triangle list.

mod construction;
mod modification;
mod topology;
mod traversal;
mod types;
mod validation;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use construction::validate_index_buffer;
pub use traversal::{FaceWalk, VertexWalk};
pub use types::{DcelError, Face, FaceId, HalfEdge, HalfEdgeId, Result, Vertex, VertexId};

/// Doubly-connected edge list
///
/// Sole owner of every vertex, half-edge and face. All cross-references are
/// handles into these collections.
#[derive(Debug, Clone, Default)]
pub struct Dcel {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::*;
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let mesh = Dcel::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_face_vertices() {
        let mesh = single_triangle();
        let verts: Vec<VertexId> = mesh.face_vertices(FaceId(0)).collect();
        assert_eq!(verts, vec![VertexId(0), VertexId(1), VertexId(2)]);
    }

    #[test]
    fn test_vertex_faces() {
        let mesh = single_triangle();
        let faces = mesh.vertex_faces(VertexId(0));
        assert_eq!(faces, vec![FaceId(0)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mesh = quad();
        let mut copy = mesh.clone();
        let shared = copy.find_half_edge(VertexId(2), VertexId(0)).unwrap();
        assert!(copy.flip_edge(shared));
        assert_ne!(copy.half_edges(), mesh.half_edges());
        assert!(mesh.validate().is_ok());
    }
}
