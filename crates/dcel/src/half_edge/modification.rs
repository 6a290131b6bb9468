//! Modification methods for Dcel.

use glam::Vec3;
use tracing::{debug, trace};

use super::types::{HalfEdgeId, VertexId};
use super::Dcel;

/// Handles of the two triangles around an interior edge, gathered before any
/// rewiring.
///
/// For edge `e = a -> b` in face `(a, b, c)` with twin `t = b -> a` in face
/// `(b, a, d)`:
#[derive(Debug, Clone, Copy)]
struct FlipQuad {
    e: HalfEdgeId,
    /// b -> c
    e_next: HalfEdgeId,
    /// c -> a
    e_prev: HalfEdgeId,
    t: HalfEdgeId,
    /// a -> d
    t_next: HalfEdgeId,
    /// d -> b
    t_prev: HalfEdgeId,
    a: VertexId,
    b: VertexId,
    c: VertexId,
    d: VertexId,
}

impl Dcel {
    /// Set the position of a vertex
    pub fn set_vertex_position(&mut self, vertex_id: VertexId, position: Vec3) {
        if let Some(v) = self.vertices.get_mut(vertex_id.idx()) {
            v.position = position;
        }
    }

    /// Gather the quad around an interior edge. `None` for boundary edges and
    /// unknown handles.
    fn flip_quad(&self, edge_id: HalfEdgeId) -> Option<FlipQuad> {
        let he = self.half_edge(edge_id)?;
        let twin = self.half_edge(he.twin)?;
        // Boundary edges have no second triangle to re-triangulate
        he.face?;
        twin.face?;

        let e_next = self.half_edge(he.next)?;
        let e_prev = self.half_edge(he.prev)?;
        let t_prev = self.half_edge(twin.prev)?;

        Some(FlipQuad {
            e: edge_id,
            e_next: he.next,
            e_prev: he.prev,
            t: he.twin,
            t_next: twin.next,
            t_prev: twin.prev,
            a: he.origin,
            b: e_next.origin,
            c: e_prev.origin,
            d: t_prev.origin,
        })
    }

    /// Whether flipping this edge keeps the mesh a simple triangulation.
    ///
    /// Beyond the interior-edge requirement of [`Dcel::flip_edge`], the two
    /// opposite vertices must differ and must not already be connected;
    /// otherwise the flip would create a degenerate or duplicate edge.
    pub fn is_flip_legal(&self, edge_id: HalfEdgeId) -> bool {
        let Some(quad) = self.flip_quad(edge_id) else {
            return false;
        };
        quad.c != quad.d && self.find_half_edge(quad.c, quad.d).is_none()
    }

    /// Flip an interior edge to the other diagonal of its two triangles.
    ///
    /// For an edge AB shared by triangles ABC and BAD, flipping creates
    /// triangles CAD and DBC (swapping the shared edge from AB to DC).
    ///
    /// ```text
    ///     Before:              After:
    ///        C                    C
    ///       / \                  /|\
    ///      /   \                / | \
    ///     /     \              /  |  \
    ///    A-------B    ->      A   |   B
    ///     \     /              \  |  /
    ///      \   /                \ | /
    ///       \ /                  \|/
    ///        D                    D
    /// ```
    ///
    /// No element is created or destroyed: the flipped pair keeps its
    /// handles and only origins, next/prev links, incident faces and the two
    /// faces' start half-edges change. Vertices A and B get a new incident
    /// edge if theirs was part of the flipped pair.
    ///
    /// # Returns
    /// - `true` if the edge was flipped
    /// - `false` if either side has no face (boundary edge) or the handle is
    ///   unknown; the DCEL is left untouched
    ///
    /// Use [`Dcel::is_flip_legal`] to also rule out flips that would duplicate
    /// an existing edge.
    pub fn flip_edge(&mut self, edge_id: HalfEdgeId) -> bool {
        // ===== PHASE 1: GATHER (read-only, fail early) =====
        let Some(quad) = self.flip_quad(edge_id) else {
            debug!("flip_edge: {:?} is a boundary or unknown edge, not flipped", edge_id);
            return false;
        };
        let FlipQuad {
            e,
            e_next,
            e_prev,
            t,
            t_next,
            t_prev,
            a,
            b,
            c,
            d,
        } = quad;
        let (Some(edge_face), Some(twin_face)) =
            (self.half_edges[e.idx()].face, self.half_edges[t.idx()].face)
        else {
            return false;
        };

        // ===== PHASE 2: REWIRE THE EDGE SIDE =====
        // edge_face becomes (c, a, d): e_prev(C->A) -> t_next(A->D) -> e(D->C)
        self.faces[edge_face.idx()].start_half_edge = e_prev;
        self.link(e_prev, t_next);
        self.half_edges[e.idx()].origin = d;
        self.link(t_next, e);
        self.half_edges[t_next.idx()].face = Some(edge_face);
        self.link(e, e_prev);

        // ===== PHASE 3: REWIRE THE TWIN SIDE =====
        // twin_face becomes (d, b, c): t_prev(D->B) -> e_next(B->C) -> t(C->D)
        self.faces[twin_face.idx()].start_half_edge = t_prev;
        self.link(t_prev, e_next);
        self.half_edges[t.idx()].origin = c;
        self.link(e_next, t);
        self.half_edges[e_next.idx()].face = Some(twin_face);
        self.link(t, t_prev);

        // ===== PHASE 4: UPDATE VERTEX INCIDENT EDGES =====
        // A and B no longer originate the flipped pair
        if self.vertices[a.idx()].incident_edge == Some(e) {
            self.vertices[a.idx()].incident_edge = Some(t_next);
        }
        if self.vertices[b.idx()].incident_edge == Some(t) {
            self.vertices[b.idx()].incident_edge = Some(e_next);
        }

        trace!(
            "flip_edge: flipped edge {:?} from ({:?}->{:?}) to ({:?}<->{:?})",
            edge_id,
            a,
            b,
            d,
            c
        );

        true
    }

    /// Set `from.next = to` and the matching `to.prev = from`
    fn link(&mut self, from: HalfEdgeId, to: HalfEdgeId) {
        self.half_edges[from.idx()].next = to;
        self.half_edges[to.idx()].prev = from;
    }
}
