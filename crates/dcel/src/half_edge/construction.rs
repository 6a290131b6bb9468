//! Construction methods for Dcel.

use glam::Vec3;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::types::{DcelError, Face, FaceId, HalfEdge, HalfEdgeId, Result, Vertex, VertexId};
use super::Dcel;
use crate::config::{BuildConfig, TwinLookup};
use crate::constants::{INDICES_PER_TRIANGLE, TRIANGLE_SIDES};

/// Half-edge under construction, addressed by its creation slot.
///
/// Slots are remapped to final [`HalfEdgeId`]s once every triangle has been
/// processed so that face half-edges come first, in input order.
#[derive(Debug, Clone)]
struct DraftEdge {
    origin: VertexId,
    twin: Option<usize>,
    next: usize,
    prev: usize,
    face: Option<FaceId>,
}

/// Twins synthesized for earlier triangles that no face has claimed yet.
enum PendingTwins {
    LinearScan(Vec<usize>),
    EdgeMap(HashMap<(VertexId, VertexId), usize>),
}

impl PendingTwins {
    fn new(lookup: TwinLookup) -> Self {
        match lookup {
            TwinLookup::LinearScan => Self::LinearScan(Vec::new()),
            TwinLookup::EdgeMap => Self::EdgeMap(HashMap::new()),
        }
    }

    /// Record an unclaimed twin running `origin -> dest`.
    fn insert(&mut self, slot: usize, origin: VertexId, dest: VertexId) {
        match self {
            Self::LinearScan(slots) => slots.push(slot),
            Self::EdgeMap(map) => {
                map.insert((origin, dest), slot);
            }
        }
    }

    /// Remove and return the pending twin running `origin -> dest`, if any.
    ///
    /// A pending twin's `next` still points at the half-edge it was created
    /// for, whose origin is the twin's destination.
    fn claim(&mut self, origin: VertexId, dest: VertexId, drafts: &[DraftEdge]) -> Option<usize> {
        match self {
            Self::LinearScan(slots) => {
                let pos = slots.iter().position(|&slot| {
                    drafts[slot].origin == origin && drafts[drafts[slot].next].origin == dest
                })?;
                Some(slots.swap_remove(pos))
            }
            Self::EdgeMap(map) => map.remove(&(origin, dest)),
        }
    }
}

impl Dcel {
    /// Build a DCEL from a vertex buffer and a triangle index buffer using the
    /// default [`BuildConfig`].
    pub fn from_indexed_triangles(positions: &[Vec3], indices: &[u32]) -> Result<Self> {
        Self::build(positions, indices, &BuildConfig::default())
    }

    /// Build a DCEL from `[x, y, z]` position arrays, as most vertex buffers
    /// store them.
    pub fn from_position_arrays(positions: &[[f32; 3]], indices: &[u32]) -> Result<Self> {
        let positions: Vec<Vec3> = positions.iter().map(|p| Vec3::from_array(*p)).collect();
        Self::from_indexed_triangles(&positions, indices)
    }

    /// Build a DCEL from indexed triangles.
    ///
    /// Each consecutive index triple names one triangle; all triangles must
    /// share one winding so that an edge shared by two triangles is traversed
    /// in opposite directions. Edges with no opposite triangle get a face-less
    /// twin, and those twins are linked into closed boundary loops.
    pub fn build(positions: &[Vec3], indices: &[u32], config: &BuildConfig) -> Result<Self> {
        if config.validate_input {
            validate_index_buffer(positions.len(), indices)?;
        }

        let mut vertices: Vec<Vertex> = positions
            .iter()
            .enumerate()
            .map(|(i, pos)| Vertex {
                id: VertexId(i as u32),
                position: *pos,
                incident_edge: None,
            })
            .collect();
        // Incident edges are recorded as draft slots until the final remap
        let mut incident: Vec<Option<usize>> = vec![None; vertices.len()];

        let num_triangles = indices.len() / INDICES_PER_TRIANGLE;
        let mut drafts: Vec<DraftEdge> = Vec::with_capacity(num_triangles * 2 * TRIANGLE_SIDES);
        let mut face_slots: Vec<[usize; TRIANGLE_SIDES]> = Vec::with_capacity(num_triangles);
        let mut pending = PendingTwins::new(config.twin_lookup);

        for (tri_idx, tri) in indices.chunks_exact(INDICES_PER_TRIANGLE).enumerate() {
            let corners = [VertexId(tri[0]), VertexId(tri[1]), VertexId(tri[2])];
            let face_id = FaceId(tri_idx as u32);

            // Claim a pending twin for each directed edge, or create a fresh one
            let mut slots = [0usize; TRIANGLE_SIDES];
            for k in 0..TRIANGLE_SIDES {
                let origin = corners[k];
                let dest = corners[(k + 1) % TRIANGLE_SIDES];
                slots[k] = match pending.claim(origin, dest, &drafts) {
                    Some(slot) => slot,
                    None => {
                        let slot = drafts.len();
                        drafts.push(DraftEdge {
                            origin,
                            twin: None,
                            next: slot,
                            prev: slot,
                            face: None,
                        });
                        incident[origin.idx()] = Some(slot);
                        slot
                    }
                };
            }

            // Link the face cycle
            for k in 0..TRIANGLE_SIDES {
                let draft = &mut drafts[slots[k]];
                draft.next = slots[(k + 1) % TRIANGLE_SIDES];
                draft.prev = slots[(k + TRIANGLE_SIDES - 1) % TRIANGLE_SIDES];
                draft.face = Some(face_id);
            }

            // Synthesize a placeholder twin for every edge not yet paired. Its
            // `next` points back at its face half-edge until boundary loops are closed.
            for k in 0..TRIANGLE_SIDES {
                if drafts[slots[k]].twin.is_some() {
                    continue;
                }
                let origin = corners[(k + 1) % TRIANGLE_SIDES];
                let dest = corners[k];
                let twin_slot = drafts.len();
                drafts.push(DraftEdge {
                    origin,
                    twin: Some(slots[k]),
                    next: slots[k],
                    prev: slots[k],
                    face: None,
                });
                drafts[slots[k]].twin = Some(twin_slot);
                incident[origin.idx()] = Some(twin_slot);
                pending.insert(twin_slot, origin, dest);
            }

            face_slots.push(slots);
        }

        let boundary_slots = close_boundary_loops(&mut drafts)?;

        // Remap draft slots: face half-edges in face order, then boundary loops
        let mut remap = vec![u32::MAX; drafts.len()];
        let mut order: Vec<usize> = Vec::with_capacity(drafts.len());
        for slots in &face_slots {
            order.extend_from_slice(slots);
        }
        order.extend_from_slice(&boundary_slots);
        for (new_idx, &slot) in order.iter().enumerate() {
            remap[slot] = new_idx as u32;
        }

        let mut half_edges: Vec<HalfEdge> = Vec::with_capacity(order.len());
        for (new_idx, &slot) in order.iter().enumerate() {
            let draft = &drafts[slot];
            let twin = draft.twin.ok_or_else(|| {
                DcelError::InvalidTopology(format!("half-edge {} has no twin", new_idx))
            })?;
            half_edges.push(HalfEdge {
                id: HalfEdgeId(new_idx as u32),
                origin: draft.origin,
                twin: HalfEdgeId(remap[twin]),
                next: HalfEdgeId(remap[draft.next]),
                prev: HalfEdgeId(remap[draft.prev]),
                face: draft.face,
            });
        }

        for (vertex, slot) in vertices.iter_mut().zip(&incident) {
            vertex.incident_edge = slot.map(|s| HalfEdgeId(remap[s]));
        }

        let faces: Vec<Face> = (0..face_slots.len())
            .map(|f| Face {
                id: FaceId(f as u32),
                start_half_edge: HalfEdgeId((f * TRIANGLE_SIDES) as u32),
            })
            .collect();

        debug!(
            "build: {} vertices, {} faces, {} half-edges ({} boundary) using {:?} twin lookup",
            vertices.len(),
            faces.len(),
            half_edges.len(),
            boundary_slots.len(),
            config.twin_lookup
        );

        Ok(Self {
            vertices,
            half_edges,
            faces,
        })
    }

    /// Convert back to a shared vertex buffer and triangle index buffer.
    ///
    /// Each face contributes one index triple read from its start half-edge,
    /// so a freshly built DCEL reproduces its input indices exactly.
    pub fn to_indexed_triangles(&self) -> (Vec<Vec3>, Vec<u32>) {
        let positions: Vec<Vec3> = self.vertices.iter().map(|v| v.position).collect();
        let mut indices: Vec<u32> = Vec::with_capacity(self.faces.len() * INDICES_PER_TRIANGLE);
        for face in &self.faces {
            indices.extend(self.face_vertices(face.id).map(|v| v.0));
        }
        (positions, indices)
    }
}

/// Link every face-less draft to its boundary successor.
///
/// On entry each face-less draft's `next` is still the placeholder set when it
/// was synthesized (its twin), so `drafts[next].origin` is its destination.
///
/// Around a vertex the faces form one fan per boundary gap. Each incoming
/// boundary half-edge is linked to the outgoing boundary half-edge that closes
/// the *next* fan, so the umbrella of a pinched vertex (several fans) is still
/// one cycle. With a single fan this is simply the fan's own outgoing edge.
/// Returns the face-less slots in creation order.
fn close_boundary_loops(drafts: &mut [DraftEdge]) -> Result<Vec<usize>> {
    let boundary: Vec<usize> = (0..drafts.len())
        .filter(|&slot| drafts[slot].face.is_none())
        .collect();

    // Incoming boundary half-edges per destination vertex, paired with the
    // outgoing boundary half-edge ending their fan, in creation order
    let mut fans: HashMap<VertexId, Vec<(usize, usize)>> = HashMap::new();
    for &slot in &boundary {
        let dest = drafts[drafts[slot].next].origin;
        let fan_end = fan_end(drafts, slot).ok_or_else(|| {
            warn!("build: fan around vertex {:?} never reaches the boundary", dest);
            DcelError::OpenBoundary { vertex: dest }
        })?;
        fans.entry(dest).or_default().push((slot, fan_end));
    }

    for (vertex, wedges) in &fans {
        if wedges.len() > 1 {
            debug!("build: vertex {:?} joins {} boundary fans", vertex, wedges.len());
        }
        for (i, &(incoming, _)) in wedges.iter().enumerate() {
            let (_, successor) = wedges[(i + 1) % wedges.len()];
            drafts[incoming].next = successor;
            drafts[successor].prev = incoming;
        }
    }

    Ok(boundary)
}

/// Rotate from an incoming boundary draft through the faces around its
/// destination until the next face-less outgoing draft.
///
/// Reads only face cycles and twins, never boundary `next` links, so it is
/// unaffected by the relinking done in [`close_boundary_loops`].
fn fan_end(drafts: &[DraftEdge], incoming: usize) -> Option<usize> {
    let mut outgoing = drafts[incoming].twin?;
    for _ in 0..drafts.len() {
        let twin = drafts[drafts[outgoing].prev].twin?;
        if drafts[twin].face.is_none() {
            return Some(twin);
        }
        outgoing = twin;
    }
    None
}

/// Check an index buffer against the construction preconditions.
///
/// Rejects a length that is not a multiple of three, out-of-range indices,
/// triangles that repeat a vertex, and directed edges used twice (more than
/// two faces on one edge, or neighbours wound inconsistently).
pub fn validate_index_buffer(vertex_count: usize, indices: &[u32]) -> Result<()> {
    if indices.len() % INDICES_PER_TRIANGLE != 0 {
        return Err(DcelError::IndexCountNotMultipleOfThree { len: indices.len() });
    }

    let mut directed: HashSet<(u32, u32)> = HashSet::with_capacity(indices.len());
    for (triangle, tri) in indices.chunks_exact(INDICES_PER_TRIANGLE).enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(DcelError::VertexIndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
        if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
            return Err(DcelError::DegenerateTriangle { triangle });
        }
        for k in 0..TRIANGLE_SIDES {
            let edge = (tri[k], tri[(k + 1) % TRIANGLE_SIDES]);
            if !directed.insert(edge) {
                return Err(DcelError::NonManifoldEdge {
                    from: VertexId(edge.0),
                    to: VertexId(edge.1),
                });
            }
        }
    }

    Ok(())
}
