//! Validation methods for Dcel.
//!
//! Checks the pointer-consistency invariants every operation must preserve:
//! - next/prev are mutual inverses
//! - twin is an involution pairing opposite directions
//! - faces are closed 3-cycles carrying their own face handle
//! - boundary half-edges form face-less loops
//! - every vertex's incident edge starts at that vertex
//! - every vertex used by a face has an incident edge

use std::collections::HashSet;

use super::types::{DcelError, HalfEdge, HalfEdgeId, Result, VertexId};
use super::Dcel;
use crate::constants::TRIANGLE_SIDES;

impl Dcel {
    /// Validate the DCEL topology.
    ///
    /// Returns the first violated invariant as [`DcelError::InvalidTopology`].
    pub fn validate(&self) -> Result<()> {
        for he in &self.half_edges {
            self.validate_half_edge(he)?;
        }

        for face in &self.faces {
            let mut current = face.start_half_edge;
            let mut count = 0;

            loop {
                let he = self.require(current, "face cycle")?;
                if he.face != Some(face.id) {
                    return Err(DcelError::InvalidTopology(format!(
                        "Face {:?}: half-edge {:?} belongs to {:?}",
                        face.id, current, he.face
                    )));
                }

                current = he.next;
                count += 1;

                if current == face.start_half_edge {
                    break;
                }
                if count > TRIANGLE_SIDES {
                    return Err(DcelError::InvalidTopology(format!(
                        "Face {:?}: cycle does not close after {} steps",
                        face.id, TRIANGLE_SIDES
                    )));
                }
            }

            if count != TRIANGLE_SIDES {
                return Err(DcelError::InvalidTopology(format!(
                    "Face {:?} has {} sides",
                    face.id, count
                )));
            }
        }

        let used: HashSet<VertexId> = self
            .half_edges
            .iter()
            .filter(|he| he.face.is_some())
            .map(|he| he.origin)
            .collect();

        for v in &self.vertices {
            match v.incident_edge {
                Some(he_id) => {
                    let he = self.require(he_id, "incident edge")?;
                    if he.origin != v.id {
                        return Err(DcelError::InvalidTopology(format!(
                            "Vertex {:?}: incident edge {:?} has wrong origin {:?}",
                            v.id, he_id, he.origin
                        )));
                    }
                }
                None if used.contains(&v.id) => {
                    return Err(DcelError::InvalidTopology(format!(
                        "Vertex {:?} is used by a face but has no incident edge",
                        v.id
                    )));
                }
                None => {}
            }
        }

        Ok(())
    }

    fn validate_half_edge(&self, he: &HalfEdge) -> Result<()> {
        let next = self.require(he.next, "next")?;
        if next.prev != he.id {
            return Err(DcelError::InvalidTopology(format!(
                "Half-edge {:?}: next.prev = {:?}, expected {:?}",
                he.id, next.prev, he.id
            )));
        }

        let prev = self.require(he.prev, "prev")?;
        if prev.next != he.id {
            return Err(DcelError::InvalidTopology(format!(
                "Half-edge {:?}: prev.next = {:?}, expected {:?}",
                he.id, prev.next, he.id
            )));
        }

        let twin = self.require(he.twin, "twin")?;
        if twin.id == he.id || twin.twin != he.id {
            return Err(DcelError::InvalidTopology(format!(
                "Half-edge {:?}: twin symmetry violated (twin {:?}, twin.twin {:?})",
                he.id, he.twin, twin.twin
            )));
        }
        // A half-edge's twin starts where its successor starts
        if twin.origin != next.origin {
            return Err(DcelError::InvalidTopology(format!(
                "Half-edge {:?}: twin origin {:?} != next origin {:?}",
                he.id, twin.origin, next.origin
            )));
        }

        if he.face.is_none() && next.face.is_some() {
            return Err(DcelError::InvalidTopology(format!(
                "Boundary half-edge {:?} continues into face {:?}",
                he.id, next.face
            )));
        }

        if self.vertex(he.origin).is_none() {
            return Err(DcelError::InvalidTopology(format!(
                "Half-edge {:?}: origin {:?} doesn't exist",
                he.id, he.origin
            )));
        }

        Ok(())
    }

    fn require(&self, id: HalfEdgeId, role: &str) -> Result<&HalfEdge> {
        self.half_edge(id).ok_or_else(|| {
            DcelError::InvalidTopology(format!("{} half-edge {:?} doesn't exist", role, id))
        })
    }
}
