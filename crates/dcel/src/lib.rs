//! Doubly-connected edge list (half-edge) topology for triangle meshes
//!
//! Turns a flat vertex buffer plus a triangle index buffer into an explicit
//! adjacency graph:
//! - [`half_edge::Dcel`] - the container owning vertices, half-edges and faces
//! - [`config::BuildConfig`] - construction options (twin lookup, input checks)
//! - [`half_edge::FaceWalk`] / [`half_edge::VertexWalk`] - lazy traversals
//! - [`Dcel::flip_edge`] - local edge-flip rewrite
//!
//! All cross-references are index handles into the container's flat
//! collections, so the graph has no ownership cycles.

pub mod config;
pub mod constants;
pub mod half_edge;

pub use config::*;
pub use constants::*;
pub use half_edge::*;
