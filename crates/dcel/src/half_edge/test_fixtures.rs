//! Small meshes shared by the unit tests.

use glam::Vec3;

use super::Dcel;

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

pub fn quad_positions() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]
}

/// One isolated triangle: every edge is a boundary edge
pub fn single_triangle() -> Dcel {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    Dcel::from_indexed_triangles(&positions, &[0, 1, 2]).unwrap()
}

/// Unit square split along the 0-2 diagonal
pub fn quad() -> Dcel {
    Dcel::from_indexed_triangles(&quad_positions(), &QUAD_INDICES).unwrap()
}

/// Closed tetrahedron with consistent winding
pub fn tetrahedron() -> Dcel {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let indices = [0, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3];
    Dcel::from_indexed_triangles(&positions, &indices).unwrap()
}

/// Closed octahedron: every vertex has valence 4
pub fn octahedron() -> Dcel {
    let positions = vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    let indices = [
        0, 1, 4, 1, 2, 4, 2, 3, 4, 3, 0, 4, //
        1, 0, 5, 2, 1, 5, 3, 2, 5, 0, 3, 5,
    ];
    Dcel::from_indexed_triangles(&positions, &indices).unwrap()
}

/// Vertex and index buffers for a `cols` x `rows` grid of quads, two
/// triangles per quad
pub fn grid_buffers(cols: u32, rows: u32) -> (Vec<Vec3>, Vec<u32>) {
    let mut positions = Vec::new();
    for y in 0..=rows {
        for x in 0..=cols {
            positions.push(Vec3::new(x as f32, y as f32, 0.0));
        }
    }
    let stride = cols + 1;
    let mut indices = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let a = y * stride + x;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
    (positions, indices)
}

pub fn grid(cols: u32, rows: u32) -> Dcel {
    let (positions, indices) = grid_buffers(cols, rows);
    Dcel::from_indexed_triangles(&positions, &indices).unwrap()
}
