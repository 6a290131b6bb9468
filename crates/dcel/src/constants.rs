/// Number of sides of every face built by this crate.
pub const TRIANGLE_SIDES: usize = 3;

/// Number of indices consumed per triangle in an index buffer.
pub const INDICES_PER_TRIANGLE: usize = TRIANGLE_SIDES;
