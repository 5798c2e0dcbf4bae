//! Toroidal indexing for square grids.
//!
//! Cells are stored in a single row-major array, so a position `(row, col)`
//! on a grid of side length `size` lives at index `row * size + col`.

/// Number of cells in a Moore neighborhood, excluding the center.
pub const NEIGHBOR_COUNT: usize = 8;

/// Neighbor offsets as `(d_row, d_col)` pairs, in the order that cells are
/// linked to their neighbors.
pub const NEIGHBOR_OFFSETS: [(isize, isize); NEIGHBOR_COUNT] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Adds `offset` to `coord`, wrapping around a side of length `size`.
///
/// # Panics
///
/// This function panics if `size` is zero.
#[inline]
pub fn wrap(coord: usize, offset: isize, size: usize) -> usize {
    assert!(size > 0, "Cannot wrap around an empty grid");
    // Reduce first so that huge coordinates cannot overflow.
    let coord = (coord % size) as isize;
    let size = size as isize;
    (coord + offset).rem_euclid(size) as usize
}

/// Converts a position into a flat index for a grid with the given side
/// length.
#[inline]
pub fn flatten_idx(size: usize, row: usize, col: usize) -> usize {
    assert!(row < size && col < size, "Position out of bounds");
    row * size + col
}

/// Converts a flat index into a position for a grid with the given side
/// length.
#[inline]
pub fn unflatten_idx(size: usize, idx: usize) -> (usize, usize) {
    assert!(idx < size * size, "Index out of bounds");
    (idx / size, idx % size)
}

/// Returns the positions of the neighbors of `(row, col)` on a torus of side
/// length `size`, in `NEIGHBOR_OFFSETS` order.
pub fn neighbor_positions(
    size: usize,
    row: usize,
    col: usize,
) -> [(usize, usize); NEIGHBOR_COUNT] {
    let mut ret = [(0, 0); NEIGHBOR_COUNT];
    for (out, &(d_row, d_col)) in ret.iter_mut().zip(&NEIGHBOR_OFFSETS) {
        *out = (wrap(row, d_row, size), wrap(col, d_col, size));
    }
    ret
}

/// Returns the flat indices of the neighbors of `(row, col)` on a torus of
/// side length `size`, in `NEIGHBOR_OFFSETS` order.
pub fn neighbor_indices(size: usize, row: usize, col: usize) -> [usize; NEIGHBOR_COUNT] {
    let mut ret = [0; NEIGHBOR_COUNT];
    let positions = neighbor_positions(size, row, col);
    for (out, &(r, c)) in ret.iter_mut().zip(&positions) {
        *out = flatten_idx(size, r, c);
    }
    ret
}
