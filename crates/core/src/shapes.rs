//! Shapes module - the tetromino catalog and matrix rotation
//!
//! Each shape is a small square matrix of cells holding either 0 (empty)
//! or the shape's catalog id. The matrix itself is the rotation state:
//! rotating transposes the matrix and flips it, so there is no separate
//! orientation enum and no kick tables. Four clockwise rotations restore
//! the original matrix byte-for-byte.
//!
//! Catalog sizes: O is 2x2, J/L/S/T/Z are 3x3, I is 4x4.

use blockfall_types::ShapeId;

/// Largest catalog matrix edge (the I shape).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A square shape matrix with cells of 0 or a catalog id.
///
/// Storage is a fixed 4x4 grid; `size` bounds the live region. Cells are
/// indexed `[row][col]`, i.e. (x, y) reads `cells[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Edge length of the live region (2, 3 or 4).
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell value at (x, y); 0 outside the live region.
    pub fn get(&self, x: u8, y: u8) -> u8 {
        if x >= self.size || y >= self.size {
            return 0;
        }
        self.cells[y as usize][x as usize]
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// Pure - callers test the candidate and commit only on success.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut out = Self {
            size: self.size,
            cells: [[0; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        };
        for y in 0..n {
            for x in 0..n {
                out.cells[y][x] = self.cells[x][y];
            }
        }
        for row in out.cells[..n].iter_mut() {
            row[..n].reverse();
        }
        out
    }

    /// Rotate 90° counter-clockwise: transpose, then reverse row order.
    ///
    /// Exact inverse of [`rotated_cw`](Self::rotated_cw).
    pub fn rotated_ccw(&self) -> Self {
        let n = self.size as usize;
        let mut out = Self {
            size: self.size,
            cells: [[0; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        };
        for y in 0..n {
            for x in 0..n {
                out.cells[y][x] = self.cells[x][y];
            }
        }
        out.cells[..n].reverse();
        out
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        let n = self.size as usize;
        let mut count = 0;
        for row in &self.cells[..n] {
            count += row[..n].iter().filter(|&&v| v != 0).count();
        }
        count
    }
}

/// Immutable template for a catalog shape at its spawn orientation.
pub fn template(id: ShapeId) -> ShapeMatrix {
    match id {
        ShapeId::I => I_TEMPLATE,
        ShapeId::J => J_TEMPLATE,
        ShapeId::L => L_TEMPLATE,
        ShapeId::O => O_TEMPLATE,
        ShapeId::S => S_TEMPLATE,
        ShapeId::T => T_TEMPLATE,
        ShapeId::Z => Z_TEMPLATE,
    }
}

const I_TEMPLATE: ShapeMatrix = ShapeMatrix {
    size: 4,
    cells: [
        [0, 0, 0, 0],
        [1, 1, 1, 1],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const J_TEMPLATE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [2, 0, 0, 0],
        [2, 2, 2, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const L_TEMPLATE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [0, 0, 3, 0],
        [3, 3, 3, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const O_TEMPLATE: ShapeMatrix = ShapeMatrix {
    size: 2,
    cells: [
        [4, 4, 0, 0],
        [4, 4, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const S_TEMPLATE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [0, 5, 5, 0],
        [5, 5, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const T_TEMPLATE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [0, 6, 0, 0],
        [6, 6, 6, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const Z_TEMPLATE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [7, 7, 0, 0],
        [0, 7, 7, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};
