//! Piece module - the active falling piece and the collision predicate
//!
//! A piece is a catalog shape matrix plus a board offset. All transforms
//! are expressed as candidate values: callers build the candidate, test it
//! with [`collides`], and commit only on success. A rejected transform
//! therefore leaves the original piece byte-for-byte untouched.

use blockfall_types::{ShapeId, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::shapes::{template, ShapeMatrix};

/// The active falling piece: a shape matrix located on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: ShapeId,
    pub matrix: ShapeMatrix,
    /// Board column of the matrix's top-left corner.
    pub x: i8,
    /// Board row of the matrix's top-left corner.
    pub y: i8,
}

impl Piece {
    /// A fresh piece of the given shape at the spawn offset.
    pub fn new(id: ShapeId) -> Self {
        Self {
            id,
            matrix: template(id),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Draw a shape uniformly from the catalog and spawn it.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let id = ShapeId::ALL[rng.next_range(7) as usize];
        Self::new(id)
    }

    /// Candidate shifted horizontally by `dx` columns.
    pub fn shifted(&self, dx: i8) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }

    /// Candidate moved down one row.
    pub fn dropped(&self) -> Self {
        Self {
            y: self.y + 1,
            ..*self
        }
    }

    /// Candidate rotated 90° clockwise in place.
    pub fn rotated_cw(&self) -> Self {
        Self {
            matrix: self.matrix.rotated_cw(),
            ..*self
        }
    }

    /// Candidate rotated 90° counter-clockwise in place.
    pub fn rotated_ccw(&self) -> Self {
        Self {
            matrix: self.matrix.rotated_ccw(),
            ..*self
        }
    }
}

/// Test a shape matrix against the board at offset (x, y).
///
/// Collision rules, checked per filled matrix cell:
/// - outside `[0, W)` horizontally or at/below the floor: collision
/// - rows above the board (`y < 0`) never collide
/// - an occupied board cell collides
///
/// This single predicate backs every movement legality check.
pub fn collides(board: &Board, matrix: &ShapeMatrix, x: i8, y: i8) -> bool {
    let size = matrix.size();
    for cy in 0..size {
        for cx in 0..size {
            if matrix.get(cx, cy) == 0 {
                continue;
            }
            let bx = x + cx as i8;
            let by = y + cy as i8;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return true;
            }
            if by >= 0 && board.is_occupied(bx, by) {
                return true;
            }
        }
    }
    false
}

/// Convenience form of [`collides`] for a placed piece.
pub fn piece_collides(board: &Board, piece: &Piece) -> bool {
    collides(board, &piece.matrix, piece.x, piece.y)
}

/// Lowest non-colliding row for the piece's current matrix and column.
///
/// This is the ghost projection: where the piece would land if dropped
/// immediately.
pub fn ghost_y(board: &Board, piece: &Piece) -> i8 {
    let mut y = piece.y;
    while !collides(board, &piece.matrix, piece.x, y + 1) {
        y += 1;
    }
    y
}
