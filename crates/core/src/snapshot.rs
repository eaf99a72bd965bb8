//! Snapshot module - the read-only view the presentation layer consumes
//!
//! A [`Snapshot`] is plain data: the board as catalog-id bytes, the active
//! piece, the ghost projection, the clear-flash state, and the score.
//! `snapshot_into` refreshes a caller-owned snapshot without allocating,
//! so the frame loop can reuse one per frame.

use arrayvec::ArrayVec;

use blockfall_types::{ShapeId, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

use crate::piece::Piece;
use crate::session::Session;
use crate::shapes::{template, ShapeMatrix};

/// The active piece as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub id: ShapeId,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            id: value.id,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

/// Complete read-only view of a session for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Board cells as catalog ids, 0 = empty. `board[y][x]`.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    /// Row where the active piece would land if dropped now.
    pub ghost_y: i8,
    /// Rows currently flashing from a clear, at their scan indices.
    pub flash_rows: ArrayVec<u8, 4>,
    /// Milliseconds into the flash animation (0..CLEAR_FLASH_MS).
    pub flash_ms: u32,
    pub score: u32,
    pub episode: u32,
}

impl Snapshot {
    /// Flash animation progress in [0, 1].
    pub fn flash_progress(&self) -> f32 {
        if self.flash_rows.is_empty() {
            return 0.0;
        }
        (self.flash_ms as f32 / blockfall_types::CLEAR_FLASH_MS as f32).min(1.0)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                id: ShapeId::I,
                matrix: template(ShapeId::I),
                x: SPAWN_X,
                y: SPAWN_Y,
            },
            ghost_y: SPAWN_Y,
            flash_rows: ArrayVec::new(),
            flash_ms: 0,
            score: 0,
            episode: 0,
        }
    }
}

impl Session {
    /// Refresh `out` with the current state. Allocation-free.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.board().write_id_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active());
        out.ghost_y = self.ghost_y();
        let (rows, ms) = self.flash();
        out.flash_rows.clear();
        for &row in rows {
            let _ = out.flash_rows.try_push(row);
        }
        out.flash_ms = ms;
        out.score = self.score();
        out.episode = self.episode();
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let mut snap = Snapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
