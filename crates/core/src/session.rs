//! Session module - game state, command handling, and the drop scheduler
//!
//! A [`Session`] owns the board, the single active piece, the RNG, the
//! score, and every timer. `tick` advances simulation by elapsed wall-clock
//! milliseconds; `apply` handles input commands synchronously between
//! ticks. Transitions (spawn, lock, row clears, score changes, resets) are
//! queued as [`SessionEvent`]s for the frame loop to drain.
//!
//! Game over is not an error and not a state: a piece that collides at the
//! spawn offset wipes the session back to a fresh board in the same call,
//! bumping the episode counter.

use arrayvec::ArrayVec;

use blockfall_types::{
    Command, CLEAR_FLASH_MS, DROP_INTERVAL_MS, LINE_SCORES, SURVIVAL_AWARD_MS,
};

use crate::board::Board;
use crate::events::SessionEvent;
use crate::piece::{ghost_y, piece_collides, Piece};
use crate::rng::SimpleRng;

/// Upper bound on events a single frame can produce before draining.
const EVENT_QUEUE_CAP: usize = 32;

/// Points for clearing `lines` rows in one lock (0 outside 1..=4).
pub fn line_clear_points(lines: u32) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines as usize],
        _ => 0,
    }
}

/// One independent game: board, active piece, score, and scheduling state.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Piece,
    rng: SimpleRng,
    score: u32,
    /// Milliseconds accumulated toward the next gravity step.
    drop_timer_ms: u32,
    /// Milliseconds accumulated toward the next survival point.
    survival_timer_ms: u32,
    /// Rows currently flashing, at the indices the clear scan observed.
    flash_rows: ArrayVec<u8, 4>,
    flash_timer_ms: u32,
    /// Increments on every game-over reset.
    episode: u32,
    events: ArrayVec<SessionEvent, EVENT_QUEUE_CAP>,
}

impl Session {
    /// Create a session with a fresh board and a first spawned piece.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(&mut rng);
        let mut session = Self {
            board: Board::new(),
            active,
            rng,
            score: 0,
            drop_timer_ms: 0,
            survival_timer_ms: 0,
            flash_rows: ArrayVec::new(),
            flash_timer_ms: 0,
            episode: 0,
            events: ArrayVec::new(),
        };
        session.emit(SessionEvent::Spawned { id: session.active.id });
        session
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for scenario setup and tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece. Harness hook for deterministic scenarios.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    /// Rows currently flashing plus the flash clock, for the renderer.
    pub fn flash(&self) -> (&[u8], u32) {
        (&self.flash_rows, self.flash_timer_ms)
    }

    /// Ghost projection of the active piece (lowest non-colliding row).
    pub fn ghost_y(&self) -> i8 {
        ghost_y(&self.board, &self.active)
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain_events(&mut self) -> ArrayVec<SessionEvent, EVENT_QUEUE_CAP> {
        std::mem::take(&mut self.events)
    }

    /// Advance the session by `delta_ms` of wall-clock time.
    ///
    /// Order within a tick is fixed: flash clock, gravity, survival
    /// scoring. Commands are never processed here - they arrive through
    /// [`apply`](Self::apply) between ticks.
    pub fn tick(&mut self, delta_ms: u32) {
        // Flash rows expire on their own and never block simulation.
        if !self.flash_rows.is_empty() {
            self.flash_timer_ms = self.flash_timer_ms.saturating_add(delta_ms);
            if self.flash_timer_ms >= CLEAR_FLASH_MS {
                self.flash_rows.clear();
                self.flash_timer_ms = 0;
            }
        }

        self.drop_timer_ms += delta_ms;
        if self.drop_timer_ms > DROP_INTERVAL_MS {
            self.drop_attempt();
        }

        self.survival_timer_ms += delta_ms;
        while self.survival_timer_ms >= SURVIVAL_AWARD_MS {
            self.survival_timer_ms -= SURVIVAL_AWARD_MS;
            self.add_score(1);
        }
    }

    /// Apply one input command. Returns whether the piece changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::SoftDrop => {
                self.drop_attempt();
                true
            }
            Command::RotateCw => self.try_rotate(),
        }
    }

    /// Attempt to move the active piece down one row.
    ///
    /// On collision the piece locks instead: merge, clear lines, respawn.
    /// Every attempt (success or lock) zeroes the drop timer.
    pub fn drop_attempt(&mut self) {
        let candidate = self.active.dropped();
        if piece_collides(&self.board, &candidate) {
            self.lock_active();
        } else {
            self.active = candidate;
        }
        self.drop_timer_ms = 0;
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let candidate = self.active.shifted(dx);
        if piece_collides(&self.board, &candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated_cw();
        if piece_collides(&self.board, &candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Merge the active piece into the board, clear lines, spawn the next
    /// piece. A blocked spawn resets the whole session.
    fn lock_active(&mut self) {
        let piece = self.active;
        let size = piece.matrix.size();
        for cy in 0..size {
            for cx in 0..size {
                if piece.matrix.get(cx, cy) != 0 {
                    let _ = self
                        .board
                        .set(piece.x + cx as i8, piece.y + cy as i8, Some(piece.id));
                }
            }
        }

        let cleared = self.clear_full_rows();
        self.emit(SessionEvent::Locked {
            lines_cleared: cleared,
        });
        if cleared > 0 {
            self.add_score(line_clear_points(cleared));
        }

        self.active = Piece::spawn(&mut self.rng);
        if piece_collides(&self.board, &self.active) {
            self.reset();
        } else {
            self.emit(SessionEvent::Spawned { id: self.active.id });
        }
    }

    /// Bottom-to-top scan with stay-and-recheck removal.
    ///
    /// After removing a full row the same index is examined again, because
    /// the rows above have shifted down into it. Adjacent full rows are
    /// therefore all caught in a single pass, and the emitted row indices
    /// are the ones the scan observed.
    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut y = self.board.height() as i32 - 1;
        while y >= 0 {
            if self.board.is_row_full(y as u8) {
                self.emit(SessionEvent::RowCleared { row: y as u8 });
                let _ = self.flash_rows.try_push(y as u8);
                self.board.remove_row(y as u8);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        if cleared > 0 {
            self.flash_timer_ms = 0;
        }
        cleared
    }

    /// Wipe everything back to a fresh episode: empty board, zero score
    /// and timers, new piece. The RNG keeps its stream.
    fn reset(&mut self) {
        self.emit(SessionEvent::SessionReset);
        self.board.clear();
        self.score = 0;
        self.drop_timer_ms = 0;
        self.survival_timer_ms = 0;
        self.flash_rows.clear();
        self.flash_timer_ms = 0;
        self.episode = self.episode.wrapping_add(1);
        self.emit(SessionEvent::ScoreChanged { score: 0 });
        self.active = Piece::spawn(&mut self.rng);
        self.emit(SessionEvent::Spawned { id: self.active.id });
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.emit(SessionEvent::ScoreChanged { score: self.score });
    }

    fn emit(&mut self, event: SessionEvent) {
        // A full queue only drops observer cues, never game state.
        let _ = self.events.try_push(event);
    }
}
