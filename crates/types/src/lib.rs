//! Shared types module - constants and pure data structures
//!
//! Everything in this crate is plain data with no dependencies, usable from
//! any layer (core engine, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn offset**: (3, 0) for every shape
//!
//! # Timing Constants
//!
//! All values in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval (fixed, no level speed-up) |
//! | `SURVIVAL_AWARD_MS` | 1000 | One survival point per full second |
//! | `CLEAR_FLASH_MS` | 160 | Duration of the line-clear flash band |
//!
//! # Scoring
//!
//! Line clears score from a fixed table (no level multiplier):
//! 1 row = 100, 2 = 300, 3 = 500, 4 = 800. Surviving a full second is
//! worth one additional point.

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval in milliseconds. Fixed for the whole session.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Elapsed play time needed for one survival point.
pub const SURVIVAL_AWARD_MS: u32 = 1000;

/// How long the white flash band stays on just-cleared rows.
pub const CLEAR_FLASH_MS: u32 = 160;

/// Spawn offset for a fresh piece (top-center for a 10-wide board).
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Line clear scoring table, indexed by rows cleared in one lock.
///
/// Index 0 is unused (no clear scores nothing).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Held-key repeat: initial delay before auto-repeat starts.
pub const DEFAULT_DAS_MS: u32 = 150;

/// Held-key repeat: interval between repeats once started.
pub const DEFAULT_ARR_MS: u32 = 50;

/// Soft drop repeats immediately (no initial delay).
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop repeat interval.
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// The seven tetromino shapes, numbered 1..7 in catalog order.
///
/// The number doubles as the cell value written into the board and the
/// index into the display palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeId {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl ShapeId {
    /// All shapes in catalog order (id 1 first).
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::J,
        ShapeId::L,
        ShapeId::O,
        ShapeId::S,
        ShapeId::T,
        ShapeId::Z,
    ];

    /// Numeric catalog id (1..7).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Parse a catalog id back into a shape.
    ///
    /// ```
    /// use blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_id(1), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_id(7), Some(ShapeId::Z));
    /// assert_eq!(ShapeId::from_id(0), None);
    /// assert_eq!(ShapeId::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(ShapeId::I),
            2 => Some(ShapeId::J),
            3 => Some(ShapeId::L),
            4 => Some(ShapeId::O),
            5 => Some(ShapeId::S),
            6 => Some(ShapeId::T),
            7 => Some(ShapeId::Z),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(ShapeId)`: filled by the given shape (determines its color)
pub type Cell = Option<ShapeId>;

/// Commands the engine accepts from any input source.
///
/// Each is applied synchronously and atomically: a command that would
/// collide leaves the active piece untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the active piece one cell left.
    MoveLeft,
    /// Move the active piece one cell right.
    MoveRight,
    /// Drop one row now; equivalent to an immediate gravity step.
    SoftDrop,
    /// Rotate the active piece 90° clockwise.
    RotateCw,
}
