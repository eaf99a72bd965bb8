//! Core game engine - pure, deterministic, and testable
//!
//! This crate contains all the game rules and simulation logic. It has
//! zero dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed and the same command/tick script
//!   produce identical sessions
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: runs anywhere (terminal frontend, headless harness)
//!
//! # Module Structure
//!
//! - [`board`]: the fixed 10x20 grid with row removal and gravity shift
//! - [`shapes`]: the 7-shape catalog and pure matrix rotation
//! - [`piece`]: the active piece, the collision predicate, ghost projection
//! - [`session`]: command handling, drop scheduling, line clears, scoring
//! - [`snapshot`]: the read-only per-frame view for presentation
//! - [`events`]: drainable session transitions and the score sink trait
//! - [`rng`]: seeded LCG behind uniform shape draws
//!
//! # Game Rules
//!
//! - Gravity is fixed at one row per second; soft drop is an immediate
//!   gravity step. There are no levels and no speed-up.
//! - Rotation is a pure matrix transform (transpose + flip) with no wall
//!   kicks: a rotation that would collide is simply rejected.
//! - Line clears score 100/300/500/800 for 1/2/3/4 rows; surviving a full
//!   second scores 1.
//! - A piece that cannot spawn ends the episode: the session resets to an
//!   empty board and zero score in the same call, and play continues.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::Command;
//!
//! let mut session = Session::new(12345);
//! session.apply(Command::MoveRight);
//! session.apply(Command::RotateCw);
//! session.tick(16);
//!
//! let snapshot = session.snapshot();
//! assert!(snapshot.ghost_y >= snapshot.active.y);
//! ```

pub mod board;
pub mod events;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use events::{ScoreSink, SessionEvent};
pub use piece::{collides, ghost_y, piece_collides, Piece};
pub use rng::SimpleRng;
pub use session::{line_clear_points, Session};
pub use shapes::{template, ShapeMatrix};
pub use snapshot::{ActiveSnapshot, Snapshot};
