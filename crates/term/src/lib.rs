//! Terminal presentation layer.
//!
//! Everything here is a consumer of engine state, never a mutator:
//!
//! - [`fb`]: framebuffer and style primitives
//! - [`view`]: pure snapshot-to-framebuffer mapping (unit-testable)
//! - [`effects`]: particle/smoke bursts fed by cleared-row cues
//! - [`banner`]: the score sink backing the on-screen score text
//! - [`renderer`]: crossterm backend flushing framebuffer diffs
//!
//! The split keeps the engine deterministic and headless-testable while
//! the renderer owns all terminal I/O.

pub mod banner;
pub mod effects;
pub mod fb;
pub mod renderer;
pub mod view;

pub use banner::ScoreBanner;
pub use effects::EffectSystem;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{shape_color, GameView, Viewport};
