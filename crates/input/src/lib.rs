//! Input module - terminal keys to engine commands
//!
//! Two layers:
//! - [`map`]: stateless key-to-command mapping (unmapped keys are ignored)
//! - [`repeat`]: held-key repeater that regenerates auto-repeat for raw
//!   terminals

pub mod map;
pub mod repeat;

pub use map::{map_key_event, should_quit};
pub use repeat::KeyRepeater;
