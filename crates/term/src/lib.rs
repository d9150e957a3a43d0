//! Terminal presentation layer.
//!
//! A small, game-oriented rendering stack: the view composes frames into a
//! styled-cell [`FrameBuffer`] and a [`Display`] backend makes them
//! visible. The real backend ([`TerminalRenderer`]) flushes diff-encoded
//! frames to the terminal over crossterm; [`CaptureDisplay`] is the
//! headless stand-in for tests and benches.

pub mod display;
pub mod fb;
pub mod renderer;

pub use arena_duel_types as types;

pub use display::{CaptureDisplay, Display};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
