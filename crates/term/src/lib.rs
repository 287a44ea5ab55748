//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal by
//! [`TerminalRenderer`], and owns the screen [`Layout`] that maps pointer
//! positions to board tiles.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw icon shapes with half-block subpixels for a roughly square aspect
//! - Use one layout for both drawing and hit-testing

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use layout::Layout;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
