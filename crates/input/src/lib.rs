//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]. Mouse
//! positions are resolved to grid cells through a caller-supplied locator, so
//! the same mapping works for any screen layout.

pub mod map;

pub use tui_memory_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
