//! Terminal memory game (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_memory::{core,input,term,types}`
//! and hosts the event [`journal`] used by the binary.

pub mod journal;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
