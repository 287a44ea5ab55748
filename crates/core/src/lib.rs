//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing.
//! It has **zero dependencies** on terminal I/O, which keeps it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Any front-end that can draw a grid can drive it
//!
//! # Module Structure
//!
//! - [`board`]: grid of paired icons and the shuffled deal
//! - [`reveal`]: per-tile face-up flags and the win predicate
//! - [`turn`]: two-pick turn resolution
//! - [`game_state`]: phases (preview, playing, mismatch pause, celebration) and statistics
//! - [`config`]: board/pool configuration and startup checks
//! - [`rng`]: seeded LCG used for shuffling
//! - [`snapshot`]: render-ready copy of the state
//!
//! # Game Rules
//!
//! - Each board holds every icon of its pool exactly twice
//! - A turn is two picks; matching icons stay face-up for the rest of the board
//! - A mismatched pair stays visible for a short pause, then flips back
//! - Once every tile is face-up the background flashes and a new board is dealt
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameConfig, GameState, Resolution};
//! use tui_memory_types::Pos;
//!
//! let config = GameConfig { preview: false, ..GameConfig::default() };
//! let mut game = GameState::new(&config, 12345).unwrap();
//!
//! let first = Pos::new(0, 0);
//! let partner = game.board().partner_of(first).unwrap();
//!
//! game.select(first);
//! assert!(matches!(game.select(partner), Resolution::Matched(_)));
//! assert_eq!(game.matches(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time; all pauses count down there.

pub mod board;
pub mod config;
pub mod game_state;
pub mod reveal;
pub mod rng;
pub mod snapshot;
pub mod turn;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameEvent, GameState, Phase};
pub use reveal::RevealState;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PhaseKind, TileSnapshot};
pub use turn::{Resolution, TurnResolver, TurnState};
