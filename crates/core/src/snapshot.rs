//! Snapshot module - render-ready copy of the game state
//!
//! Front-ends draw from a [`GameSnapshot`] instead of borrowing the state.
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into) refills an
//! existing snapshot so a frame loop does not allocate.

use crate::types::{Icon, IconColor, Pos, Shape};

/// Coarse phase, as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhaseKind {
    Preview,
    #[default]
    Playing,
    Mismatch,
    Celebrate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub icon: Icon,
    /// Reveal flag.
    pub face_up: bool,
    /// Shown only by the start preview; the reveal flag is still false.
    pub peeking: bool,
    /// First pick of the current turn.
    pub pending: bool,
}

impl TileSnapshot {
    /// Whether the icon should be drawn.
    pub fn visible(&self) -> bool {
        self.face_up || self.peeking
    }
}

impl Default for TileSnapshot {
    fn default() -> Self {
        Self {
            icon: Icon::new(Shape::Square, IconColor::Red),
            face_up: false,
            peeking: false,
            pending: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major tiles.
    pub tiles: Vec<TileSnapshot>,
    pub phase: PhaseKind,
    /// Celebration background is lit this frame.
    pub flash_on: bool,
    pub cursor: Pos,
    pub hover: Option<Pos>,
    pub board_id: u32,
    pub attempts: u32,
    pub matches: u32,
    pub pairs: u32,
    pub boards_cleared: u32,
}

impl GameSnapshot {
    pub fn tile(&self, pos: Pos) -> Option<&TileSnapshot> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.tiles.get(pos.index(self.cols))
    }

    /// Highlighted tile: the pointer wins over the keyboard cursor.
    pub fn highlight(&self) -> Pos {
        self.hover.unwrap_or(self.cursor)
    }
}
