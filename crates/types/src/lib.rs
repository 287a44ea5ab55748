//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 8 (indexed 0-7, left to right)
//! - **Pairs**: 16
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_PAUSE_MS` | 1000 | How long a mismatched pair stays face-up |
//! | `PREVIEW_LEAD_MS` | 500 | Face-down pause before the start preview |
//! | `PREVIEW_STEP_MS` | 500 | How long each preview group stays face-up |
//! | `PREVIEW_GROUP` | 5 | Tiles shown per preview group |
//! | `WIN_FLASH_MS` | 300 | Duration of one celebration flash |
//! | `WIN_FLASHES` | 10 | Number of celebration flashes |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Icon, IconColor, Pos, Shape, BOARD_COLS, BOARD_ROWS};
//!
//! let icon = Icon::new(Shape::Diamond, IconColor::Red);
//! assert_eq!(icon.shape.as_str(), "diamond");
//!
//! let pos = Pos::new(1, 2);
//! assert_eq!(pos.index(BOARD_COLS), 10);
//!
//! assert_eq!(BOARD_ROWS, 4);
//! assert_eq!(BOARD_COLS, 8);
//! ```

/// Board height in tiles (4 rows)
pub const BOARD_ROWS: u8 = 4;

/// Board width in tiles (8 columns)
pub const BOARD_COLS: u8 = 8;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a mismatched pair stays visible before flipping back.
pub const MISMATCH_PAUSE_MS: u32 = 1000;

/// Face-down pause before the first preview group is shown.
pub const PREVIEW_LEAD_MS: u32 = 500;

/// How long each preview group stays face-up.
pub const PREVIEW_STEP_MS: u32 = 500;

/// Number of tiles peeked at once during the start preview.
pub const PREVIEW_GROUP: usize = 5;

/// Duration of one background flash after clearing a board.
pub const WIN_FLASH_MS: u32 = 300;

/// Number of background flashes after clearing a board.
pub const WIN_FLASHES: u32 = 10;

/// Tile width in terminal columns.
pub const TILE_W: u16 = 6;

/// Tile height in terminal rows.
pub const TILE_H: u16 = 3;

/// Horizontal gap between tiles in terminal columns.
pub const GAP_X: u16 = 2;

/// Vertical gap between tiles in terminal rows.
pub const GAP_Y: u16 = 1;


/// The four icon shapes
///
/// Declaration order is the order the board generator walks the
/// shape×color product in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Diamond,
    Square,
    Triangle,
    Circle,
}

impl Shape {
    /// Every shape, in generation order.
    pub const ALL: [Shape; 4] = [Shape::Diamond, Shape::Square, Shape::Triangle, Shape::Circle];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Circle => "circle",
        }
    }
}

/// Icon palette
///
/// The first four colors form the default pool; the rest allow larger boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconColor {
    Red,
    Yellow,
    Orange,
    Turquoise,
    Green,
    Blue,
    Purple,
    White,
}

/// Colors used when no override is configured.
pub const DEFAULT_COLORS: [IconColor; 4] = [
    IconColor::Red,
    IconColor::Yellow,
    IconColor::Orange,
    IconColor::Turquoise,
];

impl IconColor {
    /// Full palette, in generation order.
    pub const ALL: [IconColor; 8] = [
        IconColor::Red,
        IconColor::Yellow,
        IconColor::Orange,
        IconColor::Turquoise,
        IconColor::Green,
        IconColor::Blue,
        IconColor::Purple,
        IconColor::White,
    ];

    /// 24-bit RGB value used when drawing the icon.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            IconColor::Red => (255, 0, 0),
            IconColor::Yellow => (255, 255, 0),
            IconColor::Orange => (255, 165, 0),
            IconColor::Turquoise => (64, 224, 208),
            IconColor::Green => (60, 200, 80),
            IconColor::Blue => (70, 110, 255),
            IconColor::Purple => (170, 90, 220),
            IconColor::White => (240, 240, 240),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconColor::Red => "red",
            IconColor::Yellow => "yellow",
            IconColor::Orange => "orange",
            IconColor::Turquoise => "turquoise",
            IconColor::Green => "green",
            IconColor::Blue => "blue",
            IconColor::Purple => "purple",
            IconColor::White => "white",
        }
    }
}

/// A (shape, color) pair; the unit of matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub shape: Shape,
    pub color: IconColor,
}

impl Icon {
    pub const fn new(shape: Shape, color: IconColor) -> Self {
        Self { shape, color }
    }
}

/// A grid coordinate, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index for a board `cols` wide.
    #[inline(always)]
    pub fn index(&self, cols: u8) -> usize {
        (self.row as usize) * (cols as usize) + (self.col as usize)
    }

    /// Inverse of [`Pos::index`].
    pub fn from_index(index: usize, cols: u8) -> Self {
        let cols = cols.max(1) as usize;
        Self {
            row: (index / cols) as u8,
            col: (index % cols) as u8,
        }
    }
}

/// Cursor movement directions for keyboard play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Game actions that can be applied to modify game state
///
/// Mouse and keyboard input are both reduced to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the tile at a grid position (pointer click)
    Select(Pos),
    /// Reveal the tile under the keyboard cursor
    SelectCursor,
    /// Pointer moved; `None` when it is not over any tile
    Hover(Option<Pos>),
    /// Move the keyboard cursor one tile
    MoveCursor(Direction),
    /// Skip the start preview
    SkipPreview,
}

impl GameAction {
    /// Short name printed by the `input-test` diagnostic.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::SelectCursor => "selectCursor",
            GameAction::Hover(_) => "hover",
            GameAction::MoveCursor(_) => "moveCursor",
            GameAction::SkipPreview => "skipPreview",
        }
    }
}
