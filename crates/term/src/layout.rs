//! Screen layout: maps terminal positions to board tiles and back.
//!
//! The board is a grid of `tile_w × tile_h` tiles separated by `gap_x`/`gap_y`
//! blank cells. Each tile owns a stride of `tile + gap` cells, the tile first
//! and its gap after it. The board is centered in the viewport by margins
//! computed from the full stride:
//!
//! ```text
//! margin_x = (viewport.width  - cols * (tile_w + gap_x)) / 2
//! margin_y = (viewport.height - rows * (tile_h + gap_y)) / 2
//! ```
//!
//! Margins saturate at zero when the board does not fit.

use crate::game_view::Viewport;
use crate::types::{Pos, GAP_X, GAP_Y, TILE_H, TILE_W};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: u8,
    pub cols: u8,
    pub tile_w: u16,
    pub tile_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub margin_x: u16,
    pub margin_y: u16,
}

impl Layout {
    /// Layout with the default tile geometry.
    pub fn new(viewport: Viewport, rows: u8, cols: u8) -> Self {
        Self::with_tiles(viewport, rows, cols, TILE_W, TILE_H, GAP_X, GAP_Y)
    }

    pub fn with_tiles(
        viewport: Viewport,
        rows: u8,
        cols: u8,
        tile_w: u16,
        tile_h: u16,
        gap_x: u16,
        gap_y: u16,
    ) -> Self {
        let board_w = (cols as u16).saturating_mul(tile_w + gap_x);
        let board_h = (rows as u16).saturating_mul(tile_h + gap_y);
        Self {
            rows,
            cols,
            tile_w,
            tile_h,
            gap_x,
            gap_y,
            margin_x: viewport.width.saturating_sub(board_w) / 2,
            margin_y: viewport.height.saturating_sub(board_h) / 2,
        }
    }

    pub fn stride_x(&self) -> u16 {
        self.tile_w + self.gap_x
    }

    pub fn stride_y(&self) -> u16 {
        self.tile_h + self.gap_y
    }

    /// Width of the board including the trailing gap.
    pub fn board_width(&self) -> u16 {
        (self.cols as u16).saturating_mul(self.stride_x())
    }

    /// Height of the board including the trailing gap.
    pub fn board_height(&self) -> u16 {
        (self.rows as u16).saturating_mul(self.stride_y())
    }

    /// Tile under the terminal cell `(x, y)`.
    ///
    /// `None` for positions in the margins, past the last row or column, or
    /// in the gap between tiles.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Pos> {
        if x < self.margin_x || y < self.margin_y {
            return None;
        }
        let dx = x - self.margin_x;
        let dy = y - self.margin_y;

        let col = dx / self.stride_x();
        let row = dy / self.stride_y();
        if col >= self.cols as u16 || row >= self.rows as u16 {
            return None;
        }
        if dx % self.stride_x() >= self.tile_w || dy % self.stride_y() >= self.tile_h {
            return None;
        }
        Some(Pos::new(row as u8, col as u8))
    }

    /// Top-left terminal cell of a tile.
    pub fn tile_origin(&self, pos: Pos) -> (u16, u16) {
        (
            self.margin_x + pos.col as u16 * self.stride_x(),
            self.margin_y + pos.row as u16 * self.stride_y(),
        )
    }

    /// Center terminal cell of a tile.
    pub fn tile_center(&self, pos: Pos) -> (u16, u16) {
        let (x, y) = self.tile_origin(pos);
        (x + self.tile_w / 2, y + self.tile_h / 2)
    }
}
