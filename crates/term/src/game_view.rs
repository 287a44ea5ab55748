//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PhaseKind, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::Layout;
use crate::types::{Icon, Pos, Shape, GAP_X, GAP_Y, TILE_H, TILE_W};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const FLASH: Rgb = Rgb::new(250, 235, 215);
const HIDDEN: Rgb = Rgb::new(169, 169, 169);
const HIGHLIGHT: Rgb = Rgb::new(255, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    tile_w: u16,
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(TILE_W, TILE_H, GAP_X, GAP_Y)
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap_x: u16, gap_y: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap_x,
            gap_y,
        }
    }

    /// Layout used for a snapshot in a viewport.
    ///
    /// Input handling must use the same layout to map pointer positions.
    pub fn layout(&self, rows: u8, cols: u8, viewport: Viewport) -> Layout {
        Layout::with_tiles(
            viewport,
            rows,
            cols,
            self.tile_w,
            self.tile_h,
            self.gap_x,
            self.gap_y,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let bg = if snap.flash_on { FLASH } else { BACKGROUND };
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), bg).into_cell(' '));

        let layout = self.layout(snap.rows, snap.cols, viewport);
        for (i, tile) in snap.tiles.iter().enumerate() {
            let pos = Pos::from_index(i, snap.cols);
            self.draw_tile(fb, &layout, pos, tile);
        }

        // Only face-down tiles get the selection box.
        let highlight = snap.highlight();
        let hidden = snap.tile(highlight).is_some_and(|t| !t.face_up);
        if hidden && matches!(snap.phase, PhaseKind::Playing | PhaseKind::Mismatch) {
            self.draw_highlight(fb, &layout, highlight, bg);
        }

        self.draw_status(fb, snap, &layout, viewport, bg);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Redraw a single tile.
    pub fn draw_tile(&self, fb: &mut FrameBuffer, layout: &Layout, pos: Pos, tile: &TileSnapshot) {
        let (x, y) = layout.tile_origin(pos);
        if !tile.visible() {
            fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(HIDDEN, HIDDEN));
            return;
        }
        fb.fill_rect(
            x,
            y,
            self.tile_w,
            self.tile_h,
            ' ',
            CellStyle::new(BACKGROUND, BACKGROUND),
        );
        self.draw_icon(fb, x, y, tile.icon);
    }

    /// Icon shapes in subpixel space, inset from the tile edge.
    fn draw_icon(&self, fb: &mut FrameBuffer, x: u16, y: u16, icon: Icon) {
        let color = Rgb::from(icon.color.rgb());
        let left = x as f32;
        let top = 2.0 * y as f32;
        let right = left + self.tile_w as f32;
        let bottom = top + 2.0 * self.tile_h as f32;
        let cx = (left + right) / 2.0;
        let cy = (top + bottom) / 2.0;
        let m = 0.5;

        match icon.shape {
            Shape::Square => fb.fill_rect_sub(left + 1.0, top + 1.0, right - 1.0, bottom - 1.0, color),
            Shape::Circle => {
                let radius = (right - left).min(bottom - top) / 2.0 - m;
                fb.fill_circle((cx, cy), radius, color);
            }
            Shape::Triangle => fb.fill_triangle(
                [(cx, top + m), (left + m, bottom - m), (right - m, bottom - m)],
                color,
            ),
            Shape::Diamond => fb.fill_quad(
                [(cx, top + m), (right - m, cy), (cx, bottom - m), (left + m, cy)],
                color,
            ),
        }
    }

    /// Red frame around a tile, drawn in the surrounding gap.
    fn draw_highlight(&self, fb: &mut FrameBuffer, layout: &Layout, pos: Pos, bg: Rgb) {
        let (x, y) = layout.tile_origin(pos);
        let style = CellStyle {
            fg: HIGHLIGHT,
            bg,
            bold: true,
            dim: false,
        };
        draw_box(
            fb,
            x as i32 - 1,
            y as i32 - 1,
            self.tile_w as i32 + 2,
            self.tile_h as i32 + 2,
            style,
        );
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        viewport: Viewport,
        bg: Rgb,
    ) {
        if viewport.height == 0 {
            return;
        }
        let y = (layout.margin_y + layout.board_height()).min(viewport.height - 1);
        let x = layout.margin_x;

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg,
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg,
            bold: false,
            dim: false,
        };

        let mut cx = x;
        fb.put_str(cx, y, "PAIRS ", label);
        cx += 6;
        cx += fb.put_u32(cx, y, snap.matches, value);
        fb.put_char(cx, y, '/', value);
        cx += 1;
        cx += fb.put_u32(cx, y, snap.pairs, value);

        cx += 2;
        fb.put_str(cx, y, "TRIES ", label);
        cx += 6;
        cx += fb.put_u32(cx, y, snap.attempts, value);

        cx += 2;
        fb.put_str(cx, y, "CLEARED ", label);
        cx += 8;
        fb.put_u32(cx, y, snap.boards_cleared, value);

        let hint = match snap.phase {
            PhaseKind::Preview => "memorize...  [tab] skip",
            PhaseKind::Playing => "click or [enter] to flip  [q] quit",
            PhaseKind::Mismatch => "no match",
            PhaseKind::Celebrate => "BOARD CLEARED!",
        };
        if y + 1 < viewport.height {
            fb.put_str(x, y + 1, hint, CellStyle { dim: true, ..value });
        }
    }
}

fn draw_box(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let mut put = |px: i32, py: i32, ch: char| {
        if px >= 0 && py >= 0 && px <= u16::MAX as i32 && py <= u16::MAX as i32 {
            fb.put_char(px as u16, py as u16, ch, style);
        }
    };

    put(x, y, '┌');
    put(x + w - 1, y, '┐');
    put(x, y + h - 1, '└');
    put(x + w - 1, y + h - 1, '┘');
    for dx in 1..w - 1 {
        put(x + dx, y, '─');
        put(x + dx, y + h - 1, '─');
    }
    for dy in 1..h - 1 {
        put(x, y + dy, '│');
        put(x + w - 1, y + dy, '│');
    }
}
