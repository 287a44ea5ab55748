//! Framebuffer and style types for terminal rendering.
//!
//! Besides plain character cells the framebuffer can rasterise filled shapes.
//! Shapes are given in *subpixel* coordinates: each terminal cell is split into
//! an upper and a lower half (`▀`/`▄`), so a cell at `(x, y)` covers subpixels
//! `x..x+1` horizontally and `2y..2y+2` vertically. With typical 1:2 glyphs
//! that makes subpixels roughly square.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a decimal number without allocating. Returns the width written.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0usize;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in 0..len {
            self.put_char(x.saturating_add(i as u16), y, digits[len - 1 - i] as char, style);
        }
        len as u16
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Fill the subpixels for which `inside(sx, sy)` holds, sampling subpixel
    /// centers within the cell rectangle `x..x+w`, `y..y+h`.
    ///
    /// Covered cells keep their background; the shape is drawn in `color`.
    pub fn fill_subpixels(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb,
        inside: impl Fn(f32, f32) -> bool,
    ) {
        for cy in y..y.saturating_add(h) {
            for cx in x..x.saturating_add(w) {
                let Some(cell) = self.get(cx, cy) else {
                    continue;
                };
                let sx = cx as f32 + 0.5;
                let top = inside(sx, 2.0 * cy as f32 + 0.5);
                let bottom = inside(sx, 2.0 * cy as f32 + 1.5);
                let ch = match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => continue,
                };
                let style = CellStyle {
                    fg: color,
                    ..cell.style
                };
                self.put_char(cx, cy, ch, style);
            }
        }
    }

    /// Filled axis-aligned rectangle in subpixel coordinates (inclusive edges).
    pub fn fill_rect_sub(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        let (cx, cy, w, h) = cell_bounds(x0, y0, x1, y1);
        self.fill_subpixels(cx, cy, w, h, color, |sx, sy| {
            sx >= x0 && sx <= x1 && sy >= y0 && sy <= y1
        });
    }

    /// Filled circle in subpixel coordinates.
    pub fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb) {
        let (ox, oy) = center;
        let (cx, cy, w, h) = cell_bounds(ox - radius, oy - radius, ox + radius, oy + radius);
        let r2 = radius * radius;
        self.fill_subpixels(cx, cy, w, h, color, |sx, sy| {
            let dx = sx - ox;
            let dy = sy - oy;
            dx * dx + dy * dy <= r2
        });
    }

    pub fn fill_triangle(&mut self, points: [(f32, f32); 3], color: Rgb) {
        self.fill_convex(&points, color);
    }

    pub fn fill_quad(&mut self, points: [(f32, f32); 4], color: Rgb) {
        self.fill_convex(&points, color);
    }

    /// Filled convex polygon in subpixel coordinates (either winding).
    pub fn fill_convex(&mut self, points: &[(f32, f32)], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let (mut x0, mut y0, mut x1, mut y1) = (f32::MAX, f32::MAX, f32::MIN, f32::MIN);
        for &(px, py) in points {
            x0 = x0.min(px);
            y0 = y0.min(py);
            x1 = x1.max(px);
            y1 = y1.max(py);
        }
        let (cx, cy, w, h) = cell_bounds(x0, y0, x1, y1);
        self.fill_subpixels(cx, cy, w, h, color, |sx, sy| inside_convex(points, sx, sy));
    }
}

/// Cell rectangle covering a subpixel bounding box.
fn cell_bounds(x0: f32, y0: f32, x1: f32, y1: f32) -> (u16, u16, u16, u16) {
    // Float-to-int casts saturate, so negative coordinates clamp to 0.
    let cx0 = x0.floor() as u16;
    let cy0 = (y0 / 2.0).floor() as u16;
    let cx1 = x1.ceil() as u16;
    let cy1 = (y1 / 2.0).ceil() as u16;
    (
        cx0,
        cy0,
        cx1.saturating_sub(cx0).saturating_add(1),
        cy1.saturating_sub(cy0).saturating_add(1),
    )
}

fn inside_convex(points: &[(f32, f32)], px: f32, py: f32) -> bool {
    let mut sign = 0i8;
    for (i, &(ax, ay)) in points.iter().enumerate() {
        let (bx, by) = points[(i + 1) % points.len()];
        let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
        let s = if cross > 0.0 {
            1
        } else if cross < 0.0 {
            -1
        } else {
            0
        };
        if s == 0 {
            continue;
        }
        if sign == 0 {
            sign = s;
        } else if s != sign {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_u32(0, 0, 0, style), 1);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');

        assert_eq!(fb.put_u32(2, 0, 4096, style), 4);
        let s: String = (2..6).map(|x| fb.get(x, 0).unwrap().ch).collect();
        assert_eq!(s, "4096");
    }

    #[test]
    fn subpixel_rect_uses_half_blocks() {
        let mut fb = FrameBuffer::new(4, 3);
        // Subpixel rows 1..=4 cover the lower half of row 0, all of row 1 and
        // the upper half of row 2.
        fb.fill_rect_sub(1.0, 1.0, 2.0, 5.0, RED);
        assert_eq!(fb.get(1, 0).unwrap().ch, '▄');
        assert_eq!(fb.get(1, 1).unwrap().ch, '█');
        assert_eq!(fb.get(1, 2).unwrap().ch, '▀');
        assert_eq!(fb.get(0, 1).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 1).unwrap().style.fg, RED);
    }

    #[test]
    fn shapes_keep_the_background() {
        let mut fb = FrameBuffer::new(4, 2);
        let bg = Rgb::new(10, 20, 30);
        fb.fill_rect(0, 0, 4, 2, ' ', CellStyle::new(Rgb::default(), bg));
        fb.fill_circle((2.0, 2.0), 1.0, RED);
        let cell = fb.get(1, 0).unwrap();
        assert_ne!(cell.ch, ' ');
        assert_eq!(cell.style.bg, bg);
    }

    #[test]
    fn convex_fill_accepts_either_winding() {
        let cw = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let ccw = [(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
        assert!(inside_convex(&cw, 2.0, 2.0));
        assert!(inside_convex(&ccw, 2.0, 2.0));
        assert!(!inside_convex(&cw, 5.0, 2.0));
    }

    #[test]
    fn shapes_clip_at_the_edges() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.fill_circle((0.0, 0.0), 5.0, RED);
        fb.fill_triangle([(-3.0, -3.0), (9.0, 0.0), (0.0, 9.0)], RED);
        assert_eq!(fb.get(0, 0).unwrap().ch, '█');
    }
}
