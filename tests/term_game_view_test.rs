use tui_memory::core::{GameConfig, GameSnapshot, GameState, PhaseKind, TileSnapshot};
use tui_memory::term::{FrameBuffer, GameView, Rgb, Viewport};
use tui_memory::types::{Icon, IconColor, Pos, Shape};

/// 4x8 board in a 64x20 viewport: margins (0, 2), tile (r, c) at (8c, 2 + 4r).
fn snapshot() -> GameSnapshot {
    GameSnapshot {
        rows: 4,
        cols: 8,
        tiles: vec![TileSnapshot::default(); 32],
        phase: PhaseKind::Playing,
        pairs: 16,
        ..GameSnapshot::default()
    }
}

fn text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_hidden_tiles_are_gray_blocks() {
    let snap = snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(64, 20));

    let gray = Rgb::new(169, 169, 169);
    for (x, y) in [(0, 2), (5, 4), (8, 6), (61, 14)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.style.bg, gray, "({}, {})", x, y);
    }
    // Gaps and margins show the background.
    assert_eq!(fb.get(6, 3).unwrap().style.bg, Rgb::new(0, 0, 0));
    assert_eq!(fb.get(0, 0).unwrap().style.bg, Rgb::new(0, 0, 0));
}

#[test]
fn term_view_face_up_square_uses_half_blocks() {
    let mut snap = snapshot();
    snap.tiles[0] = TileSnapshot {
        icon: Icon::new(Shape::Square, IconColor::Turquoise),
        face_up: true,
        ..TileSnapshot::default()
    };
    snap.cursor = Pos::new(3, 7);

    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    let color = Rgb::from(IconColor::Turquoise.rgb());

    assert_eq!(fb.get(1, 2).unwrap().ch, '▄');
    assert_eq!(fb.get(1, 3).unwrap().ch, '█');
    assert_eq!(fb.get(1, 4).unwrap().ch, '▀');
    assert_eq!(fb.get(4, 3).unwrap().ch, '█');
    assert_eq!(fb.get(1, 3).unwrap().style.fg, color);

    // Inset by one subpixel: the tile edge stays empty on a black face.
    let edge = fb.get(0, 3).unwrap();
    assert_eq!(edge.ch, ' ');
    assert_eq!(edge.style.bg, Rgb::new(0, 0, 0));
    assert_eq!(fb.get(5, 3).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_every_shape_inside_its_tile() {
    let mut snap = snapshot();
    for (i, shape) in Shape::ALL.into_iter().enumerate() {
        snap.tiles[i] = TileSnapshot {
            icon: Icon::new(shape, IconColor::Red),
            face_up: true,
            ..TileSnapshot::default()
        };
    }
    snap.cursor = Pos::new(3, 7);
    let fb = GameView::default().render(&snap, Viewport::new(64, 20));

    for i in 0..Shape::ALL.len() as u16 {
        let x0 = i * 8;
        let filled = (x0..x0 + 6)
            .flat_map(|x| (2..5).map(move |y| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().ch != ' ')
            .count();
        assert!(filled > 0, "shape {} drew nothing", i);
        // Nothing leaks into the gap.
        for y in 2..5 {
            assert_eq!(fb.get(x0 + 6, y).unwrap().ch, ' ');
        }
    }
}

#[test]
fn term_view_peeking_tile_is_drawn_face_up() {
    let mut snap = snapshot();
    snap.phase = PhaseKind::Preview;
    snap.tiles[9].peeking = true;

    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    // Tile (1, 1) origin is (8, 6).
    assert_eq!(fb.get(8, 6).unwrap().style.bg, Rgb::new(0, 0, 0));
    assert_eq!(fb.get(9, 7).unwrap().ch, '█');
}

#[test]
fn term_view_highlights_hovered_tile() {
    let mut snap = snapshot();
    snap.hover = Some(Pos::new(1, 1));

    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    assert_eq!(fb.get(7, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(14, 5).unwrap().ch, '┐');
    assert_eq!(fb.get(7, 9).unwrap().ch, '└');
    assert_eq!(fb.get(14, 9).unwrap().ch, '┘');
    assert_eq!(fb.get(7, 5).unwrap().style.fg, Rgb::new(255, 0, 0));
}

#[test]
fn term_view_skips_highlight_on_face_up_tile() {
    let mut snap = snapshot();
    snap.tiles[9].face_up = true;
    snap.hover = Some(Pos::new(1, 1));

    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    assert_eq!(fb.get(7, 5).unwrap().ch, ' ');
    assert_eq!(fb.get(14, 9).unwrap().ch, ' ');

    // Moving onto a hidden tile brings it back.
    snap.hover = Some(Pos::new(1, 2));
    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    assert_eq!(fb.get(15, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_hides_highlight_during_preview() {
    let mut snap = snapshot();
    snap.phase = PhaseKind::Preview;
    snap.cursor = Pos::new(1, 1);

    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    assert_eq!(fb.get(7, 5).unwrap().ch, ' ');
}

#[test]
fn term_view_status_line_below_board() {
    let mut snap = snapshot();
    snap.matches = 3;
    snap.attempts = 7;
    snap.boards_cleared = 2;

    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    let all = text(&fb);
    let status = all.lines().nth(18).unwrap();
    assert!(status.starts_with("PAIRS 3/16  TRIES 7  CLEARED 2"), "{:?}", status);
}

#[test]
fn term_view_flash_lights_background() {
    let mut snap = snapshot();
    snap.phase = PhaseKind::Celebrate;
    snap.flash_on = true;

    let fb = GameView::default().render(&snap, Viewport::new(64, 20));
    assert_eq!(fb.get(0, 0).unwrap().style.bg, Rgb::new(250, 235, 215));
    assert!(text(&fb).contains("BOARD CLEARED!"));
}

#[test]
fn term_view_renders_live_game_in_tiny_viewport() {
    let state = GameState::new(&GameConfig::default(), 1).unwrap();
    let snap = state.snapshot();

    // Smaller than the board: must not panic.
    let fb = GameView::default().render(&snap, Viewport::new(10, 3));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 3);

    let fb = GameView::default().render(&snap, Viewport::new(0, 0));
    assert_eq!(fb.width(), 0);
}
