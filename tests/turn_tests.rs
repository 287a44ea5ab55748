//! Turn resolution through the full game state

use tui_memory::core::{GameConfig, GameEvent, GameState, Phase, Resolution};
use tui_memory::types::{GameAction, Pos, MISMATCH_PAUSE_MS};

fn new_game(seed: u32) -> GameState {
    let config = GameConfig {
        preview: false,
        ..GameConfig::default()
    };
    GameState::new(&config, seed).unwrap()
}

/// Two hidden tiles with different icons.
fn mismatch(game: &GameState) -> (Pos, Pos) {
    let board = game.board();
    let a = Pos::new(0, 0);
    let icon = board.get(a).unwrap();
    let b = board
        .iter()
        .find(|&(_, other)| other != icon)
        .map(|(p, _)| p)
        .unwrap();
    (a, b)
}

#[test]
fn test_matching_pair_stays_revealed() {
    let mut game = new_game(11);
    let a = Pos::new(2, 5);
    let b = game.board().partner_of(a).unwrap();

    assert_eq!(game.select(a), Resolution::FirstReveal(a));
    assert_eq!(game.pending(), Some(a));

    assert_eq!(game.select(b), Resolution::Matched([a, b]));
    assert_eq!(game.pending(), None);
    assert!(game.reveal().is_revealed(a));
    assert!(game.reveal().is_revealed(b));

    // Matched tiles never flip back.
    game.tick(10 * MISMATCH_PAUSE_MS);
    assert!(game.reveal().is_revealed(a));
    assert!(game.reveal().is_revealed(b));
    assert_eq!(game.matches(), 1);
    assert_eq!(game.attempts(), 1);
}

#[test]
fn test_mismatched_pair_is_hidden_again() {
    let mut game = new_game(11);
    let (a, b) = mismatch(&game);

    game.select(a);
    assert_eq!(game.select(b), Resolution::Mismatched([a, b]));
    assert_eq!(game.pending(), None);
    assert!(matches!(game.phase(), Phase::MismatchPause { .. }));

    game.tick(MISMATCH_PAUSE_MS);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(!game.reveal().is_revealed(a));
    assert!(!game.reveal().is_revealed(b));
    assert_eq!(game.reveal().revealed_count(), 0);
    assert_eq!(game.matches(), 0);
    assert_eq!(game.attempts(), 1);
}

#[test]
fn test_reselecting_revealed_tile_is_noop() {
    let mut game = new_game(3);
    let a = Pos::new(0, 0);
    game.select(a);
    assert_eq!(game.select(a), Resolution::Ignored);
    assert_eq!(game.pending(), Some(a));
    assert_eq!(game.reveal().revealed_count(), 1);
}

#[test]
fn test_out_of_range_select_is_noop() {
    let mut game = new_game(3);
    assert_eq!(game.select(Pos::new(4, 0)), Resolution::Ignored);
    assert_eq!(game.select(Pos::new(0, 8)), Resolution::Ignored);
    assert_eq!(game.reveal().revealed_count(), 0);
}

#[test]
fn test_hover_never_reveals() {
    let mut game = new_game(3);
    game.apply_action(GameAction::Hover(Some(Pos::new(1, 1))));
    game.apply_action(GameAction::Hover(None));
    assert_eq!(game.reveal().revealed_count(), 0);
    assert_eq!(game.hover(), None);
}

#[test]
fn test_keyboard_cursor_selects() {
    use tui_memory::types::Direction;

    let mut game = new_game(3);
    game.apply_action(GameAction::MoveCursor(Direction::Right));
    game.apply_action(GameAction::MoveCursor(Direction::Down));
    assert!(game.apply_action(GameAction::SelectCursor));
    assert!(game.reveal().is_revealed(Pos::new(1, 1)));
}

#[test]
fn test_events_follow_the_turn() {
    let mut game = new_game(5);
    let _ = game.take_events();
    let (a, b) = mismatch(&game);

    game.select(a);
    game.select(b);
    game.tick(MISMATCH_PAUSE_MS);

    let events = game.take_events();
    assert_eq!(
        events.as_slice(),
        &[
            GameEvent::Revealed(a, game.board().get(a).unwrap()),
            GameEvent::Revealed(b, game.board().get(b).unwrap()),
            GameEvent::Mismatched([a, b]),
            GameEvent::Concealed([a, b]),
        ]
    );
}
