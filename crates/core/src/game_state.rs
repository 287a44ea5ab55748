//! Game state module - manages the complete game state
//!
//! This module ties together the board, reveal flags, turn resolver and RNG.
//! Every pause in the game (start preview, mismatch display, win flashes) is a
//! timed phase advanced by [`GameState::tick`], so the caller's loop never
//! blocks and can keep handling quit or resize while a pause runs.

use arrayvec::ArrayVec;

use crate::board::{pair_pool, Board};
use crate::config::{ConfigError, GameConfig};
use crate::reveal::RevealState;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, PhaseKind, TileSnapshot};
use crate::turn::{Resolution, TurnResolver};
use crate::types::*;

/// Maximum number of undrained events kept; older ones are dropped first.
const EVENT_CAPACITY: usize = 8;

/// Timed game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start-of-board peek at the tiles in small groups.
    Preview { elapsed_ms: u32 },
    /// Waiting for selections.
    Playing,
    /// A mismatched pair is on display.
    MismatchPause { pair: [Pos; 2], remaining_ms: u32 },
    /// Board cleared; background flashing before the next deal.
    Celebrate { elapsed_ms: u32 },
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Preview { .. } => PhaseKind::Preview,
            Phase::Playing => PhaseKind::Playing,
            Phase::MismatchPause { .. } => PhaseKind::Mismatch,
            Phase::Celebrate { .. } => PhaseKind::Celebrate,
        }
    }
}

/// Something worth recording happened.
///
/// Drained by observers through [`GameState::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new board was dealt.
    Started { board_id: u32 },
    /// A tile was turned face-up by a selection.
    Revealed(Pos, Icon),
    Matched([Pos; 2]),
    Mismatched([Pos; 2]),
    /// A mismatched pair flipped back face-down.
    Concealed([Pos; 2]),
    /// Every tile is face-up.
    Cleared { board_id: u32, attempts: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    reveal: RevealState,
    turn: TurnResolver,
    phase: Phase,
    rng: SimpleRng,
    /// Icons dealt (twice each) on every board.
    pool: Vec<Icon>,
    /// Shuffled tile order for the start preview.
    preview_order: Vec<Pos>,
    preview_enabled: bool,
    mismatch_pause_ms: u32,
    cursor: Pos,
    hover: Option<Pos>,
    /// Monotonic id of the current board (increments on every deal).
    board_id: u32,
    /// Completed turns (second picks) on the current board.
    attempts: u32,
    /// Pairs found on the current board.
    matches: u32,
    /// Boards finished by matching every pair.
    boards_cleared: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a new game and deal the first board.
    pub fn new(config: &GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let pool = pair_pool(&config.shapes, &config.colors, config.pair_count());
        let mut rng = SimpleRng::new(seed);
        let board = Board::shuffled(config.rows, config.cols, &pool, &mut rng);

        let mut state = Self {
            reveal: RevealState::new(config.rows, config.cols),
            board,
            turn: TurnResolver::new(),
            phase: Phase::Playing,
            rng,
            pool,
            preview_order: Vec::new(),
            preview_enabled: config.preview,
            mismatch_pause_ms: config.mismatch_pause_ms,
            cursor: Pos::default(),
            hover: None,
            board_id: 0,
            attempts: 0,
            matches: 0,
            boards_cleared: 0,
            events: ArrayVec::new(),
        };
        state.begin_board();
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<Pos> {
        self.turn.pending()
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn hover(&self) -> Option<Pos> {
        self.hover
    }

    pub fn board_id(&self) -> u32 {
        self.board_id
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn pairs(&self) -> u32 {
        self.pool.len() as u32
    }

    pub fn boards_cleared(&self) -> u32 {
        self.boards_cleared
    }

    /// Win predicate for the current board.
    pub fn is_won(&self) -> bool {
        self.reveal.all_revealed()
    }

    /// Drain events recorded since the last call.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn push_revealed(&mut self, pos: Pos) {
        if let Some(icon) = self.board.get(pos) {
            self.push_event(GameEvent::Revealed(pos, icon));
        }
    }

    /// Replace the board with a fresh shuffle and reset every flag.
    fn deal(&mut self) {
        self.board = Board::shuffled(self.board.rows(), self.board.cols(), &self.pool, &mut self.rng);
        self.reveal.reset();
        self.begin_board();
    }

    fn begin_board(&mut self) {
        self.turn.reset();
        self.attempts = 0;
        self.matches = 0;
        self.board_id = self.board_id.wrapping_add(1);

        if self.preview_enabled {
            let cols = self.board.cols();
            self.preview_order.clear();
            self.preview_order
                .extend((0..self.board.len()).map(|i| Pos::from_index(i, cols)));
            self.rng.shuffle(&mut self.preview_order);
            self.phase = Phase::Preview { elapsed_ms: 0 };
        } else {
            self.preview_order.clear();
            self.phase = Phase::Playing;
        }

        self.push_event(GameEvent::Started {
            board_id: self.board_id,
        });
    }

    /// Total length of the start preview.
    pub fn preview_duration_ms(&self) -> u32 {
        let groups = self.preview_order.len().div_ceil(PREVIEW_GROUP) as u32;
        PREVIEW_LEAD_MS + groups * PREVIEW_STEP_MS
    }

    /// Tiles currently shown by the start preview.
    pub fn preview_group(&self) -> &[Pos] {
        let Phase::Preview { elapsed_ms } = self.phase else {
            return &[];
        };
        if elapsed_ms < PREVIEW_LEAD_MS {
            return &[];
        }
        let start = ((elapsed_ms - PREVIEW_LEAD_MS) / PREVIEW_STEP_MS) as usize * PREVIEW_GROUP;
        if start >= self.preview_order.len() {
            return &[];
        }
        let end = (start + PREVIEW_GROUP).min(self.preview_order.len());
        &self.preview_order[start..end]
    }

    /// Whether the celebration background is lit right now.
    pub fn flash_on(&self) -> bool {
        match self.phase {
            Phase::Celebrate { elapsed_ms } => (elapsed_ms / WIN_FLASH_MS) % 2 == 1,
            _ => false,
        }
    }

    /// Main game tick - advance timed phases.
    ///
    /// Returns true if the visible state changed phase.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.phase {
            Phase::Playing => false,
            Phase::Preview { elapsed_ms: done } => {
                let done = done.saturating_add(elapsed_ms);
                if done >= self.preview_duration_ms() {
                    self.phase = Phase::Playing;
                    true
                } else {
                    self.phase = Phase::Preview { elapsed_ms: done };
                    false
                }
            }
            Phase::MismatchPause { pair, remaining_ms } => {
                if elapsed_ms >= remaining_ms {
                    TurnResolver::conceal(&mut self.reveal, pair);
                    self.push_event(GameEvent::Concealed(pair));
                    self.phase = Phase::Playing;
                    true
                } else {
                    self.phase = Phase::MismatchPause {
                        pair,
                        remaining_ms: remaining_ms - elapsed_ms,
                    };
                    false
                }
            }
            Phase::Celebrate { elapsed_ms: done } => {
                let done = done.saturating_add(elapsed_ms);
                if done >= WIN_FLASHES * WIN_FLASH_MS {
                    self.deal();
                    true
                } else {
                    self.phase = Phase::Celebrate { elapsed_ms: done };
                    false
                }
            }
        }
    }

    /// Reveal the tile at `pos`, resolving the turn if it is the second pick.
    ///
    /// Only acts while [`Phase::Playing`]; otherwise returns
    /// [`Resolution::Ignored`].
    pub fn select(&mut self, pos: Pos) -> Resolution {
        if self.phase != Phase::Playing {
            return Resolution::Ignored;
        }

        let resolution = self.turn.select(&self.board, &mut self.reveal, pos);
        match resolution {
            Resolution::Ignored => {}
            Resolution::FirstReveal(p) => {
                self.cursor = p;
                self.push_revealed(p);
            }
            Resolution::Matched(pair) => {
                self.cursor = pair[1];
                self.attempts += 1;
                self.matches += 1;
                self.push_revealed(pair[1]);
                self.push_event(GameEvent::Matched(pair));
            }
            Resolution::Mismatched(pair) => {
                self.cursor = pair[1];
                self.attempts += 1;
                self.push_revealed(pair[1]);
                self.push_event(GameEvent::Mismatched(pair));
                if self.mismatch_pause_ms == 0 {
                    TurnResolver::conceal(&mut self.reveal, pair);
                    self.push_event(GameEvent::Concealed(pair));
                } else {
                    self.phase = Phase::MismatchPause {
                        pair,
                        remaining_ms: self.mismatch_pause_ms,
                    };
                }
            }
        }

        if resolution != Resolution::Ignored && self.is_won() {
            self.boards_cleared += 1;
            self.push_event(GameEvent::Cleared {
                board_id: self.board_id,
                attempts: self.attempts,
            });
            self.phase = Phase::Celebrate { elapsed_ms: 0 };
        }

        resolution
    }

    fn move_cursor(&mut self, direction: Direction) -> bool {
        let Pos { row, col } = self.cursor;
        let next = match direction {
            Direction::Up => Pos::new(row.saturating_sub(1), col),
            Direction::Down => Pos::new((row + 1).min(self.board.rows() - 1), col),
            Direction::Left => Pos::new(row, col.saturating_sub(1)),
            Direction::Right => Pos::new(row, (col + 1).min(self.board.cols() - 1)),
        };
        self.hover = None;
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(pos) => self.select(pos) != Resolution::Ignored,
            GameAction::SelectCursor => self.select(self.cursor) != Resolution::Ignored,
            GameAction::Hover(pos) => {
                let pos = pos.filter(|p| self.board.contains(*p));
                if let Some(p) = pos {
                    self.cursor = p;
                }
                let changed = pos != self.hover;
                self.hover = pos;
                changed
            }
            GameAction::MoveCursor(direction) => self.move_cursor(direction),
            GameAction::SkipPreview => {
                if matches!(self.phase, Phase::Preview { .. }) {
                    self.phase = Phase::Playing;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.tiles.clear();

        let pending = self.turn.pending();
        out.tiles.extend(self.board.iter().map(|(pos, icon)| TileSnapshot {
            icon,
            face_up: self.reveal.is_revealed(pos),
            peeking: false,
            pending: pending == Some(pos),
        }));
        let cols = out.cols;
        for pos in self.preview_group() {
            if let Some(tile) = out.tiles.get_mut(pos.index(cols)) {
                tile.peeking = true;
            }
        }

        out.phase = self.phase.kind();
        out.flash_on = self.flash_on();
        out.cursor = self.cursor;
        out.hover = self.hover;
        out.board_id = self.board_id;
        out.attempts = self.attempts;
        out.matches = self.matches;
        out.pairs = self.pairs();
        out.boards_cleared = self.boards_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
