//! Turn resolution: pick two tiles, compare, keep or flip back.
//!
//! The resolver only flips flags up. Hiding a mismatched pair is left to the
//! caller via [`TurnResolver::conceal`], so the pair can stay visible for a
//! while first.

use crate::board::Board;
use crate::reveal::RevealState;
use crate::types::Pos;

/// Pending selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    OneRevealed(Pos),
}

/// Outcome of a single selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Out of range or already face-up; nothing changed.
    Ignored,
    /// First tile of the turn is now face-up.
    FirstReveal(Pos),
    /// Icons matched; both stay face-up for good.
    Matched([Pos; 2]),
    /// Icons differ; both are face-up until concealed.
    Mismatched([Pos; 2]),
}

#[derive(Debug, Clone, Default)]
pub struct TurnResolver {
    state: TurnState,
}

impl TurnResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Pending first pick, if any.
    pub fn pending(&self) -> Option<Pos> {
        match self.state {
            TurnState::Idle => None,
            TurnState::OneRevealed(pos) => Some(pos),
        }
    }

    /// Apply a selection at `pos`.
    pub fn select(&mut self, board: &Board, reveal: &mut RevealState, pos: Pos) -> Resolution {
        if !board.contains(pos) || reveal.is_revealed(pos) {
            return Resolution::Ignored;
        }
        reveal.reveal(pos);

        match self.state {
            TurnState::Idle => {
                self.state = TurnState::OneRevealed(pos);
                Resolution::FirstReveal(pos)
            }
            TurnState::OneRevealed(first) => {
                self.state = TurnState::Idle;
                if board.get(first) == board.get(pos) {
                    Resolution::Matched([first, pos])
                } else {
                    Resolution::Mismatched([first, pos])
                }
            }
        }
    }

    /// Flip a mismatched pair back face-down.
    pub fn conceal(reveal: &mut RevealState, pair: [Pos; 2]) {
        for pos in pair {
            reveal.hide(pos);
        }
    }

    /// Drop any pending selection (new board).
    pub fn reset(&mut self) {
        self.state = TurnState::Idle;
    }
}
