//! Per-tile face-up flags.

use crate::types::Pos;

/// Parallel grid of reveal flags; `true` means the icon is face-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    rows: u8,
    cols: u8,
    flags: Vec<bool>,
}

impl RevealState {
    /// All tiles face-down.
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            flags: vec![false; rows as usize * cols as usize],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.index(self.cols))
    }

    /// Out-of-range positions read as face-down.
    pub fn is_revealed(&self, pos: Pos) -> bool {
        self.index(pos).map(|i| self.flags[i]).unwrap_or(false)
    }

    /// Set a flag. Returns false if out of bounds.
    pub fn set(&mut self, pos: Pos, revealed: bool) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.flags[i] = revealed;
                true
            }
            None => false,
        }
    }

    pub fn reveal(&mut self, pos: Pos) -> bool {
        self.set(pos, true)
    }

    pub fn hide(&mut self, pos: Pos) -> bool {
        self.set(pos, false)
    }

    /// Win predicate: every tile is face-up.
    pub fn all_revealed(&self) -> bool {
        self.flags.iter().all(|&f| f)
    }

    pub fn revealed_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Turn every tile face-down.
    pub fn reset(&mut self) {
        self.flags.fill(false);
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let reveal = RevealState::new(4, 8);
        assert_eq!(reveal.revealed_count(), 0);
        assert!(!reveal.all_revealed());
    }

    #[test]
    fn win_predicate_needs_every_flag() {
        let mut reveal = RevealState::new(2, 2);
        for i in 0..4 {
            assert!(!reveal.all_revealed());
            reveal.reveal(Pos::from_index(i, 2));
        }
        assert!(reveal.all_revealed());

        reveal.hide(Pos::new(1, 1));
        assert!(!reveal.all_revealed());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut reveal = RevealState::new(2, 2);
        assert!(!reveal.reveal(Pos::new(2, 0)));
        assert!(!reveal.is_revealed(Pos::new(2, 0)));
    }

    #[test]
    fn reset_hides_everything() {
        let mut reveal = RevealState::new(2, 2);
        reveal.reveal(Pos::new(0, 0));
        reveal.reveal(Pos::new(1, 0));
        reveal.reset();
        assert_eq!(reveal.revealed_count(), 0);
    }
}
