//! Game configuration and startup precondition checks.

use std::fmt;

use crate::types::{
    IconColor, Shape, BOARD_COLS, BOARD_ROWS, DEFAULT_COLORS, MISMATCH_PAUSE_MS,
};

/// Fatal configuration problems detected before a board is dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One of the board dimensions is zero.
    EmptyBoard,
    /// `rows * cols` is odd, so tiles cannot all be paired.
    OddCellCount { rows: u8, cols: u8 },
    /// The shape×color product cannot cover every pair.
    IconPoolTooSmall { needed: usize, available: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "board must have at least one row and column"),
            ConfigError::OddCellCount { rows, cols } => write!(
                f,
                "board size must be even: {}x{} has {} cells",
                rows,
                cols,
                *rows as usize * *cols as usize
            ),
            ConfigError::IconPoolTooSmall { needed, available } => write!(
                f,
                "not enough icons: board needs {} distinct icons, pool has {}",
                needed, available
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// RNG seed; `None` lets the caller pick one (e.g. from the clock).
    pub seed: Option<u32>,
    pub mismatch_pause_ms: u32,
    pub shapes: Vec<Shape>,
    pub colors: Vec<IconColor>,
    pub preview: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            seed: None,
            mismatch_pause_ms: MISMATCH_PAUSE_MS,
            shapes: Shape::ALL.to_vec(),
            colors: DEFAULT_COLORS.to_vec(),
            preview: true,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// Unparseable values fall back to the defaults; [`GameConfig::validate`]
    /// still has the final say.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any `MEMORY_*` key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let rows = parse("MEMORY_ROWS")
            .and_then(|n| u8::try_from(n).ok())
            .unwrap_or(defaults.rows);
        let cols = parse("MEMORY_COLS")
            .and_then(|n| u8::try_from(n).ok())
            .unwrap_or(defaults.cols);
        let seed = parse("MEMORY_SEED").and_then(|n| u32::try_from(n).ok());
        let mismatch_pause_ms = parse("MEMORY_MISMATCH_MS")
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(defaults.mismatch_pause_ms);
        let color_count = parse("MEMORY_COLORS")
            .map(|n| n.clamp(1, IconColor::ALL.len() as u64) as usize)
            .unwrap_or(DEFAULT_COLORS.len());
        let preview = !lookup("MEMORY_NO_PREVIEW")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        Self {
            rows,
            cols,
            seed,
            mismatch_pause_ms,
            shapes: defaults.shapes,
            colors: IconColor::ALL[..color_count].to_vec(),
            preview,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }

    /// Check the board can be dealt at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.rows, self.cols)?;
        check_pool(self.pair_count(), self.shapes.len() * self.colors.len())
    }
}

pub(crate) fn check_dimensions(rows: u8, cols: u8) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyBoard);
    }
    if (rows as usize * cols as usize) % 2 != 0 {
        return Err(ConfigError::OddCellCount { rows, cols });
    }
    Ok(())
}

pub(crate) fn check_pool(needed: usize, available: usize) -> Result<(), ConfigError> {
    if available < needed {
        return Err(ConfigError::IconPoolTooSmall { needed, available });
    }
    Ok(())
}
