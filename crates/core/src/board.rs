//! Board module - the grid of paired icons
//!
//! Icons are stored in a flat vector in row-major order (`row * cols + col`).
//! A dealt board holds every icon exactly twice; the layout never changes
//! until the board is replaced.

use crate::config::{check_dimensions, check_pool, ConfigError};
use crate::rng::SimpleRng;
use crate::types::{Icon, IconColor, Pos, Shape};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    icons: Vec<Icon>,
}

impl Board {
    /// Deal a new shuffled board.
    ///
    /// Walks the shape×color product in order, keeps the first
    /// `rows * cols / 2` icons, duplicates them and shuffles the result.
    pub fn generate(
        rows: u8,
        cols: u8,
        shapes: &[Shape],
        colors: &[IconColor],
        rng: &mut SimpleRng,
    ) -> Result<Self, ConfigError> {
        check_dimensions(rows, cols)?;
        let pairs = rows as usize * cols as usize / 2;
        check_pool(pairs, shapes.len() * colors.len())?;

        let pool = pair_pool(shapes, colors, pairs);
        Ok(Self::shuffled(rows, cols, &pool, rng))
    }

    /// Deal from an already validated pool of `rows * cols / 2` icons.
    pub(crate) fn shuffled(rows: u8, cols: u8, pool: &[Icon], rng: &mut SimpleRng) -> Self {
        let mut icons = Vec::with_capacity(pool.len() * 2);
        icons.extend_from_slice(pool);
        icons.extend_from_slice(pool);
        rng.shuffle(&mut icons);
        Self { rows, cols, icons }
    }

    /// Build a board from an explicit row-major layout.
    ///
    /// Returns `None` if the length does not match the dimensions. Pairing is
    /// not checked; this is meant for fixtures.
    pub fn from_icons(rows: u8, cols: u8, icons: Vec<Icon>) -> Option<Self> {
        if icons.len() != rows as usize * cols as usize {
            return None;
        }
        Some(Self { rows, cols, icons })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Icon at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Pos) -> Option<Icon> {
        if !self.contains(pos) {
            return None;
        }
        self.icons.get(pos.index(self.cols)).copied()
    }

    /// Row-major icons.
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Iterate over every position with its icon, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Icon)> + '_ {
        let cols = self.cols;
        self.icons
            .iter()
            .enumerate()
            .map(move |(i, &icon)| (Pos::from_index(i, cols), icon))
    }

    /// The other position holding the same icon as `pos`.
    pub fn partner_of(&self, pos: Pos) -> Option<Pos> {
        let icon = self.get(pos)?;
        self.iter()
            .find(|&(p, other)| p != pos && other == icon)
            .map(|(p, _)| p)
    }
}

/// First `pairs` icons of the shape×color product, shape-major.
pub(crate) fn pair_pool(shapes: &[Shape], colors: &[IconColor], pairs: usize) -> Vec<Icon> {
    shapes
        .iter()
        .flat_map(|&shape| colors.iter().map(move |&color| Icon::new(shape, color)))
        .take(pairs)
        .collect()
}
