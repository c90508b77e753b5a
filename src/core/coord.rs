//! Board coordinates.
//!
//! A `Coord` names a cell by 0-based `(row, col)`. The grid is always
//! `BOARD_SIZE` x `BOARD_SIZE`; coordinates outside it can be constructed
//! (input layers hand us whatever the pointer hit) and are reported as
//! off-grid rather than rejected at construction.
//!
//! ```
//! use orbit_five::core::Coord;
//!
//! assert!(Coord::new(0, 4).is_on_grid());
//! assert!(!Coord::new(5, 0).is_on_grid());
//! assert!(Coord::CENTER.is_center());
//! assert!(!Coord::CENTER.is_playable());
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 5;

/// Number of cells a piece may ever occupy (everything but the center).
pub const PLAYABLE_CELLS: usize = BOARD_SIZE * BOARD_SIZE - 1;

/// A `(row, col)` board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// The single non-rotating, non-playable cell.
    pub const CENTER: Coord = Coord::new(2, 2);

    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from signed components, `None` when off-grid.
    #[must_use]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_on_grid(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == Self::CENTER.row && self.col == Self::CENTER.col
    }

    /// On the grid and not the center.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.is_on_grid() && !self.is_center()
    }

    /// Row-major index into a flat `BOARD_SIZE * BOARD_SIZE` array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    /// Every on-grid coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Coord::from_index)
    }

    /// Every playable coordinate in row-major order.
    pub fn playable() -> impl Iterator<Item = Coord> {
        Self::all().filter(|c| !c.is_center())
    }

    /// The up-to-eight on-grid cells surrounding this one.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let (row, col) = (i32::from(self.row), i32::from(self.col));
        (-1..=1)
            .flat_map(move |dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter_map(move |(dr, dc)| Coord::checked(row + dr, col + dc))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
