//! The 5x5 occupancy grid.
//!
//! Cells are stored row-major in a fixed array. The center never holds a
//! piece; writes to it are a contract breach.
//!
//! Boards render to and parse from a compact text form, one row per line:
//! `W` white, `B` black, `.` empty, `+` the center.
//!
//! ```
//! use orbit_five::board::Board;
//! use orbit_five::core::{Cell, Coord};
//!
//! let board: Board = "W....\n.....\n..+..\n.....\n....B".parse().unwrap();
//! assert_eq!(board.get(Coord::new(0, 0)), Cell::White);
//! assert_eq!(board.get(Coord::new(4, 4)), Cell::Black);
//! assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Cell, Color, Coord, BOARD_SIZE, PLAYABLE_CELLS};

/// Grid of cell occupancy values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if !raw.cells[Coord::CENTER.index()].is_empty() {
            return Err(BoardParseError::CenterOccupied);
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupancy at `coord`.
    ///
    /// # Panics
    ///
    /// If `coord` is off the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        assert!(coord.is_on_grid(), "coordinate {coord} is off the board");
        self.cells[coord.index()]
    }

    /// Overwrite the occupancy at `coord`.
    ///
    /// # Panics
    ///
    /// If `coord` is off the grid, or a piece is written to the center.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        assert!(coord.is_on_grid(), "coordinate {coord} is off the board");
        assert!(
            !(coord.is_center() && !cell.is_empty()),
            "the center cell cannot hold a piece"
        );
        self.cells[coord.index()] = cell;
    }

    /// True if `coord` is playable and empty.
    #[must_use]
    pub fn is_open(&self, coord: Coord) -> bool {
        coord.is_playable() && self.get(coord).is_empty()
    }

    /// Empty playable cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::playable().filter(move |&c| self.get(c).is_empty())
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of pieces of either color.
    #[must_use]
    pub fn stones(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Every playable cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.stones() == PLAYABLE_CELLS
    }

    /// Pieces of `color` in the up-to-eight cells around `coord`.
    #[must_use]
    pub fn neighbors_of_color(&self, coord: Coord, color: Color) -> usize {
        let cell = Cell::from(color);
        coord.neighbors().filter(|&n| self.get(n) == cell).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row as u8, col as u8);
                let ch = match self.get(coord) {
                    Cell::White => 'W',
                    Cell::Black => 'B',
                    Cell::Empty if coord.is_center() => '+',
                    Cell::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Text that does not describe a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },
    #[error("unexpected character {0:?}")]
    BadChar(char),
    #[error("the center cell cannot hold a piece")]
    CenterOccupied,
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Whitespace is ignored, so rows may be split across lines or not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardParseError::WrongCellCount {
                expected: BOARD_SIZE * BOARD_SIZE,
                found: chars.len(),
            });
        }

        let mut board = Board::new();
        for (i, ch) in chars.into_iter().enumerate() {
            let coord = Coord::from_index(i);
            let cell = match ch {
                'W' | 'w' => Cell::White,
                'B' | 'b' => Cell::Black,
                '.' | '+' => Cell::Empty,
                other => return Err(BoardParseError::BadChar(other)),
            };
            if coord.is_center() && !cell.is_empty() {
                return Err(BoardParseError::CenterOccupied);
            }
            board.cells[i] = cell;
        }
        Ok(board)
    }
}
