//! Track geometry: the two rotating rings.
//!
//! ## Tracks
//!
//! - **Outer**: the 16 perimeter cells, clockwise from the top-left corner.
//! - **Inner**: the 8 cells around the center, clockwise from `(1,1)`.
//!
//! One rotation shifts every piece one slot toward index 0 of its track,
//! which is a counterclockwise step given these orderings.
//!
//! ## Lookup
//!
//! Track membership is resolved through a dense per-cell table built at
//! compile time. Building it asserts that the two tracks partition the 24
//! non-center cells, so a corrupted geometry fails the build.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, BOARD_SIZE};

/// Perimeter ring, clockwise from the top-left corner.
pub const OUTER_TRACK: [Coord; 16] = [
    Coord::new(0, 0),
    Coord::new(0, 1),
    Coord::new(0, 2),
    Coord::new(0, 3),
    Coord::new(0, 4),
    Coord::new(1, 4),
    Coord::new(2, 4),
    Coord::new(3, 4),
    Coord::new(4, 4),
    Coord::new(4, 3),
    Coord::new(4, 2),
    Coord::new(4, 1),
    Coord::new(4, 0),
    Coord::new(3, 0),
    Coord::new(2, 0),
    Coord::new(1, 0),
];

/// Ring around the center, clockwise from `(1,1)`.
pub const INNER_TRACK: [Coord; 8] = [
    Coord::new(1, 1),
    Coord::new(1, 2),
    Coord::new(1, 3),
    Coord::new(2, 3),
    Coord::new(3, 3),
    Coord::new(3, 2),
    Coord::new(3, 1),
    Coord::new(2, 1),
];

/// Display arrows for outer track slots, in track order.
const OUTER_ARROWS: [Arrow; 16] = [
    Arrow::Right,
    Arrow::Right,
    Arrow::Right,
    Arrow::Right,
    Arrow::Down,
    Arrow::Down,
    Arrow::Down,
    Arrow::Down,
    Arrow::Left,
    Arrow::Left,
    Arrow::Left,
    Arrow::Left,
    Arrow::Up,
    Arrow::Up,
    Arrow::Up,
    Arrow::Up,
];

/// Display arrows for inner track slots, in track order.
const INNER_ARROWS: [Arrow; 8] = [
    Arrow::Right,
    Arrow::Right,
    Arrow::Down,
    Arrow::Down,
    Arrow::Left,
    Arrow::Left,
    Arrow::Up,
    Arrow::Up,
];

/// One of the two rotating rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    Outer,
    Inner,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Outer, Track::Inner];

    /// The track's coordinates in rotation order.
    #[must_use]
    pub const fn cells(self) -> &'static [Coord] {
        match self {
            Track::Outer => &OUTER_TRACK,
            Track::Inner => &INNER_TRACK,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.cells().len()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    const fn arrows(self) -> &'static [Arrow] {
        match self {
            Track::Outer => &OUTER_ARROWS,
            Track::Inner => &INNER_ARROWS,
        }
    }
}

/// Rotation-direction hint shown on empty track cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arrow {
    Right,
    Down,
    Left,
    Up,
}

impl Arrow {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Arrow::Right => '→',
            Arrow::Down => '↓',
            Arrow::Left => '←',
            Arrow::Up => '↑',
        }
    }
}

/// A cell's position within its track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackSlot {
    pub track: Track,
    pub index: u8,
}

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

const fn build_lookup() -> [Option<TrackSlot>; CELL_COUNT] {
    let mut table: [Option<TrackSlot>; CELL_COUNT] = [None; CELL_COUNT];

    let mut t = 0;
    while t < Track::ALL.len() {
        let track = Track::ALL[t];
        let cells = track.cells();
        let mut i = 0;
        while i < cells.len() {
            let coord = cells[i];
            assert!(coord.is_playable(), "track cell must be playable");
            assert!(table[coord.index()].is_none(), "tracks overlap");
            table[coord.index()] = Some(TrackSlot {
                track,
                index: i as u8,
            });
            i += 1;
        }
        t += 1;
    }

    let mut k = 0;
    while k < CELL_COUNT {
        let on_track = table[k].is_some();
        assert!(
            on_track != Coord::from_index(k).is_center(),
            "tracks must cover every non-center cell exactly once"
        );
        k += 1;
    }

    table
}

static LOOKUP: [Option<TrackSlot>; CELL_COUNT] = build_lookup();

/// Track and index of `coord`; `None` for the center and off-grid cells.
#[must_use]
pub fn slot(coord: Coord) -> Option<TrackSlot> {
    if coord.is_on_grid() {
        LOOKUP[coord.index()]
    } else {
        None
    }
}

/// Display arrow for `coord`, `None` where no track runs.
#[must_use]
pub fn arrow(coord: Coord) -> Option<Arrow> {
    slot(coord).map(|s| s.track.arrows()[s.index as usize])
}

/// Where a piece on `coord` sits after one rotation.
///
/// The center and off-grid cells map to themselves.
///
/// ```
/// use orbit_five::board::track::destination;
/// use orbit_five::core::Coord;
///
/// assert_eq!(destination(Coord::new(0, 1)), Coord::new(0, 0));
/// assert_eq!(destination(Coord::new(0, 0)), Coord::new(1, 0));
/// assert_eq!(destination(Coord::CENTER), Coord::CENTER);
/// ```
#[must_use]
pub fn destination(coord: Coord) -> Coord {
    match slot(coord) {
        Some(TrackSlot { track, index }) => {
            let len = track.len();
            track.cells()[(index as usize + len - 1) % len]
        }
        None => coord,
    }
}
