//! Board representation.
//!
//! ## CellIndex
//!
//! Validated index into the board, `0..=8` in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! ## Board
//!
//! A fixed array of nine cells. Boards are small `Copy` values; every move
//! produces a new board via `with_mark` and leaves the previous one intact,
//! which is what lets the history keep every snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use super::player::Mark;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the board.
pub const SIDE: usize = 3;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// Check if the cell holds no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// A validated board position in `0..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellIndex(u8);

impl CellIndex {
    /// Create a cell index, rejecting values outside `0..=8`.
    pub fn new(index: usize) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::InvalidCellIndex { index })
        }
    }

    /// Compile-time constructor for known-good indices.
    pub(crate) const fn from_const(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index out of range");
        Self(index as u8)
    }

    /// Create a cell index from a row and column, each in `0..3`.
    pub fn from_row_col(row: usize, col: usize) -> Result<Self> {
        if row >= SIDE || col >= SIDE {
            return Err(EngineError::InvalidCellIndex {
                index: row.saturating_mul(SIDE).saturating_add(col),
            });
        }
        Self::new(row * SIDE + col)
    }

    /// Raw index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / SIDE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % SIDE
    }

    /// Iterate over all nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = CellIndex> + Clone {
        (0..CELL_COUNT as u8).map(CellIndex)
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = EngineError;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl From<CellIndex> for usize {
    fn from(cell: CellIndex) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row() + 1, self.col() + 1)
    }
}

/// A single mark placed on a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub cell: CellIndex,
    pub mark: Mark,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.mark, self.cell)
    }
}

/// The 3x3 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// All cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    #[must_use]
    pub const fn get(&self, cell: CellIndex) -> Cell {
        self.cells[cell.index()]
    }

    #[must_use]
    pub const fn is_empty_at(&self, cell: CellIndex) -> bool {
        self.get(cell).is_empty()
    }

    /// Copy of this board with `mark` placed on `cell`.
    ///
    /// Does not check occupancy; callers validate before placing.
    #[must_use]
    pub fn with_mark(&self, cell: CellIndex, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[cell.index()] = Cell::Marked(mark);
        Self { cells }
    }

    /// Number of cells holding a mark.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Empty cells in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[CellIndex; CELL_COUNT]> {
        CellIndex::all().filter(|&c| self.is_empty_at(c)).collect()
    }

    /// The single placement that turns `prev` into `self`.
    ///
    /// Returns `None` unless exactly one cell went from empty to marked and
    /// every other cell is unchanged.
    #[must_use]
    pub fn diff(&self, prev: &Board) -> Option<Placement> {
        let mut placement = None;
        for cell in CellIndex::all() {
            match (prev.get(cell), self.get(cell)) {
                (before, after) if before == after => {}
                (Cell::Empty, Cell::Marked(mark)) if placement.is_none() => {
                    placement = Some(Placement { cell, mark });
                }
                _ => return None,
            }
        }
        placement
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * SIDE + col] {
                    Cell::Empty => write!(f, "   ")?,
                    Cell::Marked(mark) => write!(f, " {} ", mark)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_cell_index_bounds() {
        for i in 0..9 {
            assert_eq!(CellIndex::new(i).unwrap().index(), i);
        }
        assert!(matches!(
            CellIndex::new(9),
            Err(EngineError::InvalidCellIndex { index: 9 })
        ));
        assert!(CellIndex::new(usize::MAX).is_err());
    }

    #[test]
    fn test_cell_index_row_col() {
        let c = idx(5);
        assert_eq!(c.row(), 1);
        assert_eq!(c.col(), 2);
        assert_eq!(CellIndex::from_row_col(2, 1).unwrap(), idx(7));
        assert!(CellIndex::from_row_col(3, 0).is_err());
        assert!(CellIndex::from_row_col(0, 3).is_err());
        assert_eq!(format!("{}", idx(0)), "(1, 1)");
    }

    #[test]
    fn test_cell_index_all() {
        let all: Vec<usize> = CellIndex::all().map(CellIndex::index).collect();
        assert_eq!(all, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 9);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_with_mark_copies() {
        let board = Board::empty();
        let next = board.with_mark(idx(4), Mark::X);

        assert!(board.is_empty_at(idx(4)));
        assert_eq!(next.get(idx(4)), Cell::Marked(Mark::X));
        assert_eq!(next.occupied_count(), 1);
        assert!(!next.empty_cells().contains(&idx(4)));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::empty();
        for c in CellIndex::all() {
            assert!(!board.is_full());
            board = board.with_mark(c, Mark::for_ply(c.index(), Mark::X));
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_diff_single_placement() {
        let prev = Board::empty().with_mark(idx(0), Mark::X);
        let next = prev.with_mark(idx(8), Mark::O);

        assert_eq!(
            next.diff(&prev),
            Some(Placement { cell: idx(8), mark: Mark::O })
        );
        assert_eq!(prev.diff(&prev), None);
    }

    #[test]
    fn test_diff_rejects_multiple_or_removed() {
        let prev = Board::empty();
        let two = prev.with_mark(idx(0), Mark::X).with_mark(idx(1), Mark::O);
        assert_eq!(two.diff(&prev), None);

        // A mark disappearing is not a placement.
        assert_eq!(prev.diff(&prev.with_mark(idx(3), Mark::X)), None);

        // Overwriting a mark is not a placement either.
        let x = prev.with_mark(idx(3), Mark::X);
        let o = prev.with_mark(idx(3), Mark::O);
        assert_eq!(o.diff(&x), None);
    }

    #[test]
    fn test_display() {
        let board = Board::empty()
            .with_mark(idx(0), Mark::X)
            .with_mark(idx(4), Mark::O);
        let expected = " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   ";
        assert_eq!(format!("{}", board), expected);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::empty().with_mark(idx(2), Mark::O);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_cell_index_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<CellIndex>("3").unwrap(), idx(3));
        assert!(serde_json::from_str::<CellIndex>("9").is_err());
    }
}
