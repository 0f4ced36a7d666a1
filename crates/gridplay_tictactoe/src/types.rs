//! Core domain types for K-in-a-row grids.

use super::action::MoveError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Side X (opens by default).
    X,
    /// Side O.
    O,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a side's marker.
    Occupied(Side),
}

impl Cell {
    /// Returns the side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// A board coordinate, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Coord {
    /// Row index (top is 0).
    pub row: usize,
    /// Column index (left is 0).
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate from a row-major index on a grid of `size` columns.
    ///
    /// The result is not bounds-checked against the row count; an index past
    /// the last cell yields a coordinate the board rejects as out of bounds.
    #[instrument]
    pub fn from_index(index: usize, size: usize) -> Self {
        let size = size.max(1);
        Self::new(index / size, index % size)
    }

    /// Converts to a row-major index on a grid of `size` columns.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Parses `"row col"`, `"row,col"`, or a single row-major index.
    #[instrument]
    pub fn parse(s: &str, size: usize) -> Option<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [index] => index.parse().ok().map(|i| Self::from_index(i, size)),
            [row, col] => Some(Self::new(row.parse().ok()?, col.parse().ok()?)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Board dimensions that cannot form a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DimensionError {
    /// The grid has no cells.
    #[display("Board size must be at least 1")]
    EmptyGrid,

    /// The run length is zero or longer than a row.
    #[display("Run length {} does not fit a {}x{} board", run_length, size, size)]
    RunLength {
        /// Requested board size.
        size: usize,
        /// Requested run length.
        run_length: usize,
    },

    /// The cell count does not fit in memory addressing.
    #[display("Board size {} is too large", _0)]
    TooLarge(usize),

    /// A row in a textual board has the wrong width or an unknown symbol.
    #[display("Malformed board row {}: {:?}", index, row)]
    MalformedRow {
        /// Zero-based row index.
        index: usize,
        /// The offending row text.
        row: String,
    },
}

impl std::error::Error for DimensionError {}

/// Square N×N board for a K-in-a-row game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    run_length: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Side length of the classic board.
    pub const CLASSIC_SIZE: usize = 3;

    /// Creates an empty classic 3x3 board with three-in-a-row.
    pub fn new() -> Self {
        Self {
            size: Self::CLASSIC_SIZE,
            run_length: Self::CLASSIC_SIZE,
            cells: vec![Cell::Empty; Self::CLASSIC_SIZE * Self::CLASSIC_SIZE],
        }
    }

    /// Creates an empty `size`×`size` board won by `run_length` in a row.
    #[instrument]
    pub fn with_dimensions(size: usize, run_length: usize) -> Result<Self, DimensionError> {
        if size == 0 {
            return Err(DimensionError::EmptyGrid);
        }
        if run_length == 0 || run_length > size {
            return Err(DimensionError::RunLength { size, run_length });
        }
        let cells = size
            .checked_mul(size)
            .ok_or(DimensionError::TooLarge(size))?;
        Ok(Self {
            size,
            run_length,
            cells: vec![Cell::Empty; cells],
        })
    }

    /// Builds a board from text rows using `X`, `O`, and `.`/`_`/space for empty.
    #[instrument]
    pub fn from_rows(rows: &[&str], run_length: usize) -> Result<Self, DimensionError> {
        let mut board = Self::with_dimensions(rows.len(), run_length)?;
        for (index, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != board.size {
                return Err(DimensionError::MalformedRow {
                    index,
                    row: row.to_string(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = match symbol {
                    'X' | 'x' => Cell::Occupied(Side::X),
                    'O' | 'o' => Cell::Occupied(Side::O),
                    '.' | '_' | ' ' => Cell::Empty,
                    _ => {
                        return Err(DimensionError::MalformedRow {
                            index,
                            row: row.to_string(),
                        });
                    }
                };
                board.cells[index * board.size + col] = cell;
            }
        }
        Ok(board)
    }

    /// Returns an empty board with the same dimensions.
    pub fn cleared(&self) -> Board {
        Self {
            size: self.size,
            run_length: self.run_length,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of aligned markers needed to win.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Returns true if the coordinate lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Gets the cell at the coordinate, or `None` off the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            self.cells.get(coord.to_index(self.size)).copied()
        } else {
            None
        }
    }

    /// Gets the cell at the coordinate.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` off the grid.
    pub fn cell_at(&self, coord: Coord) -> Result<Cell, MoveError> {
        self.get(coord).ok_or(MoveError::OutOfBounds(coord))
    }

    /// Checks if a cell is on the grid and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Returns a new board with `side` placed at `coord`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` off the grid, `CellOccupied` if the cell is taken.
    pub fn place(&self, coord: Coord, side: Side) -> Result<Board, MoveError> {
        match self.cell_at(coord)? {
            Cell::Occupied(_) => Err(MoveError::CellOccupied(coord)),
            Cell::Empty => {
                let mut next = self.clone();
                next.cells[coord.to_index(self.size)] = Cell::Occupied(side);
                Ok(next)
            }
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coord::new(row, col)))
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|c| self.is_empty(*c)).collect()
    }

    /// Number of cells holding `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Cells grouped by row.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their one-based index so a player can type it.
    pub fn display(&self) -> String {
        let width = (self.size * self.size).to_string().len();
        let mut result = String::new();
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| {
                    let coord = Coord::new(row, col);
                    let symbol = match self.cells[coord.to_index(self.size)] {
                        Cell::Empty => coord.to_index(self.size).to_string(),
                        Cell::Occupied(side) => side.to_string(),
                    };
                    format!("{:>width$}", symbol)
                })
                .collect();
            result.push_str(&line.join("|"));
            if row + 1 < self.size {
                result.push('\n');
                result.push_str(&vec!["-".repeat(width); self.size].join("+"));
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
