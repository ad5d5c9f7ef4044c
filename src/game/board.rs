use std::fmt;

use super::{Dimensions, Player};
use crate::error::MoveError;

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Ray directions as (row step, column step): right, down, down-right, down-left.
///
/// Scanning these from every cell covers all lines on the board, since each
/// line has a start cell from which one of these rays reaches its other end.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// `WIN_LENGTH` in-bounds (row, column) positions along one direction.
pub type Ray = [(usize, usize); WIN_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Player),
}

/// A `width` x `height` grid, stored row-major. Row 0 is the top.
///
/// Pieces only enter through [`Board::drop_piece`], so every column fills
/// bottom-up without gaps and an occupied cell is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: vec![Cell::Empty; dims.area()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width()
    }

    pub fn height(&self) -> usize {
        self.dims.height()
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cell(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) outside {} board", self.dims))
    }

    /// Get the cell at a position, or `None` if it is outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height() && col < self.width() {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width() {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Row a piece dropped into `col` would land on, or `None` if the column
    /// is full.
    pub fn find_landing_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(col)?;
        Ok((0..self.height())
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty))
    }

    /// Drop a piece in a column, returns the row where it landed or `None`
    /// (board untouched) if the column is full.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Option<usize>, MoveError> {
        let Some(row) = self.find_landing_row(col)? else {
            return Ok(None);
        };
        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        Ok(Some(row))
    }

    /// True when every cell of the top row is taken.
    ///
    /// Columns fill without gaps, so this is equivalent to the board being full.
    pub fn is_top_row_full(&self) -> bool {
        (0..self.width()).all(|col| self.is_column_full(col))
    }

    /// Columns that can still accept a piece, left to right
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.width())
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check whether `player` owns four aligned cells anywhere on the board.
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_ray(player).is_some()
    }

    /// First ray (scanning rows top to bottom, columns left to right, then
    /// [`DIRECTIONS`] in order) whose cells all belong to `player`.
    pub fn winning_ray(&self, player: Player) -> Option<Ray> {
        let target = player.to_cell();
        for row in 0..self.height() {
            for col in 0..self.width() {
                for dir in DIRECTIONS {
                    if let Some(ray) = self.ray(row, col, dir) {
                        if ray.iter().all(|&(r, c)| self.get(r, c) == target) {
                            return Some(ray);
                        }
                    }
                }
            }
        }
        None
    }

    /// Positions of the ray starting at (row, col), or `None` if any of them
    /// leaves the board.
    fn ray(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<Ray> {
        let mut ray = [(0, 0); WIN_LENGTH];
        for (step, slot) in ray.iter_mut().enumerate() {
            let step = step as isize;
            let r = row.checked_add_signed(dr * step)?;
            let c = col.checked_add_signed(dc * step)?;
            if r >= self.height() || c >= self.width() {
                return None;
            }
            *slot = (r, c);
        }
        Some(ray)
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.width() {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width(),
            });
        }
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width() + col
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

/// One line per row, `.` for empty and the player id otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for col in 0..self.width() {
                match self.get(row, col) {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Taken(player) => write!(f, "{}", player.id())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
